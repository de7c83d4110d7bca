//! Chart assembly shared by the PNG export and the dashboard plot.
//!
//! Nothing here computes TL values: curves come in already smoothed and
//! leave as coloured point lists. Clipping to the visible frequency domain
//! happens on copies of the points.

pub mod png;

use eframe::egui::Color32;

use crate::data::model::SmoothedCurve;

/// Lower bound of the visible frequency axis, in Hz.
pub const FREQ_MIN_HZ: f64 = 100.0;
/// Upper bound of the visible frequency axis, in Hz.
pub const FREQ_MAX_HZ: f64 = 5000.0;
/// Labelled frequency ticks.
pub const FREQ_TICKS_HZ: [f64; 6] = [100.0, 200.0, 500.0, 1000.0, 2000.0, 5000.0];

/// Opacity of the narrow-band trace drawn under each smoothed curve.
pub const RAW_ALPHA: f32 = 0.15;

// ---------------------------------------------------------------------------
// Chart layout
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Visible frequency domain; the axis is logarithmic.
    pub x_range: (f64, f64),
    pub x_ticks: Vec<f64>,
    /// Fixed TL domain, or `None` to fit the data.
    pub y_range: Option<(f64, f64)>,
}

impl ChartSpec {
    /// Layout of the batch comparison image.
    pub fn comparison(window: usize) -> Self {
        Self {
            title: format!("TL comparison: narrow bands with {window} Hz moving average"),
            x_label: "Frequency (Hz)".to_string(),
            y_label: "Transmission Loss (dB)".to_string(),
            x_range: (FREQ_MIN_HZ, FREQ_MAX_HZ),
            x_ticks: FREQ_TICKS_HZ.to_vec(),
            y_range: Some((0.0, 60.0)),
        }
    }

    /// Layout of the dashboard chart: same x axis, auto-scaled y.
    pub fn dashboard() -> Self {
        Self {
            title: "Panel comparison".to_string(),
            x_label: "Frequency (Hz)".to_string(),
            y_label: "Transmission loss TL (dB)".to_string(),
            x_range: (FREQ_MIN_HZ, FREQ_MAX_HZ),
            x_ticks: FREQ_TICKS_HZ.to_vec(),
            y_range: None,
        }
    }

    /// The y domain to draw: the fixed one, or a padded fit of `traces`.
    pub fn resolve_y_range(&self, traces: &[Trace]) -> (f64, f64) {
        self.y_range
            .or_else(|| auto_y_range(traces, self.x_range))
            .unwrap_or((0.0, 60.0))
    }
}

// ---------------------------------------------------------------------------
// Traces
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    /// Narrow-band data, thin and faint.
    Raw,
    /// Moving average, bold and listed in the legend.
    Smoothed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub label: String,
    pub color: Color32,
    pub kind: TraceKind,
    pub points: Vec<(f64, f64)>,
}

impl Trace {
    pub fn width(&self) -> f32 {
        match self.kind {
            TraceKind::Raw => 0.5,
            TraceKind::Smoothed => 2.0,
        }
    }

    pub fn opacity(&self) -> f32 {
        match self.kind {
            TraceKind::Raw => RAW_ALPHA,
            TraceKind::Smoothed => 1.0,
        }
    }
}

/// Two traces per curve, raw first, both in the curve's colour.
///
/// `colors[i]` belongs to `curves[i]`, so curves sharing a label still get
/// their own colour; curves beyond the end of `colors` are drawn grey.
/// `window` only feeds the legend text of the smoothed trace.
pub fn assemble_traces(curves: &[SmoothedCurve], colors: &[Color32], window: usize) -> Vec<Trace> {
    curves
        .iter()
        .enumerate()
        .flat_map(|(i, curve)| {
            let color = colors.get(i).copied().unwrap_or(Color32::GRAY);
            [
                Trace {
                    label: curve.label.clone(),
                    color,
                    kind: TraceKind::Raw,
                    points: curve.raw_points(),
                },
                Trace {
                    label: format!("{} ({window} Hz avg)", curve.label),
                    color,
                    kind: TraceKind::Smoothed,
                    points: curve.smoothed_points(),
                },
            ]
        })
        .collect()
}

/// Points whose frequency lies inside `[min, max]`.
pub fn clip_to_domain(points: &[(f64, f64)], min: f64, max: f64) -> Vec<(f64, f64)> {
    points
        .iter()
        .copied()
        .filter(|&(f, _)| f >= min && f <= max)
        .collect()
}

/// Min/max TL over the points visible in `x_range`, padded by 5 %.
pub fn auto_y_range(traces: &[Trace], x_range: (f64, f64)) -> Option<(f64, f64)> {
    let (lo, hi) = traces
        .iter()
        .flat_map(|t| t.points.iter())
        .filter(|&&(f, tl)| f >= x_range.0 && f <= x_range.1 && tl.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, tl)| {
            (lo.min(tl), hi.max(tl))
        });
    if !lo.is_finite() || !hi.is_finite() {
        return None;
    }
    let pad = ((hi - lo) * 0.05).max(1.0);
    Some((lo - pad, hi + pad))
}

/// Tick text: plain integers, no exponent notation.
pub fn tick_label(hz: f64) -> String {
    format!("{hz:.0}")
}
