use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::error::{Result, TlError};

use super::{clip_to_domain, tick_label, ChartSpec, Trace, TraceKind};

/// Figure height the font and line sizes below are tuned for.
const REFERENCE_HEIGHT: f64 = 800.0;

/// Write `traces` as a PNG chart of `size` pixels.
pub fn render(path: &Path, spec: &ChartSpec, traces: &[Trace], size: (u32, u32)) -> Result<()> {
    draw(path, spec, traces, size).map_err(|e| TlError::Render {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    log::info!(
        "Wrote {} traces to {} ({}x{})",
        traces.len(),
        path.display(),
        size.0,
        size.1
    );
    Ok(())
}

fn draw(
    path: &Path,
    spec: &ChartSpec,
    traces: &[Trace],
    size: (u32, u32),
) -> std::result::Result<(), Box<dyn Error>> {
    let scale = f64::from(size.1) / REFERENCE_HEIGHT;
    let font = |pt: f64| pt * scale;
    let px = |v: f64| ((v * scale).round() as u32).max(1);

    let (x_min, x_max) = spec.x_range;
    let (y_min, y_max) = spec.resolve_y_range(traces);

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            &spec.title,
            ("sans-serif", font(22.0)).into_font().style(FontStyle::Bold),
        )
        .margin(px(15.0))
        .x_label_area_size(px(50.0))
        .y_label_area_size(px(65.0))
        .build_cartesian_2d(
            (x_min..x_max)
                .log_scale()
                .with_key_points(spec.x_ticks.clone()),
            y_min..y_max,
        )?;

    chart
        .configure_mesh()
        .x_desc(&spec.x_label)
        .y_desc(&spec.y_label)
        .x_label_formatter(&|hz: &f64| tick_label(*hz))
        .label_style(("sans-serif", font(14.0)))
        .axis_desc_style(("sans-serif", font(16.0)))
        .bold_line_style(BLACK.mix(0.3))
        .light_line_style(BLACK.mix(0.1))
        .draw()?;

    for trace in traces {
        let base = RGBColor(trace.color.r(), trace.color.g(), trace.color.b());
        let style = base
            .mix(f64::from(trace.opacity()))
            .stroke_width(px(f64::from(trace.width())));
        let points = clip_to_domain(&trace.points, x_min, x_max);

        let series = chart.draw_series(LineSeries::new(points, style))?;
        if trace.kind == TraceKind::Smoothed {
            let legend_len = px(20.0) as i32;
            series
                .label(&trace.label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_len, y)], style));
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(("sans-serif", font(13.0)))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
