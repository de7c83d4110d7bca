use eframe::egui::Ui;
use egui_plot::{Corner, GridInput, GridMark, Legend, Line, Plot, PlotPoints};

use tl_compare::render::{clip_to_domain, tick_label, ChartSpec, TraceKind};

use crate::state::AppState;

const PLOT_HEIGHT: f32 = 550.0;

// ---------------------------------------------------------------------------
// TL plot (central panel)
// ---------------------------------------------------------------------------

/// Render the combined TL chart.
///
/// egui_plot has no logarithmic axis, so x is plotted as `log10(Hz)` and the
/// grid and tick labels are mapped back to Hz.
pub fn tl_plot(ui: &mut Ui, state: &AppState) {
    let spec = ChartSpec::dashboard();
    let (x_min, x_max) = spec.x_range;
    let ticks: Vec<f64> = spec.x_ticks.iter().map(|t| t.log10()).collect();

    let mut plot = Plot::new("tl_plot")
        .height(PLOT_HEIGHT)
        .legend(Legend::default().position(Corner::LeftTop))
        .x_axis_label(spec.x_label.clone())
        .y_axis_label(spec.y_label.clone())
        .x_grid_spacer(move |_input: GridInput| {
            ticks
                .iter()
                .map(|&value| GridMark { value, step_size: 1.0 })
                .collect()
        })
        .x_axis_formatter(|mark, _range| tick_label(10f64.powf(mark.value)))
        .label_formatter(|name, value| {
            let hz = 10f64.powf(value.x);
            if name.is_empty() {
                format!("{hz:.0} Hz\n{:.1} dB", value.y)
            } else {
                format!("{name}\n{hz:.0} Hz\n{:.1} dB", value.y)
            }
        })
        .include_x(x_min.log10())
        .include_x(x_max.log10());
    if let Some((y_min, y_max)) = spec.y_range {
        plot = plot.include_y(y_min).include_y(y_max);
    }

    plot.show(ui, |plot_ui| {
        for trace in &state.traces {
            if trace.kind == TraceKind::Raw && !state.show_raw {
                continue;
            }

            let points: PlotPoints = clip_to_domain(&trace.points, x_min, x_max)
                .into_iter()
                .map(|(hz, tl)| [hz.log10(), tl])
                .collect();

            let mut line = Line::new(points)
                .color(trace.color.gamma_multiply(trace.opacity()))
                .width(trace.width() + 0.5);
            if trace.kind == TraceKind::Smoothed {
                line = line.name(&trace.label);
            }
            plot_ui.line(line);
        }
    });
}
