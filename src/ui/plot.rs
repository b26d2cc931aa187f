use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Trace plot (central panel)
// ---------------------------------------------------------------------------

/// Draw every visible series against the sample index.
pub fn trace_plot(ui: &mut Ui, state: &AppState) {
    let dataset = &state.dataset;

    Plot::new("trace_plot")
        .legend(Legend::default())
        .x_axis_label("sample")
        .y_axis_label("value")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for kind in state.visible_series() {
                let points = PlotPoints::from(dataset.points(kind));
                let line = Line::new(points)
                    .name(kind.name())
                    .color(state.colors.color_for(kind))
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}
