pub mod panels;
pub mod plot;

use eframe::egui;

use crate::app::TracePlotApp;
use crate::data::model::TraceDataset;

/// Open the chart window and block until the user closes it.
pub fn render(dataset: TraceDataset, title: &str) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(|_cc| Ok(Box::new(TracePlotApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("chart window failed: {e}"))
}
