use std::path::{Path, PathBuf};

use crate::color::SeriesColors;
use crate::data::model::{SeriesKind, TraceDataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Currently displayed trace.
    pub dataset: TraceDataset,

    /// Per-series visibility, indexed by [`SeriesKind::index`].
    pub visible: [bool; 4],

    /// Series colours.
    pub colors: SeriesColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: TraceDataset) -> Self {
        Self {
            dataset,
            visible: [true; 4],
            colors: SeriesColors::default(),
            status_message: None,
        }
    }

    /// Replace the displayed trace. Visibility toggles are kept.
    pub fn set_dataset(&mut self, dataset: TraceDataset) {
        self.dataset = dataset;
        self.status_message = None;
    }

    /// Record a failed load without touching the displayed trace.
    pub fn set_error(&mut self, err: &anyhow::Error) {
        log::error!("Failed to load file: {err:#}");
        self.status_message = Some(format!("Error: {err:#}"));
    }

    /// Path the current trace came from, if any.
    pub fn source(&self) -> Option<PathBuf> {
        self.dataset.source.clone()
    }

    /// Directory the open dialog starts in: the current file's folder, if
    /// it has a non-empty one.
    pub fn dialog_start_dir(&self) -> Option<PathBuf> {
        self.dataset
            .source
            .as_deref()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }

    pub fn is_visible(&self, kind: SeriesKind) -> bool {
        self.visible[kind.index()]
    }

    pub fn set_visible(&mut self, kind: SeriesKind, visible: bool) {
        self.visible[kind.index()] = visible;
    }

    /// Series currently drawn, in legend order.
    pub fn visible_series(&self) -> impl Iterator<Item = SeriesKind> + '_ {
        SeriesKind::ALL
            .into_iter()
            .filter(move |&kind| self.is_visible(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Sample;

    fn dataset(n: usize) -> TraceDataset {
        let samples: Vec<Sample> = (0..n)
            .map(|i| Sample {
                position: i as f64,
                objective: 0.0,
                output: 0.0,
                counter: i as f64,
            })
            .collect();
        TraceDataset::from_samples(&samples)
    }

    #[test]
    fn all_series_visible_initially() {
        let state = AppState::new(dataset(3));
        assert_eq!(state.visible_series().collect::<Vec<_>>(), SeriesKind::ALL);
    }

    #[test]
    fn hiding_a_series() {
        let mut state = AppState::new(dataset(3));
        state.set_visible(SeriesKind::Output, false);
        assert!(!state.is_visible(SeriesKind::Output));
        assert_eq!(
            state.visible_series().collect::<Vec<_>>(),
            [SeriesKind::Position, SeriesKind::Objective, SeriesKind::CounterDeriv]
        );
    }

    #[test]
    fn dialog_starts_next_to_current_file() {
        let state = AppState::new(dataset(1).with_source("/captures/bench/tmp", 1));
        assert_eq!(state.dialog_start_dir(), Some(PathBuf::from("/captures/bench")));
    }

    #[test]
    fn bare_file_name_has_no_start_dir() {
        let state = AppState::new(dataset(1).with_source("tmp", 1));
        assert_eq!(state.dialog_start_dir(), None);
        assert_eq!(AppState::new(dataset(0)).dialog_start_dir(), None);
    }

    #[test]
    fn error_keeps_dataset_and_new_dataset_clears_error() {
        let mut state = AppState::new(dataset(3));
        state.set_error(&anyhow::anyhow!("boom"));
        assert_eq!(state.dataset.len(), 3);
        assert_eq!(state.status_message.as_deref(), Some("Error: boom"));

        state.set_visible(SeriesKind::Position, false);
        state.set_dataset(dataset(5));
        assert_eq!(state.dataset.len(), 5);
        assert!(state.status_message.is_none());
        assert!(!state.is_visible(SeriesKind::Position));
    }
}
