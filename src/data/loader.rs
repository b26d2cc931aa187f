use std::path::Path;

use super::error::TraceError;
use super::filter::filter_and_parse;
use super::model::TraceDataset;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a trace file into its lines, without terminators.
///
/// The whole file must be valid UTF-8; anything else is reported as
/// [`TraceError::Io`].
pub fn load(path: &Path) -> Result<Vec<String>, TraceError> {
    let text = std::fs::read_to_string(path).map_err(|source| TraceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.lines().map(str::to_owned).collect())
}

/// Load, filter and parse a trace file, then derive the counter series.
pub fn load_file(path: &Path) -> Result<TraceDataset, TraceError> {
    let lines = load(path)?;
    let samples = filter_and_parse(&lines)?;
    let dataset = TraceDataset::from_samples(&samples).with_source(path, lines.len());

    log::info!(
        "Loaded {} samples from {} lines of {}",
        dataset.len(),
        dataset.lines_scanned,
        path.display()
    );
    Ok(dataset)
}
