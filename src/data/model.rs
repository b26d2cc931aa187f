use std::fmt;
use std::path::PathBuf;

use super::derive::compute_counter_derivative;

// ---------------------------------------------------------------------------
// Sample – one qualifying TRACE line
// ---------------------------------------------------------------------------

/// The four values carried by a `TRACE` line, in the order the controller
/// prints them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Measured motor position.
    pub position: f64,
    /// Setpoint the controller is driving towards.
    pub objective: f64,
    /// Control output sent to the driver.
    pub output: f64,
    /// Raw update counter. Only its derivative is plotted.
    pub counter: f64,
}

// ---------------------------------------------------------------------------
// SeriesKind – the plotted series
// ---------------------------------------------------------------------------

/// The series drawn on the chart, in legend order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeriesKind {
    Position,
    Objective,
    Output,
    CounterDeriv,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 4] = [
        SeriesKind::Position,
        SeriesKind::Objective,
        SeriesKind::Output,
        SeriesKind::CounterDeriv,
    ];

    /// Legend label.
    pub fn name(self) -> &'static str {
        match self {
            SeriesKind::Position => "position",
            SeriesKind::Objective => "objective",
            SeriesKind::Output => "output",
            SeriesKind::CounterDeriv => "counterderiv",
        }
    }

    /// Position of this series in [`SeriesKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// TraceDataset – the complete loaded trace
// ---------------------------------------------------------------------------

/// Column-oriented view of all retained samples plus the derived series.
///
/// Every column has the same length; index `i` is the `i`-th retained
/// `TRACE` line in file order.
#[derive(Debug, Clone, Default)]
pub struct TraceDataset {
    /// File the dataset was read from (None for in-memory input).
    pub source: Option<PathBuf>,
    /// Number of input lines scanned, qualifying or not. Zero until
    /// [`TraceDataset::with_source`] records it.
    pub lines_scanned: usize,
    pub position: Vec<f64>,
    pub objective: Vec<f64>,
    pub output: Vec<f64>,
    pub counter: Vec<f64>,
    pub counter_deriv: Vec<f64>,
}

impl TraceDataset {
    /// Split samples into columns and compute the counter derivative.
    pub fn from_samples(samples: &[Sample]) -> Self {
        TraceDataset {
            source: None,
            lines_scanned: 0,
            position: samples.iter().map(|s| s.position).collect(),
            objective: samples.iter().map(|s| s.objective).collect(),
            output: samples.iter().map(|s| s.output).collect(),
            counter: samples.iter().map(|s| s.counter).collect(),
            counter_deriv: compute_counter_derivative(samples),
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>, lines_scanned: usize) -> Self {
        self.source = Some(source.into());
        self.lines_scanned = lines_scanned;
        self
    }

    /// Values of one plotted series.
    pub fn series(&self, kind: SeriesKind) -> &[f64] {
        match kind {
            SeriesKind::Position => &self.position,
            SeriesKind::Objective => &self.objective,
            SeriesKind::Output => &self.output,
            SeriesKind::CounterDeriv => &self.counter_deriv,
        }
    }

    /// `[x, y]` pairs with the sample index as x.
    pub fn points(&self, kind: SeriesKind) -> Vec<[f64; 2]> {
        self.series(kind)
            .iter()
            .enumerate()
            .map(|(i, &y)| [i as f64, y])
            .collect()
    }

    /// Minimum and maximum of a series, ignoring NaN. None when empty.
    pub fn range(&self, kind: SeriesKind) -> Option<(f64, f64)> {
        self.series(kind)
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.position.len()
    }

    /// Whether no TRACE line qualified.
    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(position: f64, counter: f64) -> Sample {
        Sample {
            position,
            objective: 0.0,
            output: 0.0,
            counter,
        }
    }

    #[test]
    fn columns_share_length() {
        let ds = TraceDataset::from_samples(&[sample(1.0, 5.0), sample(2.0, 9.0)]);
        assert_eq!(ds.len(), 2);
        for kind in SeriesKind::ALL {
            assert_eq!(ds.series(kind).len(), 2, "{kind}");
        }
        assert_eq!(ds.counter, vec![5.0, 9.0]);
        assert_eq!(ds.counter_deriv, vec![0.0, 4.0]);
    }

    #[test]
    fn line_count_comes_from_source() {
        let ds = TraceDataset::from_samples(&[sample(1.0, 0.0), sample(2.0, 1.0)]);
        assert_eq!(ds.lines_scanned, 0);
        assert!(ds.source.is_none());

        let ds = ds.with_source("tmp", 7);
        assert_eq!(ds.lines_scanned, 7);
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn points_are_indexed_from_zero() {
        let ds = TraceDataset::from_samples(&[sample(3.0, 0.0), sample(-1.0, 0.0)]);
        assert_eq!(
            ds.points(SeriesKind::Position),
            vec![[0.0, 3.0], [1.0, -1.0]]
        );
    }

    #[test]
    fn empty_dataset() {
        let ds = TraceDataset::from_samples(&[]);
        assert!(ds.is_empty());
        assert_eq!(ds.range(SeriesKind::Output), None);
        assert!(ds.points(SeriesKind::CounterDeriv).is_empty());
    }

    #[test]
    fn range_skips_nan() {
        let ds = TraceDataset::from_samples(&[
            sample(f64::NAN, 0.0),
            sample(-4.0, 0.0),
            sample(7.5, 0.0),
        ]);
        assert_eq!(ds.range(SeriesKind::Position), Some((-4.0, 7.5)));
    }

    #[test]
    fn legend_names() {
        let names: Vec<&str> = SeriesKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, ["position", "objective", "output", "counterderiv"]);
        assert_eq!(SeriesKind::CounterDeriv.index(), 3);
    }
}
