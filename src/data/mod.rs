/// Data layer: trace types, loading, filtering and the derived series.
///
/// Architecture:
/// ```text
///   trace file ("tmp")
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read file → lines
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  keep TRACE lines without "value" → Vec<Sample>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  derive   │  counter backward difference
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ TraceDataset │  one column per series
///   └──────────────┘
/// ```

pub mod derive;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
