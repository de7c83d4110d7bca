/// Data layer: core types, loading, and smoothing.
///
/// Architecture:
/// ```text
///  <panel>_NarrowBands.txt  (tab-separated, header row)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Measurement
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  smooth   │  centered moving average → SmoothedCurve
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod smooth;
