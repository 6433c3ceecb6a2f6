/// Data layer: core types, loading, and shape validation.
///
/// Architecture:
/// ```text
///  .dat / .txt / .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  parallel x / y columns, n ≥ 1
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  check    │  reference vs obtained point counts
///   └──────────┘
/// ```

pub mod check;
pub mod loader;
pub mod model;
