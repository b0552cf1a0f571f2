/// Data layer: core types, loading, the alignment pipeline, and export.
///
/// Architecture:
/// ```text
///  left.csv        right.csv
///     │               │
///     ▼               ▼
///  ┌──────────────────────┐
///  │        loader         │  parse + validate → Dataset (per side)
///  └──────────────────────┘
///     │               │
///     ▼               ▼
///  ┌──────────────────────┐
///  │       pipeline        │  group by angle, align onto 0.1 s axis,
///  └──────────────────────┘  std dev + breakpoints → Analysis
///             │
///             ▼
///  ┌──────────────────────┐
///  │        export         │  summary table → summary.csv
///  └──────────────────────┘
/// ```

pub mod export;
pub mod loader;
pub mod model;
pub mod pipeline;
