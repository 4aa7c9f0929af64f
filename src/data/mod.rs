/// Data layer: core types, loading, filtering, and reshaping.
///
/// Architecture:
/// ```text
///  guinea_pig_*.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  ordered columns, rows of CellValue
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐   ┌──────────┐
///   │  filter   │   │ reshape   │  equality subset / wide → tidy
///   └──────────┘   └──────────┘
/// ```
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod reshape;
