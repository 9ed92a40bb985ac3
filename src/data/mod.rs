/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  .xlsx / .xls / .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → DataTable
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ DataTable  │  rows × named columns, typed cells
///   └───────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ NumericSeries  │  one numeric column, missing cells dropped
///   └───────────────┘
/// ```

pub mod loader;
pub mod model;
