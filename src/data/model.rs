use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single typed cell of the loaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring the types a spreadsheet can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Missing / blank cell.
    Empty,
}

impl CellValue {
    /// Interpret the cell as an `f64` if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Whether the cell counts as missing when extracting a series.
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.4}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Empty => write!(f, ""),
        }
    }
}

// ---------------------------------------------------------------------------
// DataTable – the complete loaded spreadsheet
// ---------------------------------------------------------------------------

/// The parsed spreadsheet: ordered column names plus rows of typed cells.
/// Built once per load and read-only afterwards.
#[derive(Debug, Clone)]
pub struct DataTable {
    /// Column names in file order.
    pub columns: Vec<String>,
    /// Rows; every row has exactly `columns.len()` cells.
    pub rows: Vec<Vec<CellValue>>,
}

impl DataTable {
    /// Build a table, padding or truncating rows to the header width.
    pub fn from_rows(columns: Vec<String>, mut rows: Vec<Vec<CellValue>>) -> Self {
        let width = columns.len();
        for row in &mut rows {
            row.resize(width, CellValue::Empty);
        }
        DataTable { columns, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether a column holds numeric data: at least one numeric cell and no
    /// text or bool cells (missing cells are allowed).
    pub fn is_numeric(&self, col: usize) -> bool {
        let mut seen_number = false;
        for row in &self.rows {
            match &row[col] {
                CellValue::Float(_) | CellValue::Integer(_) => seen_number = true,
                CellValue::Empty => {}
                CellValue::Text(_) | CellValue::Bool(_) => return false,
            }
        }
        seen_number
    }

    /// Names of the columns eligible for testing, in file order.
    pub fn numeric_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(i, _)| self.is_numeric(*i))
            .map(|(_, name)| name.clone())
            .collect()
    }

    /// Extract one column as an ordered numeric series, dropping missing
    /// cells. Returns `None` for an unknown column name.
    pub fn series(&self, name: &str) -> Option<NumericSeries> {
        let col = self.columns.iter().position(|c| c == name)?;
        let values: Vec<f64> = self
            .rows
            .iter()
            .filter_map(|row| row[col].as_f64())
            .collect();
        Some(NumericSeries {
            column: name.to_string(),
            values,
        })
    }
}

// ---------------------------------------------------------------------------
// NumericSeries – the cleaned input handed to the test engines
// ---------------------------------------------------------------------------

/// One numeric column with missing values removed. Order is the temporal
/// index and is significant.
#[derive(Debug, Clone)]
pub struct NumericSeries {
    /// Source column name.
    pub column: String,
    /// Observations in original row order.
    pub values: Vec<f64>,
}

impl NumericSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
