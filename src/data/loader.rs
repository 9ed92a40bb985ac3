use std::path::Path;

use anyhow::{bail, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use serde_json::Value as JsonValue;

use super::model::{CellValue, DataTable};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a spreadsheet from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xls` – Excel workbook, first worksheet, first row = header
/// * `.csv`           – header row with column names, typed cell inference
/// * `.json`          – `[{ "column": value, ... }, ...]` records
pub fn load_file(path: &Path) -> Result<DataTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let table = match ext.as_str() {
        "xlsx" | "xls" => load_excel(path)?,
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    if table.columns.is_empty() || table.is_empty() {
        bail!("File contains no data rows");
    }
    Ok(table)
}

// ---------------------------------------------------------------------------
// Excel loader
// ---------------------------------------------------------------------------

/// The first worksheet is read; its first row supplies column names.
/// Blank header cells get positional names so the row stays addressable.
fn load_excel(path: &Path) -> Result<DataTable> {
    let mut workbook = open_workbook_auto(path).context("opening Excel workbook")?;
    let range = workbook
        .worksheet_range_at(0)
        .context("workbook has no sheets")?
        .context("reading first worksheet")?;

    let mut rows_iter = range.rows();
    let header = match rows_iter.next() {
        Some(row) => row,
        None => bail!("Worksheet is empty"),
    };

    let columns: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let name = cell.to_string();
            if name.trim().is_empty() {
                format!("Column{}", i + 1)
            } else {
                name
            }
        })
        .collect();

    let rows: Vec<Vec<CellValue>> = rows_iter
        .map(|row| row.iter().map(excel_cell).collect())
        .collect();

    Ok(DataTable::from_rows(columns, rows))
}

fn excel_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(v) => CellValue::Float(*v),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => {
            if s.trim().is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(s.clone())
            }
        }
        // Formula errors count as missing; dates stay textual so they are
        // never offered as test variables.
        Data::Error(_) => CellValue::Empty,
        other => CellValue::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one observation per row.
fn load_csv(path: &Path) -> Result<DataTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("opening CSV")?;

    let columns: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(guess_cell_type).collect());
    }

    Ok(DataTable::from_rows(columns, rows))
}

fn guess_cell_type(s: &str) -> CellValue {
    let s = s.trim();
    if s.is_empty() {
        return CellValue::Empty;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::Text(s.to_string())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "gdp": 1.23, "quarter": "2020Q1" },
///   { "gdp": 1.31, "quarter": "2020Q2" }
/// ]
/// ```
///
/// Column set is the union over all records; absent keys become missing
/// cells.
fn load_json(path: &Path) -> Result<DataTable> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut columns: Vec<String> = Vec::new();
    for rec in records {
        if let Some(obj) = rec.as_object() {
            for key in obj.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
    }

    let mut rows = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;
        let row: Vec<CellValue> = columns
            .iter()
            .map(|col| obj.get(col).map(json_cell).unwrap_or(CellValue::Empty))
            .collect();
        rows.push(row);
    }

    Ok(DataTable::from_rows(columns, rows))
}

fn json_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::Text(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::Text(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Empty,
        other => CellValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn tmp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("unitroot-lab-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn csv_loads_typed_columns() {
        let path = tmp_file(
            "basic.csv",
            "quarter,gdp,rate\n2020Q1,1.5,3\n2020Q2,,4\n2020Q3,2.5,5\n",
        );
        let table = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(table.columns, vec!["quarter", "gdp", "rate"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.numeric_columns(), vec!["gdp", "rate"]);
        assert_eq!(table.series("gdp").unwrap().values, vec![1.5, 2.5]);
    }

    #[test]
    fn json_records_union_columns() {
        let path = tmp_file(
            "records.json",
            r#"[{"a": 1, "b": "x"}, {"a": 2.5, "c": true}]"#,
        );
        let table = load_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(table.columns, vec!["a", "b", "c"]);
        assert_eq!(table.numeric_columns(), vec!["a"]);
        assert_eq!(table.series("a").unwrap().values, vec![1.0, 2.5]);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let path = tmp_file("data.txt", "a,b\n1,2\n");
        let err = load_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(err.to_string().contains("Unsupported file extension"));
    }

    #[test]
    fn header_only_csv_is_empty() {
        let path = tmp_file("empty.csv", "a,b\n");
        let err = load_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(err.to_string().contains("no data rows"));
    }

    #[test]
    fn garbage_excel_fails_to_parse() {
        let path = tmp_file("bogus.xlsx", "this is not a workbook");
        assert!(load_file(&path).is_err());
        std::fs::remove_file(&path).ok();
    }
}
