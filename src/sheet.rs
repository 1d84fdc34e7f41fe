// Workbook loading and the sheet/row/cell model.
//
// A workbook is a directory of CSV files: each file is one sheet, its file
// stem the sheet name. Sheets load in lexicographic filename order so a run
// is deterministic; within a sheet, rows keep file order.

use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum WorkbookError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// CellValue
// ---------------------------------------------------------------------------

/// A typed spreadsheet cell. CSV fields are untyped text, so typing is
/// inferred at parse time: integral numbers stay integral so they serialize
/// as JSON integers, the way the source spreadsheets carried them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Parse a raw CSV field into a cell. Returns `None` for an empty field
    /// (empty cells are never stored, so "no data" stays distinguishable
    /// from a present zero).
    pub fn parse(field: &str) -> Option<CellValue> {
        let s = field.trim();
        if s.is_empty() {
            return None;
        }
        if let Ok(i) = s.parse::<i64>() {
            return Some(CellValue::Int(i));
        }
        if let Ok(f) = s.parse::<f64>() {
            if f.is_finite() {
                return Some(CellValue::Float(f));
            }
        }
        Some(CellValue::Text(s.to_string()))
    }

    /// Numeric view of the cell. Text cells that parse as a finite number
    /// count as numeric, matching the loose coercion of the source data.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Int(i) => Some(*i as f64),
            CellValue::Float(f) => Some(*f),
            CellValue::Text(s) => s.parse::<f64>().ok().filter(|f| f.is_finite()),
        }
    }

    /// String view of the cell; `None` for numeric cells.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// StatRow
// ---------------------------------------------------------------------------

/// One sheet row: an ordered mapping from column label to cell value.
///
/// Column order is preserved from the sheet header and carried through to the
/// JSON artifact, where labels appear verbatim (including the Korean source
/// labels) as object keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatRow {
    cells: Vec<(String, CellValue)>,
}

impl StatRow {
    pub fn new() -> Self {
        StatRow::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(label, _)| label == column)
            .map(|(_, value)| value)
    }

    /// Numeric view of a column, `None` when absent or non-numeric.
    pub fn number(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(CellValue::as_number)
    }

    /// String view of a column, `None` when absent or numeric.
    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(CellValue::as_text)
    }

    /// The row's first column, the label cell the aggregator keys off.
    pub fn first(&self) -> Option<(&str, &CellValue)> {
        self.cells
            .first()
            .map(|(label, value)| (label.as_str(), value))
    }

    /// Insert a value, overwriting in place when the column already exists
    /// (the column keeps its original position).
    pub fn insert(&mut self, column: &str, value: CellValue) {
        if let Some(slot) = self.cells.iter_mut().find(|(label, _)| label == column) {
            slot.1 = value;
        } else {
            self.cells.push((column.to_string(), value));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells
            .iter()
            .map(|(label, value)| (label.as_str(), value))
    }
}

impl Serialize for StatRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.cells.iter().map(|(label, value)| (label.as_str(), value)))
    }
}

impl<'de> Deserialize<'de> for StatRow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = StatRow;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of column labels to cell values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<StatRow, A::Error> {
                let mut row = StatRow::new();
                while let Some((label, value)) = map.next_entry::<String, CellValue>()? {
                    row.insert(&label, value);
                }
                Ok(row)
            }
        }

        deserializer.deserialize_map(RowVisitor)
    }
}

// ---------------------------------------------------------------------------
// Sheet / Workbook
// ---------------------------------------------------------------------------

/// A named sheet with its rows in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<StatRow>,
}

/// An ordered collection of sheets with by-name lookup.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Workbook { sheets }
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Load a workbook from a directory of CSV sheets. Fails when the
    /// directory is unreadable or holds no `.csv` files; any malformed sheet
    /// aborts the whole load (no partial workbook).
    pub fn load_dir(dir: &Path) -> Result<Workbook, WorkbookError> {
        let entries = std::fs::read_dir(dir).map_err(|e| WorkbookError::Io {
            path: dir.display().to_string(),
            source: e,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| WorkbookError::Io {
                path: dir.display().to_string(),
                source: e,
            })?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "csv") {
                paths.push(path);
            }
        }
        paths.sort_by_key(|p| p.file_name().map(|n| n.to_owned()));

        if paths.is_empty() {
            return Err(WorkbookError::Validation(format!(
                "no .csv sheets found in {}",
                dir.display()
            )));
        }

        let mut sheets = Vec::with_capacity(paths.len());
        for path in paths {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let file = std::fs::File::open(&path).map_err(|e| WorkbookError::Io {
                path: path.display().to_string(),
                source: e,
            })?;
            let sheet = sheet_from_reader(&name, file).map_err(|e| WorkbookError::Csv {
                path: path.display().to_string(),
                source: e,
            })?;
            if sheet.rows.is_empty() {
                warn!("sheet '{}' has no data rows", sheet.name);
            }
            sheets.push(sheet);
        }

        Ok(Workbook::new(sheets))
    }
}

/// Read a single sheet from any CSV reader. Exposed so tests can build
/// sheets without touching the filesystem.
pub fn sheet_from_reader<R: Read>(name: &str, rdr: R) -> Result<Sheet, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row = StatRow::new();
        for (i, field) in record.iter().enumerate() {
            // Fields beyond the header row have no label and are dropped.
            let Some(label) = headers.get(i) else { break };
            let label = label.trim();
            if label.is_empty() {
                continue;
            }
            if let Some(value) = CellValue::parse(field) {
                row.insert(label, value);
            }
        }
        // Entirely empty rows are not data.
        if !row.is_empty() {
            rows.push(row);
        }
    }

    Ok(Sheet {
        name: name.to_string(),
        rows,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
