//! Spreadsheet decoding and header checks
//!
//! Wraps `calamine` so the engine sees a sheet as a header map plus a list of
//! data rows. The format (xlsx, xls, ods) is detected from the bytes.

use crate::domain::{ClientbookError, Result, CLIENT_COLUMNS};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Cursor;

/// Placeholder reported for an empty header cell
pub const BLANK_HEADER: &str = "<blank>";

/// A decoded client sheet whose header matched the required column set
#[derive(Debug, Clone)]
pub struct ClientSheet {
    columns: BTreeMap<String, usize>,
    rows: Vec<Vec<Data>>,
}

impl ClientSheet {
    /// Decode `bytes` and validate the header of `sheet_name`
    ///
    /// # Errors
    ///
    /// - `UnreadableFile` if the payload is not a spreadsheet or the sheet is absent
    /// - `SchemaMismatch` if the normalized header differs from the client columns
    pub fn parse(bytes: &[u8], sheet_name: &str) -> Result<Self> {
        let (range, declared_last_row) = read_sheet(bytes, sheet_name)?;
        Self::from_range(&range, declared_last_row)
    }

    /// Build the sheet from a decoded range
    ///
    /// Rows between the end of `range` and `declared_last_row` are kept as
    /// blank rows so they are counted and reported like any other row.
    fn from_range(range: &Range<Data>, declared_last_row: Option<u32>) -> Result<Self> {
        let mut rows = range.rows();
        let header = rows.next().map(<[Data]>::to_vec).unwrap_or_default();
        let columns = check_header(&header)?;

        let mut data: Vec<Vec<Data>> = rows.map(<[Data]>::to_vec).collect();
        if let (Some((last_row, _)), Some(declared)) = (range.end(), declared_last_row) {
            let trailing = declared.saturating_sub(last_row) as usize;
            data.resize_with(data.len() + trailing, Vec::new);
        }

        Ok(Self {
            columns,
            rows: data,
        })
    }

    /// Number of data rows, header excluded
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the sheet has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate data rows together with their display line number (header is line 1)
    pub fn rows(&self) -> impl Iterator<Item = SheetRow<'_>> {
        let columns = &self.columns;
        self.rows
            .iter()
            .enumerate()
            .map(move |(idx, cells)| SheetRow {
                line: idx + 2,
                cells,
                columns,
            })
    }
}

/// One data row with lookup by normalized column name
#[derive(Debug, Clone, Copy)]
pub struct SheetRow<'a> {
    /// 1-based display line number
    pub line: usize,
    cells: &'a [Data],
    columns: &'a BTreeMap<String, usize>,
}

impl SheetRow<'_> {
    /// Cell under `column`, `Data::Empty` when the row is shorter than the header
    pub fn cell(&self, column: &str) -> &Data {
        const EMPTY: &Data = &Data::Empty;
        self.columns
            .get(column)
            .and_then(|idx| self.cells.get(*idx))
            .unwrap_or(EMPTY)
    }

    /// Trimmed textual value of a cell
    pub fn text(&self, column: &str) -> String {
        cell_text(self.cell(column))
    }
}

/// Integer interpretation of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellInteger {
    /// Empty cell or whitespace-only text
    Blank,
    /// Whole number
    Value(i64),
    /// Anything else, including fractional numbers
    Invalid,
}

/// Interpret a cell as an integer
///
/// Numeric cells must be whole; text cells must parse as a base-10 integer
/// after trimming.
pub fn cell_integer(cell: &Data) -> CellInteger {
    match cell {
        Data::Empty => CellInteger::Blank,
        Data::Int(value) => CellInteger::Value(*value),
        Data::Float(value) => float_to_integer(*value),
        Data::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                CellInteger::Blank
            } else {
                text.parse()
                    .map(CellInteger::Value)
                    .unwrap_or(CellInteger::Invalid)
            }
        }
        _ => CellInteger::Invalid,
    }
}

fn float_to_integer(value: f64) -> CellInteger {
    // i64::MAX is not exactly representable; the bound excludes it
    if value.is_finite()
        && value.fract() == 0.0
        && value >= i64::MIN as f64
        && value < i64::MAX as f64
    {
        CellInteger::Value(value as i64)
    } else {
        CellInteger::Invalid
    }
}

/// Trimmed textual rendering of a cell
///
/// Whole floats render without a fractional part, so a numeric `name` of
/// `7.0` reads as `7`.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.trim().to_string(),
        Data::Float(value) if value.fract() == 0.0 && value.is_finite() => {
            format!("{value:.0}")
        }
        other => other.to_string().trim().to_string(),
    }
}

/// Decode the sheet's used range plus its declared last row, if known
fn read_sheet(bytes: &[u8], sheet_name: &str) -> Result<(Range<Data>, Option<u32>)> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| ClientbookError::UnreadableFile(format!("Could not read spreadsheet: {e}")))?;

    if !workbook.sheet_names().iter().any(|name| name == sheet_name) {
        return Err(ClientbookError::UnreadableFile(format!(
            "Sheet '{sheet_name}' not found"
        )));
    }

    let declared_last_row = declared_last_row(&mut workbook, sheet_name);
    let range = workbook.worksheet_range(sheet_name).map_err(|e| {
        ClientbookError::UnreadableFile(format!("Could not read sheet '{sheet_name}': {e}"))
    })?;

    Ok((range, declared_last_row))
}

/// Last row of the xlsx `<dimension>` element
///
/// `worksheet_range` stops at the last cell holding a value, so trailing rows
/// of formatted empty cells are only visible here.
fn declared_last_row(workbook: &mut Sheets<Cursor<&[u8]>>, sheet_name: &str) -> Option<u32> {
    match workbook {
        Sheets::Xlsx(xlsx) => xlsx
            .worksheet_cells_reader(sheet_name)
            .ok()
            .map(|reader| reader.dimensions().end.0),
        _ => None,
    }
}

/// Normalize the header and map each client column to its index
fn check_header(header: &[Data]) -> Result<BTreeMap<String, usize>> {
    let mut columns = BTreeMap::new();
    let mut repeated = BTreeSet::new();

    for (idx, cell) in header.iter().enumerate() {
        let mut name = cell_text(cell).to_lowercase();
        if name.is_empty() {
            name = BLANK_HEADER.to_string();
        }
        if columns.contains_key(&name) {
            repeated.insert(name);
        } else {
            columns.insert(name, idx);
        }
    }

    let required: BTreeSet<String> = CLIENT_COLUMNS.iter().map(|c| c.to_string()).collect();
    let actual: BTreeSet<String> = columns.keys().cloned().collect();

    if actual == required && repeated.is_empty() {
        return Ok(columns);
    }

    let missing = required.difference(&actual).cloned().collect();
    let unexpected = actual
        .difference(&required)
        .cloned()
        .collect::<BTreeSet<_>>()
        .union(&repeated)
        .cloned()
        .collect();

    Err(ClientbookError::SchemaMismatch {
        missing,
        unexpected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn header(names: &[&str]) -> Vec<Data> {
        names.iter().map(|n| Data::String(n.to_string())).collect()
    }

    #[test]
    fn test_header_normalized() {
        let columns =
            check_header(&header(&[" Customer_ID", "NAME ", "email", "Country", "age"])).unwrap();
        assert_eq!(columns["customer_id"], 0);
        assert_eq!(columns["age"], 4);
    }

    #[test]
    fn test_header_column_order_irrelevant() {
        let columns =
            check_header(&header(&["age", "country", "email", "name", "customer_id"])).unwrap();
        assert_eq!(columns["customer_id"], 4);
    }

    #[test]
    fn test_header_missing_and_unexpected() {
        let err =
            check_header(&header(&["customer_id", "name", "email", "nation", "age"])).unwrap_err();
        match err {
            ClientbookError::SchemaMismatch {
                missing,
                unexpected,
            } => {
                assert_eq!(missing, vec!["country"]);
                assert_eq!(unexpected, vec!["nation"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_header_blank_and_repeated() {
        let mut cells = header(&["customer_id", "name", "email", "country", "age", "name"]);
        cells.push(Data::Empty);
        let err = check_header(&cells).unwrap_err();
        match err {
            ClientbookError::SchemaMismatch {
                missing,
                unexpected,
            } => {
                assert!(missing.is_empty());
                assert_eq!(unexpected, vec![BLANK_HEADER.to_string(), "name".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_header_reports_every_column_missing() {
        let err = check_header(&[]).unwrap_err();
        match err {
            ClientbookError::SchemaMismatch { missing, .. } => assert_eq!(missing.len(), 5),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test_case(Data::Empty, CellInteger::Blank ; "empty")]
    #[test_case(Data::String("  ".into()), CellInteger::Blank ; "whitespace")]
    #[test_case(Data::Int(7), CellInteger::Value(7) ; "int")]
    #[test_case(Data::Float(42.0), CellInteger::Value(42) ; "whole float")]
    #[test_case(Data::Float(-3.0), CellInteger::Value(-3) ; "negative float")]
    #[test_case(Data::Float(1.5), CellInteger::Invalid ; "fractional float")]
    #[test_case(Data::Float(f64::NAN), CellInteger::Invalid ; "nan")]
    #[test_case(Data::String(" 12 ".into()), CellInteger::Value(12) ; "padded text")]
    #[test_case(Data::String("abc".into()), CellInteger::Invalid ; "text")]
    #[test_case(Data::String("3.0".into()), CellInteger::Invalid ; "decimal text")]
    #[test_case(Data::Bool(true), CellInteger::Invalid ; "bool")]
    fn test_cell_integer(cell: Data, expected: CellInteger) {
        assert_eq!(cell_integer(&cell), expected);
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::String("  Ana ".into())), "Ana");
        assert_eq!(cell_text(&Data::Float(7.0)), "7");
        assert_eq!(cell_text(&Data::Int(3)), "3");
        assert_eq!(cell_text(&Data::Empty), "");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = ClientSheet::parse(b"not a spreadsheet", "Clientes").unwrap_err();
        assert!(matches!(err, ClientbookError::UnreadableFile(_)));
    }

    fn header_range(extra_rows: u32) -> Range<Data> {
        let mut range = Range::new((0, 0), (extra_rows, 4));
        for (col, name) in CLIENT_COLUMNS.iter().enumerate() {
            range.set_value((0, col as u32), Data::String(name.to_string()));
        }
        range
    }

    #[test]
    fn test_trailing_declared_rows_are_kept() {
        let mut range = header_range(1);
        range.set_value((1, 0), Data::Int(1));

        let sheet = ClientSheet::from_range(&range, Some(3)).unwrap();
        assert_eq!(sheet.len(), 3);
        let last = sheet.rows().last().unwrap();
        assert_eq!(last.line, 4);
        assert_eq!(last.cell("customer_id"), &Data::Empty);
    }

    #[test]
    fn test_declared_dimension_inside_range_adds_nothing() {
        let sheet = ClientSheet::from_range(&header_range(2), Some(1)).unwrap();
        assert_eq!(sheet.len(), 2);

        let sheet = ClientSheet::from_range(&header_range(2), None).unwrap();
        assert_eq!(sheet.len(), 2);
    }

    #[test]
    fn test_row_lookup_pads_short_rows() {
        let columns = check_header(&header(&["customer_id", "name", "email", "country", "age"]))
            .unwrap();
        let sheet = ClientSheet {
            columns,
            rows: vec![vec![Data::Int(1), Data::String("Ana".into())]],
        };
        let row = sheet.rows().next().unwrap();
        assert_eq!(row.line, 2);
        assert_eq!(row.text("name"), "Ana");
        assert_eq!(row.cell("age"), &Data::Empty);
    }
}
