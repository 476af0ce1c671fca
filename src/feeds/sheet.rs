use crate::errors::{AnalysisError, AnalysisResult};
use crate::types::PriceObservation;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Column holding the date code.
const DATE_COL: usize = 0;
/// Column holding the price (or quoted rate).
const PRICE_COL: usize = 1;

/// A single cell, typed the way a spreadsheet would see it.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Cell<'a> {
    Empty,
    Numeric(f64),
    Text(&'a str),
}

impl<'a> Cell<'a> {
    fn classify(raw: Option<&'a str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Cell::Empty,
            Some(s) => match s.parse::<f64>() {
                Ok(v) if v.is_finite() => Cell::Numeric(v),
                _ => Cell::Text(s),
            },
        }
    }
}

/// Why a data row was dropped.
#[derive(Debug, Clone, PartialEq)]
enum RowReject {
    MissingDate,
    UnparseableDate(String),
    MissingPrice,
    PriceIsText(String),
    Malformed(String),
}

impl std::fmt::Display for RowReject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDate => write!(f, "date cell is empty"),
            Self::UnparseableDate(s) => write!(f, "could not parse date string {s:?}"),
            Self::MissingPrice => write!(f, "price cell is empty"),
            Self::PriceIsText(s) => write!(f, "price is a string: {s:?}"),
            Self::Malformed(e) => write!(f, "malformed record: {e}"),
        }
    }
}

/// A workbook is a directory; each sheet is `<workbook>/<sheet>.csv`.
pub fn sheet_path(source: &Path, sheet: &str) -> PathBuf {
    source.join(format!("{sheet}.csv"))
}

/// Load the (date, price) rows of one sheet.
///
/// - The workbook directory must exist, otherwise the I/O error is returned.
/// - A missing sheet yields an empty Vec and a warning.
/// - The first row is always a header and is skipped.
/// - Rows with an unusable date or a non-numeric price are dropped with a warning.
pub fn load_sheet(source: &Path, sheet: &str) -> AnalysisResult<Vec<PriceObservation>> {
    tracing::info!(sheet = %sheet, source = %source.display(), "loading sheet");

    let meta = std::fs::metadata(source)
        .map_err(|e| AnalysisError::Io(format!("open {}: {e}", source.display())))?;
    if !meta.is_dir() {
        return Err(AnalysisError::Io(format!(
            "open {}: workbook is not a directory",
            source.display()
        )));
    }

    let path = sheet_path(source, sheet);
    let file = match File::open(&path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(sheet = %sheet, "sheet not found");
            return Ok(Vec::new());
        }
        Err(e) => return Err(AnalysisError::Io(format!("open {}: {e}", path.display()))),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = reader.records();
    if records.next().is_some() {
        tracing::debug!(sheet = %sheet, "skipping header row");
    }

    let mut data = Vec::new();
    for (idx, result) in records.enumerate() {
        let row = idx + 1;
        let parsed = match result {
            Ok(record) => parse_row(record.get(DATE_COL), record.get(PRICE_COL)),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => Err(RowReject::Malformed(e.to_string())),
        };

        match parsed {
            Ok(obs) => {
                tracing::debug!(sheet = %sheet, row, date = obs.date, price = obs.price, "row added");
                data.push(obs);
            }
            Err(reason) => {
                tracing::warn!(sheet = %sheet, row, reason = %reason, "skipping row");
            }
        }
    }

    tracing::info!(sheet = %sheet, rows = data.len(), "sheet loaded");
    Ok(data)
}

fn parse_row(date: Option<&str>, price: Option<&str>) -> Result<PriceObservation, RowReject> {
    let date = match Cell::classify(date) {
        Cell::Numeric(v) => v,
        Cell::Text(s) => s
            .replace('/', "")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| RowReject::UnparseableDate(s.to_string()))?,
        Cell::Empty => return Err(RowReject::MissingDate),
    };

    let price = match Cell::classify(price) {
        Cell::Numeric(v) => v,
        Cell::Text(s) => return Err(RowReject::PriceIsText(s.to_string())),
        Cell::Empty => return Err(RowReject::MissingPrice),
    };

    Ok(PriceObservation::new(date, price))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fresh workbook directory under the system temp dir.
    fn workbook(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("option_analysis_{}_{name}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_sheet(dir: &Path, sheet: &str, body: &str) {
        std::fs::write(sheet_path(dir, sheet), body).unwrap();
    }

    #[test]
    fn test_skips_header_and_reads_rows() {
        let dir = workbook("header");
        write_sheet(&dir, "Mar-Jun 2024", "Date,Price\n20240301,500.0\n20240304,505\n");
        let rows = load_sheet(&dir, "Mar-Jun 2024").unwrap();
        assert_eq!(
            rows,
            vec![
                PriceObservation::new(20240301.0, 500.0),
                PriceObservation::new(20240304.0, 505.0),
            ]
        );
    }

    #[test]
    fn test_header_skipped_even_if_numeric() {
        let dir = workbook("numeric_header");
        write_sheet(&dir, "s", "20240229,1.0\n20240301,2.0\n");
        let rows = load_sheet(&dir, "s").unwrap();
        assert_eq!(rows, vec![PriceObservation::new(20240301.0, 2.0)]);
    }

    #[test]
    fn test_slash_dates() {
        let dir = workbook("slash");
        write_sheet(&dir, "s", "Date,Price\n2024/03/01,5.0\n 2024/06/15 ,5.2\n");
        let rows = load_sheet(&dir, "s").unwrap();
        assert_eq!(rows[0].date, 20240301.0);
        assert_eq!(rows[1].date, 20240615.0);
    }

    #[test]
    fn test_drops_bad_rows_without_aborting() {
        let dir = workbook("bad_rows");
        write_sheet(
            &dir,
            "s",
            "Date,Price\n\
             20240301,500\n\
             March 4,505\n\
             ,506\n\
             20240306,n/a\n\
             20240307,\n\
             20240308\n\
             20240311,510\n",
        );
        let rows = load_sheet(&dir, "s").unwrap();
        assert_eq!(
            rows,
            vec![
                PriceObservation::new(20240301.0, 500.0),
                PriceObservation::new(20240311.0, 510.0),
            ]
        );
    }

    #[test]
    fn test_non_positive_prices_pass_through() {
        // Loader only checks cell types; positivity is enforced by the numeric core.
        let dir = workbook("non_positive");
        write_sheet(&dir, "s", "Date,Price\n20240301,-1\n20240302,0\n");
        let rows = load_sheet(&dir, "s").unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_missing_sheet_is_empty() {
        let dir = workbook("missing_sheet");
        let rows = load_sheet(&dir, "Nope").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_workbook_is_io_error() {
        let dir = std::env::temp_dir().join("option_analysis_definitely_missing_workbook");
        let err = load_sheet(&dir, "s").unwrap_err();
        assert!(matches!(err, AnalysisError::Io(_)), "got {err}");
    }

    #[test]
    fn test_cell_classification() {
        assert_eq!(Cell::classify(None), Cell::Empty);
        assert_eq!(Cell::classify(Some("  ")), Cell::Empty);
        assert_eq!(Cell::classify(Some("1.5")), Cell::Numeric(1.5));
        assert_eq!(Cell::classify(Some("inf")), Cell::Text("inf"));
        assert_eq!(Cell::classify(Some("abc")), Cell::Text("abc"));
    }
}
