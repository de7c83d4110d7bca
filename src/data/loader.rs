use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Result, TlError};

use super::model::{Measurement, TlRecord};

/// Header of the frequency column.
pub const FREQUENCY_COLUMN: &str = "Frequency (Hz)";
/// Header of the transmission-loss column.
pub const TL_COLUMN: &str = "TL (dB)";
/// File name suffix of NarrowBand measurement files.
pub const NARROWBAND_SUFFIX: &str = "_NarrowBands.txt";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load one NarrowBand file.
///
/// An absent file is reported as [`TlError::NotFound`] so callers can tell
/// it apart from a malformed table.
pub fn load_measurement(path: &Path) -> Result<Measurement> {
    let file = File::open(path).map_err(|e| TlError::from_io(path, e))?;
    let records = read_table(file, path)?;
    log::info!("Loaded {} rows from {}", records.len(), path.display());

    Ok(Measurement {
        label: label_for(path),
        source: path.to_path_buf(),
        records,
    })
}

/// Path of the data file belonging to a panel identifier:
/// `dir/<identifier>_NarrowBands.txt`.
pub fn companion_path(dir: &Path, identifier: &str) -> PathBuf {
    dir.join(format!("{identifier}{NARROWBAND_SUFFIX}"))
}

/// Every `*_NarrowBands.txt` file directly inside `dir`, sorted by name.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| TlError::from_io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| TlError::from_io(dir, e))?;
        let path = entry.path();
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(NARROWBAND_SUFFIX));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    log::debug!("Found {} NarrowBand files in {}", files.len(), dir.display());
    Ok(files)
}

/// Legend name for a data file.
///
/// `Panel A_TL_NarrowBands.txt` → `Panel A`; without a `_TL` marker the
/// NarrowBand suffix is stripped instead.
pub fn label_for(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if let Some((head, _)) = name.split_once("_TL") {
        return head.to_string();
    }
    name.strip_suffix(NARROWBAND_SUFFIX)
        .map(str::to_string)
        .unwrap_or(name)
}

// ---------------------------------------------------------------------------
// Table parser
// ---------------------------------------------------------------------------

/// Parse a tab-separated table with a header row.
///
/// The `Frequency (Hz)` and `TL (dB)` columns are located by name, any
/// other column is ignored. `source` is only used in error messages.
pub fn read_table<R: Read>(reader: R, source: &Path) -> Result<Vec<TlRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .trim(csv::Trim::All)
        .from_reader(reader);

    let csv_err = |e: csv::Error| TlError::Csv {
        path: source.to_path_buf(),
        source: e,
    };

    let headers = reader.headers().map_err(csv_err)?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| TlError::MissingColumn {
                path: source.to_path_buf(),
                column: name,
            })
    };
    let f_idx = column(FREQUENCY_COLUMN)?;
    let tl_idx = column(TL_COLUMN)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(csv_err)?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let cell = |idx: usize, name: &'static str| -> Result<f64> {
            let raw = row.get(idx).unwrap_or("");
            raw.parse::<f64>().map_err(|_| TlError::NotNumeric {
                path: source.to_path_buf(),
                line,
                column: name,
                value: raw.to_string(),
            })
        };

        records.push(TlRecord {
            frequency_hz: cell(f_idx, FREQUENCY_COLUMN)?,
            tl_db: cell(tl_idx, TL_COLUMN)?,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Vec<TlRecord>> {
        read_table(text.as_bytes(), Path::new("fixture.txt"))
    }

    #[test]
    fn parses_rows_in_file_order() {
        let rows = parse("Frequency (Hz)\tTL (dB)\n100\t12.5\n101\t13\n102\t12.75\n").unwrap();
        assert_eq!(
            rows,
            vec![
                TlRecord { frequency_hz: 100.0, tl_db: 12.5 },
                TlRecord { frequency_hz: 101.0, tl_db: 13.0 },
                TlRecord { frequency_hz: 102.0, tl_db: 12.75 },
            ]
        );
    }

    #[test]
    fn columns_are_found_by_name() {
        let rows = parse("TL (dB)\tPhase\tFrequency (Hz)\n20\t0.1\t250\n").unwrap();
        assert_eq!(rows, vec![TlRecord { frequency_hz: 250.0, tl_db: 20.0 }]);
    }

    #[test]
    fn header_whitespace_is_ignored() {
        let rows = parse(" Frequency (Hz) \t TL (dB)\r\n100\t1\r\n").unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn missing_column_is_reported() {
        let err = parse("Frequency (Hz)\tLoss\n100\t1\n").unwrap_err();
        assert!(matches!(err, TlError::MissingColumn { column: TL_COLUMN, .. }));
    }

    #[test]
    fn non_numeric_cell_reports_line() {
        let err = parse("Frequency (Hz)\tTL (dB)\n100\t1\n101\tabc\n").unwrap_err();
        match err {
            TlError::NotNumeric { line, column, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(column, TL_COLUMN);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn header_only_gives_empty_table() {
        assert!(parse("Frequency (Hz)\tTL (dB)\n").unwrap().is_empty());
    }

    #[test]
    fn companion_path_appends_suffix() {
        let p = companion_path(Path::new("data"), "Panneau 2");
        assert_eq!(p, Path::new("data").join("Panneau 2_NarrowBands.txt"));
    }

    #[test]
    fn labels_cut_at_tl_marker() {
        assert_eq!(label_for(Path::new("dir/P1_TL_NarrowBands.txt")), "P1");
        assert_eq!(label_for(Path::new("Panneau 3_NarrowBands.txt")), "Panneau 3");
        assert_eq!(label_for(Path::new("notes.txt")), "notes.txt");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_measurement(&dir.path().join("nope_NarrowBands.txt")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn discover_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["B_NarrowBands.txt", "A_NarrowBands.txt", "A_ThirdOctave.txt"] {
            std::fs::write(dir.path().join(name), "Frequency (Hz)\tTL (dB)\n").unwrap();
        }
        std::fs::create_dir(dir.path().join("C_NarrowBands.txt")).unwrap();

        let names: Vec<String> = discover(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["A_NarrowBands.txt", "B_NarrowBands.txt"]);
    }
}
