use std::path::PathBuf;

// ---------------------------------------------------------------------------
// TlRecord – one row of a NarrowBand table
// ---------------------------------------------------------------------------

/// A single frequency bin: transmission loss at one frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TlRecord {
    pub frequency_hz: f64,
    pub tl_db: f64,
}

// ---------------------------------------------------------------------------
// Measurement – one loaded NarrowBand file
// ---------------------------------------------------------------------------

/// The parsed contents of one NarrowBand file, rows kept in file order.
///
/// Frequencies are assumed ascending with a 1 Hz step; nothing checks it.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Legend name of the dataset.
    pub label: String,
    /// File the records were read from.
    pub source: PathBuf,
    pub records: Vec<TlRecord>,
}

impl Measurement {
    pub fn frequencies(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.frequency_hz).collect()
    }

    pub fn tl_values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.tl_db).collect()
    }
}

// ---------------------------------------------------------------------------
// SmoothedCurve – raw series plus its centered moving average
// ---------------------------------------------------------------------------

/// A measurement with its smoothed TL attached.
///
/// `frequencies`, `raw` and `smoothed` always have the same length.
/// `None` in `smoothed` marks positions without a full window.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedCurve {
    pub label: String,
    pub frequencies: Vec<f64>,
    pub raw: Vec<f64>,
    pub smoothed: Vec<Option<f64>>,
}

impl SmoothedCurve {
    /// `(frequency, raw TL)` pairs.
    pub fn raw_points(&self) -> Vec<(f64, f64)> {
        self.frequencies
            .iter()
            .copied()
            .zip(self.raw.iter().copied())
            .collect()
    }

    /// `(frequency, smoothed TL)` pairs, skipping positions with no value.
    pub fn smoothed_points(&self) -> Vec<(f64, f64)> {
        self.frequencies
            .iter()
            .zip(self.smoothed.iter())
            .filter_map(|(&f, s)| s.map(|v| (f, v)))
            .collect()
    }
}
