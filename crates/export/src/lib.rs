//! Export helpers for generated systems (JSON) and bearing tables (CSV).

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("row has {found} bearings but the table has {expected} columns")]
    RowWidth { expected: usize, found: usize },
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod system {
    use std::io::Write;

    use stargen_generator::StarSystem;

    use super::ExportError;

    /// Pretty-printed JSON with camelCase keys.
    pub fn to_json(system: &StarSystem) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(system)?)
    }

    pub fn write_json<W: Write>(writer: W, system: &StarSystem) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(writer, system)?;
        Ok(())
    }

    pub fn from_json(input: &str) -> Result<StarSystem, ExportError> {
        Ok(serde_json::from_str(input)?)
    }
}

pub mod ephemeris {
    use std::io::Write;

    use stargen_calendar::CampaignDate;
    use stargen_orbits::{OrbitalSystem, calculate_system_orbits};

    use super::ExportError;

    const MINUTES_PER_DAY: f64 = 1_440.0;

    /// One sampled instant: every planet's bearing in planet-index order.
    #[derive(Debug, Clone, PartialEq)]
    pub struct BearingRow {
        pub date: CampaignDate,
        pub days_since_epoch: f64,
        pub bearings: Vec<f64>,
    }

    /// Sample `steps` instants starting at `start`, `step_days` apart.
    ///
    /// Steps are rounded to whole minutes, the calendar's resolution.
    pub fn sample_bearings<S>(
        system: &S,
        start: &CampaignDate,
        step_days: f64,
        steps: usize,
    ) -> Vec<BearingRow>
    where
        S: OrbitalSystem + ?Sized,
    {
        let step_minutes = (step_days * MINUTES_PER_DAY).round() as i64;
        (0..steps)
            .map(|i| {
                let date = start.add_minutes(step_minutes.saturating_mul(i as i64));
                let bearings = calculate_system_orbits(Some(system), &date)
                    .into_values()
                    .collect();
                BearingRow {
                    date,
                    days_since_epoch: date.days_since_epoch(),
                    bearings,
                }
            })
            .collect()
    }

    /// Write rows as CSV: `date,days_since_epoch` followed by one column per label.
    pub fn write_csv<W: Write>(
        writer: W,
        labels: &[String],
        rows: &[BearingRow],
    ) -> Result<(), ExportError> {
        let mut csv = csv::Writer::from_writer(writer);
        let mut header = vec!["date".to_owned(), "days_since_epoch".to_owned()];
        header.extend(labels.iter().cloned());
        csv.write_record(&header)?;

        for row in rows {
            if row.bearings.len() != labels.len() {
                return Err(ExportError::RowWidth {
                    expected: labels.len(),
                    found: row.bearings.len(),
                });
            }
            let mut record = vec![row.date.to_string(), format!("{:.6}", row.days_since_epoch)];
            record.extend(row.bearings.iter().map(|b| format!("{b:.3}")));
            csv.write_record(&record)?;
        }
        csv.flush()?;
        Ok(())
    }
}
