use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use synthrx_core::{DiagnosisEvent, DispenseEvent, PatientRecord};

/// Column order for the patients table.
pub const PATIENT_COLUMNS: [&str; 8] = [
    "study_id",
    "first_name",
    "middle_name",
    "last_name",
    "suffix",
    "height",
    "member",
    "birth_date",
];

/// Column order for the dispenses table.
pub const DISPENSE_COLUMNS: [&str; 4] = ["study_id", "dispense_date", "drug_id", "days_supply"];

/// Column order for the diagnoses table.
pub const DIAGNOSIS_COLUMNS: [&str; 4] = ["study_id", "dx_date", "dx_code", "dx_name"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Write the patients table; returns the number of bytes written.
pub fn write_patients_csv(path: &Path, rows: &[PatientRecord]) -> Result<u64, csv::Error> {
    write_csv(path, &PATIENT_COLUMNS, rows, |row| {
        vec![
            row.study_id.to_string(),
            row.first_name.clone(),
            row.middle_name.clone(),
            row.last_name.clone(),
            row.suffix.clone(),
            row.height.to_string(),
            row.member.to_string(),
            row.birth_date.format(DATE_FORMAT).to_string(),
        ]
    })
}

/// Write the dispenses table; returns the number of bytes written.
pub fn write_dispenses_csv(path: &Path, rows: &[DispenseEvent]) -> Result<u64, csv::Error> {
    write_csv(path, &DISPENSE_COLUMNS, rows, |row| {
        vec![
            row.subject_id.to_string(),
            row.dispense_date.format(DATE_FORMAT).to_string(),
            row.drug_id.clone(),
            row.days_supply.to_string(),
        ]
    })
}

/// Write the diagnoses table; returns the number of bytes written.
pub fn write_diagnoses_csv(path: &Path, rows: &[DiagnosisEvent]) -> Result<u64, csv::Error> {
    write_csv(path, &DIAGNOSIS_COLUMNS, rows, |row| {
        vec![
            row.subject_id.to_string(),
            row.dx_date.format(DATE_FORMAT).to_string(),
            row.dx_code.to_string(),
            row.dx_name.to_string(),
        ]
    })
}

fn write_csv<T>(
    path: &Path,
    columns: &[&str],
    rows: &[T],
    record_for: impl Fn(&T) -> Vec<String>,
) -> Result<u64, csv::Error> {
    let writer = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(columns)?;
    for row in rows {
        writer.write_record(record_for(row))?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
