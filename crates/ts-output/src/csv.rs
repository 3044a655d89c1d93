//! CSV output backend.
//!
//! Creates two files in the output directory:
//! - `vehicle_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;
use log::info;

use crate::writer::OutputWriter;
use crate::{OutputResult, TickSummaryRow, VehicleSnapshotRow};

pub const SNAPSHOT_HEADER: [&str; 11] = [
    "tick", "unix_ms", "vehicle_id", "label", "route_id", "lat", "lon", "progress",
    "direction", "speed_kmh", "crowd",
];

pub const SUMMARY_HEADER: [&str; 3] = ["tick", "unix_ms", "vehicles_advanced"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, then create the two files and write headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("vehicle_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        info!("writing CSV output to {}", dir.display());
        Ok(Self { snapshots, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.unix_ms.to_string(),
                row.vehicle_id.to_string(),
                row.label.clone(),
                row.route_id.to_string(),
                format!("{:.6}", row.lat),
                format!("{:.6}", row.lon),
                format!("{:.6}", row.progress),
                row.direction.to_string(),
                format!("{:.1}", row.speed_kmh),
                row.crowd.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.unix_ms.to_string(),
            row.vehicles_advanced.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
