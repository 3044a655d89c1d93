//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use log::warn;

use ts_core::Tick;
use ts_fleet::Vehicle;
use ts_sim::SimObserver;

use crate::row::{TickSummaryRow, VehicleSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that records snapshots and tick summaries to any
/// [`OutputWriter`].
///
/// Observer hooks cannot fail, so the first write error is stored and later
/// writes still run.  Check [`take_error`][Self::take_error] once the run
/// ends.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// The first write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                warn!("output write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, now_unix_ms: i64, advanced: usize) {
        let row = TickSummaryRow {
            tick:              tick.0,
            unix_ms:           now_unix_ms,
            vehicles_advanced: advanced as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, now_unix_ms: i64, vehicles: &[Vehicle]) {
        if vehicles.is_empty() {
            return;
        }
        let rows: Vec<VehicleSnapshotRow> = vehicles
            .iter()
            .map(|v| VehicleSnapshotRow::from_vehicle(tick, now_unix_ms, v))
            .collect();
        let result = self.writer.write_snapshots(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
