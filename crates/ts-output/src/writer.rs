use crate::{OutputResult, TickSummaryRow, VehicleSnapshotRow};

/// A sink for simulation output.
///
/// The observer never propagates these errors into the tick; it keeps the
/// first one for [`SimOutputObserver::take_error`](crate::SimOutputObserver::take_error).
pub trait OutputWriter {
    /// Write one published fleet snapshot, one row per vehicle.
    fn write_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()>;

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush everything to disk.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
