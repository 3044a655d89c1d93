use thiserror::Error;
use ts_core::{StopId, TsError, VehicleId};
use ts_fleet::FleetError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] TsError),

    #[error("fleet error: {0}")]
    Fleet(#[from] FleetError),

    #[error("vehicle {0} not found")]
    VehicleNotFound(VehicleId),

    #[error("stop {0} not found")]
    StopNotFound(StopId),

    #[error("simulation lock poisoned by a panicking tick")]
    Poisoned,

    #[error("scheduler thread has already stopped")]
    SchedulerStopped,

    #[error("scheduler thread panicked")]
    SchedulerPanicked,
}

pub type SimResult<T> = Result<T, SimError>;
