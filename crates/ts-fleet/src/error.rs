use thiserror::Error;
use ts_core::{RouteId, TsError, VehicleId};

#[derive(Debug, Error)]
pub enum FleetError {
    #[error(transparent)]
    Config(#[from] TsError),

    #[error("vehicle {0} not found in fleet")]
    VehicleNotFound(VehicleId),

    #[error("vehicle {label:?} references route {route}, which does not exist")]
    UnknownRoute { label: String, route: RouteId },
}

pub type FleetResult<T> = Result<T, FleetError>;
