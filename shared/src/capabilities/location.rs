use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::model::{CoordinateError, GeoPosition};

/// The shell resolves the fix itself and must give up after `timeout_ms`,
/// answering [`LocationError::Timeout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRequest {
    pub high_accuracy: bool,
    pub timeout_ms: u64,
}

impl LocationRequest {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Raw reading from the platform provider, not yet range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LocationError {
    #[error("position provider failed: {0}")]
    Provider(String),

    #[error("no position fix within {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("provider returned an invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

impl From<CoordinateError> for LocationError {
    fn from(e: CoordinateError) -> Self {
        Self::InvalidCoordinate(e.to_string())
    }
}

pub type LocationOutput = Result<LocationFix, LocationError>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum LocationOperation {
    /// One fresh fix. Nothing is cached between requests.
    CurrentPosition(LocationRequest),
}

impl Operation for LocationOperation {
    type Output = LocationOutput;
}

pub struct Location<E> {
    context: CapabilityContext<LocationOperation, E>,
}

impl<Ev> Capability<Ev> for Location<Ev> {
    type Operation = LocationOperation;
    type MappedSelf<MappedEv> = Location<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Location::new(self.context.map_event(f))
    }
}

impl<E> Location<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<LocationOperation, E>) -> Self {
        Self { context }
    }

    /// Exactly one provider call. The callback sees a checked position.
    pub fn current_position<F>(&self, request: LocationRequest, callback: F)
    where
        F: FnOnce(Result<GeoPosition, LocationError>) -> E + Send + 'static,
    {
        let ctx = self.context.clone();
        self.context.spawn(async move {
            let output = ctx
                .request_from_shell(LocationOperation::CurrentPosition(request))
                .await;
            ctx.update_app(callback(position_from_fix(output)));
        });
    }
}

/// Range-checks what the provider reported.
pub fn position_from_fix(output: LocationOutput) -> Result<GeoPosition, LocationError> {
    let fix = output?;
    GeoPosition::new(fix.latitude, fix.longitude).map_err(LocationError::from)
}
