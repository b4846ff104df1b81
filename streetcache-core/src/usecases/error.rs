use crate::gateways;
use thiserror::Error;

/// Failures that abort the resolution of an address.
///
/// Everything else is absorbed while resolving and reported
/// as a [`Degradation`](crate::entities::Degradation) of the result.
#[derive(Debug, Error)]
pub enum Error {
    #[error("The address is empty")]
    EmptyAddress,
    #[error("The address could not be found")]
    NotFound,
    #[error("No street view imagery available for this location")]
    ImageryUnavailable,
    #[error(transparent)]
    Upstream(#[from] gateways::Error),
}
