//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid terrain configuration, terrain requests without input points, and axis names that
//! do not resolve to an [`crate::data::AxisVariable`].
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Terrain was requested from an empty position set.
    #[error("no data: terrain requires at least one input point")]
    NoData,

    #[error("unknown axis variable '{name}'")]
    UnknownAxis { name: String },
}
