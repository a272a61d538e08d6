//! Error types for parameter resolution.

use thiserror::Error;

use crate::Precision;

/// Resolution failed in every catalog.
///
/// This is the only error resolution surfaces. Callers must not run the kernel with guessed
/// parameters; whether to abort or take an untuned path is their decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatabaseError {
	#[error(
		"database entry not found: no tuned parameters for {kernel} ({precision}) on {vendor} {device_type} device {device:?}"
	)]
	NotFound {
		kernel: String,
		precision: Precision,
		/// Normalized vendor name.
		vendor: String,
		device_type: String,
		device: String,
	},
}

/// Errors building an override overlay.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverrideError {
	/// The kernel has no entry to override for this device.
	#[error("cannot override parameters: {0}")]
	UnknownKernel(#[source] DatabaseError),

	/// The override omits a parameter the kernel is tuned with.
	#[error("override for {kernel} is missing parameter {name}")]
	MissingParameter { kernel: String, name: String },
}

/// Result type for resolution.
pub type Result<T> = std::result::Result<T, DatabaseError>;
