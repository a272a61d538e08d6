//! Overlays pinned to a single device.
//!
//! Used to inject custom tuning results for the device at hand without touching the compiled-in
//! tables. The overlay is owned by the caller and passed to later resolutions.

use crate::error::OverrideError;
use crate::{
	Catalog, DeviceInfo, DeviceRecord, KernelRecord, Parameters, Precision, Sources, VendorRecord,
	vendor,
};

/// Builds an overlay that makes `kernel` at `precision` resolve to `parameters` on `device`.
///
/// The kernel is first resolved through `sources` to learn which parameters it is tuned with;
/// each of them must be present in `parameters`. Extra names are kept as given.
///
/// # Errors
///
/// - [`OverrideError::UnknownKernel`] if no catalog in `sources` has an entry for the kernel.
/// - [`OverrideError::MissingParameter`] for the first expected name absent from `parameters`.
pub fn override_parameters(
	sources: &Sources<'_>,
	device: &dyn DeviceInfo,
	kernel: &str,
	precision: Precision,
	parameters: &Parameters,
) -> Result<Catalog, OverrideError> {
	let current = sources
		.resolve(device, kernel, precision)
		.map_err(OverrideError::UnknownKernel)?;

	if let Some(missing) = current.parameters().names().find(|name| !parameters.contains(name)) {
		return Err(OverrideError::MissingParameter {
			kernel: kernel.to_owned(),
			name: missing.to_owned(),
		});
	}

	tracing::debug!(
		kernel,
		%precision,
		device = device.name(),
		parameters = parameters.len(),
		"built parameter override"
	);

	let device_record = DeviceRecord::new(device.name(), parameters.clone());
	let vendor_record = VendorRecord::new(
		vendor::normalize(device.vendor()),
		device.device_type(),
		vec![device_record],
	);
	Ok(Catalog::from(vec![KernelRecord::new(
		kernel,
		precision,
		vec![vendor_record],
	)]))
}
