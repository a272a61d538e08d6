//! The device identity boundary.
//!
//! The accelerator runtime binding lives outside this crate; it only has to report four strings.

/// Identity of the device a kernel is being prepared for.
pub trait DeviceInfo {
	/// Device category reported by the runtime, e.g. `GPU` or `CPU`.
	fn device_type(&self) -> &str;
	/// Raw vendor string; resolution normalizes it.
	fn vendor(&self) -> &str;
	fn name(&self) -> &str;
	/// Space-separated extension list.
	fn capabilities(&self) -> &str;
}

/// Decides whether the platform-special fallback catalog applies to a device.
pub type FallbackPredicate = fn(&dyn DeviceInfo) -> bool;

/// Owned device identity for callers that already hold the strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DeviceIdentity {
	pub device_type: String,
	pub vendor: String,
	pub name: String,
	pub capabilities: String,
}

impl DeviceIdentity {
	pub fn new(
		device_type: impl Into<String>,
		vendor: impl Into<String>,
		name: impl Into<String>,
	) -> Self {
		Self {
			device_type: device_type.into(),
			vendor: vendor.into(),
			name: name.into(),
			capabilities: String::new(),
		}
	}

	pub fn with_capabilities(mut self, capabilities: impl Into<String>) -> Self {
		self.capabilities = capabilities.into();
		self
	}
}

impl DeviceInfo for DeviceIdentity {
	fn device_type(&self) -> &str {
		&self.device_type
	}

	fn vendor(&self) -> &str {
		&self.vendor
	}

	fn name(&self) -> &str {
		&self.name
	}

	fn capabilities(&self) -> &str {
		&self.capabilities
	}
}

/// Extension only the Apple OpenCL driver advertises.
pub const APPLE_EXTENSION: &str = "cl_APPLE_SetMemObjectDestructor";

/// True for a CPU device driven by Apple's OpenCL implementation.
///
/// That driver cannot run work-groups larger than one on the CPU, so these devices need the
/// Apple fallback tables ahead of the regular ones.
pub fn is_apple_cpu(device: &dyn DeviceInfo) -> bool {
	device.device_type() == "CPU" && device.capabilities().contains(APPLE_EXTENSION)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn apple_cpu_needs_type_and_extension() {
		let caps = "cl_khr_fp64 cl_APPLE_SetMemObjectDestructor cl_APPLE_ContextLoggingFunctions";
		let cpu = DeviceIdentity::new("CPU", "Intel", "Intel(R) Core(TM) i7").with_capabilities(caps);
		assert!(is_apple_cpu(&cpu));

		let gpu = DeviceIdentity::new("GPU", "AMD", "Radeon Pro 560").with_capabilities(caps);
		assert!(!is_apple_cpu(&gpu));

		let plain = DeviceIdentity::new("CPU", "Intel", "Xeon").with_capabilities("cl_khr_fp64");
		assert!(!is_apple_cpu(&plain));
	}
}
