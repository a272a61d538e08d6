//! Record types making up a catalog.
//!
//! The nesting is kernel/precision, then vendor/device type, then device name. At every level a
//! linear scan takes the first entry that accepts the query, so wildcard entries go last.

use crate::search::Query;
use crate::{NameSelector, Parameters, PrecisionSelector, Selector};

/// Parameters for one device name (or for any device).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceRecord {
	pub name: NameSelector,
	pub parameters: Parameters,
}

impl DeviceRecord {
	pub fn new(name: impl Into<NameSelector>, parameters: Parameters) -> Self {
		Self {
			name: name.into(),
			parameters,
		}
	}

	/// Entry used when no named device of the vendor matched.
	pub fn fallback(parameters: Parameters) -> Self {
		Self {
			name: Selector::Default,
			parameters,
		}
	}

	pub fn accepts(&self, query: &Query<'_>) -> bool {
		self.name.matches(query.device)
	}
}

/// Device entries for one vendor and device type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VendorRecord {
	pub vendor: NameSelector,
	pub device_type: NameSelector,
	pub devices: Vec<DeviceRecord>,
}

impl VendorRecord {
	pub fn new(
		vendor: impl Into<NameSelector>,
		device_type: impl Into<NameSelector>,
		devices: Vec<DeviceRecord>,
	) -> Self {
		Self {
			vendor: vendor.into(),
			device_type: device_type.into(),
			devices,
		}
	}

	/// Entry matching every vendor and device type.
	pub fn fallback(devices: Vec<DeviceRecord>) -> Self {
		Self {
			vendor: Selector::Default,
			device_type: Selector::Default,
			devices,
		}
	}

	/// Entry matching every vendor for one device type.
	pub fn for_type(device_type: impl Into<NameSelector>, devices: Vec<DeviceRecord>) -> Self {
		Self {
			vendor: Selector::Default,
			device_type: device_type.into(),
			devices,
		}
	}

	pub fn accepts(&self, query: &Query<'_>) -> bool {
		self.vendor.matches(query.vendor) && self.device_type.matches(query.device_type)
	}

	pub(crate) fn covers(&self, other: &VendorRecord) -> bool {
		self.vendor.covers(&other.vendor) && self.device_type.covers(&other.device_type)
	}
}

/// Vendor entries for one kernel at one precision (or at every precision).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KernelRecord {
	pub kernel: String,
	pub precision: PrecisionSelector,
	pub vendors: Vec<VendorRecord>,
}

impl KernelRecord {
	pub fn new(
		kernel: impl Into<String>,
		precision: impl Into<PrecisionSelector>,
		vendors: Vec<VendorRecord>,
	) -> Self {
		Self {
			kernel: kernel.into(),
			precision: precision.into(),
			vendors,
		}
	}

	pub fn accepts(&self, query: &Query<'_>) -> bool {
		self.kernel == query.kernel && self.precision.matches(&query.precision)
	}

	pub(crate) fn covers(&self, other: &KernelRecord) -> bool {
		self.kernel == other.kernel && self.precision.covers(&other.precision)
	}
}
