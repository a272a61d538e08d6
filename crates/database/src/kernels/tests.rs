use rstest::rstest;

use super::*;
use crate::search::Query;

fn query(kernel: &str, precision: Precision) -> Query<'_> {
	Query {
		kernel,
		device_type: "Accelerator",
		vendor: "Unknown Vendor",
		device: "Unknown Device",
		precision,
	}
}

#[test]
fn builtin_has_every_family_at_every_precision() {
	assert_eq!(BUILTIN.len(), KERNEL_NAMES.len() * Precision::ALL.len());
	for &kernel in KERNEL_NAMES {
		for precision in Precision::ALL {
			assert!(
				BUILTIN.search(&query(kernel, precision)).is_some(),
				"{kernel} ({precision}) has no catch-all entry"
			);
		}
	}
}

#[test]
fn builtin_tables_are_well_ordered() {
	let violations = BUILTIN.ordering_violations();
	assert!(violations.is_empty(), "{violations:#?}");
	assert!(APPLE_CPU_FALLBACK.ordering_violations().is_empty());
}

#[test]
fn every_vendor_entry_ends_with_a_default_device() {
	for record in BUILTIN.iter().chain(APPLE_CPU_FALLBACK.iter()) {
		let last_vendor = record.vendors.last().expect("vendor entries");
		assert!(last_vendor.vendor.is_default() && last_vendor.device_type.is_default());
		for vendor in &record.vendors {
			let last_device = vendor.devices.last().expect("device entries");
			assert!(
				last_device.name.is_default(),
				"{} ({}) vendor {} has no default device",
				record.kernel,
				record.precision,
				vendor.vendor
			);
		}
	}
}

#[test]
fn parameter_names_agree_within_a_kernel() {
	for &kernel in KERNEL_NAMES {
		let mut expected: Option<Vec<&str>> = None;
		let records = BUILTIN.iter().chain(APPLE_CPU_FALLBACK.iter());
		for record in records.filter(|r| r.kernel == kernel) {
			for device in record.vendors.iter().flat_map(|v| &v.devices) {
				let names: Vec<&str> = device.parameters.names().collect();
				let first = expected.get_or_insert_with(|| names.clone());
				assert_eq!(&names, first, "{kernel}");
			}
		}
	}
}

#[rstest]
#[case("Xaxpy")]
#[case("Xgemm")]
#[case("XgemmDirect")]
#[case("Invert")]
fn apple_fallback_covers_every_precision(#[case] kernel: &str) {
	for precision in Precision::ALL {
		let found = APPLE_CPU_FALLBACK.search(&query(kernel, precision));
		assert!(found.is_some(), "{kernel} ({precision})");
	}
}

#[test]
fn apple_fallback_has_no_kernel_selection() {
	assert_eq!(APPLE_CPU_FALLBACK.len(), KERNEL_NAMES.len() - 1);
	assert!(
		APPLE_CPU_FALLBACK
			.search(&query("KernelSelection", Precision::Single))
			.is_none()
	);
}
