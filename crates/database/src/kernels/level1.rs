use super::everywhere;
use crate::{DeviceRecord, KernelRecord, Precision, VendorRecord, params};

pub(super) fn xaxpy(precision: Precision) -> KernelRecord {
	let vendors = match precision {
		Precision::Half => vec![
			VendorRecord::new(
				"Intel",
				"GPU",
				vec![
					DeviceRecord::new(
						"Intel(R) HD Graphics 620",
						params! { "VW" => 8, "WGS" => 64, "WPT" => 1 },
					),
					DeviceRecord::fallback(params! { "VW" => 8, "WGS" => 512, "WPT" => 1 }),
				],
			),
			everywhere(params! { "VW" => 4, "WGS" => 64, "WPT" => 1 }),
		],
		Precision::Single => vec![
			VendorRecord::new(
				"AMD",
				"GPU",
				vec![
					DeviceRecord::new("Tahiti", params! { "VW" => 2, "WGS" => 64, "WPT" => 1 }),
					DeviceRecord::new("Hawaii", params! { "VW" => 1, "WGS" => 128, "WPT" => 1 }),
					DeviceRecord::fallback(params! { "VW" => 2, "WGS" => 256, "WPT" => 1 }),
				],
			),
			VendorRecord::new(
				"NVIDIA",
				"GPU",
				vec![
					DeviceRecord::new(
						"GeForce GTX 1080",
						params! { "VW" => 1, "WGS" => 256, "WPT" => 1 },
					),
					DeviceRecord::fallback(params! { "VW" => 1, "WGS" => 512, "WPT" => 1 }),
				],
			),
			VendorRecord::new(
				"Intel",
				"CPU",
				vec![DeviceRecord::fallback(params! { "VW" => 8, "WGS" => 128, "WPT" => 2 })],
			),
			everywhere(params! { "VW" => 2, "WGS" => 64, "WPT" => 1 }),
		],
		Precision::Double => vec![
			VendorRecord::new(
				"AMD",
				"GPU",
				vec![DeviceRecord::fallback(params! { "VW" => 1, "WGS" => 128, "WPT" => 1 })],
			),
			VendorRecord::new(
				"NVIDIA",
				"GPU",
				vec![DeviceRecord::fallback(params! { "VW" => 1, "WGS" => 256, "WPT" => 1 })],
			),
			everywhere(params! { "VW" => 1, "WGS" => 128, "WPT" => 1 }),
		],
		Precision::ComplexSingle => vec![
			VendorRecord::new(
				"AMD",
				"GPU",
				vec![DeviceRecord::fallback(params! { "VW" => 1, "WGS" => 128, "WPT" => 1 })],
			),
			everywhere(params! { "VW" => 1, "WGS" => 256, "WPT" => 1 }),
		],
		Precision::ComplexDouble => vec![everywhere(params! { "VW" => 1, "WGS" => 128, "WPT" => 1 })],
	};
	KernelRecord::new("Xaxpy", precision, vendors)
}

pub(super) fn xdot(precision: Precision) -> KernelRecord {
	let vendors = match precision {
		Precision::Half => vec![everywhere(params! { "WGS1" => 128, "WGS2" => 32 })],
		Precision::Single => vec![
			VendorRecord::new(
				"AMD",
				"GPU",
				vec![
					DeviceRecord::new("Tahiti", params! { "WGS1" => 128, "WGS2" => 32 }),
					DeviceRecord::fallback(params! { "WGS1" => 256, "WGS2" => 32 }),
				],
			),
			VendorRecord::new(
				"NVIDIA",
				"GPU",
				vec![DeviceRecord::fallback(params! { "WGS1" => 512, "WGS2" => 64 })],
			),
			VendorRecord::for_type(
				"CPU",
				vec![DeviceRecord::fallback(params! { "WGS1" => 64, "WGS2" => 32 })],
			),
			everywhere(params! { "WGS1" => 128, "WGS2" => 32 }),
		],
		Precision::Double | Precision::ComplexSingle => vec![
			VendorRecord::new(
				"NVIDIA",
				"GPU",
				vec![DeviceRecord::fallback(params! { "WGS1" => 256, "WGS2" => 64 })],
			),
			everywhere(params! { "WGS1" => 128, "WGS2" => 32 }),
		],
		Precision::ComplexDouble => vec![everywhere(params! { "WGS1" => 64, "WGS2" => 32 })],
	};
	KernelRecord::new("Xdot", precision, vendors)
}
