use super::everywhere;
use crate::{DeviceRecord, KernelRecord, Precision, VendorRecord, params};

pub(super) fn xgemv(precision: Precision) -> KernelRecord {
	let vendors = match precision {
		Precision::Single => vec![
			VendorRecord::new(
				"AMD",
				"GPU",
				vec![
					DeviceRecord::new("Tahiti", params! { "WGS1" => 256, "WPT1" => 1 }),
					DeviceRecord::fallback(params! { "WGS1" => 128, "WPT1" => 1 }),
				],
			),
			VendorRecord::new(
				"NVIDIA",
				"GPU",
				vec![DeviceRecord::fallback(params! { "WGS1" => 256, "WPT1" => 1 })],
			),
			VendorRecord::for_type(
				"CPU",
				vec![DeviceRecord::fallback(params! { "WGS1" => 64, "WPT1" => 4 })],
			),
			everywhere(params! { "WGS1" => 128, "WPT1" => 1 }),
		],
		Precision::Double => vec![
			VendorRecord::for_type(
				"CPU",
				vec![DeviceRecord::fallback(params! { "WGS1" => 64, "WPT1" => 2 })],
			),
			everywhere(params! { "WGS1" => 128, "WPT1" => 1 }),
		],
		Precision::Half | Precision::ComplexSingle | Precision::ComplexDouble => {
			vec![everywhere(params! { "WGS1" => 64, "WPT1" => 1 })]
		}
	};
	KernelRecord::new("Xgemv", precision, vendors)
}

pub(super) fn xgemv_fast(precision: Precision) -> KernelRecord {
	let vendors = match precision {
		Precision::Single => vec![
			VendorRecord::new(
				"AMD",
				"GPU",
				vec![DeviceRecord::fallback(
					params! { "VW2" => 1, "WGS2" => 128, "WPT2" => 1 },
				)],
			),
			VendorRecord::new(
				"NVIDIA",
				"GPU",
				vec![
					DeviceRecord::new(
						"GeForce GTX 1080",
						params! { "VW2" => 1, "WGS2" => 64, "WPT2" => 1 },
					),
					DeviceRecord::fallback(params! { "VW2" => 1, "WGS2" => 256, "WPT2" => 1 }),
				],
			),
			everywhere(params! { "VW2" => 1, "WGS2" => 128, "WPT2" => 1 }),
		],
		Precision::Half => vec![everywhere(params! { "VW2" => 2, "WGS2" => 128, "WPT2" => 2 })],
		Precision::Double | Precision::ComplexSingle | Precision::ComplexDouble => {
			vec![everywhere(params! { "VW2" => 1, "WGS2" => 64, "WPT2" => 1 })]
		}
	};
	KernelRecord::new("XgemvFast", precision, vendors)
}

pub(super) fn xgemv_fast_rot(precision: Precision) -> KernelRecord {
	let vendors = match precision {
		Precision::Single => vec![
			VendorRecord::new(
				"Intel",
				"GPU",
				vec![DeviceRecord::fallback(
					params! { "VW3" => 4, "WGS3" => 64, "WPT3" => 16 },
				)],
			),
			VendorRecord::new(
				"NVIDIA",
				"GPU",
				vec![DeviceRecord::fallback(
					params! { "VW3" => 8, "WGS3" => 32, "WPT3" => 32 },
				)],
			),
			everywhere(params! { "VW3" => 8, "WGS3" => 32, "WPT3" => 32 }),
		],
		Precision::Double => vec![everywhere(params! { "VW3" => 4, "WGS3" => 16, "WPT3" => 16 })],
		Precision::Half | Precision::ComplexSingle | Precision::ComplexDouble => {
			vec![everywhere(params! { "VW3" => 2, "WGS3" => 16, "WPT3" => 16 })]
		}
	};
	KernelRecord::new("XgemvFastRot", precision, vendors)
}

pub(super) fn xger(precision: Precision) -> KernelRecord {
	let vendors = match precision {
		Precision::Single | Precision::ComplexSingle => vec![
			VendorRecord::new(
				"AMD",
				"GPU",
				vec![
					DeviceRecord::new("Hawaii", params! { "WGS1" => 64, "WGS2" => 2, "WPT" => 1 }),
					DeviceRecord::fallback(params! { "WGS1" => 32, "WGS2" => 4, "WPT" => 1 }),
				],
			),
			VendorRecord::new(
				"ARM",
				"GPU",
				vec![
					DeviceRecord::new(
						"Mali-T628",
						params! { "WGS1" => 64, "WGS2" => 1, "WPT" => 4 },
					),
					DeviceRecord::fallback(params! { "WGS1" => 16, "WGS2" => 4, "WPT" => 2 }),
				],
			),
			everywhere(params! { "WGS1" => 32, "WGS2" => 8, "WPT" => 1 }),
		],
		Precision::Half | Precision::Double | Precision::ComplexDouble => {
			vec![everywhere(params! { "WGS1" => 32, "WGS2" => 8, "WPT" => 1 })]
		}
	};
	KernelRecord::new("Xger", precision, vendors)
}

pub(super) fn xtrsv(precision: Precision) -> KernelRecord {
	let block = if precision.is_complex() { 16 } else { 32 };
	KernelRecord::new(
		"Xtrsv",
		precision,
		vec![everywhere(params! { "TRSV_BLOCK_SIZE" => block })],
	)
}
