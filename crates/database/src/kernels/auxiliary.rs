//! Matrix copy, padding, transposition and triangular inversion helpers.

use super::everywhere;
use crate::{DeviceRecord, KernelRecord, Precision, VendorRecord, params};

pub(super) fn copy(precision: Precision) -> KernelRecord {
	let vw = match precision {
		Precision::Half => 8,
		Precision::Single => 4,
		Precision::Double | Precision::ComplexSingle => 2,
		Precision::ComplexDouble => 1,
	};
	let vendors = vec![
		VendorRecord::new(
			"AMD",
			"GPU",
			vec![DeviceRecord::fallback(
				params! { "COPY_DIMX" => 16, "COPY_DIMY" => 8, "COPY_VW" => vw, "COPY_WPT" => 1 },
			)],
		),
		everywhere(params! { "COPY_DIMX" => 8, "COPY_DIMY" => 8, "COPY_VW" => vw, "COPY_WPT" => 1 }),
	];
	KernelRecord::new("Copy", precision, vendors)
}

pub(super) fn pad(precision: Precision) -> KernelRecord {
	let vendors = match precision {
		Precision::Single | Precision::Half => vec![
			VendorRecord::new(
				"NVIDIA",
				"GPU",
				vec![DeviceRecord::fallback(
					params! { "PAD_DIMX" => 32, "PAD_DIMY" => 8, "PAD_WPTX" => 1, "PAD_WPTY" => 2 },
				)],
			),
			everywhere(params! { "PAD_DIMX" => 16, "PAD_DIMY" => 8, "PAD_WPTX" => 1, "PAD_WPTY" => 1 }),
		],
		Precision::Double | Precision::ComplexSingle | Precision::ComplexDouble => vec![everywhere(
			params! { "PAD_DIMX" => 8, "PAD_DIMY" => 8, "PAD_WPTX" => 1, "PAD_WPTY" => 1 },
		)],
	};
	KernelRecord::new("Pad", precision, vendors)
}

pub(super) fn transpose(precision: Precision) -> KernelRecord {
	let wpt = match precision {
		Precision::Half => 8,
		Precision::Single => 4,
		Precision::Double | Precision::ComplexSingle => 2,
		Precision::ComplexDouble => 1,
	};
	let vendors = vec![
		VendorRecord::new(
			"Intel",
			"GPU",
			vec![DeviceRecord::fallback(
				params! { "TRA_DIM" => 16, "TRA_PAD" => 0, "TRA_SHUFFLE" => 1, "TRA_WPT" => wpt },
			)],
		),
		everywhere(params! { "TRA_DIM" => 8, "TRA_PAD" => 1, "TRA_SHUFFLE" => 0, "TRA_WPT" => wpt }),
	];
	KernelRecord::new("Transpose", precision, vendors)
}

pub(super) fn padtranspose(precision: Precision) -> KernelRecord {
	let wpt = if precision.is_complex() { 1 } else { 2 };
	KernelRecord::new(
		"Padtranspose",
		precision,
		vec![everywhere(params! { "PADTRA_PAD" => 1, "PADTRA_TILE" => 16, "PADTRA_WPT" => wpt })],
	)
}

pub(super) fn invert(precision: Precision) -> KernelRecord {
	KernelRecord::new(
		"Invert",
		precision,
		vec![everywhere(params! { "INTERNAL_BLOCK_SIZE" => 16 })],
	)
}
