use super::everywhere;
use crate::{DeviceRecord, KernelRecord, Parameters, Precision, VendorRecord, params};

/// Indirect GEMM parameters; the order matches the generator's expectations.
#[allow(clippy::too_many_arguments)]
fn gemm(
	kwg: usize,
	kwi: usize,
	mdima: usize,
	mdimc: usize,
	mwg: usize,
	ndimb: usize,
	ndimc: usize,
	nwg: usize,
	sa: usize,
	sb: usize,
	vwm: usize,
	vwn: usize,
) -> Parameters {
	params! {
		"GEMMK" => 0,
		"KREG" => 1,
		"KWG" => kwg,
		"KWI" => kwi,
		"MDIMA" => mdima,
		"MDIMC" => mdimc,
		"MWG" => mwg,
		"NDIMB" => ndimb,
		"NDIMC" => ndimc,
		"NWG" => nwg,
		"SA" => sa,
		"SB" => sb,
		"STRM" => 0,
		"STRN" => 0,
		"VWM" => vwm,
		"VWN" => vwn,
	}
}

pub(super) fn xgemm(precision: Precision) -> KernelRecord {
	let vendors = match precision {
		Precision::Single => vec![
			VendorRecord::new(
				"AMD",
				"GPU",
				vec![
					DeviceRecord::new("Tahiti", gemm(32, 2, 16, 16, 64, 16, 16, 64, 1, 1, 2, 2)),
					DeviceRecord::new("Hawaii", gemm(16, 2, 32, 16, 128, 8, 16, 128, 1, 1, 4, 4)),
					DeviceRecord::fallback(gemm(32, 2, 16, 16, 64, 16, 16, 64, 1, 1, 2, 2)),
				],
			),
			VendorRecord::new(
				"NVIDIA",
				"GPU",
				vec![
					DeviceRecord::new(
						"GeForce GTX 1080",
						gemm(16, 2, 16, 16, 128, 16, 16, 128, 1, 1, 4, 2),
					),
					DeviceRecord::new("Tesla K40m", gemm(16, 8, 16, 16, 64, 8, 16, 128, 1, 1, 2, 4)),
					DeviceRecord::fallback(gemm(32, 2, 16, 16, 64, 16, 16, 64, 1, 1, 2, 4)),
				],
			),
			VendorRecord::new(
				"Intel",
				"CPU",
				vec![DeviceRecord::fallback(gemm(32, 8, 16, 8, 128, 8, 8, 64, 0, 0, 8, 4))],
			),
			everywhere(gemm(32, 2, 16, 8, 64, 16, 8, 64, 0, 0, 4, 4)),
		],
		Precision::Double => vec![
			VendorRecord::new(
				"AMD",
				"GPU",
				vec![DeviceRecord::fallback(gemm(16, 2, 16, 8, 64, 16, 16, 64, 1, 0, 2, 2))],
			),
			VendorRecord::new(
				"NVIDIA",
				"GPU",
				vec![DeviceRecord::fallback(gemm(16, 2, 16, 16, 64, 16, 16, 64, 1, 1, 2, 2))],
			),
			everywhere(gemm(32, 2, 16, 16, 32, 16, 16, 32, 0, 0, 2, 2)),
		],
		Precision::Half => vec![
			VendorRecord::new(
				"Intel",
				"GPU",
				vec![DeviceRecord::fallback(gemm(32, 2, 16, 8, 64, 16, 8, 64, 1, 1, 8, 4))],
			),
			everywhere(gemm(32, 2, 16, 8, 64, 8, 8, 64, 0, 0, 4, 4)),
		],
		Precision::ComplexSingle => vec![
			VendorRecord::new(
				"NVIDIA",
				"GPU",
				vec![DeviceRecord::fallback(gemm(16, 2, 16, 16, 64, 16, 16, 64, 1, 1, 1, 2))],
			),
			everywhere(gemm(16, 2, 16, 16, 32, 16, 16, 32, 0, 0, 1, 1)),
		],
		Precision::ComplexDouble => {
			vec![everywhere(gemm(16, 2, 16, 16, 32, 16, 16, 32, 0, 0, 1, 1))]
		}
	};
	KernelRecord::new("Xgemm", precision, vendors)
}

pub(super) fn xgemm_direct(precision: Precision) -> KernelRecord {
	let direct = |wgd: usize, mdimcd: usize, ndimcd: usize, vwmd: usize, vwnd: usize| {
		params! {
			"KWID" => 2,
			"MDIMAD" => mdimcd,
			"MDIMCD" => mdimcd,
			"NDIMBD" => ndimcd,
			"NDIMCD" => ndimcd,
			"PADA" => 1,
			"PADB" => 1,
			"VWMD" => vwmd,
			"VWND" => vwnd,
			"WGD" => wgd,
		}
	};
	let vendors = match precision {
		Precision::Single => vec![
			VendorRecord::new(
				"AMD",
				"GPU",
				vec![DeviceRecord::fallback(direct(32, 8, 8, 2, 2))],
			),
			VendorRecord::new(
				"NVIDIA",
				"GPU",
				vec![
					DeviceRecord::new("GeForce GTX 1080", direct(32, 16, 16, 2, 2)),
					DeviceRecord::fallback(direct(32, 8, 8, 1, 1)),
				],
			),
			everywhere(direct(32, 8, 8, 1, 1)),
		],
		Precision::Half | Precision::Double => vec![everywhere(direct(16, 8, 8, 1, 1))],
		Precision::ComplexSingle | Precision::ComplexDouble => {
			vec![everywhere(direct(16, 8, 8, 1, 1))]
		}
	};
	KernelRecord::new("XgemmDirect", precision, vendors)
}

/// Problem size from which the indirect GEMM kernel beats the direct one.
pub(super) fn kernel_selection(precision: Precision) -> KernelRecord {
	let vendors = match precision {
		Precision::Single => vec![
			VendorRecord::new(
				"AMD",
				"GPU",
				vec![DeviceRecord::fallback(params! { "XGEMM_MIN_INDIRECT_SIZE" => 1280 })],
			),
			VendorRecord::new(
				"NVIDIA",
				"GPU",
				vec![DeviceRecord::fallback(params! { "XGEMM_MIN_INDIRECT_SIZE" => 768 })],
			),
			VendorRecord::for_type(
				"CPU",
				vec![DeviceRecord::fallback(params! { "XGEMM_MIN_INDIRECT_SIZE" => 128 })],
			),
			everywhere(params! { "XGEMM_MIN_INDIRECT_SIZE" => 512 }),
		],
		Precision::Half | Precision::Double | Precision::ComplexSingle | Precision::ComplexDouble => {
			vec![everywhere(params! { "XGEMM_MIN_INDIRECT_SIZE" => 384 })]
		}
	};
	KernelRecord::new("KernelSelection", precision, vendors)
}
