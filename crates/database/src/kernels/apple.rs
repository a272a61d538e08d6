//! Apple OpenCL CPU driver fallback.
//!
//! The driver rejects work-groups larger than one on the CPU, so every work-group dimension here
//! is 1. The records apply to every precision.

use super::everywhere;
use crate::{Catalog, KernelRecord, Parameters, PrecisionSelector, params};

fn any_precision(kernel: &str, parameters: Parameters) -> KernelRecord {
	KernelRecord::new(kernel, PrecisionSelector::Default, vec![everywhere(parameters)])
}

pub(super) fn catalog() -> Catalog {
	let records: [(&str, Parameters); 14] = [
		("Xaxpy", params! { "VW" => 8, "WGS" => 1, "WPT" => 4 }),
		("Xdot", params! { "WGS1" => 1, "WGS2" => 1 }),
		("Xgemv", params! { "WGS1" => 1, "WPT1" => 4 }),
		("XgemvFast", params! { "VW2" => 1, "WGS2" => 1, "WPT2" => 1 }),
		("XgemvFastRot", params! { "VW3" => 1, "WGS3" => 1, "WPT3" => 1 }),
		("Xger", params! { "WGS1" => 1, "WGS2" => 1, "WPT" => 4 }),
		("Xtrsv", params! { "TRSV_BLOCK_SIZE" => 32 }),
		(
			"Xgemm",
			params! {
				"GEMMK" => 0,
				"KREG" => 1,
				"KWG" => 1,
				"KWI" => 1,
				"MDIMA" => 1,
				"MDIMC" => 1,
				"MWG" => 1,
				"NDIMB" => 1,
				"NDIMC" => 1,
				"NWG" => 1,
				"SA" => 0,
				"SB" => 0,
				"STRM" => 0,
				"STRN" => 0,
				"VWM" => 1,
				"VWN" => 1,
			},
		),
		(
			"XgemmDirect",
			params! {
				"KWID" => 1,
				"MDIMAD" => 1,
				"MDIMCD" => 1,
				"NDIMBD" => 1,
				"NDIMCD" => 1,
				"PADA" => 0,
				"PADB" => 0,
				"VWMD" => 1,
				"VWND" => 1,
				"WGD" => 1,
			},
		),
		("Copy", params! { "COPY_DIMX" => 1, "COPY_DIMY" => 1, "COPY_VW" => 1, "COPY_WPT" => 1 }),
		("Pad", params! { "PAD_DIMX" => 1, "PAD_DIMY" => 1, "PAD_WPTX" => 1, "PAD_WPTY" => 1 }),
		(
			"Transpose",
			params! { "TRA_DIM" => 1, "TRA_PAD" => 0, "TRA_SHUFFLE" => 0, "TRA_WPT" => 1 },
		),
		("Padtranspose", params! { "PADTRA_PAD" => 0, "PADTRA_TILE" => 1, "PADTRA_WPT" => 1 }),
		("Invert", params! { "INTERNAL_BLOCK_SIZE" => 16 }),
	];
	records
		.into_iter()
		.map(|(kernel, parameters)| any_precision(kernel, parameters))
		.collect()
}
