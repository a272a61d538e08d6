//! Compiled-in tuning tables.
//!
//! Each kernel family has a generator producing its record for one precision. Within a record,
//! vendor and device entries are listed most specific first; the catch-all entry is last.

use std::sync::LazyLock;

use crate::{Catalog, DeviceRecord, KernelRecord, Parameters, Precision, VendorRecord};

mod apple;
mod auxiliary;
mod level1;
mod level2;
mod level3;
#[cfg(test)]
mod tests;

/// Builds one kernel family's record for a precision.
type Family = fn(Precision) -> KernelRecord;

const FAMILIES: &[Family] = &[
	level1::xaxpy,
	level1::xdot,
	level2::xgemv,
	level2::xgemv_fast,
	level2::xgemv_fast_rot,
	level2::xger,
	level2::xtrsv,
	level3::xgemm,
	level3::xgemm_direct,
	auxiliary::copy,
	auxiliary::pad,
	auxiliary::transpose,
	auxiliary::padtranspose,
	auxiliary::invert,
	level3::kernel_selection,
];

/// Kernel names present in [`BUILTIN`], in catalog order.
pub const KERNEL_NAMES: &[&str] = &[
	"Xaxpy",
	"Xdot",
	"Xgemv",
	"XgemvFast",
	"XgemvFastRot",
	"Xger",
	"Xtrsv",
	"Xgemm",
	"XgemmDirect",
	"Copy",
	"Pad",
	"Transpose",
	"Padtranspose",
	"Invert",
	"KernelSelection",
];

/// The primary catalog: every kernel family at every precision.
pub static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
	FAMILIES
		.iter()
		.flat_map(|family| Precision::ALL.map(family))
		.collect()
});

/// Precision-independent tables for CPUs driven by the Apple OpenCL implementation.
pub static APPLE_CPU_FALLBACK: LazyLock<Catalog> = LazyLock::new(apple::catalog);

/// Vendor entry matching every vendor and device.
fn everywhere(parameters: Parameters) -> VendorRecord {
	VendorRecord::fallback(vec![DeviceRecord::fallback(parameters)])
}
