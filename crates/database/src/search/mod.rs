use crate::{Catalog, Parameters, Precision};


/// What a single catalog search looks for.
///
/// `vendor` is expected to be normalized already, see
/// [`vendor::normalize`](crate::vendor::normalize).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query<'a> {
	pub kernel: &'a str,
	pub device_type: &'a str,
	pub vendor: &'a str,
	pub device: &'a str,
	pub precision: Precision,
}

/// Finds the parameters that apply to `query` in one catalog.
///
/// Three nested scans, each taking the first entry that accepts the query:
///
/// 1. the first kernel record with the same kernel name and a matching precision,
/// 2. within it, the first vendor entry matching vendor and device type,
/// 3. within that, the first device entry matching the device name.
///
/// A scan that runs out of entries ends the search. Later records that would also have accepted
/// the query are never consulted.
pub fn search<'c>(catalog: &'c Catalog, query: &Query<'_>) -> Option<&'c Parameters> {
	let record = catalog.iter().find(|record| record.accepts(query))?;
	let vendor = record.vendors.iter().find(|vendor| vendor.accepts(query))?;
	let device = vendor.devices.iter().find(|device| device.accepts(query))?;
	Some(&device.parameters)
}
