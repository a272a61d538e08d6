//! Detection of shadowed catalog entries.
//!
//! Resolution never backtracks, so an entry is dead data whenever an earlier sibling accepts a
//! superset of its queries. The usual cause is a wildcard entry placed before a specific one.

use std::fmt;

use super::Catalog;
use crate::{NameSelector, PrecisionSelector};

/// An unreachable entry and the earlier sibling that shadows it.
///
/// Indices are positions within the catalog, the record's vendor list and the vendor's device
/// list respectively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderingViolation {
	Kernel {
		kernel: String,
		precision: PrecisionSelector,
		record: usize,
		shadowed_by: usize,
	},
	Vendor {
		kernel: String,
		record: usize,
		vendor: usize,
		shadowed_by: usize,
	},
	Device {
		kernel: String,
		record: usize,
		vendor: usize,
		device: NameSelector,
		index: usize,
		shadowed_by: usize,
	},
}

impl fmt::Display for OrderingViolation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			OrderingViolation::Kernel {
				kernel,
				precision,
				record,
				shadowed_by,
			} => write!(
				f,
				"record #{record} ({kernel}, {precision}) is shadowed by record #{shadowed_by}"
			),
			OrderingViolation::Vendor {
				kernel,
				record,
				vendor,
				shadowed_by,
			} => write!(
				f,
				"{kernel} record #{record}: vendor entry #{vendor} is shadowed by entry #{shadowed_by}"
			),
			OrderingViolation::Device {
				kernel,
				record,
				vendor,
				device,
				index,
				shadowed_by,
			} => write!(
				f,
				"{kernel} record #{record}, vendor entry #{vendor}: device {device} (#{index}) is shadowed by entry #{shadowed_by}"
			),
		}
	}
}

/// First earlier index whose entry covers the entry at `index`.
fn shadowing<T>(items: &[T], index: usize, covers: impl Fn(&T, &T) -> bool) -> Option<usize> {
	items[..index].iter().position(|earlier| covers(earlier, &items[index]))
}

pub(super) fn check(catalog: &Catalog) -> Vec<OrderingViolation> {
	let records = catalog.records();
	let mut violations = Vec::new();

	for (r, record) in records.iter().enumerate() {
		if let Some(shadowed_by) = shadowing(records, r, |a, b| a.covers(b)) {
			violations.push(OrderingViolation::Kernel {
				kernel: record.kernel.clone(),
				precision: record.precision.clone(),
				record: r,
				shadowed_by,
			});
		}

		for (v, vendor) in record.vendors.iter().enumerate() {
			if let Some(shadowed_by) = shadowing(&record.vendors, v, |a, b| a.covers(b)) {
				violations.push(OrderingViolation::Vendor {
					kernel: record.kernel.clone(),
					record: r,
					vendor: v,
					shadowed_by,
				});
			}

			for (d, device) in vendor.devices.iter().enumerate() {
				if let Some(shadowed_by) =
					shadowing(&vendor.devices, d, |a, b| a.name.covers(&b.name))
				{
					violations.push(OrderingViolation::Device {
						kernel: record.kernel.clone(),
						record: r,
						vendor: v,
						device: device.name.clone(),
						index: d,
						shadowed_by,
					});
				}
			}
		}
	}

	violations
}
