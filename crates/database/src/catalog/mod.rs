//! Ordered collections of kernel records.

use crate::search::{Query, search};
use crate::{KernelRecord, Parameters};

mod ordering;

pub use ordering::OrderingViolation;

/// An ordered list of [`KernelRecord`]s searched as one unit.
///
/// Order is significant: earlier records shadow later ones that accept the same queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Catalog(Vec<KernelRecord>);

impl Catalog {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, record: KernelRecord) {
		self.0.push(record);
	}

	pub fn records(&self) -> &[KernelRecord] {
		&self.0
	}

	pub fn iter(&self) -> std::slice::Iter<'_, KernelRecord> {
		self.0.iter()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// See [`search`](crate::search::search).
	pub fn search(&self, query: &Query<'_>) -> Option<&Parameters> {
		search(self, query)
	}

	/// Lists entries that can never be selected because an earlier entry at the same level
	/// accepts everything they accept.
	pub fn ordering_violations(&self) -> Vec<OrderingViolation> {
		ordering::check(self)
	}
}

impl From<Vec<KernelRecord>> for Catalog {
	fn from(records: Vec<KernelRecord>) -> Self {
		Self(records)
	}
}

impl FromIterator<KernelRecord> for Catalog {
	fn from_iter<I: IntoIterator<Item = KernelRecord>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl<'a> IntoIterator for &'a Catalog {
	type Item = &'a KernelRecord;
	type IntoIter = std::slice::Iter<'a, KernelRecord>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
