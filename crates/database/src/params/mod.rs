use std::ops::Index;

use indexmap::IndexMap;

#[cfg(test)]
mod tests;

/// Named integer tuning values, in insertion order.
///
/// Keys are unique. Records in a catalog hold one of these each; resolution copies the winning
/// record's mapping into a fresh, caller-owned one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Parameters(IndexMap<String, usize>);

impl Parameters {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self(IndexMap::with_capacity(capacity))
	}

	/// Sets `name` to `value`, returning the previous value.
	///
	/// An existing key keeps its original position.
	pub fn insert(&mut self, name: impl Into<String>, value: usize) -> Option<usize> {
		self.0.insert(name.into(), value)
	}

	pub fn get(&self, name: &str) -> Option<usize> {
		self.0.get(name).copied()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.0.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
		self.0.iter().map(|(name, &value)| (name.as_str(), value))
	}

	pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
		self.0.keys().map(String::as_str)
	}

	/// Copies every entry of `other` into `self`; on duplicate keys `other` wins.
	pub fn merge(&mut self, other: &Parameters) {
		self.0.reserve(other.len());
		for (name, value) in other.iter() {
			self.insert(name, value);
		}
	}
}

impl Index<&str> for Parameters {
	type Output = usize;

	/// # Panics
	///
	/// Panics if `name` is not present.
	fn index(&self, name: &str) -> &usize {
		&self.0[name]
	}
}

impl<K: Into<String>> FromIterator<(K, usize)> for Parameters {
	fn from_iter<I: IntoIterator<Item = (K, usize)>>(iter: I) -> Self {
		let mut params = Parameters::new();
		params.extend(iter);
		params
	}
}

impl<K: Into<String>> Extend<(K, usize)> for Parameters {
	fn extend<I: IntoIterator<Item = (K, usize)>>(&mut self, iter: I) {
		for (name, value) in iter {
			self.insert(name, value);
		}
	}
}

/// Builds [`Parameters`] from `"NAME" => value` pairs, keeping their order.
///
/// ```
/// let p = tunedb_database::params! { "VW" => 4, "WGS" => 128 };
/// assert_eq!(p.names().collect::<Vec<_>>(), ["VW", "WGS"]);
/// ```
#[macro_export]
macro_rules! params {
	() => {
		$crate::Parameters::new()
	};
	($($name:literal => $value:expr),+ $(,)?) => {
		[$(($name, $value as usize)),+]
			.into_iter()
			.collect::<$crate::Parameters>()
	};
}
