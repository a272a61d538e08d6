use std::borrow::Borrow;
use std::fmt;

use crate::Precision;

/// Either a concrete value or a wildcard that matches every value of its dimension.
///
/// Catalogs express specificity by ordering: an [`Exact`](Selector::Exact) entry must come
/// before the [`Default`](Selector::Default) entry it refines. A device that is genuinely named
/// `"default"` is `Exact("default")` and matches only itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Selector<T> {
	/// Matches anything.
	Default,
	Exact(T),
}

/// Selector over vendor names, device types and device names.
pub type NameSelector = Selector<String>;
/// Selector over precisions; the wildcard reads as `any`.
pub type PrecisionSelector = Selector<Precision>;

impl<T> Selector<T> {
	pub fn exact(value: impl Into<T>) -> Self {
		Selector::Exact(value.into())
	}

	pub fn is_default(&self) -> bool {
		matches!(self, Selector::Default)
	}

	pub fn as_exact(&self) -> Option<&T> {
		match self {
			Selector::Default => None,
			Selector::Exact(value) => Some(value),
		}
	}

	/// Returns true if this selector accepts `value`.
	pub fn matches<Q>(&self, value: &Q) -> bool
	where
		T: Borrow<Q>,
		Q: PartialEq + ?Sized,
	{
		match self {
			Selector::Default => true,
			Selector::Exact(own) => own.borrow() == value,
		}
	}
}

impl<T: PartialEq> Selector<T> {
	/// Returns true if every value accepted by `other` is also accepted by `self`.
	pub fn covers(&self, other: &Selector<T>) -> bool {
		match (self, other) {
			(Selector::Default, _) => true,
			(Selector::Exact(_), Selector::Default) => false,
			(Selector::Exact(a), Selector::Exact(b)) => a == b,
		}
	}
}

impl From<&str> for NameSelector {
	fn from(value: &str) -> Self {
		Selector::Exact(value.to_owned())
	}
}

impl From<String> for NameSelector {
	fn from(value: String) -> Self {
		Selector::Exact(value)
	}
}

impl From<Precision> for PrecisionSelector {
	fn from(value: Precision) -> Self {
		Selector::Exact(value)
	}
}

impl fmt::Display for NameSelector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Selector::Default => f.write_str("default"),
			Selector::Exact(name) => write!(f, "{name:?}"),
		}
	}
}

impl fmt::Display for PrecisionSelector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Selector::Default => f.write_str("any"),
			Selector::Exact(precision) => write!(f, "{precision}"),
		}
	}
}
