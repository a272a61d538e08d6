use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Numeric precision a kernel is compiled for.
///
/// Only concrete precisions exist here. The "matches every precision" wildcard is catalog data
/// and lives in [`PrecisionSelector`](crate::PrecisionSelector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Precision {
	Half,
	Single,
	Double,
	ComplexSingle,
	ComplexDouble,
}

impl Precision {
	pub const ALL: [Precision; 5] = [
		Precision::Half,
		Precision::Single,
		Precision::Double,
		Precision::ComplexSingle,
		Precision::ComplexDouble,
	];

	/// Bit-width code used by the tuner (`16`, `32`, `64`, `3232`, `6464`).
	pub const fn code(self) -> u16 {
		match self {
			Precision::Half => 16,
			Precision::Single => 32,
			Precision::Double => 64,
			Precision::ComplexSingle => 3232,
			Precision::ComplexDouble => 6464,
		}
	}

	pub const fn is_complex(self) -> bool {
		matches!(self, Precision::ComplexSingle | Precision::ComplexDouble)
	}
}
