/// Platform-reported vendor strings and the short names catalogs use for them.
///
/// Matching is exact and case-sensitive; unrelated vendors must never collapse into one.
pub const VENDOR_ALIASES: &[(&str, &str)] = &[
	("Intel(R) Corporation", "Intel"),
	("GenuineIntel", "Intel"),
	("Advanced Micro Devices, Inc.", "AMD"),
	("NVIDIA Corporation", "NVIDIA"),
];

/// Maps a raw vendor string to its canonical short name, or returns it unchanged.
pub fn normalize(vendor: &str) -> &str {
	VENDOR_ALIASES
		.iter()
		.find(|(raw, _)| *raw == vendor)
		.map_or(vendor, |&(_, short)| short)
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("Intel(R) Corporation", "Intel")]
	#[case("GenuineIntel", "Intel")]
	#[case("Advanced Micro Devices, Inc.", "AMD")]
	#[case("NVIDIA Corporation", "NVIDIA")]
	#[case("AMD", "AMD")]
	#[case("ARM", "ARM")]
	#[case("nvidia corporation", "nvidia corporation")]
	#[case("NVIDIA Corporation ", "NVIDIA Corporation ")]
	fn exact_aliases_only(#[case] raw: &str, #[case] expected: &str) {
		assert_eq!(normalize(raw), expected);
	}

	#[test]
	fn known_aliases_are_idempotent() {
		for &(raw, short) in VENDOR_ALIASES {
			assert_eq!(normalize(normalize(raw)), short);
			assert_eq!(normalize(short), short);
		}
	}

	proptest! {
		#[test]
		fn normalize_is_idempotent(vendor in ".{0,40}") {
			let once = normalize(&vendor);
			prop_assert_eq!(normalize(once), once);
		}
	}
}
