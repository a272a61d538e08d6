use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::Parameters;
use crate::params;

#[test]
fn macro_keeps_literal_order() {
	let p = params! { "WGS" => 64, "VW" => 2, "WPT" => 1 };
	assert_eq!(p.names().collect::<Vec<_>>(), ["WGS", "VW", "WPT"]);
	assert_eq!(p.get("VW"), Some(2));
	assert_eq!(p["WPT"], 1);
	assert!(params! {}.is_empty());
}

#[test]
fn insert_overwrites_in_place() {
	let mut p = params! { "A" => 1, "B" => 2 };
	assert_eq!(p.insert("A", 7), Some(1));
	assert_eq!(p.iter().collect::<Vec<_>>(), [("A", 7), ("B", 2)]);
}

#[test]
fn merge_is_last_writer_wins() {
	let mut out = params! { "KWG" => 16, "MWG" => 32 };
	out.merge(&params! { "MWG" => 64, "NWG" => 64 });
	assert_eq!(out.iter().collect::<Vec<_>>(), [("KWG", 16), ("MWG", 64), ("NWG", 64)]);
}

#[test]
fn missing_name_is_none() {
	let p = params! { "VW" => 1 };
	assert_eq!(p.get("WGS"), None);
	assert!(!p.contains("WGS"));
}

#[test]
#[should_panic]
fn index_panics_on_unknown_name() {
	let p = params! { "VW" => 1 };
	let _ = p["WGS"];
}

proptest! {
	#[test]
	fn collect_preserves_first_occurrence_order(
		entries in proptest::collection::vec(("[A-Z]{1,3}", 0usize..4096), 0..24)
	) {
		let params: Parameters = entries.iter().map(|(k, v)| (k.as_str(), *v)).collect();

		let mut expected_order: Vec<&str> = Vec::new();
		for (k, _) in &entries {
			if !expected_order.contains(&k.as_str()) {
				expected_order.push(k);
			}
		}
		prop_assert_eq!(params.names().collect::<Vec<_>>(), expected_order);

		for (k, _) in &entries {
			let last = entries.iter().rev().find(|(name, _)| name == k).map(|(_, v)| *v);
			prop_assert_eq!(params.get(k), last);
		}
	}
}
