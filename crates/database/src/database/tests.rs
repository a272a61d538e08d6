use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use super::{CatalogSource, Database, Sources};
use crate::{
	Catalog, DatabaseError, DeviceIdentity, DeviceInfo, DeviceRecord, KernelRecord, Parameters,
	Precision, PrecisionSelector, VendorRecord, is_apple_cpu, kernels, params,
};

fn single_record(kernel: &str, parameters: Parameters) -> Catalog {
	Catalog::from(vec![KernelRecord::new(
		kernel,
		Precision::Single,
		vec![VendorRecord::fallback(vec![DeviceRecord::fallback(parameters)])],
	)])
}

fn scenario_catalog() -> Catalog {
	Catalog::from(vec![KernelRecord::new(
		"Xaxpy",
		Precision::Single,
		vec![
			VendorRecord::new(
				"AMD",
				"GPU",
				vec![
					DeviceRecord::new("Tahiti", params! { "VW" => 4 }),
					DeviceRecord::fallback(params! { "VW" => 1 }),
				],
			),
			VendorRecord::fallback(vec![DeviceRecord::fallback(params! { "VW" => 2 })]),
		],
	)])
}

fn always(_: &dyn DeviceInfo) -> bool {
	true
}

fn never(_: &dyn DeviceInfo) -> bool {
	false
}

#[rstest]
#[case::exact_device("Advanced Micro Devices, Inc.", "Tahiti", 4)]
#[case::already_short_vendor("AMD", "Tahiti", 4)]
#[case::vendor_default("Advanced Micro Devices, Inc.", "Other", 1)]
#[case::global_default("NVIDIA Corporation", "X", 2)]
fn vendor_is_normalized_before_search(
	#[case] vendor: &str,
	#[case] device: &str,
	#[case] expected: usize,
) {
	let catalog = scenario_catalog();
	let device = DeviceIdentity::new("GPU", vendor, device);
	let db = Sources::new(&catalog)
		.resolve(&device, "Xaxpy", Precision::Single)
		.unwrap();
	assert_eq!(db["VW"], expected);
	assert_eq!(db.source(), CatalogSource::Primary);
}

#[test]
fn overlay_takes_precedence_over_primary() {
	let primary = single_record("Xgemm", params! { "MWG" => 64, "NWG" => 64 });
	let overlay = single_record("Xgemm", params! { "MWG" => 128, "NWG" => 32 });
	let device = DeviceIdentity::new("GPU", "NVIDIA Corporation", "GeForce GTX 1080");

	let db = Sources::new(&primary)
		.with_overlay(&overlay)
		.resolve(&device, "Xgemm", Precision::Single)
		.unwrap();
	assert_eq!(db.source(), CatalogSource::Overlay);
	assert_eq!(db.parameters(), &params! { "MWG" => 128, "NWG" => 32 });
}

#[test]
fn overlay_miss_falls_through_to_primary() {
	let primary = single_record("Xgemm", params! { "MWG" => 64 });
	let overlay = single_record("Xaxpy", params! { "VW" => 8 });
	let device = DeviceIdentity::new("GPU", "AMD", "Tahiti");

	let db = Sources::new(&primary)
		.with_overlay(&overlay)
		.resolve(&device, "Xgemm", Precision::Single)
		.unwrap();
	assert_eq!(db.source(), CatalogSource::Primary);
	assert_eq!(db.get("MWG"), Some(64));
	assert_eq!(db.get("VW"), None);
}

#[test]
fn platform_fallback_only_when_predicate_holds() {
	let primary = single_record("Xaxpy", params! { "VW" => 2, "WGS" => 64 });
	let fallback = single_record("Xaxpy", params! { "VW" => 8, "WGS" => 1 });
	let device = DeviceIdentity::new("CPU", "Intel", "Core i7");

	let with = Sources::new(&primary).with_platform_fallback(&fallback, always);
	let db = with.resolve(&device, "Xaxpy", Precision::Single).unwrap();
	assert_eq!(db.source(), CatalogSource::PlatformFallback);
	assert_eq!(db["WGS"], 1);

	let without = Sources::new(&primary).with_platform_fallback(&fallback, never);
	let db = without.resolve(&device, "Xaxpy", Precision::Single).unwrap();
	assert_eq!(db.source(), CatalogSource::Primary);
	assert_eq!(db["WGS"], 64);

	let removed = with.without_platform_fallback();
	assert_eq!(removed.candidates(&device).len(), 1);
}

#[test]
fn apple_predicate_selects_apple_tables() {
	let apple_cpu = DeviceIdentity::new("CPU", "Intel", "Intel(R) Core(TM) i7-4870HQ")
		.with_capabilities("cl_APPLE_SetMemObjectDestructor cl_khr_fp64");
	let sources = Sources::new(&kernels::BUILTIN)
		.with_platform_fallback(&kernels::APPLE_CPU_FALLBACK, is_apple_cpu);

	let db = sources.resolve(&apple_cpu, "Xgemm", Precision::Double).unwrap();
	assert_eq!(db.source(), CatalogSource::PlatformFallback);
	assert_eq!(db["MDIMC"], 1);

	// No Apple record for kernel selection: the primary catalog answers.
	let db = sources
		.resolve(&apple_cpu, "KernelSelection", Precision::Double)
		.unwrap();
	assert_eq!(db.source(), CatalogSource::Primary);
}

#[test]
fn overlay_precedes_platform_fallback() {
	let primary = single_record("Copy", params! { "COPY_VW" => 1 });
	let fallback = single_record("Copy", params! { "COPY_VW" => 2 });
	let overlay = single_record("Copy", params! { "COPY_VW" => 3 });
	let device = DeviceIdentity::new("CPU", "Intel", "Xeon");

	let sources = Sources::new(&primary)
		.with_platform_fallback(&fallback, always)
		.with_overlay(&overlay);
	let order: Vec<CatalogSource> = sources
		.candidates(&device)
		.into_iter()
		.map(|(source, _)| source)
		.collect();
	assert_eq!(
		order,
		[CatalogSource::Overlay, CatalogSource::PlatformFallback, CatalogSource::Primary]
	);
	let db = sources.resolve(&device, "Copy", Precision::Single).unwrap();
	assert_eq!(db["COPY_VW"], 3);
}

#[test]
fn exhaustion_is_a_database_error() {
	let primary = single_record("Xaxpy", params! { "VW" => 1 });
	let overlay = single_record("Xdot", params! { "WGS1" => 64 });
	let device = DeviceIdentity::new("GPU", "Advanced Micro Devices, Inc.", "Tahiti");

	let err = Sources::new(&primary)
		.with_overlay(&overlay)
		.with_platform_fallback(&overlay, always)
		.resolve(&device, "Xsymm", Precision::ComplexDouble)
		.unwrap_err();
	assert_eq!(
		err,
		DatabaseError::NotFound {
			kernel: "Xsymm".into(),
			precision: Precision::ComplexDouble,
			vendor: "AMD".into(),
			device_type: "GPU".into(),
			device: "Tahiti".into(),
		}
	);
	assert!(err.to_string().starts_with("database entry not found"));
}

#[test]
fn any_precision_record_resolves_every_precision() {
	let primary = Catalog::from(vec![KernelRecord::new(
		"Invert",
		PrecisionSelector::Default,
		vec![VendorRecord::fallback(vec![DeviceRecord::fallback(
			params! { "INTERNAL_BLOCK_SIZE" => 16 },
		)])],
	)]);
	let device = DeviceIdentity::new("GPU", "ARM", "Mali-G71");
	for precision in Precision::ALL {
		let db = Sources::new(&primary).resolve(&device, "Invert", precision).unwrap();
		assert_eq!(db.precision(), precision);
		assert_eq!(db["INTERNAL_BLOCK_SIZE"], 16);
	}
}

#[test]
fn projections_follow_insertion_order() {
	let primary = single_record("Xdot", params! { "WGS2" => 32, "WGS1" => 128 });
	let device = DeviceIdentity::new("GPU", "AMD", "Tahiti");
	let db = Sources::new(&primary)
		.resolve(&device, "Xdot", Precision::Single)
		.unwrap();

	assert_eq!(db.kernel(), "Xdot");
	assert_eq!(db.defines(), "#define WGS2 32\n#define WGS1 128\n");
	assert_eq!(db.parameter_names(), ["WGS2", "WGS1"]);
	assert_eq!(db.values_string(), "_32_128");
}

#[test]
#[should_panic]
fn indexing_an_unknown_parameter_panics() {
	let primary = single_record("Xdot", params! { "WGS1" => 128 });
	let device = DeviceIdentity::new("GPU", "AMD", "Tahiti");
	let db = Sources::new(&primary)
		.resolve(&device, "Xdot", Precision::Single)
		.unwrap();
	let _ = db["WGS2"];
}

#[test]
fn builtin_resolves_known_devices() {
	let device = DeviceIdentity::new("GPU", "Advanced Micro Devices, Inc.", "Tahiti");
	let db = Database::new(&device, "Xgemm", Precision::Single, None).unwrap();
	assert_eq!(db.source(), CatalogSource::Primary);
	assert_eq!(db["MWG"], 64);
	assert_eq!(db.parameter_names().len(), 16);
}

proptest! {
	#[test]
	fn defines_and_names_describe_the_same_mapping(
		entries in proptest::collection::vec(("[A-Z][A-Z0-9_]{0,8}", 0usize..100_000), 1..20)
	) {
		let parameters: Parameters = entries.iter().map(|(k, v)| (k.as_str(), *v)).collect();
		let primary = single_record("Xgemm", parameters.clone());
		let device = DeviceIdentity::new("GPU", "AMD", "Tahiti");
		let db = Sources::new(&primary).resolve(&device, "Xgemm", Precision::Single).unwrap();

		let names = db.parameter_names();
		let defines = db.defines();
		let lines: Vec<&str> = defines.lines().collect();
		prop_assert_eq!(lines.len(), parameters.len());
		prop_assert_eq!(names.len(), parameters.len());
		prop_assert!(defines.ends_with('\n'));

		for ((line, name), (key, value)) in lines.iter().zip(&names).zip(parameters.iter()) {
			prop_assert_eq!(*name, key);
			prop_assert_eq!(line.to_string(), format!("#define {key} {value}"));
		}
	}
}
