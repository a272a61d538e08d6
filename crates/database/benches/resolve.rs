use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use tunedb_database::kernels::BUILTIN;
use tunedb_database::{
	Catalog, Database, DeviceIdentity, DeviceRecord, KernelRecord, Precision, Sources, VendorRecord,
	params,
};

fn bench_resolve(c: &mut Criterion) {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.try_init();

	let named = DeviceIdentity::new("GPU", "NVIDIA Corporation", "GeForce GTX 1080");
	let unknown = DeviceIdentity::new("GPU", "Imagination Technologies", "PowerVR");
	// Force the lazy tables before timing.
	let _ = BUILTIN.len();

	let mut group = c.benchmark_group("resolve");
	group.bench_function("xgemm_named_device", |b| {
		b.iter(|| Database::new(black_box(&named), "Xgemm", Precision::Single, None))
	});
	group.bench_function("kernel_selection_catch_all", |b| {
		b.iter(|| Database::new(black_box(&unknown), "KernelSelection", Precision::Half, None))
	});

	let overlay = Catalog::from(vec![KernelRecord::new(
		"Xaxpy",
		Precision::Single,
		vec![VendorRecord::fallback(vec![DeviceRecord::fallback(
			params! { "VW" => 8, "WGS" => 64, "WPT" => 1 },
		)])],
	)]);
	let sources = Sources::builtin().with_overlay(&overlay);
	group.bench_function("xaxpy_overlay_hit", |b| {
		b.iter(|| sources.resolve(black_box(&named), "Xaxpy", Precision::Single))
	});
	group.finish();

	let db = Database::new(&named, "Xgemm", Precision::Single, None).unwrap();
	c.bench_function("defines_xgemm", |b| b.iter(|| black_box(&db).defines()));
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
