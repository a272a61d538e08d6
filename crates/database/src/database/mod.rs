//! Resolution across a stack of catalogs.
//!
//! # Resolution Order
//!
//! 1. Caller overlay (custom tuning results, overrides)
//! 2. Platform fallback (only when its predicate accepts the device)
//! 3. Primary catalog (compiled-in tables)
//!
//! The first catalog whose search succeeds supplies every parameter; catalogs are never mixed.

use std::ops::Index;

use smallvec::SmallVec;
use strum::{Display, IntoStaticStr};

use crate::device::{DeviceInfo, FallbackPredicate, is_apple_cpu};
use crate::error::{DatabaseError, Result};
use crate::search::Query;
use crate::{Catalog, Parameters, Precision, kernels, vendor};

#[cfg(test)]
mod tests;

/// Which catalog a resolution was answered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum CatalogSource {
	Overlay,
	PlatformFallback,
	Primary,
}

/// The catalogs one resolution searches.
///
/// Built per resolution, in the manner of a builder. Only the primary catalog is mandatory.
///
/// ```
/// use tunedb_database::{Catalog, DeviceIdentity, Precision, Sources};
///
/// let overlay = Catalog::new();
/// let device = DeviceIdentity::new("GPU", "NVIDIA Corporation", "GeForce GTX 1080");
/// let db = Sources::builtin()
///     .with_overlay(&overlay)
///     .resolve(&device, "Xgemm", Precision::Single)
///     .unwrap();
/// assert!(db.get("MWG").is_some());
/// ```
#[derive(Clone, Copy)]
pub struct Sources<'a> {
	overlay: Option<&'a Catalog>,
	platform_fallback: Option<(&'a Catalog, FallbackPredicate)>,
	primary: &'a Catalog,
}

impl<'a> Sources<'a> {
	/// Sources with only `primary` configured.
	pub fn new(primary: &'a Catalog) -> Self {
		Self {
			overlay: None,
			platform_fallback: None,
			primary,
		}
	}

	/// The compiled-in tables.
	///
	/// On macOS targets the Apple CPU fallback is installed behind [`is_apple_cpu`]; elsewhere
	/// there is no platform fallback.
	pub fn builtin() -> Self {
		let sources = Self::new(&kernels::BUILTIN);
		if cfg!(target_os = "macos") {
			sources.with_platform_fallback(&kernels::APPLE_CPU_FALLBACK, is_apple_cpu)
		} else {
			sources
		}
	}

	/// Adds a caller overlay (highest priority).
	pub fn with_overlay(mut self, overlay: &'a Catalog) -> Self {
		self.overlay = Some(overlay);
		self
	}

	/// Replaces the primary catalog (lowest priority).
	pub fn with_primary(mut self, primary: &'a Catalog) -> Self {
		self.primary = primary;
		self
	}

	/// Adds a catalog searched between the overlay and the primary catalog for devices accepted
	/// by `predicate`.
	pub fn with_platform_fallback(
		mut self,
		catalog: &'a Catalog,
		predicate: FallbackPredicate,
	) -> Self {
		self.platform_fallback = Some((catalog, predicate));
		self
	}

	pub fn without_platform_fallback(mut self) -> Self {
		self.platform_fallback = None;
		self
	}

	/// Catalogs to search for `device`, highest priority first.
	pub fn candidates(
		&self,
		device: &dyn DeviceInfo,
	) -> SmallVec<[(CatalogSource, &'a Catalog); 3]> {
		let mut candidates = SmallVec::new();
		if let Some(overlay) = self.overlay {
			candidates.push((CatalogSource::Overlay, overlay));
		}
		if let Some((catalog, predicate)) = self.platform_fallback
			&& predicate(device)
		{
			candidates.push((CatalogSource::PlatformFallback, catalog));
		}
		candidates.push((CatalogSource::Primary, self.primary));
		candidates
	}

	/// Resolves the parameters for `kernel` at `precision` on `device`.
	///
	/// # Errors
	///
	/// Returns [`DatabaseError::NotFound`] if no candidate catalog has a matching entry.
	pub fn resolve(
		&self,
		device: &dyn DeviceInfo,
		kernel: &str,
		precision: Precision,
	) -> Result<Database> {
		let query = Query {
			kernel,
			device_type: device.device_type(),
			vendor: vendor::normalize(device.vendor()),
			device: device.name(),
			precision,
		};

		for (source, catalog) in self.candidates(device) {
			tracing::trace!(
				%source,
				kernel,
				%precision,
				records = catalog.len(),
				"searching catalog"
			);
			let Some(found) = catalog.search(&query) else {
				continue;
			};

			let mut parameters = Parameters::with_capacity(found.len());
			parameters.merge(found);
			tracing::debug!(
				%source,
				kernel,
				%precision,
				vendor = query.vendor,
				device_type = query.device_type,
				device = query.device,
				parameters = parameters.len(),
				"resolved tuned parameters"
			);
			return Ok(Database {
				kernel: kernel.to_owned(),
				precision,
				source,
				parameters,
			});
		}

		tracing::debug!(
			kernel,
			%precision,
			vendor = query.vendor,
			device_type = query.device_type,
			device = query.device,
			"no catalog has an entry"
		);
		Err(DatabaseError::NotFound {
			kernel: kernel.to_owned(),
			precision,
			vendor: query.vendor.to_owned(),
			device_type: query.device_type.to_owned(),
			device: query.device.to_owned(),
		})
	}
}

impl Default for Sources<'_> {
	fn default() -> Self {
		Self::builtin()
	}
}

impl std::fmt::Debug for Sources<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Sources")
			.field("overlay", &self.overlay.map(Catalog::len))
			.field("platform_fallback", &self.platform_fallback.map(|(c, _)| c.len()))
			.field("primary", &self.primary.len())
			.finish()
	}
}

/// Tuned parameters resolved for one kernel, precision and device.
///
/// Owned by the caller; nothing else holds a reference to the mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
	kernel: String,
	precision: Precision,
	source: CatalogSource,
	parameters: Parameters,
}

impl Database {
	/// Resolves against the compiled-in tables, with `overlay` taking precedence when given.
	///
	/// # Errors
	///
	/// Returns [`DatabaseError::NotFound`] if no catalog has a matching entry.
	pub fn new(
		device: &dyn DeviceInfo,
		kernel: &str,
		precision: Precision,
		overlay: Option<&Catalog>,
	) -> Result<Self> {
		let sources = Sources::builtin();
		match overlay {
			Some(overlay) => sources.with_overlay(overlay).resolve(device, kernel, precision),
			None => sources.resolve(device, kernel, precision),
		}
	}

	pub fn kernel(&self) -> &str {
		&self.kernel
	}

	pub fn precision(&self) -> Precision {
		self.precision
	}

	pub fn source(&self) -> CatalogSource {
		self.source
	}

	pub fn parameters(&self) -> &Parameters {
		&self.parameters
	}

	pub fn get(&self, name: &str) -> Option<usize> {
		self.parameters.get(name)
	}

	/// One `#define NAME VALUE` line per parameter, each newline-terminated.
	pub fn defines(&self) -> String {
		let mut defines = String::new();
		for (name, value) in self.parameters.iter() {
			defines.push_str("#define ");
			defines.push_str(name);
			defines.push(' ');
			defines.push_str(&value.to_string());
			defines.push('\n');
		}
		defines
	}

	/// Parameter names in the same order as [`defines`](Self::defines).
	pub fn parameter_names(&self) -> Vec<&str> {
		self.parameters.names().collect()
	}

	/// `_VALUE` per parameter, concatenated; identifies the variant in program caches.
	pub fn values_string(&self) -> String {
		self.parameters.iter().map(|(_, value)| format!("_{value}")).collect()
	}
}

impl Index<&str> for Database {
	type Output = usize;

	fn index(&self, name: &str) -> &usize {
		&self.parameters[name]
	}
}
