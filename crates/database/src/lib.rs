//! Device-aware lookup of tuned kernel parameters.
//!
//! A [`Catalog`] is an ordered list of [`KernelRecord`]s, each holding vendor-level and
//! device-level entries. Resolution walks a small stack of catalogs (caller overlay, optional
//! platform fallback, compiled-in tables) and returns the parameters of the first record that
//! applies to the device at hand.
//!
//! # Example
//!
//! ```
//! use tunedb_database::{Database, DeviceIdentity, Precision};
//!
//! let device = DeviceIdentity::new("GPU", "Advanced Micro Devices, Inc.", "Tahiti");
//! let db = Database::new(&device, "Xaxpy", Precision::Single, None).unwrap();
//! assert!(db.defines().starts_with("#define VW "));
//! ```

/// Catalogs and the ordering check over them.
pub mod catalog;
/// Resolution driver and the resolved parameter set.
pub mod database;
/// Device identity boundary and platform predicates.
pub mod device;
/// Error types.
pub mod error;
/// Compiled-in tuning tables.
pub mod kernels;
/// Caller-built overlays pinned to one device.
pub mod overlay;
/// Ordered name to value mapping.
pub mod params;
/// Numeric precision of a kernel.
pub mod precision;
/// Kernel, vendor and device records.
pub mod record;
/// Three-level first-match search over one catalog.
pub mod search;
/// Wildcard-or-exact selectors.
pub mod selector;
/// Vendor name aliases.
pub mod vendor;

pub use catalog::{Catalog, OrderingViolation};
pub use database::{CatalogSource, Database, Sources};
pub use device::{DeviceIdentity, DeviceInfo, FallbackPredicate, is_apple_cpu};
pub use error::{DatabaseError, OverrideError, Result};
pub use overlay::override_parameters;
pub use params::Parameters;
pub use precision::Precision;
pub use record::{DeviceRecord, KernelRecord, VendorRecord};
pub use search::{Query, search};
pub use selector::{NameSelector, PrecisionSelector, Selector};

#[cfg(test)]
use criterion as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tracing_subscriber as _;
