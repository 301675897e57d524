//! Registry backends.
//!
//! Every backend implements [`Registry`](peldec_core::Registry) with the
//! same observable behavior: the same key always resolves to the same
//! decoder, and an absent key always reports
//! [`Resolution::Unknown`](peldec_core::Resolution). Pick a backend by
//! how the decoder set becomes known:
//!
//! - [`MapRegistry`]: assembled at runtime through a builder
//! - [`TableRegistry`]: fixed table known at compile time
//! - [`PhfRegistry`]: static perfect-hash map (feature `phf`)
//! - [`collected_src_registry`]: gathered from `inventory::submit!`
//!   registrations at startup (feature `inventory`)

mod map;
mod table;

#[cfg(feature = "inventory")]
mod collected;
#[cfg(feature = "phf")]
mod phf;

pub use map::{MapRegistry, MapRegistryBuilder};
pub use table::TableRegistry;

#[cfg(feature = "inventory")]
pub use collected::{RegisteredSrcDecoder, collected_src_registry};
#[cfg(feature = "phf")]
pub use self::phf::PhfRegistry;
