//! # peldec-std
//!
//! Standard implementations for the peldec PEL section decoding
//! framework.
//!
//! This crate provides:
//! - **Registry backends**: [`registry::MapRegistry`], [`registry::TableRegistry`],
//!   plus optional `phf` and `inventory` backends
//! - **Dispatchers**: [`dispatch::SrcDispatcher`], [`dispatch::SubtypeTable`]
//! - **Hex dump**: [`hexdump::hexdump`]
//! - **Built-in components**: [`components::e500`]
//! - **Test doubles**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core contracts
pub use peldec_core;

// Modules
pub mod components;
pub mod dispatch;
pub mod hexdump;
pub mod registry;
pub mod testing;

#[cfg(feature = "inventory")]
pub use inventory;
