//! Built-in component decoder plugins.
//!
//! One module per component, named after the component's creator id.
//! These are hosted plugins like any out-of-tree decoder; nothing here is
//! special-cased by the dispatchers.

pub mod e500;
