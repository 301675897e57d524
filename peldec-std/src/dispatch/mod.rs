//! The two dispatch frameworks.
//!
//! [`SrcDispatcher`] resolves the component id embedded in a reference
//! code to a registered SRC decoder; [`SubtypeTable`] routes a user-data
//! section to a subtype decode function within one component. Both
//! guarantee valid serialized output on every path.

mod src_details;
mod user_data;

pub use src_details::SrcDispatcher;
pub use user_data::{HEX_DUMP_FIELD, SubtypeTable, unsupported_subtype};
