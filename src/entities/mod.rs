//! Record definition helpers
//!
//! The macros are exported at the crate root (`reels::impl_record!`).

pub mod macros;
