#![forbid(unsafe_code)]

//! `aulos-core`
//!
//! Shared leaf types for the aulos extraction pipeline: full-precision
//! fragment numbers, stream locations and contact ids. No I/O here.

mod contact;
mod errors;
mod fragment;
mod location;

pub use contact::ContactId;
pub use errors::{CoreError, CoreResult};
pub use fragment::FragmentNumber;
pub use location::StreamLocation;
