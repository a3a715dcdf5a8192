#![forbid(unsafe_code)]

//! `aulos-audio`
//!
//! Packages accumulated raw PCM into a streamable WAV container. No
//! resampling and no channel mixing: the input is assumed to already match
//! the declared [`PcmSpec`]. If it does not, the produced file simply
//! misrepresents duration and pitch; that assumption is documented, not
//! checked.

mod error;
mod wav;

pub use error::{AudioError, AudioResult};
pub use wav::{PcmSpec, package_wav};
