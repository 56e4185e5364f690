#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;
mod handle;
mod slot;
mod widget;

#[doc(hidden)]
pub mod prelude;

pub use error::{DecodeError, DecodeResult};
pub use handle::{NodeHandle, PropertyHandle};
pub use slot::Slot;
pub use widget::Widget;

/// Tracing target for wire decode operations.
pub const TRACING_TARGET: &str = "noda_wire";
