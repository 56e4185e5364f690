//! Prelude module for convenient imports.
//!
//! This module re-exports commonly used types for ergonomic imports:
//!
//! ```rust
//! use noda_wire::prelude::*;
//! ```

pub use crate::error::{DecodeError, DecodeResult};
pub use crate::handle::{NodeHandle, PropertyHandle};
pub use crate::slot::Slot;
pub use crate::widget::Widget;
