//! Handles to structures resolved outside slot decode.
//!
//! Slots reference their owning node and, for promoted inputs, an exported
//! widget property. Neither reference is part of the wire format: the
//! containing document decoder assigns [`NodeHandle`], and the property
//! resolution pass assigns [`PropertyHandle`]. Both are plain arena indices,
//! so a slot never owns or outlives what it points at.

use derive_more::{Debug, Display, From, Into};

/// Non-owning handle to the node that owns a slot.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Debug, Display, From, Into)]
#[debug("{_0}")]
#[display("{_0}")]
pub struct NodeHandle(usize);

impl NodeHandle {
    /// Creates a handle from an index into the document's node arena.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// Non-owning handle to an exported-widget property.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Debug, Display, From, Into)]
#[debug("{_0}")]
#[display("{_0}")]
pub struct PropertyHandle(usize);

impl PropertyHandle {
    /// Creates a handle from an index into the document's property table.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Returns the property table index.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}
