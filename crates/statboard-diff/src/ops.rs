//! Edit operations emitted by the engine.

use serde::Serialize;

/// One edit operation in the stream produced by [`crate::diff`].
///
/// Positions refer to the working list at the moment the operation is
/// applied, assuming the stream is applied in emission order. `Insert` and
/// `Change` positions therefore coincide with final new-list positions,
/// while `Remove` positions are old-list positions (removals are emitted
/// highest-first so earlier indices stay valid).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum UpdateOp<P> {
    /// `count` items appear at `position`.
    Insert { position: usize, count: usize },
    /// `count` items starting at `position` disappear.
    Remove { position: usize, count: usize },
    /// The item at `from` is relocated to `to`.
    Move { from: usize, to: usize },
    /// `count` items starting at `position` keep their identity but changed
    /// content. A present payload permits a cheap in-place refresh; an
    /// absent one requires a full rebind.
    Change {
        position: usize,
        count: usize,
        payload: Option<P>,
    },
}

impl<P> UpdateOp<P> {
    /// Whether this operation changes list shape (insert/remove/move), as
    /// opposed to rebinding content in place.
    pub fn is_structural(&self) -> bool {
        !matches!(self, UpdateOp::Change { .. })
    }
}
