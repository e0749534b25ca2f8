//! The callback contract the engine drives the comparison through.

/// Describes two indexable lists to the diff engine.
///
/// The engine never touches items directly; it asks the callback about index
/// pairs. The contract is two-phase:
///
/// 1. [`same_identity`](DiffCallback::same_identity) may be asked about any
///    `(old_index, new_index)` candidate pair.
/// 2. [`same_content`](DiffCallback::same_content) and
///    [`change_payload`](DiffCallback::change_payload) are only asked about
///    pairs already accepted as identity-matched (and `change_payload` only
///    when the content differs, i.e. a change operation will be emitted).
///
/// All three methods are total pure functions: they must not panic or fail
/// for any in-range index pair. Indices outside `0..old_len()` /
/// `0..new_len()` are a caller precondition violation and are never produced
/// by the engine itself.
pub trait DiffCallback {
    /// Payload type attached to change operations (see [`crate::UpdateOp::Change`]).
    type Payload;

    /// Length of the old list.
    fn old_len(&self) -> usize;

    /// Length of the new list.
    fn new_len(&self) -> usize;

    /// Whether `old[old_index]` and `new[new_index]` are conceptually the
    /// same item across the two snapshots, independent of whether its
    /// displayed content changed.
    fn same_identity(&self, old_index: usize, new_index: usize) -> bool;

    /// Given same identity, whether all displayed fields are unchanged.
    ///
    /// Returning `false` makes the engine emit a change operation for the
    /// pair instead of treating it as untouched.
    fn same_content(&self, old_index: usize, new_index: usize) -> bool;

    /// Optional hint attached to the change operation for this pair.
    ///
    /// A present payload tells the consumer a cheap in-place refresh is
    /// sufficient; an absent payload means a full rebind.
    fn change_payload(&self, old_index: usize, new_index: usize) -> Option<Self::Payload>;
}
