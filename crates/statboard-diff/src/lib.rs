//! # statboard-diff - Generic List-Diff Engine
//!
//! Computes an ordered stream of edit operations (insert / remove / move /
//! change) that transforms one indexable list into another. The engine knows
//! nothing about the items themselves -- callers describe the two lists
//! through the [`DiffCallback`] trait, which answers identity and content
//! questions per index pair and derives an optional change payload.
//!
//! This crate has **zero internal dependencies**; the domain crates implement
//! [`DiffCallback`] over their own item types.
//!
//! ## Public API
//!
//! - [`DiffCallback`] - Two-phase identity/content/payload contract
//! - [`UpdateOp`] - One edit operation in the emitted stream
//! - [`diff()`] - Compute the operation stream for a callback
//!
//! ## Dispatch convention
//!
//! Applying the returned operations in order, each against the list state
//! produced by the previous one, transforms the old list into the new list.
//! See [`engine::diff`] for the exact position semantics per operation kind.

pub mod callback;
pub mod engine;
pub mod ops;

pub use callback::DiffCallback;
pub use engine::diff;
pub use ops::UpdateOp;
