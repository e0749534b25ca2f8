//! Upstream source objects the board is assembled from.
//!
//! All four object kinds are owned by the data-source layer; the board holds
//! `Rc` handles only. Absence of a whole collection is expressed as `None`
//! at the [`crate::build_items`] boundary, never as an error.

use std::fmt;
use std::rc::Rc;

/// An externally-owned status condition (e.g. "airplane mode is on").
///
/// Conditions decide their own visibility: the builder asks
/// [`should_show`](Condition::should_show) exactly once per condition per
/// build and treats it as a pure boolean query.
pub trait Condition: fmt::Debug {
    /// Whether a card for this condition belongs on the board right now.
    fn should_show(&self) -> bool;

    /// Display title of the condition card.
    fn title(&self) -> &str;
}

/// Shared handle to a condition. Identity, not value, distinguishes two
/// conditions: see [`same_condition`].
pub type ConditionRef = Rc<dyn Condition>;

/// Whether two handles point at the same condition instance.
///
/// Compares data addresses only, so two handles to the same object compare
/// equal even if obtained through different trait-object coercions.
pub fn same_condition(a: &ConditionRef, b: &ConditionRef) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

/// A suggested action shown under the suggestion header. Matched across
/// snapshots by instance identity (`Rc::ptr_eq`), never by value, so no
/// equality is derived.
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub title: String,
}

impl Suggestion {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// A launchable tile inside a category. Matched across snapshots by title
/// value: tiles are routinely reconstructed by their source, so a fresh
/// object with an equal title is the same tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub title: String,
}

impl Tile {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// A titled group of tiles. Like tiles, matched by title value.
#[derive(Debug, Clone)]
pub struct Category {
    pub title: String,
    pub tiles: Vec<Rc<Tile>>,
}

impl Category {
    pub fn new(title: impl Into<String>, tiles: Vec<Rc<Tile>>) -> Self {
        Self {
            title: title.into(),
            tiles,
        }
    }
}
