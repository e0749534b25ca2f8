//! # statboard-core - Board Item Model and List Assembly
//!
//! Turns three independently-changing data sources -- a condition collection,
//! a category/tile catalog, and a suggestion collection -- into one ordered,
//! heterogeneous row list, and drives `statboard-diff` so a display layer can
//! apply incremental updates instead of a full redraw.
//!
//! ## Public API
//!
//! ### Sources (`sources`)
//! - [`Condition`] - Externally-owned status object with a `should_show` query
//! - [`ConditionRef`] - Shared handle to a condition (`Rc<dyn Condition>`)
//! - [`Suggestion`], [`Category`], [`Tile`] - The other source objects
//!
//! ### Items (`item`)
//! - [`BoardItem`] - Closed sum type over every row kind the board can show
//! - [`SuggestionHeader`] - Expand/collapse header state (a value type)
//!
//! ### Assembly (`builder`)
//! - [`build_items()`] - Flatten source snapshots into one ordered row list
//!
//! ### Position lookup (`lookup`)
//! - [`position_of_condition()`] - Find a condition card by instance identity
//! - [`position_of_tile()`] - Find a tile card by title value
//!
//! ### Diffing (`diff_callback`)
//! - [`BoardDiffCallback`] - Identity/content/payload policy handed to the engine
//! - [`CardRefresh`] - Change payload marking a cheap in-place refresh
//!
//! ## Caller obligations
//!
//! The core is single-threaded and side-effect-free. Source objects are held
//! through shared handles and never cloned or mutated here; the caller must
//! keep a snapshot logically stable for the duration of one build-and-diff
//! cycle. Diffing two item lists not both produced by [`build_items`] over
//! the same source model is a precondition violation with undefined results.

pub mod builder;
pub mod diff_callback;
pub mod item;
pub mod lookup;
pub mod sources;

pub use builder::build_items;
pub use diff_callback::{BoardDiffCallback, CardRefresh};
pub use item::{BoardItem, SuggestionHeader};
pub use lookup::{position_of_condition, position_of_tile};
pub use sources::{same_condition, Category, Condition, ConditionRef, Suggestion, Tile};
