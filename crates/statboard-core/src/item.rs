//! The row model: every kind of item the board can display.

use std::rc::Rc;

use crate::sources::{Category, ConditionRef, Suggestion, Tile};

/// Header state for the suggestion section. A plain value type: two headers
/// are equal iff all three fields are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionHeader {
    /// Whether the section is expanded to show every suggestion.
    pub expanded: bool,
    /// Number of suggestion cards currently emitted below the header.
    pub shown_count: u32,
    /// Number of suggestions hidden by the collapsed state.
    pub hidden_count: u32,
}

/// One row in the flattened board list.
///
/// A closed sum type: every consumer (builder, lookup, diff callback, the
/// rendering layer) matches exhaustively, so there is no "unknown row kind"
/// at runtime. Rows wrapping source objects hold shared handles; the two
/// structural kinds (`Spacer`, `SuggestionHeader`) are synthesized by the
/// builder and carry no source reference.
#[derive(Debug, Clone)]
pub enum BoardItem {
    /// Leading structural spacer. Present iff the board is non-empty; all
    /// spacers are mutually equal.
    Spacer,
    /// One card per condition whose `should_show` query held at build time.
    ConditionCard(ConditionRef),
    /// The single suggestion-section header, present iff any suggestion
    /// exists.
    SuggestionHeader(SuggestionHeader),
    /// One card per suggestion visible under the header's expand state.
    SuggestionCard(Rc<Suggestion>),
    /// One header per category, in catalog order.
    CategoryHeader(Rc<Category>),
    /// One card per tile, immediately following its category's header.
    TileCard(Rc<Tile>),
}

impl BoardItem {
    /// Short kind label for logging and plain-text rendering.
    pub fn kind_name(&self) -> &'static str {
        match self {
            BoardItem::Spacer => "spacer",
            BoardItem::ConditionCard(_) => "condition",
            BoardItem::SuggestionHeader(_) => "suggestion-header",
            BoardItem::SuggestionCard(_) => "suggestion",
            BoardItem::CategoryHeader(_) => "category-header",
            BoardItem::TileCard(_) => "tile",
        }
    }

    pub fn is_spacer(&self) -> bool {
        matches!(self, BoardItem::Spacer)
    }
}
