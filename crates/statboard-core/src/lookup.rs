//! Ad-hoc position lookup over a built row list.
//!
//! Plain linear scans; nothing is indexed or cached beyond the lifetime of
//! the list itself. `None` is the not-found answer, never an error.

use crate::item::BoardItem;
use crate::sources::{same_condition, ConditionRef, Tile};

/// Position of the card wrapping exactly this condition instance.
///
/// Matches by identity: a different condition with an equal title is not a
/// hit. Repeated calls over the same list are idempotent.
pub fn position_of_condition(items: &[BoardItem], condition: &ConditionRef) -> Option<usize> {
    items.iter().position(|item| match item {
        BoardItem::ConditionCard(wrapped) => same_condition(wrapped, condition),
        _ => false,
    })
}

/// Position of the first tile card whose title equals this tile's title.
///
/// Matches by value on the title field: tiles are reconstructed by their
/// source, so a fresh object with an equal title must still be found. If
/// titles are not unique the first card in list order wins.
pub fn position_of_tile(items: &[BoardItem], tile: &Tile) -> Option<usize> {
    items.iter().position(|item| match item {
        BoardItem::TileCard(wrapped) => wrapped.title == tile.title,
        _ => false,
    })
}
