//! The identity/content/payload policy handed to the diff engine.

use std::rc::Rc;

use serde::Serialize;
use statboard_diff::DiffCallback;

use crate::item::BoardItem;
use crate::sources::same_condition;

/// Change payload for condition cards: the row keeps its identity and may be
/// refreshed in place instead of torn down and rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardRefresh;

/// Adapter between two built row lists and the diff engine.
///
/// Matching rules per row kind:
///
/// - `Spacer` and `SuggestionHeader` are singleton-like; kind match alone is
///   identity.
/// - `ConditionCard` and `SuggestionCard` match by instance identity of the
///   wrapped object.
/// - `CategoryHeader` and `TileCard` match by title value, since their
///   sources reconstruct them freely.
///
/// Content rules: a suggestion header changed iff any of its three fields
/// changed; every other kind, condition cards included, has no content
/// beyond its identity, so identical snapshots diff to an empty op stream.
/// [`change_payload`](DiffCallback::change_payload) still answers
/// [`CardRefresh`] at condition-card positions: a renderer that re-binds a
/// condition row may query it directly and refresh in place instead of
/// tearing the row down.
///
/// Precondition: both lists come from [`crate::build_items`] over the same
/// source model. All callbacks are total and never panic.
pub struct BoardDiffCallback<'a> {
    old: &'a [BoardItem],
    new: &'a [BoardItem],
}

impl<'a> BoardDiffCallback<'a> {
    pub fn new(old: &'a [BoardItem], new: &'a [BoardItem]) -> Self {
        Self { old, new }
    }
}

impl DiffCallback for BoardDiffCallback<'_> {
    type Payload = CardRefresh;

    fn old_len(&self) -> usize {
        self.old.len()
    }

    fn new_len(&self) -> usize {
        self.new.len()
    }

    fn same_identity(&self, old_index: usize, new_index: usize) -> bool {
        match (&self.old[old_index], &self.new[new_index]) {
            (BoardItem::Spacer, BoardItem::Spacer) => true,
            (BoardItem::SuggestionHeader(_), BoardItem::SuggestionHeader(_)) => true,
            (BoardItem::ConditionCard(a), BoardItem::ConditionCard(b)) => same_condition(a, b),
            (BoardItem::SuggestionCard(a), BoardItem::SuggestionCard(b)) => Rc::ptr_eq(a, b),
            (BoardItem::CategoryHeader(a), BoardItem::CategoryHeader(b)) => a.title == b.title,
            (BoardItem::TileCard(a), BoardItem::TileCard(b)) => a.title == b.title,
            _ => false,
        }
    }

    fn same_content(&self, old_index: usize, new_index: usize) -> bool {
        match (&self.old[old_index], &self.new[new_index]) {
            (BoardItem::SuggestionHeader(a), BoardItem::SuggestionHeader(b)) => a == b,
            _ => true,
        }
    }

    fn change_payload(&self, old_index: usize, new_index: usize) -> Option<CardRefresh> {
        match (&self.old[old_index], &self.new[new_index]) {
            (BoardItem::ConditionCard(_), BoardItem::ConditionCard(_)) => Some(CardRefresh),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::SuggestionHeader;
    use crate::sources::{Category, Condition, ConditionRef, Suggestion, Tile};

    #[derive(Debug)]
    struct Showing;

    impl Condition for Showing {
        fn should_show(&self) -> bool {
            true
        }

        fn title(&self) -> &str {
            "showing"
        }
    }

    fn header(expanded: bool, shown_count: u32, hidden_count: u32) -> BoardItem {
        BoardItem::SuggestionHeader(SuggestionHeader {
            expanded,
            shown_count,
            hidden_count,
        })
    }

    #[test]
    fn test_spacers_and_headers_match_by_kind_alone() {
        let old = vec![BoardItem::Spacer, header(false, 1, 2)];
        let new = vec![BoardItem::Spacer, header(true, 3, 0)];
        let cb = BoardDiffCallback::new(&old, &new);
        assert!(cb.same_identity(0, 0));
        assert!(cb.same_identity(1, 1));
        assert!(!cb.same_identity(0, 1));
    }

    #[test]
    fn test_header_content_compares_all_fields() {
        let old = vec![header(false, 1, 2)];
        let new = vec![header(false, 1, 2), header(true, 3, 0)];
        let cb = BoardDiffCallback::new(&old, &new);
        assert!(cb.same_content(0, 0));
        assert!(!cb.same_content(0, 1));
        assert_eq!(cb.change_payload(0, 1), None);
    }

    #[test]
    fn test_condition_identity_is_instance_identity() {
        let condition: ConditionRef = Rc::new(Showing);
        let twin: ConditionRef = Rc::new(Showing);
        let old = vec![BoardItem::ConditionCard(Rc::clone(&condition))];
        let new = vec![
            BoardItem::ConditionCard(condition),
            BoardItem::ConditionCard(twin),
        ];
        let cb = BoardDiffCallback::new(&old, &new);
        assert!(cb.same_identity(0, 0));
        assert!(!cb.same_identity(0, 1));
    }

    #[test]
    fn test_condition_content_follows_identity_but_payload_stays_nonempty() {
        let condition: ConditionRef = Rc::new(Showing);
        let old = vec![BoardItem::ConditionCard(Rc::clone(&condition))];
        let new = vec![BoardItem::ConditionCard(condition)];
        let cb = BoardDiffCallback::new(&old, &new);
        // Same instance is unchanged content, so no change op is dispatched;
        // the refresh hint remains available as a direct query.
        assert!(cb.same_content(0, 0));
        assert_eq!(cb.change_payload(0, 0), Some(CardRefresh));
    }

    #[test]
    fn test_suggestion_identity_is_instance_identity() {
        let suggestion = Rc::new(Suggestion::new("Use fingerprint"));
        let twin = Rc::new(Suggestion::new("Use fingerprint"));
        let old = vec![BoardItem::SuggestionCard(Rc::clone(&suggestion))];
        let new = vec![
            BoardItem::SuggestionCard(suggestion),
            BoardItem::SuggestionCard(twin),
        ];
        let cb = BoardDiffCallback::new(&old, &new);
        assert!(cb.same_identity(0, 0));
        assert!(!cb.same_identity(0, 1), "equal titles are not identity");
        assert!(cb.same_content(0, 0));
    }

    #[test]
    fn test_tiles_and_categories_match_by_title_value() {
        let old = vec![
            BoardItem::CategoryHeader(Rc::new(Category::new("Device", vec![]))),
            BoardItem::TileCard(Rc::new(Tile::new("Display"))),
        ];
        // Reconstructed instances with equal titles.
        let new = vec![
            BoardItem::CategoryHeader(Rc::new(Category::new("Device", vec![]))),
            BoardItem::TileCard(Rc::new(Tile::new("Display"))),
            BoardItem::TileCard(Rc::new(Tile::new("Battery"))),
        ];
        let cb = BoardDiffCallback::new(&old, &new);
        assert!(cb.same_identity(0, 0));
        assert!(cb.same_identity(1, 1));
        assert!(!cb.same_identity(1, 2));
        assert!(cb.same_content(0, 0));
        assert!(cb.same_content(1, 1));
        assert_eq!(cb.change_payload(1, 1), None);
    }

    #[test]
    fn test_kind_mismatch_never_matches() {
        let old = vec![BoardItem::Spacer, BoardItem::TileCard(Rc::new(Tile::new("x")))];
        let new = vec![BoardItem::SuggestionCard(Rc::new(Suggestion::new("x")))];
        let cb = BoardDiffCallback::new(&old, &new);
        assert!(!cb.same_identity(0, 0));
        assert!(!cb.same_identity(1, 0));
    }
}
