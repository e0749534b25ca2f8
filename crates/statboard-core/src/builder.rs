//! Flattening the three source snapshots into one ordered row list.

use std::rc::Rc;

use tracing::debug;

use crate::item::{BoardItem, SuggestionHeader};
use crate::sources::{Category, ConditionRef, Suggestion};

/// Build the full board row list from source snapshots.
///
/// `None` and an empty slice contribute nothing; neither is an error. The
/// produced list always has the shape
///
/// ```text
/// [Spacer?] [ConditionCard]* [SuggestionHeader SuggestionCard*]? ([CategoryHeader TileCard*])*
/// ```
///
/// where the spacer leads iff any input collection is non-empty. Each
/// condition's `should_show` query is evaluated exactly once per build;
/// conditions answering `false` emit no card. When `suggestions_expanded`
/// is false the suggestion section collapses to the header plus at most one
/// card. Source order is preserved throughout; a category with no tiles
/// still emits its header.
///
/// The list is rebuilt from scratch on every source change; nothing here
/// mutates a previously built list.
pub fn build_items(
    conditions: Option<&[ConditionRef]>,
    categories: Option<&[Rc<Category>]>,
    suggestions: Option<&[Rc<Suggestion>]>,
    suggestions_expanded: bool,
) -> Vec<BoardItem> {
    let conditions = conditions.unwrap_or_default();
    let categories = categories.unwrap_or_default();
    let suggestions = suggestions.unwrap_or_default();

    if conditions.is_empty() && categories.is_empty() && suggestions.is_empty() {
        return Vec::new();
    }

    let mut items = vec![BoardItem::Spacer];

    for condition in conditions {
        if condition.should_show() {
            items.push(BoardItem::ConditionCard(Rc::clone(condition)));
        }
    }

    if !suggestions.is_empty() {
        let total = suggestions.len() as u32;
        let shown_count = if suggestions_expanded { total } else { 1 };
        items.push(BoardItem::SuggestionHeader(SuggestionHeader {
            expanded: suggestions_expanded,
            shown_count,
            hidden_count: total - shown_count,
        }));
        for suggestion in &suggestions[..shown_count as usize] {
            items.push(BoardItem::SuggestionCard(Rc::clone(suggestion)));
        }
    }

    for category in categories {
        items.push(BoardItem::CategoryHeader(Rc::clone(category)));
        for tile in &category.tiles {
            items.push(BoardItem::TileCard(Rc::clone(tile)));
        }
    }

    debug!(rows = items.len(), "built board item list");
    items
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::sources::{Condition, Tile};

    /// Condition that counts how often its visibility is queried.
    #[derive(Debug)]
    struct CountingCondition {
        visible: bool,
        queries: Cell<u32>,
    }

    impl CountingCondition {
        fn shared(visible: bool) -> Rc<Self> {
            Rc::new(Self {
                visible,
                queries: Cell::new(0),
            })
        }
    }

    impl Condition for CountingCondition {
        fn should_show(&self) -> bool {
            self.queries.set(self.queries.get() + 1);
            self.visible
        }

        fn title(&self) -> &str {
            "counting"
        }
    }

    fn category(title: &str, tile_titles: &[&str]) -> Rc<Category> {
        Rc::new(Category::new(
            title,
            tile_titles.iter().map(|t| Rc::new(Tile::new(*t))).collect(),
        ))
    }

    fn suggestion(title: &str) -> Rc<Suggestion> {
        Rc::new(Suggestion::new(title))
    }

    #[test]
    fn test_all_absent_yields_empty_list() {
        assert!(build_items(None, None, None, true).is_empty());
    }

    #[test]
    fn test_all_empty_yields_empty_list() {
        assert!(build_items(Some(&[]), Some(&[]), Some(&[]), true).is_empty());
    }

    #[test]
    fn test_any_content_leads_with_one_spacer() {
        let categories = [category("Device", &["Display"])];
        let items = build_items(None, Some(&categories), None, true);
        assert!(items[0].is_spacer());
        assert_eq!(items.iter().filter(|i| i.is_spacer()).count(), 1);
    }

    #[test]
    fn test_full_board_order_and_shape() {
        let condition = CountingCondition::shared(true);
        let conditions: [ConditionRef; 1] = [condition];
        let categories = [category("Device", &["Display"])];
        let suggestions = [suggestion("Use fingerprint")];

        let items = build_items(
            Some(&conditions),
            Some(&categories),
            Some(&suggestions),
            false,
        );

        let kinds: Vec<_> = items.iter().map(|i| i.kind_name()).collect();
        assert_eq!(
            kinds,
            [
                "spacer",
                "condition",
                "suggestion-header",
                "suggestion",
                "category-header",
                "tile",
            ]
        );
    }

    #[test]
    fn test_hidden_condition_emits_no_card() {
        let shown = CountingCondition::shared(true);
        let hidden = CountingCondition::shared(false);
        let conditions: [ConditionRef; 2] = [shown, hidden];

        let items = build_items(Some(&conditions), None, None, true);
        assert_eq!(
            items.iter().map(|i| i.kind_name()).collect::<Vec<_>>(),
            ["spacer", "condition"]
        );
    }

    #[test]
    fn test_should_show_queried_exactly_once_per_build() {
        let condition = CountingCondition::shared(true);
        let handle = Rc::clone(&condition);
        let conditions: [ConditionRef; 1] = [condition];

        build_items(Some(&conditions), None, None, true);
        assert_eq!(handle.queries.get(), 1);

        build_items(Some(&conditions), None, None, true);
        assert_eq!(handle.queries.get(), 2);
    }

    #[test]
    fn test_hidden_conditions_still_emit_spacer() {
        // The spacer keys off input presence, not off how many cards survive
        // the visibility query.
        let hidden = CountingCondition::shared(false);
        let conditions: [ConditionRef; 1] = [hidden];

        let items = build_items(Some(&conditions), None, None, true);
        assert_eq!(
            items.iter().map(|i| i.kind_name()).collect::<Vec<_>>(),
            ["spacer"]
        );
    }

    #[test]
    fn test_collapsed_suggestions_show_one_card() {
        let suggestions = [suggestion("a"), suggestion("b"), suggestion("c")];
        let items = build_items(None, None, Some(&suggestions), false);

        let Some(BoardItem::SuggestionHeader(header)) = items.get(1) else {
            panic!("expected suggestion header at position 1, got {items:?}");
        };
        assert!(!header.expanded);
        assert_eq!(header.shown_count, 1);
        assert_eq!(header.hidden_count, 2);
        assert_eq!(
            items
                .iter()
                .filter(|i| matches!(i, BoardItem::SuggestionCard(_)))
                .count(),
            1
        );
    }

    #[test]
    fn test_expanded_suggestions_show_all_cards() {
        let suggestions = [suggestion("a"), suggestion("b"), suggestion("c")];
        let items = build_items(None, None, Some(&suggestions), true);

        let Some(BoardItem::SuggestionHeader(header)) = items.get(1) else {
            panic!("expected suggestion header at position 1, got {items:?}");
        };
        assert!(header.expanded);
        assert_eq!(header.shown_count, 3);
        assert_eq!(header.hidden_count, 0);
        assert_eq!(header.shown_count + header.hidden_count, 3);
    }

    #[test]
    fn test_empty_category_emits_header_without_tiles() {
        let categories = [category("Empty", &[]), category("Device", &["Display"])];
        let items = build_items(None, Some(&categories), None, true);
        assert_eq!(
            items.iter().map(|i| i.kind_name()).collect::<Vec<_>>(),
            ["spacer", "category-header", "category-header", "tile"]
        );
    }

    #[test]
    fn test_source_order_preserved() {
        let categories = [
            category("B", &["b1", "b2"]),
            category("A", &["a1"]),
        ];
        let items = build_items(None, Some(&categories), None, true);

        let titles: Vec<&str> = items
            .iter()
            .filter_map(|i| match i {
                BoardItem::CategoryHeader(c) => Some(c.title.as_str()),
                BoardItem::TileCard(t) => Some(t.title.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(titles, ["B", "b1", "b2", "A", "a1"]);
    }
}
