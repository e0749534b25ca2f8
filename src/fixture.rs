//! TOML board fixtures for the demo binary.
//!
//! A fixture describes the three source collections in one document:
//!
//! ```toml
//! [[conditions]]
//! title = "Airplane mode"
//! active = true
//!
//! [[suggestions]]
//! title = "Use fingerprint"
//!
//! [[categories]]
//! title = "Device"
//! tiles = ["Display", "Battery"]
//! ```
//!
//! Any section may be omitted; a missing collection contributes nothing to
//! the board, matching the builder's null-tolerant contract.

use std::path::Path;
use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use statboard_core::{Category, Condition, ConditionRef, Suggestion, Tile};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse fixture TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionFixture {
    pub title: String,
    /// Whether the condition's `should_show` query answers true.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionFixture {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryFixture {
    pub title: String,
    #[serde(default)]
    pub tiles: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardFixture {
    #[serde(default)]
    pub conditions: Vec<ConditionFixture>,
    #[serde(default)]
    pub suggestions: Vec<SuggestionFixture>,
    #[serde(default)]
    pub categories: Vec<CategoryFixture>,
}

/// Fixture-backed condition: visibility is fixed at load time.
#[derive(Debug)]
pub struct StaticCondition {
    title: String,
    active: bool,
}

impl Condition for StaticCondition {
    fn should_show(&self) -> bool {
        self.active
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl BoardFixture {
    /// Load a fixture from a TOML file.
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let text = std::fs::read_to_string(path)?;
        let fixture: BoardFixture = toml::from_str(&text)?;
        debug!(
            path = %path.display(),
            conditions = fixture.conditions.len(),
            suggestions = fixture.suggestions.len(),
            categories = fixture.categories.len(),
            "loaded board fixture"
        );
        Ok(fixture)
    }

    /// A small built-in board used when no fixture file is given.
    pub fn sample() -> Self {
        Self {
            conditions: vec![
                ConditionFixture {
                    title: "Airplane mode".to_string(),
                    active: true,
                },
                ConditionFixture {
                    title: "Battery saver".to_string(),
                    active: false,
                },
            ],
            suggestions: vec![
                SuggestionFixture {
                    title: "Use fingerprint".to_string(),
                },
                SuggestionFixture {
                    title: "Set up email".to_string(),
                },
            ],
            categories: vec![
                CategoryFixture {
                    title: "Device".to_string(),
                    tiles: vec!["Display".to_string(), "Battery".to_string()],
                },
                CategoryFixture {
                    title: "Network".to_string(),
                    tiles: vec!["Wi-Fi".to_string()],
                },
            ],
        }
    }

    /// Materialize the three source collections the builder consumes.
    pub fn into_sources(self) -> (Vec<ConditionRef>, Vec<Rc<Category>>, Vec<Rc<Suggestion>>) {
        let conditions = self
            .conditions
            .into_iter()
            .map(|c| {
                Rc::new(StaticCondition {
                    title: c.title,
                    active: c.active,
                }) as ConditionRef
            })
            .collect();
        let categories = self
            .categories
            .into_iter()
            .map(|c| {
                Rc::new(Category::new(
                    c.title,
                    c.tiles.into_iter().map(|t| Rc::new(Tile::new(t))).collect(),
                ))
            })
            .collect();
        let suggestions = self
            .suggestions
            .into_iter()
            .map(|s| Rc::new(Suggestion::new(s.title)))
            .collect();
        (conditions, categories, suggestions)
    }
}
