//! Snippet template palette.
//!
//! The palette is immutable static data: an ordered mapping from category
//! name to an ordered list of LaTeX snippets, embedded in the binary as
//! JSON and parsed once at startup. Activation semantics (appending
//! `"\n" + snippet` to the source text) live on
//! [`EditorState::append_snippet`](crate::editor::EditorState::append_snippet).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::render::{Fragment, RenderMode, Renderer};

/// A named, ordered group of snippets shown in the palette sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateCategory {
    /// Display name (e.g. "Integrals"); unique across the palette.
    pub name: String,
    /// Snippets in display order.
    pub snippets: Vec<String>,
}

/// Database schema from templates.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TemplateDatabase {
    version: String,
    categories: Vec<TemplateCategory>,
}

/// The embedded template palette.
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    categories: Vec<TemplateCategory>,
}

impl TemplateLibrary {
    /// Loads the palette from the embedded JSON file.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("templates.json");
        let db: TemplateDatabase =
            serde_json::from_str(json_data).context("Failed to parse embedded templates.json")?;
        Ok(Self {
            categories: db.categories,
        })
    }

    /// Categories in palette order.
    #[must_use]
    pub fn categories(&self) -> &[TemplateCategory] {
        &self.categories
    }

    /// Total number of snippets across all categories.
    #[must_use]
    pub fn snippet_count(&self) -> usize {
        self.categories.iter().map(|c| c.snippets.len()).sum()
    }

    /// Renders an inline preview of a snippet.
    ///
    /// Each snippet is rendered independently, so a malformed snippet
    /// yields the error fragment for its own preview and cannot affect
    /// the main editor's state.
    #[must_use]
    pub fn preview_of(&self, renderer: &Renderer, snippet: &str) -> Fragment {
        renderer.fragment(snippet, RenderMode::Inline)
    }
}
