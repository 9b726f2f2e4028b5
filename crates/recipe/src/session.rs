use mealmate_shared::SelectionState;

use crate::catalog::Catalog;

/// Quick-add from typed or dictated text.
pub trait FreeTextInput {
    /// Tokenize `text`, keep names the catalog knows, and toggle each into the
    /// have-set. Returns the resolved names in first-seen order.
    fn add_free_text(&mut self, catalog: &Catalog, text: &str) -> Vec<String>;
}

impl FreeTextInput for SelectionState {
    fn add_free_text(&mut self, catalog: &Catalog, text: &str) -> Vec<String> {
        let resolved = catalog.resolve_tokens(text);
        for name in &resolved {
            self.toggle_selected(name);
        }

        tracing::debug!(resolved = resolved.len(), "applied free-text selection");
        resolved
    }
}
