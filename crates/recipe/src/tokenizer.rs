use std::collections::HashMap;
use std::sync::LazyLock;

/// Regional names, spellings and near-synonyms mapped to canonical
/// ingredient names. Closed table; not extensible at runtime.
static SYNONYMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("chilli", "green chilli"),
        ("chilies", "green chilli"),
        ("chillies", "green chilli"),
        ("green chili", "green chilli"),
        ("red chili powder", "red chilli powder"),
        ("methi leaves", "kasuri methi"),
        ("methi seeds", "fenugreek seeds"),
        ("coriander", "coriander leaves"),
        ("dhaniya", "coriander powder"),
        ("jeera", "cumin seeds"),
        ("cumin", "cumin seeds"),
        ("hing", "asafoetida"),
        ("atta", "wheat flour"),
        ("buttermilk", "curd"),
        ("dahi", "curd"),
        ("yoghurt", "curd"),
        ("semolina", "rava"),
        ("sooji", "rava"),
        ("suji", "rava"),
        ("flattened rice", "poha"),
        ("beaten rice", "poha"),
        ("aval", "poha"),
        ("gram flour", "besan"),
        ("kidney beans", "rajma"),
        ("chole", "chickpeas"),
        ("palak", "spinach"),
        ("gobi", "cauliflower"),
        ("aloo", "potato"),
        ("bell pepper", "capsicum"),
        ("rolled oats", "oats"),
        ("vegetable oil", "oil"),
        ("refined oil", "oil"),
    ])
});

/// Stateless text normalizer for free-text and voice input.
pub struct Tokenizer;

impl Tokenizer {
    /// Lower-case, trim and map through the synonym table. Never fails:
    /// unknown input comes back trimmed and lower-cased.
    pub fn normalize(text: &str) -> String {
        let cleaned = text.trim().to_lowercase();
        match SYNONYMS.get(cleaned.as_str()) {
            Some(canonical) => (*canonical).to_string(),
            None => cleaned,
        }
    }

    /// Split on newlines and commas, normalize each piece, drop empties.
    pub fn tokenize(text: &str) -> Vec<String> {
        text.split(['\n', ','])
            .map(Self::normalize)
            .filter(|token| !token.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_maps_synonyms() {
        assert_eq!(Tokenizer::normalize("jeera"), "cumin seeds");
        assert_eq!(Tokenizer::normalize("  Sooji "), "rava");
        assert_eq!(Tokenizer::normalize("HING"), "asafoetida");
    }

    #[test]
    fn test_normalize_falls_back_to_cleaned_input() {
        assert_eq!(Tokenizer::normalize("  Paneer  "), "paneer");
        assert_eq!(Tokenizer::normalize("Dragonfruit"), "dragonfruit");
    }

    #[test]
    fn test_tokenize_splits_on_commas_and_newlines() {
        let tokens = Tokenizer::tokenize("green chilli, mustard seeds, jeera, semolina");
        assert_eq!(
            tokens,
            vec!["green chilli", "mustard seeds", "cumin seeds", "rava"]
        );

        let tokens = Tokenizer::tokenize("rice\npotato,\n\n , tomato");
        assert_eq!(tokens, vec!["rice", "potato", "tomato"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(Tokenizer::tokenize("").is_empty());
        assert!(Tokenizer::tokenize(" ,\n, ").is_empty());
    }

    #[test]
    fn test_synonym_targets_are_catalog_ingredients() {
        let catalog = crate::Catalog::builtin();
        for (alias, canonical) in SYNONYMS.iter() {
            assert!(
                catalog.contains_ingredient(canonical),
                "synonym '{alias}' points at unknown ingredient '{canonical}'"
            );
        }
    }
}
