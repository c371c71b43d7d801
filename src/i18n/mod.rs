//! Localization
//!
//! A `LabelTable` resolves abstract label keys to display text for one
//! language. The language is always passed explicitly by the renderer;
//! there is no global "current language".
//!
//! - `labels.rs` - Language, LabelKey, outcome-key conversions
//! - `tables.rs` - Embedded PT / EN / FR strings

pub mod labels;
mod tables;

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

pub use labels::{LabelKey, Language};

/// Label lookup for one language
#[derive(Debug)]
pub struct LabelTable {
    language: Language,
    labels: FxHashMap<LabelKey, &'static str>,
}

impl LabelTable {
    fn build(language: Language) -> Self {
        let rows = match language {
            Language::Pt => tables::PT_LABELS,
            Language::En => tables::EN_LABELS,
            Language::Fr => tables::FR_LABELS,
        };
        let table = Self {
            language,
            labels: rows.iter().copied().collect(),
        };

        let missing = table.missing_keys();
        if !missing.is_empty() {
            tracing::warn!("{} label table is missing {:?}", language, missing);
        }
        table
    }

    /// Shared table for `language`, built on first use
    pub fn for_language(language: Language) -> &'static LabelTable {
        static PT: OnceLock<LabelTable> = OnceLock::new();
        static EN: OnceLock<LabelTable> = OnceLock::new();
        static FR: OnceLock<LabelTable> = OnceLock::new();

        let cell = match language {
            Language::Pt => &PT,
            Language::En => &EN,
            Language::Fr => &FR,
        };
        cell.get_or_init(|| LabelTable::build(language))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Text for `key`. Falls back to the English table, then to `?`.
    pub fn get(&self, key: impl Into<LabelKey>) -> &'static str {
        let key = key.into();
        if let Some(text) = self.labels.get(&key).copied() {
            return text;
        }
        tracing::warn!("Missing {:?} label for {}", key, self.language);
        if self.language != Language::En {
            return LabelTable::for_language(Language::En).get(key);
        }
        "?"
    }

    /// Keys with no entry in this table
    fn missing_keys(&self) -> Vec<LabelKey> {
        LabelKey::all()
            .iter()
            .copied()
            .filter(|key| !self.labels.contains_key(key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::{GrowthPhase, PlantingDecision};

    #[test]
    fn test_every_language_covers_every_key() {
        for lang in Language::all() {
            let table = LabelTable::for_language(*lang);
            assert!(table.missing_keys().is_empty(), "{}: {:?}", lang, table.missing_keys());
            for key in LabelKey::all() {
                assert!(!table.get(*key).trim().is_empty(), "{}: {:?}", lang, key);
            }
        }
    }

    #[test]
    fn test_tables_have_no_extra_rows() {
        assert_eq!(tables::PT_LABELS.len(), LabelKey::all().len());
        assert_eq!(tables::EN_LABELS.len(), LabelKey::all().len());
        assert_eq!(tables::FR_LABELS.len(), LabelKey::all().len());
    }

    #[test]
    fn test_outcome_lookup() {
        let en = LabelTable::for_language(Language::En);
        assert_eq!(en.get(PlantingDecision::CanPlant), "Can Plant 🌱");
        assert_eq!(en.get(GrowthPhase::VegetativeGrowth), "Vegetative Growth 🌿");

        let pt = LabelTable::for_language(Language::Pt);
        assert_eq!(pt.get(GrowthPhase::VegetativeGrowth), "Crescimento vegetativo 🌿");
        assert_eq!(pt.language(), Language::Pt);
    }

    #[test]
    fn test_table_is_shared() {
        let a = LabelTable::for_language(Language::Fr) as *const LabelTable;
        let b = LabelTable::for_language(Language::Fr) as *const LabelTable;
        assert_eq!(a, b);
    }
}
