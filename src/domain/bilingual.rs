// src/domain/bilingual.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Bn,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::En, Self::Bn];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Bn => "bn",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A text value carried once per supported language. Both keys must be
/// present on every payload; drafts may leave either empty, while any
/// transition into the published state requires both to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Bilingual {
    pub en: String,
    pub bn: String,
}

impl Bilingual {
    pub fn new(en: impl Into<String>, bn: impl Into<String>) -> Self {
        let en: String = en.into();
        let bn: String = bn.into();
        Self {
            en: en.trim().to_owned(),
            bn: bn.trim().to_owned(),
        }
    }

    /// Trims both variants. Payloads deserialized straight from JSON go
    /// through this before they reach an entity.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self::new(self.en, self.bn)
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Bn => &self.bn,
        }
    }

    pub fn missing_languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|language| self.get(*language).trim().is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_languages().is_empty()
    }

    /// Rejects values that are not complete in both languages. Category and
    /// tag names use this at creation; article fields defer the check to the
    /// publication transition.
    pub fn ensure_complete(&self, field: &str) -> DomainResult<()> {
        let missing: Vec<String> = self
            .missing_languages()
            .into_iter()
            .map(|language| format!("{field}.{language}"))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::IncompleteTranslation { fields: missing })
        }
    }
}
