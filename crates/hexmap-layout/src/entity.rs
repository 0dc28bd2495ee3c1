//! Catalog entities fed into the layout.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Domain assigned to entities that carry no domain of their own.
pub const OTHER_DOMAIN: &str = "Other";

/// Highest accepted quality score.
pub const MAX_QUALITY_SCORE: f64 = 100.0;

/// A discovered entity to be placed on the grid.
///
/// The layout only reads `domain` and `sub_domain`; everything else is
/// carried through to the output untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Unique identifier within one run
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Business or technical domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Finer grouping inside the domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_domain: Option<String>,

    /// Quality score, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<f64>,

    /// Opaque key/value bag
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,
}

impl Entity {
    /// Create a new entity with no domain.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            domain: None,
            sub_domain: None,
            quality_score: None,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_sub_domain(mut self, sub_domain: impl Into<String>) -> Self {
        self.sub_domain = Some(sub_domain.into());
        self
    }

    pub fn with_quality_score(mut self, score: f64) -> Self {
        self.quality_score = Some(score);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// The domain this entity is grouped under.
    ///
    /// Missing or blank domains resolve to [`OTHER_DOMAIN`].
    pub fn domain_key(&self) -> &str {
        match self.domain.as_deref() {
            Some(domain) if !domain.trim().is_empty() => domain,
            _ => OTHER_DOMAIN,
        }
    }

    /// The sub-domain, if present and non-blank.
    pub fn sub_domain_key(&self) -> Option<&str> {
        self.sub_domain
            .as_deref()
            .filter(|sub| !sub.trim().is_empty())
    }

    /// Check the fields the layout relies on.
    ///
    /// `index` is the entity's position in its batch, used for reporting.
    pub fn validate(&self, index: usize) -> Result<()> {
        let invalid = |reason: &str| Error::InvalidEntity {
            index,
            reason: reason.to_string(),
        };

        if self.id.trim().is_empty() {
            return Err(invalid("id is empty"));
        }
        if self.name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if let Some(score) = self.quality_score {
            if !score.is_finite() || !(0.0..=MAX_QUALITY_SCORE).contains(&score) {
                return Err(invalid(&format!("quality score {score} outside 0-100")));
            }
        }
        Ok(())
    }
}

/// Validate a whole batch: every entity individually, then id uniqueness.
pub fn validate_entities(entities: &[Entity]) -> Result<()> {
    let mut seen = HashSet::with_capacity(entities.len());
    for (index, entity) in entities.iter().enumerate() {
        entity.validate(index)?;
        if !seen.insert(entity.id.as_str()) {
            return Err(Error::DuplicateEntity(entity.id.clone()));
        }
    }
    Ok(())
}

/// Parse a JSON array of entities and validate it.
pub fn parse_entities(json: &str) -> Result<Vec<Entity>> {
    let entities: Vec<Entity> = serde_json::from_str(json)?;
    validate_entities(&entities)?;
    Ok(entities)
}
