//! Candidate model value objects

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single backend model the provider can route a generation job to (Value Object)
///
/// The identifier is opaque to the domain: it is passed verbatim to the
/// provider's `models` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateModel(String);

impl CandidateModel {
    /// Create a candidate model, rejecting blank identifiers
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidModel(id));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CandidateModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CandidateModel {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        CandidateModel::new(s)
    }
}

impl Serialize for CandidateModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CandidateModel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Ordered, non-empty list of candidate models (Value Object)
///
/// Order is preference order: the first entry is tried first. Duplicate
/// identifiers are dropped on construction so that no model can be
/// attempted twice within one orchestration call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCandidates {
    models: Vec<CandidateModel>,
}

impl ModelCandidates {
    /// Build a candidate list, keeping the first occurrence of each model
    pub fn new(models: impl IntoIterator<Item = CandidateModel>) -> Result<Self, DomainError> {
        let mut unique: Vec<CandidateModel> = Vec::new();
        for model in models {
            if !unique.contains(&model) {
                unique.push(model);
            }
        }
        if unique.is_empty() {
            return Err(DomainError::EmptyCandidates);
        }
        Ok(Self { models: unique })
    }

    /// Parse a list of identifiers
    pub fn parse<S: AsRef<str>>(ids: &[S]) -> Result<Self, DomainError> {
        let models = ids
            .iter()
            .map(|s| s.as_ref().parse())
            .collect::<Result<Vec<CandidateModel>, _>>()?;
        Self::new(models)
    }

    /// The default Horde text models, best conversational quality first
    pub fn default_models() -> Self {
        Self {
            models: DEFAULT_MODELS
                .iter()
                .map(|id| CandidateModel(id.to_string()))
                .collect(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CandidateModel> {
        self.models.iter()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl<'a> IntoIterator for &'a ModelCandidates {
    type Item = &'a CandidateModel;
    type IntoIter = std::slice::Iter<'a, CandidateModel>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}

const DEFAULT_MODELS: &[&str] = &[
    "koboldcpp/LLaMA2-13B-Tiefighter",
    "koboldcpp/Nous-Hermes-2-Mistral-7B-DPO",
    "koboldcpp/Mistral-7B-Instruct-v0.3",
    "koboldcpp/Llama-3-8B-Instruct",
    "koboldcpp/LLaMA2-13B-Psyfighter2",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in &ModelCandidates::default_models() {
            let parsed: CandidateModel = model.to_string().parse().unwrap();
            assert_eq!(model, &parsed);
        }
    }

    #[test]
    fn test_blank_model_rejected() {
        assert!(CandidateModel::new("   ").is_err());
        assert_eq!(
            CandidateModel::new(" koboldcpp/x ").unwrap().as_str(),
            "koboldcpp/x"
        );
    }

    #[test]
    fn test_empty_candidates_rejected() {
        let result = ModelCandidates::new(Vec::new());
        assert!(matches!(result, Err(DomainError::EmptyCandidates)));
    }

    #[test]
    fn test_duplicates_dropped_order_kept() {
        let candidates = ModelCandidates::parse(&["b", "a", "b", "c", "a"]).unwrap();
        let ids: Vec<&str> = candidates.iter().map(|m| m.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        let result: Result<CandidateModel, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
