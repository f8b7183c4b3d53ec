//! Validated reply value object

use crate::core::model::CandidateModel;
use serde::Serialize;

/// A reply that passed validation, tagged with the model that produced it
///
/// Only constructed by [`ResponseValidator`](super::ResponseValidator), so
/// the text is always non-empty and structurally well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedReply {
    text: String,
    source_model: CandidateModel,
}

impl ValidatedReply {
    pub(crate) fn new(text: String, source_model: CandidateModel) -> Self {
        Self { text, source_model }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source_model(&self) -> &CandidateModel {
        &self.source_model
    }
}

impl std::fmt::Display for ValidatedReply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
