//! Fixed generation parameters sent with every job

use serde::{Deserialize, Serialize};

/// Provider sampling knobs that do not depend on the request
///
/// `max_length` and `temperature` are computed per request and are not
/// part of this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    pub max_context_length: u32,
    pub rep_pen: f32,
    pub rep_pen_range: u32,
    pub rep_pen_slope: f32,
    pub tfs: f32,
    pub top_a: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub typical: f32,
    pub sampler_order: Vec<u8>,
    pub use_default_badwordsids: bool,
    /// Bounds output to one conversational turn
    pub stop_sequence: Vec<String>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_context_length: 4096,
            rep_pen: 1.2,
            rep_pen_range: 2048,
            rep_pen_slope: 0.7,
            tfs: 0.97,
            top_a: 0.0,
            top_k: 60,
            top_p: 0.95,
            typical: 1.0,
            sampler_order: vec![6, 0, 1, 3, 4, 2, 5],
            use_default_badwordsids: false,
            stop_sequence: ["\nUser:", "\n\nUser:", "Human:", "\nHuman:", "\n\n"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stops_at_next_turn() {
        let params = GenerationParams::default();
        assert!(params.stop_sequence.contains(&"\nUser:".to_string()));
        assert!(params.stop_sequence.contains(&"\n\n".to_string()));
    }
}
