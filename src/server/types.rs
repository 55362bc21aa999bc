use crate::llm::InferencingOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceParams {
    pub model: String,
    pub prompt: String,
    #[serde(default)]
    pub options: Option<InferencingOptions>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingParams {
    pub model: String,
    pub input: Vec<String>,
}
