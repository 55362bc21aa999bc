use async_trait::async_trait;
use llm_relay::{
    Error, Result,
    llm::{
        EmbeddingsResult, EmbeddingsUsage, InferenceResult, InferenceUsage, InferencingOptions,
        LlmRuntime,
    },
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct InferCall {
    pub model: String,
    pub prompt: String,
    pub options: Option<InferencingOptions>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedCall {
    pub model: String,
    pub inputs: Vec<String>,
}

/// Runtime double that records every call and answers with canned results.
#[derive(Debug, Clone)]
pub struct MockRuntime {
    pub infer_calls: Arc<Mutex<Vec<InferCall>>>,
    pub embed_calls: Arc<Mutex<Vec<EmbedCall>>>,
    pub inference: InferenceResult,
    pub embeddings: EmbeddingsResult,
    pub error: Option<String>,
}

impl MockRuntime {
    pub fn new() -> Self {
        Self {
            infer_calls: Arc::new(Mutex::new(Vec::new())),
            embed_calls: Arc::new(Mutex::new(Vec::new())),
            inference: InferenceResult {
                text: "Paris is the capital of France.".to_string(),
                usage: InferenceUsage {
                    prompt_token_count: 9,
                    generated_token_count: 7,
                },
            },
            embeddings: EmbeddingsResult {
                embeddings: vec![vec![0.25, -0.5], vec![1.0, 0.0]],
                usage: EmbeddingsUsage {
                    prompt_token_count: 2,
                },
            },
            error: None,
        }
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn infer_calls(&self) -> Vec<InferCall> {
        self.infer_calls.lock().unwrap().clone()
    }

    pub fn embed_calls(&self) -> Vec<EmbedCall> {
        self.embed_calls.lock().unwrap().clone()
    }
}

impl Default for MockRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmRuntime for MockRuntime {
    async fn infer(
        &self,
        model: &str,
        prompt: &str,
        options: Option<InferencingOptions>,
    ) -> Result<InferenceResult> {
        self.infer_calls.lock().unwrap().push(InferCall {
            model: model.to_string(),
            prompt: prompt.to_string(),
            options,
        });

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }
        Ok(self.inference.clone())
    }

    async fn generate_embeddings(
        &self,
        model: &str,
        inputs: Vec<String>,
    ) -> Result<EmbeddingsResult> {
        self.embed_calls.lock().unwrap().push(EmbedCall {
            model: model.to_string(),
            inputs,
        });

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }
        Ok(self.embeddings.clone())
    }
}
