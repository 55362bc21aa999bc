use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        ChatCompletionRequestUserMessageContent, CreateChatCompletionRequestArgs,
        CreateEmbeddingRequestArgs, EmbeddingInput,
    },
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// The model runtime the relay forwards to.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmRuntime: Send + Sync {
    async fn infer(
        &self,
        model: &str,
        prompt: &str,
        options: Option<InferencingOptions>,
    ) -> Result<InferenceResult>;

    async fn generate_embeddings(
        &self,
        model: &str,
        inputs: Vec<String>,
    ) -> Result<EmbeddingsResult>;
}

/// Runtime backed by an OpenAI-compatible HTTP API.
pub struct OpenAiRuntime {
    client: Client<OpenAIConfig>,
}

impl OpenAiRuntime {
    pub fn new(config: &LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key.clone());

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url.clone());
        }

        Self {
            client: Client::with_config(openai_config),
        }
    }
}

#[async_trait]
impl LlmRuntime for OpenAiRuntime {
    async fn infer(
        &self,
        model: &str,
        prompt: &str,
        options: Option<InferencingOptions>,
    ) -> Result<InferenceResult> {
        let options = options.unwrap_or_default();

        if options.repeat_penalty.is_some()
            || options.repeat_penalty_last_n_token_count.is_some()
            || options.top_k.is_some()
        {
            debug!("Dropping repeat_penalty/top_k options not supported by OpenAI backend");
        }

        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(ChatCompletionRequestUserMessageContent::Text(
                prompt.to_string(),
            ))
            .build()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(vec![ChatCompletionRequestMessage::User(message)])
            .max_tokens(options.max_tokens())
            .temperature(options.temperature())
            .top_p(options.top_p())
            .build()?;

        debug!("Running inference on model {}", model);
        let response = self.client.chat().create(request).await?;

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        let usage = response
            .usage
            .map(|u| InferenceUsage {
                prompt_token_count: u.prompt_tokens,
                generated_token_count: u.completion_tokens,
            })
            .unwrap_or_default();

        Ok(InferenceResult { text, usage })
    }

    async fn generate_embeddings(
        &self,
        model: &str,
        inputs: Vec<String>,
    ) -> Result<EmbeddingsResult> {
        let input_count = inputs.len();
        let request = CreateEmbeddingRequestArgs::default()
            .model(model)
            .input(EmbeddingInput::StringArray(inputs))
            .build()?;

        debug!("Generating {} embeddings on model {}", input_count, model);
        let response = self.client.embeddings().create(request).await?;

        let mut data = response.data;
        if data.len() != input_count {
            return Err(Error::llm(format!(
                "Expected {} embeddings from model {}, got {}",
                input_count,
                model,
                data.len()
            )));
        }
        data.sort_by_key(|embedding| embedding.index);

        Ok(EmbeddingsResult {
            embeddings: data.into_iter().map(|e| e.embedding).collect(),
            usage: EmbeddingsUsage {
                prompt_token_count: response.usage.prompt_tokens,
            },
        })
    }
}

pub fn create_runtime(config: &LlmConfig) -> Result<Arc<dyn LlmRuntime>> {
    match config.provider.as_str() {
        "openai" => Ok(Arc::new(OpenAiRuntime::new(config))),
        other => Err(Error::config(format!("Unknown LLM provider: {}", other))),
    }
}
