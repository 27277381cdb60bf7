use async_openai::{
    config::OpenAIConfig,
    types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};

use crate::error::{Error, Result};

const MODEL: &str = "gpt-3.5-turbo";
const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// One-shot text completion backend. The pipeline is generic over this so
/// tests can substitute a canned implementation.
#[allow(async_fn_in_trait)]
pub trait Completion {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Chat-completion client. Holds its credential explicitly instead of
/// relying on process-global configuration.
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Client::with_config(config),
        }
    }

    /// Reads the credential from `OPENAI_API_KEY`. An unset or empty
    /// variable fails here, before any request is made.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.is_empty() => Ok(Self::new(key)),
            _ => Err(Error::MissingApiKey),
        }
    }
}

impl Completion for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(MODEL)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into()])
            .build()?;

        let response = self.client.chat().create(request).await?;
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(Error::EmptyCompletion)?;

        Ok(content.trim().to_owned())
    }
}
