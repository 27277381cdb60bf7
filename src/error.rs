use async_openai::error::OpenAIError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("OPENAI_API_KEY environment variable is not set")]
    MissingApiKey,

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] OpenAIError),

    #[error("completion contained no choices")]
    EmptyCompletion,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
