use super::{
    parser::parse_listing,
    prompt::{DEFAULT_APPRAISAL_PROMPT, InferencePrompt},
    types::{ListingRecord, ListingRequest},
};
use crate::{
    Error, Result,
    config::LlmConfig,
    llm::{ChatCompletionRequest, LlmClient, OpenAiClient},
};
use std::sync::Arc;
use tracing::{debug, info};

/// Turns a listing request into a listing record with one inference call.
pub struct ListingExtractor {
    llm_client: Arc<dyn LlmClient>,
    prompt_template: String,
    max_tokens: u32,
}

impl ListingExtractor {
    pub fn new(llm_client: Arc<dyn LlmClient>, config: &LlmConfig) -> Self {
        Self {
            llm_client,
            prompt_template: config
                .prompt
                .clone()
                .unwrap_or_else(|| DEFAULT_APPRAISAL_PROMPT.to_string()),
            max_tokens: config.max_tokens,
        }
    }

    /// Builds an extractor backed by the OpenAI-compatible provider in `config`.
    pub fn from_config(config: LlmConfig) -> Result<Self> {
        info!("Initializing listing extractor with model {}", config.model);
        let client = OpenAiClient::new(config.clone())?;
        Ok(Self::new(Arc::new(client), &config))
    }

    pub async fn extract(&self, request: &ListingRequest) -> Result<ListingRecord> {
        let image_urls = request.image_urls();
        if image_urls.is_empty() {
            return Err(Error::NoImages);
        }

        let prompt = InferencePrompt::new(&self.prompt_template, image_urls);
        let completion = ChatCompletionRequest {
            messages: vec![prompt.into_message()],
            max_tokens: Some(self.max_tokens),
        };

        let response = self.llm_client.create_chat_completion(completion).await?;
        if let Some(usage) = &response.usage {
            debug!(
                "Completion {} used {} prompt / {} completion tokens",
                response.id, usage.prompt_tokens, usage.completion_tokens
            );
        }

        let reply = response.first_text();
        debug!("Raw model reply: {}", reply);

        Ok(parse_listing(reply))
    }
}
