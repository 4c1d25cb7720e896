use super::types::*;
use crate::{Result, config::LlmConfig};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;
}

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let client = Client::with_config(openai_config)
            .with_http_client(http_client)
            .with_backoff(single_attempt());

        Ok(Self {
            client,
            model: config.model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// async-openai retries rate limits and 5xx by default; an already-expired
/// elapsed budget makes the first failure final.
fn single_attempt() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

#[async_trait]
impl LlmClient for OpenAiClient {
    #[allow(deprecated)]
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        debug!(
            "Creating chat completion with {} messages",
            request.messages.len()
        );

        let mut messages = Vec::new();
        for msg in &request.messages {
            messages.push(msg.to_openai_message()?);
        }

        let mut request_builder = openai_types::CreateChatCompletionRequestArgs::default();
        request_builder.model(&self.model).messages(messages);

        if let Some(max_tokens) = request.max_tokens {
            request_builder.max_tokens(max_tokens);
        }

        let openai_request = request_builder.build()?;

        let response = self.client.chat().create(openai_request).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        let choices = response
            .choices
            .into_iter()
            .map(|choice| Choice {
                index: choice.index,
                content: choice.message.content,
                finish_reason: choice.finish_reason.map(|fr| format!("{fr:?}")),
            })
            .collect();

        let usage = response.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(ChatCompletionResponse {
            id: response.id,
            model: response.model,
            choices,
            usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_openai::types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageContent,
        ChatCompletionRequestUserMessageContentPart,
    };
    use pretty_assertions::assert_eq;

    fn create_test_config() -> LlmConfig {
        LlmConfig {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: "test-api-key".to_string(),
            model: "gpt-4o".to_string(),
            max_tokens: 500,
            timeout_secs: 30,
            prompt: None,
        }
    }

    #[test]
    fn test_openai_client_creation() {
        let client = OpenAiClient::new(create_test_config()).unwrap();

        assert_eq!(client.model(), "gpt-4o");
    }

    #[test]
    fn test_openai_client_with_default_base_url() {
        let mut config = create_test_config();
        config.base_url = String::new();

        let client = OpenAiClient::new(config).unwrap();
        assert_eq!(client.model(), "gpt-4o");
    }

    #[test]
    fn test_user_message_keeps_part_order() {
        let msg = ChatMessage::user(vec![
            ContentPart::text("Appraise this"),
            ContentPart::image_url("https://img.example/1.jpg"),
            ContentPart::image_url("https://img.example/2.jpg"),
        ]);

        let openai_msg = msg.to_openai_message().unwrap();
        let ChatCompletionRequestMessage::User(user) = openai_msg else {
            panic!("expected a user message");
        };
        let ChatCompletionRequestUserMessageContent::Array(parts) = user.content else {
            panic!("expected multi-part content");
        };

        assert_eq!(parts.len(), 3);
        assert!(matches!(
            &parts[0],
            ChatCompletionRequestUserMessageContentPart::Text(p) if p.text == "Appraise this"
        ));
        assert!(matches!(
            &parts[1],
            ChatCompletionRequestUserMessageContentPart::ImageUrl(p)
                if p.image_url.url == "https://img.example/1.jpg"
        ));
        assert!(matches!(
            &parts[2],
            ChatCompletionRequestUserMessageContentPart::ImageUrl(p)
                if p.image_url.url == "https://img.example/2.jpg"
        ));
    }

    #[test]
    fn test_chat_message_invalid_role() {
        let msg = ChatMessage {
            role: "invalid_role".to_string(),
            content: vec![ContentPart::text("This should fail")],
        };

        let result = msg.to_openai_message();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Unknown message role")
        );
    }

    #[test]
    fn test_content_part_serialization() {
        let serialized =
            serde_json::to_value(ContentPart::image_url("https://img.example/1.jpg")).unwrap();

        assert_eq!(
            serialized,
            serde_json::json!({"type": "image_url", "url": "https://img.example/1.jpg"})
        );
    }

    #[test]
    fn test_first_text_reads_first_choice() {
        let response = ChatCompletionResponse {
            id: "chatcmpl-123".to_string(),
            model: "gpt-4o".to_string(),
            choices: vec![
                Choice {
                    index: 0,
                    content: Some("Title: Lamp".to_string()),
                    finish_reason: Some("Stop".to_string()),
                },
                Choice {
                    index: 1,
                    content: Some("Title: Other".to_string()),
                    finish_reason: None,
                },
            ],
            usage: None,
        };

        assert_eq!(response.first_text(), "Title: Lamp");
    }

    #[test]
    fn test_first_text_tolerates_missing_content() {
        let mut response = ChatCompletionResponse {
            id: "chatcmpl-123".to_string(),
            model: "gpt-4o".to_string(),
            choices: vec![Choice {
                index: 0,
                content: None,
                finish_reason: None,
            }],
            usage: None,
        };
        assert_eq!(response.first_text(), "");

        response.choices.clear();
        assert_eq!(response.first_text(), "");
    }
}
