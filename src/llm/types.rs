use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestMessageContentPartImageArgs,
    ChatCompletionRequestMessageContentPartTextArgs, ChatCompletionRequestUserMessageArgs,
    ChatCompletionRequestUserMessageContent, ChatCompletionRequestUserMessageContentPart,
    ImageUrlArgs,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { url: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: Vec<ContentPart>,
}

#[derive(Debug, Clone)]
pub struct ChatCompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub model: String,
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone)]
pub struct Choice {
    pub index: u32,
    pub content: Option<String>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn image_url(url: impl Into<String>) -> Self {
        Self::ImageUrl { url: url.into() }
    }
}

impl ChatMessage {
    pub fn user(content: Vec<ContentPart>) -> Self {
        Self {
            role: "user".to_string(),
            content,
        }
    }

    pub fn to_openai_message(&self) -> Result<ChatCompletionRequestMessage, crate::Error> {
        match self.role.as_str() {
            "user" => {
                let mut parts = Vec::with_capacity(self.content.len());
                for part in &self.content {
                    parts.push(part.to_openai_part()?);
                }
                let msg = ChatCompletionRequestUserMessageArgs::default()
                    .content(ChatCompletionRequestUserMessageContent::Array(parts))
                    .build()
                    .map_err(|e| {
                        crate::Error::llm(format!("Failed to build user message: {}", e))
                    })?;
                Ok(msg.into())
            }
            _ => Err(crate::Error::llm(format!(
                "Unknown message role: {}",
                self.role
            ))),
        }
    }
}

impl ContentPart {
    fn to_openai_part(&self) -> Result<ChatCompletionRequestUserMessageContentPart, crate::Error> {
        match self {
            Self::Text { text } => {
                let part = ChatCompletionRequestMessageContentPartTextArgs::default()
                    .text(text.clone())
                    .build()
                    .map_err(|e| crate::Error::llm(format!("Failed to build text part: {}", e)))?;
                Ok(ChatCompletionRequestUserMessageContentPart::Text(part))
            }
            Self::ImageUrl { url } => {
                let image_url = ImageUrlArgs::default()
                    .url(url.clone())
                    .build()
                    .map_err(|e| crate::Error::llm(format!("Failed to build image url: {}", e)))?;
                let part = ChatCompletionRequestMessageContentPartImageArgs::default()
                    .image_url(image_url)
                    .build()
                    .map_err(|e| {
                        crate::Error::llm(format!("Failed to build image part: {}", e))
                    })?;
                Ok(ChatCompletionRequestUserMessageContentPart::ImageUrl(part))
            }
        }
    }
}

impl ChatCompletionResponse {
    /// Text of the first choice. A reply with no choices or no content reads as empty.
    pub fn first_text(&self) -> &str {
        self.choices
            .first()
            .and_then(|choice| choice.content.as_deref())
            .unwrap_or_default()
    }
}
