use async_trait::async_trait;
use listing_appraiser::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatCompletionResponse, Choice, LlmClient, Usage},
};
use std::sync::{Arc, Mutex};

/// Mock LLM client for testing
#[derive(Debug)]
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<ChatCompletionResponse>>>,
    pub requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<ChatCompletionResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_mock_chat_response(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: "test-id".to_string(),
        model: "test-model".to_string(),
        choices: vec![Choice {
            index: 0,
            content: Some(content.to_string()),
            finish_reason: Some("Stop".to_string()),
        }],
        usage: Some(Usage {
            prompt_tokens: 120,
            completion_tokens: 40,
            total_tokens: 160,
        }),
    }
}

pub fn create_mock_empty_response() -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: "test-id".to_string(),
        model: "test-model".to_string(),
        choices: vec![],
        usage: None,
    }
}
