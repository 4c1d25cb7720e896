#![allow(dead_code)]

pub mod mocks;

use listing_appraiser::config::LlmConfig;

pub const OAK_TABLE_REPLY: &str = "Title: Oak Side Table
Description: Sturdy vintage oak table with minor scuffing.
Category: Furniture
Condition: Good
Price: $40–$60";

/// LLM settings pointing at `base_url` with test defaults.
pub fn test_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        api_key: "test-api-key".to_string(),
        model: "gpt-4o".to_string(),
        max_tokens: 500,
        timeout_secs: 5,
        prompt: None,
    }
}

pub fn image_urls(n: usize) -> Vec<String> {
    (1..=n)
        .map(|i| format!("https://img.example/item-{i}.jpg"))
        .collect()
}
