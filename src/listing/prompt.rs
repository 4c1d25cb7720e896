use crate::llm::{ChatMessage, ContentPart};

pub const IMAGE_COUNT_PLACEHOLDER: &str = "{image_count}";

pub const DEFAULT_APPRAISAL_PROMPT: &str = "You are an AI trained in vintage and resale item valuation.

Based ONLY on the attached images, return all of the following:
1. A short and catchy product title
2. A 2-3 sentence product description
3. A general category (Furniture, Electronics, Decor, Apparel, etc.)
4. A condition rating (New, Like New, Good, Fair, Poor)
5. A recommended resale price range in USD

Always give a complete answer with all five fields, even if you are unsure. \
Never leave a field out; give your best estimate instead.

Respond with exactly this format:

Title: ...
Description: ...
Category: ...
Condition: ...
Price: ...

The user uploaded {image_count} images. Use all available visual context.";

/// Instruction text plus the image references, in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct InferencePrompt {
    pub instruction: String,
    pub image_urls: Vec<String>,
}

impl InferencePrompt {
    pub fn new(template: &str, image_urls: &[String]) -> Self {
        let instruction =
            template.replace(IMAGE_COUNT_PLACEHOLDER, &image_urls.len().to_string());

        Self {
            instruction,
            image_urls: image_urls.to_vec(),
        }
    }

    /// One user message: the instruction first, then one part per image.
    pub fn into_message(self) -> ChatMessage {
        let mut content = Vec::with_capacity(self.image_urls.len() + 1);
        content.push(ContentPart::text(self.instruction));
        content.extend(self.image_urls.into_iter().map(ContentPart::image_url));

        ChatMessage::user(content)
    }
}
