mod extractor;
mod parser;
mod prompt;
mod types;

pub use extractor::ListingExtractor;
pub use parser::parse_listing;
pub use prompt::{DEFAULT_APPRAISAL_PROMPT, IMAGE_COUNT_PLACEHOLDER, InferencePrompt};
pub use types::*;
