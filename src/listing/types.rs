use serde::{Deserialize, Serialize};

/// Body of a listing-generation request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingRequest {
    #[serde(default)]
    pub image_urls: Option<Vec<String>>,
    /// Opaque caller identifier, only logged.
    #[serde(default)]
    pub user_id: Option<String>,
}

impl ListingRequest {
    pub fn new(image_urls: Vec<String>) -> Self {
        Self {
            image_urls: Some(image_urls),
            user_id: None,
        }
    }

    pub fn image_urls(&self) -> &[String] {
        self.image_urls.as_deref().unwrap_or_default()
    }
}

/// The five-field resale listing. Every field is always serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListingRecord {
    pub title: String,
    pub description: String,
    pub category: String,
    pub condition: String,
    pub price: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingField {
    Title,
    Description,
    Category,
    Condition,
    Price,
}

impl ListingField {
    pub const ALL: [ListingField; 5] = [
        ListingField::Title,
        ListingField::Description,
        ListingField::Category,
        ListingField::Condition,
        ListingField::Price,
    ];

    /// Label the model is asked to prefix the field's line with.
    pub fn label(self) -> &'static str {
        match self {
            ListingField::Title => "Title",
            ListingField::Description => "Description",
            ListingField::Category => "Category",
            ListingField::Condition => "Condition",
            ListingField::Price => "Price",
        }
    }
}

impl ListingRecord {
    pub fn field_mut(&mut self, field: ListingField) -> &mut String {
        match field {
            ListingField::Title => &mut self.title,
            ListingField::Description => &mut self.description,
            ListingField::Category => &mut self.category,
            ListingField::Condition => &mut self.condition,
            ListingField::Price => &mut self.price,
        }
    }
}
