use crate::listing::ListingRecord;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub success: bool,
    pub data: ListingRecord,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}
