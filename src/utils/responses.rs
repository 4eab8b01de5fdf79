use serde::Serialize;
use utoipa::ToSchema;

use crate::store::entity::EntityId;

/// Body returned by every create endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    pub id: EntityId,
    pub message: String,
}

impl CreatedResponse {
    pub fn new(id: EntityId, message: &str) -> Self {
        Self {
            id,
            message: message.to_string(),
        }
    }
}

/// Plain confirmation body for updates and unenrollment.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
