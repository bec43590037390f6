use foodtrace_core::domain::chat::entities::{ChatMessage, ChatRole};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

fn validate_role(role: &str) -> Result<(), ValidationError> {
    role.parse::<ChatRole>().map(|_| ()).map_err(|_| {
        ValidationError::new("chat_role").with_message("role must be user or assistant".into())
    })
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChatMessageValidator {
    #[validate(
        length(min = 1, message = "role is required"),
        custom(function = "validate_role")
    )]
    #[schema(example = "user")]
    pub role: String,

    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChatRequestValidator {
    #[validate(length(min = 1, message = "message is required"))]
    #[schema(example = "目前有哪些食材檢驗合格？")]
    pub message: String,

    #[serde(default)]
    #[validate(nested)]
    pub conversation_history: Vec<ChatMessageValidator>,
}

impl ChatRequestValidator {
    /// Converts the validated history; roles were checked by `validate_role`.
    pub fn history(&self) -> Vec<ChatMessage> {
        self.conversation_history
            .iter()
            .filter_map(|m| {
                m.role.parse::<ChatRole>().ok().map(|role| ChatMessage {
                    role,
                    content: m.content.clone(),
                })
            })
            .collect()
    }
}
