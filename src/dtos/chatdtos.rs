use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessageDto {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Validate, Serialize, Deserialize)]
pub struct ChatRequestDto {
    #[validate(length(min = 1, message = "At least one message is required"))]
    pub messages: Vec<ChatMessageDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponseDto {
    pub message: String,
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_list_fails_validation() {
        let dto = ChatRequestDto { messages: vec![] };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn response_shape_carries_success_flag() {
        let json = serde_json::to_value(ChatResponseDto {
            message: "hello".to_string(),
            success: false,
        })
        .unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "hello");
    }
}
