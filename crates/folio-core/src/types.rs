// ABOUTME: Core types shared across folio
// ABOUTME: User, Role, ChatMessage, and the mock result payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A signed-in user, as produced by the authentication provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Role of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Agent,
    System,
}

/// Delivery status of a transcript entry.
///
/// `Failed` is part of the data model but no simulated flow produces it;
/// a real backend integration would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    Pending,
    Completed,
    Failed,
}

/// Structured payload attached to an agent reply. The variant is a pure
/// function of the agent id, independent of what the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskResult {
    Analysis {
        insights: Vec<String>,
        charts: Vec<String>,
    },
    Content {
        items: Vec<String>,
    },
    Code {
        improvements: Vec<String>,
        files: Vec<String>,
    },
    General {
        summary: String,
        items: Vec<String>,
    },
}

impl TaskResult {
    /// Short label used by renderers and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            TaskResult::Analysis { .. } => "analysis",
            TaskResult::Content { .. } => "content",
            TaskResult::Code { .. } => "code",
            TaskResult::General { .. } => "general",
        }
    }
}

/// One entry in a session transcript. Entries are appended, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub status: Option<MessageStatus>,
    pub result: Option<TaskResult>,
}

impl ChatMessage {
    pub fn user(content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: Role::User,
            content,
            timestamp: Utc::now(),
            status: None,
            result: None,
        }
    }

    pub fn agent(content: String, result: Option<TaskResult>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: Role::Agent,
            content,
            timestamp: Utc::now(),
            status: Some(MessageStatus::Completed),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_has_no_status() {
        let msg = ChatMessage::user("hello".to_string());
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "hello");
        assert!(msg.status.is_none());
        assert!(msg.result.is_none());
    }

    #[test]
    fn test_agent_message_is_completed() {
        let msg = ChatMessage::agent("hi".to_string(), None);
        assert_eq!(msg.role, Role::Agent);
        assert_eq!(msg.status, Some(MessageStatus::Completed));
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = ChatMessage::user("a".to_string());
        let b = ChatMessage::user("b".to_string());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_result_kind_labels() {
        let r = TaskResult::Analysis {
            insights: vec![],
            charts: vec![],
        };
        assert_eq!(r.kind(), "analysis");
        let r = TaskResult::General {
            summary: String::new(),
            items: vec![],
        };
        assert_eq!(r.kind(), "general");
    }

    #[test]
    fn test_result_serializes_with_type_tag() {
        let r = TaskResult::Content {
            items: vec!["draft".to_string()],
        };
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"type\":\"content\""));
    }
}
