//! Journal entry domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A persisted journal entry.
///
/// `id` and `created_at` are assigned by the store on insertion and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating an entry.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEntryRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "title must be between 1 and 255 characters"
    ))]
    pub title: String,

    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
}

/// Request payload for replacing an entry's title and content.
///
/// `id` and `created_at` are not part of the payload; they cannot be changed.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEntryRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "title must be between 1 and 255 characters"
    ))]
    pub title: String,

    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_create_request_valid() {
        let request = CreateEntryRequest {
            title: "First entry".to_string(),
            content: "Some content".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_empty_title() {
        let request = CreateEntryRequest {
            title: String::new(),
            content: "Some content".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_create_request_title_too_long() {
        let request = CreateEntryRequest {
            title: "x".repeat(256),
            content: "Some content".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_create_request_title_at_limit() {
        let request = CreateEntryRequest {
            title: "x".repeat(255),
            content: "Some content".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_empty_content() {
        let request = CreateEntryRequest {
            title: "First entry".to_string(),
            content: String::new(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("content"));
    }

    #[test]
    fn test_update_request_empty_content() {
        let request = UpdateEntryRequest {
            title: "Updated".to_string(),
            content: String::new(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("content"));
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = Entry {
            id: 7,
            title: "Title".to_string(),
            content: "Content".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Title");
        assert_eq!(json["content"], "Content");
        // chrono serializes as RFC 3339
        assert_eq!(json["created_at"], "2025-06-01T12:30:00Z");
    }

    #[test]
    fn test_entry_roundtrip() {
        let entry = Entry {
            id: 1,
            title: "Title".to_string(),
            content: "Content".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
