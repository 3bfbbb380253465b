use serde::{Deserialize, Serialize};

use crate::post::Post;

/// A payload that becomes a full entity once the server assigns it an id.
pub trait Draft: Serialize + Clone {
    type Created;

    fn with_id(self, id: i64) -> Self::Created;
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPostDraft {
    pub title: String,
    pub body: String,
    pub user_id: i64,
}

impl Draft for NewPostDraft {
    type Created = Post;

    fn with_id(self, id: i64) -> Post {
        Post {
            id,
            user_id: self.user_id,
            title: self.title,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::{json, Value};

    use super::{Draft, NewPostDraft};

    #[test]
    fn test_payload_has_exactly_three_fields() {
        // Arrange
        let draft = NewPostDraft {
            title: "T".to_string(),
            body: "B".to_string(),
            user_id: 1,
        };

        // Act
        let value = serde_json::to_value(&draft).unwrap();

        // Assert
        assert_eq!(value, json!({ "title": "T", "body": "B", "userId": 1 }));
        assert_eq!(value.as_object().map(|o| o.len()), Some(3));
        assert!(!matches!(value.get("id"), Some(Value::Number(_))));
    }

    #[test]
    fn test_with_id_merges_fields() {
        // Arrange
        let draft = NewPostDraft {
            title: "T".to_string(),
            body: "B".to_string(),
            user_id: 1,
        };

        // Act
        let post = draft.with_id(42);

        // Assert
        assert_eq!(post.id, 42);
        assert_eq!(post.user_id, 1);
        assert_eq!(post.title, "T");
        assert_eq!(post.body, "B");
    }
}
