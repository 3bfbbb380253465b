use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

#[cfg(test)]
mod test {
    use super::Post;

    #[test]
    fn test_deserialize_camel_case() {
        // Arrange
        let text = r#"{"userId":1,"id":3,"title":"t","body":"b"}"#;

        // Act
        let post = serde_json::from_str::<Post>(text);

        // Assert
        assert_eq!(
            post.unwrap(),
            Post {
                id: 3,
                user_id: 1,
                title: "t".to_string(),
                body: "b".to_string(),
            }
        );
    }
}
