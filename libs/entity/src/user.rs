use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub name: Option<String>,
}

#[cfg(test)]
mod test {
    use super::User;

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        // Arrange
        let text = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "city": "Gwenborough" },
            "phone": "1-770-736-8031 x56442"
        }"#;

        // Act
        let user = serde_json::from_str::<User>(text).unwrap();

        // Assert
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "Bret");
        assert_eq!(user.name.as_deref(), Some("Leanne Graham"));
    }
}
