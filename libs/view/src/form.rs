use entity::prelude::*;

const FALLBACK_USER_ID: i64 = 1;

/// Input state of the add-post panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub body: String,
    pub user_id: i64,
    pub title_error: bool,
    pub body_error: bool,
    default_user_id: i64,
}

impl PostForm {
    /// The author defaults to the first known user.
    pub fn new(users: &[UserEntity]) -> Self {
        let default_user_id =
            users.first().map_or(FALLBACK_USER_ID, |user| user.id);

        Self {
            title: String::new(),
            body: String::new(),
            user_id: default_user_id,
            title_error: false,
            body_error: false,
            default_user_id,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    pub fn set_user_id(&mut self, user_id: i64) {
        self.user_id = user_id;
    }

    /// Validates the inputs and hands out a draft, resetting the form.
    /// Title is checked before body; only the first missing field is
    /// flagged.
    pub fn submit(&mut self) -> Option<NewPostDraft> {
        if self.title.is_empty() {
            self.title_error = true;
            return None;
        }

        if self.body.is_empty() {
            self.body_error = true;
            return None;
        }

        let draft = NewPostDraft {
            title: std::mem::take(&mut self.title),
            body: std::mem::take(&mut self.body),
            user_id: self.user_id,
        };

        self.user_id = self.default_user_id;
        self.title_error = false;
        self.body_error = false;

        Some(draft)
    }
}

#[cfg(test)]
mod test {
    use entity::prelude::*;

    use super::PostForm;

    fn user(id: i64) -> UserEntity {
        UserEntity {
            id,
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            name: None,
        }
    }

    #[test]
    fn test_default_author() {
        assert_eq!(PostForm::new(&[]).user_id, 1);
        assert_eq!(PostForm::new(&[user(7), user(3)]).user_id, 7);
    }

    #[test]
    fn test_missing_title_flags_title_only() {
        // Arrange
        let mut form = PostForm::new(&[]);

        // Act
        let draft = form.submit();

        // Assert
        assert_eq!(draft, None);
        assert!(form.title_error);
        assert!(!form.body_error);
    }

    #[test]
    fn test_missing_body() {
        // Arrange
        let mut form = PostForm::new(&[]);
        form.set_title("T");

        // Act
        let draft = form.submit();

        // Assert
        assert_eq!(draft, None);
        assert!(form.body_error);
        assert_eq!(form.title, "T");
    }

    #[test]
    fn test_submit_yields_draft_and_resets() {
        // Arrange
        let mut form = PostForm::new(&[user(2), user(9)]);
        form.set_title("T");
        form.set_body("B");
        form.set_user_id(9);

        // Act
        let draft = form.submit();

        // Assert
        assert_eq!(
            draft,
            Some(NewPostDraft {
                title: "T".to_string(),
                body: "B".to_string(),
                user_id: 9,
            })
        );
        assert!(form.title.is_empty());
        assert!(form.body.is_empty());
        assert_eq!(form.user_id, 2);
    }
}
