/// Which post is open and whether the add-post panel is showing.
///
/// Showing or hiding the panel always closes the open post.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UiState {
    expanded: Option<i64>,
    form_visible: bool,
}

impl UiState {
    pub fn expanded(&self) -> Option<i64> {
        self.expanded
    }

    pub fn is_expanded(&self, post_id: i64) -> bool {
        self.expanded == Some(post_id)
    }

    pub fn is_form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn toggle_post(&mut self, post_id: i64) {
        if self.expanded == Some(post_id) {
            self.expanded = None;
        } else {
            self.expanded = Some(post_id);
        }
    }

    pub fn toggle_form(&mut self) {
        self.form_visible = !self.form_visible;
        self.expanded = None;
    }

    pub fn hide_form(&mut self) {
        self.form_visible = false;
    }
}
