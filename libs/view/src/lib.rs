mod banner;
mod blog;
mod filter;
mod form;
mod state;

pub use banner::{Banner, BANNER_TTL};
pub use blog::BlogView;
pub use filter::{filter_posts, Filter};
pub use form::PostForm;
pub use state::UiState;
