pub mod collection;
pub mod draft;
pub mod post;
pub mod user;

pub mod prelude {
    pub use crate::collection::Collection;
    pub use crate::draft::{Draft, NewPostDraft};
    pub use crate::post::Post as PostEntity;
    pub use crate::user::User as UserEntity;
}
