//! Domain entities - the core business objects.

mod comment;
mod page;
mod post;

pub use comment::{Comment, NewComment};
pub use page::{MAX_PAGE_SIZE, Page, PageRequest, PostSortField, SortDirection};
pub use post::{NewPost, Post};
