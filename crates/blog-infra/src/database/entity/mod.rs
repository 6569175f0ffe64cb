//! SeaORM entities for the `posts` and `comments` tables.

pub mod comment;
pub mod post;
