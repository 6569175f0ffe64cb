//! Services - the operations the HTTP surface calls.
//!
//! Services hold only references to repositories; every call re-reads
//! whatever state it needs from the store.

mod comment;
mod post;

pub use comment::CommentService;
pub use post::PostService;

use crate::error::{DomainError, RepoError};

/// Turn a repository-level "no such row" into a domain not-found for `resource`.
fn missing(resource: &'static str, id: i64) -> impl FnOnce(RepoError) -> DomainError {
    move |err| match err {
        RepoError::NotFound => DomainError::not_found(resource, id),
        other => other.into(),
    }
}
