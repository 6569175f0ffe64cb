//! # Blog Core
//!
//! The domain layer of the blog API: posts, comments, pagination, the
//! repository ports and the services that enforce the business rules.
//! This crate has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, DomainResult, RepoError};
pub use services::{CommentService, PostService};
