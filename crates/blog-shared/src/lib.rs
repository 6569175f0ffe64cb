//! # Blog Shared
//!
//! Wire types exchanged between the API and its clients.
//! Nothing in here touches storage or HTTP machinery.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, ResourceRef};
