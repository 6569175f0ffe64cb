//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Page number used when `pageNo` is omitted (pages are zero-based).
pub const DEFAULT_PAGE_NUMBER: u64 = 0;
/// Page size used when `pageSize` is omitted.
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Sort field used when `sortBy` is omitted.
pub const DEFAULT_SORT_BY: &str = "id";
/// Sort direction used when `sortDir` is omitted.
pub const DEFAULT_SORT_DIRECTION: &str = "asc";

/// Request body for creating or replacing a post.
///
/// An `id` sent by the client is ignored; ids are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PostRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,
}

/// A post as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub content: String,
}

/// One page of posts plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub content: Vec<PostDto>,
    pub page_no: u64,
    pub page_size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub last: bool,
    pub first: bool,
}

/// Query string of `GET /posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsQuery {
    #[serde(default = "default_page_no")]
    pub page_no: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default = "default_sort_dir")]
    pub sort_dir: String,
}

impl Default for ListPostsQuery {
    fn default() -> Self {
        Self {
            page_no: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: DEFAULT_SORT_BY.to_string(),
            sort_dir: DEFAULT_SORT_DIRECTION.to_string(),
        }
    }
}

fn default_page_no() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

fn default_sort_by() -> String {
    DEFAULT_SORT_BY.to_string()
}

fn default_sort_dir() -> String {
    DEFAULT_SORT_DIRECTION.to_string()
}

/// Request body for creating or replacing a comment.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CommentRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,
    #[validate(length(min = 1, message = "body must not be empty"))]
    pub body: String,
}

/// A comment as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_falls_back_to_defaults() {
        let query: ListPostsQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page_no, 0);
        assert_eq!(query.page_size, 10);
        assert_eq!(query.sort_by, "id");
        assert_eq!(query.sort_dir, "asc");
    }

    #[test]
    fn post_request_ignores_client_id() {
        let req: PostRequest = serde_json::from_str(
            r#"{"id": 99, "title": "t", "description": "d", "content": "c"}"#,
        )
        .unwrap();
        assert_eq!(req.title, "t");
    }

    #[test]
    fn empty_fields_fail_validation() {
        let req = CommentRequest {
            name: String::new(),
            email: "a@b.c".to_string(),
            body: String::new(),
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn page_envelope_uses_camel_case() {
        let page = PostResponse {
            content: vec![],
            page_no: 0,
            page_size: 10,
            total_elements: 0,
            total_pages: 0,
            last: true,
            first: true,
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalElements"], 0);
        assert_eq!(json["pageSize"], 10);
    }
}
