use std::collections::BTreeMap;

use blog_core::domain::{Comment, NewComment, NewPost, PageRequest, Post};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, CommentRepository, PostRepository};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, QueryTrait, SqlErr, Value};

use crate::database::entity::{comment, post};
use crate::database::postgres_base::constraint_violation;
use crate::database::postgres_repo::{
    PostgresCommentRepository, PostgresPostRepository, ordered_posts,
};

fn post_model(id: i64, title: &str) -> post::Model {
    post::Model {
        id,
        title: title.to_owned(),
        description: "Description".to_owned(),
        content: "Content".to_owned(),
    }
}

fn comment_model(id: i64, post_id: i64) -> comment::Model {
    comment::Model {
        id,
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        body: "First!".to_owned(),
        post_id,
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![post_model(1, "Test Post")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result = BaseRepository::<Post, i64>::find_by_id(&repo, 1).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, 1);
}

#[tokio::test]
async fn test_create_post_returns_generated_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![post_model(7, "Fresh")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let created = repo
        .create(NewPost {
            title: "Fresh".to_owned(),
            description: "Description".to_owned(),
            content: "Content".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(created.id, 7);
    assert_eq!(created.title, "Fresh");
}

#[tokio::test]
async fn test_update_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let ghost = Post::from(post_model(99, "Ghost"));
    let result = BaseRepository::<Post, i64>::update(&repo, ghost).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_find_page_counts_then_fetches() {
    let count_row = BTreeMap::from([("num_items", Value::BigInt(Some(5)))]);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row]])
        .append_query_results([vec![post_model(3, "c"), post_model(4, "d")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let page = repo
        .find_page(PageRequest::new(1, 2, "id", "asc").unwrap())
        .await
        .unwrap();

    assert_eq!(page.content.len(), 2);
    assert_eq!(page.total_elements, 5);
    assert_eq!(page.total_pages, 3);
    assert!(!page.first);
    assert!(!page.last);
}

#[tokio::test]
async fn test_delete_with_comments_runs_in_one_transaction() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 2,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
        ])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    repo.delete_with_comments(1).await.unwrap();
}

#[tokio::test]
async fn test_delete_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let result = repo.delete_with_comments(1).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_find_comments_by_post_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![comment_model(1, 5), comment_model(2, 5)]])
        .into_connection();

    let repo = PostgresCommentRepository::new(db);
    let comments = repo.find_by_post_id(5).await.unwrap();

    assert_eq!(comments.len(), 2);
    assert!(comments.iter().all(|c| c.post_id == 5));
}

#[tokio::test]
async fn test_create_comment_keeps_post_reference() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![comment_model(11, 5)]])
        .into_connection();

    let repo = PostgresCommentRepository::new(db);
    let comment = repo
        .create(NewComment {
            post_id: 5,
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            body: "First!".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(comment.id, 11);
    assert_eq!(comment.post_id, 5);
}

#[tokio::test]
async fn test_delete_missing_comment_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresCommentRepository::new(db);
    let result = BaseRepository::<Comment, i64>::delete(&repo, 3).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[test]
fn test_listing_breaks_ties_by_ascending_id() {
    let request = PageRequest::new(0, 10, "description", "desc").unwrap();
    let sql = ordered_posts(&request)
        .build(DatabaseBackend::Postgres)
        .to_string();

    assert!(
        sql.ends_with(r#"ORDER BY "posts"."description" DESC, "posts"."id" ASC"#),
        "{sql}"
    );
}

#[test]
fn test_listing_by_id_needs_no_tie_break() {
    let request = PageRequest::new(0, 10, "id", "asc").unwrap();
    let sql = ordered_posts(&request)
        .build(DatabaseBackend::Postgres)
        .to_string();

    assert!(sql.ends_with(r#"ORDER BY "posts"."id" ASC"#), "{sql}");
}

#[test]
fn test_constraint_details_do_not_leak_schema_names() {
    let raw = r#"duplicate key value violates unique constraint "posts_title_key""#;

    match constraint_violation(SqlErr::UniqueConstraintViolation(raw.to_owned())) {
        Some(RepoError::Constraint(detail)) => {
            assert_eq!(detail, "a post with this title already exists");
            assert!(!detail.contains("posts_title_key"));
        }
        other => panic!("expected a constraint error, got {other:?}"),
    }
}
