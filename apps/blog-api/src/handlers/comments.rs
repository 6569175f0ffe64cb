//! Comment handlers. Every route is nested under its post.

use actix_web::{HttpResponse, web};
use blog_shared::dto::CommentRequest;
use validator::Validate;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/posts/{post_id}/comments
pub async fn create_comment(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let comment = state
        .comments
        .create_comment(path.into_inner(), req)
        .await?;
    Ok(HttpResponse::Created().json(comment))
}

/// GET /api/posts/{post_id}/comments
pub async fn list_comments(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let comments = state
        .comments
        .list_comments_by_post(path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(comments))
}

/// GET /api/posts/{post_id}/comments/{id}
pub async fn get_comment(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    let comment = state.comments.get_comment(post_id, comment_id).await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// PUT /api/posts/{post_id}/comments/{id}
pub async fn update_comment(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    let req = body.into_inner();
    req.validate()?;

    let comment = state
        .comments
        .update_comment(post_id, comment_id, req)
        .await?;
    Ok(HttpResponse::Ok().json(comment))
}

/// DELETE /api/posts/{post_id}/comments/{id}
pub async fn delete_comment(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    state.comments.delete_comment(post_id, comment_id).await?;
    Ok(HttpResponse::Ok().body("Comment deleted successfully"))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use blog_shared::dto::{CommentDto, PostDto};
    use serde_json::json;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    fn post_body(title: &str) -> serde_json::Value {
        json!({ "title": title, "description": "description", "content": "content" })
    }

    fn comment_body(name: &str) -> serde_json::Value {
        json!({ "name": name, "email": format!("{name}@example.com"), "body": "well said" })
    }

    #[actix_web::test]
    async fn comment_lifecycle_under_its_post() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(post_body("Host"))
            .to_request();
        let post: PostDto = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{}/comments", post.id))
            .set_json(comment_body("ada"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: CommentDto = test::read_body_json(resp).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}/comments", post.id))
            .to_request();
        let listed: Vec<CommentDto> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed, vec![created.clone()]);

        let req = test::TestRequest::put()
            .uri(&format!("/api/posts/{}/comments/{}", post.id, created.id))
            .set_json(comment_body("grace"))
            .to_request();
        let updated: CommentDto = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "grace");

        let req = test::TestRequest::delete()
            .uri(&format!("/api/posts/{}/comments/{}", post.id, created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "Comment deleted successfully");

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}/comments/{}", post.id, created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn comment_under_foreign_post_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(configure_routes),
        )
        .await;

        let mut ids = Vec::new();
        for title in ["Owner", "Stranger"] {
            let req = test::TestRequest::post()
                .uri("/api/posts")
                .set_json(post_body(title))
                .to_request();
            let post: PostDto = test::call_and_read_body_json(&app, req).await;
            ids.push(post.id);
        }

        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{}/comments", ids[0]))
            .set_json(comment_body("ada"))
            .to_request();
        let comment: CommentDto = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}/comments/{}", ids[1], comment.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Comment does not belong to post");
    }

    #[actix_web::test]
    async fn comment_on_missing_post_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts/9/comments")
            .set_json(comment_body("ada"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["resource"]["name"], "Post");

        let req = test::TestRequest::get()
            .uri("/api/posts/9/comments")
            .to_request();
        let listed: Vec<CommentDto> = test::call_and_read_body_json(&app, req).await;
        assert!(listed.is_empty());
    }

    #[actix_web::test]
    async fn non_numeric_ids_and_unknown_routes() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/posts/abc/comments")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/api/authors").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["resource"]["name"], "Route");
    }
}
