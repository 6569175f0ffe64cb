//! Post handlers.

use actix_web::{HttpResponse, web};
use blog_shared::dto::{ListPostsQuery, PostRequest};
use validator::Validate;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let post = state.posts.create_post(req).await?;
    Ok(HttpResponse::Created().json(post))
}

/// GET /api/posts?pageNo=0&pageSize=10&sortBy=id&sortDir=asc
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let page = state
        .posts
        .list_posts(query.page_no, query.page_size, &query.sort_by, &query.sort_dir)
        .await?;

    Ok(HttpResponse::Ok().json(page))
}

/// GET /api/posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let post = state.posts.get_post_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let post = state.posts.update_post(path.into_inner(), req).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    state.posts.delete_post_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().body("Post entity deleted successfully"))
}
