//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    Select, TransactionTrait,
};

use blog_core::domain::{
    Comment, NewComment, NewPost, Page, PageRequest, Post, PostSortField, SortDirection,
};
use blog_core::error::RepoError;
use blog_core::ports::{CommentRepository, PostRepository};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

fn sort_column(field: PostSortField) -> post::Column {
    match field {
        PostSortField::Id => post::Column::Id,
        PostSortField::Title => post::Column::Title,
        PostSortField::Description => post::Column::Description,
        PostSortField::Content => post::Column::Content,
    }
}

fn sort_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

/// All posts in listing order. Ties on the sort key fall back to ascending id,
/// matching the in-memory store, so LIMIT/OFFSET windows never overlap.
pub(crate) fn ordered_posts(request: &PageRequest) -> Select<PostEntity> {
    let query = PostEntity::find().order_by(
        sort_column(request.sort_by),
        sort_order(request.direction),
    );

    match request.sort_by {
        PostSortField::Id => query,
        _ => query.order_by_asc(post::Column::Id),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(new_post)
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Post>, RepoError> {
        let paginator = ordered_posts(&request).paginate(&*self.db, request.page_size);

        let total = paginator.num_items().await.map_err(map_db_err)?;
        if request.is_beyond(total) {
            return Ok(Page::new(Vec::new(), &request, total));
        }

        let rows = paginator
            .fetch_page(request.page_no)
            .await
            .map_err(map_db_err)?;

        Ok(Page::new(
            rows.into_iter().map(Into::into).collect(),
            &request,
            total,
        ))
    }

    async fn delete_with_comments(&self, id: i64) -> Result<(), RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let comments = CommentEntity::delete_many()
            .filter(comment::Column::PostId.eq(id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let posts = PostEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if posts.rows_affected == 0 {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(RepoError::NotFound);
        }

        txn.commit().await.map_err(map_db_err)?;
        tracing::debug!(
            post_id = id,
            comments = comments.rows_affected,
            "Deleted post with its comments"
        );

        Ok(())
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn create(&self, new_comment: NewComment) -> Result<Comment, RepoError> {
        let model = comment::ActiveModel::from(new_comment)
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn find_by_post_id(&self, post_id: i64) -> Result<Vec<Comment>, RepoError> {
        tracing::debug!(post_id, "Finding comments by post");

        let result = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
