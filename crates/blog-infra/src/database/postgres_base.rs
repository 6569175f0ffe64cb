use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, SqlErr,
};

use blog_core::error::RepoError;
use blog_core::ports::BaseRepository;

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: Arc<DbConn>,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    /// Accepts an owned connection or a handle shared with other repositories.
    pub fn new(db: impl Into<Arc<DbConn>>) -> Self {
        Self {
            db: db.into(),
            _entity: PhantomData,
        }
    }
}

/// Client-facing text for a violated constraint. The driver message names
/// tables and constraints, so it is logged and never returned.
pub(crate) fn constraint_violation(err: SqlErr) -> Option<RepoError> {
    let detail = match &err {
        SqlErr::UniqueConstraintViolation(_) => "a post with this title already exists",
        SqlErr::ForeignKeyConstraintViolation(_) => "the referenced post does not exist",
        _ => return None,
    };

    tracing::warn!(error = ?err, "Constraint violated");
    Some(RepoError::Constraint(detail.to_string()))
}

/// Classify a SeaORM error into the repository error space.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    if let Some(constraint) = err.sql_err().and_then(constraint_violation) {
        return constraint;
    }

    match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => RepoError::NotFound,
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
    T: From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id).one(&*self.db).await.map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn update(&self, entity: T) -> Result<T, RepoError> {
        // Primary key is Set, so SeaORM issues an UPDATE ... RETURNING.
        let active_model: E::ActiveModel = entity.into();
        let model = active_model.update(&*self.db).await.map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
