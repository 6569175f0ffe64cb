//! Comment entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use blog_core::domain::{Comment, NewComment};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub post_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Comment.
impl From<Model> for Comment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            post_id: model.post_id,
            name: model.name,
            email: model.email,
            body: model.body,
        }
    }
}

/// Conversion from Domain Comment to SeaORM ActiveModel (update of an existing row).
impl From<Comment> for ActiveModel {
    fn from(comment: Comment) -> Self {
        Self {
            id: Set(comment.id),
            name: Set(comment.name),
            email: Set(comment.email),
            body: Set(comment.body),
            post_id: Set(comment.post_id),
        }
    }
}

impl From<NewComment> for ActiveModel {
    fn from(comment: NewComment) -> Self {
        Self {
            id: NotSet,
            name: Set(comment.name),
            email: Set(comment.email),
            body: Set(comment.body),
            post_id: Set(comment.post_id),
        }
    }
}
