//! `vehicle` table and the row-level queries the catalog needs.
//! Every listing is ordered by primary key so callers see a stable order.

use sea_orm::{entity::prelude::*, sea_query::Expr, DatabaseConnection, PaginatorTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub year: i32,
    #[sea_orm(column_type = "Text")]
    pub make: String,
    #[sea_orm(column_type = "Text")]
    pub model: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn find_by_year(db: &DatabaseConnection, year: i32) -> Result<Vec<Model>, ModelError> {
    find_where(db, Column::Year.eq(year)).await
}

pub async fn find_by_make(db: &DatabaseConnection, make: &str) -> Result<Vec<Model>, ModelError> {
    find_where(db, Column::Make.eq(make)).await
}

pub async fn find_by_model(db: &DatabaseConnection, model: &str) -> Result<Vec<Model>, ModelError> {
    find_where(db, Column::Model.eq(model)).await
}

async fn find_where(db: &DatabaseConnection, cond: sea_orm::sea_query::SimpleExpr) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().filter(cond).order_by_asc(Column::Id).all(db).await?)
}

pub async fn id_exists(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let n = Entity::find_by_id(id).count(db).await?;
    Ok(n > 0)
}

/// Insert a complete row. A duplicate id surfaces as `ModelError::Conflict`.
pub async fn insert(db: &DatabaseConnection, row: Model) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(row.id),
        year: Set(row.year),
        make: Set(row.make),
        model: Set(row.model),
    };
    Ok(am.insert(db).await?)
}

pub async fn set_year(db: &DatabaseConnection, id: i32, year: i32) -> Result<u64, ModelError> {
    set_column(db, id, Column::Year, Expr::value(year)).await
}

pub async fn set_make(db: &DatabaseConnection, id: i32, make: &str) -> Result<u64, ModelError> {
    set_column(db, id, Column::Make, Expr::value(make.to_string())).await
}

pub async fn set_model(db: &DatabaseConnection, id: i32, model: &str) -> Result<u64, ModelError> {
    set_column(db, id, Column::Model, Expr::value(model.to_string())).await
}

async fn set_column(db: &DatabaseConnection, id: i32, col: Column, value: sea_orm::sea_query::SimpleExpr) -> Result<u64, ModelError> {
    let res = Entity::update_many()
        .col_expr(col, value)
        .filter(Column::Id.eq(id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

/// Delete by id; returns the number of rows removed.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected)
}
