use anyhow::Result;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::errors::ModelError;
use crate::vehicle::{self, Model};

fn row(id: i32, year: i32, make: &str, model: &str) -> Model {
    Model { id, year, make: make.into(), model: model.into() }
}

#[tokio::test]
async fn test_insert_and_lookups_are_ordered_by_id() -> Result<()> {
    let db = super::memory_db().await?;

    vehicle::insert(&db, row(3, 2012, "Tesla", "S")).await?;
    vehicle::insert(&db, row(1, 2012, "Toyota", "Camry")).await?;
    vehicle::insert(&db, row(2, 2015, "Tesla", "X")).await?;

    let ids: Vec<i32> = vehicle::list_all(&db).await?.into_iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let by_year: Vec<i32> = vehicle::find_by_year(&db, 2012).await?.into_iter().map(|v| v.id).collect();
    assert_eq!(by_year, vec![1, 3]);

    let by_make: Vec<i32> = vehicle::find_by_make(&db, "Tesla").await?.into_iter().map(|v| v.id).collect();
    assert_eq!(by_make, vec![2, 3]);

    let by_model = vehicle::find_by_model(&db, "X").await?;
    assert_eq!(by_model, vec![row(2, 2015, "Tesla", "X")]);

    assert!(vehicle::find_by_model(&db, "Y").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_duplicate_id_is_a_conflict() -> Result<()> {
    let db = super::memory_db().await?;
    vehicle::insert(&db, row(1, 2012, "Tesla", "S")).await?;
    let err = vehicle::insert(&db, row(1, 2020, "Ford", "F")).await.unwrap_err();
    assert!(matches!(err, ModelError::Conflict(_)), "got {err:?}");
    assert_eq!(vehicle::find_by_id(&db, 1).await?.unwrap().make, "Tesla");
    Ok(())
}

#[tokio::test]
async fn test_column_updates_report_affected_rows() -> Result<()> {
    let db = super::memory_db().await?;
    vehicle::insert(&db, row(7, 1999, "Honda", "Civic")).await?;

    assert_eq!(vehicle::set_year(&db, 7, 2001).await?, 1);
    assert_eq!(vehicle::set_make(&db, 7, "Acura").await?, 1);
    assert_eq!(vehicle::set_model(&db, 7, "Integra").await?, 1);
    assert_eq!(vehicle::find_by_id(&db, 7).await?, Some(row(7, 2001, "Acura", "Integra")));

    assert_eq!(vehicle::set_year(&db, 8, 2001).await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_exists_and_delete() -> Result<()> {
    let db = super::memory_db().await?;
    vehicle::insert(&db, row(5, 2005, "Mazda", "3")).await?;

    assert!(vehicle::id_exists(&db, 5).await?);
    assert!(!vehicle::id_exists(&db, 6).await?);

    assert_eq!(vehicle::delete(&db, 5).await?, 1);
    assert_eq!(vehicle::delete(&db, 5).await?, 0);
    assert!(!vehicle::id_exists(&db, 5).await?);
    assert_eq!(vehicle::find_by_id(&db, 5).await?, None);
    Ok(())
}

#[tokio::test]
async fn test_text_columns_have_no_length_cap() -> Result<()> {
    let db = super::memory_db().await?;

    let stmt = Statement::from_string(
        DatabaseBackend::Sqlite,
        "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = 'vehicle'".to_string(),
    );
    let ddl: String = db.query_one(stmt).await?.expect("vehicle table").try_get("", "sql")?;
    let ddl = ddl.to_ascii_lowercase();
    assert!(!ddl.contains("varchar("), "{ddl}");

    let long_model = "M".repeat(300);
    vehicle::insert(&db, row(9, 2020, "Volkswagen", &long_model)).await?;
    vehicle::set_make(&db, 9, &"V".repeat(200)).await?;
    let stored = vehicle::find_by_id(&db, 9).await?.expect("row 9");
    assert_eq!(stored.model.len(), 300);
    assert_eq!(stored.make.len(), 200);
    Ok(())
}
