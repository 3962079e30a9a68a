//! Runs against a live PostgreSQL when `DATABASE_URL` is set; otherwise each test returns early.
//! Every test works in its own schema, dropped on exit.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use student_registry::{
    ensure_students_table, AppError, PgStudentStore, Student, StudentPayload, StudentService, StudentStore,
};
use std::sync::Arc;

async fn connect(tag: &str) -> Option<(PgPool, String)> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let pool = PgPoolOptions::new().max_connections(2).connect(&url).await.unwrap();
    let schema = format!("student_test_{}_{}", tag, std::process::id());
    sqlx::query(&format!("DROP SCHEMA IF EXISTS \"{}\" CASCADE", schema))
        .execute(&pool)
        .await
        .unwrap();
    ensure_students_table(&pool, &schema).await.unwrap();
    Some((pool, schema))
}

async fn drop_schema(pool: &PgPool, schema: &str) {
    sqlx::query(&format!("DROP SCHEMA IF EXISTS \"{}\" CASCADE", schema))
        .execute(pool)
        .await
        .unwrap();
}

fn payload(name: &str, branch: &str) -> StudentPayload {
    StudentPayload {
        name: Some(name.into()),
        branch: Some(branch.into()),
        mail: Some(format!("{name}@x.com")),
    }
}

#[tokio::test]
async fn insert_find_and_list_in_id_order() {
    let Some((pool, schema)) = connect("list").await else {
        return;
    };
    let store = PgStudentStore::new(pool.clone(), &schema);

    let a = store.insert(payload("alice", "CS")).await.unwrap();
    let b = store.insert(payload("bob", "EE")).await.unwrap();
    assert!(b.id > a.id);
    assert_eq!(a.name.as_deref(), Some("alice"));

    assert_eq!(store.find_by_id(a.id).await.unwrap(), Some(a.clone()));
    assert_eq!(store.find_all().await.unwrap(), vec![a, b]);
    assert!(store.ping().await.is_ok());

    drop_schema(&pool, &schema).await;
}

#[tokio::test]
async fn save_overwrites_row_and_missing_row_is_not_found() {
    let Some((pool, schema)) = connect("save").await else {
        return;
    };
    let store = PgStudentStore::new(pool.clone(), &schema);

    let mut s = store.insert(payload("carol", "ME")).await.unwrap();
    s.branch = None;
    s.mail = Some("carol@y.org".into());
    let saved = store.save(&s).await.unwrap();
    assert_eq!(saved, s);
    assert_eq!(store.find_by_id(s.id).await.unwrap(), Some(s.clone()));

    let ghost = Student {
        id: s.id + 1000,
        name: None,
        branch: None,
        mail: None,
    };
    assert!(matches!(store.save(&ghost).await, Err(AppError::NotFound(id)) if id == ghost.id));

    drop_schema(&pool, &schema).await;
}

#[tokio::test]
async fn exists_and_delete() {
    let Some((pool, schema)) = connect("delete").await else {
        return;
    };
    let store = PgStudentStore::new(pool.clone(), &schema);

    let s = store.insert(payload("dave", "CS")).await.unwrap();
    assert!(store.exists_by_id(s.id).await.unwrap());
    store.delete_by_id(s.id).await.unwrap();
    assert!(!store.exists_by_id(s.id).await.unwrap());
    assert_eq!(store.find_by_id(s.id).await.unwrap(), None);
    store.delete_by_id(s.id).await.unwrap();

    let next = store.insert(payload("erin", "CS")).await.unwrap();
    assert!(next.id > s.id);

    drop_schema(&pool, &schema).await;
}

#[tokio::test]
async fn service_operations_over_postgres() {
    let Some((pool, schema)) = connect("service").await else {
        return;
    };
    let svc = StudentService::new(Arc::new(PgStudentStore::new(pool.clone(), &schema)));

    let created = svc.create(payload("Alice", "CS")).await.unwrap();
    assert_eq!(svc.list().await.unwrap(), vec![created.clone()]);
    assert_eq!(svc.get(created.id).await.unwrap(), created);

    let updated = svc.update(created.id, payload("Alicia", "Math")).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.branch.as_deref(), Some("Math"));

    assert_eq!(svc.delete(created.id).await.unwrap(), "Student has been deleted!");
    assert!(matches!(svc.delete(created.id).await, Err(AppError::NotFound(_))));
    assert!(matches!(svc.get(999_999).await, Err(AppError::NotFound(999_999))));

    drop_schema(&pool, &schema).await;
}
