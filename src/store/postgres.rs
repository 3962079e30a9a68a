//! PostgreSQL store and startup DDL. The table lives in the schema named by `STUDENT_SCHEMA` (default `public`).

use super::StudentStore;
use crate::error::AppError;
use crate::model::{Student, StudentPayload};
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

const STUDENTS_TABLE: &str = "students";

#[derive(Clone)]
pub struct PgStudentStore {
    pool: PgPool,
    /// Schema-qualified, quoted table name (e.g. `"public"."students"`).
    table: String,
}

impl PgStudentStore {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        PgStudentStore {
            pool,
            table: qualified_table(schema),
        }
    }
}

fn qualified_table(schema: &str) -> String {
    format!("{}.{}", quote_ident(schema), quote_ident(STUDENTS_TABLE))
}

/// Create the schema and `students` table if they do not exist yet.
pub async fn ensure_students_table(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(schema)))
        .execute(pool)
        .await?;
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
            name TEXT,
            branch TEXT,
            mail TEXT
        )
        "#,
        qualified_table(schema)
    );
    sqlx::query(&ddl).execute(pool).await?;
    tracing::info!(schema, "students table ready");
    Ok(())
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn insert(&self, payload: StudentPayload) -> Result<Student, AppError> {
        let sql = format!(
            "INSERT INTO {} (name, branch, mail) VALUES ($1, $2, $3) RETURNING id, name, branch, mail",
            self.table
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(payload.name)
            .bind(payload.branch)
            .bind(payload.mail)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn save(&self, student: &Student) -> Result<Student, AppError> {
        let sql = format!(
            "UPDATE {} SET name = $1, branch = $2, mail = $3 WHERE id = $4 RETURNING id, name, branch, mail",
            self.table
        );
        tracing::debug!(sql = %sql, id = student.id, "query");
        sqlx::query_as::<_, Student>(&sql)
            .bind(&student.name)
            .bind(&student.branch)
            .bind(&student.mail)
            .bind(student.id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound(student.id))
    }

    async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        let sql = format!("SELECT id, name, branch, mail FROM {} ORDER BY id", self.table);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Student>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError> {
        let sql = format!("SELECT id, name, branch, mail FROM {} WHERE id = $1", self.table);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", self.table);
        tracing::debug!(sql = %sql, id, "query");
        let exists: (bool,) = sqlx::query_as(&sql).bind(id).fetch_one(&self.pool).await?;
        Ok(exists.0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
/// A URL without a database name is left to the server default.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let Some((admin, db_name)) = admin_target(database_url)? else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

/// Options for the `postgres` maintenance database plus the name of the database to create.
/// `None` when the URL names no database or names `postgres` itself.
fn admin_target(database_url: &str) -> Result<Option<(PgConnectOptions, String)>, AppError> {
    let opts = PgConnectOptions::from_str(database_url)?;
    let db_name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(None),
    };
    Ok(Some((opts.database("postgres"), db_name)))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
