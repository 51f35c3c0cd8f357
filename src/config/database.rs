//! PostgreSQL connection pool initialization.
//!
//! The database URL is read from the `DATABASE_URL` environment variable.
//! Pending migrations under `./migrations` are applied on startup, so a
//! fresh database gets its collection tables before the first request.
//!
//! # Panics
//!
//! [`init_db_pool`] panics if `DATABASE_URL` is unset, the connection
//! cannot be established, or a migration fails. Startup is the only
//! caller, so an unusable store aborts the process instead of serving
//! requests that can never succeed.

use sqlx::PgPool;
use std::env;

pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    pool
}
