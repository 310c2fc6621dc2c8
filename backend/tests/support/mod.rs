#![allow(dead_code)]

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::OnceLock;
use tokio::sync::{Mutex, MutexGuard};

use asistencia_backend::config::Config;
use asistencia_backend::models::attendance::{AttendanceRecord, EventKind};
use asistencia_backend::repositories::{attendance as attendance_repo, employee as employee_repo};
use chrono::{NaiveDate, NaiveDateTime};

/// Serializes DB-backed tests within one binary; they all truncate the same
/// tables.
pub async fn db_guard() -> MutexGuard<'static, ()> {
    static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
    GUARD.get_or_init(|| Mutex::new(())).lock().await
}

/// Connects to `TEST_DATABASE_URL`, runs migrations, and wipes the data
/// tables. Returns `None` when the variable is unset so the test can skip
/// without failing the run.
pub async fn test_pool() -> Option<PgPool> {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set; skipping DB-backed test");
        return None;
    };

    let pool = PgPoolOptions::new()
        .max_connections(4)
        .connect(&url)
        .await
        .expect("connect to TEST_DATABASE_URL");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");
    sqlx::query(
        "TRUNCATE registros_asistencia, sesiones, empleados, usuarios_sistema \
         RESTART IDENTITY CASCADE",
    )
    .execute(&pool)
    .await
    .expect("truncate tables");

    Some(pool)
}

pub fn test_config() -> Config {
    Config {
        database_url: "unused-in-tests".to_string(),
        assistant_url: "http://127.0.0.1:1/chat".to_string(),
        assistant_timeout_secs: 2,
        session_ttl_hours: 8,
        time_zone: chrono_tz::UTC,
        bind_addr: "127.0.0.1:0".to_string(),
    }
}

pub async fn seed_employee(pool: &PgPool, name: &str, document: &str) -> i64 {
    employee_repo::insert_employee(pool, name, document, "Analista de Datos", None)
        .await
        .expect("insert employee")
}

pub async fn punch(
    pool: &PgPool,
    employee_id: i64,
    kind: EventKind,
    at: NaiveDateTime,
) -> AttendanceRecord {
    attendance_repo::insert_record(pool, employee_id, "DISP-01", kind, at)
        .await
        .expect("insert punch")
}

pub fn at(date: NaiveDate, h: u32, m: u32, s: u32) -> NaiveDateTime {
    date.and_hms_opt(h, m, s).expect("valid time")
}
