//! Reads over the punch log that return rows rather than counters, plus the
//! single insert used by the seeding path.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sqlx::PgPool;

use crate::models::attendance::{AttendanceRecord, DailyPair, EventKind};
use crate::models::chat::ContextRecord;
use crate::models::dashboard::AttendanceTableRow;

fn at_midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Earliest entry / latest exit per day for one employee over `[start, end)`,
/// ascending by date.
pub async fn daily_pairs(
    pool: &PgPool,
    employee_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<DailyPair>, sqlx::Error> {
    sqlx::query_as(
        "SELECT fecha_hora::date AS date, \
                MIN(CASE WHEN tipo_evento = 'entrada' THEN fecha_hora END) AS first_entry, \
                MAX(CASE WHEN tipo_evento = 'salida' THEN fecha_hora END) AS last_exit \
         FROM registros_asistencia \
         WHERE id_empleado = $1 AND fecha_hora >= $2 AND fecha_hora < $3 \
         GROUP BY fecha_hora::date ORDER BY fecha_hora::date",
    )
    .bind(employee_id)
    .bind(at_midnight(start))
    .bind(at_midnight(end))
    .fetch_all(pool)
    .await
}

/// The panel table: every employee-day pair in the inclusive date range,
/// newest date first, names ascending within a date.
pub async fn attendance_table(
    pool: &PgPool,
    desde: NaiveDate,
    hasta: NaiveDate,
) -> Result<Vec<AttendanceTableRow>, sqlx::Error> {
    sqlx::query_as(
        "SELECT e.nombre AS employee_name, e.documento AS document_id, \
                ra.id_empleado AS employee_id, ra.fecha_hora::date AS date, \
                MIN(CASE WHEN ra.tipo_evento = 'entrada' THEN ra.fecha_hora END) AS first_entry, \
                MAX(CASE WHEN ra.tipo_evento = 'salida' THEN ra.fecha_hora END) AS last_exit \
         FROM registros_asistencia ra \
         JOIN empleados e ON e.id = ra.id_empleado \
         WHERE ra.fecha_hora::date BETWEEN $1 AND $2 \
         GROUP BY ra.id_empleado, e.nombre, e.documento, ra.fecha_hora::date \
         ORDER BY date DESC, e.nombre ASC",
    )
    .bind(desde)
    .bind(hasta)
    .fetch_all(pool)
    .await
}

/// Most recent punches joined with their employees, newest first. Feeds the
/// assistant context blob.
pub async fn recent_records(pool: &PgPool, limit: i64) -> Result<Vec<ContextRecord>, sqlx::Error> {
    sqlx::query_as(
        "SELECT e.nombre, e.documento, e.cargo, \
                ra.tipo_evento, ra.fecha_hora, ra.validado_biometricamente \
         FROM registros_asistencia ra \
         JOIN empleados e ON e.id = ra.id_empleado \
         ORDER BY ra.fecha_hora DESC \
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Appends one punch and returns the stored row. Only the seeding binary and
/// tests call this; the real ingestion path lives with the biometric devices.
pub async fn insert_record(
    pool: &PgPool,
    employee_id: i64,
    device_id: &str,
    kind: EventKind,
    recorded_at: NaiveDateTime,
) -> Result<AttendanceRecord, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO registros_asistencia \
           (id_empleado, id_dispositivo, tipo_evento, fecha_hora, validado_biometricamente, observaciones) \
         VALUES ($1, $2, $3, $4, TRUE, NULL) \
         RETURNING id_registro AS id, id_empleado AS employee_id, id_dispositivo AS device_id, \
                   tipo_evento AS kind, fecha_hora AS recorded_at, \
                   validado_biometricamente AS biometric_validated, observaciones AS note",
    )
    .bind(employee_id)
    .bind(device_id)
    .bind(kind)
    .bind(recorded_at)
    .fetch_one(pool)
    .await
}
