//! Named aggregation queries over the punch log. Each takes explicit date
//! parameters; month windows are half-open `[start, next_month)`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sqlx::PgPool;

use crate::models::dashboard::DaySeriesPoint;
use crate::utils::time::late_arrival_cutoff;

/// Which entry events a per-day series counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesFilter {
    AllEntries,
    LateEntries,
}

fn at_midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Entry punches whose local date equals `date`.
pub async fn count_entries_on_date(pool: &PgPool, date: NaiveDate) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM registros_asistencia \
         WHERE tipo_evento = 'entrada' AND fecha_hora::date = $1",
    )
    .bind(date)
    .fetch_one(pool)
    .await
}

/// Entry punches in `[start, end)` strictly after the late cutoff.
/// An entry at the cutoff second exactly is on time.
pub async fn count_late_entries_in_range(
    pool: &PgPool,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM registros_asistencia \
         WHERE tipo_evento = 'entrada' AND fecha_hora >= $1 AND fecha_hora < $2 \
           AND fecha_hora::time > $3",
    )
    .bind(at_midnight(start))
    .bind(at_midnight(end))
    .bind(late_arrival_cutoff())
    .fetch_one(pool)
    .await
}

/// Employees whose most recent entry on `date` has no later exit that same
/// date. An employee with several unmatched entries still counts once.
pub async fn count_on_site(pool: &PgPool, date: NaiveDate) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM ( \
           SELECT id_empleado, MAX(fecha_hora) AS last_entry \
           FROM registros_asistencia \
           WHERE tipo_evento = 'entrada' AND fecha_hora::date = $1 \
           GROUP BY id_empleado \
         ) le \
         WHERE NOT EXISTS ( \
           SELECT 1 FROM registros_asistencia r2 \
           WHERE r2.id_empleado = le.id_empleado AND r2.tipo_evento = 'salida' \
             AND r2.fecha_hora::date = $1 AND r2.fecha_hora > le.last_entry \
         )",
    )
    .bind(date)
    .fetch_one(pool)
    .await
}

/// Per-day entry counts over `[start, end)`, ascending by date. Days with no
/// matching events are omitted, so callers must not assume contiguous
/// coverage.
pub async fn entries_per_day(
    pool: &PgPool,
    start: NaiveDate,
    end: NaiveDate,
    filter: SeriesFilter,
) -> Result<Vec<DaySeriesPoint>, sqlx::Error> {
    match filter {
        SeriesFilter::AllEntries => {
            sqlx::query_as(
                "SELECT fecha_hora::date AS date, COUNT(*) AS count \
                 FROM registros_asistencia \
                 WHERE tipo_evento = 'entrada' AND fecha_hora >= $1 AND fecha_hora < $2 \
                 GROUP BY fecha_hora::date ORDER BY fecha_hora::date",
            )
            .bind(at_midnight(start))
            .bind(at_midnight(end))
            .fetch_all(pool)
            .await
        }
        SeriesFilter::LateEntries => {
            sqlx::query_as(
                "SELECT fecha_hora::date AS date, COUNT(*) AS count \
                 FROM registros_asistencia \
                 WHERE tipo_evento = 'entrada' AND fecha_hora >= $1 AND fecha_hora < $2 \
                   AND fecha_hora::time > $3 \
                 GROUP BY fecha_hora::date ORDER BY fecha_hora::date",
            )
            .bind(at_midnight(start))
            .bind(at_midnight(end))
            .bind(late_arrival_cutoff())
            .fetch_all(pool)
            .await
        }
    }
}

/// Distinct days in `[start, end)` on which the employee punched at all.
pub async fn count_days_worked(
    pool: &PgPool,
    employee_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT COUNT(DISTINCT fecha_hora::date) FROM registros_asistencia \
         WHERE id_empleado = $1 AND fecha_hora >= $2 AND fecha_hora < $3",
    )
    .bind(employee_id)
    .bind(at_midnight(start))
    .bind(at_midnight(end))
    .fetch_one(pool)
    .await
}

/// Late entries in `[start, end)` for one employee, same cutoff semantics as
/// [`count_late_entries_in_range`].
pub async fn count_late_entries_for_employee(
    pool: &PgPool,
    employee_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM registros_asistencia \
         WHERE id_empleado = $1 AND tipo_evento = 'entrada' \
           AND fecha_hora >= $2 AND fecha_hora < $3 AND fecha_hora::time > $4",
    )
    .bind(employee_id)
    .bind(at_midnight(start))
    .bind(at_midnight(end))
    .bind(late_arrival_cutoff())
    .fetch_one(pool)
    .await
}
