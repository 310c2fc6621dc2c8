use axum::{
    extract::{Extension, Query, State},
    Json,
};
use chrono::Days;
use sqlx::PgPool;

use crate::{
    error::AppError,
    models::attendance::MonthlyStats,
    models::dashboard::{
        DashboardMetrics, DashboardQuery, DashboardResponse, DateRange, EmployeeDetail,
    },
    models::system_user::SystemUser,
    repositories::{attendance as attendance_repo, employee as employee_repo, metrics},
    state::AppState,
    utils::time::{month_window, today_local},
};

/// Assembles the whole panel payload: headline metrics for today and the
/// current month, both per-day series, the date-filtered table, and the
/// optional search/detail sections. Read-only.
pub async fn panel(
    State(state): State<AppState>,
    Extension(_user): Extension<SystemUser>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>, AppError> {
    let pool = &state.pool;
    let today = today_local(&state.config.time_zone);
    let tomorrow = today + Days::new(1);
    let (month_start, next_month) = month_window(today);

    let metrics = DashboardMetrics {
        entries_today: metrics::count_entries_on_date(pool, today).await?,
        late_today: metrics::count_late_entries_in_range(pool, today, tomorrow).await?,
        on_site_today: metrics::count_on_site(pool, today).await?,
        late_this_month: metrics::count_late_entries_in_range(pool, month_start, next_month)
            .await?,
    };

    let entries_by_day =
        metrics::entries_per_day(pool, month_start, next_month, metrics::SeriesFilter::AllEntries)
            .await?;
    let late_by_day =
        metrics::entries_per_day(pool, month_start, next_month, metrics::SeriesFilter::LateEntries)
            .await?;

    let desde = query.desde.unwrap_or(month_start);
    let hasta = query.hasta.unwrap_or(today);
    let table = attendance_repo::attendance_table(pool, desde, hasta).await?;

    let search_results = match query.search.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => employee_repo::search_employees(pool, term).await?,
        _ => Vec::new(),
    };

    let employee_detail = match query.user_id {
        Some(employee_id) => {
            build_employee_detail(pool, employee_id, month_start, next_month).await?
        }
        None => None,
    };

    Ok(Json(DashboardResponse {
        range: DateRange { desde, hasta },
        metrics,
        entries_by_day,
        late_by_day,
        table,
        search_results,
        employee_detail,
    }))
}

/// Monthly statistics for one employee. An unknown id yields `None` (empty
/// detail view), never an error.
async fn build_employee_detail(
    pool: &PgPool,
    employee_id: i64,
    month_start: chrono::NaiveDate,
    next_month: chrono::NaiveDate,
) -> Result<Option<EmployeeDetail>, AppError> {
    let Some(employee) = employee_repo::find_by_id(pool, employee_id).await? else {
        return Ok(None);
    };

    let days_worked =
        metrics::count_days_worked(pool, employee_id, month_start, next_month).await?;
    let late_entries =
        metrics::count_late_entries_for_employee(pool, employee_id, month_start, next_month)
            .await?;
    let pairs = attendance_repo::daily_pairs(pool, employee_id, month_start, next_month).await?;

    let mut total_minutes = 0i64;
    for pair in &pairs {
        if pair.is_inverted() {
            tracing::warn!(
                employee_id,
                date = %pair.date,
                "Exit precedes entry; day contributes zero minutes"
            );
        }
        total_minutes += pair.worked_minutes().unwrap_or(0);
    }

    let stats = MonthlyStats {
        days_worked,
        late_entries,
        total_minutes,
    };

    Ok(Some(EmployeeDetail {
        employee,
        stats: stats.into(),
        daily_records: pairs.into_iter().map(Into::into).collect(),
    }))
}
