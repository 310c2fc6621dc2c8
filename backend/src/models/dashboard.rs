//! Query parameters and payloads for the panel view.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use super::attendance::{DailyPair, DayStatus, MonthlyStats};
use super::employee::Employee;

/// Panel query string. Parameter names match the original filter form.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct DashboardQuery {
    /// Range start, defaults to the first day of the current month.
    pub desde: Option<NaiveDate>,
    /// Range end, defaults to today.
    pub hasta: Option<NaiveDate>,
    /// Employee search term (name or document substring).
    pub search: Option<String>,
    /// Selects one employee for the detail section.
    pub user_id: Option<i64>,
}

/// Headline counters for the reference day and month.
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardMetrics {
    pub entries_today: i64,
    pub late_today: i64,
    pub on_site_today: i64,
    pub late_this_month: i64,
}

/// One point of a per-day series. Days without matching events are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct DaySeriesPoint {
    pub date: NaiveDate,
    pub count: i64,
}

/// One row of the date-filtered table: an employee's punch pair for a day.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct AttendanceTableRow {
    pub employee_name: String,
    pub document_id: String,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub first_entry: Option<NaiveDateTime>,
    pub last_exit: Option<NaiveDateTime>,
}

/// A daily pair annotated for display.
#[derive(Debug, Serialize, ToSchema)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub first_entry: Option<NaiveDateTime>,
    pub last_exit: Option<NaiveDateTime>,
    pub worked_minutes: Option<i64>,
    pub status: DayStatus,
}

impl From<DailyPair> for DailyRecord {
    fn from(pair: DailyPair) -> Self {
        let worked_minutes = pair.worked_minutes();
        let status = pair.status();
        DailyRecord {
            date: pair.date,
            first_entry: pair.first_entry,
            last_exit: pair.last_exit,
            worked_minutes,
            status,
        }
    }
}

/// Monthly counters as rendered on the employee detail card.
#[derive(Debug, Serialize, ToSchema)]
pub struct MonthlyStatsPayload {
    pub days_worked: i64,
    pub late_entries: i64,
    pub worked_hours: i64,
    pub worked_minutes: i64,
}

impl From<MonthlyStats> for MonthlyStatsPayload {
    fn from(stats: MonthlyStats) -> Self {
        let (worked_hours, worked_minutes) = stats.split_hours_minutes();
        MonthlyStatsPayload {
            days_worked: stats.days_worked,
            late_entries: stats.late_entries,
            worked_hours,
            worked_minutes,
        }
    }
}

/// Detail section for one selected employee.
#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeeDetail {
    pub employee: Employee,
    pub stats: MonthlyStatsPayload,
    pub daily_records: Vec<DailyRecord>,
}

/// Effective table range echoed back to the caller.
#[derive(Debug, Serialize, ToSchema)]
pub struct DateRange {
    pub desde: NaiveDate,
    pub hasta: NaiveDate,
}

/// Full panel payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub range: DateRange,
    pub metrics: DashboardMetrics,
    pub entries_by_day: Vec<DaySeriesPoint>,
    pub late_by_day: Vec<DaySeriesPoint>,
    pub table: Vec<AttendanceTableRow>,
    /// Populated only when a non-empty search term was given.
    pub search_results: Vec<Employee>,
    /// Populated when `user_id` matches an employee; `null` otherwise.
    pub employee_detail: Option<EmployeeDetail>,
}
