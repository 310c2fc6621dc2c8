#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    error::ErrorResponse,
    models::{
        attendance::{DayStatus, EventKind},
        chat::{ChatMessage, ChatReply},
        dashboard::{
            AttendanceTableRow, DailyRecord, DashboardMetrics, DashboardQuery, DashboardResponse,
            DateRange, DaySeriesPoint, EmployeeDetail, MonthlyStatsPayload,
        },
        employee::Employee,
    },
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(health_doc, login_doc, logout_doc, panel_doc, chat_doc),
    components(schemas(
        ChatMessage,
        ChatReply,
        DashboardResponse,
        DashboardMetrics,
        DaySeriesPoint,
        AttendanceTableRow,
        DailyRecord,
        MonthlyStatsPayload,
        EmployeeDetail,
        DateRange,
        Employee,
        DayStatus,
        EventKind,
        ErrorResponse,
    )),
    tags(
        (name = "auth", description = "Session login and logout"),
        (name = "panel", description = "Attendance dashboard payload"),
        (name = "chat", description = "Relay to the external assistant"),
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service liveness"))
)]
fn health_doc() {}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    responses(
        (status = 303, description = "Redirects to /panel on success, back to /login on failure")
    )
)]
fn login_doc() {}

#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    responses((status = 303, description = "Clears the session and redirects to /login"))
)]
fn logout_doc() {}

#[utoipa::path(
    get,
    path = "/panel",
    tag = "panel",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Dashboard payload", body = DashboardResponse),
        (status = 303, description = "No session; redirect to /login")
    )
)]
fn panel_doc() {}

#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "chat",
    request_body = ChatMessage,
    responses(
        (status = 200, description = "Relayed assistant answer", body = ChatReply),
        (status = 400, description = "Empty message", body = ErrorResponse),
        (status = 401, description = "No session", body = ErrorResponse),
        (status = 405, description = "Wrong method", body = ErrorResponse),
        (status = 500, description = "Assistant unavailable or malformed reply", body = ErrorResponse)
    )
)]
fn chat_doc() {}
