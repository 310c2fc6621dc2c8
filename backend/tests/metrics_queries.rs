//! Aggregation query properties against a real PostgreSQL instance. These
//! tests run only when TEST_DATABASE_URL is set and skip otherwise.

use chrono::NaiveDate;

use asistencia_backend::models::attendance::EventKind;
use asistencia_backend::repositories::{attendance as attendance_repo, employee as employee_repo, metrics};

#[path = "support/mod.rs"]
mod support;

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).expect("valid date")
}

#[tokio::test]
async fn empty_table_counts_zero() {
    let _guard = support::db_guard().await;
    let Some(pool) = support::test_pool().await else { return };

    assert_eq!(metrics::count_entries_on_date(&pool, d(3)).await.unwrap(), 0);
    assert_eq!(
        metrics::count_late_entries_in_range(&pool, d(1), d(31)).await.unwrap(),
        0
    );
    assert_eq!(metrics::count_on_site(&pool, d(3)).await.unwrap(), 0);
    assert!(metrics::entries_per_day(&pool, d(1), d(31), metrics::SeriesFilter::AllEntries)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn late_cutoff_is_strictly_after_eight_ten() {
    let _guard = support::db_guard().await;
    let Some(pool) = support::test_pool().await else { return };

    let emp = support::seed_employee(&pool, "Ana García", "11111111").await;
    let stored = support::punch(&pool, emp, EventKind::Entry, support::at(d(3), 8, 10, 0)).await;
    assert_eq!(stored.kind, EventKind::Entry);
    assert_eq!(stored.employee_id, emp);
    assert!(stored.biometric_validated);
    support::punch(&pool, emp, EventKind::Entry, support::at(d(3), 8, 10, 1)).await;

    assert_eq!(metrics::count_entries_on_date(&pool, d(3)).await.unwrap(), 2);
    // 08:10:00 exactly is on time; 08:10:01 is late.
    assert_eq!(
        metrics::count_late_entries_in_range(&pool, d(3), d(4)).await.unwrap(),
        1
    );
}

#[tokio::test]
async fn on_site_counts_open_entries_once() {
    let _guard = support::db_guard().await;
    let Some(pool) = support::test_pool().await else { return };

    // Completed the day: latest entry followed by an exit.
    let done = support::seed_employee(&pool, "Luis Pérez", "22222222").await;
    support::punch(&pool, done, EventKind::Entry, support::at(d(3), 8, 0, 0)).await;
    support::punch(&pool, done, EventKind::Exit, support::at(d(3), 17, 0, 0)).await;

    // Still inside: entry with no exit at all.
    let inside = support::seed_employee(&pool, "María Torres", "33333333").await;
    support::punch(&pool, inside, EventKind::Entry, support::at(d(3), 8, 5, 0)).await;

    // Re-entered: exit exists but a later entry has no matching exit.
    let back = support::seed_employee(&pool, "Jorge Ramírez", "44444444").await;
    support::punch(&pool, back, EventKind::Entry, support::at(d(3), 8, 0, 0)).await;
    support::punch(&pool, back, EventKind::Exit, support::at(d(3), 9, 0, 0)).await;
    support::punch(&pool, back, EventKind::Entry, support::at(d(3), 10, 0, 0)).await;

    // Different day entirely.
    let other_day = support::seed_employee(&pool, "Paula López", "55555555").await;
    support::punch(&pool, other_day, EventKind::Entry, support::at(d(4), 8, 0, 0)).await;

    assert_eq!(metrics::count_on_site(&pool, d(3)).await.unwrap(), 2);
}

#[tokio::test]
async fn series_is_ascending_omits_empty_days_and_is_idempotent() {
    let _guard = support::db_guard().await;
    let Some(pool) = support::test_pool().await else { return };

    let emp = support::seed_employee(&pool, "Ana García", "11111111").await;
    support::punch(&pool, emp, EventKind::Entry, support::at(d(1), 8, 0, 0)).await;
    support::punch(&pool, emp, EventKind::Entry, support::at(d(1), 12, 0, 0)).await;
    // Nothing on the 2nd.
    support::punch(&pool, emp, EventKind::Entry, support::at(d(3), 8, 30, 0)).await;

    let series = metrics::entries_per_day(&pool, d(1), d(31), metrics::SeriesFilter::AllEntries)
        .await
        .unwrap();
    let dates: Vec<_> = series.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![d(1), d(3)]);
    assert_eq!(series[0].count, 2);
    assert_eq!(series[1].count, 1);

    let again = metrics::entries_per_day(&pool, d(1), d(31), metrics::SeriesFilter::AllEntries)
        .await
        .unwrap();
    assert_eq!(series, again);

    // Only the 08:30 entry is late.
    let late = metrics::entries_per_day(&pool, d(1), d(31), metrics::SeriesFilter::LateEntries)
        .await
        .unwrap();
    assert_eq!(late.len(), 1);
    assert_eq!(late[0].date, d(3));
    assert_eq!(late[0].count, 1);
}

#[tokio::test]
async fn search_matches_name_or_document_case_insensitively() {
    let _guard = support::db_guard().await;
    let Some(pool) = support::test_pool().await else { return };

    support::seed_employee(&pool, "María García", "11111111").await;
    support::seed_employee(&pool, "Jorge garcía", "22222222").await;
    support::seed_employee(&pool, "Pedro López", "33334444").await;

    let by_name = employee_repo::search_employees(&pool, "garcía").await.unwrap();
    let names: Vec<_> = by_name.iter().map(|e| e.full_name.as_str()).collect();
    assert_eq!(names, vec!["Jorge garcía", "María García"]);

    let by_document = employee_repo::search_employees(&pool, "3444").await.unwrap();
    assert_eq!(by_document.len(), 1);
    assert_eq!(by_document[0].full_name, "Pedro López");

    assert!(employee_repo::search_employees(&pool, "zzz").await.unwrap().is_empty());
}

#[tokio::test]
async fn monthly_stats_pair_earliest_entry_with_latest_exit() {
    let _guard = support::db_guard().await;
    let Some(pool) = support::test_pool().await else { return };

    let emp = support::seed_employee(&pool, "Ana García", "11111111").await;
    // Two complete days: 9h00m and 8h25m.
    support::punch(&pool, emp, EventKind::Entry, support::at(d(3), 8, 0, 0)).await;
    support::punch(&pool, emp, EventKind::Exit, support::at(d(3), 17, 0, 0)).await;
    support::punch(&pool, emp, EventKind::Entry, support::at(d(4), 8, 5, 0)).await;
    support::punch(&pool, emp, EventKind::Exit, support::at(d(4), 16, 30, 0)).await;
    // Entry-only day: counts as worked, contributes zero minutes, is late.
    support::punch(&pool, emp, EventKind::Entry, support::at(d(5), 8, 20, 0)).await;

    let (start, end) = (d(1), NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
    assert_eq!(
        metrics::count_days_worked(&pool, emp, start, end).await.unwrap(),
        3
    );
    assert_eq!(
        metrics::count_late_entries_for_employee(&pool, emp, start, end)
            .await
            .unwrap(),
        1
    );

    let pairs = attendance_repo::daily_pairs(&pool, emp, start, end).await.unwrap();
    assert_eq!(pairs.len(), 3);
    let total: i64 = pairs.iter().filter_map(|p| p.worked_minutes()).sum();
    assert_eq!(total, 1045);
}

#[tokio::test]
async fn inverted_pair_contributes_zero_minutes() {
    let _guard = support::db_guard().await;
    let Some(pool) = support::test_pool().await else { return };

    let emp = support::seed_employee(&pool, "Ana García", "11111111").await;
    // Exit recorded before the entry on the same day.
    support::punch(&pool, emp, EventKind::Exit, support::at(d(3), 8, 0, 0)).await;
    support::punch(&pool, emp, EventKind::Entry, support::at(d(3), 17, 0, 0)).await;

    let pairs = attendance_repo::daily_pairs(&pool, emp, d(1), d(31)).await.unwrap();
    assert_eq!(pairs.len(), 1);
    assert!(pairs[0].is_inverted());
    assert_eq!(pairs[0].worked_minutes(), Some(0));
}

#[tokio::test]
async fn attendance_table_orders_by_date_desc_then_name() {
    let _guard = support::db_guard().await;
    let Some(pool) = support::test_pool().await else { return };

    let ana = support::seed_employee(&pool, "Ana García", "11111111").await;
    let luis = support::seed_employee(&pool, "Luis Pérez", "22222222").await;
    for emp in [ana, luis] {
        support::punch(&pool, emp, EventKind::Entry, support::at(d(3), 8, 0, 0)).await;
        support::punch(&pool, emp, EventKind::Exit, support::at(d(3), 17, 0, 0)).await;
        support::punch(&pool, emp, EventKind::Entry, support::at(d(4), 8, 0, 0)).await;
    }

    let table = attendance_repo::attendance_table(&pool, d(1), d(31)).await.unwrap();
    let keys: Vec<_> = table
        .iter()
        .map(|row| (row.date, row.employee_name.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            (d(4), "Ana García"),
            (d(4), "Luis Pérez"),
            (d(3), "Ana García"),
            (d(3), "Luis Pérez"),
        ]
    );
    // Day 3 is complete, day 4 has no exit yet.
    assert!(table[0].last_exit.is_none());
    assert!(table[2].last_exit.is_some());
}
