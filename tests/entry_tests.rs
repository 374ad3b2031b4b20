mod common;

use chrono::NaiveDate;
use common::{local_dt, mem_pool};
use tracklet::core::day;
use tracklet::core::entry::EntryLogic;
use tracklet::db::RecordStore;
use tracklet::errors::AppError;

#[test]
fn cross_day_entry_buckets_on_start_date() {
    let start = local_dt(2024, 1, 10, 23, 50, 0);
    let end = local_dt(2024, 1, 11, 0, 10, 0);

    let bucket = day::normalize(start, end);
    assert_eq!(bucket.date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    assert!(bucket.crosses_day);

    let mut pool = mem_pool();
    let entry = EntryLogic::add(&mut pool, "local", "website", None, "late shift", start, end).unwrap();
    assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    assert!(entry.crosses_day());
    assert!((entry.duration - 20.0).abs() < 0.001);
}

#[test]
fn same_day_entry_does_not_cross() {
    let bucket = day::normalize(local_dt(2024, 1, 10, 9, 0, 0), local_dt(2024, 1, 10, 17, 0, 0));
    assert_eq!(bucket.date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    assert!(!bucket.crosses_day);
}

#[test]
fn inverted_range_is_rejected_before_any_write() {
    let mut pool = mem_pool();
    let err = EntryLogic::add(
        &mut pool,
        "local",
        "website",
        None,
        "",
        local_dt(2024, 1, 10, 9, 0, 0),
        local_dt(2024, 1, 10, 8, 0, 0),
    )
    .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert!(pool.list_time_entries("local").unwrap().is_empty());
}

#[test]
fn zero_length_range_is_rejected() {
    let mut pool = mem_pool();
    let t = local_dt(2024, 1, 10, 9, 0, 0);
    let err = EntryLogic::add(&mut pool, "local", "website", None, "", t, t).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn missing_project_is_rejected() {
    let mut pool = mem_pool();
    let err = EntryLogic::add(
        &mut pool,
        "local",
        "",
        None,
        "",
        local_dt(2024, 1, 10, 9, 0, 0),
        local_dt(2024, 1, 10, 10, 0, 0),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn edit_rederives_duration_and_date() {
    let mut pool = mem_pool();
    let entry = EntryLogic::add(
        &mut pool,
        "local",
        "website",
        None,
        "draft",
        local_dt(2024, 1, 10, 9, 0, 0),
        local_dt(2024, 1, 10, 10, 0, 0),
    )
    .unwrap();
    assert!((entry.duration - 60.0).abs() < 0.001);

    // Move the end later: duration follows.
    let edited = EntryLogic::edit(&mut pool, entry.id, None, Some(local_dt(2024, 1, 10, 11, 30, 0)), None).unwrap();
    assert!((edited.duration - 150.0).abs() < 0.001);
    assert_eq!(edited.date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());

    // Move the start to the previous evening: bucket follows the start.
    let edited = EntryLogic::edit(&mut pool, entry.id, Some(local_dt(2024, 1, 9, 23, 0, 0)), None, None).unwrap();
    assert_eq!(edited.date, NaiveDate::from_ymd_opt(2024, 1, 9).unwrap());
    assert!(edited.crosses_day());
}

#[test]
fn edit_rejects_a_range_made_invalid() {
    let mut pool = mem_pool();
    let entry = EntryLogic::add(
        &mut pool,
        "local",
        "website",
        None,
        "",
        local_dt(2024, 1, 10, 9, 0, 0),
        local_dt(2024, 1, 10, 10, 0, 0),
    )
    .unwrap();

    let err =
        EntryLogic::edit(&mut pool, entry.id, Some(local_dt(2024, 1, 10, 11, 0, 0)), None, None).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    // The stored entry is untouched.
    let stored = pool.get_time_entry(entry.id).unwrap().unwrap();
    assert_eq!(stored.start_time, local_dt(2024, 1, 10, 9, 0, 0));
}

#[test]
fn edit_of_a_vanished_entry_is_not_found() {
    let mut pool = mem_pool();
    let err = EntryLogic::edit(&mut pool, 4242, None, None, Some("ghost")).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
