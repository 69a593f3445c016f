use std::time::Duration;

use calin_db::repositories::{availability, schedule};
use pretty_assertions::assert_eq;

use crate::test_utils::{create_test_db, t};

#[tokio::test]
async fn test_first_schedule_becomes_default() {
    let Some(pool) = create_test_db().await else {
        return;
    };

    let first = schedule::create_schedule(&pool, "Working hours", "UTC", false)
        .await
        .unwrap();
    let second = schedule::create_schedule(&pool, "Evenings", "UTC", false)
        .await
        .unwrap();

    assert!(first.is_default);
    assert!(!second.is_default);

    let default = schedule::get_default_schedule(&pool).await.unwrap().unwrap();
    assert_eq!(default.id, first.id);
}

#[tokio::test]
async fn test_new_default_clears_previous_flag() {
    let Some(pool) = create_test_db().await else {
        return;
    };

    let first = schedule::create_schedule(&pool, "Working hours", "UTC", false)
        .await
        .unwrap();
    let second = schedule::create_schedule(&pool, "Evenings", "UTC", true)
        .await
        .unwrap();

    let first = schedule::get_schedule_by_id(&pool, first.id).await.unwrap().unwrap();
    assert!(!first.is_default);
    assert!(second.is_default);

    let default = schedule::get_default_schedule(&pool).await.unwrap().unwrap();
    assert_eq!(default.id, second.id);
}

#[tokio::test]
async fn test_default_falls_back_to_oldest_schedule() {
    let Some(pool) = create_test_db().await else {
        return;
    };

    let oldest = schedule::create_schedule(&pool, "Working hours", "UTC", true)
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    schedule::create_schedule(&pool, "Evenings", "UTC", false)
        .await
        .unwrap();

    // Leave no schedule flagged as default
    schedule::update_schedule(&pool, oldest.id, None, None, Some(false))
        .await
        .unwrap()
        .unwrap();

    let default = schedule::get_default_schedule(&pool).await.unwrap().unwrap();
    assert_eq!(default.id, oldest.id);
    assert!(!default.is_default);
}

#[tokio::test]
async fn test_new_schedule_gets_working_week() {
    let Some(pool) = create_test_db().await else {
        return;
    };

    let created = schedule::create_schedule(&pool, "Working hours", "Asia/Kolkata", true)
        .await
        .unwrap();
    let windows = availability::list_windows_by_schedule_id(&pool, created.id)
        .await
        .unwrap();

    assert_eq!(windows.len(), 7);
    let enabled: Vec<i32> = windows
        .iter()
        .filter(|w| w.is_enabled)
        .map(|w| w.day_of_week)
        .collect();
    assert_eq!(enabled, vec![1, 2, 3, 4, 5]);
    assert!(windows
        .iter()
        .all(|w| w.start_time == t(9, 0) && w.end_time == t(17, 0)));
}

#[tokio::test]
async fn test_delete_schedule_removes_windows() {
    let Some(pool) = create_test_db().await else {
        return;
    };

    let created = schedule::create_schedule(&pool, "Working hours", "UTC", true)
        .await
        .unwrap();

    assert!(schedule::delete_schedule(&pool, created.id).await.unwrap());
    assert!(!schedule::delete_schedule(&pool, created.id).await.unwrap());

    let windows = availability::list_windows_by_schedule_id(&pool, created.id)
        .await
        .unwrap();
    assert!(windows.is_empty());
}
