use calin_core::{
    models::availability::{BulkAvailabilityUpdate, TimeWindow},
    scheduling::SchedulingStore,
};
use calin_db::{
    PgSchedulingStore,
    repositories::{availability, date_override, schedule},
};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::test_utils::{create_test_db, date, t};

#[tokio::test]
async fn test_bulk_update_skips_unknown_windows() {
    let Some(pool) = create_test_db().await else {
        return;
    };

    let created = schedule::create_schedule(&pool, "Working hours", "UTC", true)
        .await
        .unwrap();
    let windows = availability::list_windows_by_schedule_id(&pool, created.id)
        .await
        .unwrap();
    let monday = windows.iter().find(|w| w.day_of_week == 1).unwrap();

    let updated = availability::update_windows(
        &pool,
        &[
            BulkAvailabilityUpdate {
                id: monday.id,
                start_time: t(10, 0),
                end_time: t(14, 0),
                is_enabled: true,
            },
            BulkAvailabilityUpdate {
                id: Uuid::new_v4(),
                start_time: t(10, 0),
                end_time: t(14, 0),
                is_enabled: true,
            },
        ],
    )
    .await
    .unwrap();

    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].id, monday.id);
    assert_eq!(updated[0].start_time, t(10, 0));
    assert_eq!(updated[0].end_time, t(14, 0));
}

#[tokio::test]
async fn test_store_applies_date_override() {
    let Some(pool) = create_test_db().await else {
        return;
    };

    let created = schedule::create_schedule(&pool, "Working hours", "UTC", true)
        .await
        .unwrap();
    // 2030-01-07 is a Monday, 2030-01-08 a Tuesday
    date_override::create_override(&pool, created.id, date(2030, 1, 7), t(13, 0), t(15, 0), true)
        .await
        .unwrap();

    let store = PgSchedulingStore::new(pool.clone());

    assert_eq!(
        store.enabled_windows_for_date(date(2030, 1, 7)).await.unwrap(),
        vec![TimeWindow::new(t(13, 0), t(15, 0))]
    );
    assert_eq!(
        store.enabled_windows_for_date(date(2030, 1, 8)).await.unwrap(),
        vec![TimeWindow::new(t(9, 0), t(17, 0))]
    );
}

#[tokio::test]
async fn test_store_without_schedule_has_no_windows() {
    let Some(pool) = create_test_db().await else {
        return;
    };

    let store = PgSchedulingStore::new(pool);

    assert!(store
        .enabled_windows_for_date(date(2030, 1, 8))
        .await
        .unwrap()
        .is_empty());
}
