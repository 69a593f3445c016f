use calin_core::models::booking::BookingStatus;
use calin_db::{is_unique_violation, repositories::booking};
use pretty_assertions::assert_eq;

use crate::test_utils::{book, create_meeting, create_test_db, date, t};

#[tokio::test]
async fn test_cancel_twice_is_a_no_op() {
    let Some(pool) = create_test_db().await else {
        return;
    };

    let meeting = create_meeting(&pool, "30min", 30).await;
    let created = book(&pool, meeting.id, date(2030, 1, 8), t(10, 0), t(10, 30))
        .await
        .unwrap();

    let first = booking::cancel_booking(&pool, created.id).await.unwrap().unwrap();
    let second = booking::cancel_booking(&pool, created.id).await.unwrap().unwrap();

    assert_eq!(first.status, BookingStatus::Cancelled.as_str());
    assert_eq!(second.status, BookingStatus::Cancelled.as_str());
    assert_eq!(second.date, created.date);
    assert_eq!(second.start_time, created.start_time);
    assert!(booking::get_confirmed_bookings_by_date(&pool, date(2030, 1, 8))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_confirmed_start_time_is_unique() {
    let Some(pool) = create_test_db().await else {
        return;
    };

    let meeting = create_meeting(&pool, "30min", 30).await;
    let first = book(&pool, meeting.id, date(2030, 1, 8), t(10, 0), t(10, 30))
        .await
        .unwrap();

    let err = book(&pool, meeting.id, date(2030, 1, 8), t(10, 0), t(10, 30))
        .await
        .unwrap_err();
    assert!(is_unique_violation(&err));

    // A cancelled booking frees its start time
    booking::cancel_booking(&pool, first.id).await.unwrap();
    book(&pool, meeting.id, date(2030, 1, 8), t(10, 0), t(10, 30))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_bookings_filters() {
    let Some(pool) = create_test_db().await else {
        return;
    };

    let meeting = create_meeting(&pool, "30min", 30).await;
    let today = date(2030, 1, 10);
    book(&pool, meeting.id, date(2030, 1, 11), t(9, 0), t(9, 30))
        .await
        .unwrap();
    book(&pool, meeting.id, today, t(14, 0), t(14, 30)).await.unwrap();
    book(&pool, meeting.id, date(2030, 1, 9), t(11, 0), t(11, 30))
        .await
        .unwrap();
    let cancelled = book(&pool, meeting.id, today, t(9, 0), t(9, 30)).await.unwrap();
    booking::cancel_booking(&pool, cancelled.id).await.unwrap();

    let dates = |rows: &[calin_db::models::DbBookingDetail]| {
        rows.iter()
            .map(|row| (row.booking.date, row.booking.start_time))
            .collect::<Vec<_>>()
    };

    let all = booking::list_bookings(&pool, None, None, today).await.unwrap();
    assert_eq!(
        dates(&all),
        vec![
            (date(2030, 1, 9), t(11, 0)),
            (today, t(9, 0)),
            (today, t(14, 0)),
            (date(2030, 1, 11), t(9, 0)),
        ]
    );
    assert_eq!(all[0].event_slug.as_deref(), Some("30min"));
    assert_eq!(all[0].event_duration, Some(30));

    let confirmed = booking::list_bookings(&pool, Some(BookingStatus::Confirmed), None, today)
        .await
        .unwrap();
    assert_eq!(confirmed.len(), 3);
    assert!(confirmed.iter().all(|row| row.booking.status == "confirmed"));

    let upcoming = booking::list_bookings(&pool, None, Some(true), today).await.unwrap();
    assert_eq!(
        dates(&upcoming),
        vec![(today, t(9, 0)), (today, t(14, 0)), (date(2030, 1, 11), t(9, 0))]
    );

    let past = booking::list_bookings(&pool, None, Some(false), today).await.unwrap();
    assert_eq!(
        dates(&past),
        vec![(date(2030, 1, 9), t(11, 0)), (today, t(9, 0)), (today, t(14, 0))]
    );

    let upcoming_cancelled =
        booking::list_bookings(&pool, Some(BookingStatus::Cancelled), Some(true), today)
            .await
            .unwrap();
    assert_eq!(dates(&upcoming_cancelled), vec![(today, t(9, 0))]);
}

#[tokio::test]
async fn test_reschedule_moves_booking() {
    let Some(pool) = create_test_db().await else {
        return;
    };

    let meeting = create_meeting(&pool, "30min", 30).await;
    let created = book(&pool, meeting.id, date(2030, 1, 8), t(10, 0), t(10, 30))
        .await
        .unwrap();

    let moved =
        booking::reschedule_booking(&pool, created.id, date(2030, 1, 9), t(15, 0), t(15, 30))
            .await
            .unwrap()
            .unwrap();

    assert_eq!(moved.date, date(2030, 1, 9));
    assert_eq!(moved.start_time, t(15, 0));
    assert_eq!(moved.status, "confirmed");
}
