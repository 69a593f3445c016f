use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;

use calin_core::{
    errors::CalResult,
    models::{availability::TimeWindow, booking::Booking, event_type::EventType},
    scheduling::SchedulingStore,
};

// Mock scheduling store for handler tests
mock! {
    pub Store {}

    #[async_trait]
    impl SchedulingStore for Store {
        async fn event_type_by_slug(&self, slug: &str) -> CalResult<Option<EventType>>;

        async fn enabled_windows_for_date(&self, date: NaiveDate) -> CalResult<Vec<TimeWindow>>;

        async fn confirmed_bookings_for_date(&self, date: NaiveDate) -> CalResult<Vec<Booking>>;
    }
}
