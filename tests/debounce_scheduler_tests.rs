use std::time::{Duration, Instant};

use fit_chart::api::{DEFAULT_DEBOUNCE_WINDOW, RecomputeScheduler};

#[test]
fn default_window_is_150ms() {
    assert_eq!(DEFAULT_DEBOUNCE_WINDOW, Duration::from_millis(150));
    assert_eq!(RecomputeScheduler::default().window(), DEFAULT_DEBOUNCE_WINDOW);
}

#[test]
fn burst_of_requests_coalesces_into_one_due_pass() {
    let start = Instant::now();
    let mut scheduler = RecomputeScheduler::new(Duration::from_millis(150));

    scheduler.request(start);
    scheduler.request(start + Duration::from_millis(50));
    scheduler.request(start + Duration::from_millis(100));
    assert!(scheduler.is_pending());
    assert_eq!(scheduler.coalesced_count(), 2);
    assert_eq!(
        scheduler.deadline(),
        Some(start + Duration::from_millis(250))
    );

    assert!(!scheduler.take_due(start + Duration::from_millis(200)));
    assert!(scheduler.is_pending());
    assert!(scheduler.take_due(start + Duration::from_millis(250)));
    assert!(!scheduler.is_pending());
    assert!(!scheduler.take_due(start + Duration::from_millis(400)));
}

#[test]
fn take_pending_ignores_deadline_once() {
    let start = Instant::now();
    let mut scheduler = RecomputeScheduler::new(Duration::from_millis(150));
    assert!(!scheduler.take_pending());

    scheduler.request(start);
    assert!(scheduler.take_pending());
    assert!(!scheduler.take_pending());
}

#[test]
fn cancel_drops_pending_request() {
    let start = Instant::now();
    let mut scheduler = RecomputeScheduler::new(Duration::from_millis(150));
    scheduler.request(start);
    scheduler.request(start);
    scheduler.cancel();

    assert!(!scheduler.is_pending());
    assert_eq!(scheduler.coalesced_count(), 0);
    assert!(!scheduler.take_due(start + Duration::from_secs(1)));
}

#[test]
fn zero_window_is_due_immediately() {
    let start = Instant::now();
    let mut scheduler = RecomputeScheduler::new(Duration::ZERO);
    scheduler.request(start);
    assert!(scheduler.take_due(start));
}
