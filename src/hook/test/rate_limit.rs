use std::sync::Barrier;

use crate::hook::RateLimiter;

/// Tests grants against a simulated clock.
///
/// With a 5 second interval: t=0 grants, t=3 is too soon, t=6 grants again.
///
/// Expected: true, false, true
#[test]
fn grants_once_per_interval() {
    let limiter = RateLimiter::new();

    assert!(limiter.try_fire_at(0, 5));
    assert!(!limiter.try_fire_at(3, 5));
    assert!(limiter.try_fire_at(6, 5));
    assert_eq!(limiter.last_fired(), Some(6));
}

/// Tests the boundary of the interval.
///
/// Exactly `interval` seconds after a grant is still too soon.
///
/// Expected: false at t=5, true at t=6
#[test]
fn interval_boundary_is_exclusive() {
    let limiter = RateLimiter::new();

    assert!(limiter.try_fire_at(0, 5));
    assert!(!limiter.try_fire_at(5, 5));
    assert!(limiter.try_fire_at(6, 5));
}

/// Tests that denied attempts leave the stored timestamp untouched.
///
/// Expected: timestamp stays at the last grant, clock rewinds are denied
#[test]
fn denied_attempts_do_not_move_timestamp() {
    let limiter = RateLimiter::new();
    assert_eq!(limiter.last_fired(), None);

    assert!(limiter.try_fire_at(100, 10));
    assert!(!limiter.try_fire_at(105, 10));
    assert_eq!(limiter.last_fired(), Some(100));

    // A clock that jumped backwards never rewinds the limiter.
    assert!(!limiter.try_fire_at(50, 10));
    assert_eq!(limiter.last_fired(), Some(100));
}

/// Tests that separate limiters are independent.
///
/// Expected: both grant at t=0
#[test]
fn limiters_are_independent() {
    let errors = RateLimiter::new();
    let warnings = RateLimiter::new();

    assert!(errors.try_fire_at(0, 60));
    assert!(warnings.try_fire_at(0, 60));
    assert!(!errors.try_fire_at(1, 60));
}

/// Tests the system clock entry point.
///
/// Expected: first call grants, immediate second call is denied
#[test]
fn system_clock_grants_then_denies() {
    let limiter = RateLimiter::default();

    assert!(limiter.try_fire(60));
    assert!(!limiter.try_fire(60));
}

/// Tests many threads asking at the same instant.
///
/// Every thread waits on a barrier and then calls `try_fire_at` with the same timestamp.
///
/// Expected: exactly one grant per round
#[test]
fn concurrent_callers_get_exactly_one_grant() {
    const THREADS: usize = 16;

    let limiter = RateLimiter::new();

    for round in 0..20i64 {
        let now = round * 100;
        let barrier = Barrier::new(THREADS);

        let granted = std::thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    s.spawn(|| {
                        barrier.wait();
                        limiter.try_fire_at(now, 5)
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|granted| *granted)
                .count()
        });

        assert_eq!(granted, 1, "round {}", round);
        assert_eq!(limiter.last_fired(), Some(now));
    }
}

/// Tests an interval too large to ever elapse.
///
/// Expected: the first attempt is granted, every later one denied
#[test]
fn unbounded_interval_still_grants_first_attempt() {
    let limiter = RateLimiter::new();

    assert!(limiter.try_fire_at(0, u64::MAX));
    assert!(!limiter.try_fire_at(i64::MAX, u64::MAX));
    assert_eq!(limiter.last_fired(), Some(0));
}
