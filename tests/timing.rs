//! Scenarios that live on the clock: timers, quiet periods, expiry
//! windows, and cancellation observed from the producing side. Sleeps
//! are generous enough to survive a loaded machine.

use rill::prelude::*;

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, unbounded};

#[test]
fn interval_spaces_its_counts() {
  let begun = Instant::now();
  let counted = interval(Duration::from_millis(10)).take(5).to_array();
  assert_eq!(counted, vec![0, 1, 2, 3, 4]);
  assert!(begun.elapsed() >= Duration::from_millis(50));
}

#[test]
fn debounce_keeps_values_followed_by_quiet() {
  let bursty = create(|mut observer: BoxObserver<i32>, _sub: Subscription| {
    thread::sleep(Duration::from_millis(100));
    observer.next(1);
    thread::sleep(Duration::from_millis(300));
    observer.next(2);
    thread::sleep(Duration::from_millis(80));
    observer.next(3);
    thread::sleep(Duration::from_millis(110));
    observer.next(4);
    observer.complete();
  });
  let settled = bursty.debounce(Duration::from_millis(100)).to_array();
  assert_eq!(settled, vec![1, 3, 4]);
}

#[test]
fn sample_takes_the_latest_per_tick() {
  let sampled = interval(Duration::from_millis(90))
    .sample(Duration::from_millis(200))
    .take(3)
    .to_array();
  assert_eq!(sampled, vec![1, 3, 5]);
}

#[test]
fn timeout_errors_and_closes_the_upstream() {
  let (closed_tx, closed_rx) = bounded(1);
  let stalling = create(move |mut observer: BoxObserver<i32>, sub: Subscription| {
    observer.next(1);
    thread::sleep(Duration::from_millis(500));
    let _ = closed_tx.send(sub.is_closed());
  });

  let begun = Instant::now();
  let (values, err) = stalling
    .timeout(Duration::from_millis(250))
    .to_array_with_error();
  let elapsed = begun.elapsed();

  assert_eq!(values, vec![1]);
  assert_eq!(err, Some(RxError::Timeout));
  assert!(elapsed >= Duration::from_millis(250));
  assert!(elapsed < Duration::from_millis(500));
  // the producer wakes from its sleep to find its subscription closed
  assert!(closed_rx.recv().unwrap());
}

#[test]
fn timeout_leaves_a_live_source_alone() {
  let (values, err) = interval(Duration::from_millis(20))
    .timeout(Duration::from_millis(500))
    .take(3)
    .to_array_with_error();
  assert_eq!(values, vec![0, 1, 2]);
  assert!(err.is_none());
}

#[test]
fn replay_window_evicts_aged_values() {
  // rendezvous channel: production starts when the replay first drains
  // it, so emission stamps are spaced by the sleeps below
  let (tx, rx) = bounded(0);
  thread::spawn(move || {
    for i in 0..5 {
      if tx.send(i).is_err() {
        return;
      }
      thread::sleep(Duration::from_millis(100));
    }
  });

  let replayed = from_channel(rx).replay(0, Duration::from_millis(600));
  assert_eq!(replayed.clone().to_array(), vec![0, 1, 2, 3, 4]);
  thread::sleep(Duration::from_millis(100));
  assert_eq!(replayed.to_array(), vec![1, 2, 3, 4]);
}

#[test]
fn merge_interleaves_on_the_clock() {
  let odd = create(|mut observer: BoxObserver<i32>, _sub: Subscription| {
    thread::sleep(Duration::from_millis(20));
    observer.next(1);
    thread::sleep(Duration::from_millis(20));
    observer.next(3);
    observer.complete();
  });
  let even = create(|mut observer: BoxObserver<i32>, _sub: Subscription| {
    thread::sleep(Duration::from_millis(10));
    observer.next(0);
    thread::sleep(Duration::from_millis(20));
    observer.next(2);
    observer.complete();
  });
  assert_eq!(odd.merge(even).to_array(), vec![0, 1, 2, 3]);
}

#[test]
fn merge_delay_error_lets_the_healthy_side_finish() {
  let failing = create(|mut observer: BoxObserver<i32>, _sub: Subscription| {
    thread::sleep(Duration::from_millis(20));
    observer.next(1);
    observer.error("deferred".into());
  });
  let healthy = create(|mut observer: BoxObserver<i32>, _sub: Subscription| {
    thread::sleep(Duration::from_millis(10));
    observer.next(0);
    thread::sleep(Duration::from_millis(20));
    observer.next(2);
    observer.complete();
  });
  let (values, err) = failing.merge_delay_error(healthy).to_array_with_error();
  assert_eq!(values, vec![0, 1, 2]);
  assert_eq!(err.unwrap().to_string(), "deferred");
}

#[test]
fn closing_a_subscription_drains_the_timer() {
  let (tx, rx) = unbounded();
  let sub = interval(Duration::from_millis(10)).subscribe_next(move |v| {
    let _ = tx.send(v);
  });
  // let a few ticks through, then cancel
  while rx.recv().unwrap() < 3 {}
  sub.close();
  // whatever was in flight settles quickly; after that, silence
  thread::sleep(Duration::from_millis(50));
  while rx.try_recv().is_ok() {}
  thread::sleep(Duration::from_millis(50));
  assert!(rx.try_recv().is_err());
}

#[test]
fn take_cancels_an_infinite_source() {
  let begun = Instant::now();
  let counted = interval(Duration::from_millis(5)).take(4).to_array();
  assert_eq!(counted, vec![0, 1, 2, 3]);
  assert!(begun.elapsed() < Duration::from_secs(2));
}
