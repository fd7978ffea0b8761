//! End-to-end pipelines over cold sources: the operator vocabulary,
//! error flow, and the subscription algebra, all through the public
//! surface.

use rill::prelude::*;
use rill::rc::MutArc;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn distinct_then_collect() {
  let unique = from_array(vec![1, 1, 2, 2, 3, 2, 4, 5]).distinct().to_array();
  assert_eq!(unique, vec![1, 2, 3, 4, 5]);
}

#[test]
fn scan_emits_running_folds() {
  let sums = from_array(vec![1, 2, 3, 4, 5])
    .scan(0, |acc, v| acc + v)
    .to_array();
  assert_eq!(sums, vec![1, 3, 6, 10, 15]);
}

#[test]
fn catch_recovers_a_failed_concat() {
  let recovered = from_array(vec![1, 2, 3])
    .concat(throw("gone".into()))
    .catch(from_array(vec![4, 5]))
    .to_array();
  assert_eq!(recovered, vec![1, 2, 3, 4, 5]);
}

#[test]
fn retry_replays_the_failed_prefix() {
  let errored = Arc::new(std::sync::atomic::AtomicBool::new(false));
  let flag = errored.clone();
  let flaky = create(move |mut observer: BoxObserver<i32>, _sub: Subscription| {
    observer.next(1);
    observer.next(2);
    observer.next(3);
    if flag.swap(true, Ordering::SeqCst) {
      observer.complete();
    } else {
      observer.error("first run fails".into());
    }
  });
  assert_eq!(flaky.retry().to_array(), vec![1, 2, 3, 1, 2, 3]);
  assert!(errored.load(Ordering::SeqCst));
}

#[test]
fn long_chain_keeps_pure_semantics() {
  let seen = from_iter(1..=20)
    .filter(|v| v % 2 == 0)
    .map(|v| v * v)
    .scan(0, |acc, v| acc + v)
    .take(3)
    .to_array();
  assert_eq!(seen, vec![4, 20, 56]);
}

#[test]
fn element_access_operators() {
  let source = from_array(vec![10, 20, 30, 40]);
  assert_eq!(source.clone().element_at(2).to_array(), vec![30]);
  assert_eq!(source.clone().first().to_array(), vec![10]);
  assert_eq!(source.clone().last().to_array(), vec![40]);
  assert_eq!(source.clone().take_last(2).to_array(), vec![30, 40]);
  assert_eq!(source.skip_last(3).to_array(), vec![10]);
}

#[test]
fn aggregates_over_one_pass() {
  assert_eq!(from_array(vec![1, 2, 3, 4, 5]).sum().to_one(), 15);
  assert_eq!(from_array(vec![1, 2, 3, 4, 5]).average().to_one(), 3);
  assert_eq!(from_array(vec![1, 2, 3, 4, 5, 6, 7]).count().to_one(), 7);
  assert_eq!(from_array(vec![5, 4, 3, 2, 1, 2]).min().to_one(), 1);
  assert_eq!(from_array(vec![4, 5, 4, 3]).max().to_one(), 5);
  assert_eq!(from_array(vec![1, 2, 3]).reduce(10, |a, b| a + b).to_one(), 16);
}

#[test]
fn cross_type_map_and_flat_map() {
  let rendered = range(1, 3).map(|v| format!("#{}", v)).to_array();
  assert_eq!(rendered, vec!["#1", "#2", "#3"]);

  let mut flattened = range(1, 2).flat_map(|n| range(n, 2)).to_array();
  flattened.sort_unstable();
  assert_eq!(flattened, vec![1, 2, 2, 3]);
}

#[test]
fn terminal_uniqueness_across_merge() {
  struct CountingObserver {
    terminals: Arc<AtomicUsize>,
    done: crossbeam_channel::Sender<()>,
  }
  impl Observer<i32> for CountingObserver {
    fn next(&mut self, _value: i32) {}
    fn error(&mut self, _err: RxError) {
      self.terminals.fetch_add(1, Ordering::SeqCst);
      let _ = self.done.send(());
    }
    fn complete(&mut self) {
      self.terminals.fetch_add(1, Ordering::SeqCst);
      let _ = self.done.send(());
    }
  }

  let terminals = Arc::new(AtomicUsize::new(0));
  let (tx, done) = crossbeam_channel::bounded(2);
  from_array(vec![1, 2, 3])
    .merge(throw("one side fails".into()))
    .subscribe(CountingObserver { terminals: terminals.clone(), done: tx });
  done.recv().unwrap();
  // give a straggling second terminal a chance to show up before judging
  assert!(done
    .recv_timeout(std::time::Duration::from_millis(50))
    .is_err());
  assert_eq!(terminals.load(Ordering::SeqCst), 1);
}

#[test]
fn resubscription_restarts_production() {
  let source = from_array(vec![1, 2, 3, 4]).map(|v| v * 3);
  assert_eq!(source.clone().to_array(), source.to_array());

  let created = create(|mut observer: BoxObserver<i32>, _sub: Subscription| {
    observer.next(0);
    observer.next(1);
    observer.next(2);
    observer.complete();
  });
  assert_eq!(created.clone().to_array(), vec![0, 1, 2]);
  assert_eq!(created.to_array(), vec![0, 1, 2]);
}

#[test]
fn replay_with_size_bound_serves_late_subscribers() {
  let (tx, rx) = crossbeam_channel::bounded(5);
  for i in 0..5 {
    tx.send(i).unwrap();
  }
  drop(tx);
  let replayed = from_channel(rx).replay(2, std::time::Duration::ZERO);
  assert_eq!(replayed.clone().to_array(), vec![0, 1, 2, 3, 4]);
  assert_eq!(replayed.clone().to_array(), vec![3, 4]);
  assert_eq!(replayed.to_array(), vec![3, 4]);
}

#[test]
fn fork_shares_one_live_run() {
  let (tx, rx) = crossbeam_channel::bounded(30);
  let forked = from_channel(rx).fork();
  let first = MutArc::own(Vec::new());
  let second = MutArc::own(Vec::new());
  let sink = first.clone();
  forked.clone().subscribe_next(move |v| sink.rc_deref_mut().push(v));
  let sink = second.clone();
  forked.clone().subscribe_next(move |v| sink.rc_deref_mut().push(v));
  for i in 1..=3 {
    tx.send(i).unwrap();
  }
  drop(tx);
  forked.wait().unwrap();
  assert_eq!(*first.rc_deref(), vec![1, 2, 3]);
  assert_eq!(*second.rc_deref(), vec![1, 2, 3]);
}

#[test]
fn linked_subscription_closed_before_link_closes_target() {
  let linked = LinkedSubscription::new();
  linked.close();
  let target = Subscription::new();
  linked.link(target.clone()).unwrap();
  assert!(target.is_closed());
}

#[test]
fn linked_subscription_rejects_rebinding() {
  let linked = LinkedSubscription::new();
  let target = Subscription::new();
  linked.link(target.clone()).unwrap();
  assert_eq!(linked.link(target.clone()).unwrap_err(), RxError::LinkAlreadyBound);
  linked.close();
  assert!(linked.is_closed());
  assert!(target.is_closed());
}

#[test]
fn channel_subscription_announces_close() {
  let sub = ChannelSubscription::new();
  let events = sub.events();
  let seen = MutArc::own(false);
  let sink = seen.clone();
  sub.on_close(Box::new(move || *sink.rc_deref_mut() = true));
  assert!(!sub.is_closed());
  sub.close();
  assert!(sub.is_closed());
  assert_eq!(events.recv().unwrap(), SubscriptionEvent::Closed);
  assert!(*seen.rc_deref());
}

#[test]
fn to_channel_feeds_from_channel() {
  let round_trip =
    from_channel(from_array(vec![1, 2, 3, 4]).to_channel()).to_array();
  assert_eq!(round_trip, vec![1, 2, 3, 4]);
}

#[test]
fn start_runs_per_subscription() {
  let runs = Arc::new(AtomicUsize::new(0));
  let counter = runs.clone();
  let started = start(move || {
    counter.fetch_add(1, Ordering::SeqCst);
    Ok(42)
  });
  assert_eq!(started.clone().to_array(), vec![42]);
  assert_eq!(started.to_array(), vec![42]);
  assert_eq!(runs.load(Ordering::SeqCst), 2);
}

#[test]
fn erased_streams_compose_like_concrete_ones() {
  let stream: Stream<i32> = from_array(vec![3, 1, 2]).box_it();
  let sorted = stream
    .clone()
    .reduce(Vec::new(), |mut acc, v| {
      acc.push(v);
      acc
    })
    .map(|mut all| {
      all.sort_unstable();
      all
    })
    .to_one();
  assert_eq!(sorted, vec![1, 2, 3]);
  assert_eq!(stream.count().to_one(), 3);
}
