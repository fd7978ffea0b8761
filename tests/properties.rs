//! Property tests for the pure-chain invariants: a cold pipeline is a
//! function of its input vector, re-subscription restarts it from
//! scratch, and window operators agree with their slice equivalents.

use proptest::collection::vec;
use proptest::prelude::*;

use rill::prelude::*;

proptest! {
  #[test]
  fn map_filter_matches_iterator_semantics(values in vec(-1000i64..1000, 0..40)) {
    let piped = from_array(values.clone())
      .map(|v| v * 2)
      .filter(|v| v % 3 != 0)
      .to_array();
    let modeled: Vec<i64> =
      values.iter().map(|v| v * 2).filter(|v| v % 3 != 0).collect();
    prop_assert_eq!(piped, modeled);
  }

  #[test]
  fn resubscription_is_deterministic(values in vec(any::<i32>(), 0..40)) {
    let source = from_array(values).map(|v| v as i64 + 1);
    prop_assert_eq!(source.clone().to_array(), source.to_array());
  }

  #[test]
  fn scan_agrees_with_a_fold(values in vec(-100i64..100, 0..40)) {
    let scanned = from_array(values.clone()).scan(0, |acc, v| acc + v).to_array();
    let mut acc = 0;
    let modeled: Vec<i64> = values
      .iter()
      .map(|v| {
        acc += v;
        acc
      })
      .collect();
    prop_assert_eq!(scanned, modeled);
  }

  #[test]
  fn windows_agree_with_slices(
    values in vec(any::<u8>(), 0..30),
    n in 0usize..35,
  ) {
    let taken = from_array(values.clone()).take(n).to_array();
    prop_assert_eq!(&taken[..], &values[..n.min(values.len())]);

    let tail = from_array(values.clone()).take_last(n).to_array();
    prop_assert_eq!(&tail[..], &values[values.len() - n.min(values.len())..]);

    let skipped = from_array(values.clone()).skip_last(n).to_array();
    prop_assert_eq!(&skipped[..], &values[..values.len() - n.min(values.len())]);
  }

  #[test]
  fn distinct_agrees_with_first_occurrence(values in vec(0i32..10, 0..40)) {
    let deduped = from_array(values.clone()).distinct().to_array();
    let mut seen = std::collections::HashSet::new();
    let modeled: Vec<i32> =
      values.into_iter().filter(|v| seen.insert(*v)).collect();
    prop_assert_eq!(deduped, modeled);
  }

  #[test]
  fn sum_and_count_agree_with_iterators(values in vec(-50i64..50, 0..40)) {
    let total: i64 = values.iter().sum();
    prop_assert_eq!(from_array(values.clone()).sum().to_one(), total);
    prop_assert_eq!(from_array(values.clone()).count().to_one(), values.len());
  }

  #[test]
  fn concat_preserves_cross_stream_order(
    left in vec(any::<i16>(), 0..20),
    right in vec(any::<i16>(), 0..20),
  ) {
    let joined = from_array(left.clone())
      .concat(from_array(right.clone()))
      .to_array();
    let mut modeled = left;
    modeled.extend(right);
    prop_assert_eq!(joined, modeled);
  }
}
