//! End-to-end flow: read a word file, bulk-load a small queue through several
//! grow cycles, drain part of it, compact, and drain the rest.

use std::io::Write;

use dynaq_queue_rs::{
  core::collections::queue::{DynamicQueue, OfferOutcome},
  std::{
    diagnostics::{PhaseTimer, record_stats},
    loader::WordSource,
  },
};

const WORDS: &[&str] = &["apple", "banana", "cherry", "damson", "elder", "fig", "grape", "honeydew"];

fn word_file() -> tempfile::NamedTempFile {
  let mut file = tempfile::NamedTempFile::new().unwrap();
  for word in WORDS {
    writeln!(file, "{}", word).unwrap();
  }
  file
}

#[test]
fn bulk_load_drain_shrink_drain() {
  let file = word_file();
  let source = WordSource::from_file(file.path()).unwrap();
  let mut queue = DynamicQueue::with_grow_by(5, 10).unwrap();

  let timer = PhaseTimer::start("bulk_load");
  let loaded = source.load_into(&mut queue).unwrap();
  timer.finish();
  record_stats("after_load", &queue.stats());

  assert_eq!(loaded, WORDS.len());
  assert_eq!(queue.len(), WORDS.len());
  assert_eq!(queue.capacity(), 15);

  for expected in &WORDS[..5] {
    assert_eq!(queue.dequeue(), Some(*expected));
  }

  let new_capacity = queue.shrink().unwrap();
  assert_eq!(new_capacity, queue.len() + 10);
  assert_eq!(queue.head(), 0);
  assert_eq!(queue.peek(), Some(&WORDS[5]));

  for expected in &WORDS[5..] {
    assert_eq!(queue.dequeue(), Some(*expected));
  }
  assert_eq!(queue.dequeue(), None);
  assert!(queue.is_empty());
  record_stats("after_drain", &queue.stats());
}

#[test]
fn increments_discipline_matches_bulk_load() {
  let file = word_file();
  let source = WordSource::from_file(file.path()).unwrap();
  let mut queue = DynamicQueue::with_increments(2, 1).unwrap();

  let loaded = source.load_into(&mut queue).unwrap();
  assert_eq!(loaded, WORDS.len());
  assert_eq!(queue.capacity(), WORDS.len());

  let drained: Vec<&str> = std::iter::from_fn(|| queue.dequeue()).collect();
  assert_eq!(drained, WORDS);
}

#[test]
fn grow_outcome_is_reported_once_per_cycle() {
  let mut queue = DynamicQueue::with_grow_by(2, 2).unwrap();
  assert_eq!(queue.enqueue("x").unwrap(), OfferOutcome::Enqueued);
  assert_eq!(queue.enqueue("y").unwrap(), OfferOutcome::Enqueued);
  assert_eq!(queue.enqueue("z").unwrap(), OfferOutcome::GrewTo { capacity: 4 });
  assert_eq!(queue.enqueue("w").unwrap(), OfferOutcome::Enqueued);
}
