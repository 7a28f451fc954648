#![allow(clippy::print_stdout)]

//! Mirrors the classic wordlist exercise: build a deliberately small queue,
//! bulk-load a newline-separated word file through several grow cycles, then
//! drain, compact, and drain again while printing the counters.

use std::env;

use anyhow::{Result, anyhow};
use dynaq_queue_rs::{
  core::collections::queue::DynamicQueue,
  std::{
    diagnostics::{PhaseTimer, record_stats},
    loader::WordSource,
  },
};

const INITIAL_CAPACITY: usize = 5;
const GROW_BY: usize = 10;

fn main() -> Result<()> {
  tracing_subscriber::fmt::init();

  let path = env::args().nth(1).ok_or_else(|| anyhow!("usage: wordlist-demo <word-file>"))?;

  println!("building new queue with a capacity of {} items", INITIAL_CAPACITY);
  let source = WordSource::from_file(&path)?;
  let mut queue = DynamicQueue::with_grow_by(INITIAL_CAPACITY, GROW_BY)?;
  println!("{}", queue.stats());

  println!("reading {} into the queue", path);
  let timer = PhaseTimer::start("bulk_load");
  let loaded = source.load_into(&mut queue).map_err(|_| anyhow!("allocation failed while growing the queue"))?;
  timer.finish();
  record_stats("after_load", &queue.stats());
  println!("loaded {} words", loaded);
  println!("{}", queue.stats());

  println!("dequeueing 5 items");
  for _ in 0..5 {
    if let Some(word) = queue.dequeue() {
      println!("\titem: {}", word);
    }
  }
  println!("{}", queue.stats());

  println!("shrinking queue");
  queue.shrink()?;
  record_stats("after_shrink", &queue.stats());
  println!("{}", queue.stats());

  if let Some(word) = queue.peek() {
    println!("peeking next item in queue: {}", word);
  }

  println!("dequeueing rest of items");
  let mut drained = 0usize;
  while queue.dequeue().is_some() {
    drained += 1;
  }
  println!("drained {} items", drained);
  println!("{}", queue.stats());

  Ok(())
}
