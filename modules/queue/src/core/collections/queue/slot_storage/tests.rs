extern crate std;

use super::*;

#[test]
fn with_capacity_fills_empty_slots() {
  let storage: SlotStorage<u32> = SlotStorage::with_capacity(4);
  assert_eq!(storage.capacity(), 4);
  for idx in 0..4 {
    assert!(storage.get(idx).is_none());
  }
}

#[test]
fn put_take_roundtrip() {
  let mut storage = SlotStorage::with_capacity(2);
  storage.put(0, "a");
  assert_eq!(storage.get(0), Some(&"a"));
  assert_eq!(storage.take(0), Some("a"));
  assert!(storage.get(0).is_none());
}

#[test]
fn relocate_moves_live_region_to_front() {
  let mut storage = SlotStorage::with_capacity(4);
  storage.put(1, 10);
  storage.put(2, 20);
  storage.put(3, 30);
  storage.relocate(1, 4, 6).unwrap();
  assert_eq!(storage.capacity(), 6);
  assert_eq!(storage.get(0), Some(&10));
  assert_eq!(storage.get(1), Some(&20));
  assert_eq!(storage.get(2), Some(&30));
  assert!(storage.get(3).is_none());
}

#[test]
fn relocate_shrinks_to_exact_fit() {
  let mut storage = SlotStorage::with_capacity(8);
  storage.put(6, 1);
  storage.put(7, 2);
  storage.relocate(6, 8, 2).unwrap();
  assert_eq!(storage.capacity(), 2);
  assert_eq!(storage.get(0), Some(&1));
  assert_eq!(storage.get(1), Some(&2));
}

#[test]
fn relocate_empty_region_yields_empty_block() {
  let mut storage: SlotStorage<u8> = SlotStorage::with_capacity(5);
  storage.relocate(3, 3, 1).unwrap();
  assert_eq!(storage.capacity(), 1);
  assert!(storage.get(0).is_none());
}
