//! End-to-end push/pop scenarios driven through the public API.

use hyperstack_core_rs::{Coordinate, HyperStack, HyperStackConfig, HyperStackConfigError, NodeId, StackError};

#[test]
fn hundred_boxed_integers_come_back_in_reverse_order() {
  let payloads: Vec<Box<i32>> = (0..100).map(Box::new).collect();
  let config = HyperStackConfig::new(4).unwrap().with_initial_capacity(payloads.len());
  let mut stack = HyperStack::new(config).unwrap();

  for payload in &payloads {
    stack.push(payload).unwrap();
  }
  assert_eq!(stack.len(), 100);
  assert_eq!(stack.coordinate(99), Coordinate::new(12, 3));
  assert_eq!(stack.lookup(0, 0), Some(NodeId::new(0)));

  let mut correct = 0;
  for expected in (0..100).rev() {
    let top = stack.peek().map(|payload| **payload);
    let popped = stack.pop().map(|payload| **payload);
    assert_eq!(top, Some(expected));
    assert_eq!(popped, Ok(expected));
    correct += 1;
  }

  assert_eq!(correct, 100);
  assert!(stack.is_empty());
  assert_eq!(stack.pop().map(|payload| **payload), Err(StackError::Empty));
  // the caller still owns every payload
  assert_eq!(payloads.iter().map(|payload| **payload).sum::<i32>(), 4950);
}

#[test]
fn random_access_through_coordinates() {
  let words: Vec<String> = (0..50).map(|index| format!("word-{index}")).collect();
  let mut stack = HyperStack::new(HyperStackConfig::new(3).unwrap()).unwrap();
  for word in &words {
    stack.push(word).unwrap();
  }

  for (position, word) in words.iter().enumerate() {
    let coordinate = stack.coordinate(position);
    let id = stack.lookup(coordinate.layer(), coordinate.slice()).unwrap();
    assert_eq!(stack.node(id).map(|node| node.data()), Some(word));
    assert_eq!(stack.get(position), Some(word));
  }
  assert_eq!(stack.get(words.len()), None);
}

#[test]
fn size_tracks_successful_operations_only() {
  let values: Vec<u64> = (0..40).collect();
  let mut stack = HyperStack::new(HyperStackConfig::new(2).unwrap()).unwrap();
  let mut pushes = 0_usize;
  let mut pops = 0_usize;

  for round in 0..5 {
    if stack.pop().is_ok() {
      pops += 1;
    }
    for value in &values[round * 8..round * 8 + 8] {
      stack.push(value).unwrap();
      pushes += 1;
    }
    for _ in 0..3 {
      if stack.pop().is_ok() {
        pops += 1;
      }
    }
    assert_eq!(stack.len(), pushes - pops);
  }
}

#[test]
fn zero_half_width_is_rejected() {
  assert_eq!(HyperStackConfig::new(0).err(), Some(HyperStackConfigError::ZeroHalfWidth));
}
