#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

mod budget;

use expect_test::expect;
use sllist::AllocError;
use sllist::List;
use crate::budget::Budget;

fn list(budget: &Budget, items: &[u64]) -> List<u64, Budget> {
  let mut x = List::new_in(budget.clone());
  for &i in items { x.tail_attach(i); }
  x
}

fn to_vec(list: &List<u64, Budget>) -> Vec<u64> {
  list.iter().copied().collect()
}

#[test]
fn test_head_insert_failure_is_a_no_op() {
  let budget = Budget::new(3);
  let mut x = list(&budget, &[1, 2, 3]);
  assert!(x.try_head_insert(0) == Err(AllocError));
  assert!(to_vec(&x) == [1, 2, 3]);
  assert!(budget.live() == 3);
}

#[test]
fn test_tail_attach_failure_is_a_no_op() {
  let budget = Budget::new(0);
  let mut x = List::new_in(budget.clone());
  assert!(x.try_tail_attach(5_u64) == Err(AllocError));
  assert!(x.is_empty());
  budget.set_remaining(1);
  assert!(x.try_tail_attach(5).is_ok());
  assert!(x.try_tail_attach(6) == Err(AllocError));
  assert!(to_vec(&x) == [5]);
}

#[test]
fn test_insert_after_failure_is_a_no_op() {
  let budget = Budget::new(2);
  let mut x = list(&budget, &[1, 2]);
  let mut y = x.locate_mut(1).unwrap();
  assert!(y.try_insert_after(9) == Err(AllocError));
  assert!(! y.is_tail());
  assert!(to_vec(&x) == [1, 2]);
}

#[test]
fn test_copy_front_failure_frees_partial_copy() {
  let budget = Budget::new(4);
  let x = list(&budget, &[3, 7, 7, 2]);
  assert!(budget.live() == 4);
  budget.set_remaining(2);
  assert!(x.try_copy_front(3).err() == Some(AllocError));
  assert!(budget.live() == 4);
  budget.set_remaining(2);
  let y = x.try_copy_front(2).unwrap();
  assert!(to_vec(&y) == [3, 7]);
  assert!(budget.live() == 6);
}

#[test]
fn test_copy_from_failure_leaves_destination() {
  let budget = Budget::new(6);
  let source = list(&budget, &[1, 2, 3, 4]);
  let mut dest = list(&budget, &[8, 9]);
  assert!(dest.try_copy_from(&source) == Err(AllocError));
  assert!(to_vec(&dest) == [8, 9]);
  assert!(budget.live() == 6);
  budget.set_remaining(4);
  assert!(dest.try_copy_from(&source).is_ok());
  assert!(to_vec(&dest) == [1, 2, 3, 4]);
  assert!(budget.live() == 8);
}

#[test]
fn test_allocations_are_paired_with_frees() {
  let budget = Budget::new(usize::MAX);
  let mut x = list(&budget, &[1, 2, 3, 4, 5]);
  assert!(budget.live() == x.len());
  let _ = x.head_remove();
  let _ = x.tail_remove();
  let _ = x.locate_mut(1).unwrap().remove_after();
  assert!(budget.live() == x.len());
  x.head_insert(0);
  x.locate_mut(2).unwrap().insert_after(6);
  assert!(budget.live() == x.len());
  let y = x.clone();
  assert!(budget.live() == x.len() + y.len());
  x.clear();
  assert!(budget.live() == y.len());
  drop(y);
  assert!(budget.live() == 0);
  x.extend([1, 2, 3]);
  let z: Vec<u64> = x.into_iter().take(1).collect();
  assert!(z == [1]);
  assert!(budget.live() == 0);
}

#[test]
fn test_debug() {
  let budget = Budget::new(2);
  let x = list(&budget, &[4, 2]);
  expect!["[4, 2]"].assert_eq(&format!("{:?}", x));
  expect!["AllocError"].assert_eq(&format!("{:?}", AllocError));
}
