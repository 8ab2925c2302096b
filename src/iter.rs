//! Iterators over the data of a [`List`].

use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use core::fmt;
use core::iter::FusedIterator;
use crate::List;
use crate::Node;

/// An iterator over shared references to the data of a list, from head to
/// tail.

pub struct Iter<'a, T, A: Allocator = Global>(Option<&'a Node<T, A>>);

/// An iterator over mutable references to the data of a list, from head to
/// tail.

pub struct IterMut<'a, T, A: Allocator = Global>(Option<&'a mut Node<T, A>>);

/// An owning iterator that removes items from the head of a list.

pub struct IntoIter<T, A: Allocator = Global>(List<T, A>);

impl<'a, T, A: Allocator> Iter<'a, T, A> {
  #[inline(always)]
  pub(crate) fn new(head: Option<&'a Node<T, A>>) -> Self {
    Self(head)
  }
}

impl<'a, T, A: Allocator> Iterator for Iter<'a, T, A> {
  type Item = &'a T;

  #[inline(always)]
  fn next(&mut self) -> Option<&'a T> {
    let x = self.0?;
    self.0 = x.link.as_deref();
    Some(&x.data)
  }
}

impl<'a, T, A: Allocator> FusedIterator for Iter<'a, T, A> { }

impl<'a, T, A: Allocator> Clone for Iter<'a, T, A> {
  fn clone(&self) -> Self {
    Self(self.0)
  }
}

impl<'a, T: fmt::Debug, A: Allocator> fmt::Debug for Iter<'a, T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Iter").field(&self.0).finish()
  }
}

impl<'a, T, A: Allocator> IterMut<'a, T, A> {
  #[inline(always)]
  pub(crate) fn new(head: Option<&'a mut Node<T, A>>) -> Self {
    Self(head)
  }
}

impl<'a, T, A: Allocator> Iterator for IterMut<'a, T, A> {
  type Item = &'a mut T;

  #[inline(always)]
  fn next(&mut self) -> Option<&'a mut T> {
    let x = self.0.take()?;
    self.0 = x.link.as_deref_mut();
    Some(&mut x.data)
  }
}

impl<'a, T, A: Allocator> FusedIterator for IterMut<'a, T, A> { }

impl<'a, T: fmt::Debug, A: Allocator> fmt::Debug for IterMut<'a, T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("IterMut").field(&self.0).finish()
  }
}

impl<T, A: Allocator> IntoIter<T, A> {
  #[inline(always)]
  pub(crate) fn new(list: List<T, A>) -> Self {
    Self(list)
  }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
  type Item = T;

  #[inline(always)]
  fn next(&mut self) -> Option<T> {
    self.0.try_head_remove()
  }
}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> { }

impl<T: fmt::Debug, A: Allocator> fmt::Debug for IntoIter<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("IntoIter").field(&self.0).finish()
  }
}
