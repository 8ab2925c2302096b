#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

extern crate alloc;

use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use allocator_api2::boxed::Box;
use core::alloc::Layout;
use core::fmt;

pub use allocator_api2::alloc::AllocError;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

mod boxed;

mod iter;

pub use iter::IntoIter;
pub use iter::Iter;
pub use iter::IterMut;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// A singly-linked list.
///
/// The list owns its head node, each node owns its successor, and every node
/// is allocated from the list's allocator `A`.
///
/// Positions are 1-based: the head is at position 1.

pub struct List<T, A: Allocator = Global> {
  head: Link<T, A>,
  allocator: A,
}

/// A single list element.
///
/// Nodes are only ever reached through a borrow of their list. Use
/// [`NodeMut`] to splice nodes in or out after a given node.

pub struct Node<T, A: Allocator = Global> {
  data: T,
  link: Link<T, A>,
}

/// A mutable borrow of one node of a list, together with the list's
/// allocator.
///
/// Obtained from [`List::head_mut`], [`List::locate_mut`] or
/// [`List::search_mut`].

pub struct NodeMut<'a, T, A: Allocator = Global> {
  node: &'a mut Node<T, A>,
  allocator: &'a A,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

type Link<T, A> = Option<Box<Node<T, A>, A>>;

enum Panicked { }

trait Fail: Sized {
  fn fail<T>(_: Layout) -> Result<T, Self>;
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// UTILITY FUNCTIONS                                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
fn unwrap<T>(x: Result<T, Panicked>) -> T {
  match x { Ok(x) => x, Err(e) => match e { } }
}

#[inline(never)]
#[cold]
fn empty(op: &str) -> ! {
  panic!("sllist: {} called on an empty list", op)
}

#[inline(never)]
#[cold]
fn tail(op: &str) -> ! {
  panic!("sllist: {} called on the tail node", op)
}

#[inline(always)]
fn check_position(position: usize) {
  assert!(position != 0, "sllist: list positions start at 1");
}

/// Allocates an unlinked node holding `data`. On failure `data` is dropped
/// and nothing else is touched.

#[inline(always)]
fn node<T, A, E>(data: T, allocator: &A) -> Result<Box<Node<T, A>, A>, E>
where
  A: Allocator + Clone,
  E: Fail,
{
  match Box::try_new_in(Node { data, link: None }, allocator.clone()) {
    Ok(x) => Ok(x),
    Err(AllocError) => E::fail(Layout::new::<Node<T, A>>()),
  }
}

/// The link owned by the tail node, or the head link of an empty list.

fn tail_link<T, A>(link: &mut Link<T, A>) -> &mut Link<T, A>
where
  A: Allocator
{
  let mut link = link;

  while let Some(x) = link {
    link = &mut x.link;
  }

  link
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Fail                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Fail for Panicked {
  #[inline(never)]
  #[cold]
  fn fail<T>(layout: Layout) -> Result<T, Self> {
    alloc::alloc::handle_alloc_error(layout)
  }
}

impl Fail for AllocError {
  #[inline(always)]
  fn fail<T>(_: Layout) -> Result<T, Self> {
    Err(AllocError)
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Insertion and copying                                                      //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

fn head_insert<T, A, E>(list: &mut List<T, A>, data: T) -> Result<(), E>
where
  A: Allocator + Clone,
  E: Fail,
{
  let mut x = node::<_, _, E>(data, &list.allocator)?;
  x.link = list.head.take();
  list.head = Some(x);
  Ok(())
}

fn insert_after<T, A, E>(prev: &mut Node<T, A>, data: T, allocator: &A) -> Result<(), E>
where
  A: Allocator + Clone,
  E: Fail,
{
  let mut x = node::<_, _, E>(data, allocator)?;
  x.link = prev.link.take();
  prev.link = Some(x);
  Ok(())
}

fn tail_attach<T, A, E>(list: &mut List<T, A>, data: T) -> Result<(), E>
where
  A: Allocator + Clone,
  E: Fail,
{
  // Allocate before walking so that a failure leaves the list untouched.

  let x = node::<_, _, E>(data, &list.allocator)?;
  *tail_link(&mut list.head) = Some(x);
  Ok(())
}

fn copy_front<T, A, B, E>(source: &List<T, B>, n: usize, allocator: A) -> Result<List<T, A>, E>
where
  T: Clone,
  A: Allocator + Clone,
  B: Allocator,
  E: Fail,
{
  // On failure the partial copy is dropped here, so no node is leaked.

  let mut copy = List::new_in(allocator);
  let mut link = &mut copy.head;

  for data in source.iter().take(n) {
    let x = node::<_, _, E>(data.clone(), &copy.allocator)?;
    link = &mut link.insert(x).link;
  }

  Ok(copy)
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> List<T, Global> {
  /// Creates an empty list backed by the global allocator.

  pub const fn new() -> Self {
    Self { head: None, allocator: Global }
  }
}

impl<T, A: Allocator> List<T, A> {
  /// Creates an empty list whose nodes will be allocated from `allocator`.

  pub fn new_in(allocator: A) -> Self {
    Self { head: None, allocator }
  }

  /// A reference to the node allocator.

  pub fn allocator(&self) -> &A {
    &self.allocator
  }

  /// Counts the nodes of the list.
  ///
  /// This walks the whole chain.

  pub fn len(&self) -> usize {
    self.iter().count()
  }

  /// Whether the list has no head.

  pub fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  /// The head node, if any.

  pub fn head(&self) -> Option<&Node<T, A>> {
    self.head.as_deref()
  }

  /// A cursor on the head node, if any.

  pub fn head_mut(&mut self) -> Option<NodeMut<'_, T, A>> {
    self.locate_mut(1)
  }

  /// The node at the given 1-based position, or `None` if the list is
  /// shorter than `position`.
  ///
  /// # Panics
  ///
  /// Panics if `position` is zero.

  pub fn locate(&self, position: usize) -> Option<&Node<T, A>> {
    check_position(position);

    let mut x = self.head.as_deref()?;

    for _ in 1 .. position {
      x = x.link.as_deref()?;
    }

    Some(x)
  }

  /// A cursor on the node at the given 1-based position, or `None` if the
  /// list is shorter than `position`.
  ///
  /// # Panics
  ///
  /// Panics if `position` is zero.

  pub fn locate_mut(&mut self, position: usize) -> Option<NodeMut<'_, T, A>> {
    check_position(position);

    let Self { head, allocator } = self;
    let mut x = head.as_deref_mut()?;

    for _ in 1 .. position {
      x = x.link.as_deref_mut()?;
    }

    Some(NodeMut { node: x, allocator })
  }

  /// The first node, in link order, whose data equals `target`.

  pub fn search(&self, target: &T) -> Option<&Node<T, A>>
  where
    T: PartialEq
  {
    let mut x = self.head.as_deref();

    while let Some(y) = x {
      if y.data == *target { return Some(y); }
      x = y.link.as_deref();
    }

    None
  }

  /// A cursor on the first node, in link order, whose data equals `target`.

  pub fn search_mut(&mut self, target: &T) -> Option<NodeMut<'_, T, A>>
  where
    T: PartialEq
  {
    let i = self.iter().position(|x| x == target)?;
    self.locate_mut(i + 1)
  }

  /// Counts the nodes whose data equals `target`.

  pub fn occurrences(&self, target: &T) -> usize
  where
    T: PartialEq
  {
    self.iter().filter(|x| *x == target).count()
  }

  /// Removes the head node and returns its data.
  ///
  /// # Panics
  ///
  /// Panics if the list is empty.

  pub fn head_remove(&mut self) -> T {
    match self.try_head_remove() {
      Some(x) => x,
      None => empty("head_remove"),
    }
  }

  /// Removes the head node and returns its data, or returns `None` if the
  /// list is empty.

  pub fn try_head_remove(&mut self) -> Option<T> {
    let x = boxed::into_inner(self.head.take()?);
    self.head = x.link;
    Some(x.data)
  }

  /// Removes the tail node and returns its data.
  ///
  /// # Panics
  ///
  /// Panics if the list is empty.

  pub fn tail_remove(&mut self) -> T {
    match self.try_tail_remove() {
      Some(x) => x,
      None => empty("tail_remove"),
    }
  }

  /// Removes the tail node and returns its data, or returns `None` if the
  /// list is empty.

  pub fn try_tail_remove(&mut self) -> Option<T> {
    let mut link = &mut self.head;

    while link.as_ref()?.link.is_some() {
      link = &mut link.as_mut()?.link;
    }

    let x = boxed::into_inner(link.take()?);
    Some(x.data)
  }

  /// Removes and frees every node.

  pub fn clear(&mut self) {
    // Unlink one node at a time. Dropping the head box directly would recurse
    // once per node.

    let mut link = self.head.take();

    while let Some(mut x) = link {
      link = x.link.take();
    }
  }

  /// An iterator over shared references to the data, from head to tail.

  pub fn iter(&self) -> Iter<'_, T, A> {
    Iter::new(self.head.as_deref())
  }

  /// An iterator over mutable references to the data, from head to tail.

  pub fn iter_mut(&mut self) -> IterMut<'_, T, A> {
    IterMut::new(self.head.as_deref_mut())
  }
}

impl<T, A: Allocator + Clone> List<T, A> {
  /// Inserts `data` as the new head.
  ///
  /// # Panics
  ///
  /// Aborts via [`handle_alloc_error`](alloc::alloc::handle_alloc_error) on
  /// failure to allocate memory.

  pub fn head_insert(&mut self, data: T) {
    unwrap(head_insert(self, data))
  }

  /// Inserts `data` as the new head.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. The list is left
  /// unchanged and `data` is dropped.

  pub fn try_head_insert(&mut self, data: T) -> Result<(), AllocError> {
    head_insert(self, data)
  }

  /// Appends `data` after the tail, or makes it the head of an empty list.
  ///
  /// This walks the whole chain to find the tail.
  ///
  /// # Panics
  ///
  /// Aborts via [`handle_alloc_error`](alloc::alloc::handle_alloc_error) on
  /// failure to allocate memory.

  pub fn tail_attach(&mut self, data: T) {
    unwrap(tail_attach(self, data))
  }

  /// Appends `data` after the tail, or makes it the head of an empty list.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. The list is left
  /// unchanged and `data` is dropped.

  pub fn try_tail_attach(&mut self, data: T) -> Result<(), AllocError> {
    tail_attach(self, data)
  }

  /// Returns a new list holding copies of the first `n` items, or of every
  /// item if the list is shorter than `n`.
  ///
  /// # Panics
  ///
  /// Aborts via [`handle_alloc_error`](alloc::alloc::handle_alloc_error) on
  /// failure to allocate memory.

  pub fn copy_front(&self, n: usize) -> Self
  where
    T: Clone
  {
    unwrap(copy_front(self, n, self.allocator.clone()))
  }

  /// Returns a new list holding copies of the first `n` items, or of every
  /// item if the list is shorter than `n`.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. Nodes copied before
  /// the failure are freed.

  pub fn try_copy_front(&self, n: usize) -> Result<Self, AllocError>
  where
    T: Clone
  {
    copy_front(self, n, self.allocator.clone())
  }

  /// Replaces the contents of this list with copies of every item of
  /// `source`, in order. The previous nodes are freed. An empty `source`
  /// leaves this list empty.
  ///
  /// # Panics
  ///
  /// Aborts via [`handle_alloc_error`](alloc::alloc::handle_alloc_error) on
  /// failure to allocate memory.

  pub fn copy_from<B>(&mut self, source: &List<T, B>)
  where
    T: Clone,
    B: Allocator,
  {
    let copy = unwrap(copy_front(source, usize::MAX, self.allocator.clone()));
    self.clear();
    self.head = copy.into_head();
  }

  /// Replaces the contents of this list with copies of every item of
  /// `source`, in order. The previous nodes are freed. An empty `source`
  /// leaves this list empty.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. This list is left
  /// unchanged.

  pub fn try_copy_from<B>(&mut self, source: &List<T, B>) -> Result<(), AllocError>
  where
    T: Clone,
    B: Allocator,
  {
    let copy = copy_front(source, usize::MAX, self.allocator.clone())?;
    self.clear();
    self.head = copy.into_head();
    Ok(())
  }
}

impl<T, A: Allocator> List<T, A> {
  #[inline(always)]
  fn into_head(mut self) -> Link<T, A> {
    self.head.take()
  }
}

impl<T, A: Allocator> Drop for List<T, A> {
  fn drop(&mut self) {
    self.clear()
  }
}

impl<T> Default for List<T, Global> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Clone, A: Allocator + Clone> Clone for List<T, A> {
  fn clone(&self) -> Self {
    self.copy_front(usize::MAX)
  }
}

impl<T, A, B> PartialEq<List<T, B>> for List<T, A>
where
  T: PartialEq,
  A: Allocator,
  B: Allocator,
{
  fn eq(&self, other: &List<T, B>) -> bool {
    self.iter().eq(other.iter())
  }
}

impl<T: Eq, A: Allocator> Eq for List<T, A> { }

impl<T: fmt::Debug, A: Allocator> fmt::Debug for List<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<T> FromIterator<T> for List<T, Global> {
  fn from_iter<I>(iter: I) -> Self
  where
    I: IntoIterator<Item = T>
  {
    let mut list = Self::new();
    list.extend(iter);
    list
  }
}

impl<T, A: Allocator + Clone> Extend<T> for List<T, A> {
  fn extend<I>(&mut self, iter: I)
  where
    I: IntoIterator<Item = T>
  {
    let Self { head, allocator } = self;
    let mut link = tail_link(head);

    for data in iter {
      let x = unwrap(node(data, allocator));
      link = &mut link.insert(x).link;
    }
  }
}

impl<T, A: Allocator> IntoIterator for List<T, A> {
  type Item = T;
  type IntoIter = IntoIter<T, A>;

  fn into_iter(self) -> Self::IntoIter {
    IntoIter::new(self)
  }
}

impl<'a, T, A: Allocator> IntoIterator for &'a List<T, A> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T, A>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut List<T, A> {
  type Item = &'a mut T;
  type IntoIter = IterMut<'a, T, A>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter_mut()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Node                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T, A: Allocator> Node<T, A> {
  /// The payload.

  pub fn data(&self) -> &T {
    &self.data
  }

  /// The successor, or `None` at the tail.

  pub fn next(&self) -> Option<&Self> {
    self.link.as_deref()
  }

  /// Whether this is the tail node.

  pub fn is_tail(&self) -> bool {
    self.link.is_none()
  }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Node<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Node").field(&self.data).finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// NodeMut                                                                    //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, T, A: Allocator> NodeMut<'a, T, A> {
  /// The payload.

  pub fn data(&self) -> &T {
    &self.node.data
  }

  /// The payload, mutably.

  pub fn data_mut(&mut self) -> &mut T {
    &mut self.node.data
  }

  /// Converts the cursor into a mutable reference to the payload.

  pub fn into_data_mut(self) -> &'a mut T {
    &mut self.node.data
  }

  /// Moves the cursor to the successor, or returns `None` at the tail.

  pub fn next(self) -> Option<Self> {
    let Self { node, allocator } = self;
    Some(Self { node: node.link.as_deref_mut()?, allocator })
  }

  /// Whether the cursor is on the tail node.

  pub fn is_tail(&self) -> bool {
    self.node.link.is_none()
  }

  /// Removes the node after this one and returns its data.
  ///
  /// # Panics
  ///
  /// Panics if this is the tail node.

  pub fn remove_after(&mut self) -> T {
    match self.try_remove_after() {
      Some(x) => x,
      None => tail("remove_after"),
    }
  }

  /// Removes the node after this one and returns its data, or returns `None`
  /// if this is the tail node.

  pub fn try_remove_after(&mut self) -> Option<T> {
    let x = boxed::into_inner(self.node.link.take()?);
    self.node.link = x.link;
    Some(x.data)
  }
}

impl<'a, T, A: Allocator + Clone> NodeMut<'a, T, A> {
  /// Inserts `data` in a new node right after this one.
  ///
  /// # Panics
  ///
  /// Aborts via [`handle_alloc_error`](alloc::alloc::handle_alloc_error) on
  /// failure to allocate memory.

  pub fn insert_after(&mut self, data: T) {
    unwrap(insert_after(self.node, data, self.allocator))
  }

  /// Inserts `data` in a new node right after this one.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. The list is left
  /// unchanged and `data` is dropped.

  pub fn try_insert_after(&mut self, data: T) -> Result<(), AllocError> {
    insert_after(self.node, data, self.allocator)
  }
}

impl<'a, T: fmt::Debug, A: Allocator> fmt::Debug for NodeMut<'a, T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("NodeMut").field(&self.node.data).finish()
  }
}
