use allocator_api2::alloc::Allocator;
use allocator_api2::boxed::Box;
use core::mem::MaybeUninit;

#[inline(always)]
pub(crate) fn into_inner<T, A>(x: Box<T, A>) -> T
where
  A: Allocator
{
  // NB: The allocator-api2 `Box` is not the language box, so we cannot move
  // out of it with `*x`. Read the value, then free the allocation as an
  // uninitialized box so the value is not dropped a second time.

  let (p, a) = Box::into_raw_with_allocator(x);
  let y = unsafe { p.read() };
  drop(unsafe { Box::from_raw_in(p.cast::<MaybeUninit<T>>(), a) });
  y
}
