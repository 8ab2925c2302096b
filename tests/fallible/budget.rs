use allocator_api2::alloc::AllocError;
use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use core::alloc::Layout;
use core::cell::Cell;
use core::ptr::NonNull;
use std::rc::Rc;

/// An allocator that fails once its budget of allocations is spent, and
/// counts the allocations that are still live.

#[derive(Clone, Default)]
pub(crate) struct Budget(Rc<State>);

#[derive(Default)]
struct State {
  remaining: Cell<usize>,
  live: Cell<usize>,
}

impl Budget {
  pub(crate) fn new(remaining: usize) -> Self {
    let x = Self::default();
    x.set_remaining(remaining);
    x
  }

  pub(crate) fn set_remaining(&self, remaining: usize) {
    self.0.remaining.set(remaining)
  }

  pub(crate) fn live(&self) -> usize {
    self.0.live.get()
  }
}

unsafe impl Allocator for Budget {
  fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
    let n = self.0.remaining.get();
    if n == 0 { return Err(AllocError); }
    let p = Global.allocate(layout)?;
    self.0.remaining.set(n - 1);
    self.0.live.set(self.0.live.get() + 1);
    Ok(p)
  }

  unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
    self.0.live.set(self.0.live.get() - 1);
    unsafe { Global.deallocate(ptr, layout) }
  }
}
