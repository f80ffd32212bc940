//! # Static Heap
//!
//! The process-wide facade: one default [`Heap`] bound to the region named
//! by [`crate::region`], behind a spinlock so the singleton can be reached
//! from anywhere. The lock serializes calls; the allocator core itself
//! stays lock-free.

use crate::heap::Heap;
use crate::region;
use core::sync::atomic::{AtomicBool, Ordering};
use log::warn;
use tagheap_sync::SpinLock;

/// Global heap state protected by a spinlock.
static HEAP: SpinLock<Heap> = SpinLock::new(Heap::new());

/// One-time initialization flag.
static DID_INIT: AtomicBool = AtomicBool::new(false);

/// Bind the default heap to its region (idempotent).
///
/// A region too small for two headers plus a payload is logged and leaves
/// the heap unbound; every subsequent allocation returns null.
pub fn init() {
    if !DID_INIT.load(Ordering::Acquire) {
        HEAP.with_lock(|heap| {
            if !DID_INIT.load(Ordering::Relaxed) {
                let (begin, end) = region::bounds();
                // SAFETY: the bound region is reserved for this heap, and
                // the flag guards against a second bind.
                if let Err(err) = unsafe { heap.init(begin, end) } {
                    warn!("heap region [{begin:#x}, {end:#x}) rejected: {err}");
                }
                DID_INIT.store(true, Ordering::Release);
            }
        });
    }
}

/// Allocate `size` bytes from the default heap.
///
/// See [`Heap::allocate`].
pub fn allocate(size: usize) -> *mut u8 {
    HEAP.with_lock(|heap| heap.allocate(size))
}

/// Allocate a zero-filled array of `count` elements of `size` bytes each
/// from the default heap.
///
/// See [`Heap::allocate_zeroed`].
pub fn allocate_zeroed(count: usize, size: usize) -> *mut u8 {
    HEAP.with_lock(|heap| heap.allocate_zeroed(count, size))
}

/// Resize an allocation of the default heap.
///
/// See [`Heap::resize`].
///
/// # Safety
/// `ptr` must be null, outside the managed region, or a live allocation of
/// the default heap.
pub unsafe fn resize(ptr: *mut u8, new_size: usize) -> *mut u8 {
    HEAP.with_lock(|heap| unsafe { heap.resize(ptr, new_size) })
}

/// Return an allocation to the default heap.
///
/// See [`Heap::free`].
///
/// # Safety
/// `ptr` must be null, outside the managed region, or a pointer previously
/// returned by the default heap and not freed since.
///
/// # Panics
/// On heap corruption (wrong header magic or double free).
pub unsafe fn free(ptr: *mut u8) {
    HEAP.with_lock(|heap| unsafe { heap.free(ptr) });
}

/// Usable capacity of the default heap in bytes.
pub fn total_bytes() -> usize {
    HEAP.with_lock(|heap| heap.total_bytes())
}

/// Bytes currently in use, headers included; 0 when statistics are
/// disabled.
pub fn used_bytes() -> usize {
    HEAP.with_lock(|heap| heap.used_bytes())
}

/// Peak used bytes since init; 0 when statistics are disabled.
pub fn peak_bytes() -> usize {
    HEAP.with_lock(|heap| heap.peak_bytes())
}
