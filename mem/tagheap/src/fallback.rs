//! # Fallback Facade
//!
//! With the `managed` feature disabled the boundary-tag manager is compiled
//! out entirely and these forwarders hand every request to the host's
//! global allocator (the `alloc` crate; the host must install one).
//! Statistics are not tracked in this mode; the queries report zero.
//!
//! The host allocator wants the allocation's layout back on free, which
//! this C-style interface does not carry, so every allocation is prefixed
//! with one aligned word recording its size.

use alloc::alloc as host;
use core::alloc::Layout;
use core::ptr::{self, null_mut};

/// Payload alignment handed to the host allocator; wide enough for the
/// in-band size word.
const ALIGN: usize = if align_of::<usize>() > 4 {
    align_of::<usize>()
} else {
    4
};

/// Bytes reserved in front of the payload for the size word.
const PREFIX: usize = ALIGN;

/// Forwarded init: the host allocator needs none.
pub fn init() {}

/// Allocate `size` bytes from the host allocator.
///
/// Returns null when `size` is zero or the host allocator fails.
pub fn allocate(size: usize) -> *mut u8 {
    if size == 0 {
        return null_mut();
    }
    let Some(total) = size.checked_add(PREFIX) else {
        return null_mut();
    };
    let Ok(layout) = Layout::from_size_align(total, ALIGN) else {
        return null_mut();
    };
    // SAFETY: `layout` has a non-zero size.
    let base = unsafe { host::alloc(layout) };
    if base.is_null() {
        return null_mut();
    }
    // SAFETY: the fresh allocation starts with the prefix word.
    unsafe {
        base.cast::<usize>().write(size);
        base.add(PREFIX)
    }
}

/// Allocate a zero-filled array of `count` elements of `size` bytes each.
///
/// The `count * size` product is rejected with null on overflow.
pub fn allocate_zeroed(count: usize, size: usize) -> *mut u8 {
    let Some(total) = count.checked_mul(size) else {
        return null_mut();
    };
    let payload = allocate(total);
    if !payload.is_null() {
        // SAFETY: `allocate` returned at least `total` payload bytes.
        unsafe { ptr::write_bytes(payload, 0, total) };
    }
    payload
}

/// Resize a host allocation by allocating, copying, and freeing.
///
/// # Safety
/// `ptr` must be null or a pointer previously returned by this facade and
/// not freed since.
pub unsafe fn resize(ptr: *mut u8, new_size: usize) -> *mut u8 {
    if new_size == 0 {
        // SAFETY: forwarded caller contract.
        unsafe { free(ptr) };
        return null_mut();
    }
    if ptr.is_null() {
        return allocate(new_size);
    }
    // SAFETY: the size word sits right before a payload of this facade.
    let size = unsafe { ptr.sub(PREFIX).cast::<usize>().read() };
    let moved = allocate(new_size);
    if !moved.is_null() {
        // SAFETY: both buffers are live and distinct.
        unsafe {
            ptr::copy_nonoverlapping(ptr, moved, size.min(new_size));
            free(ptr);
        }
    }
    moved
}

/// Return an allocation to the host allocator.
///
/// # Safety
/// `ptr` must be null or a pointer previously returned by this facade and
/// not freed since.
pub unsafe fn free(ptr: *mut u8) {
    if ptr.is_null() {
        return;
    }
    // SAFETY: the size word sits right before the payload and the layout
    // reconstructs the one used at allocation time.
    unsafe {
        let base = ptr.sub(PREFIX);
        let size = base.cast::<usize>().read();
        let layout = Layout::from_size_align_unchecked(size + PREFIX, ALIGN);
        host::dealloc(base, layout);
    }
}

/// Statistics are not tracked in fallback mode.
pub fn total_bytes() -> usize {
    0
}

/// Statistics are not tracked in fallback mode.
pub fn used_bytes() -> usize {
    0
}

/// Statistics are not tracked in fallback mode.
pub fn peak_bytes() -> usize {
    0
}
