//! # Fixed-Region Boundary-Tag Allocator
//!
//! A dynamic memory allocator for embedded and bare-metal environments
//! where no operating system heap exists. The allocator manages a single
//! contiguous byte region (either a statically reserved pool or a span
//! supplied by the host's linker script) and exposes a general-purpose
//! allocate / resize / zero-allocate / free interface plus usage
//! statistics.
//!
//! ## Data model
//!
//! The region is tiled by blocks. Each block carries a 12-byte in-band
//! header holding a magic signature, a used flag, and the byte offsets of
//! its address-order neighbors; a terminal sentinel header marks the high
//! end of the region:
//!
//! ```text
//! +--------+---------+--------+-----------------+--------+----------+
//! | header | payload | header |     payload     |  ...   | sentinel |
//! +--------+---------+--------+-----------------+--------+----------+
//! ^ 0                ^ next of block 0                   ^ usable + 12
//! ```
//!
//! Allocation is first-fit starting at the lowest known free block (the
//! "low-free hint"), splitting when the remainder can still stand alone.
//! Freeing eagerly coalesces with both address-order neighbors, so no two
//! adjacent free blocks ever exist between calls. Freeing a pointer whose
//! header fails validation (wrong magic, double free) is a fatal integrity
//! violation and panics.
//!
//! ## Concurrency
//!
//! The core ([`Heap`]) assumes serialized access: all operations take
//! `&mut self` and carry no locks. The process-wide facade
//! ([`static_heap`]) wraps the default heap in a spinlock so it can be
//! shared; operations are not reentrant and must not be called from
//! interrupt context without external discipline.
//!
//! ## Configuration
//!
//! - `managed` (default): the boundary-tag manager. When disabled, the
//!   facade forwards to the host's global allocator and reports zero
//!   statistics.
//! - `stats` (default): current / peak used-byte tracking.
//! - `extern-region`: bind the facade heap to linker-provided
//!   `__heap_begin` / `__heap_end` symbols instead of the built-in pool.
//!
//! ## Example
//!
//! ```
//! use tagheap::Heap;
//!
//! let mut backing = [0_u8; 256];
//! let range = backing.as_mut_ptr_range();
//!
//! let mut heap = Heap::new();
//! // SAFETY: the array outlives the heap and is used through it only.
//! unsafe { heap.init(range.start as usize, range.end as usize) }.unwrap();
//!
//! let p = heap.allocate(24);
//! assert!(!p.is_null());
//! // SAFETY: `p` came from this heap and is freed once.
//! unsafe { heap.free(p) };
//! assert_eq!(heap.used_bytes(), 0);
//! ```

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

#[cfg(not(feature = "managed"))]
extern crate alloc;

#[cfg(feature = "managed")]
mod block;
#[cfg(feature = "managed")]
mod heap;
#[cfg(feature = "managed")]
mod region;
#[cfg(feature = "managed")]
mod stats;
#[cfg(feature = "managed")]
pub mod static_heap;

#[cfg(not(feature = "managed"))]
pub mod fallback;

#[cfg(feature = "managed")]
pub use block::{ALIGN, MIN_ALLOC};
#[cfg(feature = "managed")]
pub use heap::{Heap, RegionError};

#[cfg(feature = "managed")]
pub use static_heap::{
    allocate, allocate_zeroed, free, init, peak_bytes, resize, total_bytes, used_bytes,
};

#[cfg(not(feature = "managed"))]
pub use fallback::{
    allocate, allocate_zeroed, free, init, peak_bytes, resize, total_bytes, used_bytes,
};
