//! # Region Binding
//!
//! Resolves the raw byte region `[begin, end)` the facade heap manages.
//! Two bindings exist:
//!
//! - default: a statically reserved pool of [`POOL_SIZE`] bytes;
//! - `extern-region`: bounds supplied by the linker through the
//!   `__heap_begin` / `__heap_end` symbols, for hosts that place the heap
//!   after `.bss` in their linker script.
//!
//! Only the bounds leave this module; the heap never learns which binding
//! produced them.

#[cfg(not(feature = "extern-region"))]
pub use pool::bounds;

#[cfg(feature = "extern-region")]
pub use linked::bounds;

#[cfg(not(feature = "extern-region"))]
mod pool {
    /// Total size of the statically reserved pool. Adjust as needed.
    pub const POOL_SIZE: usize = 8192;

    /// Pool storage with a minimum alignment suitable for the block headers.
    #[repr(align(4))]
    struct PoolMem([u8; POOL_SIZE]);

    /// Backing storage for the facade heap.
    static mut POOL: PoolMem = PoolMem([0; POOL_SIZE]);

    /// Bounds of the statically reserved pool.
    pub fn bounds() -> (usize, usize) {
        let begin = unsafe { (&raw const POOL.0).cast::<u8>() as usize };
        (begin, begin + POOL_SIZE)
    }
}

#[cfg(feature = "extern-region")]
mod linked {
    // Provided by the host's linker script.
    unsafe extern "C" {
        static __heap_begin: u8;
        static __heap_end: u8;
    }

    /// Linker-provided bounds of the host heap region.
    pub fn bounds() -> (usize, usize) {
        // SAFETY: only the symbol addresses are taken; the bytes behind them
        // are never read here.
        let begin = unsafe { (&raw const __heap_begin) as usize };
        let end = unsafe { (&raw const __heap_end) as usize };
        (begin, end)
    }
}
