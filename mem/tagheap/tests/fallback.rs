//! Round-trip through the host-allocator fallback.
//!
//! Runs only with `--no-default-features` (the `managed` feature compiles
//! the fallback out).

#![cfg(not(feature = "managed"))]

use tagheap::fallback;

fn holds(ptr: *const u8, byte: u8, len: usize) -> bool {
    unsafe { core::slice::from_raw_parts(ptr, len) }
        .iter()
        .all(|&b| b == byte)
}

#[test]
fn fallback_round_trip() {
    fallback::init();

    let p = fallback::allocate(40);
    assert!(!p.is_null());
    unsafe { core::ptr::write_bytes(p, 0x7E, 40) };

    let grown = unsafe { fallback::resize(p, 80) };
    assert!(!grown.is_null());
    assert!(holds(grown.cast_const(), 0x7E, 40));

    let z = fallback::allocate_zeroed(4, 4);
    assert!(!z.is_null());
    assert!(holds(z.cast_const(), 0, 16));

    unsafe {
        fallback::free(grown);
        fallback::free(z);
        fallback::free(core::ptr::null_mut());
    }
}

#[test]
fn fallback_rejects_degenerate_requests() {
    assert!(fallback::allocate(0).is_null());
    assert!(fallback::allocate_zeroed(usize::MAX, 2).is_null());
    assert!(unsafe { fallback::resize(core::ptr::null_mut(), 0) }.is_null());
}

#[test]
fn fallback_reports_no_statistics() {
    assert_eq!(fallback::total_bytes(), 0);
    assert_eq!(fallback::used_bytes(), 0);
    assert_eq!(fallback::peak_bytes(), 0);
}
