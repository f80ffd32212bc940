use std::panic;
use tagheap_sync::SpinLock;

#[test]
fn guard_unlocks_on_drop() {
    let l = SpinLock::new(0_u32);

    // take the lock, mutate, and drop
    {
        let mut g = l.lock();
        *g = 9;
    }

    // lock again; previous drop must have unlocked
    {
        let mut g = l.lock();
        *g += 1;
        assert_eq!(*g, 10);
    }
}

#[test]
fn try_lock_fails_while_held() {
    let l = SpinLock::new(7_u8);

    let g1 = l.try_lock();
    assert!(g1.is_some());
    assert_eq!(**g1.as_ref().unwrap(), 7);

    // while held, try_lock must fail
    assert!(l.try_lock().is_none());

    // dropping the guard allows another try_lock
    drop(g1);
    assert!(l.try_lock().is_some());
}

#[test]
fn with_lock_releases_after_closure() {
    let l = SpinLock::new(Vec::new());
    let len = l.with_lock(|v| {
        v.push(1_u32);
        v.len()
    });
    assert_eq!(len, 1);

    // lock must be free now
    let copy = l.with_lock(|v| v.clone());
    assert_eq!(copy, vec![1]);
}

#[test]
fn get_mut_bypasses_locking() {
    let mut l = SpinLock::new(vec![1, 2]);
    // &mut self guarantees no contention
    l.get_mut().push(3);
    assert_eq!(l.lock().as_slice(), &[1, 2, 3]);
}

#[test]
fn contended_increments_are_exact() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;

    let threads = 4;
    let iters = 10_000;

    let lock = Arc::new(SpinLock::new(0_usize));
    let in_cs = Arc::new(AtomicUsize::new(0));
    let start = Arc::new(Barrier::new(threads));

    let mut handles = Vec::with_capacity(threads);
    for _ in 0..threads {
        let lock = Arc::clone(&lock);
        let in_cs = Arc::clone(&in_cs);
        let start = Arc::clone(&start);
        handles.push(thread::spawn(move || {
            start.wait();
            for _ in 0..iters {
                lock.with_lock(|v| {
                    let prev = in_cs.fetch_add(1, Ordering::SeqCst);
                    assert_eq!(prev, 0, "mutual exclusion violated");
                    *v += 1;
                    in_cs.fetch_sub(1, Ordering::SeqCst);
                });
                thread::yield_now();
            }
        }));
    }

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(*lock.lock(), threads * iters);
}

#[test]
fn lock_is_released_on_panic() {
    let l = SpinLock::new(0_u32);

    let res = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        l.with_lock(|v| {
            *v = 55;
            panic!("boom");
        });
    }));
    assert!(res.is_err(), "expected panic");

    // the guard must have unlocked during unwinding
    assert_eq!(*l.lock(), 55);
}
