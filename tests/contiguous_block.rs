//! runs in its own process so no other caller draws from the counter

use combine_id::verify;
use std::thread;

#[test]
fn threads_draw_a_contiguous_block_after_the_last_seen_value() {
    const THREADS: usize = 8;
    const CALLS: usize = 5_000;

    let before = combine_id::next();

    let handles: Vec<_> = (0..THREADS)
        .map(|_| thread::spawn(|| (0..CALLS).map(|_| combine_id::next()).collect::<Vec<_>>()))
        .collect();

    let mut ids: Vec<u64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();

    let range = verify::check_contiguous(&mut ids).unwrap();
    assert_eq!(*range.start(), before + 1);
    assert_eq!(*range.end(), before + (THREADS * CALLS) as u64);
}
