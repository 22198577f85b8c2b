#![no_main]

use libfuzzer_sys::fuzz_target;

use quill_consensus::{lockup_blocks, lockup_purpose};

// Lockup field extraction runs before length validation, so it must tolerate
// any payload length without faulting, and decoding must be idempotent.
fuzz_target!(|data: &[u8]| {
    let purpose_a = lockup_purpose(data);
    let blocks_a = lockup_blocks(data);
    let purpose_b = lockup_purpose(data);
    let blocks_b = lockup_blocks(data);
    if purpose_a != purpose_b || blocks_a != blocks_b {
        panic!("lockup field decode not idempotent");
    }
    if data.len() < 3 && purpose_a.is_some() {
        panic!("purpose decoded from short payload");
    }
    if data.len() < 5 && blocks_a.is_some() {
        panic!("lock blocks decoded from short payload");
    }
});
