#![no_main]

use libfuzzer_sys::fuzz_target;

use quill_consensus::ActionType;

fuzz_target!(|data: &[u8]| {
    for &b in data {
        if let Some(action) = ActionType::from_discriminator(b) {
            if action.discriminator() != b {
                panic!("discriminator roundtrip mismatch for 0x{b:02x}");
            }
        }
    }
});
