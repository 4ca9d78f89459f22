#![no_main]

use libfuzzer_sys::fuzz_target;
use xxhrs::{Hasher, Xxh32, Xxh64};

fuzz_target!(|data: &[u8]| {
    // Arbitrary records must be rejected cleanly, never panic
    let mut h32 = Xxh32::with_seed(9);
    let before = h32.clone();
    if h32.unmarshal_state(data).is_err() {
        assert_eq!(h32, before);
    }

    let _ = Xxh64::from_state(data);

    // Anything accepted must re-encode to the same bytes
    if let Ok(mut hasher) = Hasher::from_state(data) {
        assert_eq!(&hasher.marshal_state()[..], data);
        let _ = hasher.finalize();

        // Restored engines keep accepting input, whatever their length counter
        hasher.update(data);
        let _ = hasher.finalize();
    }
});
