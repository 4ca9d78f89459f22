#![no_main]

use libfuzzer_sys::fuzz_target;
use xxhrs::{StreamingHasher, Xxh32, Xxh64, sum32, sum64};

fuzz_target!(|data: Vec<u8>| {
    // First byte picks the piece size, the rest is the input
    let Some((&step, input)) = data.split_first() else {
        return;
    };
    let step = usize::from(step).max(1);

    let mut h32 = Xxh32::new();
    let mut h64 = Xxh64::new();
    for piece in input.chunks(step) {
        h32.update(piece);
        h64.update(piece);
    }

    // Verify: chunking never changes the digest
    assert_eq!(h32.digest(), sum32(input, 0));
    assert_eq!(h64.digest(), sum64(input, 0));

    // Verify: finalize is repeatable and leaves the engine alone
    let before = h64.clone();
    assert_eq!(h64.finalize(), h64.finalize());
    assert_eq!(h64, before);

    // Verify: snapshot resumes to the same engine
    let restored = Xxh32::from_state(&h32.marshal_state()).unwrap();
    assert_eq!(restored, h32);
    assert_eq!(restored.total_len(), input.len() as u64);
});
