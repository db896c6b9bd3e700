//! Fuzz target for observations JSON parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the observations
//! parser, checking for panics, buffer overflows, or other undefined
//! behavior.
//!
//! Run with:
//!   cargo +nightly fuzz run observations_json_parse

#![no_main]

use libfuzzer_sys::fuzz_target;
use textquad::session::io_json::from_json_slice;

fuzz_target!(|data: &[u8]| {
    // Cap input size to avoid OOM on very large inputs.
    // 10MB is generous for an observation list.
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    // Try to parse the data. We don't care about errors—
    // we only care about panics, crashes, or hangs.
    let _ = from_json_slice(data);
});
