#![no_main]
use base85::Preset;
use base85::text::{DecodeOptions, decode_with_options};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary input must only ever produce errors, never panics.
    for preset in Preset::ALL {
        let encoding = preset.encoding();
        let _ = base85::decode(data, &encoding);
        let _ = decode_with_options(data, DecodeOptions::IGNORE_UNKNOWN, &encoding);
    }
});
