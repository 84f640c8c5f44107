#![no_main]
use base85::text::{DecodeOptions, EncodeOptions, decode_with_options, encode_with_options};
use base85::{Preset, decode, encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the preset and wrapping.
    let flags = data[0];
    let payload = &data[1..];
    let preset = Preset::ALL[usize::from(flags) % Preset::ALL.len()];
    let encoding = preset.encoding();

    let encoded = encode(payload, &encoding);
    let decoded = decode(&encoded, &encoding).unwrap();
    assert_eq!(decoded, payload);

    if flags & 0x80 != 0 {
        let options = EncodeOptions::LINE_LENGTH_64 | EncodeOptions::LINE_FEED;
        let wrapped = encode_with_options(payload, options, &encoding);
        let decoded =
            decode_with_options(&wrapped, DecodeOptions::IGNORE_UNKNOWN, &encoding).unwrap();
        assert_eq!(decoded, payload);
    }
});
