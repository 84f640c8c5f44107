use base85::codec::decoder::decoded_len;
use base85::codec::encoder::encoded_len;
use base85::text::{DecodeOptions, EncodeOptions, decode_with_options, encode_with_options};
use base85::{Encoding, Preset, decode, encode};
use proptest::prelude::*;

fn any_preset() -> impl Strategy<Value = Preset> {
    prop::sample::select(Preset::ALL.to_vec())
}

fn shuffled_alphabet() -> impl Strategy<Value = Vec<u8>> {
    Just((b'!'..=b'u').collect::<Vec<u8>>()).prop_shuffle()
}

proptest! {
    #[test]
    fn prop_encode_decode_roundtrip(
        data in proptest::collection::vec(any::<u8>(), 0..2048),
        preset in any_preset()
    ) {
        let encoding = preset.encoding();
        let encoded = encode(&data, &encoding);
        let decoded = decode(&encoded, &encoding).unwrap();
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn prop_shuffled_alphabet_roundtrip(
        data in proptest::collection::vec(any::<u8>(), 0..512),
        symbols in shuffled_alphabet()
    ) {
        let encoding = Encoding::custom(
            symbols.iter().map(|&b| char::from(b)),
            Some("{"),
            Some("}"),
            Some('z'),
            Some('y'),
        )
        .unwrap();
        let encoded = encode(&data, &encoding);
        prop_assert_eq!(encoded.first(), Some(&b'{'));
        prop_assert_eq!(encoded.last(), Some(&b'}'));
        prop_assert_eq!(decode(&encoded, &encoding).unwrap(), data);
    }

    #[test]
    fn prop_unframed_output_length(
        data in proptest::collection::vec(any::<u8>(), 0..1024),
        preset in prop::sample::select(vec![Preset::Ascii, Preset::Rfc1924, Preset::Z85])
    ) {
        let encoding = preset.encoding();
        let encoded = encode(&data, &encoding);
        prop_assert_eq!(encoded.len(), encoded_len(data.len()));
        prop_assert_eq!(decoded_len(encoded.len()), data.len());
        prop_assert!(encoded.iter().all(|&b| encoding.alphabet().contains(b)));
    }

    #[test]
    fn prop_delimiters_are_optional_on_decode(
        data in proptest::collection::vec(any::<u8>(), 0..256)
    ) {
        let encoded = encode(&data, &Encoding::ADOBE);
        let bare = &encoded[2..encoded.len() - 2];
        prop_assert_eq!(decode(bare, &Encoding::ADOBE).unwrap(), data);
    }

    #[test]
    fn prop_last_full_group_never_collapses(
        groups in 1usize..64,
        prefix in proptest::collection::vec(any::<u8>(), 0..64)
    ) {
        let mut data = prefix;
        data.truncate(data.len() / 4 * 4);
        data.extend(std::iter::repeat_n(0u8, groups * 4));
        let encoded = encode(&data, &Encoding::BTOA);
        prop_assert!(encoded.ends_with(b"!!!!!x"), "{:?}", String::from_utf8_lossy(&encoded));
        prop_assert_eq!(decode(&encoded, &Encoding::BTOA).unwrap(), data);
    }

    #[test]
    fn prop_space_runs_compress(
        words in proptest::collection::vec(prop::bool::ANY, 1..64)
    ) {
        let data: Vec<u8> = words
            .iter()
            .flat_map(|&run| if run { *b"2222" } else { *b"    " })
            .collect();
        let encoded = encode(&data, &Encoding::BTOA);
        let runs = words.iter().filter(|&&w| w).count();
        prop_assert_eq!(encoded.iter().filter(|&&b| b == b'y').count(), runs);
        prop_assert_eq!(decode(&encoded, &Encoding::BTOA).unwrap(), data);
    }

    #[test]
    fn prop_decode_never_panics(
        data in proptest::collection::vec(any::<u8>(), 0..512),
        preset in any_preset()
    ) {
        let _ = decode(&data, &preset.encoding());
    }

    #[test]
    fn prop_wrapped_roundtrip(
        data in proptest::collection::vec(any::<u8>(), 0..1024),
        preset in any_preset(),
        wide in prop::bool::ANY
    ) {
        let encoding = preset.encoding();
        let options = if wide { EncodeOptions::LINE_LENGTH_76 } else { EncodeOptions::LINE_LENGTH_64 };
        let limit = if wide { 76 } else { 64 };
        let text = encode_with_options(&data, options, &encoding);
        prop_assert!(text.split(|&b| b == b'\n').all(|line| line.len() <= limit + 1));
        let decoded = decode_with_options(&text, DecodeOptions::IGNORE_UNKNOWN, &encoding).unwrap();
        prop_assert_eq!(decoded, data);
    }
}
