use base85::Encoding;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Blob {
    name: String,
    #[serde(with = "base85::text::serde")]
    payload: Vec<u8>,
}

mod z85 {
    use super::*;

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        base85::text::serde::serialize_with(bytes, &Encoding::Z85, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        base85::text::serde::deserialize_with(&Encoding::Z85, deserializer)
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Frame {
    #[serde(with = "z85")]
    key: Vec<u8>,
}

#[test]
fn default_encoding_in_json() {
    let blob = Blob {
        name: "greeting".to_string(),
        payload: b"hello world".to_vec(),
    };
    let json = serde_json::to_string(&blob).unwrap();
    assert_eq!(json, r#"{"name":"greeting","payload":"Xk~0{Zy<MXa%^M"}"#);
    assert_eq!(serde_json::from_str::<Blob>(&json).unwrap(), blob);
}

#[test]
fn chosen_encoding_in_json() {
    let frame = Frame {
        key: vec![0x86, 0x4F, 0xD2, 0x6F, 0xB5, 0x59, 0xF7, 0x5B],
    };
    let json = serde_json::to_string(&frame).unwrap();
    assert_eq!(json, r#"{"key":"HelloWorld"}"#);
    assert_eq!(serde_json::from_str::<Frame>(&json).unwrap(), frame);
}

#[test]
fn empty_payload() {
    let blob: Blob = serde_json::from_str(r#"{"name":"","payload":""}"#).unwrap();
    assert!(blob.payload.is_empty());
}

#[test]
fn invalid_payload_is_a_serde_error() {
    let err = serde_json::from_str::<Blob>(r#"{"name":"x","payload":"a b"}"#).unwrap_err();
    assert!(err.to_string().contains("invalid Base-85 data"), "{err}");
}
