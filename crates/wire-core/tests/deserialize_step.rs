use serde_json::{json, Value};
use wire_core::{DeserializeStep, Serializer, SerializerError, MAX_SERIALIZED_BYTES};
use wire_adapters::JsonSerializer;

#[test]
fn malformed_input_raises_the_serializer_error() {
    let direct = JsonSerializer.deserialize("not-json").unwrap_err();
    let via_step = DeserializeStep::new(JsonSerializer).run("not-json").unwrap_err();
    assert!(matches!(via_step, SerializerError::Decode(_)));
    assert_eq!(via_step, direct);
}

#[test]
fn result_equals_direct_deserialize() {
    let step = DeserializeStep::new(JsonSerializer);
    for text in ["null", "42", "\"hola\"", "{\"x\":[1,2,3]}", "[{\"a\":{}}]"] {
        assert_eq!(step.run(text).unwrap(), JsonSerializer.deserialize(text).unwrap());
    }
}

#[test]
fn oversize_input_is_not_revalidated() {
    let text = format!("\"{}\"", "a".repeat(MAX_SERIALIZED_BYTES * 4));
    let value = DeserializeStep::new(JsonSerializer).run(&text).unwrap();
    assert_eq!(value.as_str().map(str::len), Some(MAX_SERIALIZED_BYTES * 4));
}

#[test]
fn output_is_returned_as_is() {
    // Un serializer que ignora el texto y devuelve un objeto grande.
    struct Constant;
    impl Serializer for Constant {
        fn serialize(&self, _data: &Value) -> Result<Value, SerializerError> {
            Ok(json!(""))
        }
        fn deserialize(&self, _text: &str) -> Result<Value, SerializerError> {
            Ok(json!({ "blob": "b".repeat(3000) }))
        }
    }
    let out = DeserializeStep::new(Constant).run("").unwrap();
    assert_eq!(out["blob"].as_str().map(str::len), Some(3000));
}

#[test]
fn typed_output_mismatch_is_a_decoding_failure() {
    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct Job {
        id: u32,
    }
    let step = DeserializeStep::new(JsonSerializer);
    assert_eq!(step.run_as::<Job>("{\"id\":3}").unwrap(), Job { id: 3 });
    assert!(matches!(step.run_as::<Job>("{\"id\":\"x\"}"), Err(SerializerError::Decode(_))));
}
