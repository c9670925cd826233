use serde_json::json;
use wireflow::{AppConfig, AppError, SerializerError, WirePipeline, MAX_SERIALIZED_BYTES};

#[test]
fn default_config_builds_a_json_pipeline() {
    let pipeline = WirePipeline::from_config(&AppConfig::default()).expect("json pipeline");
    let v = json!({"x": [1, 2, 3]});
    assert_eq!(pipeline.roundtrip(&v).unwrap(), v);
    assert_eq!(pipeline.serialize.run(&v).unwrap(), "{\"x\":[1,2,3]}");
}

#[test]
fn canonical_pipeline_sorts_keys() {
    let pipeline = WirePipeline::from_name("canonical").unwrap();
    assert_eq!(pipeline.serialize.run(&json!({"b": 1, "a": 2})).unwrap(), "{\"a\":2,\"b\":1}");
}

#[test]
fn oversize_value_is_rejected_before_deserialize() {
    let pipeline = WirePipeline::from_name("json").unwrap();
    let v = json!({ "text": "ñ".repeat(MAX_SERIALIZED_BYTES / 2) });
    let err = pipeline.roundtrip(&v).unwrap_err();
    assert!(matches!(err, AppError::Step(SerializerError::SizeViolation { .. })), "got {err:?}");
}

#[test]
fn unknown_serializer_name_is_a_config_error() {
    assert!(matches!(WirePipeline::from_name("yaml"), Err(AppError::Config(_))));
}
