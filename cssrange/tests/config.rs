use cssrange::{MapperConfig, MapperError, RangeMapper, RangeToken, ResolvedRange, SourceType};
use serde_json::json;

fn base() -> serde_json::Value {
    json!({
        "targetRangeMin": 3,
        "targetRangeMax": 8,
        "targetUnits": "px",
        "targetId": "some-element-with-an-id",
        "targetParams": ["marginBottom", "marginTop"],
        "sourceType": "windowInnerWidth",
        "targetElse": 0,
        "invert": false,
        "mediaQueryRange": ["xs", "xl"]
    })
}

#[test]
fn parses_js_style_params() {
    let cfg = MapperConfig::from_json_value(base()).unwrap();
    assert_eq!(cfg.target_id, "some-element-with-an-id");
    assert_eq!(cfg.source_type, SourceType::WindowInnerWidth);
    assert_eq!(cfg.media_query_range, vec![RangeToken::from("xs"), RangeToken::from("xl")]);
    let m = RangeMapper::new(cfg).unwrap();
    assert_eq!(m.range(), ResolvedRange { low: 0.0, high: 6400.0 });
    assert_eq!(m.properties(), ["margin-bottom", "margin-top"]);
    assert_eq!(m.value_at(3200.0), "5.5px");
    assert_eq!(m.value_at(6401.0), "0px");
}

#[test]
fn optional_fields_default() {
    let mut v = base();
    let o = v.as_object_mut().unwrap();
    o.remove("invert");
    o.remove("sourceType");
    o.remove("targetUnits");
    let cfg = MapperConfig::from_json_value(v).unwrap();
    assert!(!cfg.invert);
    assert_eq!(cfg.target_units, "");
}

#[test]
fn numeric_pair_from_json() {
    let mut v = base();
    v["mediaQueryRange"] = json!([1000, 300]);
    let m = RangeMapper::from_json_str(&v.to_string()).unwrap();
    assert_eq!(m.range(), ResolvedRange { low: 300.0, high: 1000.0 });
}

#[test]
fn unknown_source_type_is_a_config_error() {
    let mut v = base();
    v["sourceType"] = json!("scrollY");
    let err = MapperConfig::from_json_value(v).unwrap_err();
    assert!(matches!(err, MapperError::Configuration { field: "sourceType", .. }));
}

#[test]
fn missing_required_field_is_a_config_error() {
    let mut v = base();
    v.as_object_mut().unwrap().remove("targetId");
    let err = MapperConfig::from_json_value(v).unwrap_err();
    assert!(matches!(err, MapperError::Configuration { field: "targetId", .. }));
    assert_eq!(err.code(), "config");

    let mut v = base();
    v["targetElse"] = json!(null);
    let err = MapperConfig::from_json_value(v).unwrap_err();
    assert!(matches!(err, MapperError::Configuration { field: "targetElse", .. }));
}

#[test]
fn mistyped_field_is_a_config_error() {
    let mut v = base();
    v["targetRangeMax"] = json!("8px");
    let err = MapperConfig::from_json_value(v).unwrap_err();
    assert!(matches!(err, MapperError::Configuration { field: "targetRangeMax", .. }));

    let mut v = base();
    v["targetParams"] = json!("marginTop");
    let err = MapperConfig::from_json_value(v).unwrap_err();
    assert!(matches!(err, MapperError::Configuration { field: "targetParams", .. }));
}

#[test]
fn non_object_params_are_invalid_params() {
    for v in [json!(42), json!(null), json!(["xs"])] {
        let err = MapperConfig::from_json_value(v).unwrap_err();
        assert!(matches!(err, MapperError::Params(_)));
        assert_eq!(err.code(), "invalid_params");
    }
    let err = MapperConfig::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, MapperError::Json(_)));
}

#[test]
fn malformed_breakpoint_tokens_degrade_to_full_range() {
    for range in [json!(["xs", null]), json!([true]), json!(["md", {"a": 1}])] {
        let mut v = base();
        v["mediaQueryRange"] = range;
        let m = RangeMapper::new(MapperConfig::from_json_value(v).unwrap()).unwrap();
        assert_eq!(m.range(), ResolvedRange::full());
        assert!(!m.unrecognized_tokens().is_empty());
    }
}

#[test]
fn stray_non_finite_number_in_token_list_is_unrecognized() {
    let mut cfg = MapperConfig::from_json_value(base()).unwrap();
    cfg.media_query_range = vec![RangeToken::from("xs"), RangeToken::Number(f64::NAN), RangeToken::from("md")];
    let m = RangeMapper::new(cfg).unwrap();
    assert_eq!(m.range(), ResolvedRange::full());
    assert_eq!(m.unrecognized_tokens(), ["NaN"]);
}

#[test]
fn empty_id_and_params_are_config_errors() {
    let mut v = base();
    v["targetId"] = json!("  ");
    let err = RangeMapper::new(MapperConfig::from_json_value(v).unwrap()).unwrap_err();
    assert!(matches!(err, MapperError::Configuration { field: "targetId", .. }));

    let mut v = base();
    v["targetParams"] = json!([]);
    let err = RangeMapper::new(MapperConfig::from_json_value(v).unwrap()).unwrap_err();
    assert!(matches!(err, MapperError::Configuration { field: "targetParams", .. }));

    let mut v = base();
    v["targetParams"] = json!(["width", ""]);
    let err = RangeMapper::new(MapperConfig::from_json_value(v).unwrap()).unwrap_err();
    assert_eq!(err.code(), "config");
}

#[test]
fn non_finite_numbers_are_config_errors() {
    let mut cfg = MapperConfig::from_json_value(base()).unwrap();
    cfg.target_range_max = f64::INFINITY;
    let err = RangeMapper::new(cfg).unwrap_err();
    assert!(matches!(err, MapperError::Configuration { field: "targetRangeMax", .. }));

    let mut cfg = MapperConfig::from_json_value(base()).unwrap();
    cfg.media_query_range = vec![RangeToken::Number(f64::NAN), RangeToken::Number(10.0)];
    let err = RangeMapper::new(cfg).unwrap_err();
    assert!(matches!(err, MapperError::Configuration { field: "mediaQueryRange", .. }));
}

#[test]
fn zero_width_range_is_rejected() {
    let mut v = base();
    v["mediaQueryRange"] = json!([500, 500]);
    let err = RangeMapper::new(MapperConfig::from_json_value(v).unwrap()).unwrap_err();
    match err {
        MapperError::DegenerateRange { low, high } => {
            assert_eq!(low, 500.0);
            assert_eq!(high, 500.0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unrecognized_tokens_are_reported_not_rejected() {
    let mut v = base();
    v["mediaQueryRange"] = json!(["sm", "all"]);
    let m = RangeMapper::new(MapperConfig::from_json_value(v).unwrap()).unwrap();
    assert_eq!(m.range(), ResolvedRange::full());
    assert_eq!(m.unrecognized_tokens(), ["all"]);
}
