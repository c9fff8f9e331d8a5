use super::*;
use crate::param::MultiValueMode;

fn search_model() -> RequestModel {
    RequestModel::builder("https://example.org/search")
        .param(ParamSpec::constant("format", "json"))
        .param(ParamSpec::simple("q"))
        .param(ParamSpec::repeated("id"))
        .build()
        .unwrap()
}

#[test]
fn test_empty_model_url_is_base_url() {
    let model = RequestModel::new("https://example.org", vec![], Vec::new()).unwrap();
    assert_eq!(model.query_string().unwrap(), "");
    assert_eq!(model.url().unwrap(), "https://example.org");
}

#[test]
fn test_optional_params_unset_render_nothing() {
    let model = RequestModel::builder("https://example.org/api")
        .param(ParamSpec::simple("a"))
        .param(ParamSpec::delimited("b", ","))
        .build()
        .unwrap();

    assert_eq!(model.query_string().unwrap(), "");
    assert_eq!(model.url().unwrap(), "https://example.org/api");
}

#[test]
fn test_constant_only() {
    let model = search_model();
    assert_eq!(model.query_string().unwrap(), "format=json");
    assert_eq!(model.url().unwrap(), "https://example.org/search?format=json");
}

#[test]
fn test_declaration_order_is_preserved() {
    let mut model = search_model();
    // Set in reverse order of declaration
    model.set_field("id", vec![3, 1]).unwrap();
    model.set_field("q", "cats").unwrap();

    assert_eq!(model.query_string().unwrap(), "format=json&q=cats&id=3&id=1");

    let swapped = RequestModel::builder("https://example.org/search")
        .param(ParamSpec::repeated("id"))
        .param(ParamSpec::simple("q"))
        .field("q", "cats")
        .field("id", vec![3, 1])
        .build()
        .unwrap();
    assert_eq!(swapped.query_string().unwrap(), "id=3&id=1&q=cats");
}

#[test]
fn test_values_are_form_encoded() {
    let mut model = search_model();
    model.set_field("q", "hello world & more/stuff").unwrap();

    assert_eq!(
        model.query_string().unwrap(),
        "format=json&q=hello+world+%26+more%2Fstuff"
    );
}

#[test]
fn test_delimiter_is_encoded_in_query() {
    let model = RequestModel::builder("https://example.org")
        .param(ParamSpec::multi("id", MultiValueMode::Delimited(",".to_string())))
        .field("id", vec![1, 2, 3])
        .build()
        .unwrap();

    assert_eq!(model.pairs().unwrap()[0].value, "1,2,3");
    assert_eq!(model.query_string().unwrap(), "id=1%2C2%2C3");
}

#[test]
fn test_url_joins_base_and_query() {
    let mut model = search_model();
    model.set_field("q", "x").unwrap();
    let query = model.query_string().unwrap();
    assert_eq!(model.url().unwrap(), format!("{}?{}", model.base_url(), query));
}

#[test]
fn test_unknown_field_at_construction() {
    let result = RequestModel::builder("https://example.org")
        .param(ParamSpec::simple("q"))
        .field("nope", "x")
        .build();

    assert!(matches!(result, Err(QueryError::UnknownParameter(name)) if name == "nope"));
}

#[test]
fn test_unknown_field_leaves_model_unchanged() {
    let mut model = search_model();
    model.set_field("q", "cats").unwrap();
    let before = model.fields().clone();

    let err = model.set_field("missing", "value").unwrap_err();
    assert!(matches!(err, QueryError::UnknownParameter(ref name) if name == "missing"));
    assert_eq!(model.fields(), &before);
}

#[test]
fn test_duplicate_spec_names_rejected() {
    let result = RequestModel::builder("https://example.org")
        .param(ParamSpec::simple("q"))
        .param(ParamSpec::repeated("q"))
        .build();

    assert!(matches!(result, Err(QueryError::DuplicateParameter(name)) if name == "q"));
}

#[test]
fn test_missing_required_surfaces_at_render_time() {
    let model = RequestModel::builder("https://example.org")
        .param(ParamSpec::simple("q").required())
        .build()
        .unwrap();

    assert!(matches!(
        model.url(),
        Err(QueryError::MissingRequiredParameter(name)) if name == "q"
    ));
}

#[test]
fn test_clear_field() {
    let mut model = search_model();
    model.set_field("q", "cats").unwrap();

    let previous = model.clear_field("q").unwrap();
    assert_eq!(previous, Some(ParamValue::from("cats")));
    assert!(model.field("q").is_none());
    assert!(model.clear_field("other").is_err());
}

#[test]
fn test_clone_owns_its_fields() {
    let mut original = search_model();
    original.set_field("q", "cats").unwrap();

    let mut copy = original.clone();
    copy.set_field("q", "dogs").unwrap();

    assert_eq!(original.field("q"), Some(&ParamValue::from("cats")));
    assert_eq!(copy.field("q"), Some(&ParamValue::from("dogs")));
}
