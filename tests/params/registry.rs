// Integration tests for the `Params` registry: registration, groups and
// typed access.

use paramkit::{
    BoolParam, ColorChoice, IntBase, IntParam, Param, ParamError, Params, StringParam,
};

fn registry() -> Params {
    let mut params = Params::new("1.0").with_color_choice(ColorChoice::Never);
    params.add_param(IntParam::new("count", true, IntBase::Any)).unwrap();
    params.add_param(StringParam::new("out", false)).unwrap();
    params.add_param(BoolParam::new("verbose", false)).unwrap();
    params
}

#[test]
fn params_are_kept_in_token_order() {
    let params = registry();
    let names: Vec<&str> = params.params().map(|p| p.name()).collect();
    assert_eq!(names, ["count", "out", "verbose"]);
    assert_eq!(params.len(), 3);
    assert!(params.param("out").is_some());
    assert!(params.param("in").is_none());
}

#[test]
fn duplicate_and_reserved_tokens() {
    let mut params = registry();
    assert_eq!(
        params.add_param(BoolParam::new("out", false)),
        Err(ParamError::DuplicateParam("out".into()))
    );
    assert_eq!(
        params.add_param(BoolParam::new("version", false)),
        Err(ParamError::DuplicateParam("version".into()))
    );
}

#[test]
fn descriptions_need_a_registered_param() {
    let mut params = registry();
    params.set_info("out", "Output file", "Overwritten if present").unwrap();
    params.set_type_desc("out", "path").unwrap();
    let out = params.param("out").unwrap();
    assert_eq!(out.info(true), "Output file\nOverwritten if present");
    assert_eq!(out.meta().type_desc.as_deref(), Some("path"));
    assert_eq!(
        params.set_info("nope", "x", ""),
        Err(ParamError::NotRegistered("nope".into()))
    );
    assert_eq!(
        params.set_active("nope", false),
        Err(ParamError::NotRegistered("nope".into()))
    );
}

#[test]
fn a_param_belongs_to_one_group() {
    let mut params = registry();
    assert!(params.add_group("output"));
    assert!(params.add_group("debug"));
    params.add_param_to_group("out", "output").unwrap();
    params.add_param_to_group("out", "debug").unwrap();
    assert_eq!(params.group_of("out"), Some("debug"));
    assert!(!params.group("output").unwrap().has_param("out"));
    let names: Vec<&str> = params.groups().map(|g| g.name()).collect();
    assert_eq!(names, ["", "debug", "output"]);
}

#[test]
fn typed_getters() {
    let mut params = registry();
    assert!(params.get::<StringParam>("out").is_some());
    assert!(params.get::<BoolParam>("out").is_none());
    if let Some(p) = params.get_mut::<StringParam>("out") {
        p.parse(Some("a.txt")).unwrap();
    }
    assert!(params.is_set("out"));
    assert_eq!(params.value_of::<StringParam>("out").as_deref(), Some("a.txt"));
    assert_eq!(params.value_of::<IntParam>("out"), None);
}

#[test]
fn required_tracking() {
    let mut params = registry();
    assert_eq!(params.missing_required(), ["count"]);
    assert!(!params.has_required_filled());
    assert!(params.set_int_value("count", 5));
    assert!(params.has_required_filled());
    assert!(!params.set_int_value("out", 5));
}

#[test]
fn values_listing() {
    let mut params = registry();
    params.set_int_value("count", 0x20);
    if let Some(p) = params.get_mut::<BoolParam>("verbose") {
        p.parse(None).unwrap();
    }
    let mut buf = Vec::new();
    params.write_values(&mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "/count: 32\n/verbose: true\n");
}
