// Integration tests for parameter descriptions and keyword matching.

use paramkit::param::{description, switch_of};
use paramkit::{BoolParam, EnumParam, IntBase, IntParam, Param, StringParam};

#[test]
fn description_of_value_taking_param() {
    let mut p = IntParam::new("pdec", true, IntBase::Dec);
    p.meta_mut().info = "Sample decimal Integer param".into();
    assert_eq!(switch_of(p.name()), "/pdec");
    assert_eq!(
        description(&p, false),
        " <integer: dec>\n\t : Sample decimal Integer param\n"
    );
}

#[test]
fn extended_info_only_when_asked() {
    let mut p = StringParam::new("out", false);
    p.meta_mut().info = "Output file".into();
    p.meta_mut().ext_info = "Created if missing".into();
    assert_eq!(p.info(false), "Output file");
    assert_eq!(p.info(true), "Output file\nCreated if missing");
}

#[test]
fn name_similarity() {
    let p = BoolParam::new("verbose", false);
    assert!(p.is_name_similar("verb"));
    assert!(p.is_name_similar("verbsoe"));
    assert!(!p.is_name_similar("quiet"));
}

#[test]
fn keyword_in_description_and_type() {
    let mut p = IntParam::new("count", false, IntBase::Hex);
    p.meta_mut().info = "Number of Retries".into();
    assert!(p.is_keyword_in_description("retries"));
    assert!(!p.is_keyword_in_description("timeout"));
    assert!(p.is_keyword_in_type("hex"));

    let e = EnumParam::new("mode", "compression_mode", false);
    assert!(e.is_keyword_in_type("compression"));
    assert!(!e.is_keyword_in_type("integer"));
}

#[test]
fn inactive_param_flag() {
    let mut p = BoolParam::new("legacy", false);
    assert!(p.is_active());
    p.meta_mut().active = false;
    assert!(!p.is_active());
}
