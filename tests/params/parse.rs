// Integration tests for the parse loop (`Params::parse_with`).
//
// Output is captured in a Vec<u8> with colors disabled, so the diagnostics
// can be compared as plain text.

use paramkit::{
    BoolParam, ColorChoice, EnumParam, IntBase, IntListParam, IntParam, ParamError, ParseStatus,
    Params, StringParam, TypedParam, WStringParam,
};

fn demo() -> Params {
    let mut params = Params::new("").with_color_choice(ColorChoice::Never);
    params.add_param(IntParam::new("pdec", true, IntBase::Dec)).unwrap();
    params.set_info("pdec", "Sample decimal", "").unwrap();
    params.add_param(IntParam::new("phex", true, IntBase::Hex)).unwrap();
    params.set_info("phex", "Sample hexadecimal", "").unwrap();
    params.add_param(BoolParam::new("pbool", false)).unwrap();
    params.set_info("pbool", "Sample flag", "").unwrap();
    params.add_param(StringParam::new("pastr", false)).unwrap();
    params.set_info("pastr", "Sample text", "").unwrap();
    params
}

fn run(params: &mut Params, args: &[&str]) -> (Result<ParseStatus, ParamError>, String) {
    let mut out = Vec::new();
    let res = params.parse_with(args, &mut out);
    (res, String::from_utf8(out).unwrap())
}

// ─────────────────────────────────────────────────────────────────────────────
// Successful runs
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn fills_typed_values() {
    let mut params = demo();
    let (res, out) = run(&mut params, &["/pdec", "10", "-phex", "1f", "--pbool"]);
    assert_eq!(res, Ok(ParseStatus::Ready));
    assert_eq!(out, "");
    assert_eq!(params.int_value("pdec"), Some(10));
    assert_eq!(params.int_value("phex"), Some(0x1f));
    assert_eq!(params.value_of::<BoolParam>("pbool"), Some(true));
    assert!(params.has_required_filled());
}

#[test]
fn flag_does_not_swallow_the_next_switch() {
    let mut params = demo();
    let (res, _) = run(&mut params, &["/pbool", "/pdec", "1", "/phex", "2"]);
    assert_eq!(res, Ok(ParseStatus::Ready));
    assert_eq!(params.value_of::<BoolParam>("pbool"), Some(true));
    assert_eq!(params.int_value("pdec"), Some(1));
}

#[test]
fn flag_takes_an_explicit_value() {
    let mut params = demo();
    let (res, _) = run(&mut params, &["/pbool", "off", "/pdec", "1", "/phex", "2"]);
    assert_eq!(res, Ok(ParseStatus::Ready));
    assert_eq!(params.value_of::<BoolParam>("pbool"), Some(false));
}

#[test]
fn value_taking_param_consumes_a_dash_token() {
    let mut params = demo();
    let (res, _) = run(&mut params, &["/pastr", "-x", "/pdec", "1", "/phex", "2"]);
    assert_eq!(res, Ok(ParseStatus::Ready));
    assert_eq!(params.value_of::<StringParam>("pastr").as_deref(), Some("-x"));
}

#[test]
fn redundant_arguments_are_collected() {
    let mut params = demo();
    let (res, out) = run(&mut params, &["stray", "/pdec", "1", "/phex", "2", "-"]);
    assert_eq!(res, Ok(ParseStatus::Ready));
    assert_eq!(params.redundant_args(), ["stray", "-"]);
    assert_eq!(out, "Redundant argument: stray\nRedundant argument: -\n");
}

#[test]
fn inactive_param_warns_but_parses() {
    let mut params = demo();
    params.set_active("pbool", false).unwrap();
    let (res, out) = run(&mut params, &["/pbool", "/pdec", "1", "/phex", "2"]);
    assert_eq!(res, Ok(ParseStatus::Ready));
    assert_eq!(out, "WARNING: chosen inactive parameter: pbool\n");
    assert!(params.is_set("pbool"));
}

#[test]
fn hint_when_nothing_was_given() {
    let mut params = Params::new("").with_color_choice(ColorChoice::Never);
    params.add_param(BoolParam::new("quiet", false)).unwrap();
    let (res, out) = run(&mut params, &[]);
    assert_eq!(res, Ok(ParseStatus::Ready));
    assert_eq!(out, "Run with parameter /? or /help to see the options...\n");
}

#[test]
fn wide_enum_and_list_values() {
    let mut params = Params::new("").with_color_choice(ColorChoice::Never);
    params.add_param(WStringParam::new("pwstr", false)).unwrap();
    let mut mode = EnumParam::new("pmode", "mode_id", false);
    mode.add_named_enum_value(0, "fast", "Quick").add_named_enum_value(1, "safe", "Careful");
    params.add_param(mode).unwrap();
    params.add_param(IntListParam::new("pids", false, ",")).unwrap();

    let (res, _) = run(
        &mut params,
        &["/pwstr", "żółw", "/pmode", "safe", "/pids", "0x10,2"],
    );
    assert_eq!(res, Ok(ParseStatus::Ready));
    let wide: Vec<u16> = "żółw".encode_utf16().collect();
    assert_eq!(params.value_of::<WStringParam>("pwstr"), Some(wide));
    assert_eq!(params.value_of::<EnumParam>("pmode"), Some(1));
    let ids: Vec<u64> = params
        .get::<IntListParam>("pids")
        .map(|p| p.value().unwrap_or_default().into_iter().collect())
        .unwrap_or_default();
    assert_eq!(ids, [2, 16]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Help and version
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn short_help_exits() {
    let mut params = demo();
    let (res, out) = run(&mut params, &["/?"]);
    assert_eq!(res, Ok(ParseStatus::Exit));
    assert!(out.starts_with("---\n\nRequired:\n"));
    assert!(out.contains("/pastr <string>\n"));
    assert!(!out.contains("Example:"));
}

#[test]
fn long_help_is_extended() {
    let mut params = demo();
    let (res, out) = run(&mut params, &["--help"]);
    assert_eq!(res, Ok(ParseStatus::Exit));
    assert!(out.contains("\t   Example: /pastr ?\n"));
}

#[test]
fn help_with_keyword_filters() {
    let mut params = demo();
    let (res, out) = run(&mut params, &["/help", "pdec"]);
    assert_eq!(res, Ok(ParseStatus::Exit));
    assert!(out.contains("/pdec <integer: dec>"));
    assert!(!out.contains("/pbool"));
    assert!(!out.contains("/pastr"));
}

#[test]
fn help_help_prints_info_section_only() {
    let mut params = demo();
    let (res, out) = run(&mut params, &["/help", "help"]);
    assert_eq!(res, Ok(ParseStatus::Exit));
    assert!(out.starts_with("\nInfo:\n/help\n"));
    assert!(!out.contains("Required:"));
}

#[test]
fn param_question_mark_describes_it() {
    let mut params = demo();
    let (res, out) = run(&mut params, &["/pdec", "?"]);
    assert_eq!(res, Ok(ParseStatus::Exit));
    assert_eq!(out, "/pdec <integer: dec>\n\t : Sample decimal\n");
}

#[test]
fn version_switch_needs_a_version() {
    let mut params = Params::new("2.0").with_color_choice(ColorChoice::Never);
    let (res, out) = run(&mut params, &["/ver"]);
    assert_eq!(res, Ok(ParseStatus::Exit));
    assert_eq!(out, "2.0\n");

    let mut params = demo();
    let (res, _) = run(&mut params, &["/version"]);
    assert_eq!(res, Err(ParamError::UnknownParam("version".into())));
}

// ─────────────────────────────────────────────────────────────────────────────
// Failures
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn unknown_switch_suggests_similar() {
    let mut params = demo();
    let (res, out) = run(&mut params, &["/pdex", "1"]);
    assert_eq!(res, Err(ParamError::UnknownParam("pdex".into())));
    assert!(out.starts_with("Invalid parameter: pdex\nSimilar parameters:\n---\n"));
    assert!(out.contains("/pdec <integer: dec>"));
    assert!(!out.contains("/pastr"));
}

#[test]
fn missing_value_describes_the_param() {
    let mut params = demo();
    let (res, out) = run(&mut params, &["/phex", "2", "/pdec"]);
    assert_eq!(res, Err(ParamError::MissingValue("pdec".into())));
    assert_eq!(out, "/pdec <integer: dec>\n\t : Sample decimal\n");
}

#[test]
fn conversion_failure_shows_correct_options() {
    let mut params = demo();
    let (res, out) = run(&mut params, &["/pdec", "12a"]);
    assert_eq!(
        res,
        Err(ParamError::InvalidValue {
            param: "pdec".into(),
            value: "12a".into(),
            expected: "integer: dec".into(),
        })
    );
    assert_eq!(
        out,
        "Parsing the parameter failed. Correct options:\n/pdec <integer: dec>\n\t : Sample decimal\n"
    );
}

#[test]
fn missing_required_lists_only_the_missing() {
    let mut params = demo();
    let (res, out) = run(&mut params, &["/phex", "ff"]);
    assert_eq!(res, Err(ParamError::MissingRequired(vec!["pdec".into()])));
    assert!(out.starts_with("Missing required parameters:\n---\n\nRequired:\n/pdec"));
    assert!(!out.contains("/phex"));
    assert!(out.contains("\n[...]\n"));
}

#[test]
fn repeated_switch_is_rejected() {
    let mut params = demo();
    let (res, _) = run(&mut params, &["/pdec", "1", "-pdec", "2"]);
    assert_eq!(res, Err(ParamError::Repeated("pdec".into())));
    assert_eq!(params.int_value("pdec"), Some(1));
}

#[test]
fn parses_only_once() {
    let mut params = demo();
    let (first, _) = run(&mut params, &["/pdec", "1", "/phex", "2"]);
    assert_eq!(first, Ok(ParseStatus::Ready));
    let (second, out) = run(&mut params, &["/pdec", "3"]);
    assert_eq!(second, Err(ParamError::AlreadyParsed));
    assert_eq!(out, "");
    assert_eq!(params.int_value("pdec"), Some(1));
}
