#![no_main]
use libfuzzer_sys::fuzz_target;

use paramkit::{
    BoolParam, ColorChoice, EnumParam, IntBase, IntListParam, IntParam, ParamError, ParseStatus,
    Params, StringParam,
};

fn registry() -> Params {
    let mut params = Params::new("1.0").with_color_choice(ColorChoice::Never);
    let _ = params.add_param(IntParam::new("pdec", true, IntBase::Dec));
    let _ = params.add_param(IntParam::new("phex", false, IntBase::Hex));
    let _ = params.add_param(BoolParam::new("pbool", false));
    let _ = params.add_param(StringParam::new("pastr", false));
    let _ = params.add_param(IntListParam::new("pids", false, ","));
    let mut mode = EnumParam::new("pmode", "mode_id", false);
    mode.add_named_enum_value(0, "fast", "quick").add_enum_value(1, "slow");
    let _ = params.add_param(mode);
    params
}

fuzz_target!(|data: &[u8]| {
    // One argument per NUL-separated chunk.
    let text = String::from_utf8_lossy(data);
    let args: Vec<&str> = text.split('\0').collect();

    let mut params = registry();
    let mut sink = Vec::new();
    match params.parse_with(&args, &mut sink) {
        Ok(ParseStatus::Ready) => assert!(params.has_required_filled()),
        Ok(ParseStatus::Exit) => {}
        Err(ParamError::MissingRequired(names)) => assert_eq!(names, ["pdec"]),
        Err(e) => assert_eq!(e.exit_code(), 1, "unexpected error: {e}"),
    }
    // A registry parses once.
    assert_eq!(params.parse_with(&args, &mut sink), Err(ParamError::AlreadyParsed));
});
