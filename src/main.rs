//! Binary entry point for `paramkit-demo`.
//!
//! Declares a small set of sample parameters, parses the process arguments,
//! then prints what was filled and the same values converted into a plain
//! struct.
//!
//! # Control flow
//!
//! 1. [`demo_params`] registers the parameters and sorts them into groups.
//! 2. [`Params::parse_env`] consumes the arguments. Help and version requests
//!    end the run with exit code 0.
//! 3. [`fill_values`] copies the typed values into [`DemoValues`].

use anyhow::{Context, Result};

use paramkit::config::init_color_choice;
use paramkit::display::level::init_from_env;
use paramkit::{
    display, displayout, BoolParam, EnumParam, IntBase, IntListParam, IntParam, ParamError,
    ParseStatus, Params, StringParam, WStringParam, PARAMKIT_VERSION_STRING,
};

const PARAM_DEC: &str = "pdec";
const PARAM_HEX: &str = "phex";
const PARAM_BOOL: &str = "pbool";
const PARAM_ASTRING: &str = "pastr";
const PARAM_WSTRING: &str = "pwstr";
const PARAM_MODE: &str = "pmode";
const PARAM_IDS: &str = "pids";

const GROUP_NUMBERS: &str = "numbers";
const GROUP_STRINGS: &str = "strings";

/// Capacity of the fixed string buffers, terminator included.
const MAX_BUF: usize = 50;

/// The parsed parameters, converted to plain fields.
struct DemoValues {
    dec: u32,
    hex: u32,
    flag: bool,
    mode: Option<i32>,
    ids: Vec<u64>,
    abuf: [u8; MAX_BUF],
    wbuf: [u16; MAX_BUF],
}

fn demo_params() -> Result<Params, ParamError> {
    let mut params = Params::new(PARAMKIT_VERSION_STRING)
        .with_banner(format!("paramkit demo v{PARAMKIT_VERSION_STRING}"))
        .with_color_choice(init_color_choice());

    params.add_param(IntParam::new(PARAM_DEC, true, IntBase::Dec))?;
    params.set_info(PARAM_DEC, "Sample decimal Integer param", "")?;

    params.add_param(IntParam::new(PARAM_HEX, true, IntBase::Hex))?;
    params.set_info(PARAM_HEX, "Sample hexadecimal Integer param", "")?;

    params.add_param(BoolParam::new(PARAM_BOOL, false))?;
    params.set_info(PARAM_BOOL, "Sample boolean param", "")?;

    params.add_param(StringParam::new(PARAM_ASTRING, false))?;
    params.set_info(PARAM_ASTRING, "Sample string param", "")?;

    params.add_param(WStringParam::new(PARAM_WSTRING, false))?;
    params.set_info(PARAM_WSTRING, "Sample wide string param", "")?;

    let mut mode = EnumParam::new(PARAM_MODE, "mode_id", false);
    mode.add_named_enum_value(0, "fast", "skip the consistency checks")
        .add_named_enum_value(1, "safe", "verify every step")
        .add_enum_value(2, "reserved");
    params.add_param(mode)?;
    params.set_info(PARAM_MODE, "Sample enum param", "Selects how the demo runs.")?;

    params.add_param(IntListParam::new(PARAM_IDS, false, ","))?;
    params.set_info(PARAM_IDS, "Sample list of numbers", "")?;

    params.add_group(GROUP_NUMBERS);
    params.add_group(GROUP_STRINGS);
    for name in [PARAM_DEC, PARAM_HEX, PARAM_IDS] {
        params.add_param_to_group(name, GROUP_NUMBERS)?;
    }
    for name in [PARAM_ASTRING, PARAM_WSTRING] {
        params.add_param_to_group(name, GROUP_STRINGS)?;
    }
    Ok(params)
}

fn to_u32(params: &Params, name: &str) -> Result<u32> {
    let value = params
        .int_value(name)
        .with_context(|| format!("/{name} is not set"))?;
    u32::try_from(value).with_context(|| format!("/{name} = {value:#x} does not fit in 32 bits"))
}

fn fill_values(params: &Params) -> Result<DemoValues> {
    let mut values = DemoValues {
        dec: to_u32(params, PARAM_DEC)?,
        hex: to_u32(params, PARAM_HEX)?,
        flag: params.value_of::<BoolParam>(PARAM_BOOL).unwrap_or(false),
        mode: params.value_of::<EnumParam>(PARAM_MODE),
        ids: params
            .value_of::<IntListParam>(PARAM_IDS)
            .map(|ids| ids.into_iter().collect())
            .unwrap_or_default(),
        abuf: [0; MAX_BUF],
        wbuf: [0; MAX_BUF],
    };
    if let Some(s) = params.get::<StringParam>(PARAM_ASTRING) {
        s.copy_to_buf(&mut values.abuf);
    }
    if let Some(s) = params.get::<WStringParam>(PARAM_WSTRING) {
        s.copy_to_buf(&mut values.wbuf);
    }
    Ok(values)
}

fn print_values(v: &DemoValues) {
    let alen = v.abuf.iter().position(|&c| c == 0).unwrap_or(MAX_BUF);
    let wlen = v.wbuf.iter().position(|&c| c == 0).unwrap_or(MAX_BUF);
    let ids: Vec<String> = v.ids.iter().map(u64::to_string).collect();

    displayout!("myDec:  {} = {:#x}\n", v.dec, v.dec);
    displayout!("myHex:  {:#x} = {}\n", v.hex, v.hex);
    displayout!("myBool: {}\n", v.flag);
    match v.mode {
        Some(mode) => displayout!("myMode: {mode}\n"),
        None => displayout!("myMode: (undefined)\n"),
    }
    displayout!("myIds:  [{}]\n", ids.join(", "));
    displayout!("myABuf:  {}\n", String::from_utf8_lossy(&v.abuf[..alen]));
    displayout!("myWBuf:  {}\n", String::from_utf16_lossy(&v.wbuf[..wlen]));
}

fn run() -> i32 {
    init_from_env();

    let mut params = match demo_params() {
        Ok(params) => params,
        Err(e) => {
            display!("Error: {e}\n");
            return e.exit_code();
        }
    };

    match params.parse_env() {
        Ok(ParseStatus::Exit) => return 0,
        Ok(ParseStatus::Ready) => {}
        Err(e) => {
            paramkit::displaylevel!(3, "Error: {e}\n");
            return e.exit_code();
        }
    }

    displayout!("\nPrinting the filled params:\n");
    if let Err(e) = params.print() {
        display!("Error: {e}\n");
        return 1;
    }

    let values = match fill_values(&params) {
        Ok(values) => values,
        Err(e) => {
            display!("Error: {e:#}\n");
            return 1;
        }
    };
    displayout!("\nConverted to the structure:\n");
    print_values(&values);
    displayout!("\n[+] All the required parameters filled!\n");
    0
}

fn main() {
    std::process::exit(run());
}
