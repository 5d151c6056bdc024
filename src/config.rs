// config.rs — Compile-time configuration constants and environment overrides.
//
// Switch characters, reserved help/version tokens and the defaults used when
// no environment override is present.

/// First switch character: `/param`.
pub const PARAM_SWITCH1: char = '/';

/// Second switch character: `-param` (and `--param`).
pub const PARAM_SWITCH2: char = '-';

/// Short help token: `/?`.
pub const PARAM_HELP1: &str = "?";

/// Long help token: `/help`, optionally followed by a keyword.
pub const PARAM_HELP2: &str = "help";

/// Version tokens, honoured only when the registry carries a version string.
pub const PARAM_VERSION: &str = "version";
pub const PARAM_VERSION2: &str = "ver";

/// Indentation used in front of the generated `Example:` line.
pub const INFO_SPACER: &str = "\t   ";

// Default display level.
// 0 = silent; 1 = errors only; 2 = normal; 3 = informative; 4 = verbose.
// Can be overridden by the PARAMKIT_DISPLAY_LEVEL environment variable.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

/// Highest meaningful display level.
pub const DISPLAY_LEVEL_MAX: u32 = 4;

pub const ENV_DISPLAY_LEVEL: &str = "PARAMKIT_DISPLAY_LEVEL";
pub const ENV_COLOR: &str = "PARAMKIT_COLOR";
pub const ENV_NO_COLOR: &str = "NO_COLOR";

/// When colored output is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Colored only when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve the choice against the kind of output being written.
    pub fn resolve(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Read the display level from `PARAMKIT_DISPLAY_LEVEL`.
///
/// Falls back to [`DISPLAY_LEVEL_DEFAULT`] when unset or invalid.
pub fn init_display_level() -> u32 {
    init_display_level_from(std::env::var(ENV_DISPLAY_LEVEL).ok().as_deref())
}

/// Testable core of [`init_display_level`].
///
/// Values above [`DISPLAY_LEVEL_MAX`] are clamped.
pub fn init_display_level_from(env_val: Option<&str>) -> u32 {
    match env_val.map(str::trim) {
        Some(s) if !s.is_empty() => match s.parse::<u32>() {
            Ok(level) => level.min(DISPLAY_LEVEL_MAX),
            Err(_) => {
                eprintln!(
                    "Ignore environment variable setting {}={}: not a valid unsigned value ",
                    ENV_DISPLAY_LEVEL, s
                );
                DISPLAY_LEVEL_DEFAULT
            }
        },
        _ => DISPLAY_LEVEL_DEFAULT,
    }
}

/// Read the color choice from `PARAMKIT_COLOR` and `NO_COLOR`.
pub fn init_color_choice() -> ColorChoice {
    init_color_choice_from(
        std::env::var(ENV_COLOR).ok().as_deref(),
        std::env::var_os(ENV_NO_COLOR).is_some(),
    )
}

/// Testable core of [`init_color_choice`].
///
/// An explicit `PARAMKIT_COLOR` wins over `NO_COLOR`.
pub fn init_color_choice_from(color: Option<&str>, no_color: bool) -> ColorChoice {
    match color.map(|c| c.trim().to_ascii_lowercase()).as_deref() {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        Some("auto") => ColorChoice::Auto,
        _ if no_color => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
