// params/parse.rs — The argument parse loop.
//
// Arguments are walked left to right. Switches (`/name`, `-name`, `--name`)
// are matched against the registry and consume the following token as their
// value when needed; anything else is a redundant argument. Help and version
// switches short-circuit the run.

use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::io::{self, IsTerminal, Write};

use super::{ParseStatus, Params};
use crate::config::{
    PARAM_HELP1, PARAM_HELP2, PARAM_SWITCH1, PARAM_SWITCH2, PARAM_VERSION, PARAM_VERSION2,
};
use crate::display::{display_level, Painter};
use crate::displaylevel;
use crate::error::ParamError;
use crate::param::{description, switch_of, Param};

/// A token is a switch when it is longer than one character and starts with
/// one of the switch characters.
pub fn is_switch(token: &str) -> bool {
    token.chars().count() > 1 && token.starts_with([PARAM_SWITCH1, PARAM_SWITCH2])
}

/// Strips `/`, `-` or `--` from a switch. Other tokens are returned unchanged.
pub fn skip_switch_prefix(token: &str) -> &str {
    if token.len() > 2 && token.starts_with("--") {
        return &token[2..];
    }
    token
        .strip_prefix([PARAM_SWITCH1, PARAM_SWITCH2])
        .unwrap_or(token)
}

#[cfg(windows)]
fn parse_os(param: &mut dyn Param, value: &OsStr) -> Result<(), ParamError> {
    use std::os::windows::ffi::OsStrExt;
    let wide: Vec<u16> = value.encode_wide().collect();
    param.parse_wide(&wide)
}

#[cfg(not(windows))]
fn parse_os(param: &mut dyn Param, value: &OsStr) -> Result<(), ParamError> {
    param.parse(Some(&value.to_string_lossy()))
}

impl Params {
    /// Parses the process arguments, skipping the program name.
    pub fn parse_env(&mut self) -> Result<ParseStatus, ParamError> {
        self.parse_from(std::env::args_os().skip(1))
    }

    /// Parses `args` (program name excluded), writing help and diagnostics
    /// to stdout.
    pub fn parse_from<I, S>(&mut self, args: I) -> Result<ParseStatus, ParamError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let stdout = io::stdout();
        let is_terminal = stdout.is_terminal();
        let mut lock = stdout.lock();
        let status = self.run(args, &mut lock, is_terminal);
        lock.flush()?;
        status
    }

    /// Parses `args` (program name excluded), writing help and diagnostics
    /// to `out`. Colors are only used with [`ColorChoice::Always`].
    ///
    /// [`ColorChoice::Always`]: crate::config::ColorChoice::Always
    pub fn parse_with<I, S, W>(&mut self, args: I, out: &mut W) -> Result<ParseStatus, ParamError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
        W: Write,
    {
        self.run(args, out, false)
    }

    fn run<I, S>(
        &mut self,
        args: I,
        out: &mut dyn Write,
        is_terminal: bool,
    ) -> Result<ParseStatus, ParamError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        if self.parsed {
            return Err(ParamError::AlreadyParsed);
        }
        self.parsed = true;

        let args: Vec<OsString> = args.into_iter().map(|a| a.as_ref().to_owned()).collect();
        let scheme = self.scheme;
        let mut p = Painter::new(out, self.color.resolve(is_terminal));
        let mut seen: HashSet<String> = HashSet::new();
        let mut help_requested = false;

        let mut i = 0;
        while i < args.len() {
            let token = args[i].to_string_lossy().into_owned();
            i += 1;
            if !is_switch(&token) {
                if display_level() >= 1 {
                    p.paint(scheme.warning, "Redundant argument: ")?;
                    p.text(&format!("{token}\n"))?;
                }
                self.redundant.push(token);
                continue;
            }
            let name = skip_switch_prefix(&token);

            if name == PARAM_HELP1 || name == PARAM_HELP2 {
                let keyword = args
                    .get(i)
                    .map(|a| a.to_string_lossy())
                    .filter(|next| name == PARAM_HELP2 && !is_switch(next));
                match keyword {
                    Some(keyword) => self.help_to(&mut p, &keyword, true)?,
                    None => self.help_to(&mut p, "", name == PARAM_HELP2)?,
                }
                return Ok(ParseStatus::Exit);
            }
            if !self.version.is_empty() && (name == PARAM_VERSION || name == PARAM_VERSION2) {
                self.version_to(&mut p)?;
                return Ok(ParseStatus::Exit);
            }

            let (takes_value, active) = match self.params.get(name) {
                Some(param) => (param.takes_value(), param.is_active()),
                None => {
                    if display_level() >= 1 {
                        p.paint(scheme.warning, "Invalid parameter: ")?;
                        p.text(&format!("{name}\n"))?;
                        p.paint(scheme.highlighted, "Similar parameters:\n")?;
                        self.info_to(&mut p, false, name, true)?;
                    }
                    return Err(ParamError::UnknownParam(name.to_owned()));
                }
            };
            if !seen.insert(name.to_owned()) {
                if display_level() >= 1 {
                    p.paint(scheme.warning, "Parameter given more than once: ")?;
                    p.text(&format!("{name}\n"))?;
                }
                return Err(ParamError::Repeated(name.to_owned()));
            }
            if !active && display_level() >= 1 {
                p.paint(scheme.warning, &format!("WARNING: chosen inactive parameter: {name}\n"))?;
            }

            let value = args
                .get(i)
                .filter(|next| takes_value || !is_switch(&next.to_string_lossy()));
            let Some(value) = value else {
                if takes_value {
                    if display_level() >= 1 {
                        self.param_help_to(&mut p, name)?;
                    }
                    return Err(ParamError::MissingValue(name.to_owned()));
                }
                if let Some(param) = self.params.get_mut(name) {
                    param.parse(None)?;
                    displaylevel!(4, "{} : {}\n", switch_of(name), param.value_string());
                }
                continue;
            };
            i += 1;

            if value == PARAM_HELP1 {
                help_requested = true;
                self.param_help_to(&mut p, name)?;
                continue;
            }
            let Some(param) = self.params.get_mut(name) else {
                continue;
            };
            if let Err(err) = parse_os(&mut **param, value) {
                if display_level() >= 1 {
                    p.paint(scheme.warning, "Parsing the parameter failed. Correct options:\n")?;
                    self.param_help_to(&mut p, name)?;
                }
                return Err(err);
            }
            displaylevel!(4, "{} : {}\n", switch_of(name), param.value_string());
        }

        if help_requested {
            return Ok(ParseStatus::Exit);
        }
        let missing = self.missing_required();
        if !missing.is_empty() {
            if display_level() >= 1 {
                p.paint(scheme.warning, "Missing required parameters:\n")?;
                self.info_to(&mut p, true, "", true)?;
            }
            return Err(ParamError::MissingRequired(missing));
        }
        if self.count_category(true) == 0 && self.count_filled(false) == 0 && display_level() >= 2 {
            p.paint(
                scheme.hint,
                &format!(
                    "Run with parameter {PARAM_SWITCH1}{PARAM_HELP1} or {PARAM_SWITCH1}{PARAM_HELP2} to see the options...\n"
                ),
            )?;
        }
        Ok(ParseStatus::Ready)
    }

    /// The switch of one parameter followed by its extended description.
    pub(crate) fn param_help_to(&self, p: &mut Painter<'_>, name: &str) -> io::Result<()> {
        let Some(param) = self.params.get(name) else {
            return Ok(());
        };
        p.paint(self.scheme.warning, &switch_of(name))?;
        p.text(&description(param.as_ref(), true))
    }
}
