//! The parameter registry.
//!
//! [`Params`] owns every declared parameter (keyed by token) and every
//! group (keyed by name). The typical call sequence is:
//!
//! 1. register parameters with [`Params::add_param`] and describe them with
//!    [`Params::set_info`], optionally sorting them into groups;
//! 2. call one of the parse entry points ([`Params::parse_env`],
//!    [`Params::parse_from`], [`Params::parse_with`]);
//! 3. read the typed values back with [`Params::value_of`] or [`Params::get`].
//!
//! The parse loop lives in [`parse`], the help printers in [`help`].

pub mod help;
pub mod parse;

use std::collections::{BTreeMap, HashMap};

use crate::config::{ColorChoice, PARAM_HELP1, PARAM_HELP2, PARAM_VERSION, PARAM_VERSION2};
use crate::display::ColorScheme;
use crate::error::ParamError;
use crate::group::ParamGroup;
use crate::param::{BoolParam, IntParam, Param, StringParam, TypedParam};

/// Name of the group every parameter joins on registration.
const GENERAL_GROUP: &str = "";

/// How a successful parse run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStatus {
    /// All arguments were consumed and every required parameter is filled.
    Ready,
    /// Help or version text was printed; the caller should exit without
    /// doing any work.
    Exit,
}

/// The built-in entries listed in the `Info:` section of the help.
#[derive(Debug, Clone)]
pub(crate) struct BuiltinHelp {
    pub(crate) help: BoolParam,
    pub(crate) help_keyword: StringParam,
    pub(crate) param_info: BoolParam,
    pub(crate) version: BoolParam,
}

impl BuiltinHelp {
    fn new() -> Self {
        let mut help = BoolParam::new(PARAM_HELP2, false);
        help.meta_mut().info = "Print complete help.".to_owned();
        let mut help_keyword = StringParam::new(PARAM_HELP2, false);
        help_keyword.meta_mut().info = "Print help about a given keyword.".to_owned();
        let mut param_info = BoolParam::new(format!("<param> {PARAM_HELP1}"), false);
        param_info.meta_mut().info = "Print details of a given parameter.".to_owned();
        let mut version = BoolParam::new(PARAM_VERSION, false);
        version.meta_mut().info = "Print version info.".to_owned();
        BuiltinHelp {
            help,
            help_keyword,
            param_info,
            version,
        }
    }
}

/// Stores, parses and describes a set of parameters, possibly divided into
/// groups.
#[derive(Debug)]
pub struct Params {
    version: String,
    banner: Option<String>,
    params: BTreeMap<String, Box<dyn Param>>,
    groups: BTreeMap<String, ParamGroup>,
    param_to_group: HashMap<String, String>,
    redundant: Vec<String>,
    parsed: bool,
    color: ColorChoice,
    scheme: ColorScheme,
    builtin: BuiltinHelp,
}

impl Default for Params {
    fn default() -> Self {
        Params::new("")
    }
}

impl Params {
    /// Creates an empty registry. The `version` and `ver` switches are only
    /// recognised when `version` is non-empty.
    ///
    /// Colors start as [`ColorChoice::Auto`]; the environment is not read.
    /// Binaries that honour `PARAMKIT_COLOR` pass
    /// [`init_color_choice`](crate::config::init_color_choice) to
    /// [`with_color_choice`](Self::with_color_choice).
    pub fn new(version: impl Into<String>) -> Self {
        Params {
            version: version.into(),
            banner: None,
            params: BTreeMap::new(),
            groups: BTreeMap::new(),
            param_to_group: HashMap::new(),
            redundant: Vec::new(),
            parsed: false,
            color: ColorChoice::Auto,
            scheme: ColorScheme::default(),
            builtin: BuiltinHelp::new(),
        }
    }

    /// Text printed above the complete help.
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }

    pub fn with_color_choice(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn color_choice(&self) -> ColorChoice {
        self.color
    }

    pub fn set_color_choice(&mut self, color: ColorChoice) {
        self.color = color;
    }

    fn is_reserved(&self, name: &str) -> bool {
        name == PARAM_HELP1
            || name == PARAM_HELP2
            || (!self.version.is_empty() && (name == PARAM_VERSION || name == PARAM_VERSION2))
    }

    // ── Registration ────────────────────────────────────────────────────────

    /// Registers a parameter and adds it to the general group.
    pub fn add_param<P: Param>(&mut self, param: P) -> Result<(), ParamError> {
        self.add_boxed_param(Box::new(param))
    }

    pub fn add_boxed_param(&mut self, param: Box<dyn Param>) -> Result<(), ParamError> {
        let name = param.name().to_owned();
        if name.is_empty() || self.params.contains_key(&name) || self.is_reserved(&name) {
            return Err(ParamError::DuplicateParam(name));
        }
        self.params.insert(name.clone(), param);
        self.add_group(GENERAL_GROUP);
        self.add_param_to_group(&name, GENERAL_GROUP)
    }

    /// Creates an empty group. Returns `false` if the name is taken.
    pub fn add_group(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.groups.contains_key(&name) {
            return false;
        }
        self.groups.insert(name.clone(), ParamGroup::new(name));
        true
    }

    /// Moves a registered parameter into an existing group.
    pub fn add_param_to_group(&mut self, param: &str, group: &str) -> Result<(), ParamError> {
        if !self.params.contains_key(param) {
            return Err(ParamError::NotRegistered(param.to_owned()));
        }
        if !self.groups.contains_key(group) {
            return Err(ParamError::NoSuchGroup(group.to_owned()));
        }
        if let Some(current) = self.param_to_group.remove(param) {
            if let Some(g) = self.groups.get_mut(&current) {
                g.remove_param(param);
            }
        }
        if let Some(g) = self.groups.get_mut(group) {
            g.add_param(param);
        }
        self.param_to_group.insert(param.to_owned(), group.to_owned());
        Ok(())
    }

    /// Sets the basic and extended description of a parameter.
    pub fn set_info(
        &mut self,
        param: &str,
        info: impl Into<String>,
        ext_info: impl Into<String>,
    ) -> Result<(), ParamError> {
        let meta = self.meta_mut(param)?;
        meta.info = info.into();
        meta.ext_info = ext_info.into();
        Ok(())
    }

    /// Overrides the type shown in help, e.g. `path` instead of `string`.
    pub fn set_type_desc(&mut self, param: &str, desc: impl Into<String>) -> Result<(), ParamError> {
        self.meta_mut(param)?.type_desc = Some(desc.into());
        Ok(())
    }

    /// Inactive parameters still parse, with a warning, and are not
    /// counted as missing when required.
    pub fn set_active(&mut self, param: &str, active: bool) -> Result<(), ParamError> {
        self.meta_mut(param)?.active = active;
        Ok(())
    }

    fn meta_mut(&mut self, param: &str) -> Result<&mut crate::param::ParamMeta, ParamError> {
        self.params
            .get_mut(param)
            .map(|p| p.meta_mut())
            .ok_or_else(|| ParamError::NotRegistered(param.to_owned()))
    }

    // ── Lookup ──────────────────────────────────────────────────────────────

    pub fn param(&self, name: &str) -> Option<&dyn Param> {
        self.params.get(name).map(|p| p.as_ref())
    }

    /// All parameters in token order.
    pub fn params(&self) -> impl Iterator<Item = &dyn Param> {
        self.params.values().map(|p| p.as_ref())
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// The parameter with the given token, if it is of type `P`.
    pub fn get<P: Param>(&self, name: &str) -> Option<&P> {
        self.params.get(name)?.as_any().downcast_ref::<P>()
    }

    pub fn get_mut<P: Param>(&mut self, name: &str) -> Option<&mut P> {
        self.params.get_mut(name)?.as_any_mut().downcast_mut::<P>()
    }

    /// The parsed value of a parameter of type `P`; `None` if it does not
    /// exist, has another type or is unset.
    pub fn value_of<P: TypedParam>(&self, name: &str) -> Option<P::Value> {
        self.get::<P>(name)?.value()
    }

    pub fn int_value(&self, name: &str) -> Option<u64> {
        self.value_of::<IntParam>(name)
    }

    /// Fills an integer parameter directly. Returns `false` if there is no
    /// [`IntParam`] with that token.
    pub fn set_int_value(&mut self, name: &str, value: u64) -> bool {
        match self.get_mut::<IntParam>(name) {
            Some(p) => {
                p.set_value(value);
                true
            }
            None => false,
        }
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.params.get(name).is_some_and(|p| p.is_set())
    }

    /// Tokens of the active required parameters that are not filled.
    pub fn missing_required(&self) -> Vec<String> {
        self.params
            .values()
            .filter(|p| p.is_required() && p.is_active() && !p.is_set())
            .map(|p| p.name().to_owned())
            .collect()
    }

    pub fn has_required_filled(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// Non-switch arguments that were not consumed as a value.
    pub fn redundant_args(&self) -> &[String] {
        &self.redundant
    }

    // ── Groups ──────────────────────────────────────────────────────────────

    pub fn group(&self, name: &str) -> Option<&ParamGroup> {
        self.groups.get(name)
    }

    /// All groups in name order; the general group, named `""`, comes first.
    pub fn groups(&self) -> impl Iterator<Item = &ParamGroup> {
        self.groups.values()
    }

    pub fn group_of(&self, param: &str) -> Option<&str> {
        self.param_to_group.get(param).map(String::as_str)
    }

    // ── Counting ────────────────────────────────────────────────────────────

    /// Number of parameters in the required (`true`) or optional category.
    pub(crate) fn count_category(&self, required: bool) -> usize {
        self.params
            .values()
            .filter(|p| p.is_required() == required)
            .count()
    }

    pub(crate) fn count_filled(&self, required: bool) -> usize {
        self.params
            .values()
            .filter(|p| p.is_required() == required && p.is_set())
            .count()
    }
}
