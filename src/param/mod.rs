//! Parameter definitions.
//!
//! Every parameter implements [`Param`]: it carries its [`ParamMeta`]
//! (token, description, required/active flags) and knows how to convert a
//! raw argument token into its typed value. The concrete variants live in
//! the submodules:
//!
//! | Type              | Value          | Takes a value |
//! |-------------------|----------------|---------------|
//! | [`BoolParam`]     | `bool`         | optional      |
//! | [`IntParam`]      | `u64`          | yes           |
//! | [`StringParam`]   | `String`       | yes           |
//! | [`WStringParam`]  | `Vec<u16>`     | yes           |
//! | [`EnumParam`]     | `i32`          | yes           |
//! | [`StringListParam`] / [`IntListParam`] | delimited list | yes |

/// Implements the `meta` / `as_any` plumbing for a struct with a `meta` field.
macro_rules! impl_param_plumbing {
    () => {
        fn meta(&self) -> &$crate::param::ParamMeta {
            &self.meta
        }

        fn meta_mut(&mut self) -> &mut $crate::param::ParamMeta {
            &mut self.meta
        }

        fn as_any(&self) -> &dyn ::std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
            self
        }
    };
}
pub(crate) use impl_param_plumbing;

pub mod boolean;
pub mod enumeration;
pub mod int;
pub mod list;
pub mod string;
pub mod wstring;

use std::any::Any;
use std::fmt;

use crate::config::PARAM_SWITCH1;
use crate::error::ParamError;
use crate::util::{has_keyword, is_string_similar};

pub use boolean::BoolParam;
pub use enumeration::EnumParam;
pub use int::{IntBase, IntParam};
pub use list::{IntListParam, StringListParam};
pub use string::StringParam;
pub use wstring::WStringParam;

/// Attributes shared by every parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamMeta {
    /// Unique token, without the switch prefix.
    pub arg: String,
    /// Overrides the variant's type name in help output when set.
    pub type_desc: Option<String>,
    pub info: String,
    pub ext_info: String,
    pub required: bool,
    /// The switch must be followed by a value token.
    pub takes_value: bool,
    pub active: bool,
}

impl ParamMeta {
    pub fn new(arg: impl Into<String>, required: bool, takes_value: bool) -> Self {
        ParamMeta {
            arg: arg.into(),
            type_desc: None,
            info: String::new(),
            ext_info: String::new(),
            required,
            takes_value,
            active: true,
        }
    }

    /// Builds the conversion-failure error for this parameter.
    pub fn invalid(&self, value: &str, expected: impl Into<String>) -> ParamError {
        ParamError::InvalidValue {
            param: self.arg.clone(),
            value: value.to_owned(),
            expected: expected.into(),
        }
    }

    pub fn missing_value(&self) -> ParamError {
        ParamError::MissingValue(self.arg.clone())
    }
}

/// A single declared command-line parameter.
pub trait Param: Any + fmt::Debug {
    fn meta(&self) -> &ParamMeta;

    fn meta_mut(&mut self) -> &mut ParamMeta;

    /// Display form of the value type, e.g. `integer: dec`.
    fn type_name(&self) -> String;

    /// Display form of the current value.
    fn value_string(&self) -> String;

    /// Whether a valid value has been filled.
    fn is_set(&self) -> bool;

    /// Converts the raw token into the typed value. `None` means the switch
    /// was given without a value.
    fn parse(&mut self, arg: Option<&str>) -> Result<(), ParamError>;

    /// Converts a UTF-16 token. Invalid code units are replaced.
    fn parse_wide(&mut self, arg: &[u16]) -> Result<(), ParamError> {
        let s = String::from_utf16_lossy(arg);
        self.parse(Some(&s))
    }

    fn extended_info(&self) -> String {
        self.meta().ext_info.clone()
    }

    /// The description, followed by the extended info on a new line when
    /// `extended` is set and there is any.
    fn info(&self, extended: bool) -> String {
        let mut s = self.meta().info.clone();
        if extended {
            let ext = self.extended_info();
            if !ext.is_empty() {
                s.push('\n');
                s.push_str(&ext);
            }
        }
        s
    }

    fn is_name_similar(&self, filter: &str) -> bool {
        is_string_similar(&self.meta().arg, filter).is_similar()
    }

    fn is_keyword_in_type(&self, keyword: &str) -> bool {
        has_keyword(&self.type_name(), keyword).is_similar()
    }

    fn is_keyword_in_description(&self, keyword: &str) -> bool {
        let meta = self.meta();
        has_keyword(&meta.info, keyword).is_similar()
            || has_keyword(&meta.ext_info, keyword).is_similar()
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn name(&self) -> &str {
        &self.meta().arg
    }

    fn is_required(&self) -> bool {
        self.meta().required
    }

    fn is_active(&self) -> bool {
        self.meta().active
    }

    fn takes_value(&self) -> bool {
        self.meta().takes_value
    }
}

/// A parameter whose value can be read back in its native type.
pub trait TypedParam: Param {
    type Value: Clone;

    /// The parsed value, or `None` when unset.
    fn value(&self) -> Option<Self::Value>;
}

/// The switch as the user types it: `/name`.
pub fn switch_of(name: &str) -> String {
    format!("{PARAM_SWITCH1}{name}")
}

/// The formatted description printed after a switch in help output:
/// the value type when the parameter takes one, then the info on its own
/// indented line.
pub fn description(param: &dyn Param, extended: bool) -> String {
    let mut s = String::new();
    if param.takes_value() {
        let ty = param
            .meta()
            .type_desc
            .clone()
            .unwrap_or_else(|| param.type_name());
        s.push_str(&format!(" <{ty}>"));
    }
    s.push_str("\n\t");
    s.push_str(" : ");
    s.push_str(&param.info(extended));
    s.push('\n');
    s
}

/// Copies `value` into `buf`, truncating to leave room for a terminating
/// zero. Returns the number of units written, terminator included.
pub(crate) fn copy_terminated<T: Copy + Default>(value: &[T], buf: &mut [T]) -> usize {
    if buf.is_empty() {
        return 0;
    }
    let len = value.len().min(buf.len() - 1);
    buf[..len].copy_from_slice(&value[..len]);
    buf[len] = T::default();
    len + 1
}
