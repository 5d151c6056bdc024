//! Integer parameter.

use crate::error::ParamError;
use crate::param::{impl_param_plumbing, Param, ParamMeta, TypedParam};
use crate::util::{is_dec, is_hex, is_hex_with_prefix, load_int};

/// Accepted notation for an [`IntParam`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntBase {
    /// Decimal, or hexadecimal with a `0x` prefix.
    #[default]
    Any,
    /// Decimal only.
    Dec,
    /// Hexadecimal, with or without the `0x` prefix.
    Hex,
}

/// A parameter holding an unsigned integer.
#[derive(Debug, Clone)]
pub struct IntParam {
    meta: ParamMeta,
    pub base: IntBase,
    value: Option<u64>,
}

impl IntParam {
    pub fn new(arg: impl Into<String>, required: bool, base: IntBase) -> Self {
        IntParam {
            meta: ParamMeta::new(arg, required, true),
            base,
            value: None,
        }
    }

    /// Overwrites the value without parsing.
    pub fn set_value(&mut self, value: u64) {
        self.value = Some(value);
    }

    fn is_valid_number(&self, arg: &str) -> bool {
        match self.base {
            IntBase::Any => is_hex_with_prefix(arg) || is_dec(arg),
            IntBase::Hex => is_hex(arg) || is_hex_with_prefix(arg),
            IntBase::Dec => is_dec(arg),
        }
    }
}

impl Param for IntParam {
    impl_param_plumbing!();

    fn type_name(&self) -> String {
        match self.base {
            IntBase::Hex => "integer: hex".to_owned(),
            IntBase::Dec => "integer: dec".to_owned(),
            IntBase::Any => "integer: decimal, or hexadecimal with '0x' prefix".to_owned(),
        }
    }

    fn value_string(&self) -> String {
        match (self.value, self.base) {
            (None, _) => "(undefined)".to_owned(),
            (Some(v), IntBase::Hex) => format!("{v:#x}"),
            (Some(v), _) => v.to_string(),
        }
    }

    fn is_set(&self) -> bool {
        self.value.is_some()
    }

    fn parse(&mut self, arg: Option<&str>) -> Result<(), ParamError> {
        let arg = arg.ok_or_else(|| self.meta.missing_value())?;
        if !self.is_valid_number(arg) {
            return Err(self.meta.invalid(arg, self.type_name()));
        }
        let hex = match self.base {
            IntBase::Hex => true,
            IntBase::Dec => false,
            IntBase::Any => is_hex_with_prefix(arg),
        };
        let value = load_int(arg, hex)
            .ok_or_else(|| self.meta.invalid(arg, "a value fitting in 64 bits"))?;
        self.value = Some(value);
        Ok(())
    }
}

impl TypedParam for IntParam {
    type Value = u64;

    fn value(&self) -> Option<u64> {
        self.value
    }
}
