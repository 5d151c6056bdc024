//! Boolean parameter: a flag that may optionally carry an explicit value.

use crate::error::ParamError;
use crate::param::{impl_param_plumbing, Param, ParamMeta, TypedParam};
use crate::util::load_boolean;

#[derive(Debug, Clone)]
pub struct BoolParam {
    meta: ParamMeta,
    value: bool,
    parsed: bool,
}

impl BoolParam {
    pub fn new(arg: impl Into<String>, required: bool) -> Self {
        BoolParam {
            meta: ParamMeta::new(arg, required, false),
            value: false,
            parsed: false,
        }
    }
}

impl Param for BoolParam {
    impl_param_plumbing!();

    fn type_name(&self) -> String {
        "bool".to_owned()
    }

    fn value_string(&self) -> String {
        self.value.to_string()
    }

    fn is_set(&self) -> bool {
        self.parsed
    }

    /// A bare switch sets the flag; an explicit value must be a boolean word
    /// or `0` / `1`.
    fn parse(&mut self, arg: Option<&str>) -> Result<(), ParamError> {
        let Some(arg) = arg else {
            self.value = true;
            self.parsed = true;
            return Ok(());
        };
        match load_boolean(arg) {
            Some(v) => {
                self.value = v;
                self.parsed = true;
                Ok(())
            }
            None => {
                self.parsed = false;
                Err(self.meta.invalid(arg, "true|false|on|off|yes|no|1|0"))
            }
        }
    }
}

impl TypedParam for BoolParam {
    type Value = bool;

    fn value(&self) -> Option<bool> {
        self.parsed.then_some(self.value)
    }
}
