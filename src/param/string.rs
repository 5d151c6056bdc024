//! String parameter.

use crate::error::ParamError;
use crate::param::{copy_terminated, impl_param_plumbing, Param, ParamMeta, TypedParam};

/// A parameter holding a string. An empty string counts as unset.
#[derive(Debug, Clone)]
pub struct StringParam {
    pub(crate) meta: ParamMeta,
    pub(crate) value: String,
}

impl StringParam {
    pub fn new(arg: impl Into<String>, required: bool) -> Self {
        StringParam {
            meta: ParamMeta::new(arg, required, true),
            value: String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Copies the value into `buf` as a zero-terminated byte string,
    /// truncating if needed. Returns the number of bytes written.
    pub fn copy_to_buf(&self, buf: &mut [u8]) -> usize {
        copy_terminated(self.value.as_bytes(), buf)
    }
}

impl Param for StringParam {
    impl_param_plumbing!();

    fn type_name(&self) -> String {
        "string".to_owned()
    }

    fn value_string(&self) -> String {
        format!("\"{}\"", self.value)
    }

    fn is_set(&self) -> bool {
        !self.value.is_empty()
    }

    fn parse(&mut self, arg: Option<&str>) -> Result<(), ParamError> {
        let arg = arg.ok_or_else(|| self.meta.missing_value())?;
        self.value = arg.to_owned();
        Ok(())
    }
}

impl TypedParam for StringParam {
    type Value = String;

    fn value(&self) -> Option<String> {
        self.is_set().then(|| self.value.clone())
    }
}
