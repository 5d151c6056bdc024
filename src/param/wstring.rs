//! Wide string parameter: the value is kept as UTF-16 code units, ready to
//! hand to APIs that expect wide characters.

use crate::error::ParamError;
use crate::param::{copy_terminated, impl_param_plumbing, Param, ParamMeta, TypedParam};

#[derive(Debug, Clone)]
pub struct WStringParam {
    meta: ParamMeta,
    value: Vec<u16>,
}

impl WStringParam {
    pub fn new(arg: impl Into<String>, required: bool) -> Self {
        WStringParam {
            meta: ParamMeta::new(arg, required, true),
            value: Vec::new(),
        }
    }

    pub fn as_wide(&self) -> &[u16] {
        &self.value
    }

    /// The value decoded back to a `String`, replacing unpaired surrogates.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.value)
    }

    /// Copies the value into `buf` as a zero-terminated wide string,
    /// truncating if needed. Returns the number of units written.
    pub fn copy_to_buf(&self, buf: &mut [u16]) -> usize {
        copy_terminated(&self.value, buf)
    }
}

impl Param for WStringParam {
    impl_param_plumbing!();

    fn type_name(&self) -> String {
        "wstring".to_owned()
    }

    fn value_string(&self) -> String {
        format!("\"{}\"", self.to_string_lossy())
    }

    fn is_set(&self) -> bool {
        !self.value.is_empty()
    }

    fn parse(&mut self, arg: Option<&str>) -> Result<(), ParamError> {
        let arg = arg.ok_or_else(|| self.meta.missing_value())?;
        self.value = arg.encode_utf16().collect();
        Ok(())
    }

    /// Stores the code units as given, without a round trip through UTF-8.
    fn parse_wide(&mut self, arg: &[u16]) -> Result<(), ParamError> {
        self.value = arg.to_vec();
        Ok(())
    }
}

impl TypedParam for WStringParam {
    type Value = Vec<u16>;

    fn value(&self) -> Option<Vec<u16>> {
        self.is_set().then(|| self.value.clone())
    }
}
