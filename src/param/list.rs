//! Delimited list parameters.

use std::collections::BTreeSet;

use crate::error::ParamError;
use crate::param::{Param, ParamMeta, StringParam, TypedParam};
use crate::util::{get_number, is_number, strip_to_list};

/// A string parameter whose value is a list split on `delimiter`.
#[derive(Debug, Clone)]
pub struct StringListParam {
    inner: StringParam,
    delimiter: String,
}

impl StringListParam {
    pub fn new(arg: impl Into<String>, required: bool, delimiter: impl Into<String>) -> Self {
        StringListParam {
            inner: StringParam::new(arg, required),
            delimiter: delimiter.into(),
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// The trimmed, non-empty elements, sorted and de-duplicated.
    pub fn elements(&self) -> BTreeSet<String> {
        strip_to_list(self.inner.as_str(), &self.delimiter)
    }
}

impl Param for StringListParam {
    fn meta(&self) -> &ParamMeta {
        &self.inner.meta
    }

    fn meta_mut(&mut self) -> &mut ParamMeta {
        &mut self.inner.meta
    }

    fn type_name(&self) -> String {
        format!("list: separated by '{}'", self.delimiter)
    }

    fn value_string(&self) -> String {
        self.inner.value_string()
    }

    fn is_set(&self) -> bool {
        self.inner.is_set()
    }

    fn parse(&mut self, arg: Option<&str>) -> Result<(), ParamError> {
        self.inner.parse(arg)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

impl TypedParam for StringListParam {
    type Value = BTreeSet<String>;

    fn value(&self) -> Option<BTreeSet<String>> {
        self.is_set().then(|| self.elements())
    }
}

/// A list whose every element is a decimal or `0x` hex number.
#[derive(Debug, Clone)]
pub struct IntListParam {
    list: StringListParam,
}

impl IntListParam {
    pub fn new(arg: impl Into<String>, required: bool, delimiter: impl Into<String>) -> Self {
        IntListParam {
            list: StringListParam::new(arg, required, delimiter),
        }
    }

    pub fn as_str(&self) -> &str {
        self.list.as_str()
    }

    /// The elements converted to numbers, sorted and de-duplicated.
    pub fn int_elements(&self) -> BTreeSet<u64> {
        self.list
            .elements()
            .iter()
            .filter_map(|e| get_number(e))
            .collect()
    }
}

impl Param for IntListParam {
    fn meta(&self) -> &ParamMeta {
        self.list.meta()
    }

    fn meta_mut(&mut self) -> &mut ParamMeta {
        self.list.meta_mut()
    }

    fn type_name(&self) -> String {
        format!("list: dec or hex, separated by '{}'", self.list.delimiter)
    }

    fn value_string(&self) -> String {
        self.list.value_string()
    }

    fn is_set(&self) -> bool {
        self.list.is_set()
    }

    /// Rejects the whole token if the list is empty or any element is not a
    /// number that fits in 64 bits.
    fn parse(&mut self, arg: Option<&str>) -> Result<(), ParamError> {
        let arg = arg.ok_or_else(|| self.meta().missing_value())?;
        let elements = strip_to_list(arg, &self.list.delimiter);
        let valid = !elements.is_empty()
            && elements
                .iter()
                .all(|e| is_number(e) && get_number(e).is_some());
        if !valid {
            return Err(self.meta().invalid(arg, self.type_name()));
        }
        self.list.parse(Some(arg))
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

impl TypedParam for IntListParam {
    type Value = BTreeSet<u64>;

    fn value(&self) -> Option<BTreeSet<u64>> {
        self.is_set().then(|| self.int_elements())
    }
}
