//! Enumerated parameter: one of a fixed table of integer options, each with a
//! description and an optional symbolic name.

use std::collections::BTreeMap;

use crate::error::ParamError;
use crate::param::{impl_param_plumbing, Param, ParamMeta, TypedParam};
use crate::util::{get_number, has_keyword};

#[derive(Debug, Clone)]
pub struct EnumParam {
    meta: ParamMeta,
    enum_name: String,
    /// Option value → description. Defines which values are in scope.
    infos: BTreeMap<i32, String>,
    /// Option value → symbolic name, for the options that have one.
    names: BTreeMap<i32, String>,
    value: Option<i32>,
}

impl EnumParam {
    pub fn new(arg: impl Into<String>, enum_name: impl Into<String>, required: bool) -> Self {
        EnumParam {
            meta: ParamMeta::new(arg, required, true),
            enum_name: enum_name.into(),
            infos: BTreeMap::new(),
            names: BTreeMap::new(),
            value: None,
        }
    }

    /// Adds an option known only by its number.
    pub fn add_enum_value(&mut self, value: i32, info: impl Into<String>) -> &mut Self {
        self.infos.insert(value, info.into());
        self
    }

    /// Adds an option that can also be selected by `name`.
    pub fn add_named_enum_value(
        &mut self,
        value: i32,
        name: impl Into<String>,
        info: impl Into<String>,
    ) -> &mut Self {
        self.infos.insert(value, info.into());
        self.names.insert(value, name.into());
        self
    }

    pub fn enum_name(&self) -> &str {
        &self.enum_name
    }

    pub fn is_in_scope(&self, value: i32) -> bool {
        self.infos.contains_key(&value)
    }

    /// One line per option: `\t<value> (<name>) - <description>`.
    pub fn options_info(&self) -> String {
        let mut out = format!("{}:\n", self.type_name());
        let lines: Vec<String> = self
            .infos
            .iter()
            .map(|(value, info)| match self.names.get(value) {
                Some(name) => format!("\t{value} ({name}) - {info}"),
                None => format!("\t{value} - {info}"),
            })
            .collect();
        out.push_str(&lines.join("\n"));
        out
    }

    fn lookup_name(&self, name: &str) -> Option<i32> {
        self.names
            .iter()
            .find(|(_, n)| n.as_str() == name)
            .map(|(v, _)| *v)
    }
}

impl Param for EnumParam {
    impl_param_plumbing!();

    fn type_name(&self) -> String {
        format!("*{}", self.enum_name)
    }

    fn value_string(&self) -> String {
        match self.value() {
            None => "(undefined)".to_owned(),
            Some(v) => self.names.get(&v).cloned().unwrap_or_else(|| v.to_string()),
        }
    }

    fn is_set(&self) -> bool {
        self.value.is_some_and(|v| self.is_in_scope(v))
    }

    /// Symbolic names take precedence over numbers.
    fn parse(&mut self, arg: Option<&str>) -> Result<(), ParamError> {
        let arg = arg.ok_or_else(|| self.meta.missing_value())?;
        if let Some(v) = self.lookup_name(arg) {
            self.value = Some(v);
            return Ok(());
        }
        let v = get_number(arg)
            .and_then(|n| i32::try_from(n).ok())
            .filter(|v| self.is_in_scope(*v))
            .ok_or_else(|| self.meta.invalid(arg, self.options_info()))?;
        self.value = Some(v);
        Ok(())
    }

    fn extended_info(&self) -> String {
        let mut s = self.meta.ext_info.clone();
        if !s.is_empty() {
            s.push('\n');
        }
        s.push_str(&self.options_info());
        s
    }

    fn is_keyword_in_type(&self, keyword: &str) -> bool {
        has_keyword(&self.enum_name, keyword).is_similar()
    }

    /// Also searches the enum name and the descriptions of every option.
    fn is_keyword_in_description(&self, keyword: &str) -> bool {
        let meta = &self.meta;
        has_keyword(&meta.info, keyword).is_similar()
            || has_keyword(&meta.ext_info, keyword).is_similar()
            || self.is_keyword_in_type(keyword)
            || self
                .infos
                .values()
                .any(|info| has_keyword(info, keyword).is_similar())
    }
}

impl TypedParam for EnumParam {
    type Value = i32;

    fn value(&self) -> Option<i32> {
        self.value.filter(|v| self.is_in_scope(*v))
    }
}
