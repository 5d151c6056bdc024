//! Named groups of parameters, used to structure help output.

use std::collections::{BTreeMap, BTreeSet};
use std::io;

use crate::display::{ColorScheme, Painter, Style};
use crate::param::{description, switch_of, Param};

/// Which parameters a help listing shows.
#[derive(Debug, Clone, Copy, Default)]
pub struct Listing<'a> {
    /// List the required parameters (`true`) or the optional ones (`false`).
    pub required: bool,
    /// Only list required parameters that are still missing.
    pub highlight_missing: bool,
    /// When non-empty, only list parameters whose name is similar to the
    /// filter or whose description or value type contains it.
    pub filter: &'a str,
    /// Include extended descriptions.
    pub extended: bool,
}

/// A named set of parameter tokens. The parameters themselves are owned by
/// the registry; the group only refers to them by token, in token order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamGroup {
    name: String,
    params: BTreeSet<String>,
}

enum Match {
    Plain,
    Name,
    Description,
}

impl ParamGroup {
    pub fn new(name: impl Into<String>) -> Self {
        ParamGroup {
            name: name.into(),
            params: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_param(&self, param: &str) -> bool {
        self.params.contains(param)
    }

    /// Returns `false` if the parameter was already a member.
    pub fn add_param(&mut self, param: impl Into<String>) -> bool {
        self.params.insert(param.into())
    }

    pub fn remove_param(&mut self, param: &str) -> bool {
        self.params.remove(param)
    }

    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    fn select(param: &dyn Param, listing: &Listing<'_>) -> Option<Match> {
        if param.is_required() != listing.required {
            return None;
        }
        if listing.highlight_missing && !(param.is_required() && !param.is_set()) {
            return None;
        }
        if listing.filter.is_empty() {
            return Some(Match::Plain);
        }
        if param.is_name_similar(listing.filter) {
            Some(Match::Name)
        } else if param.is_keyword_in_description(listing.filter)
            || param.is_keyword_in_type(listing.filter)
        {
            Some(Match::Description)
        } else {
            None
        }
    }

    fn members<'p>(
        &'p self,
        params: &'p BTreeMap<String, Box<dyn Param>>,
    ) -> impl Iterator<Item = &'p dyn Param> + 'p {
        self.params
            .iter()
            .filter_map(move |name| params.get(name).map(|p| p.as_ref()))
    }

    /// Number of members that `print_group` would print for `listing`.
    pub fn count_params(
        &self,
        params: &BTreeMap<String, Box<dyn Param>>,
        listing: &Listing<'_>,
    ) -> usize {
        self.members(params)
            .filter(|p| Self::select(*p, listing).is_some())
            .count()
    }

    /// Prints the selected members, preceded by the group name when
    /// `print_name` is set and the group is named. Returns how many
    /// parameters were printed.
    pub fn print_group(
        &self,
        out: &mut Painter<'_>,
        scheme: &ColorScheme,
        params: &BTreeMap<String, Box<dyn Param>>,
        print_name: bool,
        listing: &Listing<'_>,
    ) -> io::Result<usize> {
        if self.count_params(params, listing) == 0 {
            return Ok(0);
        }
        if print_name && !self.name.is_empty() {
            out.paint(scheme.separator, &format!("\n---{}---\n", self.name))?;
        }
        let mut printed = 0;
        for param in self.members(params) {
            let Some(matched) = Self::select(param, listing) else {
                continue;
            };
            let style: Style = if !param.is_active() {
                scheme.inactive
            } else {
                match matched {
                    Match::Name => scheme.similar_name,
                    Match::Description => scheme.similar_desc,
                    Match::Plain if listing.highlight_missing => scheme.warning,
                    Match::Plain => scheme.highlighted,
                }
            };
            out.paint(style, &switch_of(param.name()))?;
            out.text(&description(param, listing.extended))?;
            printed += 1;
        }
        Ok(printed)
    }
}
