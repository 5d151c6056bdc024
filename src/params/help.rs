// params/help.rs — Help, banner, version and value listings.
//
// Every printer has a `write_*` form taking any writer and a `print_*` form
// writing to stdout. Colors follow the registry's `ColorChoice`; `Auto` only
// colors stdout when it is a terminal.

use std::io::{self, IsTerminal, Write};

use super::Params;
use crate::config::{INFO_SPACER, PARAM_HELP1, PARAM_HELP2, PARAM_SWITCH1, PARAM_VERSION, PARAM_VERSION2};
use crate::display::Painter;
use crate::group::Listing;
use crate::param::{description, switch_of, Param};

impl Params {
    fn with_stdout<F>(&self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut Painter<'_>) -> io::Result<()>,
    {
        let stdout = io::stdout();
        let colored = self.color.resolve(stdout.is_terminal());
        let mut lock = stdout.lock();
        let mut p = Painter::new(&mut lock, colored);
        f(&mut p)?;
        p.flush()
    }

    fn with_writer<W, F>(&self, out: &mut W, f: F) -> io::Result<()>
    where
        W: Write,
        F: FnOnce(&mut Painter<'_>) -> io::Result<()>,
    {
        let mut p = Painter::new(out, self.color.resolve(false));
        f(&mut p)
    }

    // ── Values ──────────────────────────────────────────────────────────────

    /// Prints every filled parameter as `/<name>: <value>`.
    pub fn print(&self) -> io::Result<()> {
        self.with_stdout(|p| self.values_to(p))
    }

    pub fn write_values<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.with_writer(out, |p| self.values_to(p))
    }

    fn values_to(&self, p: &mut Painter<'_>) -> io::Result<()> {
        for param in self.params.values().filter(|param| param.is_set()) {
            p.paint(self.scheme.highlighted, &switch_of(param.name()))?;
            p.text(&format!(": {}\n", param.value_string()))?;
        }
        Ok(())
    }

    // ── Parameter listing ───────────────────────────────────────────────────

    /// Prints the help listing.
    ///
    /// With `highlight_missing` only the unfilled required parameters are
    /// listed; with a non-empty `filter` only the parameters similar to it.
    pub fn print_info(&self, highlight_missing: bool, filter: &str, extended: bool) -> io::Result<()> {
        self.with_stdout(|p| self.info_to(p, highlight_missing, filter, extended))
    }

    pub fn write_info<W: Write>(
        &self,
        out: &mut W,
        highlight_missing: bool,
        filter: &str,
        extended: bool,
    ) -> io::Result<()> {
        self.with_writer(out, |p| self.info_to(p, highlight_missing, filter, extended))
    }

    /// Short listing: every parameter, without extended descriptions.
    pub fn print_brief_info(&self) -> io::Result<()> {
        self.print_info(false, "", false)
    }

    pub(crate) fn info_to(
        &self,
        p: &mut Painter<'_>,
        highlight_missing: bool,
        filter: &str,
        extended: bool,
    ) -> io::Result<()> {
        p.text("---\n")?;
        for required in [true, false] {
            let listing = Listing {
                required,
                highlight_missing,
                filter,
                extended,
            };
            self.category_to(p, &listing)?;
        }
        self.info_section_to(p, extended && filter.is_empty() && !highlight_missing)?;
        p.text("---\n")
    }

    /// One `Required:` or `Optional:` section, group by group. Returns the
    /// number of parameters printed.
    fn category_to(&self, p: &mut Painter<'_>, listing: &Listing<'_>) -> io::Result<usize> {
        if self.count_category(listing.required) == 0 {
            return Ok(0);
        }
        let header = if listing.required { "Required:" } else { "Optional:" };
        p.paint(self.scheme.header, &format!("\n{header}\n"))?;

        let everything = Listing {
            required: listing.required,
            ..Listing::default()
        };
        let mut printed = 0;
        let mut total = 0;
        for group in self.groups.values() {
            printed += group.print_group(p, &self.scheme, &self.params, true, listing)?;
            total += group.count_params(&self.params, &everything);
        }
        if printed < total {
            p.paint(self.scheme.inactive, "\n[...]\n")?;
        }
        Ok(printed)
    }

    /// The built-in help and version switches.
    fn info_section_to(&self, p: &mut Painter<'_>, extended: bool) -> io::Result<()> {
        let mut param_info = self.builtin.param_info.clone();
        if extended {
            if let Some(first) = self.params.keys().next() {
                param_info.meta_mut().ext_info =
                    format!("{INFO_SPACER}Example: {PARAM_SWITCH1}{first} {PARAM_HELP1}");
            }
        }
        p.paint(self.scheme.header, "\nInfo:\n")?;
        let mut entries: Vec<&dyn Param> = vec![
            &self.builtin.help as &dyn Param,
            &self.builtin.help_keyword,
            &param_info,
        ];
        if !self.version.is_empty() {
            entries.push(&self.builtin.version);
        }
        for entry in entries {
            p.paint(self.scheme.highlighted, &switch_of(entry.name()))?;
            p.text(&description(entry, extended))?;
        }
        Ok(())
    }

    // ── Help dispatch ───────────────────────────────────────────────────────

    /// Prints the help requested with `/help <arg>`.
    ///
    /// An empty `arg` prints the banner and the full listing; `?` or `help`
    /// prints the Info section; `version` describes the version switch; any
    /// other `arg` filters the listing.
    pub fn write_help<W: Write>(&self, out: &mut W, arg: &str, expand: bool) -> io::Result<()> {
        self.with_writer(out, |p| self.help_to(p, arg, expand))
    }

    pub(crate) fn help_to(&self, p: &mut Painter<'_>, arg: &str, expand: bool) -> io::Result<()> {
        if arg.is_empty() {
            self.banner_to(p)?;
            return self.info_to(p, false, "", expand);
        }
        if arg == PARAM_HELP1 || arg == PARAM_HELP2 {
            self.banner_to(p)?;
            return self.info_section_to(p, true);
        }
        if arg == PARAM_VERSION || arg == PARAM_VERSION2 {
            if self.version.is_empty() {
                return p.text("Application version is not set\n");
            }
            let version = &self.builtin.version;
            p.paint(self.scheme.highlighted, &switch_of(version.name()))?;
            return p.text(&description(version, true));
        }
        self.info_to(p, false, arg, expand)
    }

    // ── Banner and version ──────────────────────────────────────────────────

    pub fn print_banner(&self) -> io::Result<()> {
        self.with_stdout(|p| self.banner_to(p))
    }

    pub fn write_banner<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.with_writer(out, |p| self.banner_to(p))
    }

    fn banner_to(&self, p: &mut Painter<'_>) -> io::Result<()> {
        match &self.banner {
            Some(banner) => p.text(&format!("{banner}\n")),
            None => Ok(()),
        }
    }

    /// Prints the version string; nothing when none was configured.
    pub fn print_version_info(&self) -> io::Result<()> {
        self.with_stdout(|p| self.version_to(p))
    }

    pub fn write_version_info<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.with_writer(out, |p| self.version_to(p))
    }

    pub(crate) fn version_to(&self, p: &mut Painter<'_>) -> io::Result<()> {
        if self.version.is_empty() {
            return Ok(());
        }
        p.text(&format!("{}\n", self.version))
    }
}
