// Integration tests for help output: listings, groups, filters, colors and
// the Info section.

use crossterm::style::{Color, SetForegroundColor};
use crossterm::QueueableCommand;
use paramkit::display::{ColorScheme, Style};
use paramkit::{
    BoolParam, ColorChoice, EnumParam, IntBase, IntParam, Params, StringParam,
};

fn grouped() -> Params {
    let mut params = Params::new("").with_color_choice(ColorChoice::Never);
    params.add_param(IntParam::new("count", true, IntBase::Dec)).unwrap();
    params.set_info("count", "How many", "").unwrap();
    params.add_param(BoolParam::new("verbose", false)).unwrap();
    params.set_info("verbose", "Chatty output", "").unwrap();
    params.add_param(StringParam::new("out", false)).unwrap();
    params.set_info("out", "Output file", "").unwrap();
    params.add_group("io");
    params.add_param_to_group("out", "io").unwrap();
    params
}

fn info(params: &Params, highlight: bool, filter: &str, extended: bool) -> String {
    let mut buf = Vec::new();
    params.write_info(&mut buf, highlight, filter, extended).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn brief_listing_with_groups() {
    let params = grouped();
    assert_eq!(
        info(&params, false, "", false),
        "---\n\
         \nRequired:\n\
         /count <integer: dec>\n\t : How many\n\
         \nOptional:\n\
         /verbose\n\t : Chatty output\n\
         \n---io---\n\
         /out <string>\n\t : Output file\n\
         \nInfo:\n\
         /help\n\t : Print complete help.\n\
         /help <string>\n\t : Print help about a given keyword.\n\
         /<param> ?\n\t : Print details of a given parameter.\n\
         ---\n"
    );
}

#[test]
fn filter_by_description() {
    let params = grouped();
    let text = info(&params, false, "file", false);
    assert!(text.contains("\n---io---\n/out <string>\n"));
    assert!(!text.contains("/verbose"));
    assert!(!text.contains("/count"));
    assert_eq!(text.matches("[...]").count(), 2);
}

#[test]
fn enum_options_in_extended_help() {
    let mut params = Params::new("").with_color_choice(ColorChoice::Never);
    let mut mode = EnumParam::new("mode", "mode_id", false);
    mode.add_named_enum_value(0, "fast", "No checks").add_enum_value(1, "Reserved");
    params.add_param(mode).unwrap();
    params.set_info("mode", "How to run", "").unwrap();
    let text = info(&params, false, "", true);
    assert!(text.contains("/mode <*mode_id>\n\t : How to run\n*mode_id:\n\t0 (fast) - No checks\n\t1 - Reserved\n"));
    assert!(text.contains("\t   Example: /mode ?\n"));
}

#[test]
fn help_keyword_searches_enum_options() {
    let mut params = Params::new("").with_color_choice(ColorChoice::Never);
    let mut mode = EnumParam::new("mode", "mode_id", false);
    mode.add_named_enum_value(0, "fast", "No checks");
    params.add_param(mode).unwrap();
    params.add_param(BoolParam::new("quiet", false)).unwrap();
    let mut buf = Vec::new();
    params.write_help(&mut buf, "checks", false).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("/mode <*mode_id>"));
    assert!(!text.contains("/quiet"));
}

#[test]
fn type_desc_overrides_type_name() {
    let mut params = grouped();
    params.set_type_desc("out", "path").unwrap();
    assert!(info(&params, false, "", false).contains("/out <path>\n"));
}

#[test]
fn banner_precedes_full_help() {
    let params = grouped().with_banner("Demo v1");
    let mut buf = Vec::new();
    params.write_help(&mut buf, "", false).unwrap();
    assert!(String::from_utf8(buf).unwrap().starts_with("Demo v1\n---\n"));
}

#[test]
fn filter_by_value_type() {
    let mut params = grouped();
    params.add_param(IntParam::new("addr", false, IntBase::Hex)).unwrap();
    params.set_info("addr", "Start address", "").unwrap();

    let text = info(&params, false, "string", false);
    assert!(text.contains("/out <string>\n"));
    assert!(!text.contains("/addr"));
    assert!(!text.contains("/verbose"));

    let text = info(&params, false, "hex", false);
    assert!(text.contains("/addr <integer: hex>\n"));
    assert!(!text.contains("/count"));
    assert!(!text.contains("/out"));
}

// ── Color roles ─────────────────────────────────────────────────────────────

fn distinct_scheme() -> ColorScheme {
    ColorScheme {
        error: Style::fg(Color::DarkRed),
        warning: Style::fg(Color::Red),
        highlighted: Style::fg(Color::White),
        header: Style::fg(Color::Yellow),
        separator: Style::fg(Color::DarkYellow),
        inactive: Style::fg(Color::DarkGrey),
        similar_name: Style::fg(Color::Magenta),
        similar_desc: Style::fg(Color::Cyan),
        hint: Style::fg(Color::Green),
    }
}

fn colored(params: Params) -> Params {
    params
        .with_color_choice(ColorChoice::Always)
        .with_color_scheme(distinct_scheme())
}

/// The foreground escape for `color` immediately followed by the switch.
fn painted(color: Color, name: &str) -> String {
    let mut buf = Vec::new();
    buf.queue(SetForegroundColor(color)).unwrap();
    format!("{}/{name}", String::from_utf8(buf).unwrap())
}

#[test]
fn plain_listing_uses_highlighted_color() {
    let text = info(&colored(grouped()), false, "", false);
    assert!(text.contains(&painted(Color::White, "count")));
    assert!(text.contains(&painted(Color::White, "verbose")));
    assert!(text.contains("---io---"));
}

#[test]
fn name_match_uses_similar_name_color() {
    let text = info(&colored(grouped()), false, "verbos", false);
    assert!(text.contains(&painted(Color::Magenta, "verbose")));
    assert!(!text.contains(&painted(Color::Cyan, "verbose")));
}

#[test]
fn description_match_uses_similar_desc_color() {
    let text = info(&colored(grouped()), false, "file", false);
    assert!(text.contains(&painted(Color::Cyan, "out")));
    assert!(!text.contains(&painted(Color::Magenta, "out")));
}

#[test]
fn missing_required_uses_warning_color() {
    let text = info(&colored(grouped()), true, "", false);
    assert!(text.contains(&painted(Color::Red, "count")));
    assert!(!text.contains("/verbose"));
}

#[test]
fn inactive_param_is_dimmed() {
    let mut params = colored(grouped());
    params.set_active("verbose", false).unwrap();
    let text = info(&params, false, "", false);
    assert!(text.contains(&painted(Color::DarkGrey, "verbose")));
    assert!(text.contains(&painted(Color::White, "count")));
}
