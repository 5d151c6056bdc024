// display/color.rs — Colored console output.
//
// Text is written through a `Painter`, which wraps any `io::Write` and either
// emits crossterm color commands around each painted span or writes the
// plain text, depending on whether colors were enabled for that output.

use std::io::{self, Write};

use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::QueueableCommand;

/// Foreground color with an optional background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Color,
    pub bg: Option<Color>,
}

impl Style {
    pub const fn fg(fg: Color) -> Self {
        Style { fg, bg: None }
    }

    pub const fn on(fg: Color, bg: Color) -> Self {
        Style { fg, bg: Some(bg) }
    }
}

/// The colors used for each role in help and diagnostic output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub error: Style,
    pub warning: Style,
    /// Parameter switches.
    pub highlighted: Style,
    /// `Required:` / `Optional:` / `Info:` section headers.
    pub header: Style,
    /// `---group---` separators.
    pub separator: Style,
    pub inactive: Style,
    /// Parameters whose name matched a help filter.
    pub similar_name: Style,
    /// Parameters whose description matched a help filter.
    pub similar_desc: Style,
    /// The run-with-help hint.
    pub hint: Style,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            error: Style::fg(Color::Red),
            warning: Style::fg(Color::Red),
            highlighted: Style::fg(Color::White),
            header: Style::fg(Color::Yellow),
            separator: Style::fg(Color::DarkYellow),
            inactive: Style::fg(Color::DarkGrey),
            similar_name: Style::on(Color::Magenta, Color::Black),
            similar_desc: Style::on(Color::Black, Color::Magenta),
            hint: Style::fg(Color::Yellow),
        }
    }
}

/// Writes plain and colored text to an underlying writer.
pub struct Painter<'a> {
    out: &'a mut dyn Write,
    colored: bool,
}

impl<'a> Painter<'a> {
    pub fn new(out: &'a mut dyn Write, colored: bool) -> Self {
        Painter { out, colored }
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Write `text` in the given style, restoring the default colors afterwards.
    pub fn paint(&mut self, style: Style, text: &str) -> io::Result<()> {
        if !self.colored {
            return self.out.write_all(text.as_bytes());
        }
        self.out.queue(SetForegroundColor(style.fg))?;
        if let Some(bg) = style.bg {
            self.out.queue(SetBackgroundColor(bg))?;
        }
        self.out.queue(Print(text))?.queue(ResetColor)?;
        Ok(())
    }

    /// Write `text` with the default colors.
    pub fn text(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }
}

impl Write for Painter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
