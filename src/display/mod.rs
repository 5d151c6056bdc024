//! Console output: verbosity levels and colored text.
//!
//! | Submodule | Responsibility |
//! |-----------|----------------|
//! | [`level`] | Process-wide display level and the `displayout!` / `display!` / `displaylevel!` macros. |
//! | [`color`] | [`ColorScheme`] roles and the [`Painter`] that writes colored text to any `io::Write`. |

pub mod color;
pub mod level;

pub use color::{ColorScheme, Painter, Style};
pub use level::{display_level, set_display_level};
