// display/level.rs — Display level global and diagnostic macros.
//
// Diagnostics printed while parsing (warnings about redundant or inactive
// arguments, the help hint, per-switch tracing) are gated by a single
// process-wide level, so that embedding programs can silence them.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::DISPLAY_LEVEL_DEFAULT;

// 0 = no output; 1 = errors only; 2 = normal; 3 = informative; 4 = verbose
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Initialise the display level from `PARAMKIT_DISPLAY_LEVEL`.
pub fn init_from_env() {
    set_display_level(crate::config::init_display_level());
}

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Print to stderr only when the display level is at least `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::display::level::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
