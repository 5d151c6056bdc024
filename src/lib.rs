// paramkit — typed command-line parameters: declare, parse, group, describe.
//
// A program registers its parameters in a `Params` registry, parses the
// process arguments once, then reads the typed values back. Help output is
// generated from the registered descriptions and can be filtered by keyword.

pub mod config;
pub mod display;
pub mod error;
pub mod group;
pub mod param;
pub mod params;
pub mod util;

pub const PARAMKIT_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use config::ColorChoice;
pub use error::ParamError;
pub use group::ParamGroup;
pub use param::{
    BoolParam, EnumParam, IntBase, IntListParam, IntParam, Param, ParamMeta, StringListParam,
    StringParam, TypedParam, WStringParam,
};
pub use params::{ParseStatus, Params};
