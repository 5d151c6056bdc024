//! Errors reported while registering or parsing parameters.

use std::{fmt, io};

/// Everything that can go wrong while declaring or parsing parameters.
///
/// Parse errors are also reported to the user as formatted console messages
/// before being returned; the value lets the caller pick an exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// A switch that matches no registered parameter.
    UnknownParam(String),
    /// The parameter requires a value but none followed it.
    MissingValue(String),
    /// The value could not be converted to the parameter's type.
    InvalidValue {
        param: String,
        value: String,
        expected: String,
    },
    /// Required parameters that were not supplied, sorted by name.
    MissingRequired(Vec<String>),
    /// The same switch was given more than once.
    Repeated(String),
    /// The registry was already used for a parse run.
    AlreadyParsed,
    /// A parameter with this token is already registered.
    DuplicateParam(String),
    /// No parameter with this token is registered.
    NotRegistered(String),
    /// No group with this name exists.
    NoSuchGroup(String),
    /// Writing help or diagnostics failed.
    Output(String),
}

impl ParamError {
    /// Process exit code for this error: 1 for usage errors, 2 for
    /// registration errors made by the embedding program and output failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            ParamError::UnknownParam(_)
            | ParamError::MissingValue(_)
            | ParamError::InvalidValue { .. }
            | ParamError::MissingRequired(_)
            | ParamError::Repeated(_) => 1,
            ParamError::AlreadyParsed
            | ParamError::DuplicateParam(_)
            | ParamError::NotRegistered(_)
            | ParamError::NoSuchGroup(_)
            | ParamError::Output(_) => 2,
        }
    }
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::UnknownParam(p) => write!(f, "invalid parameter: {p}"),
            ParamError::MissingValue(p) => write!(f, "parameter {p} requires a value"),
            ParamError::InvalidValue {
                param,
                value,
                expected,
            } => write!(f, "invalid value for {param}: \"{value}\" (expected {expected})"),
            ParamError::MissingRequired(names) => {
                write!(f, "missing required parameters: {}", names.join(", "))
            }
            ParamError::Repeated(p) => write!(f, "parameter {p} given more than once"),
            ParamError::AlreadyParsed => f.write_str("parameters were already parsed"),
            ParamError::DuplicateParam(p) => write!(f, "parameter {p} is already registered"),
            ParamError::NotRegistered(p) => write!(f, "parameter {p} is not registered"),
            ParamError::NoSuchGroup(g) => write!(f, "group {g} does not exist"),
            ParamError::Output(e) => write!(f, "failed to write output: {e}"),
        }
    }
}

impl std::error::Error for ParamError {}

impl From<io::Error> for ParamError {
    fn from(e: io::Error) -> Self {
        ParamError::Output(e.to_string())
    }
}
