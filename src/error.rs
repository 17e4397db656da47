//! Diagnostic error types for goal loading and reporting.
//!
//! Each stage defines its own error type with miette `#[diagnostic]` derives,
//! carrying an error code and help text so a broken goal file can be fixed
//! without reading the source.

use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;

/// Top-level error type.
///
/// Each variant wraps a stage-specific error, preserving its diagnostic
/// code and help text through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum GoalError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// A goal record, or a token inside it, could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    #[error("invalid date: \"{token}\"")]
    #[diagnostic(
        code(goal::parse::invalid_date),
        help(
            "Dates are written as YYYY-MM-DD (e.g. 2023-04-25). \
             Use `unknown` if the tactic was done but you don't remember when, \
             or leave `done` out if it was never done."
        )
    )]
    InvalidDate { token: String },

    #[error("unknown interval: \"{token}\"")]
    #[diagnostic(
        code(goal::parse::unknown_interval),
        help("Valid intervals: once, daily, weekly, monthly. Leave it out for `once`.")
    )]
    UnknownInterval { token: String },

    #[error("tactic #{index} has no `do` text")]
    #[diagnostic(
        code(goal::parse::empty_tactic),
        help("Every tactic needs a non-empty `do:` describing the action.")
    )]
    EmptyTactic { index: usize },

    #[error("malformed goal document: {message}")]
    #[diagnostic(
        code(goal::parse::yaml),
        help(
            "A goal file is a YAML mapping with `description`, `strategy` and a \
             `tactics` list. Run `goal --example` to see a complete one."
        )
    )]
    Yaml { message: String },
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("cannot scan goals directory: {path}")]
    #[diagnostic(
        code(goal::load::scan),
        help(
            "Check that the directory exists and is readable, or point to another \
             one with `--dir`."
        )
    )]
    Scan {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("cannot walk into: {path}")]
    #[diagnostic(
        code(goal::load::walk),
        help(
            "A file or subdirectory below the goals directory is unreadable or a \
             dangling link. Goals elsewhere are still reported."
        )
    )]
    Walk {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("cannot read goal file: {path}")]
    #[diagnostic(code(goal::load::read), help("Ensure the file is readable."))]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing {path}")]
    #[diagnostic(
        code(goal::load::parse),
        help("Fix the file; the other goals are still reported.")
    )]
    Parse {
        path: String,
        #[source]
        #[diagnostic_source]
        source: ParseError,
    },
}

impl LoadError {
    /// The file or directory the error is about.
    pub fn path(&self) -> &str {
        match self {
            Self::Scan { path, .. }
            | Self::Walk { path, .. }
            | Self::Read { path, .. }
            | Self::Parse { path, .. } => path,
        }
    }

    /// Whether the error aborts the whole load rather than a single file.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Scan { .. })
    }
}

pub type LoadResult<T> = std::result::Result<T, LoadError>;

// ---------------------------------------------------------------------------
// Render errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    #[error("failed to write report")]
    #[diagnostic(
        code(goal::render::write),
        help("The output stream was closed or is not writable.")
    )]
    Write {
        #[from]
        source: std::io::Error,
    },
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// Convenience alias for functions returning any goal error.
pub type GoalResult<T> = std::result::Result<T, GoalError>;
