use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all modpin operations.
///
/// Every variant is a distinct failure class so callers can match on the
/// kind instead of inspecting messages.
#[derive(Debug, Error, Diagnostic)]
pub enum ModpinError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested name has no registry entry.
    #[error("unknown dependency: {name}")]
    #[diagnostic(
        code(modpin::unknown_dependency),
        help("Run `modpin versions` against the registry to list what it knows")
    )]
    UnknownDependency { name: String },

    /// The constraint expression does not parse.
    #[error("invalid constraint: {constraint} ({reason})")]
    #[diagnostic(
        code(modpin::invalid_constraint),
        help("Use forms like `*`, `v1.2.0`, `>=1.2, <2`, `^1.4` or `~1.4.2`")
    )]
    InvalidConstraint { constraint: String, reason: String },

    /// The dependency is known but no listed version satisfies the constraint.
    #[error("cannot satisfy dependency: {name} {constraint}")]
    #[diagnostic(code(modpin::cannot_satisfy))]
    CannotSatisfy { name: String, constraint: String },

    /// A registry entry lists a version that is not a semantic version.
    #[error("invalid version {version:?} listed for {name}: {reason}")]
    #[diagnostic(
        code(modpin::invalid_version),
        help("The registry entry is corrupt; every listed version must be a semantic version")
    )]
    InvalidVersion {
        name: String,
        version: String,
        reason: String,
    },

    /// The registry source is missing, unreadable or malformed.
    #[error("invalid module registry: {message}")]
    #[diagnostic(code(modpin::invalid_registry))]
    InvalidRegistry { message: String },

    /// Fetching a remote registry document failed.
    #[error("downloading registry: {message}")]
    #[diagnostic(code(modpin::download))]
    Download { message: String },

    /// Invalid or unreadable `modpin.toml`.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check modpin.toml for syntax errors"))]
    Config { message: String },
}

/// Convenience alias for results carrying a [`ModpinError`].
pub type ModpinResult<T> = Result<T, ModpinError>;
