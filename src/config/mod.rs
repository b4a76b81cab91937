pub mod form_file;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// The user-creation endpoint the form submits to when no override is given.
pub const DEFAULT_ENDPOINT: &str = "https://fullstack-test-navy.vercel.app/api/users/create";
