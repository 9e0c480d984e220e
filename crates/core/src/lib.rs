//! Core domain types, errors, and constants for `kscp`.
//!
//! ## Key Components
//!
//! - **`errors`**: the `Error` enum and `Result` alias. Every failure a
//!   resolution can produce is one of `InvalidArgument`, `ResolutionFailure`
//!   or `KeyNotFound`.
//! - **`types`**: validated newtypes (`Namespace`, `SecretName`), the raw
//!   secret payload returned by a store, and the flat `ResolvedConfig` handed
//!   back to the host.
//! - **`constants`**: option names, environment variables and shared messages.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, IoResultExt, Result, ResultExt},
    types::*,
};
