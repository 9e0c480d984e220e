//! Core domain types for secret resolution.
//!
//! - **`names`**: validated `Namespace` and `SecretName` plus the
//!   `SecretReference` that pairs them
//! - **`filter`**: the `KeyFilter` a caller uses to select keys
//! - **`secret`**: `RawSecret`, the store's view of a secret
//! - **`resolved`**: `ResolvedConfig`, the flat map returned to the host

pub mod filter;
pub mod names;
pub mod resolved;
pub mod secret;

pub use filter::*;
pub use names::*;
pub use resolved::*;
pub use secret::*;
