//! Provider option parsing and loading for kscp
//!
//! The resolver recognizes a single option, `namespace`. This crate turns the
//! places a host can supply it from (an option map, a properties file, the
//! process environment) into a validated `ProviderOptions`.

pub mod loader;
pub mod options;
pub mod properties;

pub use loader::*;
pub use options::*;
pub use properties::*;
