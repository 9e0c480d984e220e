//! Validated names for the two halves of a secret reference

use crate::constants::{BLANK_SECRET_NAME_MESSAGE, MISSING_NAMESPACE_MESSAGE};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::ops::Deref;
use std::str::FromStr;

/// Namespace a resolver reads secrets from. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Namespace(String);

impl Namespace {
    /// Create a new Namespace, rejecting blank input
    pub fn new(namespace: impl Into<String>) -> Result<Self> {
        let namespace = namespace.into();
        if namespace.trim().is_empty() {
            return Err(Error::invalid_argument(MISSING_NAMESPACE_MESSAGE));
        }
        Ok(Self(namespace))
    }

    /// Validate an optional namespace; `None` is reported like a blank one
    pub fn parse(namespace: Option<&str>) -> Result<Self> {
        match namespace {
            Some(namespace) => Self::new(namespace),
            None => Err(Error::invalid_argument(MISSING_NAMESPACE_MESSAGE)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Name of a single secret inside a namespace. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SecretName(String);

impl SecretName {
    /// Create a new SecretName, rejecting blank input
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::invalid_argument(BLANK_SECRET_NAME_MESSAGE));
        }
        Ok(Self(name))
    }

    /// Validate an optional secret name; an absent name fails the same way a
    /// blank one does
    pub fn parse(name: Option<&str>) -> Result<Self> {
        match name {
            Some(name) => Self::new(name),
            None => Err(Error::invalid_argument(BLANK_SECRET_NAME_MESSAGE)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_newtype_impls {
    ($ty:ident) => {
        impl Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Deref for $ty {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::new(s)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = Error;

            fn try_from(s: &str) -> Result<Self> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = Error;

            fn try_from(s: String) -> Result<Self> {
                Self::new(s)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }
    };
}

string_newtype_impls!(Namespace);
string_newtype_impls!(SecretName);

/// A fully-qualified pointer to one secret
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecretReference {
    pub namespace: Namespace,
    pub secret_name: SecretName,
}

impl SecretReference {
    #[must_use]
    pub fn new(namespace: Namespace, secret_name: SecretName) -> Self {
        Self {
            namespace,
            secret_name,
        }
    }
}

impl Display for SecretReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.secret_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_name_rejects_blank() {
        for input in ["", " ", "\t\n"] {
            let err = SecretName::new(input).unwrap_err();
            assert!(err.is_invalid_argument());
            assert!(err.to_string().contains(BLANK_SECRET_NAME_MESSAGE));
        }
    }

    #[test]
    fn test_secret_name_rejects_absent() {
        let err = SecretName::parse(None).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains(BLANK_SECRET_NAME_MESSAGE));
    }

    #[test]
    fn test_secret_name_keeps_input_verbatim() {
        let name: SecretName = "my-secret".parse().unwrap();
        assert_eq!(name.as_str(), "my-secret");
        assert_eq!(name.to_string(), "my-secret");
    }

    #[test]
    fn test_namespace_rejects_blank_and_absent() {
        assert!(Namespace::new("").unwrap_err().is_invalid_argument());
        assert!(Namespace::parse(None).unwrap_err().is_invalid_argument());
        assert_eq!(Namespace::parse(Some("my-ns")).unwrap().as_str(), "my-ns");
    }

    #[test]
    fn test_namespace_deserialize_validates() {
        let ok: Namespace = serde_json::from_str("\"my-ns\"").unwrap();
        assert_eq!(ok.as_str(), "my-ns");
        assert!(serde_json::from_str::<Namespace>("\"  \"").is_err());
    }

    #[test]
    fn test_secret_reference_display() {
        let reference = SecretReference::new(
            Namespace::new("my-ns").unwrap(),
            SecretName::new("my-secret").unwrap(),
        );
        assert_eq!(reference.to_string(), "my-ns/my-secret");
    }
}
