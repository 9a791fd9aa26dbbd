//! Strongly-typed identifiers for storefront entities
//!
//! Identifiers are opaque strings (`user-k3x9qa`, `product-1`). Wrapping each
//! kind in its own newtype keeps a `UserId` from being passed where an
//! `OrderId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing opaque identifier
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Builds `<prefix>-<suffix>`
            pub fn from_suffix(suffix: impl fmt::Display) -> Self {
                Self(format!("{}-{}", $prefix, suffix))
            }

            /// Returns the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the identifier prefix
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(UserId, "user");
define_id!(ProductId, "product");
define_id!(OrderId, "order");
define_id!(CategoryId, "category");
define_id!(ImageId, "image");
