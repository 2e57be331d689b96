mod api_client;
pub mod responses;

pub use api_client::{APIClient, ClientError};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;

/// Opaque record identifier, stored in stringified form.
///
/// The backend serializes ids as numbers while route parameters always
/// arrive as strings, so both JSON kinds deserialize into the same value
/// and `3` compares equal to `"3"`.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct ResourceId(pub String);

impl ResourceId {
    /// Stringified-id equality against anything displayable.
    pub fn matches(&self, other: impl Display) -> bool {
        self.0 == other.to_string()
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => ResourceId(n.to_string()),
            RawId::Text(s) => ResourceId(s),
        })
    }
}

impl From<i64> for ResourceId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A record that carries a [`ResourceId`].
pub trait Identified {
    fn resource_id(&self) -> &ResourceId;
}

/// Find a record by stringified-id equality.
pub fn find_by_id<T: Identified>(items: &[T], id: impl Display) -> Option<&T> {
    let id = id.to_string();
    items.iter().find(|item| item.resource_id().matches(&id))
}

/// Which set of centers to retrieve. Each variant is served by its own
/// endpoint.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum CenterType {
    #[display("formation")]
    Formation,
    #[display("exam")]
    Exam,
    #[default]
    #[display("all")]
    All,
}

impl CenterType {
    /// Path below `/api/` serving this set of centers.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Formation => "centers/formation",
            Self::Exam => "centers/exam",
            Self::All => "centers",
        }
    }
}

/// A list endpoint's body, classified by shape before any item decoding.
///
/// Endpoints either return a bare JSON array or wrap it as
/// `{"data": [...]}`. Any other shape is `Unrecognized` and reads as an
/// empty list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListResponse<T> {
    Bare(Vec<T>),
    Envelope(Vec<T>),
    Unrecognized,
}

impl<T: serde::de::DeserializeOwned> ListResponse<T> {
    /// Classify a JSON value and decode its items.
    ///
    /// Returns an error only when a recognized shape holds items that do
    /// not decode as `T`.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Array(items) => {
                Ok(Self::Bare(serde_json::from_value(Value::Array(items))?))
            }
            Value::Object(mut fields) => match fields.remove("data") {
                Some(Value::Array(items)) => Ok(Self::Envelope(
                    serde_json::from_value(Value::Array(items))?,
                )),
                _ => Ok(Self::Unrecognized),
            },
            _ => Ok(Self::Unrecognized),
        }
    }
}

impl<T> ListResponse<T> {
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized)
    }

    /// The carried items, or an empty list for an unrecognized body.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Envelope(items) => items,
            Self::Unrecognized => Vec::new(),
        }
    }
}
