//! Token metadata in the marketplace JSON format.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Marketplaces display at most this many traits from the form.
pub const MAX_ATTRIBUTES: usize = 10;

/// One `{trait_type, value}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
}

impl Attribute {
    pub fn new(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }
}

/// Parses `Rarity=Legendary`.
impl FromStr for Attribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((trait_type, value)) if !trait_type.trim().is_empty() && !value.trim().is_empty() => {
                Ok(Self::new(trait_type.trim(), value.trim()))
            }
            _ => Err(format!("expected TYPE=VALUE, got '{}'", s)),
        }
    }
}

/// Metadata document pinned to IPFS and referenced by the token URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    pub description: String,
    pub image: String,
    /// Absent rather than empty when there are no traits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
}

/// Build the metadata object for an image pinned under `image_hash`.
pub fn build_metadata(
    name: &str,
    description: &str,
    image_hash: &str,
    attributes: Vec<Attribute>,
) -> Metadata {
    Metadata {
        name: name.to_string(),
        description: description.to_string(),
        image: format!("ipfs://{}", image_hash),
        attributes: if attributes.is_empty() {
            None
        } else {
            Some(attributes)
        },
    }
}

/// Pair trait types with values positionally, dropping rows missing either.
pub fn collect_attributes<T, V>(trait_types: T, values: V) -> Vec<Attribute>
where
    T: IntoIterator<Item = String>,
    V: IntoIterator<Item = String>,
{
    trait_types
        .into_iter()
        .zip(values)
        .filter(|(t, v)| !t.trim().is_empty() && !v.trim().is_empty())
        .map(|(t, v)| Attribute::new(t.trim(), v.trim()))
        .collect()
}
