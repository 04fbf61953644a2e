//! Resort model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Store-assigned identifier for a resort.
///
/// Clients treat the value as opaque text; the server mints UUID v7 strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResortId(String);

impl ResortId {
    /// Mint a new time-sortable identifier (server side only)
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ResortId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ResortId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Difficulty rating shown on a resort card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub const ALL: [Self; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown difficulty '{0}' (expected Beginner, Intermediate, Advanced or Expert)")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseDifficultyError(needle.to_string()))
    }
}

/// A ski resort as stored in the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resort {
    #[serde(alias = "_id")]
    pub id: ResortId,
    pub name: String,
    pub location: String,
    pub slopes: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl Resort {
    /// Attach an identifier to a set of fields
    #[must_use]
    pub fn from_fields(id: ResortId, fields: ResortFields) -> Self {
        Self {
            id,
            name: fields.name,
            location: fields.location,
            slopes: fields.slopes,
            difficulty: fields.difficulty,
        }
    }

    /// The mutable part of the record, as sent in create/update bodies
    #[must_use]
    pub fn fields(&self) -> ResortFields {
        ResortFields {
            name: self.name.clone(),
            location: self.location.clone(),
            slopes: self.slopes,
            difficulty: self.difficulty,
        }
    }
}

/// Request body for create and update: `{name, location, slopes, difficulty}`
///
/// `slopes` and `difficulty` fall back to `0` and `Beginner` when omitted, and
/// `slopes` also accepts numeric text for clients that post raw form values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResortFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "slopes_from_number_or_text")]
    pub slopes: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl ResortFields {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        slopes: u32,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            slopes,
            difficulty,
        }
    }

    /// Required-field presence check applied by the store
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidInput("name is required".into()));
        }
        if self.location.trim().is_empty() {
            return Err(Error::InvalidInput("location is required".into()));
        }
        Ok(())
    }
}

/// Update body for the store.
///
/// Same shape as [`ResortFields`], but an omitted `slopes` or `difficulty`
/// keeps the stored value instead of resetting it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResortUpdate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "optional_slopes")]
    pub slopes: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

impl ResortUpdate {
    /// Fields to write over `current`
    #[must_use]
    pub fn merged_onto(self, current: &Resort) -> ResortFields {
        ResortFields::new(
            self.name,
            self.location,
            self.slopes.unwrap_or(current.slopes),
            self.difficulty.unwrap_or(current.difficulty),
        )
    }
}

fn optional_slopes<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    slopes_from_number_or_text(deserializer).map(Some)
}

fn slopes_from_number_or_text<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawSlopes {
        Number(u32),
        Text(String),
    }

    match RawSlopes::deserialize(deserializer)? {
        RawSlopes::Number(value) => Ok(value),
        RawSlopes::Text(text) => text.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("slopes must be a non-negative integer, got '{text}'"))
        }),
    }
}
