//! Form draft and create/edit mode

use crate::error::{Error, Result};

use super::resort::{Difficulty, Resort, ResortFields, ResortId};

/// In-progress, unsaved form values. `slopes` is kept as typed text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResortDraft {
    pub name: String,
    pub location: String,
    pub slopes: String,
    pub difficulty: Difficulty,
}

impl ResortDraft {
    /// Copy a record's mutable fields into a draft
    #[must_use]
    pub fn from_resort(resort: &Resort) -> Self {
        Self {
            name: resort.name.clone(),
            location: resort.location.clone(),
            slopes: resort.slopes.to_string(),
            difficulty: resort.difficulty,
        }
    }

    /// Convert the draft into a request body.
    ///
    /// Fails when a required field is blank or `slopes` is not a
    /// non-negative integer.
    pub fn to_fields(&self) -> Result<ResortFields> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidDraft("name is required".into()));
        }
        if self.location.trim().is_empty() {
            return Err(Error::InvalidDraft("location is required".into()));
        }
        let slopes = self.slopes.trim();
        if slopes.is_empty() {
            return Err(Error::InvalidDraft("slopes is required".into()));
        }
        let slopes = slopes.parse::<u32>().map_err(|_| {
            Error::InvalidDraft(format!(
                "slopes must be a non-negative integer, got '{slopes}'"
            ))
        })?;

        Ok(ResortFields::new(
            self.name.clone(),
            self.location.clone(),
            slopes,
            self.difficulty,
        ))
    }
}

/// Whether the form creates a new record or edits an existing one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(ResortId),
}

impl FormMode {
    pub const fn edit_target(&self) -> Option<&ResortId> {
        match self {
            Self::Creating => None,
            Self::Editing(id) => Some(id),
        }
    }
}

/// Draft and mode, always replaced together.
///
/// Only the draft's field values can be changed in place; switching mode
/// requires building a new `FormState`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    draft: ResortDraft,
    mode: FormMode,
}

impl FormState {
    /// Empty draft in create mode
    #[must_use]
    pub fn creating() -> Self {
        Self::default()
    }

    /// Draft prefilled from `resort`, editing its id
    #[must_use]
    pub fn editing(resort: &Resort) -> Self {
        Self {
            draft: ResortDraft::from_resort(resort),
            mode: FormMode::Editing(resort.id.clone()),
        }
    }

    pub const fn draft(&self) -> &ResortDraft {
        &self.draft
    }

    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft_mut(&mut self) -> &mut ResortDraft {
        &mut self.draft
    }
}
