//! Submission record
//!
//! The form's answers exactly as they are posted. Enum fields serialize to
//! the strings the select controls produce, with `""` for "not chosen yet".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Behavioural questionnaire items
pub const BEHAVIORAL_ITEMS: [&str; 10] = [
    "A1", "A2", "A3", "A4", "A5",
    "A6", "A7", "A8", "A9", "A10",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl Gender {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "" => Some(Self::Unset),
            "m" => Some(Self::Male),
            "f" => Some(Self::Female),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YesNo {
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "yes")]
    Yes,
    #[serde(rename = "no")]
    No,
}

impl YesNo {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "" => Some(Self::Unset),
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            _ => None,
        }
    }
}

/// Answer to one questionnaire item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Answer {
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "0")]
    No,
    #[serde(rename = "1")]
    Yes,
}

impl Answer {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "" => Some(Self::Unset),
            "0" => Some(Self::No),
            "1" => Some(Self::Yes),
            _ => None,
        }
    }
}

pub fn is_behavioral_item(name: &str) -> bool {
    BEHAVIORAL_ITEMS.contains(&name)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub age: u32,
    pub gender: Gender,
    pub ethnicity: String,
    pub jaundice: YesNo,
    pub autism: YesNo,
    pub country: String,
    pub used_app_before: YesNo,
    pub relation: String,
    pub behavioral_scores: BTreeMap<String, Answer>,
}

impl Default for SubmissionRecord {
    fn default() -> Self {
        Self {
            age: 0,
            gender: Gender::Unset,
            ethnicity: String::new(),
            jaundice: YesNo::Unset,
            autism: YesNo::Unset,
            country: String::new(),
            used_app_before: YesNo::Unset,
            relation: String::new(),
            behavioral_scores: BEHAVIORAL_ITEMS
                .iter()
                .map(|item| (item.to_string(), Answer::Unset))
                .collect(),
        }
    }
}

impl SubmissionRecord {
    /// Copy of this record with one field replaced
    ///
    /// `name` is either a questionnaire item (`A1`..`A10`) or a top-level
    /// field using its wire name (`usedAppBefore`, not `used_app_before`).
    pub fn with_field(&self, name: &str, value: &str) -> Result<Self, FormError> {
        let invalid = || FormError::InvalidValue {
            field: name.to_string(),
            value: value.to_string(),
        };

        let mut next = self.clone();

        if is_behavioral_item(name) {
            let answer = Answer::parse(value).ok_or_else(invalid)?;
            next.behavioral_scores.insert(name.to_string(), answer);
            return Ok(next);
        }

        match name {
            "age" => next.age = value.trim().parse().map_err(|_| invalid())?,
            "gender" => next.gender = Gender::parse(value).ok_or_else(invalid)?,
            "ethnicity" => next.ethnicity = value.to_string(),
            "jaundice" => next.jaundice = YesNo::parse(value).ok_or_else(invalid)?,
            "autism" => next.autism = YesNo::parse(value).ok_or_else(invalid)?,
            "country" => next.country = value.to_string(),
            "usedAppBefore" => next.used_app_before = YesNo::parse(value).ok_or_else(invalid)?,
            "relation" => next.relation = value.to_string(),
            _ => return Err(FormError::UnknownField(name.to_string())),
        }

        Ok(next)
    }

    pub fn answer(&self, item: &str) -> Answer {
        self.behavioral_scores.get(item).copied().unwrap_or_default()
    }

    /// Required controls that have not been filled in
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();

        if self.gender == Gender::Unset {
            missing.push("gender".to_string());
        }
        if self.jaundice == YesNo::Unset {
            missing.push("jaundice".to_string());
        }
        if self.autism == YesNo::Unset {
            missing.push("autism".to_string());
        }
        for item in BEHAVIORAL_ITEMS {
            if self.answer(item) == Answer::Unset {
                missing.push(item.to_string());
            }
        }

        missing
    }
}
