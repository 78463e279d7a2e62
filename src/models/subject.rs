//! Subject model.
//!
//! A subject is a person to be seated. Identity is the exact,
//! case-sensitive name; the remaining attributes drive front-row bias.

use serde::{Deserialize, Serialize};

/// Visual-acuity class.
///
/// Unrecognised serialized values deserialize to [`Acuity::Unknown`],
/// which ranks after every known class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Acuity {
    /// Needs to sit near the board.
    Poor,
    /// No particular need.
    Average,
    /// Can sit anywhere.
    #[default]
    Good,
    /// Missing or unrecognised value.
    #[serde(other)]
    Unknown,
}

impl Acuity {
    /// Sort rank: Poor=1, Average=2, Good=3, Unknown=4.
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            Acuity::Poor => 1,
            Acuity::Average => 2,
            Acuity::Good => 3,
            Acuity::Unknown => 4,
        }
    }
}

/// A person to be seated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique name (exact match is identity).
    pub name: String,
    /// Visual-acuity class.
    pub acuity: Acuity,
    /// Height in centimeters. Not range-checked here.
    pub stature_cm: i32,
}

impl Subject {
    /// Creates a subject with `Good` acuity and 160 cm stature.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            acuity: Acuity::Good,
            stature_cm: 160,
        }
    }

    /// Sets the acuity class.
    pub fn with_acuity(mut self, acuity: Acuity) -> Self {
        self.acuity = acuity;
        self
    }

    /// Sets the stature in centimeters.
    pub fn with_stature(mut self, stature_cm: i32) -> Self {
        self.stature_cm = stature_cm;
        self
    }
}
