//! Fixed music genre and mood vocabularies.
//!
//! The scenario prompt instructs the text model to pick exactly one value
//! from each list, so these enums round-trip the display strings the model
//! is shown.

use serde::{Deserialize, Serialize};

/// Music genres offered to the text model.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Genre {
    /// Alternative & Punk
    #[serde(rename = "Alternative & Punk")]
    #[strum(serialize = "Alternative & Punk")]
    AlternativePunk,
    /// Ambient
    Ambient,
    /// Children's
    #[serde(rename = "Children's")]
    #[strum(serialize = "Children's")]
    Childrens,
    /// Cinematic
    Cinematic,
    /// Classical
    Classical,
    /// Country & Folk
    #[serde(rename = "Country & Folk")]
    #[strum(serialize = "Country & Folk")]
    CountryFolk,
    /// Dance & Electronic
    #[serde(rename = "Dance & Electronic")]
    #[strum(serialize = "Dance & Electronic")]
    DanceElectronic,
    /// Hip-Hop & Rap
    #[serde(rename = "Hip-Hop & Rap")]
    #[strum(serialize = "Hip-Hop & Rap")]
    HipHopRap,
    /// Holiday
    Holiday,
    /// Jazz & Blues
    #[serde(rename = "Jazz & Blues")]
    #[strum(serialize = "Jazz & Blues")]
    JazzBlues,
    /// Pop
    Pop,
    /// R&B & Soul
    #[serde(rename = "R&B & Soul")]
    #[strum(serialize = "R&B & Soul")]
    RnbSoul,
    /// Reggae
    Reggae,
    /// Rock
    Rock,
}

/// Moods offered to the text model.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mood {
    /// Angry
    Angry,
    /// Bright
    Bright,
    /// Calm
    Calm,
    /// Dark
    Dark,
    /// Dramatic
    Dramatic,
    /// Funky
    Funky,
    /// Happy
    Happy,
    /// Inspirational
    Inspirational,
    /// Romantic
    Romantic,
    /// Sad
    Sad,
}
