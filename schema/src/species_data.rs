use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Label used in messages for the default form, which has no variant key.
pub const DEFAULT_VARIANT_LABEL: &str = "None";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Names {
    pub fr: String,
    pub en: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    pub bulbapedia: String,
    pub pokepedia: String,
}

/// Sex distribution of a form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum GenderRatio {
    #[serde(rename = "only-m")]
    #[strum(to_string = "only-m")]
    OnlyMale,
    #[serde(rename = "7m-1f")]
    #[strum(to_string = "7m-1f")]
    SevenMaleOneFemale,
    #[serde(rename = "3m-1f")]
    #[strum(to_string = "3m-1f")]
    ThreeMaleOneFemale,
    #[serde(rename = "1m-1f")]
    #[strum(to_string = "1m-1f")]
    Even,
    #[serde(rename = "1m-3f")]
    #[strum(to_string = "1m-3f")]
    OneMaleThreeFemale,
    #[serde(rename = "1m-7f")]
    #[strum(to_string = "1m-7f")]
    OneMaleSevenFemale,
    #[serde(rename = "only-f")]
    #[strum(to_string = "only-f")]
    OnlyFemale,
    #[serde(rename = "ungendered")]
    #[strum(to_string = "ungendered")]
    Ungendered,
}

impl GenderRatio {
    /// True when both male and female individuals exist.
    pub fn is_mixed(self) -> bool {
        !matches!(
            self,
            GenderRatio::OnlyMale | GenderRatio::OnlyFemale | GenderRatio::Ungendered
        )
    }
}

/// A form built from other forms of the same group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derivation {
    #[serde(rename = "from")]
    pub from_variants: Vec<Option<String>>,
    pub battle_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    pub names: Names,
    pub links: Links,
    pub types: Vec<String>,
    #[serde(rename = "gen")]
    pub generation: u8,
    #[serde(default)]
    pub gender_variant: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender_ratio: Option<GenderRatio>,
    /// Variants of the pre-evolution group that evolve into this form.
    /// `None` means the form inherits the pre-evolution form positionally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evolution_variants: Option<Vec<Option<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derives: Option<Derivation>,
}

impl Form {
    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    pub fn is_default(&self) -> bool {
        self.variant.is_none()
    }

    pub fn is_derived(&self) -> bool {
        self.derives.is_some()
    }

    /// Battle-only forms only exist while a battle is running.
    pub fn is_temporary(&self) -> bool {
        self.derives.as_ref().is_some_and(|d| d.battle_only)
    }

    pub fn variant_label(&self) -> &str {
        variant_label(self.variant())
    }
}

/// Human-readable name of a variant key, `None` for the default form.
pub fn variant_label(variant: Option<&str>) -> &str {
    variant.unwrap_or(DEFAULT_VARIANT_LABEL)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_names: Option<Names>,
    #[serde(default)]
    pub evolves_from: Option<u32>,
    pub forms: Vec<Form>,
}

impl Group {
    /// Find the form with the given variant key. `None` looks up the default form.
    pub fn find_form(&self, variant: Option<&str>) -> Option<&Form> {
        self.forms.iter().find(|form| form.variant() == variant)
    }

    pub fn default_form(&self) -> Option<&Form> {
        self.find_form(None)
    }

    pub fn has_default_form(&self) -> bool {
        self.forms.iter().any(Form::is_default)
    }
}
