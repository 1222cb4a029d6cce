use crate::sprites::{expected_sprite_files, SpriteRoots};
use schema::{Derivation, Form, GenderRatio, Group, Links, Names};
use std::fs;
use std::path::Path;

/// A builder for test forms with common defaults: non-derived, no gender
/// variant, 1:1 gender ratio.
///
/// # Example
/// ```ignore
/// let form = FormBuilder::new(Some("mega"))
///     .derived_from(&[None], true)
///     .build();
/// ```
pub struct FormBuilder {
    variant: Option<String>,
    gender_variant: bool,
    gender_ratio: Option<GenderRatio>,
    evolution_variants: Option<Vec<Option<String>>>,
    derives: Option<Derivation>,
}

impl FormBuilder {
    pub fn new(variant: Option<&str>) -> Self {
        Self {
            variant: variant.map(str::to_string),
            gender_variant: false,
            gender_ratio: Some(GenderRatio::Even),
            evolution_variants: None,
            derives: None,
        }
    }

    pub fn with_gender_variant(mut self, gender_variant: bool) -> Self {
        self.gender_variant = gender_variant;
        self
    }

    pub fn with_gender_ratio(mut self, ratio: GenderRatio) -> Self {
        self.gender_ratio = Some(ratio);
        self
    }

    pub fn without_gender_ratio(mut self) -> Self {
        self.gender_ratio = None;
        self
    }

    pub fn with_evolution_variants(mut self, variants: &[Option<&str>]) -> Self {
        self.evolution_variants = Some(to_owned_variants(variants));
        self
    }

    pub fn derived_from(mut self, variants: &[Option<&str>], battle_only: bool) -> Self {
        self.derives = Some(Derivation {
            from_variants: to_owned_variants(variants),
            battle_only,
        });
        self
    }

    pub fn build(self) -> Form {
        let name = self.variant.clone().unwrap_or_else(|| "default".to_string());
        Form {
            variant: self.variant,
            names: Names {
                fr: name.clone(),
                en: name.clone(),
            },
            links: Links {
                bulbapedia: format!("https://bulbapedia.example/{}", name),
                pokepedia: format!("https://pokepedia.example/{}", name),
            },
            types: vec!["normal".to_string()],
            generation: 1,
            gender_variant: self.gender_variant,
            gender_ratio: self.gender_ratio,
            evolution_variants: self.evolution_variants,
            derives: self.derives,
        }
    }
}

fn to_owned_variants(variants: &[Option<&str>]) -> Vec<Option<String>> {
    variants.iter().map(|v| v.map(str::to_string)).collect()
}

/// A builder for test groups. Forms are kept in insertion order.
pub struct GroupBuilder {
    number: u32,
    common_names: Option<Names>,
    evolves_from: Option<u32>,
    forms: Vec<Form>,
}

impl GroupBuilder {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            common_names: None,
            evolves_from: None,
            forms: Vec::new(),
        }
    }

    /// A group with a single, well-formed default form.
    pub fn simple(number: u32) -> Self {
        Self::new(number).with_form(FormBuilder::new(None).build())
    }

    pub fn with_form(mut self, form: Form) -> Self {
        self.forms.push(form);
        self
    }

    pub fn with_common_names(mut self, fr: &str, en: &str) -> Self {
        self.common_names = Some(Names {
            fr: fr.to_string(),
            en: en.to_string(),
        });
        self
    }

    pub fn evolves_from(mut self, number: u32) -> Self {
        self.evolves_from = Some(number);
        self
    }

    pub fn build(self) -> Group {
        Group {
            number: self.number,
            common_names: self.common_names,
            evolves_from: self.evolves_from,
            forms: self.forms,
        }
    }
}

/// Create every icon the given groups expect, under both roots.
pub fn create_sprites(roots: &SpriteRoots, groups: &[Group]) {
    fs::create_dir_all(&roots.common).unwrap();
    fs::create_dir_all(&roots.shiny).unwrap();
    for group in groups {
        for form in &group.forms {
            for filename in expected_sprite_files(group.number, form) {
                fs::write(roots.common.join(&filename), b"png").unwrap();
                fs::write(roots.shiny.join(&filename), b"png").unwrap();
            }
        }
    }
}

/// Write `groups` and an empty type table as a data directory.
pub fn write_data_dir(dir: &Path, groups: &[Group]) {
    fs::write(dir.join("pokemon.json"), serde_json::to_string_pretty(groups).unwrap()).unwrap();
    fs::write(dir.join("types.json"), "{}").unwrap();
}
