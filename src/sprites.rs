use crate::diagnostics::{DiagnosticSink, Diagnostics};
use schema::Form;
use std::path::{Path, PathBuf};

pub const COMMON_ICONS_DIR: &str = "sprites/common/icons";
pub const SHINY_ICONS_DIR: &str = "sprites/shiny/icons";

/// The two directories every form must have an icon in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteRoots {
    pub common: PathBuf,
    pub shiny: PathBuf,
}

impl SpriteRoots {
    pub fn new(common: impl Into<PathBuf>, shiny: impl Into<PathBuf>) -> Self {
        SpriteRoots {
            common: common.into(),
            shiny: shiny.into(),
        }
    }

    /// Standard layout below a data directory.
    pub fn under(base: &Path) -> Self {
        Self::new(base.join(COMMON_ICONS_DIR), base.join(SHINY_ICONS_DIR))
    }

    /// Report every expected icon of `form` missing from either root.
    pub fn check<S: DiagnosticSink>(&self, number: u32, form: &Form, diags: &mut Diagnostics<S>) {
        for filename in expected_sprite_files(number, form) {
            let common_path = self.common.join(&filename);
            let shiny_path = self.shiny.join(&filename);
            if !common_path.is_file() {
                diags.error(format!("Common icon not found in {}", common_path.display()));
            }
            if !shiny_path.is_file() {
                diags.error(format!("Shiny icon not found in {}", shiny_path.display()));
            }
        }
    }
}

/// Icon filenames for a form: `NNNN[_f|_m][_variant].png`, female first.
pub fn expected_sprite_files(number: u32, form: &Form) -> Vec<String> {
    let group_id = format!("{:04}", number);
    let stems = if form.gender_variant {
        vec![format!("{}_f", group_id), format!("{}_m", group_id)]
    } else {
        vec![group_id]
    };

    stems
        .into_iter()
        .map(|stem| match form.variant() {
            Some(variant) => format!("{}_{}.png", stem, variant),
            None => format!("{}.png", stem),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::tests::common::FormBuilder;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::fs;

    #[rstest]
    #[case(25, None, false, vec!["0025.png"])]
    #[case(26, Some("alola"), false, vec!["0026_alola.png"])]
    #[case(3, None, true, vec!["0003_f.png", "0003_m.png"])]
    #[case(3, Some("gmax"), true, vec!["0003_f_gmax.png", "0003_m_gmax.png"])]
    fn test_expected_sprite_files(
        #[case] number: u32,
        #[case] variant: Option<&str>,
        #[case] gender_variant: bool,
        #[case] expected: Vec<&str>,
    ) {
        let form = FormBuilder::new(variant)
            .with_gender_variant(gender_variant)
            .build();

        assert_eq!(expected_sprite_files(number, &form), expected);
    }

    #[test]
    fn test_number_padding_keeps_large_numbers() {
        let form = FormBuilder::new(None).build();
        assert_eq!(expected_sprite_files(1025, &form), vec!["1025.png"]);
        assert_eq!(expected_sprite_files(12345, &form), vec!["12345.png"]);
    }

    #[test]
    fn test_missing_icons_are_reported_per_root() {
        let dir = tempfile::tempdir().unwrap();
        let roots = SpriteRoots::under(dir.path());
        fs::create_dir_all(&roots.common).unwrap();
        fs::create_dir_all(&roots.shiny).unwrap();
        fs::write(roots.common.join("0003_f.png"), b"").unwrap();
        fs::write(roots.common.join("0003_m.png"), b"").unwrap();
        fs::write(roots.shiny.join("0003_m.png"), b"").unwrap();

        let form = FormBuilder::new(None).with_gender_variant(true).build();
        let mut diags = Diagnostics::in_memory();
        diags.start_group(3);
        roots.check(3, &form, &mut diags);

        assert_eq!(
            diags.messages_for(3),
            vec![format!(
                "Shiny icon not found in {}",
                roots.shiny.join("0003_f.png").display()
            )]
        );
    }

    #[test]
    fn test_directory_with_icon_name_does_not_count() {
        let dir = tempfile::tempdir().unwrap();
        let roots = SpriteRoots::new(dir.path().join("common"), dir.path().join("shiny"));
        fs::create_dir_all(roots.common.join("0001.png")).unwrap();
        fs::create_dir_all(&roots.shiny).unwrap();
        fs::write(roots.shiny.join("0001.png"), b"").unwrap();

        let form = FormBuilder::new(None).build();
        let mut diags = Diagnostics::in_memory();
        roots.check(1, &form, &mut diags);

        assert_eq!(diags.error_count(), 1);
        assert!(diags.errors()[0].message.starts_with("Common icon not found in "));
    }
}
