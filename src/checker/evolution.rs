use super::structure::GroupIndex;
use crate::diagnostics::{DiagnosticSink, Diagnostics};
use crate::sprites::SpriteRoots;
use schema::{variant_label, Form, Group};

/// Pass 2: evolution links, gender data and sprite presence.
pub fn check_evolutions<S: DiagnosticSink>(
    groups: &[Group],
    index: &GroupIndex<'_>,
    sprites: Option<&SpriteRoots>,
    diags: &mut Diagnostics<S>,
) {
    for group in groups {
        diags.start_group(group.number);

        let pre_evolution = group.evolves_from.and_then(|number| {
            let found = index.get(&number).copied();
            if found.is_none() {
                diags.error(format!(
                    "Group {} evolves from unknown group {}",
                    group.number, number
                ));
            }
            found
        });

        for form in &group.forms {
            if let Some(sprites) = sprites {
                sprites.check(group.number, form, diags);
            }

            let resolved = match &form.evolution_variants {
                Some(variants) => {
                    check_evolution_variants(group, form, variants, pre_evolution, diags)
                }
                None => pre_evolution
                    .map_or(true, |pre| check_inherited_evolution(form, pre, diags)),
            };
            if !resolved {
                continue;
            }

            check_gender(form, diags);
        }
    }
}

/// Checks a form listing the pre-evolution forms it evolves from.
///
/// Returns false when the remaining checks of the form must be skipped.
fn check_evolution_variants<S: DiagnosticSink>(
    group: &Group,
    form: &Form,
    variants: &[Option<String>],
    pre_evolution: Option<&Group>,
    diags: &mut Diagnostics<S>,
) -> bool {
    let listed = format_variants(variants);
    if form.is_derived() {
        diags.error(format!("Found evolution variant {} for derived group", listed));
    }
    if group.evolves_from.is_none() {
        diags.error(format!(
            "Found evolution variant {} for non-evolving group",
            listed
        ));
        return false;
    }

    // Unknown pre-evolution group, already reported
    let Some(pre_evolution) = pre_evolution else {
        return true;
    };
    for variant in variants {
        let variant = variant.as_deref();
        match pre_evolution.find_form(variant) {
            None => diags.error(format!(
                "Evolution variant {} does not exist in pre-evolution group {}",
                variant_label(variant),
                pre_evolution.number
            )),
            Some(pre_form) if pre_form.is_derived() => diags.error(format!(
                "Evolution variant {} in pre-evolution group {} refers to a derived form",
                variant_label(variant),
                pre_evolution.number
            )),
            Some(_) => {}
        }
    }
    true
}

/// Checks a form evolving from the pre-evolution form with the same variant,
/// or from the default form when there is none.
///
/// Returns false when the remaining checks of the form must be skipped.
fn check_inherited_evolution<S: DiagnosticSink>(
    form: &Form,
    pre_evolution: &Group,
    diags: &mut Diagnostics<S>,
) -> bool {
    let pre_form = match (pre_evolution.find_form(form.variant()), form.variant()) {
        (Some(pre_form), _) => pre_form,
        (None, None) => {
            diags.error(format!(
                "Pre-evolution group {} does not have a default variant to evolve",
                pre_evolution.number
            ));
            return false;
        }
        (None, Some(variant)) => match pre_evolution.default_form() {
            Some(pre_form) => pre_form,
            None => {
                diags.error(format!(
                    "Pre-evolution group {} does not have a {} variant to evolve, nor a default variant",
                    pre_evolution.number, variant
                ));
                return false;
            }
        },
    };

    if pre_form.is_derived() {
        match pre_form.variant() {
            None => diags.error(format!(
                "Default evolution variant in pre-evolution group {} refers to a derived form",
                pre_evolution.number
            )),
            Some(variant) => diags.error(format!(
                "Evolution variant {} in pre-evolution group {} refers to a derived form",
                variant, pre_evolution.number
            )),
        }
    }
    true
}

fn check_gender<S: DiagnosticSink>(form: &Form, diags: &mut Diagnostics<S>) {
    if !form.is_derived() && form.gender_ratio.is_none() {
        diags.error(format!(
            "Missing gender ratio for non-derived form {}",
            form.variant_label()
        ));
    }
    if form.gender_variant && !form.gender_ratio.is_some_and(|ratio| ratio.is_mixed()) {
        let ratio = form
            .gender_ratio
            .map_or_else(|| "None".to_string(), |ratio| ratio.to_string());
        diags.error(format!(
            "Found gender variant for form {} with non-mixed gender ratio {}",
            form.variant_label(),
            ratio
        ));
    }
}

fn format_variants(variants: &[Option<String>]) -> String {
    let labels: Vec<&str> = variants.iter().map(|v| variant_label(v.as_deref())).collect();
    format!("[{}]", labels.join(", "))
}
