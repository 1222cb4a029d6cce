use crate::diagnostics::{DiagnosticSink, Diagnostics};
use schema::{variant_label, Group};
use std::collections::HashMap;

/// Groups by number. With duplicate numbers the last one wins.
pub type GroupIndex<'a> = HashMap<u32, &'a Group>;

/// Pass 1: group numbering and form list shape.
///
/// Returns every group by number, for the passes that follow links between
/// groups.
pub fn check_structure<'a, S: DiagnosticSink>(
    groups: &'a [Group],
    diags: &mut Diagnostics<S>,
) -> GroupIndex<'a> {
    let mut index = GroupIndex::new();
    let mut last_number: Option<u32> = None;

    for group in groups {
        diags.start_group(group.number);

        if index.contains_key(&group.number) {
            diags.error(format!("Group {} was found several times", group.number));
        }
        if let Some(previous) = last_number {
            if previous.checked_add(1) != Some(group.number) {
                diags.error(format!(
                    "Group {} is misplaced (previous is {})",
                    group.number, previous
                ));
            }
        }
        last_number = Some(group.number);
        index.insert(group.number, group);

        check_forms(group, diags);
    }

    index
}

fn check_forms<S: DiagnosticSink>(group: &Group, diags: &mut Diagnostics<S>) {
    let mut known_variants: Vec<Option<&str>> = Vec::with_capacity(group.forms.len());
    for form in &group.forms {
        if form.is_default() && form.is_derived() {
            diags.error("Default form cannot be derived from another form");
        }
        if known_variants.contains(&form.variant()) {
            diags.error(format!("Duplicate variant {}", form.variant_label()));
        }
        known_variants.push(form.variant());
    }

    let has_default = group.has_default_form();
    if !has_default && group.common_names.is_none() {
        diags.error("Groups without a default variant must define common names");
    }

    let first = group.forms.first();
    if has_default {
        if first.is_some_and(|f| !f.is_default()) {
            diags.error("Null variant is not the first entry in the form list");
        }
        return;
    }

    if group.forms.len() < 2 {
        diags.error(format!(
            "Group with only one form should not have a variant (found {})",
            variant_label(first.and_then(|f| f.variant()))
        ));
    }
    if let Some(first) = first {
        if first.is_derived() {
            diags.error(format!(
                "First form in group (with variant {}) cannot derive other forms",
                first.variant_label()
            ));
        }
        if first.is_temporary() {
            diags.error(format!(
                "First form in group (with variant {}) cannot be battle-only",
                first.variant_label()
            ));
        }
    }
}
