use crate::diagnostics::{DiagnosticSink, Diagnostics};
use schema::Group;

/// Pass 3: derivation links between forms of the same group.
pub fn check_derivations<S: DiagnosticSink>(groups: &[Group], diags: &mut Diagnostics<S>) {
    for group in groups {
        diags.start_group(group.number);

        for form in &group.forms {
            let Some(derives) = &form.derives else {
                continue;
            };

            for from_variant in &derives.from_variants {
                let from_variant = from_variant.as_deref();
                if from_variant == form.variant() {
                    diags.error(format!("Variant {} derives from itself", form.variant_label()));
                    continue;
                }

                let Some(from_form) = group.find_form(from_variant) else {
                    match from_variant {
                        None => diags.error(format!(
                            "Variant {} derives from non-existing default variant",
                            form.variant_label()
                        )),
                        Some(variant) => diags.error(format!(
                            "Variant {} derives from non-existing variant {}",
                            form.variant_label(),
                            variant
                        )),
                    }
                    continue;
                };

                if from_form.is_temporary() && !form.is_temporary() {
                    diags.error(format!(
                        "Permanent variant {} derives from battle-only variant {}",
                        form.variant_label(),
                        from_form.variant_label()
                    ));
                }
            }
        }
    }
}
