use crate::{ErrorRecord, RuleSet};

/// Run `rules` against the bound target and merge the output behind the binding errors.
///
/// A field rule error is skipped when the same field already failed to bind:
/// the rule would only be judging the default left behind by the failed coercion.
pub fn run_rules<T>(rules: &dyn RuleSet<T>, target: &T, binding_errors: ErrorRecord) -> ErrorRecord {
    let mut errors = binding_errors;

    let rule_errors: Vec<_> = rules
        .check(target)
        .into_iter()
        .filter(|error| match error.root_field() {
            Some(field) => !errors.has_binding_error(field),
            None => true,
        })
        .collect();

    errors.extend(rule_errors);
    errors
}
