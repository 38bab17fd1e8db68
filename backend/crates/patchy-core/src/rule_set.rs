use crate::ValidationError;

/// A validation capability run against a fully bound target.
///
/// Rules are not presence-aware: they judge the target as if it were a
/// complete object. Errors about omitted fields are removed afterwards.
pub trait RuleSet<T>: Send + Sync {
    fn check(&self, target: &T) -> Vec<ValidationError>;
}

/// Accepts every target.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRules;

impl<T> RuleSet<T> for NoRules {
    fn check(&self, _target: &T) -> Vec<ValidationError> {
        Vec::new()
    }
}

impl<T, F> RuleSet<T> for F
where
    F: Fn(&T) -> Vec<ValidationError> + Send + Sync,
{
    fn check(&self, target: &T) -> Vec<ValidationError> {
        self(target)
    }
}
