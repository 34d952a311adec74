use std::collections::BTreeMap;

/// The variables of one session.
///
/// A `Scope` lives as long as the session that owns it. The same instance is
/// handed to every evaluation in the session, including the evaluation of
/// bracketed sub-expressions, so a bracket can read and write the variables of
/// the expression around it.
///
/// Reading a name that was never assigned creates it with the value `0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    variables: BTreeMap<String, f64>,
}

impl Scope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of `name`, inserting `0` first if it is unknown.
    ///
    /// ## Example
    /// ```
    /// use bracalc::Scope;
    ///
    /// let mut scope = Scope::new();
    /// assert_eq!(scope.read("x"), 0.0);
    /// assert_eq!(scope.get("x"), Some(0.0));
    /// ```
    pub fn read(&mut self, name: &str) -> f64 {
        *self.slot(name)
    }

    /// Returns a mutable reference to the value of `name`, inserting `0` first
    /// if it is unknown.
    pub fn slot(&mut self, name: &str) -> &mut f64 {
        self.variables.entry(name.to_string()).or_insert(0.0)
    }

    /// Returns the value of `name` without creating it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Number of variables defined.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable has been defined yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_unknown_name_creates_it() {
        let mut scope = Scope::new();
        assert!(scope.is_empty());
        assert_eq!(scope.read("y"), 0.0);
        assert_eq!(scope.len(), 1);
    }

    #[test]
    fn slot_updates_in_place() {
        let mut scope = Scope::new();
        *scope.slot("x") = 5.0;
        *scope.slot("x") *= 2.0;
        assert_eq!(scope.get("x"), Some(10.0));
        assert_eq!(scope.get("z"), None);
    }

    #[test]
    fn iterates_in_name_order() {
        let mut scope = Scope::new();
        *scope.slot("b") = 2.0;
        *scope.slot("a") = 1.0;
        let names: Vec<_> = scope.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["a", "b"]);
    }
}
