use std::{
    collections::HashMap,
    time::{SystemTime, UNIX_EPOCH},
};

/// Name of the pseudo-symbol holding whole seconds since the Unix epoch.
pub const TIME_SECONDS: &str = "time";
/// Name of the pseudo-symbol holding milliseconds since the Unix epoch.
pub const TIME_MILLISECONDS: &str = "timems";

/// Maps variable names to their current values.
///
/// The table lives as long as the session that owns it, so assignments made
/// by one expression are visible to the next. Names are case-sensitive and
/// unique; saving an existing name overwrites its value.
///
/// `time` and `timems` are never stored. They are computed from the system
/// clock on every lookup, and an assignment to them is kept in the table but
/// stays shadowed.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, f64>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `name` or overwrites its value.
    pub fn save(&mut self, name: &str, value: f64) {
        tracing::trace!(name, value, "save symbol");
        if let Some(slot) = self.symbols.get_mut(name) {
            *slot = value;
        } else {
            self.symbols.insert(name.to_string(), value);
        }
    }

    /// Looks up the current value of `name`.
    ///
    /// Returns `None` when the name has never been saved. A stored `NaN` is
    /// still reported as found.
    ///
    /// # Example
    /// ```
    /// use calcexpr::interpreter::symbols::SymbolTable;
    ///
    /// let mut table = SymbolTable::new();
    /// assert_eq!(table.lookup("x"), None);
    ///
    /// table.save("x", f64::NAN);
    /// assert!(table.lookup("x").is_some_and(f64::is_nan));
    /// ```
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<f64> {
        match name {
            TIME_SECONDS => Some(since_epoch().as_secs_f64().floor()),
            TIME_MILLISECONDS => Some(since_epoch().as_secs_f64() * 1000.0),
            _ => self.symbols.get(name).copied(),
        }
    }

    /// Returns `true` if `name` has a stored value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Number of stored symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if nothing has been stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterates over stored symbols in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.symbols.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

fn since_epoch() -> std::time::Duration {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_overwrites_existing_value() {
        let mut table = SymbolTable::new();
        table.save("dex", 10.0);
        table.save("dex", 32.0);
        assert_eq!(table.lookup("dex"), Some(32.0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut table = SymbolTable::new();
        table.save("Abc", 1.0);
        assert_eq!(table.lookup("abc"), None);
        assert_eq!(table.lookup("Abc"), Some(1.0));
    }

    #[test]
    fn capacity_is_not_capped() {
        let mut table = SymbolTable::new();
        for i in 0..500 {
            table.save(&format!("v{i}"), f64::from(i));
        }
        assert_eq!(table.len(), 500);
        assert_eq!(table.lookup("v499"), Some(499.0));
    }

    #[test]
    fn clock_symbols_are_computed_not_stored() {
        let mut table = SymbolTable::new();
        table.save(TIME_SECONDS, 5.0);

        let seconds = table.lookup(TIME_SECONDS).unwrap();
        let millis = table.lookup(TIME_MILLISECONDS).unwrap();
        assert!(seconds > 1.0e9);
        assert_eq!(seconds, seconds.trunc());
        assert!(millis >= seconds * 1000.0);
        assert!(!table.contains(TIME_MILLISECONDS));
    }

    #[test]
    fn iteration_visits_every_stored_symbol() {
        let mut table = SymbolTable::new();
        assert!(table.is_empty());
        table.save("a", 1.0);
        table.save("b", 2.0);

        let mut seen: Vec<(&str, f64)> = table.iter().collect();
        seen.sort_by(|x, y| x.0.cmp(y.0));
        assert_eq!(seen, vec![("a", 1.0), ("b", 2.0)]);
        assert!(!table.is_empty());
    }
}
