use indexmap::IndexMap;
use serde::Deserialize;

/// Root schema for pybarrel.toml
///
/// The `globals` table is the supplemental-globals map: extra names to
/// export from a module even though extraction did not capture them
/// (re-exports, constants assigned through non-simple syntax). Table order
/// is preserved and becomes export order.
#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    /// File names withheld from discovery, in addition to __init__.py
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Extra exported names per module, keyed by bare module name
    #[serde(default)]
    pub globals: IndexMap<String, Vec<String>>,
}

impl Manifest {
    /// Supplemental names for a module, in table order.
    pub fn names_for(&self, module: &str) -> &[String] {
        self.globals
            .get(module)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// True if the module has at least one supplemental name.
    pub fn has_entry(&self, module: &str) -> bool {
        !self.names_for(module).is_empty()
    }

    /// True when the manifest configures nothing.
    pub fn is_empty(&self) -> bool {
        self.exclude.is_empty() && self.globals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_defaults() {
        let manifest = Manifest::from_str("").unwrap();
        assert!(manifest.is_empty());
        assert!(manifest.names_for("anything").is_empty());
        assert!(!manifest.has_entry("anything"));
    }

    #[test]
    fn test_globals_table() {
        let manifest = Manifest::from_str(
            r#"
            [globals]
            mod_b = ["DEFAULT_TIMEOUT", "VERSION"]
            mod_a = ["extras"]
            "#,
        )
        .unwrap();

        assert!(manifest.has_entry("mod_b"));
        assert_eq!(manifest.names_for("mod_b"), ["DEFAULT_TIMEOUT", "VERSION"]);
        assert_eq!(manifest.names_for("mod_a"), ["extras"]);
        assert!(manifest.names_for("mod_c").is_empty());
    }

    #[test]
    fn test_globals_preserve_table_order() {
        let manifest = Manifest::from_str(
            r#"
            [globals]
            zeta = ["z"]
            alpha = ["a"]
            mid = ["m"]
            "#,
        )
        .unwrap();

        let keys: Vec<&str> = manifest.globals.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_exclude_list() {
        let manifest = Manifest::from_str(r#"exclude = ["setup.py", "conf.py"]"#).unwrap();
        assert_eq!(manifest.exclude, ["setup.py", "conf.py"]);
        assert!(!manifest.is_empty());
    }

    #[test]
    fn test_empty_entry_is_not_an_entry() {
        let manifest = Manifest::from_str(
            r#"
            [globals]
            mod_a = []
            "#,
        )
        .unwrap();
        assert!(!manifest.has_entry("mod_a"));
    }
}
