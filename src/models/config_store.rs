//! In-memory section/option store
//!
//! A [`ConfigStore`] maps section names to option maps. One section, the
//! default section, always exists and cannot be removed; its options are
//! visible from every other section when listing leaves or looking up values.

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use super::error::{ConfigError, Result};
use crate::parser::read_into;
use crate::settings::StoreOptions;
use crate::utils::open_buffered;

/// Section and option mutations the parser needs.
///
/// Every method reports a no-op (duplicate add, missing target, protected
/// section) by returning `false`.
pub trait Config {
    fn add_section(&mut self, section: &str) -> bool;
    fn remove_section(&mut self, section: &str) -> bool;
    fn add_leaf(&mut self, section: &str, option: &str, value: &str) -> bool;
    fn remove_leaf(&mut self, section: &str, option: &str) -> bool;
}

#[derive(Debug, Clone)]
pub struct ConfigStore {
    sections: HashMap<String, HashMap<String, String>>,
    options: StoreOptions,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore {
    /// Create a store holding only the `default` section
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    /// Create a store holding only the section named by
    /// `options.default_section`
    pub fn with_options(options: StoreOptions) -> Self {
        let mut sections = HashMap::new();
        sections.insert(options.default_section.clone(), HashMap::new());
        ConfigStore { sections, options }
    }

    /// Build a store from INI text read out of `reader`
    pub fn from_reader<R: BufRead>(reader: R, options: StoreOptions) -> Result<Self> {
        let mut store = Self::with_options(options);
        let options = store.options.clone();
        read_into(&mut store, reader, &options)?;
        Ok(store)
    }

    /// Load a store from an INI file with default options
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_from_file_with_options(path, StoreOptions::default())
    }

    /// Load a store from an INI file.
    ///
    /// The file is closed before this returns, whether or not parsing
    /// succeeded.
    pub fn load_from_file_with_options<P: AsRef<Path>>(
        path: P,
        options: StoreOptions,
    ) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_buffered(path)?;
        let store = Self::from_reader(reader, options)?;
        log::info!(
            "Loaded {} section(s) from {}",
            store.sections.len(),
            path.display()
        );
        Ok(store)
    }

    pub fn default_section(&self) -> &str {
        &self.options.default_section
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    pub fn has_leaf(&self, section: &str, option: &str) -> bool {
        self.sections
            .get(section)
            .map(|options| options.contains_key(option))
            .unwrap_or(false)
    }

    /// All section names, in no particular order
    pub fn list_sections(&self) -> Vec<String> {
        self.sections.keys().cloned().collect()
    }

    /// Option names visible from `section`: the default section's options
    /// followed by the section's own. Names present in both appear twice.
    pub fn list_leaves(&self, section: &str) -> Result<Vec<String>> {
        let own = self
            .sections
            .get(section)
            .ok_or_else(|| ConfigError::NotFound(section.to_string()))?;

        let mut leaves: Vec<String> = self
            .sections
            .get(self.default_section())
            .map(|defaults| defaults.keys().cloned().collect())
            .unwrap_or_default();
        leaves.extend(own.keys().cloned());
        Ok(leaves)
    }

    /// Value of `option` in `section`, falling back to the default section
    pub fn get(&self, section: &str, option: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|options| options.get(option))
            .or_else(|| {
                self.sections
                    .get(self.default_section())
                    .and_then(|defaults| defaults.get(option))
            })
            .map(String::as_str)
    }
}

impl Config for ConfigStore {
    fn add_section(&mut self, section: &str) -> bool {
        if self.sections.contains_key(section) {
            return false;
        }
        self.sections.insert(section.to_string(), HashMap::new());
        true
    }

    fn remove_section(&mut self, section: &str) -> bool {
        if section == self.options.default_section {
            return false;
        }
        self.sections.remove(section).is_some()
    }

    fn add_leaf(&mut self, section: &str, option: &str, value: &str) -> bool {
        let options = self.sections.entry(section.to_string()).or_default();
        if options.contains_key(option) {
            return false;
        }
        options.insert(option.to_string(), value.to_string());
        true
    }

    fn remove_leaf(&mut self, section: &str, option: &str) -> bool {
        self.sections
            .get_mut(section)
            .map(|options| options.remove(option).is_some())
            .unwrap_or(false)
    }
}

impl FromStr for ConfigStore {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self> {
        Self::from_reader(content.as_bytes(), StoreOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut names: Vec<String>) -> Vec<String> {
        names.sort();
        names
    }

    #[test]
    fn test_new_store_has_only_default() {
        let store = ConfigStore::new();
        assert_eq!(store.list_sections(), vec!["default"]);
        assert!(store.list_leaves("default").unwrap().is_empty());
    }

    #[test]
    fn test_add_section_twice() {
        let mut store = ConfigStore::new();
        assert!(store.add_section("server"));
        assert!(!store.add_section("server"));
        assert_eq!(sorted(store.list_sections()), vec!["default", "server"]);
    }

    #[test]
    fn test_remove_section() {
        let mut store = ConfigStore::new();
        store.add_leaf("server", "host", "localhost");

        assert!(store.remove_section("server"));
        assert!(!store.remove_section("server"));
        assert!(!store.has_leaf("server", "host"));
        assert!(matches!(
            store.list_leaves("server"),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_default_section_is_protected() {
        let mut store = ConfigStore::new();
        store.add_leaf("default", "a", "1");

        assert!(!store.remove_section("default"));
        assert!(store.has_section("default"));
        assert_eq!(store.list_leaves("default").unwrap(), vec!["a", "a"]);
    }

    #[test]
    fn test_add_leaf_first_write_wins() {
        let mut store = ConfigStore::new();
        assert!(store.add_leaf("server", "port", "8080"));
        assert!(!store.add_leaf("server", "port", "9090"));
        assert_eq!(store.get("server", "port"), Some("8080"));
    }

    #[test]
    fn test_add_leaf_creates_section() {
        let mut store = ConfigStore::new();
        assert!(!store.has_section("fresh"));
        assert!(store.add_leaf("fresh", "k", "v"));
        assert!(store.has_section("fresh"));
    }

    #[test]
    fn test_remove_leaf() {
        let mut store = ConfigStore::new();
        assert!(!store.remove_leaf("missing", "k"));
        assert!(!store.remove_leaf("default", "k"));

        store.add_leaf("s", "k", "v");
        assert!(store.remove_leaf("s", "k"));
        assert!(store.list_leaves("s").unwrap().is_empty());
        assert!(!store.remove_leaf("s", "k"));
    }

    #[test]
    fn test_list_leaves_includes_defaults() {
        let mut store = ConfigStore::new();
        store.add_leaf("default", "a", "1");
        store.add_leaf("S", "b", "2");

        assert_eq!(store.list_leaves("S").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_list_leaves_does_not_dedup() {
        let mut store = ConfigStore::new();
        store.add_leaf("default", "x", "1");
        store.add_leaf("S", "x", "2");

        assert_eq!(store.list_leaves("S").unwrap(), vec!["x", "x"]);
    }

    #[test]
    fn test_list_leaves_missing_section() {
        let store = ConfigStore::new();
        let err = store.list_leaves("missing-section").unwrap_err();
        assert_eq!(err.to_string(), "Section not found: missing-section");
    }

    #[test]
    fn test_get_falls_back_to_default() {
        let mut store = ConfigStore::new();
        store.add_leaf("default", "timeout", "30");
        store.add_leaf("db", "timeout", "5");
        store.add_section("cache");

        assert_eq!(store.get("db", "timeout"), Some("5"));
        assert_eq!(store.get("cache", "timeout"), Some("30"));
        assert_eq!(store.get("cache", "missing"), None);
    }

    #[test]
    fn test_custom_default_section() {
        let options = StoreOptions::default().with_default_section("global");
        let mut store = ConfigStore::with_options(options);
        store.add_leaf("global", "user", "root");
        store.add_section("default");

        assert_eq!(store.default_section(), "global");
        assert!(!store.remove_section("global"));
        assert!(store.remove_section("default"));
        assert_eq!(store.get("anything", "user"), Some("root"));
    }

    #[test]
    fn test_from_str() {
        let store: ConfigStore = "name = top\n[s]\nk = v\n".parse().unwrap();
        assert_eq!(store.get("default", "name"), Some("top"));
        assert_eq!(store.get("s", "k"), Some("v"));
    }
}
