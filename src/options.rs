//! Ordered option and package tables.
//!
//! Both tables map a key to an optional value and keep insertion order.
//! Setting an existing key replaces its value in place, so the key keeps
//! its original position in the rendered output.

use std::fmt;

// ============================================================================
// Options
// ============================================================================

/// Ordered `key -> optional value` table rendered as directive options.
///
/// A key without a value renders as a bare flag, a key with a value renders
/// as `key={value}`. Entries are joined by commas.
///
/// ```
/// use pgfplots::options::Options;
///
/// let opts = Options::new().with("xmin", 0).flag("grid");
/// assert_eq!(opts.render(), "xmin={0},grid");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    entries: Vec<(String, Option<String>)>,
}

impl Options {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key={value}`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        self.set(key.into(), Some(value.to_string()));
    }

    /// Set `key` as a bare flag, replacing any previous value.
    pub fn insert_flag(&mut self, key: impl Into<String>) {
        self.set(key.into(), None);
    }

    /// Set `key` to an optional value. `None` renders as a bare flag.
    pub fn set(&mut self, key: String, value: Option<String>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`Options::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder form of [`Options::insert_flag`].
    #[must_use]
    pub fn flag(mut self, key: impl Into<String>) -> Self {
        self.insert_flag(key);
        self
    }

    /// Look up a key. The outer `Option` is presence, the inner is the value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_deref())
    }

    /// Whether the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Remove a key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Option<String>> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Layer every entry of `other` on top of this table.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in &other.entries {
            self.set(key.clone(), value.clone());
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Render as comma-joined `key` / `key={value}` tokens.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            match value {
                Some(value) => write!(f, "{key}={{{value}}}")?,
                None => f.write_str(key)?,
            }
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for Options
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (key, value) in iter {
            options.set(key.into(), value.map(Into::into));
        }
        options
    }
}

// ============================================================================
// Packages
// ============================================================================

/// Ordered table of LaTeX packages to load, each with an optional version.
///
/// ```
/// use pgfplots::options::Packages;
///
/// let pkgs = Packages::new().with("pgfplots").with_version("tikz", "2020/01/01");
/// assert_eq!(pkgs.render(), "\\usepackage{pgfplots}\n\\usepackage{tikz}[2020/01/01]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Packages {
    entries: Options,
}

impl Packages {
    /// Create an empty package table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `name` without a version requirement.
    pub fn insert(&mut self, name: impl Into<String>) {
        self.entries.insert_flag(name);
    }

    /// Load `name` with a version suffix.
    pub fn insert_version(&mut self, name: impl Into<String>, version: impl fmt::Display) {
        self.entries.insert(name, version);
    }

    /// Set `name` to an optional version.
    pub fn set(&mut self, name: String, version: Option<String>) {
        self.entries.set(name, version);
    }

    /// Builder form of [`Packages::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.insert(name);
        self
    }

    /// Builder form of [`Packages::insert_version`].
    #[must_use]
    pub fn with_version(mut self, name: impl Into<String>, version: impl fmt::Display) -> Self {
        self.insert_version(name, version);
        self
    }

    /// Version requirement of a package, if it is loaded.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.entries.get(name)
    }

    /// Whether the package is loaded.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Stop loading a package.
    pub fn remove(&mut self, name: &str) -> Option<Option<String>> {
        self.entries.remove(name)
    }

    /// Layer every entry of `other` on top of this table.
    pub fn merge(&mut self, other: &Self) {
        self.entries.merge(&other.entries);
    }

    /// Number of packages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no packages are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate packages in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter()
    }

    /// Render one `\usepackage` line per entry.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Packages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, version)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            match version {
                Some(version) => write!(f, "\\usepackage{{{name}}}[{version}]")?,
                None => write!(f, "\\usepackage{{{name}}}")?,
            }
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for Packages
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
