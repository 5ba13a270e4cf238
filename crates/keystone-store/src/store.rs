//! The shared, namespaced configuration store.
//!
//! [`ConfigStore`] is the single runtime store for the whole process.
//! It is constructed explicitly at startup (usually via
//! [`ConfigStore::with_defaults`]), shared as `Arc<ConfigStore>`, and
//! mutated only through its narrow write surface. Parameter handlers are
//! the intended writers; everything else reads.
//!
//! # Example
//!
//! ```
//! use keystone_store::{ConfigStore, ConfigValue};
//!
//! let store = ConfigStore::with_defaults();
//! assert_eq!(store.get("data", "host").unwrap(), ConfigValue::from("localhost"));
//!
//! store.set("data", "host", "example.org".into()).unwrap();
//! assert_eq!(store.get("data", "host").unwrap(), ConfigValue::from("example.org"));
//! ```

use parking_lot::RwLock;

use crate::schema::KeystoneConfig;
use crate::value::{ConfigTable, ConfigValue};
use crate::StoreError;

/// The process-wide configuration store.
///
/// One root namespace table behind a single [`RwLock`]. Writes are
/// infrequent and mostly happen at startup, so a coarse whole-store write
/// lock is sufficient; reads take the shared lock and clone values out.
///
/// # Invariants
///
/// - A read of any key that was defaulted or written returns the most
///   recent write.
/// - A read of an unset key fails with [`StoreError::KeyNotFound`], never
///   a sentinel value.
/// - Namespaces are created lazily on first write.
#[derive(Debug, Default)]
pub struct ConfigStore {
    root: RwLock<ConfigTable>,
}

fn dotted(namespace: &str, key: &str) -> String {
    format!("{namespace}.{key}")
}

impl ConfigStore {
    /// Creates an empty store with no namespaces.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: RwLock::new(ConfigTable::new()),
        }
    }

    /// Creates a store seeded from the built-in default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::from_config(&KeystoneConfig::default())
    }

    /// Creates a store seeded from a typed configuration schema.
    #[must_use]
    pub fn from_config(config: &KeystoneConfig) -> Self {
        Self::from_table(config.to_table())
    }

    /// Creates a store from an already-built namespace tree.
    #[must_use]
    pub fn from_table(root: ConfigTable) -> Self {
        Self {
            root: RwLock::new(root),
        }
    }

    /// Reads the value at `namespace.key`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::KeyNotFound`] if the namespace or key is absent.
    /// - [`StoreError::NotANamespace`] if `namespace` resolves to a leaf.
    pub fn get(&self, namespace: &str, key: &str) -> Result<ConfigValue, StoreError> {
        let root = self.root.read();
        let entry = root
            .get(namespace)
            .ok_or_else(|| StoreError::key_not_found(dotted(namespace, key)))?;
        let table = entry
            .as_table()
            .ok_or_else(|| StoreError::not_a_namespace(namespace, entry.kind()))?;
        table
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::key_not_found(dotted(namespace, key)))
    }

    /// Writes `value` to `namespace.key`, creating the namespace if it
    /// does not exist yet and unconditionally overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotANamespace`] if `namespace` already exists
    /// as a leaf value.
    pub fn set(&self, namespace: &str, key: &str, value: ConfigValue) -> Result<(), StoreError> {
        let mut root = self.root.write();
        let entry = root
            .entry(namespace.to_string())
            .or_insert_with(|| ConfigValue::Table(ConfigTable::new()));
        match entry {
            ConfigValue::Table(table) => {
                table.insert(key.to_string(), value);
                Ok(())
            }
            other => Err(StoreError::not_a_namespace(namespace, other.kind())),
        }
    }

    /// Removes `namespace.key` and returns its value.
    ///
    /// # Errors
    ///
    /// - [`StoreError::KeyNotFound`] if the namespace or key is absent.
    /// - [`StoreError::NotANamespace`] if `namespace` resolves to a leaf.
    pub fn remove(&self, namespace: &str, key: &str) -> Result<ConfigValue, StoreError> {
        let mut root = self.root.write();
        let entry = root
            .get_mut(namespace)
            .ok_or_else(|| StoreError::key_not_found(dotted(namespace, key)))?;
        match entry {
            ConfigValue::Table(table) => table
                .shift_remove(key)
                .ok_or_else(|| StoreError::key_not_found(dotted(namespace, key))),
            other => Err(StoreError::not_a_namespace(namespace, other.kind())),
        }
    }

    /// Returns `true` if `namespace.key` currently holds a value.
    #[must_use]
    pub fn contains(&self, namespace: &str, key: &str) -> bool {
        self.root
            .read()
            .get(namespace)
            .and_then(ConfigValue::as_table)
            .is_some_and(|table| table.contains_key(key))
    }

    /// Reads the value at a dotted path such as `data.host`.
    ///
    /// A single-segment path resolves to a root-level entry, which may be
    /// a whole namespace.
    ///
    /// # Errors
    ///
    /// - [`StoreError::KeyNotFound`] if any segment is absent.
    /// - [`StoreError::NotANamespace`] if a non-final segment resolves to
    ///   a leaf.
    pub fn get_path(&self, path: &str) -> Result<ConfigValue, StoreError> {
        let root = self.root.read();
        let mut current: &ConfigTable = &root;
        let segments: Vec<&str> = path.split('.').collect();
        let (last, prefix) = segments
            .split_last()
            .ok_or_else(|| StoreError::key_not_found(path))?;

        let mut walked = String::new();
        for segment in prefix {
            if !walked.is_empty() {
                walked.push('.');
            }
            walked.push_str(segment);
            let entry = current
                .get(*segment)
                .ok_or_else(|| StoreError::key_not_found(path))?;
            current = entry
                .as_table()
                .ok_or_else(|| StoreError::not_a_namespace(walked.clone(), entry.kind()))?;
        }

        current
            .get(*last)
            .cloned()
            .ok_or_else(|| StoreError::key_not_found(path))
    }

    /// Writes `value` at a dotted path, creating intermediate namespaces
    /// as needed. Equivalent to [`ConfigStore::set`] for two-segment paths.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotANamespace`] if an intermediate segment
    /// already exists as a leaf, or [`StoreError::KeyNotFound`] for an
    /// empty path.
    pub fn set_path(&self, path: &str, value: ConfigValue) -> Result<(), StoreError> {
        let mut root = self.root.write();
        let segments: Vec<&str> = path.split('.').collect();
        let (last, prefix) = segments
            .split_last()
            .ok_or_else(|| StoreError::key_not_found(path))?;

        let mut current: &mut ConfigTable = &mut root;
        let mut walked = String::new();
        for segment in prefix {
            if !walked.is_empty() {
                walked.push('.');
            }
            walked.push_str(segment);
            let entry = current
                .entry((*segment).to_string())
                .or_insert_with(|| ConfigValue::Table(ConfigTable::new()));
            match entry {
                ConfigValue::Table(table) => current = table,
                other => {
                    return Err(StoreError::not_a_namespace(walked, other.kind()));
                }
            }
        }

        current.insert((*last).to_string(), value);
        Ok(())
    }

    /// Reads `namespace.key` as a string.
    ///
    /// # Errors
    ///
    /// In addition to [`ConfigStore::get`] errors, returns
    /// [`StoreError::TypeMismatch`] if the value is not a string.
    pub fn get_str(&self, namespace: &str, key: &str) -> Result<String, StoreError> {
        let value = self.get(namespace, key)?;
        value.as_str().map(str::to_string).ok_or_else(|| {
            StoreError::type_mismatch(dotted(namespace, key), "string", value.kind())
        })
    }

    /// Reads `namespace.key` as an integer.
    ///
    /// # Errors
    ///
    /// In addition to [`ConfigStore::get`] errors, returns
    /// [`StoreError::TypeMismatch`] if the value is not an integer.
    pub fn get_int(&self, namespace: &str, key: &str) -> Result<i64, StoreError> {
        let value = self.get(namespace, key)?;
        value.as_int().ok_or_else(|| {
            StoreError::type_mismatch(dotted(namespace, key), "integer", value.kind())
        })
    }

    /// Returns a deep copy of the current namespace tree.
    ///
    /// Intended for export and inspection; the copy does not track
    /// subsequent writes.
    #[must_use]
    pub fn snapshot(&self) -> ConfigTable {
        self.root.read().clone()
    }
}
