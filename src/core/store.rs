// src/core/store.rs
use thiserror::Error;

use crate::models::Password;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("No password to save")]
    NoPassword,

    #[error("No saved password at index {index} (have {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Saved passwords, in insertion order. Lives only as long as the process.
#[derive(Debug, Default, Clone)]
pub struct PasswordStore {
    passwords: Vec<Password>,
}

impl PasswordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, password: Password) -> Result<()> {
        if password.is_empty() {
            return Err(StoreError::NoPassword);
        }
        self.passwords.push(password);
        log::info!("Saved password #{}", self.passwords.len());
        Ok(())
    }

    pub fn delete_at(&mut self, index: usize) -> Result<Password> {
        if index >= self.passwords.len() {
            log::warn!("Delete rejected: index {} out of range ({} saved)", index, self.passwords.len());
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.passwords.len(),
            });
        }
        let removed = self.passwords.remove(index);
        log::info!("Deleted saved password at index {}", index);
        Ok(removed)
    }

    /// Remove everything. Returns how many entries were dropped.
    pub fn delete_all(&mut self) -> usize {
        let removed = self.passwords.len();
        self.passwords.clear();
        log::info!("Deleted all saved passwords ({})", removed);
        removed
    }

    pub fn list(&self) -> &[Password] {
        &self.passwords
    }

    pub fn get(&self, index: usize) -> Option<&Password> {
        self.passwords.get(index)
    }

    pub fn len(&self) -> usize {
        self.passwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(values: &[&str]) -> PasswordStore {
        let mut store = PasswordStore::new();
        for v in values {
            store.save(Password::from(*v)).unwrap();
        }
        store
    }

    #[test]
    fn save_appends_at_end() {
        let mut store = store_with(&["first", "second"]);
        store.save(Password::from("third")).unwrap();
        assert_eq!(store.list().last().map(Password::as_str), Some("third"));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn save_rejects_empty() {
        let mut store = PasswordStore::new();
        assert_eq!(store.save(Password::from("")), Err(StoreError::NoPassword));
        assert!(store.is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let store = store_with(&["same", "same"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn delete_at_preserves_order() {
        let mut store = store_with(&["a", "b", "c", "d"]);
        let removed = store.delete_at(1).unwrap();
        assert_eq!(removed.as_str(), "b");
        let remaining: Vec<&str> = store.list().iter().map(Password::as_str).collect();
        assert_eq!(remaining, vec!["a", "c", "d"]);
    }

    #[test]
    fn delete_at_out_of_range() {
        let mut store = store_with(&["a"]);
        assert_eq!(store.delete_at(1), Err(StoreError::IndexOutOfRange { index: 1, len: 1 }));
        assert_eq!(store.len(), 1);

        let mut empty = PasswordStore::new();
        assert!(empty.delete_at(0).is_err());
    }

    #[test]
    fn delete_all_empties() {
        let mut store = store_with(&["a", "b"]);
        assert_eq!(store.delete_all(), 2);
        assert!(store.is_empty());
        assert_eq!(store.delete_all(), 0);
    }
}
