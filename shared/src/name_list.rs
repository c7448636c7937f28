use serde::{Deserialize, Serialize};

use crate::error::WheelError;
use crate::validation::validate_wheel_name;

/// Ordered, duplicate-free list of names on the wheel. Position decides the
/// sector each name is drawn in.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct NameList {
    names: Vec<String>,
}

impl NameList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trims and appends `raw`, returning the stored name.
    pub fn add(&mut self, raw: &str) -> Result<&str, WheelError> {
        let name = raw.trim();
        validate_wheel_name(name)?;
        if self.contains(name) {
            return Err(WheelError::DuplicateName(name.to_string()));
        }
        self.names.push(name.to_string());
        Ok(&self.names[self.names.len() - 1])
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.names.len() {
            Some(self.names.remove(index))
        } else {
            None
        }
    }

    pub fn remove_name(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.names.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_keeps_order() {
        let mut list = NameList::new();
        assert_eq!(list.add("  Alice "), Ok("Alice"));
        list.add("Bob").unwrap();
        list.add("Carol").unwrap();
        assert_eq!(list.as_slice(), ["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_add_rejects_blank_and_duplicates() {
        let mut list = NameList::new();
        list.add("Alice").unwrap();
        assert!(matches!(list.add("   "), Err(WheelError::InvalidName(_))));
        assert_eq!(list.add(" Alice"), Err(WheelError::DuplicateName("Alice".to_string())));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_by_index_and_name() {
        let mut list = NameList::new();
        for name in ["Alice", "Bob", "Carol"] {
            list.add(name).unwrap();
        }
        assert_eq!(list.remove(1), Some("Bob".to_string()));
        assert_eq!(list.remove(5), None);
        assert!(list.remove_name("Carol"));
        assert!(!list.remove_name("Carol"));
        assert_eq!(list.as_slice(), ["Alice"]);
        list.clear();
        assert!(list.is_empty());
    }
}
