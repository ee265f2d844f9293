use super::{KeyValueBackend, StorageError};
use std::{cell::RefCell, collections::HashMap};

/// Keeps everything in memory for the life of the page.
/// An optional quota (in bytes of keys plus values) makes writes fail the way a full browser store does.
#[derive(Debug, Default)]
pub struct MemoryStorage {
	entries: RefCell<HashMap<String, String>>,
	quota: Option<usize>,
}

impl MemoryStorage {
	pub fn with_quota(quota: usize) -> Self {
		Self {
			entries: Default::default(),
			quota: Some(quota),
		}
	}

	/// Stores `value` verbatim, bypassing the quota.
	pub fn insert_raw(&self, key: &str, value: &str) {
		self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
	}

	pub fn contains(&self, key: &str) -> bool {
		self.entries.borrow().contains_key(key)
	}

	fn used_without(&self, key: &str) -> usize {
		let entries = self.entries.borrow();
		let used = entries.iter().filter(|(k, _)| k.as_str() != key);
		used.map(|(k, v)| k.len() + v.len()).sum()
	}
}

impl KeyValueBackend for MemoryStorage {
	fn get(&self, key: &str) -> Option<String> {
		self.entries.borrow().get(key).cloned()
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
		if let Some(quota) = self.quota {
			let required = self.used_without(key) + key.len() + value.len();
			if required > quota {
				return Err(StorageError::Rejected(format!(
					"quota of {quota} bytes exceeded ({required} bytes needed)"
				)));
			}
		}
		self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
		Ok(())
	}

	fn remove(&self, key: &str) {
		self.entries.borrow_mut().remove(key);
	}
}
