use serde::{de::DeserializeOwned, Serialize};
use std::rc::Rc;

mod browser;
pub use browser::*;
mod memory;
pub use memory::*;

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
	#[error("The browser refused to save the data: {0}")]
	Rejected(String),
	#[error("The data could not be encoded: {0}")]
	Encode(#[from] serde_json::Error),
}

/// A string key-value store with the semantics of the browser's `localStorage`.
pub trait KeyValueBackend {
	fn get(&self, key: &str) -> Option<String>;

	fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

	fn remove(&self, key: &str);
}

/// A value that lives under a fixed storage key.
pub trait StoredValue: Serialize + DeserializeOwned {
	fn id() -> &'static str;

	fn encode(&self) -> Result<String, StorageError> {
		Ok(serde_json::to_string(self)?)
	}

	fn decode(raw: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(raw)
	}
}

/// Handle to the persistence backend, shared with components through context.
#[derive(Clone)]
pub struct Store(Rc<dyn KeyValueBackend>);

impl PartialEq for Store {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

impl std::fmt::Debug for Store {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Store").finish()
	}
}

impl Store {
	pub fn new(backend: Rc<dyn KeyValueBackend>) -> Self {
		Self(backend)
	}

	/// The tab's `localStorage`, or an in-memory store when the browser does not offer one
	/// (private browsing modes, sandboxed frames).
	pub fn browser() -> Self {
		match BrowserStorage::open() {
			Some(storage) => Self::new(Rc::new(storage)),
			None => {
				log::warn!(target: "storage", "localStorage is unavailable, progress will not outlive this page");
				Self::new(Rc::new(MemoryStorage::default()))
			}
		}
	}

	/// Reads the value for `T`. Content that cannot be decoded reads the same as no content.
	pub fn read<T: StoredValue>(&self) -> Option<T> {
		let raw = self.0.get(T::id())?;
		match T::decode(&raw) {
			Ok(value) => Some(value),
			Err(err) => {
				log::warn!(target: "storage", "ignoring malformed {:?}: {err}", T::id());
				None
			}
		}
	}

	pub fn write<T: StoredValue>(&self, value: &T) -> Result<(), StorageError> {
		let raw = value.encode()?;
		self.0.set(T::id(), &raw).map_err(|err| {
			log::error!(target: "storage", "failed to write {:?}: {err}", T::id());
			err
		})
	}

	pub fn clear<T: StoredValue>(&self) {
		self.0.remove(T::id());
	}

	/// The stored text for `T` as-is, to hand back to [`Store::restore`].
	pub fn snapshot<T: StoredValue>(&self) -> Option<String> {
		self.0.get(T::id())
	}

	/// Puts back what [`Store::snapshot`] returned; `None` removes the key.
	pub fn restore<T: StoredValue>(&self, raw: Option<String>) {
		let Some(raw) = raw else {
			self.0.remove(T::id());
			return;
		};
		if let Err(err) = self.0.set(T::id(), &raw) {
			log::error!(target: "storage", "failed to restore {:?}: {err}", T::id());
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::UserRecord;
	use assert_matches::assert_matches;

	fn memory_store() -> (Rc<MemoryStorage>, Store) {
		let backend = Rc::new(MemoryStorage::default());
		(backend.clone(), Store::new(backend))
	}

	#[test]
	fn absent_and_malformed_read_the_same() {
		let (backend, store) = memory_store();
		assert_eq!(store.read::<UserRecord>(), None);

		backend.insert_raw("currentUser", "{not json");
		assert_eq!(store.read::<UserRecord>(), None);

		backend.insert_raw("currentUser", r#"{"role": "wizard"}"#);
		assert_eq!(store.read::<UserRecord>(), None);
	}

	#[test]
	fn write_then_read() {
		let (backend, store) = memory_store();
		let user = UserRecord {
			username: "vishnu".into(),
			..Default::default()
		};
		store.write(&user).unwrap();
		assert!(backend.contains("currentUser"));
		assert_eq!(store.read::<UserRecord>(), Some(user));

		store.clear::<UserRecord>();
		assert!(!backend.contains("currentUser"));
		assert_eq!(store.read::<UserRecord>(), None);
	}

	#[test]
	fn quota_failures_surface() {
		let backend = Rc::new(MemoryStorage::with_quota(16));
		let store = Store::new(backend.clone());
		let user = UserRecord {
			username: "someone-with-a-long-name".into(),
			..Default::default()
		};
		assert_matches!(store.write(&user), Err(StorageError::Rejected(_)));
		assert!(!backend.contains("currentUser"));
	}

	#[test]
	fn snapshot_restores_exact_text() {
		let (backend, store) = memory_store();
		backend.insert_raw("currentUser", r#"{"username": "alice"}"#);
		let saved = store.snapshot::<UserRecord>();
		store.clear::<UserRecord>();
		store.restore::<UserRecord>(saved);
		assert_eq!(backend.get("currentUser").as_deref(), Some(r#"{"username": "alice"}"#));

		store.restore::<UserRecord>(None);
		assert!(!backend.contains("currentUser"));
	}

	#[test]
	fn stores_compare_by_backend() {
		let (_, store) = memory_store();
		let (_, other) = memory_store();
		assert_eq!(store, store.clone());
		assert_ne!(store, other);
	}
}
