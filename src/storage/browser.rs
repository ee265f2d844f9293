use super::{KeyValueBackend, StorageError};
use gloo_storage::{LocalStorage, Storage};

/// The tab's `window.localStorage`.
pub struct BrowserStorage(web_sys::Storage);

impl BrowserStorage {
	pub fn open() -> Option<Self> {
		// `LocalStorage::raw` throws when storage is disabled, so probe the window first.
		gloo_utils::window().local_storage().ok().flatten()?;
		Some(Self(LocalStorage::raw()))
	}
}

impl KeyValueBackend for BrowserStorage {
	fn get(&self, key: &str) -> Option<String> {
		match self.0.get_item(key) {
			Ok(value) => value,
			Err(err) => {
				log::warn!(target: "storage", "failed to read {key:?}: {err:?}");
				None
			}
		}
	}

	fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
		self.0.set_item(key, value).map_err(|err| {
			let reason = err.as_string().unwrap_or_else(|| format!("{err:?}"));
			StorageError::Rejected(reason)
		})
	}

	fn remove(&self, key: &str) {
		LocalStorage::delete(key);
	}
}
