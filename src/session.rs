use crate::{
	config,
	data::{Role, UserRecord},
	storage::{Store, StorageError, StoredValue},
	Route,
};
use serde::{Deserialize, Serialize};

impl StoredValue for UserRecord {
	fn id() -> &'static str {
		config::CURRENT_USER_KEY
	}
}

/// The signed-in administrator. Same shape as a user, kept under its own key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminRecord(pub UserRecord);

impl StoredValue for AdminRecord {
	fn id() -> &'static str {
		config::ADMIN_USER_KEY
	}
}

/// Bearer token issued at login. Stored as the bare string rather than as JSON.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(pub String);

impl std::fmt::Debug for SessionToken {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str("SessionToken(..)")
	}
}

impl StoredValue for SessionToken {
	fn id() -> &'static str {
		config::TOKEN_KEY
	}

	fn encode(&self) -> Result<String, StorageError> {
		Ok(self.0.clone())
	}

	fn decode(raw: &str) -> Result<Self, serde_json::Error> {
		Ok(Self(raw.to_owned()))
	}
}

/// What a successful login hands back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Session {
	pub token: SessionToken,
	pub user: UserRecord,
}

impl Session {
	/// Persists the session for `role` and returns the dashboard to show next.
	/// If either write fails, whatever was stored before is put back.
	pub fn establish(self, store: &Store, role: Role) -> Result<Route, StorageError> {
		let previous_record = snapshot_record(store, role);
		let previous_token = store.snapshot::<SessionToken>();
		if let Err(err) = self.persist(store, role) {
			restore_record(store, role, previous_record);
			store.restore::<SessionToken>(previous_token);
			return Err(err);
		}
		log::info!(target: "session", "signed in as {}", role.label());
		Ok(Route::dashboard(role))
	}

	fn persist(self, store: &Store, role: Role) -> Result<(), StorageError> {
		match role {
			Role::User => store.write(&self.user)?,
			Role::Admin => store.write(&AdminRecord(self.user))?,
		}
		store.write(&self.token)
	}
}

fn snapshot_record(store: &Store, role: Role) -> Option<String> {
	match role {
		Role::User => store.snapshot::<UserRecord>(),
		Role::Admin => store.snapshot::<AdminRecord>(),
	}
}

fn restore_record(store: &Store, role: Role, raw: Option<String>) {
	match role {
		Role::User => store.restore::<UserRecord>(raw),
		Role::Admin => store.restore::<AdminRecord>(raw),
	}
}

fn clear_record(store: &Store, role: Role) {
	match role {
		Role::User => store.clear::<UserRecord>(),
		Role::Admin => store.clear::<AdminRecord>(),
	}
}

/// Forgets the signed-in account for `role`.
pub fn logout(store: &Store, role: Role) {
	clear_record(store, role);
	store.clear::<SessionToken>();
	log::info!(target: "session", "signed out of {}", role.label());
}

/// The signed-in learner, or `None` when the dashboard should send them to log in.
pub fn current_user(store: &Store) -> Option<UserRecord> {
	store.read::<UserRecord>()
}

/// The signed-in administrator. A stored record without the admin role does not count.
pub fn current_admin(store: &Store) -> Option<UserRecord> {
	let AdminRecord(admin) = store.read::<AdminRecord>()?;
	(admin.role == Role::Admin).then_some(admin)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::storage::{KeyValueBackend, MemoryStorage};
	use std::rc::Rc;

	fn session(role: Role) -> Session {
		Session {
			token: SessionToken("tok-123".into()),
			user: UserRecord {
				username: "rohit".into(),
				name: Some("Rohit Sharma".into()),
				role,
				..Default::default()
			},
		}
	}

	#[test]
	fn user_login_persists_record_and_token() {
		let backend = Rc::new(MemoryStorage::default());
		let store = Store::new(backend.clone());
		let route = session(Role::User).establish(&store, Role::User).unwrap();
		assert_eq!(route, Route::UserDashboard);
		assert_eq!(current_user(&store).map(|u| u.username), Some("rohit".to_owned()));
		assert_eq!(backend.get("token"), Some("tok-123".to_owned()));
		assert_eq!(current_admin(&store), None);
	}

	#[test]
	fn admin_login_uses_admin_key() {
		let store = Store::new(Rc::new(MemoryStorage::default()));
		let route = session(Role::Admin).establish(&store, Role::Admin).unwrap();
		assert_eq!(route, Route::AdminDashboard);
		assert!(current_admin(&store).is_some());
		assert_eq!(current_user(&store), None);
	}

	#[test]
	fn admin_record_without_admin_role_is_rejected() {
		let store = Store::new(Rc::new(MemoryStorage::default()));
		session(Role::User).establish(&store, Role::Admin).unwrap();
		assert_eq!(current_admin(&store), None);
	}

	#[test]
	fn failed_login_write_leaves_nothing() {
		let backend = Rc::new(MemoryStorage::with_quota(8));
		let store = Store::new(backend.clone());
		assert!(session(Role::User).establish(&store, Role::User).is_err());
		assert!(!backend.contains("currentUser"));
		assert!(!backend.contains("token"));
	}

	/// Accepts everything except the token.
	#[derive(Default)]
	struct TokenRejecting(MemoryStorage);

	impl KeyValueBackend for TokenRejecting {
		fn get(&self, key: &str) -> Option<String> {
			self.0.get(key)
		}

		fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
			match key {
				"token" => Err(StorageError::Rejected("quota exceeded".into())),
				_ => self.0.set(key, value),
			}
		}

		fn remove(&self, key: &str) {
			self.0.remove(key)
		}
	}

	#[test]
	fn failed_relogin_keeps_previous_session() {
		let backend = Rc::new(TokenRejecting::default());
		backend.0.insert_raw("currentUser", r#"{"username":"alice","role":"USER"}"#);
		backend.0.insert_raw("token", "t1");
		let store = Store::new(backend.clone());

		let bob = Session {
			token: SessionToken("t2".into()),
			user: UserRecord {
				username: "bob".into(),
				..Default::default()
			},
		};
		assert!(bob.establish(&store, Role::User).is_err());
		assert_eq!(current_user(&store).map(|u| u.username), Some("alice".to_owned()));
		assert_eq!(backend.get("currentUser").as_deref(), Some(r#"{"username":"alice","role":"USER"}"#));
		assert_eq!(backend.get("token").as_deref(), Some("t1"));
	}

	#[test]
	fn failed_first_login_leaves_nothing() {
		let backend = Rc::new(TokenRejecting::default());
		let store = Store::new(backend.clone());
		assert!(session(Role::Admin).establish(&store, Role::Admin).is_err());
		assert!(!backend.0.contains("adminUser"));
		assert!(!backend.0.contains("token"));
	}

	#[test]
	fn logout_forgets_the_user() {
		let backend = Rc::new(MemoryStorage::default());
		let store = Store::new(backend.clone());
		session(Role::User).establish(&store, Role::User).unwrap();
		logout(&store, Role::User);
		assert!(!backend.contains("currentUser"));
		assert!(!backend.contains("token"));
		assert_eq!(current_user(&store), None);
	}
}
