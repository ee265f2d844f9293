use crate::{
	config::ApiConfig,
	data::Role,
	response::{InvalidJson, JsonRequest, Reply},
	session::Session,
	storage::{Store, StorageError},
	Route,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize)]
pub struct Credentials {
	pub username: String,
	pub password: String,
	pub role: Role,
}
impl std::fmt::Debug for Credentials {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Credentials")
			.field("username", &self.username)
			.field("role", &self.role)
			.finish_non_exhaustive()
	}
}

#[derive(thiserror::Error, Debug)]
pub enum LoginError {
	#[error("{0}")]
	Rejected(String),
	#[error("Network error")]
	Network(#[from] reqwest::Error),
	#[error("The login service sent an unexpected reply")]
	InvalidJson(#[from] InvalidJson),
	#[error("Could not save your session: {0}")]
	Storage(#[from] StorageError),
}

#[derive(Deserialize)]
struct Rejection {
	#[serde(default)]
	message: Option<String>,
}

/// Classifies a reply from the login endpoint.
pub fn interpret(reply: &Reply) -> Result<Session, LoginError> {
	if reply.is_success() {
		return Ok(reply.json::<Session>()?);
	}
	let message = reply.json::<Rejection>().ok().and_then(|rejection| rejection.message);
	let message = message.filter(|message| !message.trim().is_empty());
	Err(LoginError::Rejected(message.unwrap_or_else(|| "Login failed".to_owned())))
}

/// Exchanges credentials for a session. Nothing is persisted here.
pub async fn login(config: &ApiConfig, credentials: &Credentials) -> Result<Session, LoginError> {
	log::debug!(target: "login", "signing in {:?} as {}", credentials.username, credentials.role.label());
	let reply = JsonRequest::post(&config.login_endpoint).with_json(credentials).send().await?;
	log::debug!(target: "login", "login service replied with status {}", reply.status);
	interpret(&reply)
}

/// Logs in and persists the session for the requested role.
/// Returns the dashboard to show; on any failure nothing has been stored.
pub async fn sign_in(config: &ApiConfig, store: &Store, credentials: &Credentials) -> Result<Route, LoginError> {
	let session = login(config, credentials).await?;
	Ok(session.establish(store, credentials.role)?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_matches::assert_matches;

	fn reply(status: u16, text: &str) -> Reply {
		Reply {
			status,
			text: text.to_owned(),
		}
	}

	#[test]
	fn success_carries_token_and_user() {
		let session = interpret(&reply(
			200,
			r#"{"token": "abc", "user": {"username": "rohit", "role": "USER", "progress": {}}}"#,
		))
		.unwrap();
		assert_eq!(session.token.0, "abc");
		assert_eq!(session.user.username, "rohit");
	}

	#[test]
	fn rejection_message_is_surfaced() {
		let err = interpret(&reply(401, r#"{"message": "Invalid username or password"}"#)).unwrap_err();
		assert_eq!(err.to_string(), "Invalid username or password");
	}

	#[test]
	fn rejection_without_message_is_generic() {
		assert_matches!(interpret(&reply(500, "Internal Server Error")), Err(LoginError::Rejected(m)) if m == "Login failed");
		assert_matches!(interpret(&reply(403, r#"{"message": ""}"#)), Err(LoginError::Rejected(m)) if m == "Login failed");
	}

	#[test]
	fn success_without_session_is_invalid() {
		assert_matches!(interpret(&reply(200, r#"{"ok": true}"#)), Err(LoginError::InvalidJson(_)));
	}

	#[test]
	fn password_is_not_debug_printed() {
		let credentials = Credentials {
			username: "rohit".into(),
			password: "hunter2".into(),
			role: Role::User,
		};
		assert!(!format!("{credentials:?}").contains("hunter2"));
		let body = serde_json::to_value(&credentials).unwrap();
		assert_eq!(body["role"], "USER");
		assert_eq!(body["password"], "hunter2");
	}
}
