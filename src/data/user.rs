use super::Progress;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
	#[default]
	#[serde(rename = "USER", alias = "user", alias = "User")]
	User,
	#[serde(rename = "admin", alias = "ADMIN", alias = "Admin")]
	Admin,
}

impl Role {
	pub fn label(self) -> &'static str {
		match self {
			Self::User => "User",
			Self::Admin => "Admin",
		}
	}

	pub fn other(self) -> Self {
		match self {
			Self::User => Self::Admin,
			Self::Admin => Self::User,
		}
	}
}

/// The signed-in account, as handed back by the login service and then edited locally.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
	#[serde(default)]
	pub username: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default)]
	pub role: Role,
	#[serde(default, deserialize_with = "Progress::deserialize_nullable")]
	pub progress: Progress,
	// fields the service sends that this app does not read, kept so a full-record write does not drop them
	#[serde(flatten)]
	pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserRecord {
	/// The name to greet the user with, if they have one.
	pub fn display_name(&self) -> Option<&str> {
		let name = match self.role {
			Role::User => Some(self.username.as_str()),
			Role::Admin => self.name.as_deref(),
		};
		name.filter(|name| !name.trim().is_empty())
	}
}
