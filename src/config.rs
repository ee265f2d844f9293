use url::Url;

pub static APP_TITLE: &str = "VINSYS Tracker";
pub static LOGIN_ENDPOINT: &str = "https://ltbpmvnp2b.execute-api.us-west-2.amazonaws.com/prod/userlogin";

pub static CURRENT_USER_KEY: &str = "currentUser";
pub static ADMIN_USER_KEY: &str = "adminUser";
pub static TOKEN_KEY: &str = "token";

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("Invalid login endpoint {endpoint:?}: {reason}")]
pub struct ConfigError {
	pub endpoint: String,
	pub reason: url::ParseError,
}

/// Where the remote service lives. Provided to components through context.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
	pub login_endpoint: Url,
}

impl ApiConfig {
	pub fn new(login_endpoint: &str) -> Result<Self, ConfigError> {
		let login_endpoint = Url::parse(login_endpoint).map_err(|reason| ConfigError {
			endpoint: login_endpoint.to_owned(),
			reason,
		})?;
		Ok(Self { login_endpoint })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtin_endpoint_is_valid() {
		let config = ApiConfig::new(LOGIN_ENDPOINT).unwrap();
		assert_eq!(config.login_endpoint.scheme(), "https");
		assert_eq!(config.login_endpoint.path(), "/prod/userlogin");
	}

	#[test]
	fn relative_endpoint_is_rejected() {
		let err = ApiConfig::new("/prod/userlogin").unwrap_err();
		assert_eq!(err.reason, url::ParseError::RelativeUrlWithoutBase);
	}
}
