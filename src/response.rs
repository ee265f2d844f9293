use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Serialize};

/// A request to the remote service whose reply is read in full before it is interpreted,
/// so that error replies can still be inspected for a message.
pub struct JsonRequest {
	builder: RequestBuilder,
}
impl std::fmt::Debug for JsonRequest {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.builder.fmt(f)
	}
}
impl JsonRequest {
	pub fn post(url: &url::Url) -> Self {
		let builder = reqwest::Client::new().post(url.clone());
		Self {
			builder: builder.header("Accept", "application/json"),
		}
	}

	pub fn with_json<Q>(mut self, json: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.json(json);
		self
	}

	pub async fn send(self) -> Result<Reply, reqwest::Error> {
		let response = self.builder.send().await?;
		let status = response.status().as_u16();
		let text = response.text().await?;
		Ok(Reply { status, text })
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
	pub status: u16,
	pub text: String,
}
impl Reply {
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	pub fn json<T>(&self) -> Result<T, InvalidJson>
	where
		T: DeserializeOwned,
	{
		serde_json::from_str(&self.text).map_err(|err| InvalidJson(self.text.clone(), err))
	}
}

#[derive(thiserror::Error, Debug)]
pub struct InvalidJson(pub String, pub serde_json::Error);
impl std::fmt::Display for InvalidJson {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Invalid json: {:?}\nError: {:?}", self.0, self.1)
	}
}
