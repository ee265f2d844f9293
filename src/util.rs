use std::future::Future;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

pub fn spawn_local<F, E>(target: &'static str, future: F)
where
	F: Future<Output = Result<(), E>> + 'static,
	E: std::fmt::Display + 'static,
{
	wasm_bindgen_futures::spawn_local(async move {
		if let Err(err) = future.await {
			log::error!(target: target, "{err}");
		}
	});
}

/// Up to two uppercase initials: the first letters of the first and last words of `name`.
pub fn initials(name: Option<&str>, fallback: char) -> String {
	let mut words = name.unwrap_or_default().split_whitespace();
	let Some(first) = words.next() else {
		return fallback.to_string();
	};
	let last = words.last();
	[Some(first), last]
		.into_iter()
		.flatten()
		.filter_map(|word| word.chars().next())
		.flat_map(char::to_uppercase)
		.collect()
}

/// The current value of the input or textarea an event came from.
pub fn event_value(event: &web_sys::Event) -> Option<String> {
	let target = event.target()?;
	if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
		return Some(input.value());
	}
	target.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn initials_from_names() {
		assert_eq!(initials(Some("rohit"), 'U'), "R");
		assert_eq!(initials(Some("Vishnu Kumar Rao"), 'A'), "VR");
		assert_eq!(initials(Some("  ada   lovelace "), 'U'), "AL");
		assert_eq!(initials(Some("   "), 'U'), "U");
		assert_eq!(initials(None, 'A'), "A");
	}
}
