use crate::{config, storage::Store};
use yew::prelude::*;

/// The persistence handle provided by the app root.
#[hook]
pub fn use_storage() -> Store {
	let store = use_context::<Store>();
	// components rendered outside the app root still get the tab's storage
	store.unwrap_or_else(Store::browser)
}

#[hook]
pub fn use_page_title(page: &'static str) {
	yew_hooks::use_title(format!("{page} | {}", config::APP_TITLE));
}
