use yew::prelude::*;
use yew_router::prelude::{BrowserRouter, Switch};

pub mod api;
pub mod components;
pub mod config;
pub mod data;
pub mod hooks;
pub mod logging;
pub mod page;
pub mod progress;
pub mod response;
pub mod route;
pub mod session;
pub mod storage;
pub mod util;

pub use route::Route;

#[function_component]
pub fn App() -> Html {
	let store = use_memo((), |_| storage::Store::browser());
	let api = use_memo((), |_| config::ApiConfig::new(config::LOGIN_ENDPOINT));
	let api = match &*api {
		Ok(api) => api.clone(),
		Err(err) => {
			log::error!(target: "config", "{err}");
			return html! {
				<div class="error-msg" role="alert">{"The tracker is misconfigured and cannot reach its login service."}</div>
			};
		}
	};
	html! {
		<ContextProvider<storage::Store> context={(*store).clone()}>
			<ContextProvider<config::ApiConfig> context={api}>
				<BrowserRouter>
					<Switch<Route> render={Route::html} />
				</BrowserRouter>
			</ContextProvider<config::ApiConfig>>
		</ContextProvider<storage::Store>>
	}
}
