use crate::{
	api::auth::{self, Credentials},
	config::ApiConfig,
	data::Role,
	hooks::{use_page_title, use_storage},
	Route,
};
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link};

#[derive(Clone, PartialEq, Properties)]
pub struct LoginProps {
	pub role: Role,
}

fn text_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
	let state = state.clone();
	Callback::from(move |event: InputEvent| {
		if let Some(value) = crate::util::event_value(&event) {
			state.set(value);
		}
	})
}

#[function_component]
pub fn Login(LoginProps { role }: &LoginProps) -> Html {
	let role = *role;
	use_page_title(match role {
		Role::User => "User Login",
		Role::Admin => "Admin Login",
	});
	let store = use_storage();
	let api = use_context::<ApiConfig>();
	let navigator = use_navigator();
	let username = use_state_eq(String::new);
	let password = use_state_eq(String::new);
	let error = use_state_eq(|| None::<String>);
	let loading = use_state_eq(|| false);

	let onsubmit = {
		let username = username.clone();
		let password = password.clone();
		let error = error.clone();
		let loading = loading.clone();
		Callback::from(move |event: SubmitEvent| {
			event.prevent_default();
			if *loading {
				return;
			}
			let (Some(api), Some(navigator)) = (api.clone(), navigator.clone()) else {
				log::error!(target: "login", "login form rendered outside the app root");
				error.set(Some("Login is unavailable right now.".to_owned()));
				return;
			};
			let credentials = Credentials {
				username: (*username).clone(),
				password: (*password).clone(),
				role,
			};
			error.set(None);
			loading.set(true);
			let store = store.clone();
			let error = error.clone();
			let loading = loading.clone();
			crate::util::spawn_local("login", async move {
				let result = auth::sign_in(&api, &store, &credentials).await;
				loading.set(false);
				match result {
					Ok(route) => {
						navigator.push(&route);
						Ok(())
					}
					Err(err) => {
						error.set(Some(err.to_string()));
						Err(err)
					}
				}
			});
		})
	};

	let other = role.other();
	html! {
		<div class="app-container">
			<div class="form-container">
				<h2>{format!("{} Login", role.label())}</h2>
				<form {onsubmit}>
					{match &*error {
						Some(error) => html!(<p class="error-msg" role="alert">{error.clone()}</p>),
						None => html!(),
					}}
					<div class="form-group">
						<label for="username">{"Username"}</label>
						<input
							type="text" id="username" autocomplete="username"
							placeholder="Enter your username"
							value={(*username).clone()}
							oninput={text_input(&username)}
						/>
					</div>
					<div class="form-group">
						<label for="password">{"Password"}</label>
						<input
							type="password" id="password" autocomplete="current-password"
							placeholder="Enter your password"
							value={(*password).clone()}
							oninput={text_input(&password)}
						/>
					</div>
					<button type="submit" class="login-button" disabled={*loading}>
						{if *loading { "Logging in..." } else { "Login" }}
					</button>
				</form>
				<p class="switch-text">
					<Link<Route> to={Route::login(other)}>{format!("Switch to {} Login", other.label())}</Link<Route>>
				</p>
			</div>
		</div>
	}
}
