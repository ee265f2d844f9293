use crate::{data::Role, page};
use yew::prelude::*;
use yew_router::prelude::{Link, Routable};

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
	#[at("/")]
	Home,
	#[at("/user-login")]
	UserLogin,
	#[at("/admin-login")]
	AdminLogin,
	#[at("/user-dashboard")]
	UserDashboard,
	/// Where the progress form returns to once it is done.
	#[at("/dashboard")]
	Dashboard,
	#[at("/admin-dashboard")]
	AdminDashboard,
	#[at("/add-progress")]
	AddProgress,
	/// `course` is the plain course name; the router percent-encodes it in the path.
	#[at("/update-progress/:course")]
	UpdateProgress { course: String },
	#[not_found]
	#[at("/404")]
	NotFound,
}

impl Route {
	pub fn update_progress(course_name: &str) -> Self {
		Self::UpdateProgress {
			course: course_name.to_owned(),
		}
	}

	pub fn login(role: Role) -> Self {
		match role {
			Role::User => Self::UserLogin,
			Role::Admin => Self::AdminLogin,
		}
	}

	pub fn dashboard(role: Role) -> Self {
		match role {
			Role::User => Self::UserDashboard,
			Role::Admin => Self::AdminDashboard,
		}
	}

	pub fn html(self) -> Html {
		match self {
			Self::Home => html!(<page::Home />),
			Self::UserLogin => html!(<page::Login role={Role::User} />),
			Self::AdminLogin => html!(<page::Login role={Role::Admin} />),
			Self::UserDashboard | Self::Dashboard => html!(<page::UserDashboard />),
			Self::AdminDashboard => html!(<page::AdminDashboard />),
			Self::AddProgress => html!(<page::AddProgress />),
			Self::UpdateProgress { course } => html!(<page::UpdateProgress course_name={course} />),
			Self::NotFound => html! {
				<div class="not-found">
					<h1>{"404: Page not found"}</h1>
					<Link<Route> to={Route::Home}>{"Back to the home page"}</Link<Route>>
				</div>
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_matches::assert_matches;

	#[test]
	fn course_names_are_encoded_once() {
		assert_eq!(Route::update_progress("Data Science").to_path(), "/update-progress/Data%20Science");
		assert_eq!(Route::update_progress("C++ & Rust").to_path(), "/update-progress/C%2B%2B%20%26%20Rust");
		for name in ["Data Science", "C++ & Rust", "Intro/Advanced", "100% Python", "Literal %20 Name"] {
			let route = Route::update_progress(name);
			assert_eq!(Route::recognize(&route.to_path()), Some(route.clone()), "{name}");
			assert_matches!(route, Route::UpdateProgress { course } if course == name);
		}
	}

	#[test]
	fn known_paths_are_recognized() {
		assert_eq!(Route::recognize("/user-dashboard"), Some(Route::UserDashboard));
		assert_eq!(Route::recognize("/dashboard"), Some(Route::Dashboard));
		assert_eq!(Route::recognize("/admin-login"), Some(Route::AdminLogin));
		assert_eq!(
			Route::recognize("/update-progress/Data%20Science"),
			Some(Route::update_progress("Data Science"))
		);
	}

	#[test]
	fn role_routes() {
		assert_eq!(Route::login(Role::Admin), Route::AdminLogin);
		assert_eq!(Route::dashboard(Role::User), Route::UserDashboard);
	}
}
