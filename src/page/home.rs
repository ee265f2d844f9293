use crate::{components::Footer, config, hooks::use_page_title, Route};
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component]
pub fn Home() -> Html {
	use_page_title("Home");
	html! {<>
		<main class="home">
			<section class="hero">
				<h1>{config::APP_TITLE}</h1>
				<p>{"Log the time you spend on each course and watch your progress add up."}</p>
				<div class="hero-actions">
					<Link<Route> classes={"action-button primary"} to={Route::UserLogin}>{"Learner Login"}</Link<Route>>
					<Link<Route> classes={"action-button secondary"} to={Route::AdminLogin}>{"Admin Login"}</Link<Route>>
				</div>
			</section>
		</main>
		<Footer />
	</>}
}
