use yew::prelude::*;

#[function_component]
pub fn Footer() -> Html {
	let year = time::OffsetDateTime::now_utc().year();
	html! {
		<footer class="footer">
			<p>{format!("© {year} Course Progress Tracker.")}</p>
			<div class="footer-links">
				<a href="/privacy">{"Privacy Policy"}</a>
				<a href="/terms">{"Terms of Service"}</a>
				<a href="/contact-us">{"Contact Us"}</a>
			</div>
		</footer>
	}
}
