use course_tracker::{config, logging};

#[cfg(target_family = "wasm")]
fn main() {
	logging::init(logging::Config::default().prefer_target());
	yew::Renderer::<course_tracker::App>::new().render();
}

#[cfg(not(target_family = "wasm"))]
fn main() {
	logging::init(logging::Config::default());
	log::error!(
		target: "course-tracker",
		"{} runs in the browser; build it for wasm32-unknown-unknown and serve the output",
		config::APP_TITLE
	);
}
