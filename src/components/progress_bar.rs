use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BarSize {
	Small,
	#[default]
	Medium,
	Large,
}

#[derive(Clone, PartialEq, Properties)]
pub struct ProgressBarProps {
	pub percentage: u8,
	#[prop_or_default]
	pub size: BarSize,
}

#[function_component]
pub fn ProgressBar(ProgressBarProps { percentage, size }: &ProgressBarProps) -> Html {
	let size = match size {
		BarSize::Small => Some("small"),
		BarSize::Medium => None,
		BarSize::Large => Some("large"),
	};
	html! {
		<div
			class={classes!("progress-bar-container", size)}
			role="progressbar"
			aria-valuemin="0" aria-valuemax="100" aria-valuenow={percentage.to_string()}
		>
			<div class="progress-bar-fill" style={format!("width: {percentage}%;")} />
		</div>
	}
}
