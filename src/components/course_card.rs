use super::{BarSize, ProgressBar};
use crate::data::{format_day, CourseSummary};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CourseCardProps {
	pub course: CourseSummary,
	/// Emits the course name.
	pub on_update: Callback<String>,
}

#[function_component]
pub fn CourseCard(CourseCardProps { course, on_update }: &CourseCardProps) -> Html {
	let onclick = {
		let name = course.name.clone();
		on_update.reform(move |_: MouseEvent| name.clone())
	};
	let last_updated = course.last_updated.map(format_day).unwrap_or_else(|| "N/A".to_owned());
	html! {
		<div class="course-card">
			<h4 class="course-title">{course.name.clone()}</h4>
			<p class="course-description">
				{course.description.as_deref().unwrap_or("No description available.")}
			</p>
			<div class="course-details">
				<p><strong>{"Current Module: "}</strong>{course.current_module.as_deref().unwrap_or("N/A")}</p>
				<p><strong>{"Hours Spent: "}</strong>{format!("{} hours", course.hours_spent)}</p>
				<p><strong>{"Last Updated: "}</strong>{last_updated}</p>
			</div>
			<div class="course-meta">
				<span class={classes!("course-status-badge", course.status.css_class())}>
					{course.status.label()}
				</span>
				<div class="course-progress-indicator">
					<ProgressBar percentage={course.percentage} size={BarSize::Small} />
					<span class="progress-percentage-small">{format!("{}%", course.percentage)}</span>
				</div>
			</div>
			<button {onclick} class="action-button secondary">{"Update Progress"}</button>
		</div>
	}
}
