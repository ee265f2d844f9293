use super::{Banner, BannerKind};
use crate::{
	hooks::use_storage,
	progress::{self, Field, ProgressDraft, SubmitError, Submitted, ValidationErrors},
	Route,
};
use time::OffsetDateTime;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

#[derive(Clone, PartialEq, Properties)]
pub struct ProgressFormProps {
	/// Only read when the form mounts; give the form a new `key` to start over.
	pub initial: ProgressDraft,
	/// Locks the course name, for editing a course that is already chosen.
	#[prop_or_default]
	pub course_locked: bool,
	pub submit_label: AttrValue,
	pub on_saved: Callback<Submitted>,
	#[prop_or_default]
	pub on_cancel: Option<Callback<()>>,
}

fn reducer(
	state: &UseStateHandle<ProgressDraft>,
	apply: impl Fn(&mut ProgressDraft, String) + 'static,
) -> Callback<InputEvent> {
	let state = state.clone();
	Callback::from(move |event: InputEvent| {
		let Some(value) = crate::util::event_value(&event) else {
			return;
		};
		let mut draft = (*state).clone();
		apply(&mut draft, value);
		state.set(draft);
	})
}

fn field_classes(errors: &ValidationErrors, field: Field) -> Classes {
	classes!("form-input", errors.get(field).map(|_| "is-invalid"))
}

fn field_error(errors: &ValidationErrors, field: Field) -> Html {
	match errors.get(field) {
		Some(error) => html!(<p class="field-error">{error.to_string()}</p>),
		None => html!(),
	}
}

fn required_label(field: Field, id: &'static str) -> Html {
	html! {
		<label for={id}>{field.label()}<span class="required">{" *"}</span></label>
	}
}

#[function_component]
pub fn ProgressForm(props: &ProgressFormProps) -> Html {
	let store = use_storage();
	let navigator = use_navigator();
	let draft = use_state_eq({
		let initial = props.initial.clone();
		move || initial
	});
	let errors = use_state_eq(ValidationErrors::default);
	let failure = use_state_eq(|| None::<AttrValue>);

	let onsubmit = {
		let draft = draft.clone();
		let errors = errors.clone();
		let failure = failure.clone();
		let on_saved = props.on_saved.clone();
		Callback::from(move |event: SubmitEvent| {
			event.prevent_default();
			match progress::submit(&store, &draft, OffsetDateTime::now_utc()) {
				Ok(submitted) => {
					errors.set(ValidationErrors::default());
					failure.set(None);
					on_saved.emit(submitted);
				}
				Err(SubmitError::Invalid(invalid)) => {
					failure.set(Some(invalid.to_string().into()));
					errors.set(invalid);
				}
				Err(SubmitError::NotLoggedIn) => {
					log::warn!(target: "progress", "no signed-in user, sending to login");
					if let Some(navigator) = &navigator {
						navigator.push(&Route::UserLogin);
					}
				}
				Err(err @ SubmitError::Storage(_)) => {
					errors.set(ValidationErrors::default());
					failure.set(Some(err.to_string().into()));
				}
			}
		})
	};

	let dismiss_failure = {
		let failure = failure.clone();
		Callback::from(move |_: ()| failure.set(None))
	};
	let cancel = props.on_cancel.clone().map(|on_cancel| {
		html! {
			<button type="button" class="action-button secondary" onclick={on_cancel.reform(|_: MouseEvent| ())}>
				{"Cancel"}
			</button>
		}
	});

	html! {
		<form class="progress-form" {onsubmit} novalidate=true>
			{match &*failure {
				Some(message) => html!(<Banner kind={BannerKind::Error} message={message.clone()} on_dismiss={dismiss_failure} />),
				None => html!(),
			}}
			<div class="form-grid">
				<div class="form-group">
					{required_label(Field::CourseName, "courseName")}
					<input
						type="text" id="courseName"
						class={field_classes(&errors, Field::CourseName)}
						value={draft.course_name.clone()}
						readonly={props.course_locked} disabled={props.course_locked}
						oninput={reducer(&draft, |draft, value| draft.course_name = value)}
						placeholder="e.g., JavaScript Fundamentals"
					/>
					{field_error(&errors, Field::CourseName)}
				</div>
				<div class="form-group">
					{required_label(Field::CurrentModule, "currentModule")}
					<input
						type="text" id="currentModule"
						class={field_classes(&errors, Field::CurrentModule)}
						value={draft.current_module.clone()}
						oninput={reducer(&draft, |draft, value| draft.current_module = value)}
						placeholder="e.g., Arrays and Objects"
					/>
					{field_error(&errors, Field::CurrentModule)}
				</div>
				<div class="form-group">
					{required_label(Field::HoursSpent, "hoursSpent")}
					<input
						type="number" id="hoursSpent" step="0.1" min="0"
						class={field_classes(&errors, Field::HoursSpent)}
						value={draft.hours_spent.clone()}
						oninput={reducer(&draft, |draft, value| draft.hours_spent = value)}
						placeholder="e.g., 2.5"
					/>
					{field_error(&errors, Field::HoursSpent)}
				</div>
				<div class="form-group">
					{required_label(Field::Percentage, "percentage")}
					<input
						type="number" id="percentage" step="1" min="0" max="100"
						class={field_classes(&errors, Field::Percentage)}
						value={draft.percentage.clone()}
						oninput={reducer(&draft, |draft, value| draft.percentage = value)}
						placeholder="e.g., 75"
					/>
					{field_error(&errors, Field::Percentage)}
				</div>
				<div class="form-group">
					{required_label(Field::Date, "date")}
					<input
						type="date" id="date"
						class={field_classes(&errors, Field::Date)}
						value={draft.date.clone()}
						oninput={reducer(&draft, |draft, value| draft.date = value)}
					/>
					{field_error(&errors, Field::Date)}
				</div>
			</div>
			<div class="form-group">
				<label for="notes">{"Notes (Optional)"}</label>
				<textarea
					id="notes" rows="4" class="form-input"
					value={draft.notes.clone()}
					oninput={reducer(&draft, |draft, value| draft.notes = value)}
					placeholder="Add any notes about your progress..."
				/>
			</div>
			<div class="form-actions">
				{cancel}
				<button type="submit" class="action-button primary">{props.submit_label.clone()}</button>
			</div>
		</form>
	}
}
