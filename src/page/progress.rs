use crate::{
	components::{Banner, BannerKind, Notice, ProgressForm},
	hooks::{use_page_title, use_storage},
	progress::{ProgressDraft, Submitted},
	session, Route,
};
use time::OffsetDateTime;
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Redirect};
use yewdux::prelude::use_store;

#[derive(Clone, PartialEq, Properties)]
pub struct UpdateProgressProps {
	/// Already decoded from the path.
	pub course_name: AttrValue,
}

#[function_component]
pub fn UpdateProgress(UpdateProgressProps { course_name }: &UpdateProgressProps) -> Html {
	use_page_title("Update Progress");
	let store = use_storage();
	let navigator = use_navigator();
	let (_, notice) = use_store::<Notice>();

	let Some(user) = session::current_user(&store) else {
		return html!(<Redirect<Route> to={Route::UserLogin} />);
	};
	let existing = user.progress.get(course_name.as_str());
	let initial = ProgressDraft::for_course(course_name.as_str(), existing, OffsetDateTime::now_utc().date());
	let missing = existing.is_none().then(|| {
		let message = format!("\"{course_name}\" has no progress yet. You can add it.");
		html!(<Banner kind={BannerKind::Info} message={message} />)
	});

	let on_saved = {
		let navigator = navigator.clone();
		Callback::from(move |saved: Submitted| {
			log::info!(target: "progress", "updated {:?}", saved.course_name);
			notice.set(Notice::new("Progress updated successfully!"));
			if let Some(navigator) = &navigator {
				navigator.push(&Route::Dashboard);
			}
		})
	};
	let on_cancel = Callback::from(move |_: ()| {
		if let Some(navigator) = &navigator {
			navigator.push(&Route::Dashboard);
		}
	});

	html! {
		<div class="update-progress-container">
			<div class="update-progress-card">
				<h2 class="card-title">{"Update Course Progress"}</h2>
				<p class="card-subtitle">{course_name.clone()}</p>
				{missing}
				<ProgressForm
					key={course_name.as_str()}
					{initial}
					course_locked=true
					submit_label={"Update Progress"}
					{on_saved}
					on_cancel={Some(on_cancel)}
				/>
			</div>
		</div>
	}
}

/// The notice shown on the dashboard once an entry from [`AddProgress`] is saved.
fn added_notice(submitted: &Submitted) -> Notice {
	match submitted.created {
		true => Notice::new(format!("Progress for \"{}\" added successfully!", submitted.course_name)),
		false => Notice::new(format!("Progress for \"{}\" updated successfully!", submitted.course_name)),
	}
}

#[function_component]
pub fn AddProgress() -> Html {
	use_page_title("Add Progress");
	let store = use_storage();
	let navigator = use_navigator();
	let (_, notice) = use_store::<Notice>();

	if session::current_user(&store).is_none() {
		return html!(<Redirect<Route> to={Route::UserLogin} />);
	}

	let on_saved = {
		let navigator = navigator.clone();
		Callback::from(move |submitted: Submitted| {
			log::info!(target: "progress", "added {:?}", submitted.course_name);
			notice.set(added_notice(&submitted));
			if let Some(navigator) = &navigator {
				navigator.push(&Route::Dashboard);
			}
		})
	};
	let on_cancel = Callback::from(move |_: ()| {
		if let Some(navigator) = &navigator {
			navigator.push(&Route::Dashboard);
		}
	});

	html! {
		<div class="add-progress-container">
			<div class="add-progress-card">
				<h2 class="card-title">{"Add Course Progress"}</h2>
				<ProgressForm
					initial={ProgressDraft::blank(OffsetDateTime::now_utc().date())}
					submit_label={"Add Progress Entry"}
					{on_saved}
					on_cancel={Some(on_cancel)}
				/>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn added_notice_names_the_course() {
		let created = Submitted {
			course_name: "Rust".into(),
			created: true,
		};
		assert_eq!(added_notice(&created).message.as_deref(), Some("Progress for \"Rust\" added successfully!"));
		let replaced = Submitted {
			course_name: "Rust".into(),
			created: false,
		};
		assert_eq!(added_notice(&replaced).message.as_deref(), Some("Progress for \"Rust\" updated successfully!"));
	}
}
