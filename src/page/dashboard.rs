use crate::{
	components::{Avatar, BarSize, CourseCard, NavEntry, NoticeBanner, ProgressBar, Sidebar},
	config,
	data::{Overview, Role},
	hooks::{use_page_title, use_storage},
	session, Route,
};
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link, Redirect};

fn nav_entries() -> Vec<NavEntry> {
	vec![
		NavEntry { icon: "🏠", label: "Home" },
		NavEntry { icon: "📚", label: "My Courses" },
		NavEntry { icon: "👤", label: "Profile" },
	]
}

fn progress_comment(overall: u8) -> &'static str {
	match overall {
		0 => "Log some progress to get your journey started.",
		100.. => "Every course completed. Outstanding work!",
		_ => "You're doing great! Keep pushing forward.",
	}
}

#[function_component]
pub fn UserDashboard() -> Html {
	use_page_title("Dashboard");
	let store = use_storage();
	let navigator = use_navigator();
	let sidebar_open = use_state_eq(|| false);

	// Read on every render so edits made by the progress form show up straight away.
	let Some(user) = session::current_user(&store) else {
		return html!(<Redirect<Route> to={Route::UserLogin} />);
	};
	let overview = Overview::of(&user);
	let greeting_name = user.display_name().map(|name| AttrValue::from(name.to_owned()));

	let open_sidebar = {
		let sidebar_open = sidebar_open.clone();
		Callback::from(move |_: MouseEvent| sidebar_open.set(true))
	};
	let close_sidebar = {
		let sidebar_open = sidebar_open.clone();
		Callback::from(move |_: ()| sidebar_open.set(false))
	};
	let logout = {
		let navigator = navigator.clone();
		Callback::from(move |_: ()| {
			session::logout(&store, Role::User);
			if let Some(navigator) = &navigator {
				navigator.push(&Route::Home);
			}
		})
	};
	let update_course = Callback::from(move |course_name: String| {
		if let Some(navigator) = &navigator {
			navigator.push(&Route::update_progress(&course_name));
		}
	});

	let courses = match overview.courses.is_empty() {
		true => html! {
			<div class="no-courses-message">
				<p>{"You haven't logged progress on any courses yet."}</p>
				<Link<Route> classes={"action-button primary"} to={Route::AddProgress}>{"Log Your First Course"}</Link<Route>>
			</div>
		},
		false => overview
			.courses
			.iter()
			.map(|course| {
				html! {
					<CourseCard key={course.name.clone()} course={course.clone()} on_update={update_course.clone()} />
				}
			})
			.collect::<Html>(),
	};

	html! {
		<div class="dashboard-layout">
			<Sidebar
				classes={"dashboard-sidebar"}
				title={config::APP_TITLE}
				open={*sidebar_open}
				entries={nav_entries()}
				on_close={close_sidebar}
				on_logout={logout}
			/>
			<div class="dashboard-main-content">
				<header class="main-header">
					<button onclick={open_sidebar} class="menu-toggle-btn" aria-label="Open sidebar menu">{"☰"}</button>
					<div class="user-info-header">
						<span class="user-name">
							{format!("Welcome back, {}!", greeting_name.as_deref().unwrap_or("Learner"))}
						</span>
						<Avatar name={greeting_name.clone()} fallback={'U'} />
					</div>
				</header>
				<main class="main-area-content">
					<NoticeBanner />
					<section class="dashboard-section welcome-banner">
						<h2 class="section-title">{"Your Learning Dashboard"}</h2>
						<p class="section-description">
							{"Track your progress, explore new courses, and continue your journey!"}
						</p>
					</section>
					<section class="dashboard-section progress-summary">
						<h3 class="section-subtitle">{"Overall Progress"}</h3>
						<div class="progress-card overall">
							<div class="progress-header">
								<span class="progress-label">{"Your Cumulative Progress"}</span>
								<span class="progress-percentage">{format!("{}%", overview.overall)}</span>
							</div>
							<ProgressBar percentage={overview.overall} size={BarSize::Large} />
							<p class="progress-comment">{progress_comment(overview.overall)}</p>
						</div>
					</section>
					<section class="dashboard-section my-courses-section">
						<div class="section-heading">
							<h3 class="section-subtitle">{"My Courses"}</h3>
							<Link<Route> classes={"action-button secondary"} to={Route::AddProgress}>{"+ Add Progress Entry"}</Link<Route>>
						</div>
						<div class="courses-grid">{courses}</div>
					</section>
				</main>
			</div>
		</div>
	}
}
