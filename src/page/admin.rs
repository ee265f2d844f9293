use crate::{
	components::{Avatar, NavEntry, Sidebar},
	data::Role,
	hooks::{use_page_title, use_storage},
	session, Route,
};
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Redirect};

struct Statistic {
	icon: &'static str,
	value: u32,
	label: &'static str,
}

struct Activity {
	kind: &'static str,
	description: &'static str,
	when: &'static str,
}

struct PopularCourse {
	name: &'static str,
	enrollments: u32,
	status: &'static str,
}

// There is no reporting endpoint yet, so the platform overview is fixed.
static STATISTICS: &[Statistic] = &[
	Statistic { icon: "👥", value: 1250, label: "Total Users" },
	Statistic { icon: "📚", value: 85, label: "Active Courses" },
	Statistic { icon: "🔔", value: 12, label: "Pending Approvals" },
	Statistic { icon: "✨", value: 7, label: "New Users Today" },
];

static RECENT_ACTIVITY: &[Activity] = &[
	Activity { kind: "User Registered", description: "rohit signed up", when: "2 hours ago" },
	Activity { kind: "Course Updated", description: "Deep Learning Specialization content updated", when: "5 hours ago" },
	Activity { kind: "User Progress", description: "rohit completed \"Intro to Data Science\"", when: "1 day ago" },
	Activity { kind: "Approval Needed", description: "New instructor request from vishnu", when: "2 days ago" },
];

static POPULAR_COURSES: &[PopularCourse] = &[
	PopularCourse { name: "Machine Learning Fundamentals", enrollments: 890, status: "Active" },
	PopularCourse { name: "Introduction to Data Science", enrollments: 750, status: "Active" },
	PopularCourse { name: "Deep Learning Specialization", enrollments: 420, status: "Active" },
	PopularCourse { name: "Web Development Bootcamp", enrollments: 310, status: "Active" },
];

fn nav_entries() -> Vec<NavEntry> {
	vec![
		NavEntry { icon: "📊", label: "Dashboard" },
		NavEntry { icon: "👥", label: "Manage Users" },
		NavEntry { icon: "📚", label: "Manage Courses" },
		NavEntry { icon: "🔔", label: "Approvals" },
		NavEntry { icon: "⚙️", label: "Settings" },
	]
}

#[function_component]
pub fn AdminDashboard() -> Html {
	use_page_title("Admin Panel");
	let store = use_storage();
	let navigator = use_navigator();
	let sidebar_open = use_state_eq(|| false);

	let Some(admin) = session::current_admin(&store) else {
		return html!(<Redirect<Route> to={Route::AdminLogin} />);
	};
	let name = admin.display_name().map(|name| AttrValue::from(name.to_owned()));

	let open_sidebar = {
		let sidebar_open = sidebar_open.clone();
		Callback::from(move |_: MouseEvent| sidebar_open.set(true))
	};
	let close_sidebar = {
		let sidebar_open = sidebar_open.clone();
		Callback::from(move |_: ()| sidebar_open.set(false))
	};
	let logout = Callback::from(move |_: ()| {
		session::logout(&store, Role::Admin);
		if let Some(navigator) = &navigator {
			navigator.push(&Route::Home);
		}
	});

	html! {
		<div class="admin-dashboard-layout">
			<Sidebar
				classes={"admin-sidebar"}
				title={"Admin Panel"}
				open={*sidebar_open}
				entries={nav_entries()}
				on_close={close_sidebar}
				on_logout={logout}
			/>
			<div class="admin-main-content">
				<header class="main-header">
					<button onclick={open_sidebar} class="menu-toggle-btn" aria-label="Open sidebar menu">{"☰"}</button>
					<div class="admin-info-header">
						<span class="admin-name">{format!("Hi, {}!", name.as_deref().unwrap_or("Admin"))}</span>
						<Avatar classes={"admin-avatar"} name={name.clone()} fallback={'A'} />
					</div>
				</header>
				<main class="main-area-content">
					<section class="admin-section welcome-banner">
						<h2 class="section-title">{"Admin Overview"}</h2>
						<p class="section-description">{"Manage your platform's users, courses, and settings."}</p>
					</section>
					<section class="admin-section summary-cards-section">
						<h3 class="section-subtitle">{"Platform Statistics"}</h3>
						<div class="summary-cards-grid">
							{STATISTICS.iter().map(|stat| html! {
								<div class="summary-card" key={stat.label}>
									<div class="card-icon">{stat.icon}</div>
									<div class="card-info">
										<span class="card-value">{stat.value}</span>
										<span class="card-label">{stat.label}</span>
									</div>
								</div>
							}).collect::<Html>()}
						</div>
					</section>
					<section class="admin-section recent-activities-section">
						<h3 class="section-subtitle">{"Recent Activities"}</h3>
						<div class="activity-table-container">
							<table class="activity-table">
								<thead>
									<tr><th>{"Type"}</th><th>{"Description"}</th><th>{"Time"}</th></tr>
								</thead>
								<tbody>
									{RECENT_ACTIVITY.iter().map(|activity| html! {
										<tr>
											<td>{activity.kind}</td>
											<td>{activity.description}</td>
											<td>{activity.when}</td>
										</tr>
									}).collect::<Html>()}
								</tbody>
							</table>
						</div>
					</section>
					<section class="admin-section popular-courses-section">
						<h3 class="section-subtitle">{"Popular Courses"}</h3>
						<div class="course-table-container">
							<table class="course-table">
								<thead>
									<tr><th>{"Course Name"}</th><th>{"Enrollments"}</th><th>{"Status"}</th></tr>
								</thead>
								<tbody>
									{POPULAR_COURSES.iter().map(|course| html! {
										<tr key={course.name}>
											<td>{course.name}</td>
											<td>{course.enrollments}</td>
											<td>
												<span class={classes!("status-badge", format!("status-{}", course.status.to_lowercase()))}>
													{course.status}
												</span>
											</td>
										</tr>
									}).collect::<Html>()}
								</tbody>
							</table>
						</div>
					</section>
				</main>
			</div>
		</div>
	}
}
