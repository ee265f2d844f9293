use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct NavEntry {
	pub icon: &'static str,
	pub label: &'static str,
}

#[derive(Clone, PartialEq, Properties)]
pub struct SidebarProps {
	pub title: AttrValue,
	pub open: bool,
	/// The first entry is marked as the current page.
	pub entries: Vec<NavEntry>,
	pub on_close: Callback<()>,
	pub on_logout: Callback<()>,
	#[prop_or_default]
	pub classes: Classes,
}

#[function_component]
pub fn Sidebar(props: &SidebarProps) -> Html {
	let on_close = props.on_close.reform(|_: MouseEvent| ());
	let on_logout = props.on_logout.reform(|_: MouseEvent| ());
	html! {
		<aside class={classes!(props.classes.clone(), props.open.then_some("open"))}>
			<div class="sidebar-header">
				<h1 class="app-title">{props.title.clone()}</h1>
				<button class="close-sidebar-btn" onclick={on_close} aria-label="Close sidebar">{"×"}</button>
			</div>
			<nav class="sidebar-nav">
				<ul>
					{props.entries.iter().enumerate().map(|(idx, entry)| html! {
						<li key={entry.label}>
							<a href="#" class={classes!("nav-item", (idx == 0).then_some("active"))}>
								<span class="nav-icon">{entry.icon}</span>
								{entry.label}
							</a>
						</li>
					}).collect::<Vec<_>>()}
					<li>
						<button onclick={on_logout} class="nav-item logout-btn">
							<span class="nav-icon">{"🚪"}</span>
							{"Logout"}
						</button>
					</li>
				</ul>
			</nav>
		</aside>
	}
}
