use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct AvatarProps {
	#[prop_or_default]
	pub name: Option<AttrValue>,
	/// Shown when there is no name to take initials from.
	pub fallback: char,
	#[prop_or_default]
	pub classes: Classes,
}

#[function_component]
pub fn Avatar(AvatarProps { name, fallback, classes }: &AvatarProps) -> Html {
	let initials = crate::util::initials(name.as_deref(), *fallback);
	let title = name.clone().unwrap_or_else(|| AttrValue::from("Profile"));
	html! {
		<div class={classes!("user-avatar", classes.clone())} {title}>{initials}</div>
	}
}
