use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yewdux::prelude::*;

static DISMISS_AFTER_MS: u32 = 3_000;

/// A message that outlives a navigation, shown once by the next [`NoticeBanner`].
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct Notice {
	pub message: Option<AttrValue>,
}

impl Notice {
	pub fn new(message: impl Into<AttrValue>) -> Self {
		Self {
			message: Some(message.into()),
		}
	}

	/// Removes the pending message from the shared store, so it is shown once even if
	/// the page is left before the banner dismisses itself.
	pub fn take(dispatch: &Dispatch<Self>) -> Option<AttrValue> {
		let message = dispatch.get().message.clone();
		if message.is_some() {
			dispatch.set(Self::default());
		}
		message
	}
}

#[function_component]
pub fn NoticeBanner() -> Html {
	let (notice, dispatch) = use_store::<Notice>();
	let shown = use_state_eq(|| None::<AttrValue>);
	{
		let shown = shown.clone();
		use_effect_with(notice.message.clone(), move |pending| {
			if pending.is_some() {
				if let Some(message) = Notice::take(&dispatch) {
					shown.set(Some(message));
				}
			}
		});
	}
	let Some(message) = (*shown).clone() else {
		return html!();
	};
	let on_dismiss = Callback::from(move |_: ()| shown.set(None));
	html!(<Banner kind={BannerKind::Success} {message} {on_dismiss} />)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BannerKind {
	Success,
	Error,
	Info,
}

#[derive(Clone, PartialEq, Properties)]
pub struct BannerProps {
	pub kind: BannerKind,
	pub message: AttrValue,
	/// When set, the banner asks to be dismissed after a few seconds.
	#[prop_or_default]
	pub on_dismiss: Option<Callback<()>>,
}

#[function_component]
pub fn Banner(BannerProps { kind, message, on_dismiss }: &BannerProps) -> Html {
	use_effect_with((message.clone(), on_dismiss.clone()), |(_, on_dismiss)| {
		let timeout = on_dismiss
			.clone()
			.map(|on_dismiss| Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(())));
		move || drop(timeout)
	});
	let (class, role) = match kind {
		BannerKind::Success => ("success-msg", "status"),
		BannerKind::Error => ("error-msg", "alert"),
		BannerKind::Info => ("info-msg", "status"),
	};
	html! {
		<div {class} {role}>{message}</div>
	}
}
