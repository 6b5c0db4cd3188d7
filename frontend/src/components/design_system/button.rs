use super::loading::LoadingSpinner;
use leptos::ev;
use leptos::prelude::*;

#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    /// Tinted, for secondary actions such as testing a key
    Accent,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-purple-600 hover:bg-purple-500 text-white shadow-lg shadow-purple-900/40 border border-transparent"
            }
            ButtonVariant::Secondary => {
                "bg-transparent border border-zinc-700 text-zinc-300 hover:bg-zinc-800"
            }
            ButtonVariant::Accent => {
                "bg-teal-500/20 text-teal-300 border border-teal-500/30 hover:bg-teal-500/30"
            }
            ButtonVariant::Ghost => {
                "bg-transparent text-zinc-400 hover:text-purple-400 border border-transparent"
            }
        }
    }
}

/// A styled button
#[component]
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    /// Click handler; not called while disabled or loading
    #[prop(into, optional)]
    on_click: Option<Callback<ev::MouseEvent>>,
    #[prop(into, default = Signal::derive(|| false))] disabled: Signal<bool>,
    /// Shows a spinner and blocks clicks
    #[prop(into, default = Signal::derive(|| false))]
    loading: Signal<bool>,
    /// `button` or `submit`
    #[prop(default = "button")]
    kind: &'static str,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] title: String,
    children: Children,
) -> impl IntoView {
    let base_class = "px-4 py-2 rounded-lg transition-colors duration-200 flex items-center justify-center gap-2 font-medium focus:outline-none focus:ring-2 focus:ring-purple-500/50";
    let variant_class = variant.class();

    let is_disabled = move || disabled.get() || loading.get();

    let full_class = move || {
        let state = if is_disabled() {
            "opacity-50 cursor-not-allowed"
        } else {
            "cursor-pointer"
        };
        format!("{base_class} {variant_class} {state} {class}")
    };

    let handle_click = move |evt: ev::MouseEvent| {
        if is_disabled() {
            return;
        }
        if let Some(callback) = on_click {
            callback.run(evt);
        }
    };

    view! {
        <button
            type=kind
            class=full_class
            on:click=handle_click
            disabled=is_disabled
            title=title
        >
            {move || loading.get().then(|| view! { <LoadingSpinner size="sm" /> })}
            {children()}
        </button>
    }
}
