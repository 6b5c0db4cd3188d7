use leptos::ev;
use leptos::prelude::*;

const FIELD_CLASS: &str = "w-full px-3 py-2 rounded-lg bg-zinc-950 text-zinc-100 border border-zinc-700 focus:border-purple-500 focus:ring-1 focus:ring-purple-500 outline-none transition-colors placeholder-zinc-500 disabled:opacity-50 disabled:cursor-not-allowed";

/// Single-line text input bound to a signal
#[component]
pub fn Input(
    #[prop(into)] value: RwSignal<String>,
    #[prop(into, optional)] placeholder: Signal<String>,
    /// Called with the new value after `value` is updated
    #[prop(into, optional)]
    on_input: Option<Callback<String>>,
    #[prop(into, default = Signal::derive(|| false))] disabled: Signal<bool>,
    /// `text` when empty
    #[prop(into, optional)]
    r#type: String,
    #[prop(into, optional)] id: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let input_type = if r#type.is_empty() {
        "text".to_string()
    } else {
        r#type
    };
    let full_class = format!("{FIELD_CLASS} {class}");

    let handle_input = move |evt: ev::Event| {
        let new_value = event_target_value(&evt);
        value.set(new_value.clone());
        if let Some(callback) = on_input {
            callback.run(new_value);
        }
    };

    view! {
        <input
            id=id
            class=full_class
            type=input_type
            prop:value=move || value.get()
            placeholder=move || placeholder.get()
            disabled=move || disabled.get()
            on:input=handle_input
        />
    }
}

/// Multi-line text input bound to a signal
#[component]
pub fn TextArea(
    #[prop(into)] value: RwSignal<String>,
    #[prop(into, optional)] placeholder: Signal<String>,
    #[prop(into, default = Signal::derive(|| false))] disabled: Signal<bool>,
    #[prop(into, optional)] id: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let full_class = format!("{FIELD_CLASS} resize-y {class}");

    view! {
        <textarea
            id=id
            class=full_class
            prop:value=move || value.get()
            placeholder=move || placeholder.get()
            disabled=move || disabled.get()
            on:input=move |evt| value.set(event_target_value(&evt))
        ></textarea>
    }
}
