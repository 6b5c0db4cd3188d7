use leptos::ev;
use leptos::prelude::*;

/// Native select; options are passed as `(value, label)` pairs
#[component]
pub fn Select(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    /// Label of a leading empty option, if any
    #[prop(into, optional)]
    placeholder: Option<String>,
    #[prop(into, optional)] on_change: Option<Callback<String>>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let full_class = format!(
        "w-full px-3 py-2 rounded-lg bg-zinc-950 text-zinc-100 border border-zinc-700 focus:outline-none focus:ring-1 focus:ring-purple-500 {class}"
    );

    let handle_change = move |evt: ev::Event| {
        if let Some(callback) = on_change {
            let target = event_target::<web_sys::HtmlSelectElement>(&evt);
            callback.run(target.value());
        }
    };

    view! {
        <select class=full_class on:change=handle_change prop:value=move || value.get()>
            {placeholder.map(|label| view! { <option value="">{label}</option> })}
            {move || {
                let selected = value.get();
                options
                    .get()
                    .into_iter()
                    .map(|(id, label)| {
                        let is_selected = id == selected;
                        view! { <option value=id selected=is_selected>{label}</option> }
                    })
                    .collect_view()
            }}
        </select>
    }
}
