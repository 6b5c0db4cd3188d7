use leptos::prelude::*;

/// Bordered surface panel
#[component]
pub fn Card(
    /// Muted background for informational panels
    #[prop(optional)]
    muted: bool,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let surface = if muted {
        "bg-zinc-800/30"
    } else {
        "bg-zinc-900"
    };
    let full_class = format!("{surface} border border-zinc-800 rounded-xl p-6 space-y-4 {class}");

    view! { <div class=full_class>{children()}</div> }
}

#[component]
pub fn CardTitle(children: Children) -> impl IntoView {
    view! { <h3 class="text-sm font-medium text-zinc-300">{children()}</h3> }
}
