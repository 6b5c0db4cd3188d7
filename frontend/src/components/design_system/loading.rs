use leptos::prelude::*;

/// Spinning ring; size is "sm", "md" or "lg"
#[component]
pub fn LoadingSpinner(#[prop(default = "md")] size: &'static str) -> impl IntoView {
    let size_class = match size {
        "sm" => "w-4 h-4",
        "lg" => "w-8 h-8",
        _ => "w-6 h-6",
    };

    view! {
        <div class=format!(
            "{size_class} animate-spin rounded-full border-2 border-zinc-600 border-t-purple-500",
        )></div>
    }
}
