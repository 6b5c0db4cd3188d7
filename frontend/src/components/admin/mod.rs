//! Admin Panel
//!
//! Tabbed editor for the system prompt, the backend URL with API
//! documentation, and per-provider API keys.

mod api_tab;
mod keys_tab;
mod prompt_tab;

pub use api_tab::ApiTab;
pub use keys_tab::KeysTab;
pub use prompt_tab::PromptTab;

use leptos::prelude::*;
use leptos_router::components::A;
use prompt_generator::core::admin::AdminTab;

#[component]
pub fn AdminPanel() -> impl IntoView {
    let tab = RwSignal::new(AdminTab::default());

    let tab_buttons = AdminTab::all()
        .into_iter()
        .map(|t| {
            let class = move || {
                if tab.get() == t {
                    "px-4 py-2 text-sm font-medium transition-colors text-purple-400 border-b-2 border-purple-400"
                } else {
                    "px-4 py-2 text-sm font-medium transition-colors text-zinc-400 hover:text-zinc-300"
                }
            };
            view! {
                <button class=class on:click=move |_| tab.set(t)>
                    {t.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h2 class="text-xl font-semibold text-purple-400">"Admin panel"</h2>
                    <p class="text-sm text-zinc-400 mt-1">"Prompt generator settings"</p>
                </div>
                <A
                    href="/"
                    attr:class="px-4 py-2 text-sm border border-zinc-700 text-zinc-300 rounded-lg hover:bg-zinc-800 transition-colors"
                >
                    "← Back"
                </A>
            </div>

            <div class="flex gap-2 border-b border-zinc-800">{tab_buttons}</div>

            {move || match tab.get() {
                AdminTab::Prompt => view! { <PromptTab /> }.into_any(),
                AdminTab::Api => view! { <ApiTab /> }.into_any(),
                AdminTab::Keys => view! { <KeysTab /> }.into_any(),
            }}
        </div>
    }
}
