use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::admin::AdminPanel;
use crate::components::layout::Layout;
use crate::components::prompt_form::PromptFormView;
use crate::components::result_display::ResultDisplay;
use crate::components::settings_modal::SettingsModal;
use crate::services::generation_service::{provide_generation_service, use_generation_service};
use crate::services::settings_service::{provide_settings_state, use_settings_state};

#[component]
pub fn App() -> impl IntoView {
    provide_settings_state();
    provide_generation_service();

    view! {
        <Router>
            <Layout>
                <Routes fallback=|| view! { <div class="text-zinc-400">"Page not found"</div> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/admin") view=AdminPanel />
                </Routes>
            </Layout>
        </Router>
    }
}

/// Main page: error banner, then either the result list or the form.
#[component]
pub fn HomePage() -> impl IntoView {
    let settings = use_settings_state();
    let generation = use_generation_service();

    let error = move || generation.error();
    let has_result = move || generation.state.with(|s| s.data().is_some());

    view! {
        <div class="flex justify-end mb-4">
            <A
                href="/admin"
                attr:class="text-xs text-zinc-500 hover:text-purple-400 transition-colors"
            >
                "⚙️ Admin"
            </A>
        </div>

        {move || error().map(|message| view! {
            <div class="mb-6 p-4 bg-red-900/20 border border-red-800/50 rounded-lg text-red-400">
                {message}
            </div>
        })}

        <Show
            when=has_result
            fallback=|| view! {
                <div class="bg-zinc-900 border border-zinc-800 rounded-xl p-6">
                    <PromptFormView />
                </div>
            }
        >
            <ResultDisplay />
        </Show>

        <Show when=move || settings.show_settings.get()>
            <SettingsModal />
        </Show>
    }
}
