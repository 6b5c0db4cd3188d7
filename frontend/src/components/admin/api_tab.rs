use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use prompt_generator::core::admin::{
    example_curl, example_request, generate_endpoint, ApiUrlEditor, OTHER_ENDPOINTS,
    REQUEST_FIELDS,
};

use crate::components::design_system::{Button, ButtonVariant, Card, CardTitle, Input};
use crate::services::settings_service::use_settings_state;
use crate::utils::clipboard::copy_text;
use crate::utils::flash::use_flash;

#[derive(Debug, Clone, PartialEq)]
enum Health {
    Checking,
    Up(String),
    Down(String),
}

/// Pre block with a copy button in the corner.
#[component]
fn CopyBlock(
    #[prop(into)] text: Signal<String>,
    #[prop(into)] copied: Signal<bool>,
    on_copy: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="relative">
            <pre class="bg-zinc-800 rounded-lg p-3 text-xs text-zinc-300 overflow-x-auto whitespace-pre-wrap">
                {move || text.get()}
            </pre>
            <button
                class="absolute top-2 right-2 text-xs text-zinc-500 hover:text-teal-300"
                on:click=move |_| on_copy.run(text.get_untracked())
            >
                {move || if copied.get() { "✓" } else { "📋" }}
            </button>
        </div>
    }
}

#[component]
pub fn ApiTab() -> impl IntoView {
    let state = use_settings_state();
    let config = state.config();
    let url = RwSignal::new(ApiUrlEditor::load(&state.repo(), &config.api).draft);
    let error = RwSignal::new(None::<String>);
    let saved = use_flash::<()>(config.ui.feedback_ms);
    let copied = use_flash::<&'static str>(config.ui.feedback_ms);
    let health = RwSignal::new(None::<Health>);

    let display_url = Signal::derive(move || ApiUrlEditor { draft: url.get() }.display_url());

    let on_save = move |_: ev::MouseEvent| {
        match (ApiUrlEditor { draft: url.get_untracked() }).save(&state.repo()) {
            Ok(()) => {
                error.set(None);
                saved.mark(());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let copy = move |which: &'static str| {
        Callback::new(move |text: String| {
            spawn_local(async move {
                if copy_text(&text).await {
                    copied.mark(which);
                }
            });
        })
    };

    let on_check = move |_: ev::MouseEvent| {
        health.set(Some(Health::Checking));
        let client = state.client();
        spawn_local(async move {
            let result = match client.health().await {
                Ok(status) if status.is_ok() => Health::Up(status.status),
                Ok(status) => Health::Down(status.status),
                Err(e) => {
                    tracing::warn!("Health check failed: {e}");
                    Health::Down(e.to_string())
                }
            };
            health.try_set(Some(result));
        });
    };

    let health_line = move || {
        health.get().map(|h| match h {
            Health::Checking => view! { <span class="text-zinc-400">"Checking..."</span> }.into_any(),
            Health::Up(status) => {
                view! { <span class="text-green-400">{format!("✓ Server is up ({status})")}</span> }
                    .into_any()
            }
            Health::Down(reason) => {
                view! { <span class="text-red-400">{format!("✗ {reason}")}</span> }.into_any()
            }
        })
    };

    view! {
        <Card>
            <div class="space-y-2">
                <label class="block text-sm font-medium text-zinc-300">"API server URL"</label>
                <p class="text-xs text-zinc-500">"Change it when deploying the backend elsewhere"</p>
                <div class="flex gap-2">
                    <Input value=url placeholder="https://your-app.example.com" class="flex-1 font-mono text-sm" />
                    <Button on_click=on_save>
                        {move || if saved.is_active() { "✓" } else { "💾" }}
                    </Button>
                </div>
                {move || error.get().map(|e| view! { <p class="text-xs text-red-400">{e}</p> })}
            </div>
            <div class="flex items-center gap-3 text-sm">
                <Button
                    variant=ButtonVariant::Accent
                    loading=Signal::derive(move || health.get() == Some(Health::Checking))
                    on_click=on_check
                >
                    "Check server"
                </Button>
                {health_line}
            </div>
        </Card>

        <Card>
            <CardTitle>"Generation endpoint"</CardTitle>
            <div class="bg-zinc-800 rounded-lg p-3">
                <code class="text-teal-300 text-sm">{move || generate_endpoint(&display_url.get())}</code>
            </div>

            <CardTitle>"Request body (JSON):"</CardTitle>
            <CopyBlock
                text=example_request()
                copied=Signal::derive(move || copied.is(&"json"))
                on_copy=copy("json")
            />

            <CardTitle>"cURL example:"</CardTitle>
            <CopyBlock
                text=Signal::derive(move || example_curl(&display_url.get()))
                copied=Signal::derive(move || copied.is(&"curl"))
                on_copy=copy("curl")
            />
        </Card>

        <Card muted=true>
            <CardTitle>"Request parameters:"</CardTitle>
            <ul class="text-sm text-zinc-400 space-y-2">
                {REQUEST_FIELDS
                    .iter()
                    .map(|(field, meaning)| view! {
                        <li>
                            <code class="text-teal-300">{*field}</code>
                            {format!(" - {meaning}")}
                        </li>
                    })
                    .collect_view()}
            </ul>
        </Card>

        <Card muted=true>
            <CardTitle>"Other endpoints:"</CardTitle>
            <ul class="text-sm text-zinc-400 space-y-2">
                {OTHER_ENDPOINTS
                    .iter()
                    .map(|(method, path, meaning)| view! {
                        <li>
                            <code class="text-teal-300">{format!("{method} {path}")}</code>
                            {format!(" - {meaning}")}
                        </li>
                    })
                    .collect_view()}
            </ul>
        </Card>
    }
}
