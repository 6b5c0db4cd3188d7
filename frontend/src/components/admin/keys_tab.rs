use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use prompt_generator::core::admin::{ProviderKeyEntry, ProviderKeys, ADMIN_PROVIDERS};
use prompt_generator::core::models::provider_icon;

use crate::components::design_system::{Button, ButtonVariant, Card, Input};
use crate::services::settings_service::use_settings_state;
use crate::utils::flash::use_flash;

#[component]
pub fn KeysTab() -> impl IntoView {
    let state = use_settings_state();
    let keys = RwSignal::new(ProviderKeys::load(&state.repo()));
    let saved = use_flash::<&'static str>(state.config().ui.feedback_ms);
    let error = RwSignal::new(None::<String>);

    let rows = ADMIN_PROVIDERS
        .iter()
        .map(|&(provider, label)| {
            let draft = RwSignal::new(
                keys.with_untracked(|k| k.entry(provider).map(|e| e.key.clone()))
                    .unwrap_or_default(),
            );

            let on_input = move |key: String| {
                if let Some(Err(e)) = keys.try_update(|k| k.set_key(provider, &key)) {
                    tracing::warn!(provider, "Failed to update key draft: {e}");
                    error.set(Some(e.to_string()));
                }
            };

            let on_save = move |_: ev::MouseEvent| {
                match keys.with_untracked(|k| k.save(provider, &state.repo())) {
                    Ok(()) => {
                        error.set(None);
                        saved.mark(provider);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            };

            let on_remove = move |_: ev::MouseEvent| {
                let result = keys.try_update(|k| k.remove(provider, &state.repo()));
                if let Some(Err(e)) = result {
                    error.set(Some(e.to_string()));
                    return;
                }
                draft.set(String::new());
                error.set(None);
            };

            let on_test = move |_: ev::MouseEvent| {
                let Some(Ok(Some((ticket, request)))) = keys.try_update(|k| k.begin_test(provider))
                else {
                    return;
                };
                let client = state.client();
                spawn_local(async move {
                    let outcome = client.test_api_key(&request).await;
                    keys.try_update(|k| k.finish_test(provider, ticket, outcome));
                });
            };

            let entry_flag = move |f: fn(&ProviderKeyEntry) -> bool| {
                keys.with(|k| k.entry(provider).is_some_and(f))
            };

            let result = move || {
                keys.with(|k| k.entry(provider).and_then(|e| e.result.clone()))
                    .map(|r| {
                        let class = if r.success { "text-green-400" } else { "text-red-400" };
                        let mark = if r.success { "✓" } else { "✗" };
                        view! { <p class=format!("text-xs {class}")>{format!("{mark} {}", r.message)}</p> }
                    })
            };

            view! {
                <div class="space-y-2">
                    <label class="flex items-center gap-2 text-sm font-medium text-zinc-300">
                        <span>{provider_icon(provider)}</span>
                        {label}
                    </label>
                    <div class="flex gap-2">
                        <Input
                            r#type="password"
                            value=draft
                            placeholder=format!("{label} API key")
                            on_input=on_input
                            class="flex-1 font-mono text-sm"
                        />
                        <Button
                            variant=ButtonVariant::Accent
                            disabled=Signal::derive(move || entry_flag(|e| e.key.trim().is_empty()))
                            loading=Signal::derive(move || entry_flag(|e| e.testing))
                            on_click=on_test
                        >
                            "🔌"
                        </Button>
                        <Button on_click=on_save>
                            {move || if saved.is(&provider) { "✓" } else { "💾" }}
                        </Button>
                        <Button variant=ButtonVariant::Ghost title="Remove" on_click=on_remove>
                            "✕"
                        </Button>
                    </div>
                    {result}
                </div>
            }
        })
        .collect_view();

    view! {
        <Card>
            <p class="text-xs text-zinc-500">
                "Keys stored here are kept per provider and do not change the active connection."
            </p>
            {move || error.get().map(|e| view! { <p class="text-xs text-red-400">{e}</p> })}
            {rows}
        </Card>
    }
}
