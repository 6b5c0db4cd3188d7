//! Provider settings modal.
//!
//! Drives [`SettingsFlow`]: provider catalog is fetched every time the modal
//! mounts, then provider -> key -> test -> model -> save.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use prompt_generator::core::models::provider_icon;
use prompt_generator::core::settings_flow::SettingsFlow;

use crate::components::design_system::{Button, ButtonVariant, Input, LoadingSpinner, Select};
use crate::services::settings_service::use_settings_state;

#[component]
pub fn SettingsModal() -> impl IntoView {
    let state = use_settings_state();
    let flow = RwSignal::new(SettingsFlow::open(state.settings.get_untracked().as_ref()));
    let api_key = RwSignal::new(flow.with_untracked(|f| f.api_key().to_string()));

    let client = state.client();
    spawn_local(async move {
        match client.get_providers().await {
            Ok(providers) => {
                tracing::debug!(count = providers.len(), "Loaded provider catalog");
                flow.try_update(|f| f.set_providers(providers));
            }
            Err(e) => {
                tracing::error!("Failed to load providers: {e}");
                flow.try_update(|f| f.providers_failed());
            }
        }
    });

    let on_test = move |_: ev::MouseEvent| {
        let Some((ticket, request)) = flow.try_update(|f| f.begin_test()).flatten() else {
            return;
        };
        let client = state.client();
        spawn_local(async move {
            let outcome = client.test_api_key(&request).await;
            flow.try_update(|f| f.finish_test(ticket, outcome));
        });
    };

    let on_save = move |_: ev::MouseEvent| {
        if let Some(settings) = flow.with_untracked(|f| f.save()) {
            tracing::info!(provider = %settings.provider, model = %settings.model, "Saving settings");
            state.save(settings);
        }
    };

    let provider_buttons = move || {
        flow.with(|f| {
            f.providers()
                .iter()
                .map(|p| {
                    let value = p.value.clone();
                    let selected = f.provider() == p.value;
                    let class = if selected {
                        "flex items-center gap-2 p-3 rounded-lg border transition-all border-purple-500 bg-purple-500/10 text-purple-400"
                    } else {
                        "flex items-center gap-2 p-3 rounded-lg border transition-all border-zinc-800 hover:border-zinc-500 text-zinc-300"
                    };
                    view! {
                        <button
                            type="button"
                            class=class
                            on:click=move |_| flow.update(|f| f.select_provider(&value))
                        >
                            <span class="text-lg">{provider_icon(&p.value)}</span>
                            <span class="text-sm font-medium">{p.label.clone()}</span>
                        </button>
                    }
                })
                .collect_view()
        })
    };

    let key_placeholder = Signal::derive(move || {
        let label = flow.with(|f| f.current_provider().map(|p| p.label.clone()));
        format!("Enter the API key for {}...", label.unwrap_or_default())
    });

    let test_result = move || {
        flow.with(|f| f.test_result().cloned()).map(|result| {
            let (class, mark) = if result.success {
                ("p-3 rounded-lg text-sm bg-green-500/10 border border-green-500/30 text-green-400", "✓")
            } else {
                ("p-3 rounded-lg text-sm bg-red-900/20 border border-red-800/50 text-red-400", "✗")
            };
            view! { <div class=class>{format!("{mark} {}", result.message)}</div> }
        })
    };

    let model_options = Signal::derive(move || {
        flow.with(|f| {
            f.model_options()
                .iter()
                .map(|m| (m.id.clone(), m.name.clone()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="fixed inset-0 bg-black/70 flex items-center justify-center z-50 p-4">
            <div class="bg-zinc-900 rounded-xl border border-zinc-800 w-full max-w-lg max-h-[90vh] overflow-y-auto">
                <div class="p-6 border-b border-zinc-800">
                    <h2 class="text-xl font-semibold text-purple-400">"AI provider settings"</h2>
                    <p class="text-sm text-zinc-400 mt-1">"Connect your API once"</p>
                </div>

                <div class="p-6 space-y-6">
                    <Show
                        when=move || !flow.with(|f| f.is_loading())
                        fallback=|| view! {
                            <div class="flex justify-center py-4">
                                <LoadingSpinner />
                            </div>
                        }
                    >
                        <div class="space-y-3">
                            <label class="block text-sm font-medium text-zinc-300">"AI provider"</label>
                            <div class="grid grid-cols-2 gap-2">{provider_buttons}</div>
                        </div>

                        <div class="space-y-3">
                            <label class="block text-sm font-medium text-zinc-300">"API key"</label>
                            <div class="flex gap-2">
                                <Input
                                    r#type="password"
                                    value=api_key
                                    placeholder=key_placeholder
                                    on_input=move |key: String| flow.update(|f| f.set_api_key(&key))
                                    class="flex-1"
                                />
                                <Button
                                    variant=ButtonVariant::Accent
                                    class="whitespace-nowrap"
                                    disabled=Signal::derive(move || !flow.with(|f| f.can_test()))
                                    loading=Signal::derive(move || flow.with(|f| f.is_testing()))
                                    on_click=on_test
                                >
                                    "🔌 Test"
                                </Button>
                            </div>
                            {test_result}
                        </div>

                        <Show when=move || !model_options.with(Vec::is_empty)>
                            <div class="space-y-3">
                                <label class="block text-sm font-medium text-zinc-300">"Model"</label>
                                <Select
                                    value=Signal::derive(move || flow.with(|f| f.model().to_string()))
                                    options=model_options
                                    placeholder="Choose a model..."
                                    on_change=move |id: String| {
                                        flow.update(|f| {
                                            f.select_model(&id);
                                        })
                                    }
                                />
                            </div>
                        </Show>
                    </Show>
                </div>

                <div class="p-6 border-t border-zinc-800 flex gap-3">
                    <Button
                        variant=ButtonVariant::Secondary
                        class="flex-1"
                        on_click=move |_: ev::MouseEvent| state.close_settings()
                    >
                        "Cancel"
                    </Button>
                    <Button
                        class="flex-1"
                        disabled=Signal::derive(move || !flow.with(|f| f.can_save()))
                        on_click=on_save
                    >
                        "Save"
                    </Button>
                </div>
            </div>
        </div>
    }
}
