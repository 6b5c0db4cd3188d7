use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::design_system::{Button, ButtonVariant};
use crate::services::generation_service::use_generation_service;
use crate::services::settings_service::use_settings_state;
use crate::utils::clipboard::copy_text;
use crate::utils::flash::use_flash;

/// Generated prompt list with per-item copy buttons.
#[component]
pub fn ResultDisplay() -> impl IntoView {
    let generation = use_generation_service();
    let feedback_ms = use_settings_state().config().ui.feedback_ms;
    let copied = use_flash::<usize>(feedback_ms);

    let copy = move |index: usize, text: String| {
        spawn_local(async move {
            if copy_text(&text).await {
                copied.mark(index);
            }
        });
    };

    move || {
        generation.data().map(|data| {
            let prompts = data
                .prompts
                .into_iter()
                .enumerate()
                .map(|(index, prompt)| {
                    let text = prompt.clone();
                    view! {
                        <div class="bg-zinc-900 border border-zinc-800 rounded-xl p-6 hover:border-purple-500/50 transition-colors">
                            <div class="flex items-start justify-between gap-4">
                                <p class="text-zinc-100 flex-1 whitespace-pre-wrap">{prompt}</p>
                                <button
                                    class="flex-shrink-0 text-zinc-500 hover:text-teal-300 transition-colors p-2"
                                    title="Copy"
                                    on:click=move |_| copy(index, text.clone())
                                >
                                    {move || if copied.is(&index) { "✓" } else { "📋" }}
                                </button>
                            </div>
                        </div>
                    }
                })
                .collect_view();

            view! {
                <div class="space-y-6">
                    <div class="flex items-start justify-between gap-4">
                        <div class="min-w-0 flex-1">
                            <h2 class="text-lg font-medium text-purple-400">
                                {format!("Prompts for role: {}", data.role)}
                            </h2>
                            <p class="text-sm text-zinc-400 mt-1 truncate">{data.business}</p>
                            <p class="text-xs text-teal-300 mt-1">
                                {format!("{} / {}", data.provider, data.model)}
                            </p>
                        </div>
                        <Button variant=ButtonVariant::Ghost on_click=move |_: ev::MouseEvent| generation.reset()>
                            "New request"
                        </Button>
                    </div>

                    <div class="space-y-4">{prompts}</div>

                    <Button class="w-full" on_click=move |_: ev::MouseEvent| generation.reset()>
                        "Generate for another role"
                    </Button>
                </div>
            }
        })
    }
}
