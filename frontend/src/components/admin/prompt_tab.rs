use leptos::ev;
use leptos::prelude::*;
use prompt_generator::core::admin::{PromptEditor, PLACEHOLDERS};

use crate::components::design_system::{Button, ButtonVariant, Card, CardTitle, TextArea};
use crate::services::settings_service::use_settings_state;
use crate::utils::flash::use_flash;

#[component]
pub fn PromptTab() -> impl IntoView {
    let state = use_settings_state();
    let draft = RwSignal::new(PromptEditor::load(&state.repo()).draft);
    let error = RwSignal::new(None::<String>);
    let saved = use_flash::<()>(state.config().ui.feedback_ms);

    let on_save = move |_: ev::MouseEvent| {
        let editor = PromptEditor {
            draft: draft.get_untracked(),
        };
        match editor.save(&state.repo()) {
            Ok(()) => {
                error.set(None);
                saved.mark(());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let on_reset = move |_: ev::MouseEvent| {
        let mut editor = PromptEditor {
            draft: draft.get_untracked(),
        };
        editor.reset(&state.repo());
        draft.set(editor.draft);
        error.set(None);
        saved.mark(());
    };

    let missing = move || {
        let missing = PromptEditor { draft: draft.get() }.missing_placeholders();
        (!missing.is_empty()).then(|| {
            view! {
                <p class="text-xs text-amber-400">
                    {format!("Missing placeholders: {}", missing.join(", "))}
                </p>
            }
        })
    };

    view! {
        <Card>
            <div class="space-y-2">
                <label class="block text-sm font-medium text-zinc-300">"System prompt"</label>
                <p class="text-xs text-zinc-500">"Use {role} and {business} as variables"</p>
                <TextArea
                    value=draft
                    placeholder="Enter the system prompt..."
                    class="min-h-[300px] font-mono text-sm"
                />
                {missing}
                {move || error.get().map(|e| view! { <p class="text-xs text-red-400">{e}</p> })}
            </div>
            <div class="flex gap-3">
                <Button on_click=on_save>
                    {move || if saved.is_active() { "✓ Saved" } else { "💾 Save" }}
                </Button>
                <Button variant=ButtonVariant::Secondary on_click=on_reset>
                    "Reset"
                </Button>
            </div>
        </Card>

        <Card muted=true>
            <CardTitle>"Variables:"</CardTitle>
            <ul class="text-sm text-zinc-400 space-y-1">
                {PLACEHOLDERS
                    .iter()
                    .map(|(token, meaning)| view! {
                        <li>
                            <code class="text-teal-300">{*token}</code>
                            {format!(" - {meaning}")}
                        </li>
                    })
                    .collect_view()}
            </ul>
        </Card>
    }
}
