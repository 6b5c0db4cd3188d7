use leptos::ev;
use leptos::prelude::*;
use prompt_generator::core::models::provider_icon;
use prompt_generator::core::prompt_form::{PromptForm, MIN_BUSINESS_CHARS, ROLE_SUGGESTIONS};

use crate::components::design_system::{Button, ButtonVariant, Input, TextArea};
use crate::services::generation_service::use_generation_service;
use crate::services::settings_service::use_settings_state;

/// Connected-provider banner with a button that opens the settings modal.
#[component]
pub fn ConnectionStatus() -> impl IntoView {
    let state = use_settings_state();

    view! {
        <div class="flex items-center justify-between p-4 bg-zinc-800/50 rounded-lg border border-zinc-800">
            {move || match state.settings.get() {
                Some(settings) => view! {
                    <div class="flex items-center gap-3">
                        <span class="text-2xl">{provider_icon(&settings.provider)}</span>
                        <div>
                            <div class="flex items-center gap-2">
                                <span class="font-medium text-zinc-100">{settings.provider_label}</span>
                                <span class="text-xs px-2 py-0.5 bg-green-500/20 text-green-400 rounded-full">
                                    "Connected"
                                </span>
                            </div>
                            <p class="text-xs text-zinc-400">{settings.model_name}</p>
                        </div>
                    </div>
                }
                .into_any(),
                None => view! {
                    <div class="flex items-center gap-3">
                        <span class="text-2xl opacity-50">"🔌"</span>
                        <div>
                            <span class="font-medium text-zinc-400">"No provider connected"</span>
                            <p class="text-xs text-zinc-500">"Press \"Configure\" to connect one"</p>
                        </div>
                    </div>
                }
                .into_any(),
            }}
            <Button variant=ButtonVariant::Secondary on_click=move |_: ev::MouseEvent| state.open_settings()>
                "⚙️ Configure"
            </Button>
        </div>
    }
}

/// Business and role inputs plus the submit button.
#[component]
pub fn PromptFormView() -> impl IntoView {
    let state = use_settings_state();
    let generation = use_generation_service();

    let business = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());

    let form = move || PromptForm::new(business.get(), role.get());
    let has_settings = move || state.settings.with(Option::is_some);
    let inputs_locked = Signal::derive(move || generation.is_loading() || !has_settings());
    let can_submit =
        move || state.settings.with(|s| form().can_submit(s.as_ref(), generation.is_loading()));

    let on_submit = move |evt: ev::SubmitEvent| {
        evt.prevent_default();
        let Some(settings) = state.settings.get_untracked() else {
            return;
        };
        let form = PromptForm::new(business.get_untracked(), role.get_untracked());
        if !form.can_submit(Some(&settings), generation.state.with_untracked(|s| s.is_loading())) {
            return;
        }
        if let Some(request) = form.compose(&settings, state.system_prompt_for_request()) {
            generation.generate(state.client(), request);
        }
    };

    let submit_label = move || {
        if generation.is_loading() {
            "Generating..."
        } else if !has_settings() {
            "Connect a provider first"
        } else {
            "Generate prompts"
        }
    };

    view! {
        <div class="space-y-6">
            <ConnectionStatus />

            <form on:submit=on_submit class="space-y-6">
                <div class="space-y-2">
                    <label for="business" class="block text-sm font-medium text-zinc-300">
                        "Business description"
                    </label>
                    <TextArea
                        id="business"
                        value=business
                        placeholder="Describe your business: industry, company size, specifics..."
                        disabled=inputs_locked
                        class="min-h-[120px]"
                    />
                    <p class="text-xs text-zinc-500">
                        {format!("At least {MIN_BUSINESS_CHARS} characters")}
                    </p>
                </div>

                <div class="space-y-2">
                    <label for="role" class="block text-sm font-medium text-zinc-300">
                        "Employee role"
                    </label>
                    <Input
                        id="role"
                        value=role
                        placeholder="For example: HR Specialist, Director..."
                        disabled=inputs_locked
                    />
                    <div class="flex flex-wrap gap-2 mt-2">
                        {ROLE_SUGGESTIONS
                            .iter()
                            .map(|suggestion| {
                                view! {
                                    <button
                                        type="button"
                                        class="text-xs px-3 py-1.5 rounded-full bg-zinc-800 hover:bg-purple-500/20 hover:text-purple-400 transition-colors disabled:opacity-50"
                                        disabled=move || inputs_locked.get()
                                        on:click=move |_| role.set(suggestion.to_string())
                                    >
                                        {*suggestion}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <Button
                    kind="submit"
                    class="w-full"
                    disabled=Signal::derive(move || !can_submit())
                    loading=Signal::derive(move || generation.is_loading())
                >
                    {submit_label}
                </Button>
            </form>
        </div>
    }
}
