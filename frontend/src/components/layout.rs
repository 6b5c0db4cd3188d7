use leptos::prelude::*;

/// Page chrome: title header, centered content column, footer.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-zinc-950 flex flex-col">
            <header class="border-b border-zinc-800">
                <div class="max-w-4xl mx-auto px-4 py-6">
                    <h1 class="text-2xl font-semibold text-purple-400">"Prompt Generator"</h1>
                    <p class="text-sm text-zinc-400 mt-1">
                        "Create AI prompts for any business role"
                    </p>
                </div>
            </header>

            <main class="max-w-4xl mx-auto px-4 py-8 flex-1 w-full">{children()}</main>

            <footer class="border-t border-zinc-800 mt-auto">
                <div class="max-w-4xl mx-auto px-4 py-4 text-center text-sm text-zinc-500">
                    {format!("{} v{}", prompt_generator::NAME, prompt_generator::VERSION)}
                </div>
            </footer>
        </div>
    }
}
