use leptos::*;

#[component]
pub fn InlineErrorMessage(
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] title: String,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div
                class="rounded-md bg-status-error-bg border border-status-error-border p-4 text-status-error-text"
                role="alert"
            >
                <h3 class="text-sm font-medium">{title.clone()}</h3>
                <p class="mt-1 text-sm">{move || error.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
