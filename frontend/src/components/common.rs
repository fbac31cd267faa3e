use leptos::*;

const BASE_CLASSES: &str = "inline-flex items-center justify-center gap-2 rounded-md text-sm font-semibold transition-colors disabled:opacity-50 disabled:cursor-not-allowed";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Full-width call to action.
    #[default]
    Primary,
    /// Inline text action, e.g. "go to sign in now".
    Link,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "w-full px-4 py-2 bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text",
            ButtonVariant::Link => "text-link hover:text-link-hover underline-offset-2 hover:underline",
        }
    }
}

/// `kind` is the HTML `type`; it defaults to `button` so nothing submits a form by accident.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(default = "button")] kind: &'static str,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    let class = format!("{} {}", BASE_CLASSES, variant.classes());
    view! {
        <button
            type=kind
            class=class
            disabled=move || disabled.get() || loading.get()
            aria-busy=move || loading.get().to_string()
        >
            <Show when=move || loading.get()>
                <span class="h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}
