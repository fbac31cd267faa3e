use crate::{
    components::common::{Button, ButtonVariant},
    i18n::{redirect_notice, tr, Locale},
    pages::reset_password::machine::REDIRECT_DELAY,
};
use leptos::*;

#[component]
pub fn LoadingView(locale: Locale) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center space-y-3 py-8" aria-busy="true">
            <span class="h-8 w-8 animate-spin rounded-full border-4 border-action-primary-bg border-t-transparent"></span>
            <p class="text-sm font-medium text-fg">{tr(locale, "loading.title")}</p>
            <p class="text-xs text-fg-muted">{tr(locale, "loading.subtitle")}</p>
        </div>
    }
}

#[component]
pub fn InvalidLinkView(
    locale: Locale,
    #[prop(into)] reason: String,
    on_request_new: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="space-y-4 text-center">
            <div
                class="rounded-md bg-status-error-bg border border-status-error-border p-4 text-status-error-text"
                role="alert"
            >
                <p class="text-sm font-medium">{reason}</p>
            </div>
            <p class="text-sm text-fg-muted">{tr(locale, "invalid.hint")}</p>
            <Button on:click=move |_| on_request_new.call(())>
                {tr(locale, "invalid.request_new")}
            </Button>
        </div>
    }
}

#[component]
pub fn SuccessView(locale: Locale, on_go_to_login: Callback<()>) -> impl IntoView {
    let seconds = REDIRECT_DELAY.as_secs();
    view! {
        <div class="space-y-4 text-center" role="status">
            <div class="rounded-md bg-status-success-bg p-4 text-status-success-text">
                <h3 class="text-lg font-semibold">{tr(locale, "success.title")}</h3>
                <p class="mt-2 text-sm">{tr(locale, "success.body")}</p>
            </div>
            <p class="text-sm text-fg-muted">
                {redirect_notice(locale, seconds)}
            </p>
            <Button variant=ButtonVariant::Link on:click=move |_| on_go_to_login.call(())>
                {tr(locale, "success.go_now")}
            </Button>
        </div>
    }
}
