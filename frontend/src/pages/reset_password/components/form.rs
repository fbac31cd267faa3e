use super::strength::{RequirementList, StrengthMeter};
use crate::{
    components::{common::Button, error::InlineErrorMessage},
    i18n::{tr, Locale},
    pages::reset_password::utils::ValidationState,
};
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

const INPUT_CLASS: &str = "appearance-none relative block w-full rounded-md px-3 py-2 pr-16 border border-form-control-border placeholder-fg-muted text-fg focus:outline-none focus:ring-action-primary-focus focus:border-action-primary-focus sm:text-sm";

fn input_type(visible: bool) -> &'static str {
    if visible {
        "text"
    } else {
        "password"
    }
}

#[component]
pub fn ResetPasswordForm(
    locale: Locale,
    #[prop(into)] password: Signal<String>,
    #[prop(into)] confirm_password: Signal<String>,
    #[prop(into)] show_password: Signal<bool>,
    #[prop(into)] validation: Signal<ValidationState>,
    #[prop(into)] strength: Signal<u8>,
    #[prop(into)] can_submit: Signal<bool>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(default = true)] show_number_rule: bool,
    on_password_input: Callback<String>,
    on_confirm_input: Callback<String>,
    on_toggle_visibility: Callback<()>,
    on_submit: Callback<()>,
    #[prop(into)] login_url: String,
) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };
    let toggle_label = move || {
        if show_password.get() {
            tr(locale, "form.hide_password")
        } else {
            tr(locale, "form.show_password")
        }
    };

    view! {
        <form class="mt-6 space-y-5" on:submit=handle_submit novalidate>
            <div class="text-center">
                <h2 class="text-2xl font-extrabold text-fg">{tr(locale, "form.heading")}</h2>
                <p class="mt-1 text-sm text-fg-muted">{tr(locale, "form.description")}</p>
            </div>

            <InlineErrorMessage error=error title=tr(locale, "form.error_title") />

            <div class="space-y-2">
                <label for="password" class="block text-sm font-medium text-fg">
                    {tr(locale, "form.password_label")}
                </label>
                <div class="relative">
                    <input
                        id="password"
                        name="password"
                        type=move || input_type(show_password.get())
                        autocomplete="new-password"
                        class=INPUT_CLASS
                        placeholder=tr(locale, "form.password_placeholder")
                        prop:value=password
                        disabled=busy
                        on:input=move |ev| {
                            let target = event_target::<HtmlInputElement>(&ev);
                            on_password_input.call(target.value());
                        }
                    />
                    <button
                        type="button"
                        class="absolute inset-y-0 right-0 px-3 text-xs text-link hover:text-link-hover"
                        aria-label=toggle_label
                        on:click=move |_| on_toggle_visibility.call(())
                    >
                        {toggle_label}
                    </button>
                </div>
                <Show when=move || !password.with(String::is_empty)>
                    <StrengthMeter locale=locale percent=strength />
                </Show>
            </div>

            <div class="space-y-2">
                <label for="confirm_password" class="block text-sm font-medium text-fg">
                    {tr(locale, "form.confirm_label")}
                </label>
                <input
                    id="confirm_password"
                    name="confirm_password"
                    type=move || input_type(show_password.get())
                    autocomplete="new-password"
                    class=INPUT_CLASS
                    placeholder=tr(locale, "form.confirm_placeholder")
                    prop:value=confirm_password
                    disabled=busy
                    on:input=move |ev| {
                        let target = event_target::<HtmlInputElement>(&ev);
                        on_confirm_input.call(target.value());
                    }
                />
                <Show when=move || validation.get().passwords_match>
                    <p class="text-xs text-status-success-text">
                        "✓ " {tr(locale, "form.passwords_match")}
                    </p>
                </Show>
            </div>

            <RequirementList locale=locale state=validation show_number=show_number_rule />

            <Button
                kind="submit"
                disabled=Signal::derive(move || !can_submit.get())
                loading=busy
            >
                {move || {
                    if busy.get() {
                        tr(locale, "form.submitting")
                    } else {
                        tr(locale, "form.submit")
                    }
                }}
            </Button>

            <p class="text-center text-sm text-fg-muted">
                {tr(locale, "form.remembered")} " "
                <a href=login_url class="font-medium text-link hover:text-link-hover">
                    {tr(locale, "form.sign_in")}
                </a>
            </p>
        </form>
    }
}
