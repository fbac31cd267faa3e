use crate::{
    i18n::{tr, Locale},
    pages::reset_password::utils::{StrengthTier, ValidationState},
};
use leptos::*;

#[component]
pub fn StrengthMeter(locale: Locale, #[prop(into)] percent: Signal<u8>) -> impl IntoView {
    let tier = move || StrengthTier::from_percent(percent.get()).as_str();
    view! {
        <div class="space-y-1">
            <div class="flex justify-between text-xs text-fg-muted">
                <span>{tr(locale, "strength.label")}</span>
                <span>{move || format!("{}%", percent.get())}</span>
            </div>
            <div class="h-2 w-full rounded-full bg-surface-muted">
                <div
                    class="strength-bar h-2 rounded-full transition-all duration-300"
                    data-strength=tier
                    style=move || format!("width: {}%", percent.get())
                ></div>
            </div>
        </div>
    }
}

fn requirement_marker(met: bool) -> &'static str {
    if met {
        "✓"
    } else {
        "○"
    }
}

#[component]
fn Requirement(#[prop(into)] met: Signal<bool>, label: String) -> impl IntoView {
    view! {
        <li
            class="flex items-center gap-2"
            class:text-status-success-text=move || met.get()
            data-met=move || met.get().to_string()
        >
            <span aria-hidden="true">{move || requirement_marker(met.get())}</span>
            <span>{label}</span>
        </li>
    }
}

#[component]
pub fn RequirementList(
    locale: Locale,
    #[prop(into)] state: Signal<ValidationState>,
    #[prop(default = true)] show_number: bool,
) -> impl IntoView {
    view! {
        <div class="rounded-md bg-surface-muted p-3 text-xs text-fg-muted">
            <p class="mb-1 font-medium">{tr(locale, "requirements.title")}</p>
            <ul class="space-y-1">
                <Requirement
                    met=Signal::derive(move || state.get().min_length)
                    label=tr(locale, "requirements.min_length")
                />
                <Requirement
                    met=Signal::derive(move || state.get().max_length)
                    label=tr(locale, "requirements.max_length")
                />
                {show_number
                    .then(|| {
                        view! {
                            <Requirement
                                met=Signal::derive(move || state.get().has_number)
                                label=tr(locale, "requirements.has_number")
                            />
                        }
                    })}
            </ul>
        </div>
    }
}
