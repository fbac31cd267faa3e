use leptos::*;

pub mod components;
pub mod machine;
mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::ResetPasswordPanel;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    view! { <ResetPasswordPanel /> }
}
