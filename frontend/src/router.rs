use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    api::ApiClient, config::ResetConfig, i18n::tr, pages::ResetPasswordPage,
    state::config::provide_config,
};

pub const RESET_PASSWORD_PATH: &str = "/reset-password";

pub const ROUTE_PATHS: &[&str] = &[RESET_PASSWORD_PATH];

pub fn mount_app(config: ResetConfig) {
    mount_to_body(move || app_root(config));
}

pub fn app_root(config: ResetConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    let locale = config.locale;
    let title = match &config.brand_name {
        Some(brand) => format!("{} | {}", tr(locale, "form.heading"), brand),
        None => tr(locale, "form.heading"),
    };
    provide_config(config);

    view! {
        <Html lang=locale.code() />
        <Title text=title />
        <Router>
            <Routes>
                <Route path=RESET_PASSWORD_PATH view=ResetPasswordPage />
            </Routes>
        </Router>
    }
}
