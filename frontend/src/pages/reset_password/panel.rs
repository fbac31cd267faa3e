use super::{
    components::{
        form::ResetPasswordForm,
        status::{InvalidLinkView, LoadingView, SuccessView},
    },
    machine::ResetEvent,
    view_model::{use_reset_password_view_model, ResetPasswordViewModel, Screen},
};
use crate::components::brand::BrandHeader;
use leptos::*;

#[component]
pub fn ResetPasswordPanel() -> impl IntoView {
    let vm = use_reset_password_view_model();
    view! { <ResetPasswordScreens vm=vm /> }
}

#[component]
pub fn ResetPasswordScreens(vm: ResetPasswordViewModel) -> impl IntoView {
    let config = vm.config();
    let locale = config.locale;
    let login_url = config.login_url.clone();
    let show_number_rule = config.policy.requires_number();

    let on_password_input =
        Callback::new(move |value: String| vm.dispatch(ResetEvent::PasswordChanged(value)));
    let on_confirm_input =
        Callback::new(move |value: String| vm.dispatch(ResetEvent::ConfirmPasswordChanged(value)));
    let on_toggle_visibility =
        Callback::new(move |_: ()| vm.dispatch(ResetEvent::TogglePasswordVisibility));
    let on_submit = Callback::new(move |_: ()| vm.dispatch(ResetEvent::SubmitRequested));
    let on_request_new = Callback::new(move |_: ()| vm.dispatch(ResetEvent::RequestNewLink));
    let on_go_to_login = Callback::new(move |_: ()| vm.dispatch(ResetEvent::GoToLogin));

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-6 rounded-lg bg-surface-elevated p-8 shadow">
                <BrandHeader
                    brand_name=config.brand_name.clone()
                    tagline=config.brand_tagline.clone()
                    logo_url=config.logo_url.clone()
                />
                {move || match vm.screen.get() {
                    Screen::Loading => view! { <LoadingView locale=locale /> }.into_view(),
                    Screen::Invalid(reason) => {
                        view! {
                            <InvalidLinkView
                                locale=locale
                                reason=reason
                                on_request_new=on_request_new
                            />
                        }
                            .into_view()
                    }
                    Screen::Success => {
                        view! { <SuccessView locale=locale on_go_to_login=on_go_to_login /> }
                            .into_view()
                    }
                    Screen::Editing => {
                        view! {
                            <ResetPasswordForm
                                locale=locale
                                password=vm.password
                                confirm_password=vm.confirm_password
                                show_password=vm.show_password
                                validation=vm.validation
                                strength=vm.strength
                                can_submit=vm.can_submit
                                busy=vm.busy
                                error=vm.error
                                show_number_rule=show_number_rule
                                on_password_input=on_password_input
                                on_confirm_input=on_confirm_input
                                on_toggle_visibility=on_toggle_visibility
                                on_submit=on_submit
                                login_url=login_url.clone()
                            />
                        }
                            .into_view()
                    }
                }}
            </div>
        </div>
    }
}
