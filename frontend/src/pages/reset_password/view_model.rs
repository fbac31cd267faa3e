use super::{
    machine::{
        Command, NavTarget, ResetEvent, ResetForm, ResetRequest, SubmitPayload, ViewState,
    },
    repository::ResetPasswordRepository,
    utils::{can_submit, password_strength, ValidationState},
};
use crate::{
    api::{ApiClient, ApiError, ResetResponse},
    config::ResetConfig,
    i18n::Locale,
    state::config::use_config,
    utils::{browser, cancel::CancellationToken},
};
use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::use_query_map;
use std::rc::Rc;

/// What the panel renders; changes only when the screen itself changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Invalid(String),
    Editing,
    Success,
}

#[derive(Clone, Copy)]
pub struct ResetPasswordViewModel {
    pub form: RwSignal<ResetForm>,
    pub screen: Memo<Screen>,
    pub password: Memo<String>,
    pub confirm_password: Memo<String>,
    pub show_password: Memo<bool>,
    pub validation: Memo<ValidationState>,
    pub strength: Memo<u8>,
    pub can_submit: Memo<bool>,
    pub busy: Memo<bool>,
    pub error: Memo<Option<String>>,
    config: StoredValue<ResetConfig>,
    verify_action: Action<ResetRequest, Result<ResetResponse, ApiError>>,
    submit_action: Action<SubmitPayload, Result<ResetResponse, ApiError>>,
    cancel: StoredValue<CancellationToken>,
    redirect: StoredValue<Option<Timeout>>,
}

pub fn use_reset_password_view_model() -> ResetPasswordViewModel {
    let config = use_config();
    let api = use_context::<ApiClient>()
        .unwrap_or_else(|| ApiClient::new_with_base_url(config.api_base_url.clone()));
    let query = use_query_map();
    let request = query.with_untracked(|q| {
        ResetRequest::from_query(
            q.get("token").map(String::as_str),
            q.get("id").map(String::as_str),
        )
    });
    if request.is_none() {
        log::warn!("reset link is missing its token or id");
    }

    let vm = ResetPasswordViewModel::new(request, config, Rc::new(api));
    vm.dispatch(ResetEvent::Mounted);
    vm
}

impl ResetPasswordViewModel {
    pub fn new(request: Option<ResetRequest>, config: ResetConfig, client: Rc<ApiClient>) -> Self {
        let repository = ResetPasswordRepository::new_with_client(client);
        let locale = config.locale;
        let policy = config.policy;
        let cancel_token = CancellationToken::new();

        let form = create_rw_signal(ResetForm::new(request, policy));
        let cancel = store_value(cancel_token.clone());
        let redirect = store_value(None::<Timeout>);

        let repo_for_verify = repository.clone();
        let verify_action = create_action(move |request: &ResetRequest| {
            let repo = repo_for_verify.clone();
            let request = request.clone();
            let cancel = cancel.get_value();
            async move { repo.verify_token(&request, &cancel).await }
        });

        let repo_for_submit = repository.clone();
        let submit_action = create_action(move |payload: &SubmitPayload| {
            let repo = repo_for_submit.clone();
            let payload = payload.clone();
            let cancel = cancel.get_value();
            async move { repo.reset_password(&payload, &cancel).await }
        });

        let screen = create_memo(move |_| {
            form.with(|f| match &f.view {
                ViewState::Loading => Screen::Loading,
                ViewState::InvalidToken(reason) => Screen::Invalid(reason.message(locale)),
                ViewState::Editing { .. } => Screen::Editing,
                ViewState::Success => Screen::Success,
            })
        });
        let password = create_memo(move |_| form.with(|f| f.draft.password.clone()));
        let confirm_password =
            create_memo(move |_| form.with(|f| f.draft.confirm_password.clone()));
        let show_password = create_memo(move |_| form.with(|f| f.show_password));
        let validation = create_memo(move |_| form.with(|f| f.draft.validation_state()));
        let strength = create_memo(move |_| password_strength(&validation.get()));
        let can_submit = create_memo(move |_| form.with(|f| can_submit(&f.draft, f.policy)));
        let busy = create_memo(move |_| form.with(ResetForm::busy));
        let error = create_memo(move |_| form.with(|f| f.error().map(|e| e.message(locale))));

        let vm = ResetPasswordViewModel {
            form,
            screen,
            password,
            confirm_password,
            show_password,
            validation,
            strength,
            can_submit,
            busy,
            error,
            config: store_value(config),
            verify_action,
            submit_action,
            cancel,
            redirect,
        };

        create_effect(move |_| {
            if let Some(result) = verify_action.value().get() {
                match &result {
                    Ok(resp) if resp.success => log::info!("reset token verified"),
                    Ok(_) => log::info!("reset token rejected"),
                    Err(err) if err.is_cancelled() => {}
                    Err(err) => log::warn!("token verification failed: {} ({})", err, err.code),
                }
                vm.dispatch(ResetEvent::VerifyCompleted(result));
            }
        });

        create_effect(move |_| {
            if let Some(result) = submit_action.value().get() {
                match &result {
                    Ok(resp) if resp.success => log::info!("password reset accepted"),
                    Ok(_) => log::info!("password reset rejected"),
                    Err(err) if err.is_cancelled() => {}
                    Err(err) => log::warn!("password reset failed: {} ({})", err, err.code),
                }
                vm.dispatch(ResetEvent::SubmitCompleted(result));
            }
        });

        on_cleanup(move || {
            vm.dispatch(ResetEvent::Unmounted);
            // Signals may already be disposed here; the token is not owned by the runtime.
            cancel_token.cancel();
        });

        vm
    }

    pub fn locale(&self) -> Locale {
        self.config.with_value(|c| c.locale)
    }

    pub fn config(&self) -> ResetConfig {
        self.config.get_value()
    }

    pub fn dispatch(&self, event: ResetEvent) {
        let commands = self
            .form
            .try_update(|form| form.apply(event))
            .unwrap_or_default();
        for command in commands {
            self.run(command);
        }
    }

    fn run(&self, command: Command) {
        match command {
            Command::Verify(request) => {
                log::debug!("verifying reset token for account {}", request.id);
                self.verify_action.dispatch(request);
            }
            Command::Submit(payload) => {
                log::debug!("submitting new password for account {}", payload.request.id);
                self.submit_action.dispatch(payload);
            }
            Command::ScheduleRedirect { to, after } => {
                log::debug!("redirecting to {:?} in {:?}", to, after);
                let vm = *self;
                let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
                let timeout = Timeout::new(millis, move || {
                    vm.dispatch(ResetEvent::RedirectElapsed);
                });
                self.redirect.set_value(Some(timeout));
            }
            Command::CancelRedirect => {
                // Dropping the timeout clears it
                self.redirect.try_update_value(|slot| slot.take());
            }
            Command::Navigate(target) => {
                let url = self.config.with_value(|c| match target {
                    NavTarget::Login => c.login_url.clone(),
                    NavTarget::ForgotPassword => c.forgot_password_url.clone(),
                });
                log::info!("navigating to {}", url);
                browser::navigate_to(&url);
            }
            Command::CancelInFlight => {
                self.cancel.try_with_value(|token| token.cancel());
            }
        }
    }
}
