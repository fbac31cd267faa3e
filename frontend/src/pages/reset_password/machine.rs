//! Page model of the reset form and its transitions.
//!
//! [`ResetForm::apply`] never touches the browser or the network; it returns
//! the [`Command`]s the view model has to carry out.

use std::time::Duration;

use super::utils::{validate_draft, PasswordDraft, PasswordRule, ValidationPolicy};
use crate::{
    api::{ApiError, ResetResponse},
    i18n::{tr, Locale},
};

/// Delay between a successful reset and the automatic jump to sign-in.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetRequest {
    pub token: String,
    pub id: String,
}

impl ResetRequest {
    /// Builds the request from the page query; `None` if either value is blank.
    pub fn from_query(token: Option<&str>, id: Option<&str>) -> Option<Self> {
        let token = token.map(str::trim).filter(|t| !t.is_empty())?;
        let id = id.map(str::trim).filter(|i| !i.is_empty())?;
        Some(Self {
            token: token.to_string(),
            id: id.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitPayload {
    pub request: ResetRequest,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// Message sent by the verification endpoint.
    Server(String),
    /// The server refused the link without saying why.
    Rejected,
    /// `token` or `id` missing from the URL.
    Incomplete,
    /// Verification could not be completed at all.
    Unverifiable,
}

impl InvalidReason {
    pub fn message(&self, locale: Locale) -> String {
        match self {
            InvalidReason::Server(msg) => msg.clone(),
            InvalidReason::Rejected => tr(locale, "invalid.rejected"),
            InvalidReason::Incomplete => tr(locale, "invalid.incomplete"),
            InvalidReason::Unverifiable => tr(locale, "invalid.unverifiable"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    Validation(PasswordRule),
    Server(String),
    RequestFailed,
}

impl FormError {
    pub fn message(&self, locale: Locale) -> String {
        match self {
            FormError::Validation(rule) => rule.message(locale),
            FormError::Server(msg) => msg.clone(),
            FormError::RequestFailed => tr(locale, "errors.request_failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    InvalidToken(InvalidReason),
    Editing {
        error: Option<FormError>,
        busy: bool,
    },
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Login,
    ForgotPassword,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResetEvent {
    Mounted,
    VerifyCompleted(Result<ResetResponse, ApiError>),
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    TogglePasswordVisibility,
    SubmitRequested,
    SubmitCompleted(Result<ResetResponse, ApiError>),
    RedirectElapsed,
    GoToLogin,
    RequestNewLink,
    Unmounted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Verify(ResetRequest),
    Submit(SubmitPayload),
    ScheduleRedirect { to: NavTarget, after: Duration },
    CancelRedirect,
    Navigate(NavTarget),
    CancelInFlight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResetForm {
    pub request: Option<ResetRequest>,
    pub policy: ValidationPolicy,
    pub view: ViewState,
    pub draft: PasswordDraft,
    pub show_password: bool,
    pub redirect_pending: bool,
    pub disposed: bool,
}

impl ResetForm {
    pub fn new(request: Option<ResetRequest>, policy: ValidationPolicy) -> Self {
        Self {
            request,
            policy,
            view: ViewState::Loading,
            draft: PasswordDraft::default(),
            show_password: false,
            redirect_pending: false,
            disposed: false,
        }
    }

    /// A network call is outstanding.
    pub fn busy(&self) -> bool {
        matches!(
            self.view,
            ViewState::Loading | ViewState::Editing { busy: true, .. }
        )
    }

    pub fn error(&self) -> Option<&FormError> {
        match &self.view {
            ViewState::Editing { error, .. } => error.as_ref(),
            _ => None,
        }
    }

    pub fn apply(&mut self, event: ResetEvent) -> Vec<Command> {
        if self.disposed {
            return Vec::new();
        }

        match event {
            ResetEvent::Mounted => self.on_mounted(),
            ResetEvent::VerifyCompleted(result) => {
                self.on_verified(result);
                Vec::new()
            }
            ResetEvent::PasswordChanged(value) => {
                self.edit(|draft| draft.password = value);
                Vec::new()
            }
            ResetEvent::ConfirmPasswordChanged(value) => {
                self.edit(|draft| draft.confirm_password = value);
                Vec::new()
            }
            ResetEvent::TogglePasswordVisibility => {
                if matches!(self.view, ViewState::Editing { .. }) {
                    self.show_password = !self.show_password;
                }
                Vec::new()
            }
            ResetEvent::SubmitRequested => self.on_submit(),
            ResetEvent::SubmitCompleted(result) => self.on_submitted(result),
            ResetEvent::RedirectElapsed => {
                if self.view == ViewState::Success && self.redirect_pending {
                    self.redirect_pending = false;
                    vec![Command::Navigate(NavTarget::Login)]
                } else {
                    Vec::new()
                }
            }
            ResetEvent::GoToLogin => {
                let mut commands = self.take_redirect();
                commands.push(Command::Navigate(NavTarget::Login));
                commands
            }
            ResetEvent::RequestNewLink => vec![Command::Navigate(NavTarget::ForgotPassword)],
            ResetEvent::Unmounted => {
                self.disposed = true;
                let mut commands = vec![Command::CancelInFlight];
                commands.extend(self.take_redirect());
                commands
            }
        }
    }

    fn on_mounted(&mut self) -> Vec<Command> {
        if self.view != ViewState::Loading {
            return Vec::new();
        }
        match &self.request {
            Some(request) => vec![Command::Verify(request.clone())],
            None => {
                self.view = ViewState::InvalidToken(InvalidReason::Incomplete);
                Vec::new()
            }
        }
    }

    fn on_verified(&mut self, result: Result<ResetResponse, ApiError>) {
        if self.view != ViewState::Loading {
            return;
        }
        self.view = match result {
            Ok(resp) if resp.success => ViewState::Editing {
                error: None,
                busy: false,
            },
            Ok(resp) => ViewState::InvalidToken(
                resp.error
                    .map(InvalidReason::Server)
                    .unwrap_or(InvalidReason::Rejected),
            ),
            Err(err) if err.is_cancelled() => return,
            Err(err) => ViewState::InvalidToken(
                err.server_message()
                    .map(|msg| InvalidReason::Server(msg.to_string()))
                    .unwrap_or(InvalidReason::Unverifiable),
            ),
        };
    }

    fn edit(&mut self, change: impl FnOnce(&mut PasswordDraft)) {
        if let ViewState::Editing { error, .. } = &mut self.view {
            change(&mut self.draft);
            *error = None;
        }
    }

    fn on_submit(&mut self) -> Vec<Command> {
        let Some(request) = self.request.clone() else {
            return Vec::new();
        };
        let ViewState::Editing { error, busy } = &mut self.view else {
            return Vec::new();
        };
        if *busy {
            return Vec::new();
        }
        match validate_draft(&self.draft, self.policy) {
            Err(rule) => {
                *error = Some(FormError::Validation(rule));
                Vec::new()
            }
            Ok(()) => {
                *error = None;
                *busy = true;
                vec![Command::Submit(SubmitPayload {
                    request,
                    password: self.draft.password.clone(),
                })]
            }
        }
    }

    fn on_submitted(&mut self, result: Result<ResetResponse, ApiError>) -> Vec<Command> {
        if !matches!(self.view, ViewState::Editing { busy: true, .. }) {
            return Vec::new();
        }
        let error = match result {
            Ok(resp) if resp.success => {
                self.view = ViewState::Success;
                self.redirect_pending = true;
                return vec![Command::ScheduleRedirect {
                    to: NavTarget::Login,
                    after: REDIRECT_DELAY,
                }];
            }
            Ok(resp) => Some(
                resp.error
                    .map(FormError::Server)
                    .unwrap_or(FormError::RequestFailed),
            ),
            Err(err) if err.is_cancelled() => None,
            Err(err) => Some(
                err.server_message()
                    .map(|msg| FormError::Server(msg.to_string()))
                    .unwrap_or(FormError::RequestFailed),
            ),
        };
        self.view = ViewState::Editing { error, busy: false };
        Vec::new()
    }

    fn take_redirect(&mut self) -> Vec<Command> {
        if std::mem::take(&mut self.redirect_pending) {
            vec![Command::CancelRedirect]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ResetRequest {
        ResetRequest {
            token: "T".into(),
            id: "I".into(),
        }
    }

    fn editing_form(policy: ValidationPolicy) -> ResetForm {
        let mut form = ResetForm::new(Some(request()), policy);
        form.apply(ResetEvent::Mounted);
        form.apply(ResetEvent::VerifyCompleted(Ok(ResetResponse::ok())));
        form
    }

    fn fill(form: &mut ResetForm, password: &str, confirm: &str) {
        form.apply(ResetEvent::PasswordChanged(password.into()));
        form.apply(ResetEvent::ConfirmPasswordChanged(confirm.into()));
    }

    fn has_network_command(commands: &[Command]) -> bool {
        commands
            .iter()
            .any(|c| matches!(c, Command::Verify(_) | Command::Submit(_)))
    }

    #[test]
    fn query_request_requires_token_and_id() {
        assert_eq!(
            ResetRequest::from_query(Some(" T "), Some("I")),
            Some(request())
        );
        assert!(ResetRequest::from_query(None, Some("I")).is_none());
        assert!(ResetRequest::from_query(Some("T"), Some("  ")).is_none());
    }

    #[test]
    fn mount_issues_one_verification() {
        let mut form = ResetForm::new(Some(request()), ValidationPolicy::Strict);
        assert_eq!(form.view, ViewState::Loading);
        assert!(form.busy());
        assert_eq!(
            form.apply(ResetEvent::Mounted),
            vec![Command::Verify(request())]
        );
    }

    #[test]
    fn mount_without_query_skips_network() {
        let mut form = ResetForm::new(None, ValidationPolicy::Strict);
        assert!(form.apply(ResetEvent::Mounted).is_empty());
        assert_eq!(
            form.view,
            ViewState::InvalidToken(InvalidReason::Incomplete)
        );
    }

    #[test]
    fn successful_verification_opens_the_form() {
        let form = editing_form(ValidationPolicy::Strict);
        assert_eq!(
            form.view,
            ViewState::Editing {
                error: None,
                busy: false
            }
        );
        assert!(!form.busy());
    }

    #[test]
    fn expired_token_renders_server_reason_and_never_submits() {
        let mut form = ResetForm::new(Some(request()), ValidationPolicy::Strict);
        form.apply(ResetEvent::Mounted);
        form.apply(ResetEvent::VerifyCompleted(Ok(ResetResponse::rejected(
            "expired",
        ))));
        assert_eq!(
            form.view,
            ViewState::InvalidToken(InvalidReason::Server("expired".into()))
        );
        assert!(!form.busy());

        fill(&mut form, "abc12345", "abc12345");
        let commands = form.apply(ResetEvent::SubmitRequested);
        assert!(!has_network_command(&commands));
        assert_eq!(
            form.view,
            ViewState::InvalidToken(InvalidReason::Server("expired".into()))
        );
    }

    #[test]
    fn rejected_verification_payload_on_failure_status_is_used() {
        let mut form = ResetForm::new(Some(request()), ValidationPolicy::Strict);
        form.apply(ResetEvent::VerifyCompleted(Err(ApiError::rejected(
            "token not found",
        ))));
        assert_eq!(
            form.view,
            ViewState::InvalidToken(InvalidReason::Server("token not found".into()))
        );
    }

    #[test]
    fn transport_failure_without_payload_is_unverifiable() {
        let mut form = ResetForm::new(Some(request()), ValidationPolicy::Strict);
        form.apply(ResetEvent::VerifyCompleted(Err(ApiError::request_failed(
            "connection refused",
        ))));
        assert_eq!(
            form.view,
            ViewState::InvalidToken(InvalidReason::Unverifiable)
        );
    }

    #[test]
    fn cancelled_verification_is_ignored() {
        let mut form = ResetForm::new(Some(request()), ValidationPolicy::Strict);
        form.apply(ResetEvent::VerifyCompleted(Err(ApiError::cancelled())));
        assert_eq!(form.view, ViewState::Loading);
    }

    #[test]
    fn invalid_lengths_are_rejected_before_any_request() {
        for password in ["short1", "abcdefghij1234567890x"] {
            let mut form = editing_form(ValidationPolicy::Strict);
            fill(&mut form, password, password);
            let commands = form.apply(ResetEvent::SubmitRequested);
            assert!(commands.is_empty());
            assert_eq!(
                form.error(),
                Some(&FormError::Validation(PasswordRule::Length))
            );
        }
    }

    #[test]
    fn mismatch_is_rejected_before_any_request() {
        let mut form = editing_form(ValidationPolicy::Lenient);
        fill(&mut form, "abc12345", "abc12346");
        assert!(form.apply(ResetEvent::SubmitRequested).is_empty());
        assert_eq!(
            form.error(),
            Some(&FormError::Validation(PasswordRule::Mismatch))
        );
    }

    #[test]
    fn strict_form_rejects_passwords_without_digits() {
        let mut form = editing_form(ValidationPolicy::Strict);
        fill(&mut form, "abcdefgh", "abcdefgh");
        assert!(form.apply(ResetEvent::SubmitRequested).is_empty());
        assert_eq!(
            form.error().map(|e| e.message(Locale::En)),
            Some("Password must include at least one number".to_string())
        );
    }

    #[test]
    fn editing_clears_the_error() {
        let mut form = editing_form(ValidationPolicy::Strict);
        fill(&mut form, "abc", "abc");
        form.apply(ResetEvent::SubmitRequested);
        assert!(form.error().is_some());
        form.apply(ResetEvent::ConfirmPasswordChanged("abcd".into()));
        assert!(form.error().is_none());
    }

    #[test]
    fn valid_submit_sends_password_and_marks_busy() {
        let mut form = editing_form(ValidationPolicy::Strict);
        fill(&mut form, "abc12345", "abc12345");
        let commands = form.apply(ResetEvent::SubmitRequested);
        assert_eq!(
            commands,
            vec![Command::Submit(SubmitPayload {
                request: request(),
                password: "abc12345".into(),
            })]
        );
        assert!(form.busy());
        assert!(
            form.apply(ResetEvent::SubmitRequested).is_empty(),
            "second submit while busy is ignored"
        );
    }

    #[test]
    fn successful_submit_schedules_exactly_one_redirect() {
        let mut form = editing_form(ValidationPolicy::Strict);
        fill(&mut form, "abc12345", "abc12345");
        form.apply(ResetEvent::SubmitRequested);
        let commands = form.apply(ResetEvent::SubmitCompleted(Ok(ResetResponse::ok())));
        assert_eq!(form.view, ViewState::Success);
        assert_eq!(
            commands,
            vec![Command::ScheduleRedirect {
                to: NavTarget::Login,
                after: Duration::from_millis(3000),
            }]
        );
        assert_eq!(
            form.apply(ResetEvent::RedirectElapsed),
            vec![Command::Navigate(NavTarget::Login)]
        );
        assert!(
            form.apply(ResetEvent::RedirectElapsed).is_empty(),
            "the redirect fires once"
        );
    }

    #[test]
    fn teardown_cancels_the_pending_redirect() {
        let mut form = editing_form(ValidationPolicy::Strict);
        fill(&mut form, "abc12345", "abc12345");
        form.apply(ResetEvent::SubmitRequested);
        form.apply(ResetEvent::SubmitCompleted(Ok(ResetResponse::ok())));

        let commands = form.apply(ResetEvent::Unmounted);
        assert_eq!(
            commands,
            vec![Command::CancelInFlight, Command::CancelRedirect]
        );
        assert!(form.apply(ResetEvent::RedirectElapsed).is_empty());
    }

    #[test]
    fn go_to_login_now_cancels_the_timer_first() {
        let mut form = editing_form(ValidationPolicy::Strict);
        fill(&mut form, "abc12345", "abc12345");
        form.apply(ResetEvent::SubmitRequested);
        form.apply(ResetEvent::SubmitCompleted(Ok(ResetResponse::ok())));
        assert_eq!(
            form.apply(ResetEvent::GoToLogin),
            vec![
                Command::CancelRedirect,
                Command::Navigate(NavTarget::Login)
            ]
        );
        assert!(form.apply(ResetEvent::RedirectElapsed).is_empty());
    }

    #[test]
    fn server_rejection_keeps_the_form_open() {
        let mut form = editing_form(ValidationPolicy::Strict);
        fill(&mut form, "abc12345", "abc12345");
        form.apply(ResetEvent::SubmitRequested);
        form.apply(ResetEvent::SubmitCompleted(Err(ApiError::rejected(
            "password reused",
        ))));
        assert_eq!(
            form.view,
            ViewState::Editing {
                error: Some(FormError::Server("password reused".into())),
                busy: false
            }
        );
    }

    #[test]
    fn transport_failure_on_submit_shows_generic_error() {
        let mut form = editing_form(ValidationPolicy::Strict);
        fill(&mut form, "abc12345", "abc12345");
        form.apply(ResetEvent::SubmitRequested);
        form.apply(ResetEvent::SubmitCompleted(Err(ApiError::request_failed(
            "timeout",
        ))));
        assert_eq!(form.error(), Some(&FormError::RequestFailed));
        assert!(!form.busy());
    }

    #[test]
    fn unsuccessful_submit_payload_is_a_server_error() {
        let mut form = editing_form(ValidationPolicy::Strict);
        fill(&mut form, "abc12345", "abc12345");
        form.apply(ResetEvent::SubmitRequested);
        form.apply(ResetEvent::SubmitCompleted(Ok(ResetResponse::rejected(
            "link already used",
        ))));
        assert_eq!(
            form.error(),
            Some(&FormError::Server("link already used".into()))
        );
    }

    #[test]
    fn nothing_happens_after_unmount() {
        let mut form = ResetForm::new(Some(request()), ValidationPolicy::Strict);
        form.apply(ResetEvent::Mounted);
        assert_eq!(
            form.apply(ResetEvent::Unmounted),
            vec![Command::CancelInFlight]
        );
        assert!(form
            .apply(ResetEvent::VerifyCompleted(Ok(ResetResponse::ok())))
            .is_empty());
        assert_eq!(form.view, ViewState::Loading);
        assert!(form.apply(ResetEvent::GoToLogin).is_empty());
    }

    #[test]
    fn invalid_view_offers_a_new_link() {
        let mut form = ResetForm::new(None, ValidationPolicy::Strict);
        form.apply(ResetEvent::Mounted);
        assert_eq!(
            form.apply(ResetEvent::RequestNewLink),
            vec![Command::Navigate(NavTarget::ForgotPassword)]
        );
    }

    #[test]
    fn visibility_toggle_only_applies_while_editing() {
        let mut form = ResetForm::new(Some(request()), ValidationPolicy::Strict);
        form.apply(ResetEvent::TogglePasswordVisibility);
        assert!(!form.show_password);

        let mut form = editing_form(ValidationPolicy::Strict);
        form.apply(ResetEvent::TogglePasswordVisibility);
        assert!(form.show_password);
    }

    #[test]
    fn reason_messages_are_localized() {
        assert_eq!(
            InvalidReason::Server("expired".into()).message(Locale::Es),
            "expired"
        );
        assert_eq!(
            InvalidReason::Incomplete.message(Locale::En),
            "This reset link is incomplete."
        );
        assert_eq!(
            FormError::RequestFailed.message(Locale::Es),
            "Algo salió mal. Inténtalo de nuevo."
        );
    }

    #[test]
    fn bare_rejection_has_its_own_message() {
        let rejected = InvalidReason::Rejected.message(Locale::En);
        assert_eq!(rejected, "This reset link was rejected.");
        assert_ne!(rejected, tr(Locale::En, "invalid.hint"));
        assert_ne!(
            InvalidReason::Rejected.message(Locale::Es),
            tr(Locale::Es, "invalid.hint")
        );
    }
}
