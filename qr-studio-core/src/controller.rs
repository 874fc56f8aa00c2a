//! Generation controller
//!
//! Owns the form, the request lifecycle (Idle → Loading → Success | Failed),
//! the single in-flight guard and the notification channel.
//!
//! Each async operation also exists in a split form for front ends that run
//! network work off the UI thread: `start_*` / `*_job` return a job that can be
//! executed anywhere, and `finish_submit` / `record_side_effect` apply its
//! outcome back on the controller.
//!
//! A job holds a lease on its request. If the job or its outcome is dropped
//! before `finish_submit` (a panicked task, an abandoned `submit` future), the
//! request is failed by `recover_lost_request` instead of staying in `Loading`.

use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};

use crate::error::{StudioError, StudioResult};
use crate::notification::NotificationCenter;
use crate::traits::{Clipboard, Downloader, QrService};
use crate::types::{
    Field, FormInput, GenerationResult, QrImage, RequestState, ValidationErrors,
};
use crate::validator;

/// User-facing message for any failed generation
pub const REQUEST_FAILED_MESSAGE: &str = "Failed to generate the QR code. Please try again.";

/// Path segment of share links: `<origin>/start/<id>`
pub const SHARE_PATH: &str = "/start/";

/// Current form values plus inline field errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub url: String,
    pub prompt: String,
    pub errors: ValidationErrors,
    prompt_validated: bool,
}

impl FormState {
    pub fn input(&self) -> FormInput {
        FormInput::new(self.url.clone(), self.prompt.clone())
    }

    /// Inline message for `field`
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field).map(|e| e.message.as_str())
    }

    /// Prompt length in characters
    pub fn prompt_chars(&self) -> usize {
        self.prompt.chars().count()
    }

    /// Whether the prompt has been validated since it was last replaced wholesale
    pub fn is_prompt_validated(&self) -> bool {
        self.prompt_validated
    }

    fn revalidate(&mut self, field: Field) {
        let error = match field {
            Field::Url => validator::validate_url(&self.url),
            Field::Prompt => validator::validate_prompt(&self.prompt),
        };
        match error {
            Some(error) => self.errors.set(error),
            None => self.errors.clear(field),
        }
    }
}

/// Why a submit did not start a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Field-level errors, already stored on the form
    Invalid(ValidationErrors),
    /// A request is already in flight
    Busy,
}

impl From<SubmitRejection> for StudioError {
    fn from(rejection: SubmitRejection) -> Self {
        match rejection {
            SubmitRejection::Invalid(errors) => Self::Validation(errors),
            SubmitRejection::Busy => Self::Busy,
        }
    }
}

/// One pending call to the QR service
pub struct GenerationJob {
    ticket: u64,
    target: String,
    service: Arc<dyn QrService>,
    lease: Arc<()>,
}

impl GenerationJob {
    /// Perform the network call
    pub async fn run(self) -> GenerationOutcome {
        let result = self.service.generate(&self.target).await;
        GenerationOutcome {
            ticket: self.ticket,
            target: self.target,
            result,
            lease: self.lease,
        }
    }
}

impl fmt::Debug for GenerationJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationJob")
            .field("ticket", &self.ticket)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Result of a [`GenerationJob`]
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub ticket: u64,
    pub target: String,
    pub result: StudioResult<QrImage>,
    lease: Arc<()>,
}

/// The request currently in `Loading`
#[derive(Debug)]
struct InFlight {
    ticket: u64,
    /// Dead once the job and every copy of its outcome are gone
    lease: Weak<()>,
}

impl InFlight {
    fn is_lost(&self) -> bool {
        self.lease.strong_count() == 0
    }
}

/// Download or share work that never touches the request state
pub enum SideEffectJob {
    Download {
        downloader: Arc<dyn Downloader>,
        image_url: String,
        filename: String,
    },
    Share {
        clipboard: Arc<dyn Clipboard>,
        link: String,
    },
}

impl SideEffectJob {
    pub async fn run(self) -> SideEffectOutcome {
        match self {
            Self::Download {
                downloader,
                image_url,
                filename,
            } => SideEffectOutcome::Downloaded(downloader.download(&image_url, &filename).await),
            Self::Share { clipboard, link } => {
                let result = clipboard.write_text(&link).await;
                SideEffectOutcome::Shared { link, result }
            }
        }
    }
}

impl fmt::Debug for SideEffectJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Download {
                image_url,
                filename,
                ..
            } => f
                .debug_struct("Download")
                .field("image_url", image_url)
                .field("filename", filename)
                .finish_non_exhaustive(),
            Self::Share { link, .. } => f
                .debug_struct("Share")
                .field("link", link)
                .finish_non_exhaustive(),
        }
    }
}

/// Result of a [`SideEffectJob`]
#[derive(Debug, Clone)]
pub enum SideEffectOutcome {
    Downloaded(StudioResult<PathBuf>),
    Shared {
        link: String,
        result: StudioResult<()>,
    },
}

/// Form + request lifecycle controller
pub struct GenerationController {
    qr_service: Arc<dyn QrService>,
    clipboard: Arc<dyn Clipboard>,
    downloader: Arc<dyn Downloader>,
    share_origin: String,
    form: FormState,
    state: RequestState,
    in_flight: Option<InFlight>,
    next_ticket: u64,
    notifications: NotificationCenter,
}

impl GenerationController {
    pub fn new(
        qr_service: Arc<dyn QrService>,
        clipboard: Arc<dyn Clipboard>,
        downloader: Arc<dyn Downloader>,
        share_origin: impl Into<String>,
        notification_ttl: Duration,
    ) -> Self {
        Self {
            qr_service,
            clipboard,
            downloader,
            share_origin: share_origin.into(),
            form: FormState::default(),
            state: RequestState::Idle,
            in_flight: None,
            next_ticket: 1,
            notifications: NotificationCenter::new(notification_ttl),
        }
    }

    // ===== Accessors =====

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Present iff the state is `Success`
    pub fn result(&self) -> Option<&GenerationResult> {
        self.state.result()
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Valid form and no request in flight
    pub fn can_submit(&self) -> bool {
        !self.state.is_loading() && validator::validate(&self.form.input()).is_ok()
    }

    /// Drop expired notifications; returns whether anything changed
    pub fn prune_notifications(&mut self, now: Instant) -> bool {
        self.notifications.prune(now)
    }

    // ===== Form editing =====

    /// Replace the URL; an existing inline error is re-evaluated
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.form.url = url.into();
        if self.form.errors.get(Field::Url).is_some() {
            self.form.revalidate(Field::Url);
        }
    }

    /// Replace the prompt; re-evaluated once it has been validated
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.form.prompt = prompt.into();
        if self.form.prompt_validated || self.form.errors.get(Field::Prompt).is_some() {
            self.form.revalidate(Field::Prompt);
        }
    }

    /// Fill the prompt from a suggestion and validate it. Never submits.
    pub fn select_suggestion(&mut self, text: &str) {
        self.form.prompt = text.to_string();
        self.form.prompt_validated = true;
        self.form.revalidate(Field::Prompt);
        log::debug!("Prompt suggestion selected: {text}");
    }

    /// Remove all inline errors
    pub fn clear_errors(&mut self) {
        self.form.errors = ValidationErrors::new();
    }

    // ===== Generation =====

    /// Validate, guard and enter `Loading`; the returned job performs the call.
    pub fn start_submit(&mut self, input: FormInput) -> Result<GenerationJob, SubmitRejection> {
        self.recover_lost_request();
        if let Some(ref in_flight) = self.in_flight {
            log::warn!("Submit rejected: request #{} still in flight", in_flight.ticket);
            return Err(SubmitRejection::Busy);
        }

        self.form.url = input.url;
        self.form.prompt = input.prompt;
        self.form.prompt_validated = true;

        if let Err(errors) = validator::validate(&self.form.input()) {
            log::debug!("Submit rejected by validation: {errors}");
            self.form.errors = errors.clone();
            return Err(SubmitRejection::Invalid(errors));
        }
        self.form.errors = ValidationErrors::new();

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        let lease = Arc::new(());
        self.in_flight = Some(InFlight {
            ticket,
            lease: Arc::downgrade(&lease),
        });
        self.set_state(RequestState::Loading);

        let target = self.form.url.trim().to_string();
        log::info!("Generating QR code #{ticket} for {target}");

        Ok(GenerationJob {
            ticket,
            target,
            service: Arc::clone(&self.qr_service),
            lease,
        })
    }

    /// Apply a finished job. Returns `false` for outcomes of a stale ticket.
    pub fn finish_submit(&mut self, outcome: GenerationOutcome) -> bool {
        if self.in_flight.as_ref().map(|f| f.ticket) != Some(outcome.ticket) {
            log::debug!("Ignoring stale generation outcome #{}", outcome.ticket);
            return false;
        }
        self.in_flight = None;

        match outcome.result {
            Ok(image) => {
                let result = GenerationResult::new(outcome.target, image);
                log::info!(
                    "QR code #{} generated as {} in {}ms",
                    outcome.ticket,
                    result.id,
                    result.latency_ms
                );
                self.notifications.success("QR code generated");
                self.set_state(RequestState::Success(result));
            }
            Err(e) => self.fail_request(outcome.ticket, &e),
        }
        true
    }

    /// Fail the in-flight request if its job was dropped without an outcome.
    ///
    /// Returns whether a lost request was found.
    pub fn recover_lost_request(&mut self) -> bool {
        let Some(ticket) = self
            .in_flight
            .as_ref()
            .filter(|f| f.is_lost())
            .map(|f| f.ticket)
        else {
            return false;
        };
        self.in_flight = None;

        let err = StudioError::Request("generation ended without a result".to_string());
        self.fail_request(ticket, &err);
        true
    }

    fn fail_request(&mut self, ticket: u64, err: &StudioError) {
        if err.is_expected() {
            log::warn!("QR generation #{ticket} failed: {err}");
        } else {
            log::error!("QR generation #{ticket} failed: {err}");
        }
        self.notifications.error(REQUEST_FAILED_MESSAGE);
        self.set_state(RequestState::Failed(REQUEST_FAILED_MESSAGE.to_string()));
    }

    fn set_state(&mut self, state: RequestState) {
        log::debug!("Request state {} -> {}", self.state.label(), state.label());
        self.state = state;
    }

    /// Full submit: validate, call the service once, store the outcome.
    ///
    /// A rejected submit leaves the state untouched.
    pub async fn submit(&mut self, input: FormInput) -> &RequestState {
        match self.start_submit(input) {
            Ok(job) => {
                let outcome = job.run().await;
                self.finish_submit(outcome);
            }
            Err(rejection) => {
                log::debug!("Submit did not start: {}", StudioError::from(rejection));
            }
        }
        &self.state
    }

    // ===== Download / share =====

    /// `<origin>/start/<id>`
    pub fn share_link_for(&self, result: &GenerationResult) -> String {
        format!(
            "{}{SHARE_PATH}{}",
            self.share_origin.trim_end_matches('/'),
            result.id
        )
    }

    pub fn share_job(&self, result: &GenerationResult) -> SideEffectJob {
        SideEffectJob::Share {
            clipboard: Arc::clone(&self.clipboard),
            link: self.share_link_for(result),
        }
    }

    pub fn download_job(&self, result: &GenerationResult, filename: &str) -> SideEffectJob {
        SideEffectJob::Download {
            downloader: Arc::clone(&self.downloader),
            image_url: result.image_url.clone(),
            filename: filename.to_string(),
        }
    }

    /// Turn a side effect outcome into a notification. Returns whether it succeeded.
    pub fn record_side_effect(&mut self, outcome: SideEffectOutcome) -> bool {
        match outcome {
            SideEffectOutcome::Downloaded(Ok(path)) => {
                log::info!("Image saved to {}", path.display());
                self.notifications
                    .success(format!("Saved to {}", path.display()));
                true
            }
            SideEffectOutcome::Downloaded(Err(e)) => {
                log::error!("Download failed: {e}");
                self.notifications.error("Download failed. Please try again.");
                false
            }
            SideEffectOutcome::Shared { link, result: Ok(()) } => {
                log::info!("Share link copied: {link}");
                self.notifications.success("Link copied to clipboard");
                true
            }
            SideEffectOutcome::Shared {
                link,
                result: Err(e),
            } => {
                log::warn!("Could not copy share link {link}: {e}");
                self.notifications.error("Could not copy the link");
                false
            }
        }
    }

    /// Save the image of `result`; the outcome is reported as a notification.
    pub async fn download(&mut self, result: &GenerationResult, filename: &str) -> bool {
        let outcome = self.download_job(result, filename).run().await;
        self.record_side_effect(outcome)
    }

    /// Copy the share link of `result` to the clipboard once.
    pub async fn share_link(&mut self, result: &GenerationResult) -> bool {
        let outcome = self.share_job(result).run().await;
        self.record_side_effect(outcome)
    }
}
