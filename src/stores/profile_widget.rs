//! Profile widget state
//!
//! Holds everything the random user widget renders from: the loading flag,
//! the error message, the fetched profile and the acknowledgment overlay.
//! The async operations (`request_profile`, `acknowledge`) only touch state
//! through a [`StateHandle`], so they run the same against a Dioxus signal
//! and against a plain `Rc<RefCell<_>>` in tests.

use dioxus::prelude::*;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use crate::services::random_user::{DisplayProfile, FetchError, ProfileSource};

/// Identifies one showing of the acknowledgment overlay
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AckToken(u64);

/// What the widget should render, in precedence order
#[derive(Clone, Debug, PartialEq)]
pub enum Phase<'a> {
    /// Nothing fetched yet
    Idle,
    Loading,
    Error(&'a str),
    Loaded(&'a DisplayProfile),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetState {
    profile: Option<DisplayProfile>,
    error: Option<String>,
    overlay: Option<AckToken>,
    in_flight: usize,
    next_token: u64,
}

impl WidgetState {
    /// Mark a fetch as pending and clear any previous error.
    /// The current profile stays until the fetch resolves.
    pub fn begin_fetch(&mut self) {
        self.in_flight += 1;
        self.error = None;
    }

    /// Apply a resolved fetch. Results land in resolution order, so with
    /// overlapping fetches the last one to resolve is what stays on screen.
    pub fn finish_fetch(&mut self, result: Result<DisplayProfile, FetchError>) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match result {
            Ok(profile) => {
                self.profile = Some(profile);
                self.error = None;
            }
            Err(err) => {
                self.profile = None;
                self.error = Some(err.user_message().to_string());
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn profile(&self) -> Option<&DisplayProfile> {
        self.profile.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> Phase<'_> {
        if self.is_loading() {
            Phase::Loading
        } else if let Some(msg) = self.error() {
            Phase::Error(msg)
        } else if let Some(profile) = self.profile() {
            Phase::Loaded(profile)
        } else {
            Phase::Idle
        }
    }

    /// Show the overlay. A newer showing supersedes any earlier one.
    pub fn show_acknowledgment(&mut self) -> AckToken {
        let token = AckToken(self.next_token);
        self.next_token += 1;
        self.overlay = Some(token);
        token
    }

    /// Hide the overlay if `token` is still the current showing.
    /// Returns whether anything was hidden.
    pub fn expire_acknowledgment(&mut self, token: AckToken) -> bool {
        if self.overlay == Some(token) {
            self.overlay = None;
            true
        } else {
            false
        }
    }

    pub fn is_overlay_visible(&self) -> bool {
        self.overlay.is_some()
    }
}

/// Mutable access to a [`WidgetState`] that may be shared with a view
pub trait StateHandle {
    fn update<R>(&mut self, f: impl FnOnce(&mut WidgetState) -> R) -> R;
}

impl StateHandle for Signal<WidgetState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut WidgetState) -> R) -> R {
        let mut state = self.write();
        f(&mut state)
    }
}

impl StateHandle for Rc<RefCell<WidgetState>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut WidgetState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Fetch one profile from `source` and apply the outcome to the widget
pub async fn request_profile<H, S>(mut handle: H, source: &S)
where
    H: StateHandle,
    S: ProfileSource + ?Sized,
{
    handle.update(WidgetState::begin_fetch);

    let result = source.fetch_profile().await;
    match &result {
        Ok(profile) => log::info!("Fetched random user {}", profile.reference_id),
        Err(e) => log::error!("Failed to fetch random user: {}", e),
    }

    handle.update(|state| state.finish_fetch(result));
}

/// Show the acknowledgment overlay, wait `delay` using `sleep`, then hide it.
///
/// Dropping the returned future before the delay elapses leaves the overlay
/// untouched, which is how the widget cancels the hide on teardown.
pub async fn acknowledge<H, S, F>(mut handle: H, delay: Duration, sleep: S)
where
    H: StateHandle,
    S: FnOnce(Duration) -> F,
    F: Future<Output = ()>,
{
    let token = handle.update(WidgetState::show_acknowledgment);
    sleep(delay).await;
    handle.update(|state| state.expire_acknowledgment(token));
}
