use std::rc::Rc;

use log::{debug, error, info, warn};
use tutor_shared::{BookingRecord, FetchError, ProfileField, ProfileRecord, SaveError};
use yew::functional::Reducible;

use super::history::HistoryLoader;
use super::mode::EditModeController;
use super::store::ProfileStore;
use crate::config::SaveFailurePolicy;

pub const SAVE_SUCCESS_MESSAGE: &str = "Submission successful";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A toast the screen wants shown. `seq` increases with every notification
/// so two identical messages in a row are still delivered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub seq: u64,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TutorProfileAction {
    ProfileLoaded(Result<ProfileRecord, FetchError>),
    HistoryLoaded(Result<Vec<BookingRecord>, FetchError>),
    BeginEdit,
    SetField { field: ProfileField, value: String },
    SaveStarted,
    SaveFinished(Result<(), SaveError>),
}

/// Everything the tutor profile screen knows. Only [`Reducible::reduce`]
/// produces new values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TutorProfileState {
    pub profile: ProfileStore,
    pub mode: EditModeController,
    pub history: HistoryLoader,
    pub profile_loaded: bool,
    pub history_loaded: bool,
    /// Last fetch failures. Kept for diagnostics, not rendered by default.
    pub profile_error: Option<FetchError>,
    pub history_error: Option<FetchError>,
    pub save_failure_policy: SaveFailurePolicy,
    pub notification: Option<Notification>,
}

impl TutorProfileState {
    pub fn new(save_failure_policy: SaveFailurePolicy) -> Self {
        Self {
            save_failure_policy,
            ..Default::default()
        }
    }

    fn next_notification(&self, kind: NotificationKind, message: String) -> Notification {
        let seq = self.notification.as_ref().map(|n| n.seq + 1).unwrap_or(1);
        Notification { seq, kind, message }
    }

    fn save_notification(&self, outcome: &Result<(), SaveError>) -> Notification {
        match (outcome, self.save_failure_policy) {
            (Ok(()), _) | (Err(_), SaveFailurePolicy::ReportSuccess) => {
                self.next_notification(NotificationKind::Success, SAVE_SUCCESS_MESSAGE.to_string())
            }
            (Err(e), SaveFailurePolicy::SurfaceError) => {
                self.next_notification(NotificationKind::Error, e.to_string())
            }
        }
    }
}

impl Reducible for TutorProfileState {
    type Action = TutorProfileAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TutorProfileAction::ProfileLoaded(Ok(record)) => {
                info!("Tutor profile loaded");
                Rc::new(Self {
                    profile: self.profile.replace(record),
                    profile_loaded: true,
                    profile_error: None,
                    ..(*self).clone()
                })
            }
            TutorProfileAction::ProfileLoaded(Err(e)) => {
                error!("Error fetching user profile data: {}", e);
                Rc::new(Self {
                    profile_loaded: true,
                    profile_error: Some(e),
                    ..(*self).clone()
                })
            }
            TutorProfileAction::HistoryLoaded(Ok(bookings)) => {
                info!("Booking history loaded: {} rows", bookings.len());
                Rc::new(Self {
                    history: self.history.replace(bookings),
                    history_loaded: true,
                    history_error: None,
                    ..(*self).clone()
                })
            }
            TutorProfileAction::HistoryLoaded(Err(e)) => {
                error!("Error fetching booking history: {}", e);
                Rc::new(Self {
                    history_loaded: true,
                    history_error: Some(e),
                    ..(*self).clone()
                })
            }
            TutorProfileAction::BeginEdit => match self.mode.begin_edit() {
                Some(mode) => Rc::new(Self { mode, ..(*self).clone() }),
                None => {
                    debug!("Already editing; ignoring Edit Profile");
                    self
                }
            },
            TutorProfileAction::SetField { field, value } => {
                match self.profile.set_field(&self.mode, field, value) {
                    Ok(profile) => Rc::new(Self { profile, ..(*self).clone() }),
                    Err(e) => {
                        warn!("Ignoring change to {}: {}", field, e);
                        self
                    }
                }
            }
            TutorProfileAction::SaveStarted => match self.mode.begin_save() {
                Some(mode) => Rc::new(Self { mode, ..(*self).clone() }),
                None => {
                    warn!("Save requested outside editing mode; ignoring");
                    self
                }
            },
            TutorProfileAction::SaveFinished(outcome) => {
                if let Err(e) = &outcome {
                    error!("Error updating tutor profile: {}", e);
                }
                let notification = self.save_notification(&outcome);
                Rc::new(Self {
                    mode: self.mode.finish_save(),
                    notification: Some(notification),
                    ..(*self).clone()
                })
            }
        }
    }
}
