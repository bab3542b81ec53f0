//! Edit-user modal state.
//!
//! DESIGN
//! ======
//! `Idle -> Editing -> Submitting` and back. The draft is the only locally
//! mutated copy of a user; it survives a failed submit and is dropped on
//! success or cancel. Nothing here merges into the users list: a successful
//! write is always followed by a refetch.

#[cfg(test)]
#[path = "user_edit_test.rs"]
mod user_edit_test;

use crate::net::error::ApiError;
use crate::net::types::{User, UserPatch};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditPhase {
    #[default]
    Idle,
    Editing,
    Submitting,
}

/// Editable form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Username,
    Name,
    Email,
    TeamId,
}

/// In-progress copy of a user's editable fields, all as raw input text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub username: String,
    pub name: String,
    pub email: String,
    /// Empty string means "no team".
    pub team_id: String,
}

impl UserDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            team_id: user.team_id.map(|id| id.to_string()).unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Username => self.username = value,
            DraftField::Name => self.name = value,
            DraftField::Email => self.email = value,
            DraftField::TeamId => self.team_id = value,
        }
    }

    /// Build the PATCH body. A blank or non-numeric team becomes `null`.
    pub fn to_patch(&self) -> UserPatch {
        UserPatch {
            username: self.username.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            team_id: parse_team_id(&self.team_id),
        }
    }
}

pub fn parse_team_id(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse().ok()
}

/// What the page does once a submit settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Reload the users list from the backend.
    Refetch,
    /// Show a blocking alert; the modal stays open.
    Alert(String),
}

/// Modal state owned by the Users page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserEditState {
    pub phase: EditPhase,
    pub user_id: Option<i64>,
    pub draft: UserDraft,
}

impl UserEditState {
    pub fn is_open(&self) -> bool {
        self.phase != EditPhase::Idle
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == EditPhase::Submitting
    }

    /// `Idle -> Editing` with the draft copied from `user`. Ignored while a
    /// submit is in flight.
    pub fn open(&mut self, user: &User) {
        if self.is_submitting() {
            return;
        }
        self.phase = EditPhase::Editing;
        self.user_id = Some(user.id);
        self.draft = UserDraft::from_user(user);
    }

    /// Discard the draft and close. Returns `false` when a submit is in
    /// flight and the modal must stay open.
    pub fn cancel(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = Self::default();
        true
    }

    /// Inputs are disabled outside `Editing`.
    pub fn set_field(&mut self, field: DraftField, value: String) {
        if self.phase == EditPhase::Editing {
            self.draft.set(field, value);
        }
    }

    /// `Editing -> Submitting`, yielding the request to send.
    pub fn begin_submit(&mut self) -> Option<(i64, UserPatch)> {
        if self.phase != EditPhase::Editing {
            return None;
        }
        let user_id = self.user_id?;
        self.phase = EditPhase::Submitting;
        Some((user_id, self.draft.to_patch()))
    }

    /// Settle a submit: success closes and clears, failure returns to
    /// `Editing` with the draft untouched. `None` when no submit was pending.
    pub fn finish_submit(&mut self, result: &Result<(), ApiError>) -> Option<SubmitOutcome> {
        if !self.is_submitting() {
            return None;
        }
        match result {
            Ok(()) => {
                *self = Self::default();
                Some(SubmitOutcome::Refetch)
            }
            Err(e) => {
                self.phase = EditPhase::Editing;
                Some(SubmitOutcome::Alert(format!("Error: {e}")))
            }
        }
    }
}
