//! State for the profile page.
//!
//! Every transition takes the current state by value and returns the next
//! one, so components hold a single `Signal<ProfilePage>` and swap it.
//! Profile edits go to a draft that is only committed on save.

use super::error::{SaveError, ShareError, ValidationErrors};
use super::fixtures;
use super::profile::{validate_field, MemberSince, ProfileData, ProfileField, UserStats};
use super::services::{Clipboard, Notification};
use super::trip::{share_text, trips_for_tab, Trip, TripCounts, TripTab};

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    pub data: ProfileData,
    pub errors: ValidationErrors,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePage {
    pub profile: ProfileData,
    pub member_since: MemberSince,
    pub stats: UserStats,
    pub trips: Vec<Trip>,
    pub active_tab: TripTab,
    pub selected_trip: Option<u32>,
    pub draft: Option<ProfileDraft>,
}

impl Default for ProfilePage {
    fn default() -> Self {
        Self::new(
            fixtures::profile(),
            fixtures::member_since(),
            fixtures::user_stats(),
            fixtures::user_trips(),
        )
    }
}

impl ProfilePage {
    pub fn new(
        profile: ProfileData,
        member_since: MemberSince,
        stats: UserStats,
        trips: Vec<Trip>,
    ) -> Self {
        Self {
            profile,
            member_since,
            stats,
            trips,
            active_tab: TripTab::All,
            selected_trip: None,
            draft: None,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Profile editor
    // ─────────────────────────────────────────────────────────

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn open_editor(mut self) -> Self {
        self.draft = Some(ProfileDraft {
            data: self.profile.clone(),
            errors: ValidationErrors::default(),
        });
        self
    }

    pub fn edit_field(mut self, field: ProfileField, value: impl Into<String>) -> Self {
        if let Some(draft) = self.draft.as_mut() {
            draft.data = draft.data.with(field, value);
            draft.errors.clear(field);
        }
        self
    }

    /// Re-checks a single field, e.g. when its input loses focus.
    pub fn check_field(mut self, field: ProfileField) -> Self {
        if let Some(draft) = self.draft.as_mut() {
            draft.errors.clear(field);
            if let Err(e) = validate_field(field, draft.data.get(field)) {
                draft.errors.push(field, e);
            }
        }
        self
    }

    pub fn save_profile(mut self) -> (Self, Result<Notification, SaveError>) {
        let Some(mut draft) = self.draft.take() else {
            return (self, Err(SaveError::NotEditing));
        };
        match draft.data.validate() {
            Ok(()) => {
                tracing::info!("Profile updated for {}", draft.data.name);
                self.profile = draft.data.normalized();
                let notification = Notification::success(
                    "Profile Updated",
                    "Your profile has been successfully updated.",
                );
                (self, Ok(notification))
            }
            Err(errors) => {
                tracing::warn!("Profile not saved: {}", errors);
                draft.errors = errors.clone();
                self.draft = Some(draft);
                (self, Err(SaveError::Invalid(errors)))
            }
        }
    }

    pub fn cancel_edit(mut self) -> Self {
        self.draft = None;
        self
    }

    // ─────────────────────────────────────────────────────────
    // Trip list
    // ─────────────────────────────────────────────────────────

    pub fn select_tab(mut self, tab: TripTab) -> Self {
        tracing::debug!("Trip tab: {:?}", tab);
        self.active_tab = tab;
        self
    }

    pub fn counts(&self) -> TripCounts {
        TripCounts::from_trips(&self.trips)
    }

    pub fn visible_trips(&self) -> Vec<&Trip> {
        trips_for_tab(&self.trips, self.active_tab)
    }

    pub fn find_trip(&self, id: u32) -> Option<&Trip> {
        self.trips.iter().find(|trip| trip.id == id)
    }

    // ─────────────────────────────────────────────────────────
    // Trip detail
    // ─────────────────────────────────────────────────────────

    /// Unknown ids leave nothing selected.
    pub fn select_trip(mut self, id: u32) -> Self {
        self.selected_trip = self.find_trip(id).map(|trip| trip.id);
        tracing::debug!("Selected trip: {:?}", self.selected_trip);
        self
    }

    pub fn close_trip(mut self) -> Self {
        self.selected_trip = None;
        self
    }

    pub fn selected(&self) -> Option<&Trip> {
        self.selected_trip.and_then(|id| self.find_trip(id))
    }

    pub async fn share_trip<C: Clipboard>(
        &self,
        id: u32,
        clipboard: &C,
    ) -> Result<Notification, ShareError> {
        let trip = self.find_trip(id).ok_or(ShareError::UnknownTrip(id))?;
        let text = share_text(trip);
        match clipboard.write_text(&text).await {
            Ok(()) => {
                tracing::info!("Shared trip {} ({})", trip.id, trip.destination);
                Ok(Notification::success("Trip Shared", "Trip link copied to clipboard!"))
            }
            Err(e) => {
                tracing::warn!("Sharing trip {} failed: {}", trip.id, e);
                Err(e.into())
            }
        }
    }
}
