//! The staff directory.
//!
//! The salon never has an empty team page: when the collection has no
//! records, reads fall back to the built-in default roster. The roster is
//! only materialized into the store by the first write (or an explicit
//! seed), so a fresh deployment stays read-only until someone edits.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use unlock_style_core::{AccountStatus, Email, EmailError, Phone, PhoneError, StaffId};
use unlock_style_storage::{StorageError, Store};

use crate::db::StaffRepository;
use crate::models::StaffMember;

/// Rating every new hire starts with.
const DEFAULT_RATING: Decimal = Decimal::from_parts(45, 0, 0, false, 1);

/// Errors that can occur while editing the staff directory.
#[derive(Debug, Error)]
pub enum StaffError {
    #[error("name is required")]
    NameMissing,

    #[error("invalid phone: {0}")]
    InvalidPhone(#[from] PhoneError),

    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("staff member {0} not found")]
    NotFound(StaffId),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// What the staff editing form collects.
#[derive(Debug, Clone)]
pub struct StaffForm {
    /// Present when editing an existing member, absent for a new hire.
    pub id: Option<StaffId>,
    pub name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
    pub specialty: String,
}

/// The staff directory manager.
pub struct StaffDirectory<'a> {
    repo: StaffRepository<'a>,
}

impl<'a> StaffDirectory<'a> {
    /// Create a staff directory over a store.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self {
            repo: StaffRepository::new(store),
        }
    }

    /// The current roster, or the default roster when none is stored.
    #[must_use]
    pub fn list(&self) -> Vec<StaffMember> {
        let stored = self.repo.load();
        if stored.is_empty() {
            default_roster()
        } else {
            stored
        }
    }

    /// Persist the default roster if the collection is empty.
    ///
    /// # Errors
    ///
    /// Returns [`StaffError::Storage`] if the write fails.
    pub fn seed(&self) -> Result<Vec<StaffMember>, StaffError> {
        let stored = self.repo.load();
        if !stored.is_empty() {
            return Ok(stored);
        }
        let roster = default_roster();
        self.repo.save(&roster)?;
        tracing::info!(members = roster.len(), "seeded default staff roster");
        Ok(roster)
    }

    /// Create or update a staff member.
    ///
    /// With an id, the matching record's editable fields are merged in
    /// and the track record (rating, booking count, status) is kept.
    /// Without one, a new member is appended with the starting rating,
    /// zero bookings, and active status.
    ///
    /// # Errors
    ///
    /// Returns a field error for bad input, [`StaffError::NotFound`] if
    /// the id matches nobody, or a storage error.
    pub fn upsert(&self, form: &StaffForm, now: DateTime<Utc>) -> Result<StaffMember, StaffError> {
        let name = form.name.trim();
        if name.is_empty() {
            return Err(StaffError::NameMissing);
        }
        let phone = Phone::parse(&form.phone)?;
        let email = Email::parse(&form.email)?;

        let mut roster = self.list();
        let saved = if let Some(id) = form.id {
            let member = roster
                .iter_mut()
                .find(|m| m.id == id)
                .ok_or(StaffError::NotFound(id))?;
            member.name = name.to_owned();
            member.role.clone_from(&form.role);
            member.phone = phone;
            member.email = email;
            member.specialty.clone_from(&form.specialty);
            member.clone()
        } else {
            let mut id = StaffId::from_timestamp(now);
            if let Some(max) = roster.iter().map(|m| m.id).max()
                && id <= max
            {
                id = StaffId::new(max.as_i64() + 1);
            }
            let member = StaffMember {
                id,
                name: name.to_owned(),
                role: form.role.clone(),
                phone,
                email,
                specialty: form.specialty.clone(),
                bookings: 0,
                rating: DEFAULT_RATING,
                status: AccountStatus::Active,
            };
            roster.push(member.clone());
            member
        };

        self.repo.save(&roster)?;
        Ok(saved)
    }

    /// Remove a member from the roster.
    ///
    /// # Errors
    ///
    /// Returns [`StaffError::NotFound`] for an unknown id, or a storage
    /// error.
    pub fn remove(&self, id: StaffId) -> Result<(), StaffError> {
        let mut roster = self.list();
        let before = roster.len();
        roster.retain(|m| m.id != id);
        if roster.len() == before {
            return Err(StaffError::NotFound(id));
        }
        self.repo.save(&roster)?;
        Ok(())
    }
}

/// The roster a fresh salon starts with.
#[must_use]
pub fn default_roster() -> Vec<StaffMember> {
    [
        (
            1,
            "Raj Sharma",
            "Senior Stylist",
            "9812045673",
            "raj@unlockstyle.com",
            "Haircuts & Styling",
            156_u32,
            Decimal::new(48, 1),
        ),
        (
            2,
            "Amit Patel",
            "Beard Specialist",
            "9823156784",
            "amit@unlockstyle.com",
            "Beard Grooming",
            132,
            Decimal::new(46, 1),
        ),
        (
            3,
            "Suresh Kumar",
            "Spa Therapist",
            "9834267895",
            "suresh@unlockstyle.com",
            "Hair Spa & Treatments",
            98,
            Decimal::new(47, 1),
        ),
    ]
    .into_iter()
    .filter_map(
        |(id, name, role, phone, email, specialty, bookings, rating)| {
            Some(StaffMember {
                id: StaffId::new(id),
                name: name.to_owned(),
                role: role.to_owned(),
                phone: Phone::parse(phone).ok()?,
                email: Email::parse(email).ok()?,
                specialty: specialty.to_owned(),
                bookings,
                rating,
                status: AccountStatus::Active,
            })
        },
    )
    .collect()
}
