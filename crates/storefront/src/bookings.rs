//! Booking lifecycle: create, list, filter, cancel, rebook.
//!
//! Status handling follows one rule everywhere: only `Confirmed` and
//! `Cancelled` are written to the store. Whether a confirmed booking is
//! "upcoming" or "completed" is computed against an explicit `now` at
//! read time, so the data never goes stale while nobody is looking.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use thiserror::Error;

use unlock_style_core::{
    BookingId, BookingStatus, BookingView, Email, EmailError, PaymentMethod, Phone, PhoneError,
    with_gst,
};
use unlock_style_storage::{StorageError, Store};

use crate::cart::{CartError, CartManager};
use crate::db::BookingRepository;
use crate::models::{Booking, ServiceLine};

/// Errors that can occur in the booking lifecycle.
#[derive(Debug, Error)]
pub enum BookingError {
    /// One or more form fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No booking with that id exists.
    #[error("booking {0} not found")]
    NotFound(BookingId),

    /// The booking no longer projects to upcoming, so it cannot be
    /// cancelled.
    #[error("booking {0} is not upcoming and cannot be cancelled")]
    NotCancellable(BookingId),

    /// The cart rejected an operation.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// The store rejected a write.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// All field problems found in a booking form, reported together so a
/// form can highlight every bad field in one pass.
#[derive(Debug, Error)]
#[error("booking validation failed: {}", .issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

/// A single invalid field on the booking form.
#[derive(Debug, Error)]
pub enum FieldIssue {
    #[error("name is required")]
    NameMissing,
    #[error("phone: {0}")]
    Phone(PhoneError),
    #[error("email: {0}")]
    Email(EmailError),
    #[error("date is required")]
    DateMissing,
    #[error("date cannot be in the past")]
    DatePast,
    #[error("time is required")]
    TimeMissing,
    #[error("cart is empty")]
    EmptyCart,
}

/// What the customer filled in on the booking page.
///
/// Optional fields stay optional here; validation decides which ones are
/// actually required.
#[derive(Debug, Clone)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub payment: PaymentMethod,
    pub instructions: Option<String>,
}

/// Criterion for the bookings list tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingFilter {
    #[default]
    All,
    Upcoming,
    Completed,
    Cancelled,
}

impl FromStr for BookingFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "upcoming" => Ok(Self::Upcoming),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!(
                "unknown filter {other:?} (expected all, upcoming, completed, or cancelled)"
            )),
        }
    }
}

/// Counts for the bookings page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingStats {
    pub total: usize,
    pub upcoming: usize,
    pub completed: usize,
}

struct ValidatedForm {
    name: String,
    phone: Phone,
    email: Option<Email>,
    date: NaiveDate,
    time: NaiveTime,
}

/// The booking manager.
pub struct BookingManager<'a> {
    repo: BookingRepository<'a>,
}

impl<'a> BookingManager<'a> {
    /// Create a booking manager over a store.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self {
            repo: BookingRepository::new(store),
        }
    }

    /// Create a booking from the form and the current cart.
    ///
    /// Service lines are deep-copied out of the cart, the total is the
    /// cart subtotal plus 18% GST, and the new booking is persisted
    /// before the cart is cleared. Those are two separate writes; a crash
    /// between them leaves the booking saved and the cart still full.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Validation`] listing every bad field
    /// (including an empty cart), or a storage error from either write.
    pub fn create(
        &self,
        form: &BookingForm,
        cart: &mut CartManager<'_>,
        now: DateTime<Utc>,
    ) -> Result<Booking, BookingError> {
        let valid = validate(form, cart.is_empty(), now.date_naive())?;

        let services: Vec<ServiceLine> = cart
            .items()
            .iter()
            .map(|item| ServiceLine {
                name: item.name.clone(),
                price: item.price,
            })
            .collect();
        let subtotal = cart.summary().subtotal;

        let booking = Booking {
            id: BookingId::generate(now),
            name: valid.name,
            phone: valid.phone,
            email: valid.email,
            date: valid.date,
            time: valid.time,
            payment: form.payment,
            instructions: form.instructions.clone(),
            services,
            subtotal,
            total: with_gst(subtotal),
            status: BookingStatus::Confirmed,
            created_at: now,
            cancelled_at: None,
        };

        let mut bookings = self.repo.load();
        bookings.push(booking.clone());
        self.repo.save(&bookings)?;
        cart.clear()?;

        tracing::info!(id = %booking.id, total = %booking.total, "booking created");
        Ok(booking)
    }

    /// All bookings in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Booking> {
        self.repo.load()
    }

    /// Bookings whose projection matches `filter`, relative order kept.
    #[must_use]
    pub fn filter(&self, filter: BookingFilter, now: DateTime<Utc>) -> Vec<Booking> {
        self.repo
            .load()
            .into_iter()
            .filter(|booking| match filter {
                BookingFilter::All => true,
                BookingFilter::Upcoming => booking.view(now) == BookingView::Upcoming,
                BookingFilter::Completed => booking.view(now) == BookingView::Completed,
                BookingFilter::Cancelled => booking.view(now) == BookingView::Cancelled,
            })
            .collect()
    }

    /// Cancel a booking that still projects to upcoming.
    ///
    /// Cancellation is one-way: the status flips to `Cancelled` and
    /// `cancelled_at` is stamped; nothing ever flips it back.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] for an unknown id,
    /// [`BookingError::NotCancellable`] when the slot already passed or
    /// the booking is already cancelled, or a storage error.
    pub fn cancel(&self, id: &BookingId, now: DateTime<Utc>) -> Result<Booking, BookingError> {
        let mut bookings = self.repo.load();
        let Some(booking) = bookings.iter_mut().find(|b| &b.id == id) else {
            return Err(BookingError::NotFound(id.clone()));
        };
        if booking.view(now) != BookingView::Upcoming {
            return Err(BookingError::NotCancellable(id.clone()));
        }

        booking.status = BookingStatus::Cancelled;
        booking.cancelled_at = Some(now);
        let cancelled = booking.clone();
        self.repo.save(&bookings)?;

        tracing::info!(id = %cancelled.id, "booking cancelled");
        Ok(cancelled)
    }

    /// Copy a past booking's services back into the cart as fresh lines.
    ///
    /// The original booking is untouched; this only seeds the cart for a
    /// new checkout. Returns how many lines were added.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] for an unknown id, or a cart
    /// error from the adds.
    pub fn rebook(
        &self,
        id: &BookingId,
        cart: &mut CartManager<'_>,
        now: DateTime<Utc>,
    ) -> Result<usize, BookingError> {
        let Some(booking) = self.repo.find(id) else {
            return Err(BookingError::NotFound(id.clone()));
        };
        for line in &booking.services {
            cart.add_item(&line.name, line.price, now)?;
        }
        Ok(booking.services.len())
    }

    /// Counts for the bookings page header.
    #[must_use]
    pub fn stats(&self, now: DateTime<Utc>) -> BookingStats {
        let bookings = self.repo.load();
        let mut stats = BookingStats {
            total: bookings.len(),
            upcoming: 0,
            completed: 0,
        };
        for booking in &bookings {
            match booking.view(now) {
                BookingView::Upcoming => stats.upcoming += 1,
                BookingView::Completed => stats.completed += 1,
                BookingView::Cancelled => {}
            }
        }
        stats
    }
}

fn validate(
    form: &BookingForm,
    cart_empty: bool,
    today: NaiveDate,
) -> Result<ValidatedForm, ValidationError> {
    let mut issues = Vec::new();

    let name = form.name.trim();
    if name.is_empty() {
        issues.push(FieldIssue::NameMissing);
    }

    let phone = match Phone::parse(&form.phone) {
        Ok(phone) => Some(phone),
        Err(err) => {
            issues.push(FieldIssue::Phone(err));
            None
        }
    };

    let email = match form.email.as_deref() {
        None => None,
        Some(raw) => match Email::parse(raw) {
            Ok(email) => Some(Some(email)),
            Err(err) => {
                issues.push(FieldIssue::Email(err));
                None
            }
        },
    };

    match form.date {
        None => issues.push(FieldIssue::DateMissing),
        Some(date) if date < today => issues.push(FieldIssue::DatePast),
        Some(_) => {}
    }
    if form.time.is_none() {
        issues.push(FieldIssue::TimeMissing);
    }
    if cart_empty {
        issues.push(FieldIssue::EmptyCart);
    }

    match (phone, form.date, form.time) {
        (Some(phone), Some(date), Some(time)) if issues.is_empty() => Ok(ValidatedForm {
            name: name.to_owned(),
            phone,
            email: email.flatten(),
            date,
            time,
        }),
        _ => Err(ValidationError { issues }),
    }
}
