//! The customer directory.
//!
//! Search, status and visit-count filters, and fixed-size pagination over
//! the `salonCustomers` collection. Also home of the sample-data
//! generator the CLI seeder uses for demo environments.

use chrono::{Days, NaiveDate};
use rand::Rng;
use thiserror::Error;

use unlock_style_core::{AccountStatus, CustomerId, Email, Phone};
use unlock_style_storage::{StorageError, Store};
use unlock_style_storefront::db::BookingRepository;
use unlock_style_storefront::models::Booking;

use crate::db::CustomerRepository;
use crate::models::Customer;

/// Rows per directory page.
pub const PAGE_SIZE: usize = 10;

/// Visit-count buckets the directory can filter by.
///
/// "Regular" is three or more visits, "new" is exactly one. Customers
/// with zero or two visits match neither bucket, only the unfiltered
/// view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingBucket {
    Regular,
    New,
}

impl BookingBucket {
    const REGULAR_MIN: u32 = 3;

    fn matches(self, bookings: u32) -> bool {
        match self {
            Self::Regular => bookings >= Self::REGULAR_MIN,
            Self::New => bookings == 1,
        }
    }
}

/// Directory filters; all default to off.
#[derive(Debug, Clone, Default)]
pub struct CustomerQuery {
    /// Case-insensitive substring over name, email, and phone.
    pub search: Option<String>,
    pub status: Option<AccountStatus>,
    pub bucket: Option<BookingBucket>,
}

/// One page of matching customers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub items: Vec<Customer>,
    /// 1-based page number actually returned (clamped into range).
    pub page: usize,
    pub total_pages: usize,
    /// Matching records across all pages.
    pub total: usize,
}

/// Errors that can occur while editing the directory.
#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("customer {0} not found")]
    NotFound(CustomerId),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A single record joined with its booking history.
#[derive(Debug, Clone)]
pub struct CustomerDetail {
    pub customer: Customer,
    /// Bookings made under the customer's phone number, in stored order.
    pub bookings: Vec<Booking>,
}

/// The customer directory manager.
pub struct CustomerDirectory<'a> {
    store: &'a dyn Store,
    repo: CustomerRepository<'a>,
}

impl<'a> CustomerDirectory<'a> {
    /// Create a customer directory over a store.
    #[must_use]
    pub const fn new(store: &'a dyn Store) -> Self {
        Self {
            store,
            repo: CustomerRepository::new(store),
        }
    }

    /// All records, unfiltered, in stored order.
    #[must_use]
    pub fn list(&self) -> Vec<Customer> {
        self.repo.load()
    }

    /// One page of records matching `query`.
    ///
    /// `page` is 1-based and clamped into range, so asking for page 99 of
    /// a 3-page result returns the last page rather than nothing.
    #[must_use]
    pub fn query(&self, query: &CustomerQuery, page: usize) -> Page {
        let needle = query.search.as_deref().map(str::to_lowercase);
        let matching: Vec<Customer> = self
            .repo
            .load()
            .into_iter()
            .filter(|customer| {
                if let Some(needle) = &needle
                    && !matches_search(customer, needle)
                {
                    return false;
                }
                if let Some(status) = query.status
                    && customer.status != status
                {
                    return false;
                }
                if let Some(bucket) = query.bucket
                    && !bucket.matches(customer.bookings)
                {
                    return false;
                }
                true
            })
            .collect();

        let total = matching.len();
        let total_pages = total.div_ceil(PAGE_SIZE).max(1);
        let page = page.clamp(1, total_pages);
        let items = matching
            .into_iter()
            .skip((page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect();

        Page {
            items,
            page,
            total_pages,
            total,
        }
    }

    /// Look up a single record.
    #[must_use]
    pub fn find(&self, id: CustomerId) -> Option<Customer> {
        self.repo.load().into_iter().find(|c| c.id == id)
    }

    /// A record joined with the bookings made under its phone number.
    ///
    /// Phone is the one identifier every booking carries, so walk-ins and
    /// account holders match alike. `None` for an unknown id.
    #[must_use]
    pub fn detail(&self, id: CustomerId) -> Option<CustomerDetail> {
        let customer = self.find(id)?;
        let bookings = BookingRepository::new(self.store)
            .load()
            .into_iter()
            .filter(|b| b.phone == customer.phone)
            .collect();
        Some(CustomerDetail { customer, bookings })
    }

    /// Remove a customer record.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerError::NotFound`] for an unknown id, or a
    /// storage error.
    pub fn remove(&self, id: CustomerId) -> Result<(), CustomerError> {
        let mut customers = self.repo.load();
        let before = customers.len();
        customers.retain(|c| c.id != id);
        if customers.len() == before {
            return Err(CustomerError::NotFound(id));
        }
        self.repo.save(&customers)?;
        Ok(())
    }

    /// Fill an empty directory with generated sample records.
    ///
    /// A directory that already has records is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerError::Storage`] if the write fails.
    pub fn seed_samples(
        &self,
        count: usize,
        rng: &mut impl Rng,
        today: NaiveDate,
    ) -> Result<Vec<Customer>, CustomerError> {
        let stored = self.repo.load();
        if !stored.is_empty() {
            return Ok(stored);
        }
        let samples = sample_customers(count, rng, today);
        self.repo.save(&samples)?;
        tracing::info!(customers = samples.len(), "seeded sample customers");
        Ok(samples)
    }
}

fn matches_search(customer: &Customer, needle: &str) -> bool {
    customer.name.to_lowercase().contains(needle)
        || customer.email.as_str().to_lowercase().contains(needle)
        || customer.phone.as_str().contains(needle)
}

/// Generate plausible demo customers.
///
/// Purely for seeding demo environments; production data only ever comes
/// in through real bookings.
#[must_use]
pub fn sample_customers(count: usize, rng: &mut impl Rng, today: NaiveDate) -> Vec<Customer> {
    const FIRST_NAMES: &[&str] = &[
        "Aarav", "Vivaan", "Aditya", "Arjun", "Reyansh", "Ishaan", "Kabir", "Ananya", "Diya",
        "Saanvi", "Aadhya", "Myra", "Anika", "Navya",
    ];
    const LAST_NAMES: &[&str] = &[
        "Sharma", "Verma", "Patel", "Gupta", "Singh", "Kumar", "Reddy", "Iyer", "Nair", "Mehta",
    ];

    (0..count)
        .filter_map(|i| {
            let first = FIRST_NAMES.get(rng.random_range(0..FIRST_NAMES.len()))?;
            let last = LAST_NAMES.get(rng.random_range(0..LAST_NAMES.len()))?;
            let email = Email::parse(&format!(
                "{}.{}{}@example.com",
                first.to_lowercase(),
                last.to_lowercase(),
                i
            ))
            .ok()?;
            let digits: String = (0..Phone::DIGITS - 1)
                .map(|_| char::from(b'0' + rng.random_range(0..10_u8)))
                .collect();
            let phone = Phone::parse(&format!("9{digits}")).ok()?;

            let bookings = rng.random_range(0..=12_u32);
            let last_visit = if bookings > 0 {
                today.checked_sub_days(Days::new(rng.random_range(0..90)))
            } else {
                None
            };
            let status = if rng.random_range(0..10) == 0 {
                AccountStatus::Inactive
            } else {
                AccountStatus::Active
            };

            Some(Customer {
                id: CustomerId::new(i64::try_from(i).ok()? + 1),
                name: format!("{first} {last}"),
                email,
                phone,
                bookings,
                last_visit,
                status,
            })
        })
        .collect()
}
