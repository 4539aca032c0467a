//! Fixed store keys.
//!
//! These string constants are the entire coupling surface between the
//! storefront and admin sides: both read and write the same keys. Renaming
//! one is a data migration, so don't.

/// Cart line items (ordered sequence).
pub const CART: &str = "salonCart";
/// All bookings ever created (insertion order).
pub const BOOKINGS: &str = "salonBookings";
/// Registered user accounts.
pub const USERS: &str = "salonUsers";
/// Staff directory.
pub const STAFF: &str = "salonStaff";
/// Admin-side customer records (independent of user accounts).
pub const CUSTOMERS: &str = "salonCustomers";
/// Broadcast notification history (newest first).
pub const NOTIFICATIONS: &str = "salonNotifications";
/// Contact form submissions.
pub const CONTACTS: &str = "salonContacts";
/// Seeded service catalog.
pub const SERVICES: &str = "salonServices";
/// Email of the last user who ticked "remember me" (email only, no session).
pub const REMEMBERED_USER: &str = "rememberedUser";
