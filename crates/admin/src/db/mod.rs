//! Typed repositories over the shared store (admin collections).

pub mod customers;
pub mod notifications;
pub mod staff;

pub use customers::CustomerRepository;
pub use notifications::NotificationRepository;
pub use staff::StaffRepository;
