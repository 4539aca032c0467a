//! End-to-end checkout: cart, booking, cancel, rebook, all through the
//! file store.

#![allow(clippy::unwrap_used)]

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use unlock_style_core::{BookingStatus, BookingView, PaymentMethod};
use unlock_style_integration_tests::TestContext;
use unlock_style_storage::Store;
use unlock_style_storefront::bookings::{BookingError, BookingFilter, BookingForm, BookingManager};
use unlock_style_storefront::cart::CartManager;

fn checkout_day() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap()
}

fn form() -> BookingForm {
    BookingForm {
        name: "Asha Verma".to_owned(),
        phone: "9876543210".to_owned(),
        email: Some("asha@example.com".to_owned()),
        date: Some("2025-06-15".parse().unwrap()),
        time: Some("14:00:00".parse().unwrap()),
        payment: PaymentMethod::Upi,
        instructions: None,
    }
}

#[test]
fn test_haircut_checkout_totals() {
    let ctx = TestContext::new();
    let mut cart = CartManager::open(&ctx.store);
    cart.add_item("Classic Haircut", Decimal::from(199), checkout_day())
        .unwrap();

    let summary = cart.summary();
    assert_eq!(summary.subtotal, Decimal::from(199));
    assert_eq!(summary.tax, Decimal::new(3582, 2));
    assert_eq!(summary.total, Decimal::new(23482, 2));

    let manager = BookingManager::new(&ctx.store);
    let booking = manager.create(&form(), &mut cart, checkout_day()).unwrap();
    assert_eq!(booking.total, Decimal::new(23482, 2));
    assert_eq!(booking.status, BookingStatus::Confirmed);

    // The booking survives a completely fresh set of managers, and the
    // cart really is empty on disk, not just in memory.
    let fresh_cart = CartManager::open(&ctx.store);
    assert!(fresh_cart.is_empty());
    let fresh_manager = BookingManager::new(&ctx.store);
    let listed = fresh_manager.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, booking.id);
}

#[test]
fn test_booked_services_survive_catalog_price_change() {
    let ctx = TestContext::new();
    let mut cart = CartManager::open(&ctx.store);
    cart.add_item("Hair Coloring", Decimal::from(799), checkout_day())
        .unwrap();

    let manager = BookingManager::new(&ctx.store);
    let booking = manager.create(&form(), &mut cart, checkout_day()).unwrap();

    // A later cart session with a different price must not reach back
    // into the saved booking.
    let mut later_cart = CartManager::open(&ctx.store);
    later_cart
        .add_item("Hair Coloring", Decimal::from(899), checkout_day())
        .unwrap();

    let reloaded = BookingManager::new(&ctx.store).list();
    assert_eq!(reloaded[0].services[0].price, Decimal::from(799));
    assert_eq!(reloaded[0].total, booking.total);
}

#[test]
fn test_completed_is_derived_without_a_write() {
    let ctx = TestContext::new();
    let mut cart = CartManager::open(&ctx.store);
    cart.add_item("Beard Trim", Decimal::from(149), checkout_day())
        .unwrap();
    let manager = BookingManager::new(&ctx.store);
    manager.create(&form(), &mut cart, checkout_day()).unwrap();

    let raw_before = ctx.store.get(unlock_style_storage::keys::BOOKINGS).unwrap();

    // Watch the same record flip from upcoming to completed purely by
    // asking at different times.
    let before_slot = Utc.with_ymd_and_hms(2025, 6, 15, 13, 0, 0).unwrap();
    let after_slot = Utc.with_ymd_and_hms(2025, 6, 15, 15, 0, 0).unwrap();
    assert_eq!(manager.filter(BookingFilter::Upcoming, before_slot).len(), 1);
    assert_eq!(manager.filter(BookingFilter::Completed, after_slot).len(), 1);

    // No read projected anything into the store.
    let raw_after = ctx.store.get(unlock_style_storage::keys::BOOKINGS).unwrap();
    assert_eq!(raw_before, raw_after);
    assert!(!raw_after.contains("completed"));
}

#[test]
fn test_cancel_then_rebook() {
    let ctx = TestContext::new();
    let mut cart = CartManager::open(&ctx.store);
    cart.add_item("Classic Haircut", Decimal::from(199), checkout_day())
        .unwrap();
    cart.add_item("Head Massage", Decimal::from(349), checkout_day())
        .unwrap();

    let manager = BookingManager::new(&ctx.store);
    let booking = manager.create(&form(), &mut cart, checkout_day()).unwrap();

    let next_day = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
    let cancelled = manager.cancel(&booking.id, next_day).unwrap();
    assert_eq!(cancelled.view(next_day), BookingView::Cancelled);
    assert_eq!(cancelled.cancelled_at, Some(next_day));

    // Cancelled is terminal even though the slot is still in the future.
    assert!(matches!(
        manager.cancel(&booking.id, next_day),
        Err(BookingError::NotCancellable(_))
    ));

    // Rebooking copies both services into the (empty) cart as new lines.
    let added = manager.rebook(&booking.id, &mut cart, next_day).unwrap();
    assert_eq!(added, 2);
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.summary().subtotal, Decimal::from(548));
}

#[test]
fn test_cancel_after_slot_passed_is_rejected() {
    let ctx = TestContext::new();
    let mut cart = CartManager::open(&ctx.store);
    cart.add_item("Classic Haircut", Decimal::from(199), checkout_day())
        .unwrap();
    let manager = BookingManager::new(&ctx.store);
    let booking = manager.create(&form(), &mut cart, checkout_day()).unwrap();

    let week_later = Utc.with_ymd_and_hms(2025, 6, 22, 10, 0, 0).unwrap();
    assert!(matches!(
        manager.cancel(&booking.id, week_later),
        Err(BookingError::NotCancellable(_))
    ));

    // Still listed as completed, untouched.
    let listed = manager.filter(BookingFilter::Completed, week_later);
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].status, BookingStatus::Confirmed);
}
