//! Admin-side flows over the same store the storefront writes.

#![allow(clippy::unwrap_used)]

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use unlock_style_admin::customers::{BookingBucket, CustomerDirectory, CustomerQuery, PAGE_SIZE};
use unlock_style_admin::export::to_csv;
use unlock_style_admin::notifications::{
    DeliveryError, Notification, NotificationCenter, NotificationDelivery, NotificationDraft,
};
use unlock_style_admin::staff::{StaffDirectory, StaffForm};
use unlock_style_admin::stats::dashboard_stats;
use unlock_style_core::{AccountStatus, PaymentMethod, StaffId};
use unlock_style_integration_tests::TestContext;
use unlock_style_storefront::bookings::{BookingForm, BookingManager};
use unlock_style_storefront::cart::CartManager;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap()
}

#[test]
fn test_staff_edits_survive_restart() {
    let ctx = TestContext::new();
    {
        let directory = StaffDirectory::new(&ctx.store);
        let hired = directory
            .upsert(
                &StaffForm {
                    id: None,
                    name: "Vikram Singh".to_owned(),
                    role: "Junior Stylist".to_owned(),
                    phone: "9845378906".to_owned(),
                    email: "vikram@unlockstyle.com".to_owned(),
                    specialty: "Haircuts".to_owned(),
                },
                now(),
            )
            .unwrap();
        assert_eq!(hired.rating, Decimal::new(45, 1));
    }

    let directory = StaffDirectory::new(&ctx.store);
    assert_eq!(directory.list().len(), 4);

    directory.remove(StaffId::new(1)).unwrap();
    assert_eq!(StaffDirectory::new(&ctx.store).list().len(), 3);
}

#[test]
fn test_customer_directory_paging_through_files() {
    let ctx = TestContext::new();
    let directory = CustomerDirectory::new(&ctx.store);
    let mut rng = rand::rng();
    directory
        .seed_samples(35, &mut rng, "2025-06-01".parse().unwrap())
        .unwrap();

    let page1 = directory.query(&CustomerQuery::default(), 1);
    assert_eq!(page1.items.len(), PAGE_SIZE);
    assert_eq!(page1.total, 35);
    assert_eq!(page1.total_pages, 4);

    let last = directory.query(&CustomerQuery::default(), 4);
    assert_eq!(last.items.len(), 5);

    // Buckets partition by visit count.
    let regulars = directory.query(
        &CustomerQuery {
            bucket: Some(BookingBucket::Regular),
            ..Default::default()
        },
        1,
    );
    for customer in &regulars.items {
        assert!(customer.bookings >= 3);
    }

    let active = directory.query(
        &CustomerQuery {
            status: Some(AccountStatus::Active),
            ..Default::default()
        },
        1,
    );
    for customer in &active.items {
        assert_eq!(customer.status, AccountStatus::Active);
    }
}

struct AlwaysDelivers;

impl NotificationDelivery for AlwaysDelivers {
    fn deliver(&self, _notification: &Notification) -> Result<(), DeliveryError> {
        Ok(())
    }
}

struct ChannelDown;

impl NotificationDelivery for ChannelDown {
    fn deliver(&self, _notification: &Notification) -> Result<(), DeliveryError> {
        Err(DeliveryError("push gateway unreachable".to_owned()))
    }
}

#[test]
fn test_broadcast_audit_trail_across_sessions() {
    let ctx = TestContext::new();
    let draft = NotificationDraft {
        title: "Monsoon offer".to_owned(),
        message: "20% off spa treatments all July.".to_owned(),
        kind: unlock_style_core::NotificationKind::Promotion,
        audience: unlock_style_core::Audience::Customers,
    };

    {
        let center = NotificationCenter::new(&ctx.store);
        center.broadcast(&draft, &ChannelDown, now()).unwrap();
        center
            .broadcast(
                &draft,
                &AlwaysDelivers,
                Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 1).unwrap(),
            )
            .unwrap();
    }

    let history = NotificationCenter::new(&ctx.store).history();
    assert_eq!(history.len(), 2);
    // Newest first; the failed one is still there, unsent.
    assert!(history[0].sent);
    assert!(!history[1].sent);
}

#[test]
fn test_csv_export_of_staff_roster() {
    let ctx = TestContext::new();
    let roster = StaffDirectory::new(&ctx.store).list();
    let csv = to_csv(&roster).unwrap();

    let mut lines = csv.lines();
    let header = lines.next().unwrap();
    assert!(header.contains("name"));
    assert!(header.contains("specialty"));
    // One row per member, every cell JSON-quoted where needed.
    assert_eq!(lines.count(), 3);
    assert!(csv.contains("\"Raj Sharma\""));
}

#[test]
fn test_dashboard_reflects_storefront_activity() {
    let ctx = TestContext::new();
    let manager = BookingManager::new(&ctx.store);
    let mut cart = CartManager::open(&ctx.store);
    cart.add_item("Men's Facial", Decimal::from(599), now())
        .unwrap();
    manager
        .create(
            &BookingForm {
                name: "Rohan".to_owned(),
                phone: "9812345670".to_owned(),
                email: None,
                date: Some("2025-06-20".parse().unwrap()),
                time: Some("16:00:00".parse().unwrap()),
                payment: PaymentMethod::Cash,
                instructions: Some("First visit".to_owned()),
            },
            &mut cart,
            now(),
        )
        .unwrap();

    let stats = dashboard_stats(&ctx.store, now());
    assert_eq!(stats.bookings, 1);
    assert_eq!(stats.upcoming, 1);
    assert_eq!(stats.revenue, Decimal::new(70682, 2));
}
