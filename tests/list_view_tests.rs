//! Search, sort and pagination over fetched lists

use chrono::{TimeZone, Utc};
use erp_admin::core::store::{ListView, SortConfig, SortDirection};
use erp_admin::entities::{Order, ShipmentStatus, Vendor};
use erp_admin::forms::RecordList;

fn vendor(id: i64, name: &str, city: &str) -> Vendor {
    Vendor {
        id: Some(id),
        name: name.to_string(),
        city: city.to_string(),
        email: "sales@example.com".to_string(),
        ..Default::default()
    }
}

fn vendors() -> Vec<Vendor> {
    vec![
        vendor(1, "Shakti Steel", "Pune"),
        vendor(2, "Apex Fasteners", "Mumbai"),
        vendor(3, "Pune Polymers", "Nashik"),
        vendor(4, "Bharat Bearings", "pune"),
        vendor(5, "Coastal Paints", "Goa"),
    ]
}

fn names(page: &[Vendor]) -> Vec<&str> {
    page.iter().map(|v| v.name.as_str()).collect()
}

fn order(id: i64, day: u32, status: ShipmentStatus) -> Order {
    Order {
        id: Some(id),
        customer: 1,
        product: 1,
        quantity: 1,
        status,
        order_date: Some(Utc.with_ymd_and_hms(2025, 4, day, 9, 0, 0).unwrap()),
        ..Default::default()
    }
}

#[test]
fn test_search_matches_any_indexed_field() {
    let mut view = ListView::default();
    view.set_search("PUNE");

    let page = view.apply(&vendors());
    assert_eq!(
        names(&page.items),
        vec!["Shakti Steel", "Pune Polymers", "Bharat Bearings"]
    );
    assert_eq!(page.pagination.total, 3);
}

#[test]
fn test_blank_search_keeps_everything() {
    let mut view = ListView::default();
    view.set_search("   ");
    assert_eq!(view.apply(&vendors()).items.len(), 5);
}

#[test]
fn test_search_returns_to_first_page() {
    let mut view = ListView::new(2);
    view.go_to(3);
    assert_eq!(view.apply(&vendors()).pagination.page, 3);

    view.set_search("a");
    assert_eq!(view.page(), 1);
}

#[test]
fn test_sort_toggles_direction() {
    let mut view = ListView::default();

    assert_eq!(view.sort_by("name").direction, SortDirection::Asc);
    assert_eq!(
        names(&view.apply(&vendors()).items),
        vec![
            "Apex Fasteners",
            "Bharat Bearings",
            "Coastal Paints",
            "Pune Polymers",
            "Shakti Steel"
        ]
    );

    assert_eq!(view.sort_by("name").direction, SortDirection::Desc);
    assert_eq!(view.apply(&vendors()).items[0].name, "Shakti Steel");

    assert_eq!(view.sort_by("name").direction, SortDirection::Asc);
    assert_eq!(view.sort_by("city"), &SortConfig::asc("city"));
}

#[test]
fn test_sort_is_stable() {
    let mut view = ListView::default();
    view.sort_by("city");

    let page = view.apply(&vendors());
    let cities: Vec<&str> = page.items.iter().map(|v| v.city.as_str()).collect();
    assert_eq!(cities, vec!["Goa", "Mumbai", "Nashik", "Pune", "pune"]);
}

#[test]
fn test_default_sort_until_column_selected() {
    let orders = vec![
        order(1, 3, ShipmentStatus::Pending),
        order(2, 9, ShipmentStatus::Shipped),
        order(3, 5, ShipmentStatus::Pending),
    ];
    let mut view = ListView::default().with_default_sort(SortConfig::desc("order_date"));

    let ids: Vec<_> = view.apply(&orders).items.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![Some(2), Some(3), Some(1)]);

    view.sort_by("status");
    let ids: Vec<_> = view.apply(&orders).items.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![Some(1), Some(3), Some(2)]);

    view.clear_sort();
    assert_eq!(view.apply(&orders).items[0].id, Some(2));
}

#[test]
fn test_pagination() {
    let many: Vec<Vendor> = (1..=23)
        .map(|i| vendor(i, &format!("Vendor {:02}", i), "Pune"))
        .collect();
    let mut view = ListView::default();

    let page = view.apply(&many);
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.pagination.total_pages, 3);
    assert!(page.pagination.has_next);
    assert!(!page.pagination.has_prev);

    view.next_page();
    view.next_page();
    let page = view.apply(&many);
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.items[0].name, "Vendor 21");
    assert!(!page.pagination.has_next);

    view.go_to(99);
    let page = view.apply(&many);
    assert_eq!(page.pagination.page, 3);

    view.prev_page();
    assert_eq!(view.page(), 98);
}

#[test]
fn test_empty_list_has_one_empty_page() {
    let page = ListView::default().apply::<Vendor>(&[]);
    assert!(page.items.is_empty());
    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.total_pages, 0);
    assert!(!page.pagination.has_next);
}

#[test]
fn test_record_list_view() {
    let list = RecordList::new(vendors());
    let mut view = ListView::new(2);
    view.set_search("pune");

    let page = list.view(&view);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.pagination.total_pages, 2);
}
