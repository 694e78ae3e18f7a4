//! Property-based tests for the store, the navigation stack, and the statistics
//!
//! These tests use proptest to check invariants across many random inputs.

use proptest::prelude::*;

use crate::course::{Course, CourseFilter};
use crate::item::MenuItem;
use crate::navigation::{NavigationStack, Route, Screen};
use crate::price::Price;
use crate::stats::{averages_by_course, filter_by_course, overall_average};
use crate::store::MenuStore;

// ===== STRATEGY HELPERS =====

fn any_course() -> impl Strategy<Value = Course> {
    prop_oneof![
        Just(Course::Starter),
        Just(Course::Main),
        Just(Course::Dessert),
        Just(Course::Beverage),
    ]
}

fn any_item() -> impl Strategy<Value = MenuItem> {
    (1u64..1_000_000, "[A-Za-z][A-Za-z ]{0,20}", any_course(), 0u64..1_000_000).prop_map(
        |(id, name, course, cents)| {
            MenuItem::new(id.to_string(), &name, course, "None", Price::from_cents(cents))
                .expect("generated dish is valid")
        },
    )
}

fn any_items() -> impl Strategy<Value = Vec<MenuItem>> {
    prop::collection::vec(any_item(), 0..20)
}

#[derive(Debug, Clone)]
enum NavOp {
    Navigate(Route),
    Back,
    Top,
}

fn any_nav_op() -> impl Strategy<Value = NavOp> {
    prop_oneof![
        prop::sample::select(Route::ALL.to_vec()).prop_map(NavOp::Navigate),
        Just(NavOp::Back),
        Just(NavOp::Top),
    ]
}

fn apply(nav: &mut NavigationStack, op: &NavOp) {
    match op {
        NavOp::Navigate(route) => {
            let item = route.requires_item().then(|| MenuItem::seed().remove(0));
            nav.navigate_route(route.as_str(), item);
        }
        NavOp::Back => {
            nav.go_back();
        }
        NavOp::Top => nav.pop_to_top(),
    }
}

// ===== NAVIGATION =====

proptest! {
    /// Property: root frame survives every operation sequence
    #[test]
    fn test_root_always_home(ops in prop::collection::vec(any_nav_op(), 0..50)) {
        let mut nav = NavigationStack::new();
        for op in &ops {
            apply(&mut nav, op);
            prop_assert!(nav.depth() >= 1);
            prop_assert_eq!(&nav.frames()[0], &Screen::Home);
        }
    }

    /// Property: go_back on a root-only stack is a no-op
    #[test]
    fn test_go_back_at_root_is_noop(ops in prop::collection::vec(any_nav_op(), 0..20)) {
        let mut nav = NavigationStack::new();
        for op in &ops {
            apply(&mut nav, op);
        }
        nav.pop_to_top();
        let once = { let mut n = nav.clone(); n.go_back(); n };
        let twice = { let mut n = once.clone(); n.go_back(); n };
        prop_assert_eq!(once, twice);
    }

    /// Property: pop_to_top is idempotent
    #[test]
    fn test_pop_to_top_idempotent(ops in prop::collection::vec(any_nav_op(), 0..30)) {
        let mut nav = NavigationStack::new();
        for op in &ops {
            apply(&mut nav, op);
        }
        nav.pop_to_top();
        let once = nav.clone();
        nav.pop_to_top();
        prop_assert_eq!(nav, once);
    }
}

// ===== STATISTICS =====

proptest! {
    /// Property: four entries whose counts sum to the input length
    #[test]
    fn test_course_counts_sum_to_len(items in any_items()) {
        let by_course = averages_by_course(&items);
        prop_assert_eq!(by_course.len(), 4);
        let total: usize = by_course.iter().map(|a| a.count).sum();
        prop_assert_eq!(total, items.len());
    }

    /// Property: the overall average lies between the cheapest and dearest dish
    #[test]
    fn test_overall_average_bounded(items in any_items()) {
        let average = overall_average(&items);
        match (items.iter().map(|i| i.price).min(), items.iter().map(|i| i.price).max()) {
            (Some(min), Some(max)) => prop_assert!(min <= average && average <= max),
            _ => prop_assert_eq!(average, Price::ZERO),
        }
    }

    /// Property: a course filter keeps exactly that course's dishes, in order
    #[test]
    fn test_filter_keeps_matching_in_order(items in any_items(), course in any_course()) {
        let filtered = filter_by_course(&items, CourseFilter::Only(course));
        let expected: Vec<MenuItem> = items.iter().filter(|i| i.course == course).cloned().collect();
        prop_assert_eq!(filtered.into_owned(), expected);

        let all = filter_by_course(&items, CourseFilter::All);
        prop_assert_eq!(&*all, items.as_slice());
    }
}

// ===== STORE =====

proptest! {
    /// Property: add then remove of a fresh id restores the prior content
    #[test]
    fn test_add_remove_round_trip(item in any_item()) {
        let mut store = MenuStore::seeded();
        prop_assume!(store.get(&item.id).is_none());
        let before = store.clone();

        store.add_item(item.clone()).unwrap();
        prop_assert_eq!(&store.list()[0], &item);
        store.remove_item(&item.id);
        prop_assert_eq!(store, before);
    }
}
