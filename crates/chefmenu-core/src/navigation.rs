//! Browser-style screen history
//!
//! A non-empty stack of screens whose first frame is always `Home`. Screens
//! that show a dish carry their own copy of it, so a frame keeps rendering the
//! last-known dish even after the store drops it.

use std::fmt;

use tracing::{debug, warn};

use crate::item::MenuItem;

/// Screen names as used by string-routed navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Chef,
    GuestFilter,
    SelectedCourse,
    Payment,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Chef,
        Route::GuestFilter,
        Route::SelectedCourse,
        Route::Payment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Chef => "Chef",
            Route::GuestFilter => "GuestFilter",
            Route::SelectedCourse => "SelectedCourse",
            Route::Payment => "Payment",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|route| route.as_str().eq_ignore_ascii_case(name.trim()))
    }

    pub fn requires_item(&self) -> bool {
        matches!(self, Route::SelectedCourse | Route::Payment)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One frame of history.
///
/// Dish screens cannot be built without a dish. The two placeholder variants
/// only come out of `NavigationStack::navigate_route`, for string routes that
/// lack their dish or name no screen at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Home,
    Chef,
    GuestFilter,
    SelectedCourse { item: MenuItem },
    Payment { item: MenuItem },
    MissingItem { route: Route },
    Unknown { name: String },
}

impl Screen {
    /// Route this frame was built from; `None` for an unknown name
    pub fn route(&self) -> Option<Route> {
        match self {
            Screen::Home => Some(Route::Home),
            Screen::Chef => Some(Route::Chef),
            Screen::GuestFilter => Some(Route::GuestFilter),
            Screen::SelectedCourse { .. } => Some(Route::SelectedCourse),
            Screen::Payment { .. } => Some(Route::Payment),
            Screen::MissingItem { route } => Some(*route),
            Screen::Unknown { .. } => None,
        }
    }

    pub fn item(&self) -> Option<&MenuItem> {
        match self {
            Screen::SelectedCourse { item } | Screen::Payment { item } => Some(item),
            _ => None,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Screen::Home => "Menu".to_string(),
            Screen::Chef => "Chef".to_string(),
            Screen::GuestFilter => "Browse by Course".to_string(),
            Screen::SelectedCourse { item } => item.name.clone(),
            Screen::Payment { item } => format!("Pay for {}", item.name),
            Screen::MissingItem { route } => format!("{} (no dish)", route),
            Screen::Unknown { name } => format!("Unknown screen '{}'", name),
        }
    }

    /// Build a frame from a string route, degrading to a placeholder instead of failing
    pub fn from_route(name: &str, item: Option<MenuItem>) -> Screen {
        let Some(route) = Route::parse(name) else {
            return Screen::Unknown {
                name: name.to_string(),
            };
        };

        match (route, item) {
            (Route::Home, _) => Screen::Home,
            (Route::Chef, _) => Screen::Chef,
            (Route::GuestFilter, _) => Screen::GuestFilter,
            (Route::SelectedCourse, Some(item)) => Screen::SelectedCourse { item },
            (Route::Payment, Some(item)) => Screen::Payment { item },
            (route, None) => Screen::MissingItem { route },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack {
    frames: Vec<Screen>,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self {
            frames: vec![Screen::Home],
        }
    }

    /// Always pushes, even when `screen` equals the current frame.
    pub fn navigate(&mut self, screen: Screen) {
        debug!(to = %screen.title(), depth = self.frames.len() + 1, "navigate");
        self.frames.push(screen);
    }

    pub fn navigate_route(&mut self, name: &str, item: Option<MenuItem>) {
        let screen = Screen::from_route(name, item);
        if matches!(screen, Screen::MissingItem { .. } | Screen::Unknown { .. }) {
            warn!(route = name, "Navigated to placeholder screen");
        }
        self.navigate(screen);
    }

    /// Pops one frame; the root is never removed. Returns whether a frame was popped.
    pub fn go_back(&mut self) -> bool {
        if self.frames.len() <= 1 {
            return false;
        }
        self.frames.pop();
        debug!(depth = self.frames.len(), "go_back");
        true
    }

    pub fn pop_to_top(&mut self) {
        self.frames.truncate(1);
        debug!("pop_to_top");
    }

    pub fn current(&self) -> &Screen {
        // frames is never empty: new() seeds the root and go_back/pop_to_top keep it
        &self.frames[self.frames.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[Screen] {
        &self.frames
    }

    pub fn is_at_root(&self) -> bool {
        self.frames.len() == 1
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steak() -> MenuItem {
        MenuItem::seed().remove(1)
    }

    #[test]
    fn test_new_stack_is_root() {
        let nav = NavigationStack::new();
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current(), &Screen::Home);
        assert!(nav.is_at_root());
    }

    #[test]
    fn test_navigate_pushes_repeats() {
        let mut nav = NavigationStack::new();
        nav.navigate(Screen::Chef);
        nav.navigate(Screen::Chef);
        assert_eq!(nav.depth(), 3);
        assert_eq!(nav.frames()[0], Screen::Home);
    }

    #[test]
    fn test_go_back_stops_at_root() {
        let mut nav = NavigationStack::new();
        nav.navigate(Screen::GuestFilter);
        assert!(nav.go_back());
        assert!(!nav.go_back());
        assert!(!nav.go_back());
        assert_eq!(nav, NavigationStack::new());
    }

    #[test]
    fn test_pop_to_top_idempotent() {
        let mut nav = NavigationStack::new();
        nav.navigate(Screen::GuestFilter);
        nav.navigate(Screen::SelectedCourse { item: steak() });
        nav.navigate(Screen::Payment { item: steak() });

        nav.pop_to_top();
        let once = nav.clone();
        nav.pop_to_top();
        assert_eq!(nav, once);
        assert_eq!(nav.current(), &Screen::Home);
    }

    #[test]
    fn test_frame_keeps_item_snapshot() {
        let mut nav = NavigationStack::new();
        nav.navigate(Screen::SelectedCourse { item: steak() });
        assert_eq!(nav.current().item().map(|i| i.name.as_str()), Some("Grilled Steak"));
        assert_eq!(nav.current().route(), Some(Route::SelectedCourse));
    }

    #[test]
    fn test_route_without_item_is_placeholder() {
        let mut nav = NavigationStack::new();
        nav.navigate_route("SelectedCourse", None);
        assert_eq!(
            nav.current(),
            &Screen::MissingItem {
                route: Route::SelectedCourse
            }
        );
        assert!(nav.go_back());
        assert_eq!(nav.current(), &Screen::Home);
    }

    #[test]
    fn test_unknown_route_is_placeholder() {
        let mut nav = NavigationStack::new();
        nav.navigate_route("Kitchen", None);
        assert_eq!(
            nav.current(),
            &Screen::Unknown {
                name: "Kitchen".to_string()
            }
        );
        assert_eq!(nav.current().route(), None);
        nav.pop_to_top();
        assert!(nav.is_at_root());
    }

    #[test]
    fn test_from_route_resolves_names() {
        assert_eq!(Screen::from_route("chef", None), Screen::Chef);
        assert_eq!(Screen::from_route("Home", Some(steak())), Screen::Home);
        assert_eq!(
            Screen::from_route("Payment", Some(steak())),
            Screen::Payment { item: steak() }
        );
        assert!(Route::Payment.requires_item());
        assert!(!Route::GuestFilter.requires_item());
    }
}
