//! Course categories, the guest filter, and add-on choices

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed category a dish belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    Starter,
    Main,
    Dessert,
    Beverage,
}

impl Course {
    /// Canonical display and summary order.
    pub const ALL: [Course; 4] = [Course::Starter, Course::Main, Course::Dessert, Course::Beverage];

    pub fn label(&self) -> &'static str {
        match self {
            Course::Starter => "Starter",
            Course::Main => "Main",
            Course::Dessert => "Dessert",
            Course::Beverage => "Beverage",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "starter" => Some(Course::Starter),
            "main" => Some(Course::Main),
            "dessert" => Some(Course::Dessert),
            "beverage" => Some(Course::Beverage),
            _ => None,
        }
    }

    /// Picker options, in `ALL` order
    pub fn options() -> Vec<&'static str> {
        Self::ALL.iter().map(Course::label).collect()
    }
}

impl Default for Course {
    fn default() -> Self {
        Course::Starter
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Guest-side course filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseFilter {
    #[default]
    All,
    Only(Course),
}

impl CourseFilter {
    pub const ALL_LABEL: &'static str = "All";

    pub fn label(&self) -> &'static str {
        match self {
            CourseFilter::All => Self::ALL_LABEL,
            CourseFilter::Only(course) => course.label(),
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case(Self::ALL_LABEL) {
            return Some(CourseFilter::All);
        }
        Course::from_label(s).map(CourseFilter::Only)
    }

    pub fn options() -> Vec<&'static str> {
        let mut options = vec![Self::ALL_LABEL];
        options.extend(Course::options());
        options
    }

    pub fn matches(&self, course: Course) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Only(wanted) => *wanted == course,
        }
    }
}

/// Sentinel picker choice meaning "no add-on"
pub const NO_ADD_ON: &str = "None";

pub const ADD_ON_OPTIONS: &[&str] = &[NO_ADD_ON, "Fries", "Salad", "Rice", "Garlic Bread"];

/// "None" becomes the empty string; anything else is kept, trimmed.
pub fn normalize_add_on(choice: &str) -> String {
    let choice = choice.trim();
    if choice == NO_ADD_ON {
        String::new()
    } else {
        choice.to_string()
    }
}
