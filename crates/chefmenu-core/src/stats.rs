//! Pure menu statistics and filtering
//!
//! Every function here is order-preserving, side-effect free, and accepts an
//! empty collection.

use std::borrow::Cow;

use serde::Serialize;

use crate::course::{Course, CourseFilter};
use crate::item::MenuItem;
use crate::price::Price;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CourseAverage {
    pub course: Course,
    pub count: usize,
    pub average: Price,
}

/// One entry per course, in `Course::ALL` order regardless of input order.
pub fn averages_by_course(items: &[MenuItem]) -> [CourseAverage; 4] {
    Course::ALL.map(|course| {
        let prices: Vec<Price> = items
            .iter()
            .filter(|item| item.course == course)
            .map(|item| item.price)
            .collect();
        CourseAverage {
            course,
            count: prices.len(),
            average: Price::mean(prices),
        }
    })
}

/// Mean of every price, 0.00 when there are none
pub fn overall_average(items: &[MenuItem]) -> Price {
    Price::mean(items.iter().map(|item| item.price))
}

/// `All` hands back the input slice itself; a course filter copies the matches.
pub fn filter_by_course(items: &[MenuItem], filter: CourseFilter) -> Cow<'_, [MenuItem]> {
    match filter {
        CourseFilter::All => Cow::Borrowed(items),
        CourseFilter::Only(_) => Cow::Owned(
            items
                .iter()
                .filter(|item| filter.matches(item.course))
                .cloned()
                .collect(),
        ),
    }
}

/// Everything the summary view shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuSummary {
    pub total_items: usize,
    pub overall_average: Price,
    pub by_course: [CourseAverage; 4],
}

impl MenuSummary {
    pub fn from_items(items: &[MenuItem]) -> Self {
        Self {
            total_items: items.len(),
            overall_average: overall_average(items),
            by_course: averages_by_course(items),
        }
    }
}
