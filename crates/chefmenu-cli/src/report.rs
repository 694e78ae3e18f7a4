//! Plain-text and JSON output for the non-interactive commands

use std::fmt::Write;

use anyhow::Result;
use chefmenu_core::{filter_by_course, CourseFilter, MenuItem, MenuSummary};

pub fn summary_text(items: &[MenuItem], currency: &str) -> String {
    let summary = MenuSummary::from_items(items);
    let mut out = String::new();

    let _ = writeln!(out, "{:<10} {:>5} {:>12}", "Course", "Items", "Average");
    for avg in &summary.by_course {
        let _ = writeln!(
            out,
            "{:<10} {:>5} {:>12}",
            avg.course.label(),
            avg.count,
            format!("{} {}", currency, avg.average)
        );
    }
    let _ = writeln!(
        out,
        "{:<10} {:>5} {:>12}",
        "Overall",
        summary.total_items,
        format!("{} {}", currency, summary.overall_average)
    );

    out
}

pub fn summary_json(items: &[MenuItem]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&MenuSummary::from_items(items))?)
}

pub fn list_text(items: &[MenuItem], filter: CourseFilter, currency: &str) -> String {
    let filtered = filter_by_course(items, filter);
    if filtered.is_empty() {
        return format!("No dishes for {}\n", filter.label());
    }

    let mut out = String::new();
    for item in filtered.iter() {
        let add_on = if item.has_add_on() {
            format!(" + {}", item.add_on)
        } else {
            String::new()
        };
        let _ = writeln!(
            out,
            "{:>4}  {:<24} {:<9} {} {}{}",
            item.id, item.name, item.course.label(), currency, item.price, add_on
        );
    }
    out
}

pub fn list_json(items: &[MenuItem], filter: CourseFilter) -> Result<String> {
    let filtered = filter_by_course(items, filter);
    Ok(serde_json::to_string_pretty(&*filtered)?)
}
