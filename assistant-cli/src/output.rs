//! Console rendering. Everything here goes to stdout; diagnostics go through
//! `tracing` to stderr.

use assistant_core::{CityOutcome, TravelOutcome};

const WIDTH: usize = 50;

fn rule(c: char) -> String {
    c.to_string().repeat(WIDTH)
}

pub fn banner() {
    println!("{}", rule('='));
    println!("Personal Weather Assistant v{}", env!("CARGO_PKG_VERSION"));
    println!("{}", rule('='));
}

pub fn adjusted_year_note() {
    println!("(Note: Date automatically adjusted to next year.)");
}

fn block(title: &str, lines: &[String]) {
    println!();
    println!("{}", rule('='));
    println!("{title}");
    println!("{}", rule('-'));
    for line in lines {
        println!("{line}");
    }
    println!("{}", rule('='));
}

fn section(title: &str, body: &str) {
    println!();
    println!(">>> {title} <<<");
    println!("{}", rule('-'));
    println!("{body}");
    println!("{}", rule('-'));
}

pub fn city(outcome: &CityOutcome) {
    block(&outcome.report.title(), &outcome.report.summary_lines());

    if let Some(activities) = &outcome.activities {
        section("Activity Recommendations", activities);
    }
    println!();
}

pub fn travel(outcome: &TravelOutcome) {
    let plan = &outcome.plan;
    block(&plan.title(), &plan.comparison_lines());

    if let Some(recommendation) = &outcome.recommendation {
        section("Travel Recommendation", recommendation);
    }

    let outlook = if plan.outlook.is_empty() {
        "No forecast data available for the destination.".to_string()
    } else {
        plan.outlook_lines().join("\n")
    };
    section("3-Day Forecast for Destination", &outlook);

    if let Some(packing_list) = &outcome.packing_list {
        section("Suggested Packing List", packing_list);
    }
    println!();
}
