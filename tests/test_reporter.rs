use centavo::models::ExpenseKind;
use centavo::reporter::ExpenseReporter;
use centavo::{AppContext, ExpenseList};

mod common;
use common::context_with_expenses;

const DELTA: f64 = 1e-9;

#[test]
fn totals_and_average() {
    let context = context_with_expenses();
    let reporter = ExpenseReporter::new(context.list(ExpenseKind::Regular));

    assert!((reporter.total() - 14.0).abs() < DELTA);
    assert!((reporter.average() - 3.5).abs() < DELTA);

    let totals = reporter.total_by_category();
    assert!((totals["FOOD"] - 7.5).abs() < DELTA);
    assert!((totals["TRANSPORT"] - 2.0).abs() < DELTA);
    assert!((totals["ENTERTAINMENT"] - 4.5).abs() < DELTA);
    assert!(totals.get("HEALTH").is_none());
}

#[test]
fn total_by_month_filters_on_year_and_month() {
    let mut context = context_with_expenses();
    common::run_ok(&mut context, "/add old hotel $99.00 /d 10-05-2024");
    let reporter = ExpenseReporter::new(context.list(ExpenseKind::Regular));

    assert!((reporter.total_by_month(2025, 6) - 14.0).abs() < DELTA);
    assert!((reporter.total_by_month(2024, 5) - 99.0).abs() < DELTA);
    assert!(reporter.total_by_month(2025, 5).abs() < DELTA);
}

#[test]
fn highest_category_and_listings() {
    let context = context_with_expenses();
    let reporter = ExpenseReporter::new(context.list(ExpenseKind::Regular));
    let totals = reporter.total_by_category();

    assert_eq!(ExpenseReporter::highest_category(&totals), "FOOD ($7.50)");

    let all = ExpenseReporter::list_all_category_totals(&totals);
    assert!(all.contains("FOOD: $7.50"));
    assert!(all.contains("TRANSPORT: $2.00"));
    assert!(all.ends_with("Grand Total: $14.00"));

    assert_eq!(
        ExpenseReporter::list_single_category_total(&totals, "food"),
        "FOOD: $7.50"
    );
    assert_eq!(
        ExpenseReporter::list_single_category_total(&totals, "HEALTH"),
        "Category not found"
    );
}

#[test]
fn highest_category_tie_resolves_lexicographically() {
    let mut context = AppContext::new();
    common::run_ok(&mut context, "/add taxi $5.00 /c TRANSPORT");
    common::run_ok(&mut context, "/add pizza $5.00 /c FOOD");
    let reporter = ExpenseReporter::new(context.list(ExpenseKind::Regular));
    let totals = reporter.total_by_category();

    assert_eq!(ExpenseReporter::highest_category(&totals), "FOOD ($5.00)");
}

#[test]
fn empty_list_returns_safe_defaults() {
    let list = ExpenseList::new();
    let reporter = ExpenseReporter::new(&list);

    assert_eq!(reporter.total(), 0.0);
    assert_eq!(reporter.average(), 0.0);
    assert_eq!(reporter.total_by_month(2025, 6), 0.0);
    // the zero must format as 0.00, not the float Sum identity -0.00
    assert_eq!(format!("{:.2}", reporter.total()), "0.00");
    assert_eq!(format!("{:.2}", reporter.total_by_month(2025, 6)), "0.00");
    assert!(reporter.total_by_category().is_empty());
    assert_eq!(
        ExpenseReporter::highest_category(&reporter.total_by_category()),
        "No expenses found"
    );
    assert_eq!(reporter.list_expenses(), "No expenses found");
    assert_eq!(
        ExpenseReporter::list_all_category_totals(&reporter.total_by_category()),
        "Grand Total: $0.00"
    );
}

#[test]
fn expenses_by_category_filters_case_insensitively() {
    let context = context_with_expenses();
    let reporter = ExpenseReporter::new(context.list(ExpenseKind::Regular));

    let food = reporter.expenses_by_category("food");
    assert_eq!(food.len(), 2);
    assert_eq!(food[0].description, "pizza");
    assert_eq!(food[1].description, "coffee");
    assert!(reporter.expenses_by_category("HEALTH").is_empty());
}

#[test]
#[should_panic(expected = "blank category")]
fn blank_category_is_a_caller_bug() {
    let list = ExpenseList::new();
    let reporter = ExpenseReporter::new(&list);
    reporter.expenses_by_category("   ");
}

#[test]
fn listing_is_numbered_in_insertion_order() {
    let context = context_with_expenses();
    let reporter = ExpenseReporter::new(context.list(ExpenseKind::Regular));
    let listing = reporter.list_expenses();

    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("1. pizza |"));
    assert!(lines[3].starts_with("4. movie |"));
    assert!(lines[0].contains("$5.50"));
    assert!(lines[0].contains("10-06-2025"));
}
