//! Item list display formatting

use crate::models::{BudgetEntry, IncomeItem, SavingsGoalItem};

use super::format::{format_currency, truncate};

const MAX_NAME_WIDTH: usize = 30;

/// Format a collection of items as a table with a total row
///
/// `detail` supplies an optional extra column (frequency, target...).
pub fn format_item_list<T, F>(items: &[T], symbol: &str, detail: F) -> String
where
    T: BudgetEntry,
    F: Fn(&T) -> String,
{
    if items.is_empty() {
        return format!("No {} items yet.", T::KIND.to_lowercase());
    }

    let name_width = items
        .iter()
        .map(|i| truncate(i.name(), MAX_NAME_WIDTH).chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let category_width = items
        .iter()
        .map(|i| i.category_label().len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8}  {:<name_width$}  {:<category_width$}  {:>10}\n",
        "ID",
        "Name",
        "Category",
        "Amount",
        name_width = name_width,
        category_width = category_width,
    ));
    output.push_str(&format!(
        "{:-<8}  {:-<name_width$}  {:-<category_width$}  {:->10}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        category_width = category_width,
    ));

    for item in items {
        let extra = detail(item);
        let line = format!(
            "{:<8}  {:<name_width$}  {:<category_width$}  {:>10}",
            item.id().short(),
            truncate(item.name(), MAX_NAME_WIDTH),
            item.category_label(),
            format_currency(item.amount(), symbol),
            name_width = name_width,
            category_width = category_width,
        );
        if extra.is_empty() {
            output.push_str(&line);
        } else {
            output.push_str(&format!("{}  {}", line, extra));
        }
        output.push('\n');
    }

    let total: f64 = items.iter().map(BudgetEntry::amount).sum();
    output.push_str(&format!(
        "{:<8}  {:<name_width$}  {:<category_width$}  {:>10}",
        "",
        "Total",
        "",
        format_currency(total, symbol),
        name_width = name_width,
        category_width = category_width,
    ));

    output
}

/// Extra column for income: how often it is paid
pub fn income_detail(item: &IncomeItem) -> String {
    item.frequency.to_string()
}

/// Extra column for savings goals: target amount/date and time to reach it
pub fn savings_detail(item: &SavingsGoalItem, symbol: &str) -> String {
    let mut parts = Vec::new();
    if let Some(target) = item.target_amount {
        parts.push(format!("target {}", format_currency(target, symbol)));
    }
    if let Some(date) = item.target_date {
        parts.push(format!("by {}", date.format("%Y-%m-%d")));
    }
    if let Some(months) = item.months_to_target() {
        parts.push(format!("~{} months", months));
    }
    parts.join(", ")
}
