//! Console rendering of an income report
//!
//! Renderers are pure: they turn an `IncomeReport` into text and never
//! touch stdout themselves, so the same report always renders the same way.

use clap::ValueEnum;
use serde::Deserialize;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::constants;
use crate::models::{Quarter, SalesRecord};
use crate::report::{DepartmentSummary, IncomeReport, QuarterSummary};

/// Turns an aggregated report into printable text
pub trait ReportRenderer {
    fn render(&self, report: &IncomeReport) -> String;
}

/// Output layout selectable from the CLI or config.toml
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStyle {
    /// Box-drawn tables
    #[default]
    Box,
    /// Pipe-separated fixed-width columns
    Plain,
}

impl ReportStyle {
    pub fn renderer(self) -> Box<dyn ReportRenderer> {
        match self {
            ReportStyle::Box => Box::new(BoxTableRenderer),
            ReportStyle::Plain => Box::new(PlainTextRenderer),
        }
    }
}

// =============================================================================
// Box-drawn tables
// =============================================================================

#[derive(Tabled)]
struct DepartmentRow {
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Sales")]
    sales: String,
    #[tabled(rename = "Profit")]
    profit: String,
    #[tabled(rename = "Profit Percentage")]
    profit_percentage: String,
}

#[derive(Tabled)]
struct OrderRow {
    #[tabled(rename = "Product ID")]
    product_id: String,
    #[tabled(rename = "Quantity Sold")]
    quantity_sold: String,
    #[tabled(rename = "Unit Price")]
    unit_price: String,
    #[tabled(rename = "Total Sales")]
    total_sales: String,
    #[tabled(rename = "Profit")]
    profit: String,
    #[tabled(rename = "Profit Percentage")]
    profit_percentage: String,
}

/// Default renderer: summary lines plus box-drawn department and order tables
pub struct BoxTableRenderer;

impl BoxTableRenderer {
    fn table<T: Tabled>(rows: Vec<T>) -> String {
        let mut table = Table::new(rows);
        table
            .with(Style::modern())
            .modify(Columns::new(1..), Alignment::right());
        table.to_string()
    }
}

impl ReportRenderer for BoxTableRenderer {
    fn render(&self, report: &IncomeReport) -> String {
        let mut lines = title_lines();

        for (quarter, summary) in &report.quarters {
            lines.push(summary_line(
                &quarter.to_string(),
                summary.sales,
                summary.profit,
                summary.profit_percentage(),
            ));

            lines.push("By Department:".to_string());
            let rows = summary
                .departments
                .iter()
                .map(|(dept, d)| DepartmentRow {
                    department: dept.to_string(),
                    sales: format_currency(d.sales),
                    profit: format_currency(d.profit),
                    profit_percentage: format_percentage(d.last_profit_percentage),
                })
                .collect();
            lines.push(Self::table::<DepartmentRow>(rows));
            lines.push(String::new());

            lines.push(top_orders_heading(report));
            let rows = summary
                .top_orders
                .iter()
                .map(|order| OrderRow {
                    product_id: order.product_id.clone(),
                    quantity_sold: order.quantity_sold.to_string(),
                    unit_price: format!("{:.2}", order.unit_price),
                    total_sales: format!("{:.2}", order.total_sales()),
                    profit: format!("{:.2}", order.profit()),
                    profit_percentage: format_percentage(order.profit_percentage()),
                })
                .collect();
            lines.push(Self::table::<OrderRow>(rows));
            lines.push(String::new());
        }

        lines.extend(closing_lines(report));
        finish(lines)
    }
}

// =============================================================================
// Plain fixed-width columns
// =============================================================================

/// Pipe-separated columns with no box drawing
pub struct PlainTextRenderer;

impl PlainTextRenderer {
    fn department_line(name: &str, d: &DepartmentSummary) -> String {
        format!(
            "{:<22} | {:<15} | {:<15} | {}",
            name,
            format_currency(d.sales),
            format_currency(d.profit),
            format_percentage(d.last_profit_percentage)
        )
    }

    fn order_line(order: &SalesRecord) -> String {
        format!(
            "{:<22} | {:<14} | {:<12.2} | {:<14.2} | {:<15.2} | {}",
            order.product_id,
            order.quantity_sold,
            order.unit_price,
            order.total_sales(),
            order.profit(),
            format_percentage(order.profit_percentage())
        )
    }

    fn quarter_block(
        report: &IncomeReport,
        quarter: Quarter,
        summary: &QuarterSummary,
    ) -> Vec<String> {
        let mut lines = vec![
            summary_line(
                &quarter.to_string(),
                summary.sales,
                summary.profit,
                summary.profit_percentage(),
            ),
            "By Department:".to_string(),
            format!(
                "{:<22} | {:<15} | {:<15} | {}",
                "Department", "Sales", "Profit", "Profit Percentage"
            ),
        ];
        lines.extend(
            summary
                .departments
                .iter()
                .map(|(dept, d)| Self::department_line(dept.name(), d)),
        );
        lines.push(String::new());

        lines.push(top_orders_heading(report));
        lines.push(format!(
            "{:<22} | {:<14} | {:<12} | {:<14} | {:<15} | {}",
            "Product ID", "Quantity Sold", "Unit Price", "Total Sales", "Profit", "Profit %"
        ));
        lines.extend(summary.top_orders.iter().map(Self::order_line));
        lines.push(String::new());
        lines
    }
}

impl ReportRenderer for PlainTextRenderer {
    fn render(&self, report: &IncomeReport) -> String {
        let mut lines = title_lines();
        for (quarter, summary) in &report.quarters {
            lines.extend(Self::quarter_block(report, *quarter, summary));
        }
        lines.extend(closing_lines(report));
        finish(lines)
    }
}

// =============================================================================
// Shared pieces
// =============================================================================

fn title_lines() -> Vec<String> {
    vec![
        constants::REPORT_TITLE.to_string(),
        "-".repeat(constants::REPORT_TITLE.len()),
    ]
}

fn summary_line(label: &str, sales: f64, profit: f64, percentage: Option<f64>) -> String {
    format!(
        "{}: Sales: {}, Profit: {}, Profit Percentage: {}",
        label,
        format_currency(sales),
        format_currency(profit),
        format_percentage(percentage)
    )
}

fn top_orders_heading(report: &IncomeReport) -> String {
    format!("Top {} Sales Orders:", report.top_orders)
}

fn closing_lines(report: &IncomeReport) -> Vec<String> {
    if report.is_empty() {
        return vec!["No sales recorded.".to_string()];
    }
    let totals = report.annual_totals();
    vec![summary_line(
        "Annual Total",
        totals.sales,
        totals.profit,
        totals.profit_percentage(),
    )]
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Normalize -0.0 to 0.0 for cleaner display
fn normalize_zero(val: f64) -> f64 {
    if val == 0.0 { 0.0 } else { val }
}

/// Format a dollar amount with thousands separators, e.g. `-$1,234.50`
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();

    let mut dollars = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            dollars.push(',');
        }
        dollars.push(c);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, dollars, cents % 100)
}

/// Format a percentage with two decimals, or `N/A` when there is none
pub fn format_percentage(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", normalize_zero(v)),
        None => constants::NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Department;
    use crate::models::record;
    use crate::report::build_report;

    fn sample_report() -> IncomeReport {
        let records = vec![
            record(2, Department::Outerwear, 10, 100.0, 80.0),
            record(3, Department::Accessories, 1, 2000.0, 1500.0),
            record(8, Department::Footwear, 4, 50.0, 45.0),
        ];
        build_report(&records, 3)
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1000.0), "$1,000.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(-42.5), "-$42.50");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(Some(20.0)), "20.00%");
        assert_eq!(format_percentage(Some(-0.0)), "0.00%");
        assert_eq!(format_percentage(Some(12.345)), "12.35%");
        assert_eq!(format_percentage(None), "N/A");
    }

    #[test]
    fn test_box_report_contents() {
        let out = BoxTableRenderer.render(&sample_report());
        assert!(out.starts_with("Quarterly Sales Report\n----------------------\n"));
        assert!(out.contains("Q1: Sales: $3,000.00, Profit: $700.00, Profit Percentage: 23.33%"));
        assert!(out.contains("Q3: Sales: $200.00, Profit: $20.00, Profit Percentage: 10.00%"));
        assert!(!out.contains("Q2:"));
        assert!(out.contains("Top 3 Sales Orders:"));
        assert!(out.contains("OUTR-601-M-BK-US1"));
        assert!(out.contains("1000.00"));
        assert!(out.contains('┌') && out.contains('┘'));
        assert!(out.contains(
            "Annual Total: Sales: $3,200.00, Profit: $720.00, Profit Percentage: 22.50%"
        ));
    }

    #[test]
    fn test_box_department_rows_in_name_order() {
        let out = BoxTableRenderer.render(&sample_report());
        let accessories = out.find("Accessories").unwrap();
        let outerwear = out.find("Outerwear").unwrap();
        assert!(accessories < outerwear);
    }

    #[test]
    fn test_plain_report_contents() {
        let out = PlainTextRenderer.render(&sample_report());
        assert!(out.contains("Q1: Sales: $3,000.00, Profit: $700.00, Profit Percentage: 23.33%"));
        assert!(out.contains("Department             | Sales"));
        assert!(out.contains("Outerwear              | $1,000.00       | $200.00         | 20.00%"));
        assert!(!out.contains('┌'));
    }

    #[test]
    fn test_plain_lines_have_no_trailing_spaces() {
        let out = PlainTextRenderer.render(&sample_report());
        for line in out.lines() {
            assert_eq!(line, line.trim_end(), "{:?}", line);
        }
        assert!(out.contains("Outerwear              | $1,000.00       | $200.00         | 20.00%\n"));
    }

    #[test]
    fn test_zero_sales_renders_not_available() {
        let report = build_report(&[record(11, Department::Footwear, 2, 0.0, 0.0)], 3);
        for style in [ReportStyle::Box, ReportStyle::Plain] {
            let out = style.renderer().render(&report);
            assert!(out.contains("Q4: Sales: $0.00, Profit: $0.00, Profit Percentage: N/A"));
        }
    }

    #[test]
    fn test_empty_report() {
        let out = BoxTableRenderer.render(&build_report(&[], 3));
        assert!(out.ends_with("No sales recorded.\n"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let report = sample_report();
        for style in [ReportStyle::Box, ReportStyle::Plain] {
            let renderer = style.renderer();
            assert_eq!(renderer.render(&report), renderer.render(&report));
        }
    }
}
