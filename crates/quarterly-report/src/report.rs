//! Quarterly aggregation of sales records
//!
//! One pass over the records builds per-quarter totals, per-department
//! rollups and the highest-profit orders for each quarter.

use std::collections::BTreeMap;

use crate::catalog::Department;
use crate::models::{percentage_of, Quarter, SalesRecord};

/// Aggregated income report, quarters in calendar order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncomeReport {
    pub quarters: BTreeMap<Quarter, QuarterSummary>,
    /// Number of top orders each quarter was trimmed to
    pub top_orders: usize,
}

/// Totals for one quarter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuarterSummary {
    pub sales: f64,
    pub profit: f64,
    pub order_count: usize,
    /// Departments in name order; only those with at least one order
    pub departments: BTreeMap<Department, DepartmentSummary>,
    /// Highest-profit orders, best first
    pub top_orders: Vec<SalesRecord>,
}

/// Totals for one department within a quarter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepartmentSummary {
    pub sales: f64,
    pub profit: f64,
    /// Profit percentage of the last order seen for this department, not
    /// `profit / sales` of the totals above
    pub last_profit_percentage: Option<f64>,
}

/// Sales and profit across the whole report
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnnualTotals {
    pub sales: f64,
    pub profit: f64,
}

impl AnnualTotals {
    pub fn profit_percentage(&self) -> Option<f64> {
        percentage_of(self.profit, self.sales)
    }
}

impl QuarterSummary {
    /// Recomputed quarter margin; None if the quarter had no sales value
    pub fn profit_percentage(&self) -> Option<f64> {
        percentage_of(self.profit, self.sales)
    }
}

impl IncomeReport {
    pub fn annual_totals(&self) -> AnnualTotals {
        self.quarters
            .values()
            .fold(AnnualTotals::default(), |mut acc, q| {
                acc.sales += q.sales;
                acc.profit += q.profit;
                acc
            })
    }

    pub fn is_empty(&self) -> bool {
        self.quarters.is_empty()
    }
}

/// Aggregate records into a quarterly report keeping `top_orders` orders
/// per quarter
pub fn build_report(records: &[SalesRecord], top_orders: usize) -> IncomeReport {
    let mut quarters: BTreeMap<Quarter, QuarterSummary> = BTreeMap::new();
    let mut orders: BTreeMap<Quarter, Vec<&SalesRecord>> = BTreeMap::new();

    for record in records {
        let quarter = record.quarter();
        let total_sales = record.total_sales();
        let profit = record.profit();

        let summary = quarters.entry(quarter).or_default();
        summary.sales += total_sales;
        summary.profit += profit;
        summary.order_count += 1;

        let dept = summary.departments.entry(record.department).or_default();
        dept.sales += total_sales;
        dept.profit += profit;
        dept.last_profit_percentage = record.profit_percentage();

        orders.entry(quarter).or_default().push(record);
    }

    for (quarter, mut ranked) in orders {
        // sort_by is stable: equal profits keep input order
        ranked.sort_by(|a, b| b.profit().total_cmp(&a.profit()));
        if let Some(summary) = quarters.get_mut(&quarter) {
            summary.top_orders = ranked.into_iter().take(top_orders).cloned().collect();
        }
    }

    for (quarter, summary) in &quarters {
        tracing::debug!(
            %quarter,
            orders = summary.order_count,
            departments = summary.departments.len(),
            sales = summary.sales,
            profit = summary.profit,
            "Aggregated quarter"
        );
    }

    IncomeReport {
        quarters,
        top_orders,
    }
}
