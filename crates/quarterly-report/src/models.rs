//! Sales records and the derived quarter key

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::catalog::Department;

/// A single sales order line
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub date_sold: NaiveDate,
    pub department: Department,
    pub product_id: String,
    pub quantity_sold: u32,
    pub unit_price: f64,
    pub base_cost: f64,
    /// Carried with the record but not used by any report
    #[allow(dead_code)]
    pub volume_discount: u32,
}

impl SalesRecord {
    pub fn total_sales(&self) -> f64 {
        f64::from(self.quantity_sold) * self.unit_price
    }

    pub fn total_cost(&self) -> f64 {
        f64::from(self.quantity_sold) * self.base_cost
    }

    pub fn profit(&self) -> f64 {
        self.total_sales() - self.total_cost()
    }

    /// Profit as a percentage of sales; None for a zero-sales order
    pub fn profit_percentage(&self) -> Option<f64> {
        percentage_of(self.profit(), self.total_sales())
    }

    pub fn quarter(&self) -> Quarter {
        Quarter::from_month(self.date_sold.month())
    }
}

/// Calendar quarter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    /// Map a month number to its quarter. Anything past September is Q4.
    pub fn from_month(month: u32) -> Self {
        match month {
            1..=3 => Quarter::Q1,
            4..=6 => Quarter::Q2,
            7..=9 => Quarter::Q3,
            _ => Quarter::Q4,
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quarter::Q1 => write!(f, "Q1"),
            Quarter::Q2 => write!(f, "Q2"),
            Quarter::Q3 => write!(f, "Q3"),
            Quarter::Q4 => write!(f, "Q4"),
        }
    }
}

/// `part / whole * 100`, or None when `whole` is zero
pub fn percentage_of(part: f64, whole: f64) -> Option<f64> {
    if whole == 0.0 {
        None
    } else {
        Some(part / whole * 100.0)
    }
}

#[cfg(test)]
pub(crate) fn record(
    month: u32,
    department: Department,
    quantity: u32,
    unit_price: f64,
    base_cost: f64,
) -> SalesRecord {
    SalesRecord {
        date_sold: NaiveDate::from_ymd_opt(2023, month, 15).unwrap(),
        department,
        product_id: format!("{}-{}01-M-BK-US1", department.abbreviation(), department.code()),
        quantity_sold: quantity,
        unit_price,
        base_cost,
        volume_discount: quantity / 10,
    }
}
