//! Centralized constants for the quarterly income report
//!
//! Defaults here are what a bare `quarterly-report` invocation uses.
//! Every one of them can be overridden from config.toml or the command line.

// =============================================================================
// Generator Defaults
// =============================================================================

/// Number of sales records synthesized per run
pub const DEFAULT_RECORD_COUNT: usize = 1000;

/// Calendar year all generated sales fall in
pub const DEFAULT_SALES_YEAR: i32 = 2023;

/// Highest day-of-month drawn, so every month yields a valid date
pub const MAX_SALE_DAY: u32 = 28;

/// Quantity sold per order (inclusive range)
pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 100;

/// Whole-dollar part of the unit price (inclusive range); a fractional
/// part in [0, 1) is added on top
pub const MIN_UNIT_PRICE_DOLLARS: u32 = 25;
pub const MAX_UNIT_PRICE_DOLLARS: u32 = 299;

/// Discount off the unit price that yields the base cost, in percent
/// (inclusive range)
pub const MIN_COST_DISCOUNT_PERCENT: u32 = 5;
pub const MAX_COST_DISCOUNT_PERCENT: u32 = 20;

/// Volume discount earned per unit sold
pub const VOLUME_DISCOUNT_RATE: f64 = 0.1;

/// Two-digit product number appended to the department code (inclusive range)
pub const MIN_PRODUCT_NUMBER: u32 = 1;
pub const MAX_PRODUCT_NUMBER: u32 = 99;

// =============================================================================
// Report Defaults
// =============================================================================

/// Highest-profit orders listed per quarter
pub const DEFAULT_TOP_ORDERS: usize = 3;

/// Report title
pub const REPORT_TITLE: &str = "Quarterly Sales Report";

/// Shown in place of a percentage whose base (total sales) is zero
pub const NOT_AVAILABLE: &str = "N/A";
