//! Synthetic sales data
//!
//! Records are drawn from a caller-supplied random source, so a seeded
//! generator always produces the same data set.

use chrono::NaiveDate;
use rand::Rng;
use thiserror::Error;

use crate::catalog::{pick, Color, Department, ManufacturingSite, Size};
use crate::constants;
use crate::models::SalesRecord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("cannot build sale date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// Generates random sales records for one calendar year
#[derive(Debug, Clone, Copy)]
pub struct SalesGenerator {
    year: i32,
}

impl SalesGenerator {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    /// Generate `count` records
    pub fn generate<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<SalesRecord>, GeneratorError> {
        (0..count).map(|_| self.generate_one(rng)).collect()
    }

    fn generate_one<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SalesRecord, GeneratorError> {
        let month = rng.random_range(1..=12);
        let day = rng.random_range(1..=constants::MAX_SALE_DAY);
        let date_sold = NaiveDate::from_ymd_opt(self.year, month, day).ok_or(
            GeneratorError::InvalidDate {
                year: self.year,
                month,
                day,
            },
        )?;

        let department = pick(&Department::ALL, rng);
        let product_number =
            rng.random_range(constants::MIN_PRODUCT_NUMBER..=constants::MAX_PRODUCT_NUMBER);
        let size = pick(&Size::ALL, rng);
        let color = pick(&Color::ALL, rng);
        let site = pick(&ManufacturingSite::ALL, rng);
        let product_id = format!(
            "{}-{}{:02}-{}-{}-{}",
            department.abbreviation(),
            department.code(),
            product_number,
            size,
            color,
            site
        );

        let quantity_sold = rng.random_range(constants::MIN_QUANTITY..=constants::MAX_QUANTITY);
        let unit_price = f64::from(
            rng.random_range(constants::MIN_UNIT_PRICE_DOLLARS..=constants::MAX_UNIT_PRICE_DOLLARS),
        ) + rng.random::<f64>();
        let discount_percent = rng.random_range(
            constants::MIN_COST_DISCOUNT_PERCENT..=constants::MAX_COST_DISCOUNT_PERCENT,
        );
        let base_cost = unit_price * (1.0 - f64::from(discount_percent) / 100.0);
        let volume_discount =
            (f64::from(quantity_sold) * constants::VOLUME_DISCOUNT_RATE).floor() as u32;

        Ok(SalesRecord {
            date_sold,
            department,
            product_id,
            quantity_sold,
            unit_price,
            base_cost,
            volume_discount,
        })
    }
}
