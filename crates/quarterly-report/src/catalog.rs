//! Fixed product catalog: departments, sizes, colors and manufacturing sites
//!
//! Each department carries its own name, abbreviation and code, so those
//! can never drift out of step with each other.

use rand::Rng;
use std::cmp::Ordering;
use std::fmt;

/// Product department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    MensClothing,
    WomensClothing,
    ChildrensClothing,
    Accessories,
    Footwear,
    Outerwear,
    Sportswear,
    Undergarments,
}

impl Department {
    /// All departments in catalog order
    pub const ALL: [Department; 8] = [
        Department::MensClothing,
        Department::WomensClothing,
        Department::ChildrensClothing,
        Department::Accessories,
        Department::Footwear,
        Department::Outerwear,
        Department::Sportswear,
        Department::Undergarments,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Department::MensClothing => "Men's Clothing",
            Department::WomensClothing => "Women's Clothing",
            Department::ChildrensClothing => "Children's Clothing",
            Department::Accessories => "Accessories",
            Department::Footwear => "Footwear",
            Department::Outerwear => "Outerwear",
            Department::Sportswear => "Sportswear",
            Department::Undergarments => "Undergarments",
        }
    }

    /// Four-letter prefix used in product ids
    pub fn abbreviation(self) -> &'static str {
        match self {
            Department::MensClothing => "MENS",
            Department::WomensClothing => "WOMN",
            Department::ChildrensClothing => "CHLD",
            Department::Accessories => "ACCS",
            Department::Footwear => "FOOT",
            Department::Outerwear => "OUTR",
            Department::Sportswear => "SPRT",
            Department::Undergarments => "UNDR",
        }
    }

    /// 1-based position in the catalog, the first digit of a product number
    pub fn code(self) -> u8 {
        match self {
            Department::MensClothing => 1,
            Department::WomensClothing => 2,
            Department::ChildrensClothing => 3,
            Department::Accessories => 4,
            Department::Footwear => 5,
            Department::Outerwear => 6,
            Department::Sportswear => 7,
            Department::Undergarments => 8,
        }
    }
}

// Departments sort by display name so report tables come out alphabetical.
impl Ord for Department {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl PartialOrd for Department {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Garment size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    ExtraSmall,
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl Size {
    pub const ALL: [Size; 5] = [
        Size::ExtraSmall,
        Size::Small,
        Size::Medium,
        Size::Large,
        Size::ExtraLarge,
    ];
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::ExtraSmall => write!(f, "XS"),
            Size::Small => write!(f, "S"),
            Size::Medium => write!(f, "M"),
            Size::Large => write!(f, "L"),
            Size::ExtraLarge => write!(f, "XL"),
        }
    }
}

/// Garment color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Blue,
    Green,
    Red,
    Yellow,
    Orange,
    White,
    Gray,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Yellow,
        Color::Orange,
        Color::White,
        Color::Gray,
    ];
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "BK"),
            Color::Blue => write!(f, "BL"),
            Color::Green => write!(f, "GR"),
            Color::Red => write!(f, "RD"),
            Color::Yellow => write!(f, "YL"),
            Color::Orange => write!(f, "OR"),
            Color::White => write!(f, "WT"),
            Color::Gray => write!(f, "GY"),
        }
    }
}

/// Factory a product was made in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManufacturingSite {
    Us1,
    Us2,
    Us3,
    Uk1,
    Uk2,
    Uk3,
    Jp1,
    Jp2,
    Jp3,
    Ca1,
}

impl ManufacturingSite {
    pub const ALL: [ManufacturingSite; 10] = [
        ManufacturingSite::Us1,
        ManufacturingSite::Us2,
        ManufacturingSite::Us3,
        ManufacturingSite::Uk1,
        ManufacturingSite::Uk2,
        ManufacturingSite::Uk3,
        ManufacturingSite::Jp1,
        ManufacturingSite::Jp2,
        ManufacturingSite::Jp3,
        ManufacturingSite::Ca1,
    ];
}

impl fmt::Display for ManufacturingSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManufacturingSite::Us1 => write!(f, "US1"),
            ManufacturingSite::Us2 => write!(f, "US2"),
            ManufacturingSite::Us3 => write!(f, "US3"),
            ManufacturingSite::Uk1 => write!(f, "UK1"),
            ManufacturingSite::Uk2 => write!(f, "UK2"),
            ManufacturingSite::Uk3 => write!(f, "UK3"),
            ManufacturingSite::Jp1 => write!(f, "JP1"),
            ManufacturingSite::Jp2 => write!(f, "JP2"),
            ManufacturingSite::Jp3 => write!(f, "JP3"),
            ManufacturingSite::Ca1 => write!(f, "CA1"),
        }
    }
}

/// Pick one entry uniformly at random. `items` must not be empty.
pub fn pick<T: Copy, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> T {
    items[rng.random_range(0..items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_department_codes_follow_catalog_order() {
        for (idx, dept) in Department::ALL.iter().enumerate() {
            assert_eq!(dept.code() as usize, idx + 1);
        }
    }

    #[test]
    fn test_department_names_and_abbreviations_are_unique() {
        let names: HashSet<_> = Department::ALL.iter().map(|d| d.name()).collect();
        let abbrevs: HashSet<_> = Department::ALL.iter().map(|d| d.abbreviation()).collect();
        assert_eq!(names.len(), 8);
        assert_eq!(abbrevs.len(), 8);
        assert!(abbrevs.iter().all(|a| a.len() == 4));
    }

    #[test]
    fn test_department_abbreviation_matches_name() {
        assert_eq!(Department::MensClothing.abbreviation(), "MENS");
        assert_eq!(Department::Undergarments.name(), "Undergarments");
        assert_eq!(Department::Undergarments.abbreviation(), "UNDR");
    }

    #[test]
    fn test_departments_sort_by_name() {
        let mut depts = Department::ALL.to_vec();
        depts.sort();
        let names: Vec<_> = depts.iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            vec![
                "Accessories",
                "Children's Clothing",
                "Footwear",
                "Men's Clothing",
                "Outerwear",
                "Sportswear",
                "Undergarments",
                "Women's Clothing",
            ]
        );
    }

    #[test]
    fn test_codes_display() {
        assert_eq!(Size::ExtraLarge.to_string(), "XL");
        assert_eq!(Color::Gray.to_string(), "GY");
        assert_eq!(ManufacturingSite::Ca1.to_string(), "CA1");
    }

    #[test]
    fn test_pick_reaches_every_entry() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<_> = (0..500)
            .map(|_| pick(&ManufacturingSite::ALL, &mut rng).to_string())
            .collect();
        assert_eq!(seen.len(), ManufacturingSite::ALL.len());
    }
}
