//! Room module - floor area and 2-D fit evaluation

use crate::furniture::Furniture;
use crate::measurement::{Measurement, INCHES_PER_FOOT};

/// Approximate floor area in whole square feet
///
/// Computes `L.feet*W.feet + (L.feet*W.inches + W.feet*L.inches) / 12` with
/// floor division. The inches × inches term is intentionally dropped, so
/// `(10 ft 6 in) × (8 ft 0 in)` yields `84`.
pub fn floor_area_sq_ft(length: &Measurement, width: &Measurement) -> u64 {
    let (lf, li) = (u64::from(length.feet()), u64::from(length.inches()));
    let (wf, wi) = (u64::from(width.feet()), u64::from(width.inches()));

    lf * wf + (lf * wi + wf * li) / u64::from(INCHES_PER_FOOT)
}

/// True when the record's length and width are each no larger than the room's
///
/// Height is not compared.
pub fn fits(record: &Furniture, length: &Measurement, width: &Measurement) -> bool {
    record.length.fits_within(length) && record.width.fits_within(width)
}

/// Measured room dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    /// Room length
    pub length: Measurement,
    /// Room width
    pub width: Measurement,
    /// Room height, recorded for display only
    pub height: Option<Measurement>,
}

/// Fit decision for a single record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitResult {
    /// Name of the evaluated record
    pub name: String,
    /// Whether it fits the room footprint
    pub fits: bool,
}

/// Result of evaluating a whole list against one room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitReport {
    /// Approximate floor area, see [`floor_area_sq_ft`]
    pub floor_area_sq_ft: u64,
    /// One entry per record, in list order
    pub results: Vec<FitResult>,
}

impl Room {
    /// Create a room from its floor dimensions
    pub fn new(length: Measurement, width: Measurement) -> Self {
        Self {
            length,
            width,
            height: None,
        }
    }

    /// Attach the measured height
    pub fn with_height(mut self, height: Measurement) -> Self {
        self.height = Some(height);
        self
    }

    /// Approximate floor area of this room
    pub fn floor_area_sq_ft(&self) -> u64 {
        floor_area_sq_ft(&self.length, &self.width)
    }

    /// Whether `record` fits this room's footprint
    pub fn fits(&self, record: &Furniture) -> bool {
        fits(record, &self.length, &self.width)
    }

    /// Evaluate every record against this room
    pub fn evaluate(&self, records: &[Furniture]) -> FitReport {
        FitReport {
            floor_area_sq_ft: self.floor_area_sq_ft(),
            results: records
                .iter()
                .map(|record| FitResult {
                    name: record.name().to_string(),
                    fits: self.fits(record),
                })
                .collect(),
        }
    }
}

impl FitReport {
    /// Number of records that fit
    pub fn fitting_count(&self) -> usize {
        self.results.iter().filter(|r| r.fits).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ft(feet: u32, inches: u32) -> Measurement {
        Measurement::new(feet, inches)
    }

    fn item(
        name: &str,
        length: Measurement,
        width: Measurement,
        height: Measurement,
    ) -> Furniture {
        Furniture::new(name, length, width, height).unwrap()
    }

    #[test]
    fn test_floor_area_formula() {
        assert_eq!(floor_area_sq_ft(&ft(10, 6), &ft(8, 0)), 84);
        assert_eq!(floor_area_sq_ft(&ft(0, 0), &ft(8, 0)), 0);
    }

    #[test]
    fn test_floor_area_drops_inch_cross_term() {
        // exact area is 30.25 sq ft; 5*5 + (5*6 + 5*6)/12 = 25 + 5
        assert_eq!(floor_area_sq_ft(&ft(5, 6), &ft(5, 6)), 30);
        // 0 ft 11 in squared has no feet component at all
        assert_eq!(floor_area_sq_ft(&ft(0, 11), &ft(0, 11)), 0);
    }

    #[test]
    fn test_exact_dimensions_fit() {
        let sofa = item("Sofa", ft(6, 0), ft(3, 0), ft(2, 6));
        assert!(fits(&sofa, &ft(6, 0), &ft(3, 0)));
    }

    #[test]
    fn test_one_inch_too_long() {
        let sofa = item("Sofa", ft(6, 1), ft(3, 0), ft(2, 6));
        assert!(!fits(&sofa, &ft(6, 0), &ft(10, 0)));
    }

    #[test]
    fn test_width_is_checked() {
        let table = item("Table", ft(2, 0), ft(4, 0), ft(2, 6));
        assert!(!fits(&table, &ft(10, 0), &ft(3, 11)));
    }

    #[test]
    fn test_height_is_ignored() {
        let wardrobe = item("Wardrobe", ft(4, 0), ft(2, 0), ft(50, 0));
        let room = Room::new(ft(10, 0), ft(10, 0)).with_height(ft(8, 0));
        assert!(room.fits(&wardrobe));
    }

    #[test]
    fn test_evaluate_preserves_order() {
        let records = vec![
            item("Bed", ft(7, 0), ft(5, 0), ft(2, 0)),
            item("Piano", ft(12, 0), ft(5, 0), ft(4, 0)),
            item("Chair", ft(2, 0), ft(2, 0), ft(3, 0)),
        ];
        let report = Room::new(ft(10, 6), ft(8, 0)).evaluate(&records);

        assert_eq!(report.floor_area_sq_ft, 84);
        let decisions: Vec<(&str, bool)> = report
            .results
            .iter()
            .map(|r| (r.name.as_str(), r.fits))
            .collect();
        assert_eq!(
            decisions,
            vec![("Bed", true), ("Piano", false), ("Chair", true)]
        );
        assert_eq!(report.fitting_count(), 2);
    }

    #[test]
    fn test_evaluate_empty_list() {
        let report = Room::new(ft(10, 0), ft(10, 0)).evaluate(&[]);
        assert_eq!(report.floor_area_sq_ft, 100);
        assert!(report.results.is_empty());
    }
}
