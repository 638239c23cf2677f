use std::fmt;

/// The eight property attributes the model is trained on.
///
/// Ordering is significant: `ALL` fixes the column order of the synthetic
/// training matrix, and every feature vector assembled from user input must
/// follow the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureField {
    SquareFootage,
    Bedrooms,
    Bathrooms,
    LocationRating,
    FloorNumber,
    ParkingSpots,
    SwimmingPool,
    SecurityRating,
}

impl FeatureField {
    pub const COUNT: usize = 8;

    pub const ALL: [FeatureField; FeatureField::COUNT] = [
        FeatureField::SquareFootage,
        FeatureField::Bedrooms,
        FeatureField::Bathrooms,
        FeatureField::LocationRating,
        FeatureField::FloorNumber,
        FeatureField::ParkingSpots,
        FeatureField::SwimmingPool,
        FeatureField::SecurityRating,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FeatureField::SquareFootage => "Square Footage",
            FeatureField::Bedrooms => "Bedrooms",
            FeatureField::Bathrooms => "Bathrooms",
            FeatureField::LocationRating => "Location Rating",
            FeatureField::FloorNumber => "Floor Number",
            FeatureField::ParkingSpots => "Parking Spots",
            FeatureField::SwimmingPool => "Swimming Pool",
            FeatureField::SecurityRating => "Security Rating",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FeatureField::SquareFootage => "📐",
            FeatureField::Bedrooms => "🛏",
            FeatureField::Bathrooms => "🚿",
            FeatureField::LocationRating => "📍",
            FeatureField::FloorNumber => "🏢",
            FeatureField::ParkingSpots => "🚗",
            FeatureField::SwimmingPool => "🏊",
            FeatureField::SecurityRating => "🔒",
        }
    }

    /// Placeholder text shown in the empty input widget.
    pub fn hint(&self) -> &'static str {
        match self {
            FeatureField::SquareFootage => "e.g. 1200 (sq ft)",
            FeatureField::Bedrooms => "1 - 5",
            FeatureField::Bathrooms => "1 - 4",
            FeatureField::LocationRating => "1 - 10",
            FeatureField::FloorNumber => "1 - 20",
            FeatureField::ParkingSpots => "0 - 2",
            FeatureField::SwimmingPool => "0 = no, 1 = yes",
            FeatureField::SecurityRating => "1 - 10",
        }
    }
}

impl fmt::Display for FeatureField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Validated feature values in model column order, ready for scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector(pub [f64; FeatureField::COUNT]);

impl FeatureVector {
    pub fn as_row(&self) -> Vec<f64> {
        self.0.to_vec()
    }
}
