use std::{fmt, sync::Arc};

/// Rider segment. Labels outside the two known segments end up as
/// [`MemberCasual::Unknown`] rather than a third segment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MemberCasual {
    Casual,
    Member,
    #[default]
    Unknown,
}

impl MemberCasual {
    /// Maps the legacy `usertype` labels.
    pub fn from_legacy_label(label: &str) -> Self {
        match label {
            "Subscriber" => Self::Member,
            "Customer" => Self::Casual,
            _ => Self::Unknown,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "member" => Self::Member,
            "casual" => Self::Casual,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Self::Member => Some("member"),
            Self::Casual => Some("casual"),
            Self::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for MemberCasual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str().unwrap_or("unknown"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RideableType {
    ClassicBike,
    ElectricBike,
    DockedBike,
    Other(Arc<str>),
}

impl RideableType {
    /// Assigned to legacy rows, which predate vehicle classes.
    pub const LEGACY: RideableType = RideableType::DockedBike;

    pub fn from_label(label: &str) -> Self {
        match label {
            "classic_bike" => Self::ClassicBike,
            "electric_bike" => Self::ElectricBike,
            "docked_bike" => Self::DockedBike,
            other => Self::Other(other.into()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::ClassicBike => "classic_bike",
            Self::ElectricBike => "electric_bike",
            Self::DockedBike => "docked_bike",
            Self::Other(label) => label.as_ref(),
        }
    }
}

impl fmt::Display for RideableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[test]
fn legacy_labels() {
    assert_eq!(MemberCasual::from_legacy_label("Subscriber"), MemberCasual::Member);
    assert_eq!(MemberCasual::from_legacy_label("Customer"), MemberCasual::Casual);
    assert_eq!(MemberCasual::from_legacy_label("Dependent"), MemberCasual::Unknown);
    assert_eq!(MemberCasual::from_legacy_label("subscriber"), MemberCasual::Unknown);
}

#[test]
fn rideable_label_survives() {
    let odd = RideableType::from_label("cargo_bike");
    assert_eq!(odd.as_str(), "cargo_bike");
    assert_eq!(RideableType::from_label("docked_bike"), RideableType::LEGACY);
}
