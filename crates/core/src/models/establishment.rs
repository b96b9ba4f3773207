use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{SchedulingError, SchedulingResult};

/// Fixed category of establishment. The business line determines the
/// allowed-service list offered by the booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessLine {
    Accounting,
    Legal,
    Beauty,
    AutoShop,
}

impl BusinessLine {
    pub const ALL: [BusinessLine; 4] = [
        BusinessLine::Accounting,
        BusinessLine::Legal,
        BusinessLine::Beauty,
        BusinessLine::AutoShop,
    ];

    /// Stable string form used for the persisted scalar.
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessLine::Accounting => "accounting",
            BusinessLine::Legal => "legal",
            BusinessLine::Beauty => "beauty",
            BusinessLine::AutoShop => "auto_shop",
        }
    }

    /// The fixed service list offered for this line. Free-text services
    /// are still allowed on an appointment when the user picks "other".
    pub fn services(&self) -> &'static [&'static str] {
        match self {
            BusinessLine::Accounting => &["Bookkeeping", "Financial Consulting"],
            BusinessLine::Legal => &["Legal Consulting", "Legal Advisory"],
            BusinessLine::Beauty => &["Haircut", "Manicure", "Pedicure"],
            BusinessLine::AutoShop => &["Oil Change", "Tire Change", "Inspection", "Balancing"],
        }
    }
}

impl fmt::Display for BusinessLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BusinessLine::Accounting => "Accounting Office",
            BusinessLine::Legal => "Law Office",
            BusinessLine::Beauty => "Beauty Salon",
            BusinessLine::AutoShop => "Auto Shop",
        };
        f.write_str(label)
    }
}

impl FromStr for BusinessLine {
    type Err = SchedulingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accounting" => Ok(BusinessLine::Accounting),
            "legal" => Ok(BusinessLine::Legal),
            "beauty" => Ok(BusinessLine::Beauty),
            "auto_shop" => Ok(BusinessLine::AutoShop),
            other => Err(SchedulingError::Validation(format!(
                "Unknown business line '{other}'"
            ))),
        }
    }
}

/// The single business-identity record, created during onboarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstablishmentProfile {
    pub name: String,
    pub tax_id: Option<String>,
    pub business_line: BusinessLine,
    pub logo_ref: Option<String>,
}

impl EstablishmentProfile {
    pub fn validate(&self) -> SchedulingResult<()> {
        if self.name.trim().is_empty() {
            return Err(SchedulingError::Validation(
                "Establishment name is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Light/dark theme choice persisted alongside the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }
}

impl FromStr for ThemePreference {
    type Err = SchedulingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(SchedulingError::Validation(format!(
                "Unknown theme preference '{other}'"
            ))),
        }
    }
}
