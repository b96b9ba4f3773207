//! Persisted key schema.
//!
//! Key names are kept byte-for-byte compatible with the layout the app
//! has always used, so existing stores and old backups remain readable.

/// JSON array of appointment records.
pub const APPOINTMENTS: &str = "appointments";

/// JSON array of collaborator records.
pub const COLLABORATORS: &str = "collaborators";

/// Establishment profile scalars.
pub const ESTABLISHMENT_NAME: &str = "establishmentName";
pub const ESTABLISHMENT_TAX_ID: &str = "establishmentTaxId";
pub const ESTABLISHMENT_BUSINESS_LINE: &str = "establishmentBusinessLine";
pub const ESTABLISHMENT_LOGO_REF: &str = "establishmentLogoRef";

/// `"light"` or `"dark"`.
pub const THEME_PREFERENCE: &str = "themePreference";

/// `"true"` sentinel written once onboarding completes.
pub const ESTABLISHMENT_REGISTERED: &str = "establishmentRegistered";
