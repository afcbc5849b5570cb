//! Timezone identifier resolution and the offered-identifier catalog.
//!
//! Uses ICU4X for Windows timezone ID mapping and IANA canonicalization,
//! plus a small alias table for the human-readable standard-time names the
//! add-record dropdown offers.

use std::collections::HashMap;
use std::str::FromStr;

use chrono_tz::Tz;
use icu::time::zone::WindowsParser;
use icu::time::zone::iana::IanaParserExtended;

use crate::error::{ServiceError, StoreError};

/// Standard-time names offered by default, with their IANA equivalents.
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("Eastern Standard Time", "America/New_York"),
    ("Central Standard Time", "America/Chicago"),
    ("Mountain Standard Time", "America/Denver"),
    ("Pacific Standard Time", "America/Los_Angeles"),
    ("Alaska Standard Time", "America/Juneau"),
    ("Hawaii-Aleutian Standard Time", "Pacific/Honolulu"),
];

/// Catalog of selectable timezone identifiers.
///
/// Holds the identifiers the presentation layer offers in its dropdown and
/// resolves identifiers (IANA names or recognized aliases) to `chrono_tz`
/// timezones. Resolution is validated against the runtime timezone database,
/// not the offered list: any recognized identifier is accepted by
/// `add_record`, the offered list only drives the UI.
pub struct TzCatalog {
    /// Identifiers offered to the presentation layer, in configured order.
    offered: Vec<String>,
    /// Cache of resolved timezones by identifier.
    cache: HashMap<String, Tz>,
}

impl TzCatalog {
    /// Creates a catalog offering the built-in standard-time names.
    #[must_use]
    pub fn with_default_zones() -> Self {
        Self::new(
            DEFAULT_ALIASES
                .iter()
                .map(|(name, _)| (*name).to_string())
                .collect(),
        )
    }

    /// Creates a catalog offering the given identifiers.
    #[must_use]
    pub fn new(offered: Vec<String>) -> Self {
        Self {
            offered,
            cache: HashMap::new(),
        }
    }

    /// Identifiers to populate the timezone-selection control with.
    #[must_use]
    pub fn offered(&self) -> &[String] {
        &self.offered
    }

    /// ## Summary
    /// Resolves a timezone identifier to a `chrono_tz::Tz`.
    ///
    /// Accepts IANA names directly and maps recognized aliases (the built-in
    /// standard-time names, Windows timezone IDs, and IANA aliases such as
    /// `Europe/Kiev` for `Europe/Kyiv`) to their canonical IANA zone.
    ///
    /// ## Errors
    ///
    /// Returns `StoreError::UnknownTimezone` if the identifier cannot be
    /// resolved.
    ///
    /// ## Side Effects
    ///
    /// Caches successful resolutions to avoid repeated parsing.
    pub fn resolve(&mut self, id: &str) -> Result<Tz, StoreError> {
        if let Some(tz) = self.cache.get(id) {
            return Ok(*tz);
        }

        let normalized = normalize_tz_id(id);

        let tz = Tz::from_str(&normalized)
            .map_err(|_e| StoreError::UnknownTimezone(id.to_string()))?;

        self.cache.insert(id.to_string(), tz);

        Ok(tz)
    }

    /// Whether `id` resolves to a recognized timezone.
    pub fn is_supported(&mut self, id: &str) -> bool {
        self.resolve(id).is_ok()
    }
}

impl Default for TzCatalog {
    fn default() -> Self {
        Self::with_default_zones()
    }
}

/// Looks up the built-in alias table.
fn builtin_alias(id: &str) -> Option<&'static str> {
    DEFAULT_ALIASES
        .iter()
        .find(|(name, _)| *name == id)
        .map(|(_, iana)| *iana)
}

/// Normalizes a timezone identifier to an IANA name.
///
/// Tries the built-in alias table first, then ICU's Windows timezone ID
/// mapping, then IANA canonicalization (which handles renamed zones).
/// Unrecognized identifiers are returned as-is and rejected downstream by
/// `chrono_tz` parsing.
fn normalize_tz_id(id: &str) -> String {
    if let Some(iana) = builtin_alias(id) {
        return iana.to_string();
    }

    // Try Windows timezone mapping using ICU
    let windows_parser = WindowsParser::new();
    if let Some(tz) = windows_parser.parse(id, None) {
        // Get the canonical IANA name from the BCP-47 timezone ID
        let iana_parser = IanaParserExtended::new();
        for entry in iana_parser.iter() {
            if entry.time_zone == tz {
                return entry.canonical.to_string();
            }
        }
    }

    // Try IANA parser for canonicalization (handles aliases like Europe/Kiev -> Europe/Kyiv)
    let iana_parser = IanaParserExtended::new();
    let parsed = iana_parser.parse(id);
    if parsed.time_zone != icu::time::TimeZone::UNKNOWN {
        return parsed.canonical.to_string();
    }

    id.to_string()
}

/// ## Summary
/// Detects the IANA identifier of the host's local timezone.
///
/// ## Errors
/// Returns `ServiceError::InvalidConfiguration` if the platform provides no
/// usable timezone; configure `clock.local_timezone` explicitly in that case.
pub fn detect_local_timezone() -> Result<String, ServiceError> {
    iana_time_zone::get_timezone().map_err(|e| {
        ServiceError::InvalidConfiguration(format!("Local timezone detection failed: {e}"))
    })
}
