//! Wikidata identifiers used by the templates
//!
//! Property and item ids must match the target knowledge base exactly; the
//! ingestion side rejects payloads with unknown keys.

// ============================================================================
// PROPERTIES
// ============================================================================

/// instance of
pub const INSTANCE_OF: &str = "P31";
/// inception
pub const INCEPTION: &str = "P571";
/// short name
pub const SHORT_NAME: &str = "P1813";
/// title
pub const TITLE: &str = "P1476";
/// official website
pub const OFFICIAL_WEBSITE: &str = "P856";

// ============================================================================
// ITEMS
// ============================================================================

/// scientific conference series
pub const SCIENTIFIC_CONFERENCE_SERIES: &str = "Q47258130";
/// academic conference
pub const ACADEMIC_CONFERENCE: &str = "Q2020153";
/// proceedings
pub const PROCEEDINGS: &str = "Q1143604";

// ============================================================================
// TIME VALUES
// ============================================================================

/// Proleptic Gregorian calendar
pub const GREGORIAN_CALENDAR: &str = "http://www.wikidata.org/entity/Q1985727";

/// Precision code written on every inception claim
pub const DAY_PRECISION: u8 = 9;

/// Only English is populated
pub const DEFAULT_LANGUAGE: &str = "en";

/// Prefix of concept URIs returned by the query service
pub const ENTITY_URI_PREFIX: &str = "http://www.wikidata.org/entity/";

/// Strip the concept URI prefix, leaving the bare Q-id
pub fn entity_id_from_uri(uri: &str) -> &str {
    uri.strip_prefix(ENTITY_URI_PREFIX).unwrap_or(uri)
}
