//! Conference series lookup query
//!
//! SPARQL query text for the existing scientific conference series in
//! Wikidata, and parsing of the query service's JSON results into typed
//! rows. Fetching is left to the caller; nothing here touches the network.
//!
//! Reference: https://www.w3.org/TR/sparql11-results-json/

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::builder::EventSeriesInput;
use crate::error::{TemplateError, TemplateResult};
use crate::ids::entity_id_from_uri;

/// Source tag stamped on every parsed row
pub const SOURCE: &str = "wikidata";

const EVENT_SERIES_QUERY: &str = r#"# Conference Series wikidata query
PREFIX wd: <http://www.wikidata.org/entity/>
PREFIX wdt: <http://www.wikidata.org/prop/direct/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
SELECT (?confSeries as ?eventSeriesId) ?acronym ?confSeriesLabel ?official_website
  ?DBLP_pid ?WikiCFP_pid ?FreeBase_pid ?Microsoft_Academic_pid ?Publons_pid ?ACM_pid ?GND_pid
WHERE
{
  # scientific conference series (Q47258130)
  ?confSeries wdt:P31 wd:Q47258130.
  OPTIONAL { ?confSeries wdt:P1813 ?short_name . }
  BIND (COALESCE(?short_name,?confSeriesLabel) AS ?acronym).
  # official website (P856)
  OPTIONAL { ?confSeries wdt:P856 ?official_website . }
  # DBLP venue ID
  OPTIONAL { ?confSeries wdt:P8926 ?DBLP_pid . }
  # WikiCFP conference series ID
  OPTIONAL { ?confSeries wdt:P5127 ?WikiCFP_pid . }
  # Freebase ID
  OPTIONAL { ?confSeries wdt:P646 ?FreeBase_pid . }
  # Microsoft Academic ID
  OPTIONAL { ?confSeries wdt:P6366 ?Microsoft_Academic_pid . }
  # Publons journals/conferences ID
  OPTIONAL { ?confSeries wdt:P7461 ?Publons_pid . }
  # ACM conference ID
  OPTIONAL { ?confSeries wdt:P7979 ?ACM_pid . }
  # GND ID
  OPTIONAL { ?confSeries wdt:P227 ?GND_pid . }
  # label
  ?confSeries rdfs:label ?confSeriesLabel filter (lang(?confSeriesLabel) = "en").
}
ORDER BY (?acronym)
"#;

/// SPARQL query listing all scientific conference series
pub fn event_series_query() -> &'static str {
    EVENT_SERIES_QUERY
}

/// One conference series as reported by the query service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSeriesRow {
    /// Bare Q-id
    pub event_series_id: String,
    /// Short name, or the label when the item has none
    pub acronym: String,
    pub label: String,
    pub official_website: Option<String>,
    pub dblp_pid: Option<String>,
    pub wikicfp_pid: Option<String>,
    pub freebase_pid: Option<String>,
    pub microsoft_academic_pid: Option<String>,
    pub publons_pid: Option<String>,
    pub acm_pid: Option<String>,
    pub gnd_pid: Option<String>,
    pub source: String,
}

impl EventSeriesRow {
    /// Turn the row back into builder input
    pub fn to_input(
        &self,
        description: impl Into<String>,
        inception: impl Into<String>,
    ) -> EventSeriesInput {
        let input = EventSeriesInput::new(
            self.label.clone(),
            description,
            self.acronym.clone(),
            inception,
        );
        match &self.official_website {
            Some(homepage) => input.with_homepage(homepage.clone()),
            None => input,
        }
    }
}

// ============================================================================
// SPARQL JSON RESULTS
// ============================================================================

#[derive(Debug, Deserialize)]
struct SparqlResponse {
    results: SparqlResults,
}

#[derive(Debug, Deserialize)]
struct SparqlResults {
    bindings: Vec<HashMap<String, SparqlTerm>>,
}

#[derive(Debug, Deserialize)]
struct SparqlTerm {
    value: String,
}

/// Parse a SPARQL JSON results document produced by `event_series_query`
///
/// Rows keep the order of the document.
pub fn parse_event_series_results(json: &str) -> TemplateResult<Vec<EventSeriesRow>> {
    let response: SparqlResponse = serde_json::from_str(json)?;

    let rows = response
        .results
        .bindings
        .iter()
        .enumerate()
        .map(|(index, binding)| parse_row(index, binding))
        .collect::<TemplateResult<Vec<_>>>()?;

    tracing::debug!(rows = rows.len(), "Parsed conference series results");
    Ok(rows)
}

fn parse_row(
    index: usize,
    binding: &HashMap<String, SparqlTerm>,
) -> TemplateResult<EventSeriesRow> {
    let get = |var: &str| binding.get(var).map(|term| term.value.clone());
    let require = |var: &str| {
        get(var).ok_or_else(|| {
            TemplateError::MalformedResults(format!("row {}: missing binding '{}'", index, var))
        })
    };

    let uri = require("eventSeriesId")?;
    let label = require("confSeriesLabel")?;
    let acronym = get("acronym").unwrap_or_else(|| label.clone());

    Ok(EventSeriesRow {
        event_series_id: entity_id_from_uri(&uri).to_string(),
        acronym,
        label,
        official_website: get("official_website"),
        dblp_pid: get("DBLP_pid"),
        wikicfp_pid: get("WikiCFP_pid"),
        freebase_pid: get("FreeBase_pid"),
        microsoft_academic_pid: get("Microsoft_Academic_pid"),
        publons_pid: get("Publons_pid"),
        acm_pid: get("ACM_pid"),
        gnd_pid: get("GND_pid"),
        source: SOURCE.to_string(),
    })
}
