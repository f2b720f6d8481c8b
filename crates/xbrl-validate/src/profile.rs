//! Taxonomy profile: the qualified names a regulatory taxonomy reserves.
//!
//! Several rules recognize concepts of one particular taxonomy (the filing
//! indicator element, the currency-denomination dimensions, the entity
//! identifier schemes). Those bindings are configuration, not literals in
//! the rules, so a different regulatory framework can supply its own.

use xbrl_model::QName;

/// Qualified names and roles reserved by the reporting framework.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxonomyProfile {
    /// Concept of filing-indicator facts.
    pub filing_indicator_concept: QName,
    /// Label role advertising the allowed filing-indicator codes on tables.
    pub filing_indicator_label_role: String,
    /// Dimension marking facts reported in their currency of denomination.
    pub currency_context_dimension: QName,
    /// Member of `currency_context_dimension` selecting denominated facts.
    pub denominated_member: QName,
    /// Dimension qualifying a fact with a significant-liability currency.
    pub significant_currency_dimension: QName,
    /// Deprecated spelling of the LEI identifier scheme.
    pub deprecated_entity_scheme: String,
    /// Corrected spelling filers are expected to migrate to.
    pub preferred_entity_scheme: String,
}

impl TaxonomyProfile {
    /// Bindings of the EBA CRR reporting framework.
    pub fn eba() -> Self {
        Self {
            filing_indicator_concept: QName::new(
                "http://www.eurofiling.info/xbrl/ext/filing-indicators",
                "filingIndicator",
            ),
            filing_indicator_label_role: "http://www.eurofiling.info/xbrl/role/filing-indicator-code"
                .to_string(),
            currency_context_dimension: QName::new(
                "http://www.eba.europa.eu/xbrl/crr/dict/dim",
                "CCA",
            ),
            denominated_member: QName::new("http://www.eba.europa.eu/xbrl/crr/dict/dom/CA", "x1"),
            significant_currency_dimension: QName::new(
                "http://www.eba.europa.eu/xbrl/crr/dict/dim",
                "CUS",
            ),
            deprecated_entity_scheme: "http://standard.iso.org/iso/17442".to_string(),
            preferred_entity_scheme: "http://standards.iso.org/iso/17442".to_string(),
        }
    }
}
