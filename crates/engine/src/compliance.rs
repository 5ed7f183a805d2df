//! Mandated-supplier purchase compliance.
//!
//! A franchise is compliant when the value of its Driv'n Cook stock reaches
//! 80% of its sales revenue:
//!
//! - revenue = Σ sale.chiffre_affaires
//! - purchases = Σ stock.quantite × product.prix (0 without product)
//! - obligation = revenue × 0.8
//! - share = purchases / revenue × 100 (0 when revenue is 0)
//!
//! Sales and stock are taken as returned by the backend. They are not
//! filtered by the reporting period, which only labels the result.

use drivn_common::types::{ComplianceResult, Sale, StockEntry};

use crate::period::ReportingPeriod;

/// Share of revenue that must be bought from the mandated supplier.
pub const REQUIRED_PURCHASE_RATIO: f64 = 0.8;

/// Purchase share (in percent) at or above which a franchise is compliant.
pub const COMPLIANCE_THRESHOLD_PCT: f64 = 80.0;

/// Derive the compliance verdict from sales and stock.
pub fn evaluate(sales: &[Sale], stock: &[StockEntry], period: &ReportingPeriod) -> ComplianceResult {
    let chiffre_affaires_total: f64 = sales.iter().map(|s| s.chiffre_affaires).sum();
    let achats_drivn_cook: f64 = stock.iter().map(StockEntry::value).sum();
    let achats_obligatoires = chiffre_affaires_total * REQUIRED_PURCHASE_RATIO;

    let (pourcentage, montant_requis) = if chiffre_affaires_total > 0.0 {
        (
            achats_drivn_cook / chiffre_affaires_total * 100.0,
            (achats_obligatoires - achats_drivn_cook).max(0.0),
        )
    } else {
        (0.0, 0.0)
    };

    ComplianceResult {
        est_conforme: pourcentage >= COMPLIANCE_THRESHOLD_PCT,
        pourcentage_achats: format_percentage(pourcentage),
        chiffre_affaires_total,
        achats_drivn_cook,
        achats_obligatoires,
        montant_requis,
        periode: period.label(),
    }
}

/// One fraction digit, ties rounded up ("12.25" -> "12.3").
fn format_percentage(pourcentage: f64) -> String {
    format!("{:.1}", (pourcentage * 10.0).round() / 10.0)
}
