use serde::{Deserialize, Deserializer, Serialize};

/// A sale recorded by the backend for the calling franchise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    /// Revenue of the sale
    #[serde(default, deserialize_with = "lenient::number")]
    pub chiffre_affaires: f64,
}

/// Catalogue product referenced by a stock entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unit price
    #[serde(default, deserialize_with = "lenient::number")]
    pub prix: f64,
}

/// A line of inventory currently held by the calling franchise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockEntry {
    #[serde(default, deserialize_with = "lenient::count")]
    pub quantite: u64,
    #[serde(default)]
    pub product: Option<Product>,
}

impl StockEntry {
    /// Value of the entry at the product's unit price; 0 when no product is attached.
    pub fn value(&self) -> f64 {
        let unit_price = self.product.as_ref().map_or(0.0, |p| p.prix);
        self.quantite as f64 * unit_price
    }
}

/// Identity returned by the backend current-user lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Identity reference (numeric or string depending on the backend)
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl CurrentUser {
    /// Identity reference rendered for logs.
    pub fn reference(&self) -> String {
        match &self.id {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "unknown".to_string(),
        }
    }
}

/// Mandated-supplier purchase compliance of a franchise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResult {
    pub est_conforme: bool,
    /// Purchase share of revenue, one fraction digit (e.g. "42.3")
    pub pourcentage_achats: String,
    pub chiffre_affaires_total: f64,
    pub achats_drivn_cook: f64,
    pub achats_obligatoires: f64,
    pub montant_requis: f64,
    /// "<month>/<year>"
    pub periode: String,
}

/// Deserializers for backend numeric fields, which arrive either as JSON
/// numbers or as numeric strings (decimal columns). `null` reads as zero.
mod lenient {
    use super::*;
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = match Option::<NumberOrText>::deserialize(deserializer)? {
            None => 0.0,
            Some(NumberOrText::Number(n)) => n,
            Some(NumberOrText::Text(s)) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| D::Error::custom(format!("invalid numeric value: {:?}", s)))?,
        };
        if !value.is_finite() {
            return Err(D::Error::custom("numeric value must be finite"));
        }
        Ok(value)
    }

    pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = number(deserializer)?;
        if value < 0.0 || value.fract() != 0.0 || value > u64::MAX as f64 {
            return Err(D::Error::custom(format!(
                "quantity must be a non-negative integer, got {}",
                value
            )));
        }
        Ok(value as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_accepts_number_and_string() {
        let sales: Vec<Sale> = serde_json::from_str(
            r#"[{"chiffre_affaires": 1000}, {"chiffre_affaires": "250.50"}, {"id": 3, "chiffre_affaires": null}, {}]"#,
        )
        .unwrap();
        let amounts: Vec<f64> = sales.iter().map(|s| s.chiffre_affaires).collect();
        assert_eq!(amounts, vec![1000.0, 250.5, 0.0, 0.0]);
    }

    #[test]
    fn test_sale_rejects_non_numeric_string() {
        let result: Result<Vec<Sale>, _> = serde_json::from_str(r#"[{"chiffre_affaires": "abc"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_stock_entry_without_product_is_worth_nothing() {
        let entries: Vec<StockEntry> = serde_json::from_str(
            r#"[{"quantite": 4}, {"quantite": 2, "product": null}, {"quantite": 3, "product": {"nom": "Pain"}}]"#,
        )
        .unwrap();
        assert!(entries.iter().all(|e| e.value() == 0.0));
    }

    #[test]
    fn test_stock_entry_value() {
        let entry: StockEntry =
            serde_json::from_str(r#"{"quantite": "10", "product": {"prix": "12.5"}}"#).unwrap();
        assert_eq!(entry.quantite, 10);
        assert_eq!(entry.value(), 125.0);
    }

    #[test]
    fn test_stock_quantity_must_be_non_negative_integer() {
        assert!(serde_json::from_str::<StockEntry>(r#"{"quantite": -1}"#).is_err());
        assert!(serde_json::from_str::<StockEntry>(r#"{"quantite": 1.5}"#).is_err());
        assert!(serde_json::from_str::<StockEntry>(r#"{"quantite": 3.0}"#).is_ok());
    }

    #[test]
    fn test_current_user_reference() {
        let user: CurrentUser = serde_json::from_str(r#"{"id": 42, "email": "a@b.fr"}"#).unwrap();
        assert_eq!(user.reference(), "42");
        let user: CurrentUser = serde_json::from_str(r#"{"id": "f-7"}"#).unwrap();
        assert_eq!(user.reference(), "f-7");
        let user: CurrentUser = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(user.reference(), "unknown");
    }

    #[test]
    fn test_compliance_result_camel_case() {
        let result = ComplianceResult {
            est_conforme: false,
            pourcentage_achats: "66.7".to_string(),
            chiffre_affaires_total: 1500.0,
            achats_drivn_cook: 1000.0,
            achats_obligatoires: 1200.0,
            montant_requis: 200.0,
            periode: "3/2025".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["estConforme"], false);
        assert_eq!(json["pourcentageAchats"], "66.7");
        assert_eq!(json["chiffreAffairesTotal"], 1500.0);
        assert_eq!(json["achatsDrivnCook"], 1000.0);
        assert_eq!(json["achatsObligatoires"], 1200.0);
        assert_eq!(json["montantRequis"], 200.0);
        assert_eq!(json["periode"], "3/2025");
    }
}
