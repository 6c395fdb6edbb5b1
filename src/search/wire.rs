use serde::Deserialize;

/* ------------- Minimal serde mapping of SYMBOL_SEARCH ------------- */

#[derive(Deserialize)]
pub(crate) struct SymbolSearchEnvelope {
    #[serde(rename = "bestMatches", default)]
    pub(crate) best_matches: Option<Vec<SymbolSearchMatch>>,
}

#[derive(Deserialize)]
pub(crate) struct SymbolSearchMatch {
    #[serde(rename = "1. symbol", default)]
    pub(crate) symbol: Option<String>,
    #[serde(rename = "2. name", default)]
    pub(crate) name: Option<String>,
    #[serde(rename = "3. type", default)]
    pub(crate) kind: Option<String>,
    #[serde(rename = "4. region", default)]
    pub(crate) region: Option<String>,
    #[serde(rename = "5. marketOpen", default)]
    pub(crate) market_open: Option<String>,
    #[serde(rename = "6. marketClose", default)]
    pub(crate) market_close: Option<String>,
    #[serde(rename = "7. timezone", default)]
    pub(crate) timezone: Option<String>,
    #[serde(rename = "8. currency", default)]
    pub(crate) currency: Option<String>,
    #[serde(rename = "9. matchScore", default)]
    pub(crate) match_score: Option<String>,
}
