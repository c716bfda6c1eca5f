use serde::{Deserialize, Serialize};

/// IP versions the client knows how to present.
pub const RECOGNIZED_IP_VERSIONS: &[&str] = &["IPv4", "IPv6"];

/// One decoded geolocation lookup result.
///
/// Field names match the endpoint's flat JSON keys one-to-one, so the struct
/// deserializes straight from the response body. Instances are built fresh per
/// successful fetch and replaced wholesale by the next one; equality is purely
/// structural.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpInfo {
    pub ip: String,
    pub network: String,
    pub version: String,
    pub city: String,
    pub region: String,
    pub region_code: String,
    pub country: String,
    pub country_name: String,
    pub country_code: String,
    pub country_code_iso3: String,
    pub country_capital: String,
    pub country_tld: String,
    pub continent_code: String,
    pub in_eu: bool,
    pub postal: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub utc_offset: String,
    pub country_calling_code: String,
    pub currency: String,
    pub currency_name: String,
    pub languages: String,
    pub country_area: f64,
    pub country_population: i64,
    pub asn: String,
    pub org: String,
}

impl IpInfo {
    /// Whether `version` is a value this client can present ("IPv4" or "IPv6").
    /// Anything else is treated as deprecated by the view model.
    pub fn has_recognized_version(&self) -> bool {
        RECOGNIZED_IP_VERSIONS.contains(&self.version.as_str())
    }
}
