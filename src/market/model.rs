use serde::{
    de::{IgnoredAny, MapAccess, Visitor},
    ser::SerializeTuple,
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::fmt;

pub const DEFAULT_COIN: &str = "ripple";
pub const DEFAULT_DAYS: &str = "1";

/// Query parameters accepted by `GET /api/coin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartParams {
    pub coin: String,
    pub days: String,
}

impl ChartParams {
    /// Resolves `coin` and `days` from raw query pairs. Only a missing key
    /// falls back to its default; `?coin=` keeps the empty value. The first
    /// occurrence of a repeated key wins.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let lookup = |key: &str, default: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            coin: lookup("coin", DEFAULT_COIN),
            days: lookup("days", DEFAULT_DAYS),
        }
    }
}

impl Default for ChartParams {
    fn default() -> Self {
        Self {
            coin: DEFAULT_COIN.to_string(),
            days: DEFAULT_DAYS.to_string(),
        }
    }
}

/// A `[timestamp, price]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PricePoint(pub f64, pub f64);

impl Serialize for PricePoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut point = serializer.serialize_tuple(2)?;
        point.serialize_element(&ChartNumber(self.0))?;
        point.serialize_element(&ChartNumber(self.1))?;
        point.end()
    }
}

/// Writes integral values below 1e21 without a fractional part or exponent,
/// so `1e3` and `1000.0` both go out as `1000`.
struct ChartNumber(f64);

impl Serialize for ChartNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0.abs() < 1e21 {
            serializer.serialize_i128(self.0 as i128)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

/// Envelope returned by the market chart endpoint. Everything except
/// `prices` is ignored.
///
/// Keys match `prices` case-insensitively and the last matching key wins,
/// so `{"Prices": ...}` and repeated keys decode instead of failing.
#[derive(Debug, Default)]
pub struct MarketChartResponse {
    pub prices: Option<Vec<PricePoint>>,
}

impl MarketChartResponse {
    /// Decodes an upstream body. A bare `null` body is an empty envelope.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        let chart: Option<Self> = serde_json::from_slice(body)?;
        Ok(chart.unwrap_or_default())
    }

    pub fn into_prices(self) -> Vec<PricePoint> {
        self.prices.unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for MarketChartResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EnvelopeVisitor)
    }
}

struct EnvelopeVisitor;

impl<'de> Visitor<'de> for EnvelopeVisitor {
    type Value = MarketChartResponse;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a market chart object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut prices = None;
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("prices") {
                prices = map.next_value::<Option<Vec<PricePoint>>>()?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(MarketChartResponse { prices })
    }
}
