use chrono::{DateTime, FixedOffset, Offset, SecondsFormat, Utc};

/// Storefront local time is Asia/Karachi, which has had no DST since 2009.
const STOREFRONT_UTC_OFFSET_SECS: i32 = 5 * 3600;

pub(crate) mod helper {
    #[cfg(not(test))]
    pub use super::get_utc_now;
    #[cfg(test)]
    pub use super::mock_chrono::{get_utc_now, set_utc_now};
}


#[cfg(not(test))]
pub fn get_utc_now() -> DateTime<Utc> {
    Utc::now()
}

/// ISO-8601 with millisecond precision and a `Z` suffix, e.g. `2024-05-01T09:30:00.000Z`.
pub(crate) fn to_iso_millis(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Human-readable storefront time, e.g. `01/05/2024, 02:30:00 pm`.
pub(crate) fn to_storefront_local(ts: &DateTime<Utc>) -> String {
    let tz = FixedOffset::east_opt(STOREFRONT_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix());
    ts.with_timezone(&tz)
        .format("%d/%m/%Y, %I:%M:%S %P")
        .to_string()
}

/// serde adapter keeping timestamps in the `to_iso_millis` shape on disk and on the wire.
pub(crate) mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::to_iso_millis(ts))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}
