pub mod serializer {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time_to_json(*time).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = DateTime::parse_from_rfc3339(&str_time).map_err(D::Error::custom)?;
        Ok(time.naive_utc())
    }

    fn time_to_json(t: NaiveDateTime) -> String {
        t.and_utc().to_rfc3339()
    }
}
