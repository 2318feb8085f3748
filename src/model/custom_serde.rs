//! Custom serialization methods used throughout the crate.

pub mod duration_ms {
    use chrono::Duration;
    use serde::{Serializer, de};
    use std::fmt;

    /// Visitor to help deserialize a duration represented as milliseconds
    /// into a `chrono::Duration`.
    struct DurationVisitor;
    impl de::Visitor<'_> for DurationVisitor {
        type Value = Duration;
        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            write!(formatter, "a duration in milliseconds")
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Duration::try_milliseconds(v).ok_or_else(|| {
                E::invalid_value(de::Unexpected::Signed(v), &"a duration in milliseconds")
            })
        }

        // JSON deserializers call visit_u64 for non-negative integers
        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            let v = i64::try_from(v).map_err(|_| {
                E::invalid_value(de::Unexpected::Unsigned(v), &"a duration in milliseconds")
            })?;
            self.visit_i64(v)
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Duration, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_i64(DurationVisitor)
    }

    pub fn serialize<S>(x: &Duration, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_i64(x.num_milliseconds())
    }
}

pub mod duration_second {
    use chrono::Duration;
    use serde::{Deserialize, Serializer, de};

    /// Deserialize `chrono::Duration` from seconds.
    pub fn deserialize<'de, D>(d: D) -> Result<Duration, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let duration: i64 = Deserialize::deserialize(d)?;
        Duration::try_seconds(duration).ok_or_else(|| {
            de::Error::invalid_value(de::Unexpected::Signed(duration), &"a duration in seconds")
        })
    }

    /// Serialize `chrono::Duration` to seconds.
    pub fn serialize<S>(x: &Duration, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_i64(x.num_seconds())
    }
}

pub mod space_separated_scopes {
    use serde::{Deserialize, Serializer, de};
    use std::collections::HashSet;

    pub fn deserialize<'de, D>(d: D) -> Result<HashSet<String>, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let scopes: String = Deserialize::deserialize(d)?;
        Ok(scopes.split_whitespace().map(ToOwned::to_owned).collect())
    }

    pub fn serialize<S>(scopes: &HashSet<String>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let scopes = scopes.iter().cloned().collect::<Vec<_>>().join(" ");
        s.serialize_str(&scopes)
    }
}

/// Deserializer that treats a JSON `null` as the type's default, for fields
/// the API documents as non-null but occasionally nulls anyway (playlist
/// `images` being the known offender).
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    T: Default + serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize as _;
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}
