//! Offset-based paging container.

use serde::{Deserialize, Serialize};

/// Custom deserializer to handle `Vec<Option<T>>` and filter out `None`
/// values. Lists may contain nulls for items that have been removed from
/// the catalog or relinked away.
fn vec_without_nulls<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    let v = Vec::<Option<T>>::deserialize(deserializer)?;
    Ok(v.into_iter().flatten().collect())
}

/// Paging object wrapping every list endpoint response.
///
/// [Reference](https://developer.spotify.com/documentation/web-api/concepts/api-calls#pagination)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub href: Option<String>,
    #[serde(deserialize_with = "vec_without_nulls")]
    pub items: Vec<T>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
    /// URL of the next page of items, if any.
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub total: u32,
}

impl<T> Page<T> {
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_items_are_dropped() {
        let page: Page<String> = serde_json::from_str(
            r#"{"items": ["a", null, "b"], "total": 3, "next": null}"#,
        )
        .unwrap();
        assert_eq!(page.items, ["a", "b"]);
        assert_eq!(page.total, 3);
        assert!(page.is_last());
    }
}
