use serde::{Deserialize, Deserializer};

pub mod auth;
pub mod catalog;
pub mod content;
pub mod people;
pub mod site;

/// Tells an absent field (`None`) apart from an explicit `null` (`Some(None)`),
/// so updates can clear nullable columns.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        category_id: Option<Option<Uuid>>,
    }

    #[test]
    fn absent_null_and_value_are_distinct() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.category_id, None);

        let null: Patch = serde_json::from_str(r#"{"category_id":null}"#).unwrap();
        assert_eq!(null.category_id, Some(None));

        let id = Uuid::new_v4();
        let set: Patch = serde_json::from_str(&format!(r#"{{"category_id":"{id}"}}"#)).unwrap();
        assert_eq!(set.category_id, Some(Some(id)));
    }
}
