use serde::{Deserialize, Deserializer, Serialize};

/// A recipe as returned by the recipe database.
///
/// Two recipes are the same recipe when their `id`s are equal, whatever the
/// other fields hold.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default, deserialize_with = "null_as_empty")]
    pub thumbnail: String,
}

// The API sends `null` for some missing thumbnails
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Recipe {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        Recipe {
            id: id.into(),
            name: name.into(),
            thumbnail: thumbnail.into(),
        }
    }
}
