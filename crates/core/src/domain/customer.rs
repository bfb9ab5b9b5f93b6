use serde::{Deserialize, Serialize};

/// Opaque customer category identifier, resolved against the category
/// registry at pricing time.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryKey(pub String);

impl CategoryKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryKey {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for CategoryKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub category_key: CategoryKey,
}

impl Customer {
    pub fn new(name: impl Into<String>, category_key: impl Into<CategoryKey>) -> Self {
        Self { name: name.into(), category_key: category_key.into() }
    }
}
