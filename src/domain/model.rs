use serde::{Deserialize, Deserializer, Serialize};

/// Treat a JSON `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A named color with its hex code and complementary colors, as served upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hex: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comp: Vec<CompColor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompColor {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hex: String,
}

/// Search filter. Every field is optional; `None`, `""` and whitespace-only
/// values impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    #[serde(default, alias = "compName", skip_serializing_if = "Option::is_none")]
    pub comp_name: Option<String>,
    #[serde(default, alias = "compHex", skip_serializing_if = "Option::is_none")]
    pub comp_hex: Option<String>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn hex(mut self, hex: impl Into<String>) -> Self {
        self.hex = Some(hex.into());
        self
    }

    pub fn comp_name(mut self, comp_name: impl Into<String>) -> Self {
        self.comp_name = Some(comp_name.into());
        self
    }

    pub fn comp_hex(mut self, comp_hex: impl Into<String>) -> Self {
        self.comp_hex = Some(comp_hex.into());
        self
    }

    /// True when no field would constrain a search.
    pub fn is_empty(&self) -> bool {
        [&self.name, &self.hex, &self.comp_name, &self.comp_hex]
            .iter()
            .all(|field| field.as_deref().map_or(true, |v| v.trim().is_empty()))
    }

    /// 以 `other` 中有值的欄位覆蓋目前的條件
    pub fn merge(self, other: Criteria) -> Self {
        Self {
            name: other.name.or(self.name),
            hex: other.hex.or(self.hex),
            comp_name: other.comp_name.or(self.comp_name),
            comp_hex: other.comp_hex.or(self.comp_hex),
        }
    }
}
