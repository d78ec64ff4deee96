//! PageSpeed Insights request and response types.
//!
//! The response side is a deliberately partial schema: every field the
//! service reads is optional, and everything else in the (very large)
//! Lighthouse payload is ignored.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Request
// =============================================================================

/// Device profile used for the Lighthouse run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Mobile,
    Desktop,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lighthouse category requested from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Performance,
    Accessibility,
    BestPractices,
    Seo,
}

impl Category {
    /// All four categories, in the order they are requested.
    pub const ALL: [Category; 4] = [
        Category::Performance,
        Category::Accessibility,
        Category::BestPractices,
        Category::Seo,
    ];

    /// Wire name, also the key under `lighthouseResult.categories`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Performance => "performance",
            Self::Accessibility => "accessibility",
            Self::BestPractices => "best-practices",
            Self::Seo => "seo",
        }
    }
}

// =============================================================================
// Response
// =============================================================================

/// Raw JSON body of one successful `runPagespeed` call.
///
/// Kept opaque so that a body with unexpected shapes still reaches the
/// caller; typed access goes through [`RawAnalysis::lighthouse`].
#[derive(Debug, Clone, PartialEq)]
pub struct RawAnalysis {
    body: Value,
}

impl RawAnalysis {
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    pub fn as_value(&self) -> &Value {
        &self.body
    }

    pub fn into_value(self) -> Value {
        self.body
    }

    /// Typed view of `lighthouseResult`.
    ///
    /// Returns `Ok(None)` when the field is missing or null, and an error only
    /// when it is not an object. Inside the object every category, audit and
    /// field is read on its own: a wrongly-typed value is treated as absent
    /// and never affects its neighbours.
    pub fn lighthouse(&self) -> std::result::Result<Option<LighthouseResult>, serde_json::Error> {
        match self.body.get("lighthouseResult") {
            None | Some(Value::Null) => Ok(None),
            Some(value @ Value::Object(_)) => LighthouseResult::deserialize(value).map(Some),
            Some(_) => Err(de::Error::custom("lighthouseResult is not an object")),
        }
    }

    pub fn has_lighthouse_result(&self) -> bool {
        self.has_field("lighthouseResult")
    }

    pub fn has_loading_experience(&self) -> bool {
        self.has_field("loadingExperience")
    }

    pub fn has_origin_loading_experience(&self) -> bool {
        self.has_field("originLoadingExperience")
    }

    fn has_field(&self, name: &str) -> bool {
        self.body.get(name).is_some_and(|v| !v.is_null())
    }
}

/// The part of `lighthouseResult` the service consumes.
///
/// Entries that do not fit their schema are kept under their key as `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LighthouseResult {
    #[serde(default, deserialize_with = "lenient")]
    pub final_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_entries")]
    pub categories: Option<BTreeMap<String, Option<CategoryResult>>>,
    #[serde(default, deserialize_with = "lenient_entries")]
    pub audits: Option<BTreeMap<String, Option<AuditResult>>>,
}

impl LighthouseResult {
    pub fn category(&self, category: Category) -> Option<&CategoryResult> {
        self.category_named(category.as_str())
    }

    pub fn category_named(&self, name: &str) -> Option<&CategoryResult> {
        self.categories.as_ref()?.get(name)?.as_ref()
    }

    pub fn audit(&self, id: &str) -> Option<&AuditResult> {
        self.audits.as_ref()?.get(id)?.as_ref()
    }

    /// Names of all categories present in the payload.
    pub fn category_names(&self) -> Vec<String> {
        self.categories
            .as_ref()
            .map(|c| c.keys().cloned().collect())
            .unwrap_or_default()
    }
}

/// A Lighthouse category (`score` is 0.0-1.0, or null when not computed).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryResult {
    #[serde(default, deserialize_with = "lenient")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
}

/// A single Lighthouse audit.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    #[serde(default, deserialize_with = "lenient")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub numeric_value: Option<f64>,
}

/// A field that does not fit `T` reads as absent.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Keyed entries read one by one; a non-object container reads as absent.
fn lenient_entries<'de, D, T>(
    deserializer: D,
) -> std::result::Result<Option<BTreeMap<String, Option<T>>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };

    Ok(Some(
        entries
            .into_iter()
            .map(|(key, value)| {
                let entry = match value {
                    Value::Object(_) => T::deserialize(value).ok(),
                    _ => None,
                };
                (key, entry)
            })
            .collect(),
    ))
}

/// Error body returned with non-200 statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorDetail {
    pub code: Option<u16>,
    pub message: Option<String>,
}
