// this_file: fontindex/src/font.rs
//
// Catalog record validation and font description extraction

use crate::{FontindexError, Result};
use chrono::NaiveDate;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// A raw font record as returned by the web fonts listing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webfont {
    /// Family name, e.g. "Open Sans"
    pub family: Option<String>,

    /// Version string of the form "v<digits>"
    pub version: Option<String>,

    /// Category such as "serif" or "sans-serif"
    pub category: Option<String>,

    /// Date string of the form "YYYY-MM-DD"
    pub last_modified: Option<String>,

    /// Variant key to font file URL
    pub files: Option<IndexMap<String, String>>,

    /// Available variants
    pub variants: Option<Vec<String>>,

    /// Supported subsets
    pub subsets: Option<Vec<String>>,
}

impl Webfont {
    /// Decode one listing item, treating a wrongly typed field as an invalid record
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        Webfont::deserialize(value).map_err(|e| {
            let family = value.get("family").and_then(|f| f.as_str()).unwrap_or("<unknown>");
            FontindexError::Record(format!("Invalid record for {}: {}", family, e))
        })
    }
}

/// Normalized description of a single font family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontDescription {
    /// Lowercase, hyphenated family name
    pub id: String,

    /// Family name as published
    pub display_name: String,

    /// Numeric family version
    pub version: i64,

    /// `type:`, `subset:` and `variant:` tags, in that order
    pub tags: Vec<String>,

    /// Last modification as Unix seconds, `None` if the date was malformed
    #[serde(rename = "lastModified")]
    pub last_modified: Option<i64>,

    /// Variants as published
    pub variants: Vec<String>,

    /// Variant key to scheme-less file URL
    pub files: IndexMap<String, String>,
}

impl FontDescription {
    /// Validate a raw catalog record and derive its description.
    ///
    /// Any missing required field, an unparseable version or an unparseable
    /// file URL is an error. A malformed modification date is not: it is
    /// logged and stored as `None`.
    pub fn from_webfont(font: &Webfont) -> Result<Self> {
        let family = required(&font.family, "family")?;
        let version = required(&font.version, "version")?;
        let category = required(&font.category, "category")?;
        let last_modified = required(&font.last_modified, "lastModified")?;
        let files = font.files.as_ref().ok_or_else(|| missing("files"))?;
        let variants = font.variants.as_ref().ok_or_else(|| missing("variants"))?;

        let id = name_to_id(family);

        let subsets = font.subsets.as_deref().unwrap_or_default();
        let mut tags = Vec::with_capacity(1 + subsets.len() + variants.len());
        tags.push(format!("type:{}", category));
        tags.extend(subsets.iter().map(|subset| format!("subset:{}", subset)));
        tags.extend(variants.iter().map(|variant| format!("variant:{}", variant)));

        let mut stripped = IndexMap::with_capacity(files.len());
        for (variant, original) in files {
            stripped.insert(variant.clone(), strip_scheme(original)?);
        }

        let timestamp = date_string_to_timestamp(last_modified);
        if timestamp.is_none() {
            log::warn!(
                "Malformed lastModified {:?} for {}, storing null",
                last_modified,
                family
            );
        }

        Ok(FontDescription {
            id,
            display_name: family.to_string(),
            version: version_to_number(version)?,
            tags,
            last_modified: timestamp,
            variants: variants.clone(),
            files: stripped,
        })
    }

    /// Rebuild the full download URL of a variant
    pub fn file_url(&self, variant: &str) -> Option<String> {
        self.files.get(variant).map(|file| format!("https://{}", file))
    }

    /// Check whether the description carries every given tag
    pub fn has_tags(&self, tags: &[String]) -> bool {
        tags.iter().all(|tag| self.tags.contains(tag))
    }
}

fn missing(field: &str) -> FontindexError {
    FontindexError::Record(format!("font.{} is null!", field))
}

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing(field)),
    }
}

/// Derive a font id from a family name
pub fn name_to_id(name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

/// Parse a "v<digits>" version string, ignoring its first character
pub fn version_to_number(version: &str) -> Result<i64> {
    let mut chars = version.chars();
    chars.next();
    chars
        .as_str()
        .parse::<i64>()
        .map_err(|_| FontindexError::Record(format!("Invalid version: {}", version)))
}

/// Convert a "YYYY-MM-DD" date to Unix seconds at midnight UTC.
///
/// Empty segments are skipped, so "2021--01-15" still parses. Anything that
/// does not yield exactly three numeric segments forming a real date gives
/// `None`.
pub fn date_string_to_timestamp(date: &str) -> Option<i64> {
    let parts: Vec<&str> = date.split('-').filter(|part| !part.is_empty()).collect();
    let [year, month, day] = parts.as_slice() else {
        return None;
    };

    let date = NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp())
}

/// Drop the "<scheme>://" prefix of a URL
pub fn strip_scheme(original: &str) -> Result<String> {
    let url = Url::parse(original)
        .map_err(|e| FontindexError::Record(format!("Invalid file URL {}: {}", original, e)))?;

    let rest = &url.as_str()[url.scheme().len() + 1..];
    Ok(rest.strip_prefix("//").unwrap_or(rest).to_string())
}
