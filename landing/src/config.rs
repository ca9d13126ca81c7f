//! Business configuration: identity, contact channels, service areas.
//!
//! Every phone number, email address and area name on the page is read from a
//! [`BusinessConfig`]. A config only exists in validated form: fill in a
//! [`BusinessConfigDraft`] (or a TOML file) and convert it.
//!
//! # Example
//!
//! ```rust
//! use caulking_landing::config::{BusinessConfig, BusinessConfigDraft};
//!
//! let config = BusinessConfig::try_from(BusinessConfigDraft::toronto_caulking()).unwrap();
//! assert_eq!(config.tel_href(), "tel:+16475550199");
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation and loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required text field is empty or whitespace
    #[error("`{0}` must not be blank")]
    Blank(&'static str),
    /// Dialable phone is not in E.164 form
    #[error("phone_dialable {0:?} is not an E.164 number (expected +<country><number>)")]
    InvalidDialablePhone(String),
    /// Email lacks a local part or domain
    #[error("email {0:?} is not a valid address")]
    InvalidEmail(String),
    /// Canonical or image URL is not http(s)
    #[error("url {0:?} must start with http:// or https://")]
    InvalidUrl(String),
    /// No service area configured
    #[error("service_areas must list at least one area")]
    NoServiceAreas,
    /// Service area listed twice (case-insensitive)
    #[error("service area {0:?} is listed more than once")]
    DuplicateServiceArea(String),
    /// Rating outside [0, 5] or not finite
    #[error("average_rating {0} must be within 0..=5")]
    RatingOutOfRange(f64),
    /// Opening hours are malformed
    #[error("opening hours {opens:?}-{closes:?} must be HH:MM with opens before closes")]
    InvalidHours {
        /// Opening time as configured
        opens: String,
        /// Closing time as configured
        closes: String,
    },
    /// Palette entry is not a hex color
    #[error("palette.{field} {value:?} is not a #RGB or #RRGGBB color")]
    InvalidColor {
        /// Palette field name
        field: &'static str,
        /// Offending value
        value: String,
    },
    /// Config file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },
    /// Config file is not valid TOML for a draft
    #[error("failed to parse config{}: {source}", display_path(.path))]
    Parse {
        /// File that failed, when loaded from disk
        path: Option<PathBuf>,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}

/// Postal address fragment used by the structured metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    /// City, e.g. "Toronto"
    pub locality: String,
    /// Province/state code, e.g. "ON"
    pub region: String,
    /// ISO country code, e.g. "CA"
    pub country: String,
}

/// Weekly opening hours in the schema.org `Days HH:MM-HH:MM` convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    /// Day range, e.g. "Mo-Sa"
    pub days: String,
    /// Opening time, "HH:MM"
    pub opens: String,
    /// Closing time, "HH:MM"
    pub closes: String,
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|path| format!(" {}", path.display()))
        .unwrap_or_default()
}

impl OpeningHours {
    /// Value for the `openingHours` metadata field, e.g. `Mo-Sa 08:00-20:00`.
    pub fn schema_value(&self) -> String {
        format!("{} {}-{}", self.days, self.opens, self.closes)
    }
}

/// Brand colors; every value is a CSS hex color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Links and CTAs
    pub primary: String,
    /// CTA hover
    pub primary_hover: String,
    /// Highlights (bullet sparkles, stars)
    pub accent: String,
    /// Body text
    pub dark: String,
    /// Alternating section background
    pub light: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#005EB8".into(),
            primary_hover: "#0B6FD1".into(),
            accent: "#FFB81C".into(),
            dark: "#0B1220".into(),
            light: "#F9FAFB".into(),
        }
    }
}

/// Unvalidated configuration, the shape of the TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessConfigDraft {
    pub display_name: String,
    pub tagline: String,
    /// Human-readable phone, e.g. "+1 (647) 555-0199"
    pub phone_display: String,
    /// E.164 phone used in `tel:` and `sms:` links
    pub phone_dialable: String,
    pub email: String,
    pub canonical_url: String,
    pub image_url: String,
    pub service_areas: Vec<String>,
    pub average_rating: f64,
    pub review_count: u32,
    pub address: PostalAddress,
    pub opening_hours: OpeningHours,
    #[serde(default)]
    pub palette: Palette,
}

impl BusinessConfigDraft {
    /// The Toronto Caulking & Grout brand.
    pub fn toronto_caulking() -> Self {
        Self {
            display_name: "Toronto Caulking & Grout".into(),
            tagline: "Caulking • Grout • Tile".into(),
            phone_display: "+1 (647) 555-0199".into(),
            phone_dialable: "+16475550199".into(),
            email: "quote@toronto-caulking.com".into(),
            canonical_url: "https://example.com".into(),
            image_url: "https://images.unsplash.com/photo-1615870216515-9f539f205e67?auto=format&fit=crop&w=1200&q=60".into(),
            service_areas: [
                "Toronto",
                "North York",
                "Etobicoke",
                "Scarborough",
                "Mississauga",
                "Vaughan",
                "Richmond Hill",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            average_rating: 4.9,
            review_count: 88,
            address: PostalAddress {
                locality: "Toronto".into(),
                region: "ON".into(),
                country: "CA".into(),
            },
            opening_hours: OpeningHours {
                days: "Mo-Sa".into(),
                opens: "08:00".into(),
                closes: "20:00".into(),
            },
            palette: Palette::default(),
        }
    }
}

/// Validated, read-only business configuration.
///
/// Built once at startup and passed by reference (or clone) into every
/// component. There are no setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BusinessConfigDraft")]
pub struct BusinessConfig {
    display_name: String,
    tagline: String,
    phone_display: String,
    phone_dialable: String,
    email: String,
    canonical_url: String,
    image_url: String,
    service_areas: Vec<String>,
    average_rating: f64,
    review_count: u32,
    address: PostalAddress,
    opening_hours: OpeningHours,
    palette: Palette,
}

impl TryFrom<BusinessConfigDraft> for BusinessConfig {
    type Error = ConfigError;

    fn try_from(draft: BusinessConfigDraft) -> Result<Self, Self::Error> {
        require("display_name", &draft.display_name)?;
        require("tagline", &draft.tagline)?;
        require("phone_display", &draft.phone_display)?;
        require("address.locality", &draft.address.locality)?;
        require("address.region", &draft.address.region)?;
        require("address.country", &draft.address.country)?;
        require("opening_hours.days", &draft.opening_hours.days)?;

        if !e164_re().is_match(&draft.phone_dialable) {
            return Err(ConfigError::InvalidDialablePhone(draft.phone_dialable));
        }
        if !is_email(&draft.email) {
            return Err(ConfigError::InvalidEmail(draft.email));
        }
        for (field, url) in [("canonical_url", &draft.canonical_url), ("image_url", &draft.image_url)] {
            require(field, url)?;
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }

        validate_areas(&draft.service_areas)?;

        if !draft.average_rating.is_finite() || !(0.0..=5.0).contains(&draft.average_rating) {
            return Err(ConfigError::RatingOutOfRange(draft.average_rating));
        }

        let hours = &draft.opening_hours;
        let well_formed = hhmm_re().is_match(&hours.opens) && hhmm_re().is_match(&hours.closes);
        // Zero-padded HH:MM orders lexicographically
        if !well_formed || hours.opens >= hours.closes {
            return Err(ConfigError::InvalidHours {
                opens: hours.opens.clone(),
                closes: hours.closes.clone(),
            });
        }

        let palette = &draft.palette;
        for (field, value) in [
            ("primary", &palette.primary),
            ("primary_hover", &palette.primary_hover),
            ("accent", &palette.accent),
            ("dark", &palette.dark),
            ("light", &palette.light),
        ] {
            if !hex_color_re().is_match(value) {
                return Err(ConfigError::InvalidColor {
                    field,
                    value: value.clone(),
                });
            }
        }

        Ok(Self {
            display_name: draft.display_name,
            tagline: draft.tagline,
            phone_display: draft.phone_display,
            phone_dialable: draft.phone_dialable,
            email: draft.email,
            canonical_url: draft.canonical_url,
            image_url: draft.image_url,
            service_areas: draft.service_areas,
            average_rating: draft.average_rating,
            review_count: draft.review_count,
            address: draft.address,
            opening_hours: draft.opening_hours,
            palette: draft.palette,
        })
    }
}

impl BusinessConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let draft: BusinessConfigDraft =
            toml::from_str(content).map_err(|source| ConfigError::Parse { path: None, source })?;
        Self::try_from(draft)
    }

    /// Load and validate a TOML config file.
    ///
    /// Unlike optional tool settings, a missing business config is an error:
    /// the page cannot be rendered without contact data.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let draft: BusinessConfigDraft = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })?;
        Self::try_from(draft)
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    pub fn phone_display(&self) -> &str {
        &self.phone_display
    }

    pub fn phone_dialable(&self) -> &str {
        &self.phone_dialable
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn canonical_url(&self) -> &str {
        &self.canonical_url
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Areas in configured order.
    pub fn service_areas(&self) -> &[String] {
        &self.service_areas
    }

    pub fn average_rating(&self) -> f64 {
        self.average_rating
    }

    pub fn review_count(&self) -> u32 {
        self.review_count
    }

    pub fn address(&self) -> &PostalAddress {
        &self.address
    }

    pub fn opening_hours(&self) -> &OpeningHours {
        &self.opening_hours
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// `tel:` link built from the dialable phone, unmodified.
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone_dialable)
    }

    /// `sms:` link built from the dialable phone, unmodified.
    pub fn sms_href(&self) -> String {
        format!("sms:{}", self.phone_dialable)
    }

    /// `mailto:` link built from the email, unmodified.
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Blank(field));
    }
    Ok(())
}

fn validate_areas(areas: &[String]) -> Result<(), ConfigError> {
    if areas.is_empty() {
        return Err(ConfigError::NoServiceAreas);
    }
    let mut seen = HashSet::new();
    for area in areas {
        let key = area.trim().to_lowercase();
        if key.is_empty() {
            return Err(ConfigError::Blank("service_areas[]"));
        }
        if !seen.insert(key) {
            return Err(ConfigError::DuplicateServiceArea(area.clone()));
        }
    }
    Ok(())
}

fn is_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.trim().is_empty() && !domain.trim().is_empty() && !value.contains(char::is_whitespace)
        }
        _ => false,
    }
}

fn e164_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+[1-9][0-9]{6,14}$").expect("E.164 pattern compiles"))
}

fn hhmm_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("HH:MM pattern compiles"))
}

fn hex_color_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").expect("hex color pattern compiles"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn preset() -> BusinessConfigDraft {
        BusinessConfigDraft::toronto_caulking()
    }

    #[test]
    fn preset_validates() {
        let config = BusinessConfig::try_from(preset()).unwrap();
        assert_eq!(config.display_name(), "Toronto Caulking & Grout");
        assert_eq!(config.tel_href(), "tel:+16475550199");
        assert_eq!(config.sms_href(), "sms:+16475550199");
        assert_eq!(config.mailto_href(), "mailto:quote@toronto-caulking.com");
        assert_eq!(config.opening_hours().schema_value(), "Mo-Sa 08:00-20:00");
        assert_eq!(config.service_areas().len(), 7);
    }

    #[test]
    fn rejects_blank_name() {
        let mut draft = preset();
        draft.display_name = "   ".into();
        assert!(matches!(
            BusinessConfig::try_from(draft),
            Err(ConfigError::Blank("display_name"))
        ));
    }

    #[test]
    fn rejects_formatted_dialable_phone() {
        let mut draft = preset();
        draft.phone_dialable = "+1 (647) 555-0199".into();
        assert!(matches!(
            BusinessConfig::try_from(draft),
            Err(ConfigError::InvalidDialablePhone(_))
        ));
    }

    #[test]
    fn rejects_bad_email() {
        for email in ["quote", "@toronto-caulking.com", "a@b@c", "quote @x.com"] {
            let mut draft = preset();
            draft.email = email.into();
            assert!(
                matches!(BusinessConfig::try_from(draft), Err(ConfigError::InvalidEmail(_))),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_empty_and_duplicate_areas() {
        let mut draft = preset();
        draft.service_areas.clear();
        assert!(matches!(
            BusinessConfig::try_from(draft),
            Err(ConfigError::NoServiceAreas)
        ));

        let mut draft = preset();
        draft.service_areas.push(" toronto ".into());
        assert!(matches!(
            BusinessConfig::try_from(draft),
            Err(ConfigError::DuplicateServiceArea(area)) if area == " toronto "
        ));
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        for rating in [0.0, 5.0] {
            let mut draft = preset();
            draft.average_rating = rating;
            assert!(BusinessConfig::try_from(draft).is_ok());
        }
        for rating in [-0.1, 5.1, f64::NAN] {
            let mut draft = preset();
            draft.average_rating = rating;
            assert!(matches!(
                BusinessConfig::try_from(draft),
                Err(ConfigError::RatingOutOfRange(_))
            ));
        }
    }

    #[test]
    fn rejects_inverted_hours() {
        let mut draft = preset();
        draft.opening_hours.opens = "20:00".into();
        draft.opening_hours.closes = "08:00".into();
        assert!(matches!(
            BusinessConfig::try_from(draft),
            Err(ConfigError::InvalidHours { .. })
        ));

        let mut draft = preset();
        draft.opening_hours.opens = "8:00".into();
        assert!(BusinessConfig::try_from(draft).is_err());
    }

    #[test]
    fn rejects_named_color() {
        let mut draft = preset();
        draft.palette.accent = "gold".into();
        assert!(matches!(
            BusinessConfig::try_from(draft),
            Err(ConfigError::InvalidColor { field: "accent", .. })
        ));
    }

    #[test]
    fn loads_toml_with_default_palette() {
        let toml = r#"
display_name = "Halifax Grout Co"
tagline = "Grout • Tile"
phone_display = "+1 (902) 555-0101"
phone_dialable = "+19025550101"
email = "hi@halifax-grout.ca"
canonical_url = "https://halifax-grout.ca"
image_url = "https://halifax-grout.ca/hero.jpg"
service_areas = ["Halifax", "Dartmouth"]
average_rating = 4.7
review_count = 12

[address]
locality = "Halifax"
region = "NS"
country = "CA"

[opening_hours]
days = "Mo-Fr"
opens = "09:00"
closes = "17:00"
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml.as_bytes()).unwrap();

        let config = BusinessConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.service_areas(), ["Halifax", "Dartmouth"]);
        assert_eq!(config.palette(), &Palette::default());
        assert_eq!(config.tel_href(), "tel:+19025550101");
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let err = BusinessConfig::from_toml_str("display_name = \"X\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: None, .. }));
        assert!(err.to_string().starts_with("failed to parse config: "));
    }

    #[test]
    fn parse_error_names_the_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"display_name = [").unwrap();

        let err = BusinessConfig::load_from_path(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { path: Some(_), .. }));
        let expected = format!("failed to parse config {}: ", file.path().display());
        assert!(err.to_string().starts_with(&expected), "{err}");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = BusinessConfig::load_from_path(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn serde_json_runs_validation() {
        let mut value = serde_json::to_value(preset()).unwrap();
        value["average_rating"] = serde_json::json!(7.5);
        let result: Result<BusinessConfig, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }
}
