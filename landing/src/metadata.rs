//! schema.org `LocalBusiness` JSON-LD for crawlers.
//!
//! Derived from [`BusinessConfig`] and the service cards on every render.
//! Field order is fixed by the struct layout, so the same config always
//! serializes to the same bytes.

use serde::Serialize;
use tracing::warn;

use crate::config::BusinessConfig;
use crate::content::ServiceOffering;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Top-level JSON-LD object.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalBusiness {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
    pub telephone: String,
    pub email: String,
    pub image: String,
    pub address: PostalAddressLd,
    pub area_served: Vec<String>,
    pub aggregate_rating: AggregateRating,
    pub makes_offer: Vec<Offer>,
    pub opening_hours: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddressLd {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub address_locality: String,
    pub address_region: String,
    pub address_country: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRating {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub rating_value: f64,
    pub review_count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub item_offered: OfferedService,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OfferedService {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
}

impl LocalBusiness {
    /// Describe the business and the offered services.
    pub fn from_config(config: &BusinessConfig, services: &[ServiceOffering]) -> Self {
        let address = config.address();
        Self {
            context: SCHEMA_CONTEXT,
            kind: "LocalBusiness",
            name: config.display_name().to_string(),
            url: config.canonical_url().to_string(),
            telephone: config.phone_display().to_string(),
            email: config.email().to_string(),
            image: config.image_url().to_string(),
            address: PostalAddressLd {
                kind: "PostalAddress",
                address_locality: address.locality.clone(),
                address_region: address.region.clone(),
                address_country: address.country.clone(),
            },
            area_served: config.service_areas().to_vec(),
            aggregate_rating: AggregateRating {
                kind: "AggregateRating",
                rating_value: config.average_rating(),
                review_count: config.review_count(),
            },
            makes_offer: services
                .iter()
                .map(|service| Offer {
                    kind: "Offer",
                    item_offered: OfferedService {
                        kind: "Service",
                        name: service.title.clone(),
                    },
                })
                .collect(),
            opening_hours: config.opening_hours().schema_value(),
        }
    }

    /// Compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Body of the `<script type="application/ld+json">` element.
///
/// `</` is written as `<\/` so no config value can close the script early.
/// Serialization failure degrades to `{}`; the page still renders.
pub fn json_ld_script_body(config: &BusinessConfig, services: &[ServiceOffering]) -> String {
    match LocalBusiness::from_config(config, services).to_json() {
        Ok(json) => json.replace("</", "<\\/"),
        Err(err) => {
            warn!(error = %err, "structured metadata could not be serialized, emitting empty object");
            "{}".to_string()
        }
    }
}
