//! Hand-authored page content: hero copy, service cards, gallery, reviews, FAQ.
//!
//! Content holds no contact data. Anything that names the phone, email or
//! service areas is derived from [`BusinessConfig`] at render time.
//!
//! ```rust
//! use caulking_landing::content::PageContent;
//!
//! let content = PageContent::toronto_caulking();
//! assert_eq!(content.faqs.len(), 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::BusinessConfig;

/// The services a lead can pick in the form's select box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    BathtubShowerRecaulking,
    KitchenSinkCaulking,
    GroutCleaningSealing,
    MinorTileRepair,
}

impl ServiceKind {
    /// Options in select-box order.
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::BathtubShowerRecaulking,
        ServiceKind::KitchenSinkCaulking,
        ServiceKind::GroutCleaningSealing,
        ServiceKind::MinorTileRepair,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ServiceKind::BathtubShowerRecaulking => "Bathtub / Shower Re-Caulking",
            ServiceKind::KitchenSinkCaulking => "Kitchen Sink Caulking",
            ServiceKind::GroutCleaningSealing => "Grout Cleaning & Sealing",
            ServiceKind::MinorTileRepair => "Minor Tile Repair",
        }
    }

    /// Stable form value (`<option value=...>`).
    pub fn slug(self) -> &'static str {
        match self {
            ServiceKind::BathtubShowerRecaulking => "bathtub_shower_recaulking",
            ServiceKind::KitchenSinkCaulking => "kitchen_sink_caulking",
            ServiceKind::GroutCleaningSealing => "grout_cleaning_sealing",
            ServiceKind::MinorTileRepair => "minor_tile_repair",
        }
    }

    /// Inverse of [`ServiceKind::slug`].
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

/// A service card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub title: String,
    /// External image; a broken image only loses decoration
    pub image_url: String,
    pub bullet_points: Vec<String>,
}

/// A customer quote. Every review shown on this page is five stars.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub text: String,
    pub star_rating: u8,
    /// Where the review was left, e.g. "Via Google Reviews"
    pub source: String,
}

impl Testimonial {
    /// Five-star review from the given source.
    pub fn five_star(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            star_rating: 5,
            source: source.into(),
        }
    }
}

/// One accordion entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Before/after photo tile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryTile {
    pub image_url: String,
    pub caption: String,
}

/// Trust-strip badge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustBadge {
    pub title: String,
    pub description: String,
}

/// Hero panel copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroCopy {
    pub headline: String,
    pub subheadline: String,
    pub selling_points: Vec<String>,
    /// Text of the phone CTA
    pub call_label: String,
    /// Text of the jump link to the quote form
    pub quote_link_label: String,
    /// Prefix of the "serving" line, e.g. "Licensed & insured"
    pub assurance: String,
}

/// All static content arrays for one page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub hero: HeroCopy,
    /// Badges that do not depend on config; rating and coverage badges are appended
    pub static_badges: Vec<TrustBadge>,
    pub services: Vec<ServiceOffering>,
    pub gallery: Vec<GalleryTile>,
    pub testimonials: Vec<Testimonial>,
    pub faqs: Vec<FaqEntry>,
    /// Heading above the service-area list
    pub areas_heading: String,
    /// Footer blurb next to the repeated CTA
    pub footer_blurb: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl PageContent {
    /// Content for the Toronto Caulking & Grout page.
    pub fn toronto_caulking() -> Self {
        Self {
            hero: HeroCopy {
                headline: "Toronto’s Trusted Caulking & Grout Experts".into(),
                subheadline: "Mold-resistant caulking and professional grout cleaning. Same-day or next-day service across the GTA.".into(),
                selling_points: strings(&[
                    "12-month warranty",
                    "Premium mold-resistant silicone",
                    "On-time arrival",
                    "No mess, no odor",
                ]),
                call_label: "Free Phone Estimate".into(),
                quote_link_label: "See Prices".into(),
                assurance: "Licensed & insured".into(),
            },
            static_badges: vec![
                TrustBadge {
                    title: "Same-day available".into(),
                    description: "If booked before 12:00".into(),
                },
                TrustBadge {
                    title: "12-month warranty".into(),
                    description: "Mold-resistant silicone".into(),
                },
            ],
            services: vec![
                ServiceOffering {
                    title: ServiceKind::BathtubShowerRecaulking.label().into(),
                    image_url: "https://images.unsplash.com/photo-1615870216515-9f539f205e67?auto=format&fit=crop&w=1200&q=60".into(),
                    bullet_points: strings(&["Remove old bead", "Clean & disinfect", "Apply sanitary silicone"]),
                },
                ServiceOffering {
                    title: ServiceKind::GroutCleaningSealing.label().into(),
                    image_url: "https://images.unsplash.com/photo-1556909114-56eb2fe3f4fd?auto=format&fit=crop&w=1200&q=60".into(),
                    bullet_points: strings(&["Deep clean", "Recolor if needed", "Hydrophobic sealant"]),
                },
                ServiceOffering {
                    title: ServiceKind::KitchenSinkCaulking.label().into(),
                    image_url: "https://images.unsplash.com/photo-1600585154526-990dced4db0d?auto=format&fit=crop&w=1200&q=60".into(),
                    bullet_points: strings(&["Counters & splashback", "Seam sealing", "Food-safe silicone"]),
                },
            ],
            gallery: (0..6)
                .map(|i| GalleryTile {
                    image_url: format!("https://picsum.photos/seed/gta{i}/800/500"),
                    caption: format!("Real Toronto job #{}", i + 1),
                })
                .collect(),
            testimonials: vec![
                Testimonial::five_star("Professional, quick, perfectly smooth bead!", "Via Google Reviews"),
                Testimonial::five_star(
                    "They removed mold and re-caulked. The tub looks brand new.",
                    "Via Google Reviews",
                ),
                Testimonial::five_star("Great price and service. Highly recommend.", "Via Google Reviews"),
            ],
            faqs: vec![
                FaqEntry {
                    question: "How long does new caulking last?".into(),
                    answer: "With proper prep and premium sanitary silicone, typically 3–5 years or more. We provide a 12-month workmanship warranty.".into(),
                },
                FaqEntry {
                    question: "Do you serve condos?".into(),
                    answer: "Yes. We work with condo management and follow quiet hours and elevator booking rules.".into(),
                },
                FaqEntry {
                    question: "How long is the visit?".into(),
                    answer: "Usually 60–120 minutes for a standard tub/shower, then 6–12 hours for full cure.".into(),
                },
                FaqEntry {
                    question: "Do you remove the old bead?".into(),
                    answer: "Always. We remove old caulk, degrease, disinfect against mold, then apply a new sanitary bead.".into(),
                },
            ],
            areas_heading: "We serve Toronto & GTA".into(),
            footer_blurb: "Fast quotes by phone & photo.".into(),
        }
    }

    /// Static badges followed by the rating and coverage badges.
    pub fn trust_badges(&self, config: &BusinessConfig) -> Vec<TrustBadge> {
        let mut badges = self.static_badges.clone();
        badges.push(TrustBadge {
            title: format!("{}/5 rating", config.average_rating()),
            description: format!("{}+ Google reviews", config.review_count()),
        });
        badges.push(TrustBadge {
            title: "GTA coverage".into(),
            description: coverage_summary(config.service_areas()),
        });
        badges
    }
}

/// First three areas, with an ellipsis when more exist.
pub(crate) fn coverage_summary(areas: &[String]) -> String {
    let head = areas.iter().take(3).map(String::as_str).collect::<Vec<_>>().join(", ");
    if areas.len() > 3 {
        format!("{head}…")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BusinessConfigDraft;
    use pretty_assertions::assert_eq;

    #[test]
    fn slugs_round_trip_for_every_kind() {
        for kind in ServiceKind::ALL {
            assert_eq!(ServiceKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(ServiceKind::from_slug("roofing"), None);
    }

    #[test]
    fn derived_badges_read_config() {
        let config = BusinessConfig::try_from(BusinessConfigDraft::toronto_caulking()).unwrap();
        let badges = PageContent::toronto_caulking().trust_badges(&config);

        assert_eq!(badges.len(), 4);
        assert_eq!(badges[2].title, "4.9/5 rating");
        assert_eq!(badges[2].description, "88+ Google reviews");
        assert_eq!(badges[3].description, "Toronto, North York, Etobicoke…");
    }

    #[test]
    fn coverage_without_ellipsis_for_short_lists() {
        let areas = vec!["Halifax".to_string(), "Dartmouth".to_string()];
        assert_eq!(coverage_summary(&areas), "Halifax, Dartmouth");
    }

    #[test]
    fn testimonials_are_five_star() {
        let content = PageContent::toronto_caulking();
        assert!(content.testimonials.iter().all(|t| t.star_rating == 5));
        assert_eq!(content.gallery.len(), 6);
        assert_eq!(content.gallery[5].caption, "Real Toronto job #6");
    }
}
