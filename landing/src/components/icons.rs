//! Inline SVG icons.
//!
//! Single-path glyphs on a 256×256 grid, filled with `currentColor` so they
//! inherit the surrounding text color. Inline SVG means no icon font or
//! sprite request that could fail to load.

use leptos::prelude::*;

/// Renders an inline SVG icon from a path data string.
///
/// # Props
///
/// * `path` - SVG path data (d attribute)
/// * `size` - Icon size in pixels (default: "20")
/// * `class` - Additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_PHONE class="icon-sm" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

// =============================================================================
// Glyphs
// =============================================================================

/// Mobile phone (call CTAs)
pub const ICON_PHONE: &str = "M88,24h80a16,16,0,0,1,16,16V216a16,16,0,0,1-16,16H88a16,16,0,0,1-16-16V40A16,16,0,0,1,88,24Zm0,24V192h80V48Z";

/// Speech bubble (SMS, email)
pub const ICON_CHAT: &str = "M40,48H216a16,16,0,0,1,16,16V176a16,16,0,0,1-16,16H96L48,232V192H40a16,16,0,0,1-16-16V64A16,16,0,0,1,40,48Z";

/// Water drop (brand mark)
pub const ICON_DROP: &str = "M128,16S48,104,48,160a80,80,0,0,0,160,0C208,104,128,16,128,16Z";

/// Check mark (selling points)
pub const ICON_CHECK: &str = "M104,192L40,128l22.6-22.6L104,146.7L193.4,57.4L216,80Z";

/// Shield (warranty, insurance)
pub const ICON_SHIELD: &str = "M128,24L48,56v64c0,56,40,96,80,112c40-16,80-56,80-112V56Z";

/// Clock (same-day badge)
pub const ICON_CLOCK: &str = "M128,24a104,104,0,1,0,104,104A104,104,0,0,0,128,24Zm48,112H120V72h16v48h40Z";

/// Five-point star (ratings)
pub const ICON_STAR: &str = "M128,24L159,96L236,101L177,151L195,228L128,187L61,228L79,151L20,101L97,96Z";

/// Map pin (service areas)
pub const ICON_MAP_PIN: &str = "M128,16a80,80,0,0,0-80,80c0,72,80,144,80,144s80-72,80-144A80,80,0,0,0,128,16Zm0,112a32,32,0,1,1,32-32A32,32,0,0,1,128,128Z";

/// Four-point sparkle (service bullets)
pub const ICON_SPARKLE: &str = "M128,16l24,88l88,24l-88,24l-24,88l-24-88L16,128l88-24Z";

/// Wrench (service card titles)
pub const ICON_WRENCH: &str = "M200,40a48,48,0,0,0-64,56L40,192l24,24l96-96a48,48,0,0,0,56-64l-32,32l-24-24Z";

/// Picture frame (gallery captions)
pub const ICON_IMAGE: &str = "M40,48H216a16,16,0,0,1,16,16V192a16,16,0,0,1-16,16H40a16,16,0,0,1-16-16V64A16,16,0,0,1,40,48Zm0,144H216l-56-72l-40,48l-24-32Z";

/// Caret/chevron down icon
pub const ICON_CARET_DOWN: &str = "M213.66,101.66l-80,80a8,8,0,0,1-11.32,0l-80-80A8,8,0,0,1,53.66,90.34L128,164.69l74.34-74.35a8,8,0,0,1,11.32,11.32Z";

/// Warning/alert circle icon
pub const ICON_WARNING_CIRCLE: &str = "M128,24A104,104,0,1,0,232,128,104.11,104.11,0,0,0,128,24Zm0,192a88,88,0,1,1,88-88A88.1,88.1,0,0,1,128,216Zm-8-80V80a8,8,0,0,1,16,0v56a8,8,0,0,1-16,0Zm8,40a12,12,0,1,1,12-12A12,12,0,0,1,128,176Z";
