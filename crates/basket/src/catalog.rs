//! Static product catalog lookups.
//!
//! Maps product names to the image tag and description the presentation
//! layer shows. Unrecognized names fall back to the default desk artwork
//! and blurb.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Image tag used for products without their own artwork.
pub const DEFAULT_IMAGE_TAG: &str = "pro-desk";

/// Description used for products without their own blurb.
pub const DEFAULT_DESCRIPTION: &str = "Premium standing desk";

static IMAGE_TAGS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("Pro Series Standing Desk", "pro-desk"),
        ("Pro Series Desk", "pro-desk"),
        ("Essential Standing Desk", "essential-desk"),
        ("Essential Desk", "essential-desk"),
        ("Executive Standing Desk", "executive-desk"),
        ("Executive Desk", "executive-desk"),
        ("Bamboo Desktop", "bamboo-top"),
        ("Solid Wood Desktop", "wood-top"),
        ("Laminate Desktop", "laminate-top"),
        ("Desktop Converter", "desk-converter"),
        ("Anti-Fatigue Mat", "anti-fatigue-mat"),
        ("Cable Management Kit", "cable-kit"),
        ("Monitor Arm", "monitor-arm"),
    ])
});

static DESCRIPTIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (
            "Pro Series Standing Desk",
            "Advanced height memory, anti-collision system",
        ),
        (
            "Pro Series Desk",
            "Advanced height memory, anti-collision system",
        ),
        ("Essential Standing Desk", "Reliable and affordable solution"),
        ("Essential Desk", "Reliable and affordable solution"),
        (
            "Executive Standing Desk",
            "Premium materials and advanced features",
        ),
        ("Executive Desk", "Premium materials and advanced features"),
        ("Bamboo Desktop", "Sustainable bamboo with natural finish"),
        ("Solid Wood Desktop", "Premium solid wood with elegant finish"),
        ("Laminate Desktop", "Durable laminate in various colors"),
        ("Desktop Converter", "Transform your existing desk"),
        ("Anti-Fatigue Mat", "Comfortable mat for prolonged standing"),
        ("Cable Management Kit", "Keep cables organized and tidy"),
        ("Monitor Arm", "Adjustable for optimal viewing height"),
    ])
});

/// Image tag for a product name, falling back to [`DEFAULT_IMAGE_TAG`].
#[must_use]
pub fn image_tag(name: &str) -> &'static str {
    IMAGE_TAGS.get(name).copied().unwrap_or(DEFAULT_IMAGE_TAG)
}

/// Display description for a product name, falling back to
/// [`DEFAULT_DESCRIPTION`].
#[must_use]
pub fn description(name: &str) -> &'static str {
    DESCRIPTIONS.get(name).copied().unwrap_or(DEFAULT_DESCRIPTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_product() {
        assert_eq!(image_tag("Essential Desk"), "essential-desk");
        assert_eq!(
            description("Monitor Arm"),
            "Adjustable for optimal viewing height"
        );
    }

    #[test]
    fn test_unknown_product_falls_back() {
        assert_eq!(image_tag("Flying Carpet"), DEFAULT_IMAGE_TAG);
        assert_eq!(description("Flying Carpet"), DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_every_image_tag_has_a_description() {
        for name in IMAGE_TAGS.keys() {
            assert_ne!(description(name), DEFAULT_DESCRIPTION, "{name}");
        }
    }
}
