use std::fmt;

/// Contribution category accepted by the server.
///
/// The set is closed: anything that does not parse to one of these slugs is
/// rejected by validation before submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    MobileDeAddiction,
    PerformanceAddiction,
    SocialMediaDeAddiction,
    EntertainmentDeAddiction,
    WhatsappEtiquette,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::MobileDeAddiction,
        Category::PerformanceAddiction,
        Category::SocialMediaDeAddiction,
        Category::EntertainmentDeAddiction,
        Category::WhatsappEtiquette,
    ];

    /// Parse the wire slug. Returns `None` for anything outside the set.
    pub fn from_slug(slug: &str) -> Option<Category> {
        match slug {
            "mobile-de-addiction" => Some(Category::MobileDeAddiction),
            "performance-addiction" => Some(Category::PerformanceAddiction),
            "social-media-de-addiction" => Some(Category::SocialMediaDeAddiction),
            "entertainment-de-addiction" => Some(Category::EntertainmentDeAddiction),
            "whatsapp-etiquette" => Some(Category::WhatsappEtiquette),
            _ => None,
        }
    }

    /// The slug sent over the wire.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::MobileDeAddiction => "mobile-de-addiction",
            Category::PerformanceAddiction => "performance-addiction",
            Category::SocialMediaDeAddiction => "social-media-de-addiction",
            Category::EntertainmentDeAddiction => "entertainment-de-addiction",
            Category::WhatsappEtiquette => "whatsapp-etiquette",
        }
    }

    /// Human-readable label for listings.
    pub fn label(&self) -> &'static str {
        match self {
            Category::MobileDeAddiction => "Mobile De-Addiction",
            Category::PerformanceAddiction => "Performance Addiction",
            Category::SocialMediaDeAddiction => "Social Media De-Addiction",
            Category::EntertainmentDeAddiction => "Entertainment De-Addiction",
            Category::WhatsappEtiquette => "Whatsapp Etiquette",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slug_round_trips() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
        }
    }

    #[test]
    fn unknown_slugs_are_rejected() {
        assert_eq!(Category::from_slug(""), None);
        assert_eq!(Category::from_slug("podcasting"), None);
        // Slug matching is exact, not case-insensitive
        assert_eq!(Category::from_slug("Whatsapp-Etiquette"), None);
    }

    #[test]
    fn display_uses_the_slug() {
        assert_eq!(
            Category::WhatsappEtiquette.to_string(),
            "whatsapp-etiquette"
        );
    }
}
