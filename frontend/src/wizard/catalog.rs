//! Static catalogs the wizard screens render their toggle cards from:
//! content types, target platforms, and the KPI metrics with their accent
//! colors.

/// Small glyph set used across the cards, rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Heart,
    Star,
    Check,
    Plus,
    ArrowRight,
    Lightning,
    Wallet,
    Camera,
}

impl Glyph {
    pub fn text(self) -> &'static str {
        match self {
            Glyph::Heart => "\u{2665}",
            Glyph::Star => "\u{2605}",
            Glyph::Check => "\u{2713}",
            Glyph::Plus => "+",
            Glyph::ArrowRight => "\u{2192}",
            Glyph::Lightning => "\u{26A1}",
            Glyph::Wallet => "\u{1F45B}",
            Glyph::Camera => "\u{1F4F7}",
        }
    }
}

pub struct ContentType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub glyph: Glyph,
}

pub struct Platform {
    pub id: &'static str,
    pub name: &'static str,
    pub glyph: Glyph,
}

/// A KPI card definition. The color fields are CSS values applied to the
/// card when the KPI is selected.
pub struct KpiMetric {
    pub id: &'static str,
    pub name: &'static str,
    pub glyph: Glyph,
    pub accent: &'static str,
    pub border: &'static str,
    pub background: &'static str,
}

pub const CONTENT_TYPES: [ContentType; 4] = [
    ContentType {
        id: "video",
        name: "Video",
        description: "Reels, TikToks, Shorts",
        glyph: Glyph::Star,
    },
    ContentType {
        id: "photo",
        name: "Photo",
        description: "Feed posts, carousels",
        glyph: Glyph::Camera,
    },
    ContentType {
        id: "stories",
        name: "Stories",
        description: "Temporary content",
        glyph: Glyph::Check,
    },
    ContentType {
        id: "live",
        name: "Live",
        description: "Live broadcasts",
        glyph: Glyph::Plus,
    },
];

pub const PLATFORMS: [Platform; 2] = [
    Platform {
        id: "instagram",
        name: "Instagram",
        glyph: Glyph::Camera,
    },
    Platform {
        id: "x",
        name: "X",
        glyph: Glyph::Star,
    },
];

pub const PRIMARY_KPIS: [KpiMetric; 3] = [
    KpiMetric {
        id: "views",
        name: "Views",
        glyph: Glyph::Star,
        accent: "#16a34a",
        border: "#22c55e",
        background: "#dcfce7",
    },
    KpiMetric {
        id: "engagement",
        name: "Engagement",
        glyph: Glyph::Heart,
        accent: "#9333ea",
        border: "#a855f7",
        background: "#f3e8ff",
    },
    KpiMetric {
        id: "reach",
        name: "Reach",
        glyph: Glyph::Check,
        accent: "#ca8a04",
        border: "#eab308",
        background: "#fef9c3",
    },
];

pub const SECONDARY_KPIS: [KpiMetric; 2] = [
    KpiMetric {
        id: "likes",
        name: "Likes",
        glyph: Glyph::Heart,
        accent: "#2563eb",
        border: "#3b82f6",
        background: "#dbeafe",
    },
    KpiMetric {
        id: "comments",
        name: "Comments",
        glyph: Glyph::Star,
        accent: "#dc2626",
        border: "#ef4444",
        background: "#fee2e2",
    },
];

/// Display name for a KPI id, falling back to the id itself for values that
/// are no longer in the catalog.
pub fn kpi_name(id: &str) -> &str {
    PRIMARY_KPIS
        .iter()
        .chain(SECONDARY_KPIS.iter())
        .find(|kpi| kpi.id == id)
        .map(|kpi| kpi.name)
        .unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<&str> = CONTENT_TYPES.iter().map(|c| c.id).collect();
        ids.extend(PLATFORMS.iter().map(|p| p.id));
        ids.extend(PRIMARY_KPIS.iter().map(|k| k.id));
        ids.extend(SECONDARY_KPIS.iter().map(|k| k.id));
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn kpi_name_falls_back_to_the_id() {
        assert_eq!(kpi_name("views"), "Views");
        assert_eq!(kpi_name("likes"), "Likes");
        assert_eq!(kpi_name("retired-kpi"), "retired-kpi");
    }
}
