// web_app/model/tags.rs - Badge colours for tag values
//
// Tags are free-form strings coming from the scraper. Values without a
// dedicated colour get the neutral stone palette.

use super::TagKind;

/// Tailwind background/text class pair for a tag badge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagStyle {
    pub bg: &'static str,
    pub text: &'static str,
}

impl TagStyle {
    pub const FALLBACK: TagStyle = TagStyle::new("bg-stone-100", "text-stone-700");

    const fn new(bg: &'static str, text: &'static str) -> Self {
        TagStyle { bg, text }
    }

    /// Tag values with a dedicated colour, per dimension
    pub const KNOWN: &'static [(TagKind, &'static str, TagStyle)] = &[
        (TagKind::Language, "English", TagStyle::new("bg-emerald-100", "text-emerald-700")),
        (TagKind::Language, "Japanese", TagStyle::new("bg-purple-100", "text-purple-700")),
        (TagKind::Language, "Korean", TagStyle::new("bg-sky-100", "text-sky-700")),
        (TagKind::Language, "Simplified Chinese", TagStyle::new("bg-amber-100", "text-amber-700")),

        (TagKind::Seller, "TCG Republic", TagStyle::new("bg-orange-100", "text-orange-700")),
        (TagKind::Seller, "Bored Game Company", TagStyle::new("bg-lime-100", "text-lime-700")),

        (TagKind::Type, "Booster Pack", TagStyle::new("bg-blue-100", "text-blue-700")),
        (TagKind::Type, "Booster Box", TagStyle::new("bg-indigo-100", "text-indigo-700")),
        (TagKind::Type, "Booster Display Box (36 Packs)", TagStyle::new("bg-cyan-100", "text-cyan-700")),
        (TagKind::Type, "Elite Trainer Box", TagStyle::new("bg-fuchsia-100", "text-fuchsia-700")),
        (TagKind::Type, "3 Pack Blister", TagStyle::new("bg-pink-100", "text-pink-700")),
        (TagKind::Type, "Collection Box", TagStyle::new("bg-rose-100", "text-rose-700")),
        (TagKind::Type, "Precious Collector Box", TagStyle::new("bg-teal-100", "text-teal-700")),
    ];

    fn lookup(kind: TagKind, value: &str) -> Option<TagStyle> {
        TagStyle::KNOWN
            .iter()
            .find(|(k, v, _)| *k == kind && *v == value)
            .map(|&(_, _, style)| style)
    }

    pub fn for_tag(kind: TagKind, value: &str) -> TagStyle {
        TagStyle::lookup(kind, value).unwrap_or(TagStyle::FALLBACK)
    }

    /// Whether the value has its own colour (case-sensitive)
    pub fn is_styled(kind: TagKind, value: &str) -> bool {
        TagStyle::lookup(kind, value).is_some()
    }

    /// Space-separated class list for the badge element
    pub fn class(&self) -> String {
        format!("{} {}", self.bg, self.text)
    }
}
