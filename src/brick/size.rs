//! Size variants and the resolved text-size tuple.
//!
//! A block declares its variant through a class name. Variants are checked
//! in enumeration order and the first one present wins, so `small large`
//! resolves to `small`. Per-category override classes (`gold-heading`,
//! `s-body`, `xl-detail`) then replace single slots of a fresh copy of the
//! variant's sizes.

use serde::Serialize;

/// Named size/type classification of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeVariant {
    Small,
    Medium,
    Large,
    #[serde(rename = "xlarge")]
    XLarge,
    Link,
    News,
    FullDesktop,
    Default,
}

impl SizeVariant {
    /// Classification order. First match wins.
    pub const ALL: [Self; 8] = [
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::XLarge,
        Self::Link,
        Self::News,
        Self::FullDesktop,
        Self::Default,
    ];

    /// Class name that selects this variant.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "xlarge",
            Self::Link => "link",
            Self::News => "news",
            Self::FullDesktop => "full-desktop",
            Self::Default => "default",
        }
    }

    /// `(heading, body, detail, button, link)` size tokens.
    pub const fn sizes(self) -> [&'static str; 5] {
        match self {
            Self::Small => ["m", "s", "s", "l", "s"],
            Self::Medium => ["l", "m", "m", "l", "m"],
            Self::Large => ["xl", "m", "l", "l", "m"],
            Self::XLarge => ["xxl", "l", "xl", "l", "l"],
            Self::Link => ["m", "xs", "m", "s", "xs"],
            Self::News => ["xs", "s", "m", "s", "xs"],
            Self::FullDesktop => ["xl", "l", "m", "l", "m"],
            Self::Default => ["m", "m", "l", "s", "xs"],
        }
    }

    /// Pick the first variant (in enumeration order) whose class is present.
    pub fn classify<'a>(classes: impl IntoIterator<Item = &'a str>) -> Self {
        let classes: Vec<&str> = classes.into_iter().collect();
        Self::ALL
            .into_iter()
            .find(|variant| classes.contains(&variant.class_name()))
            .unwrap_or(Self::Default)
    }
}

/// Text categories that accept per-block override classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCategory {
    Heading,
    Body,
    Detail,
}

impl TextCategory {
    pub const ALL: [Self; 3] = [Self::Heading, Self::Body, Self::Detail];

    /// Marker searched for inside class names.
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Heading => "-heading",
            Self::Body => "-body",
            Self::Detail => "-detail",
        }
    }
}

/// Resolved per-block size tokens. Always a fresh value; never shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSizes {
    pub heading: String,
    pub body: String,
    pub detail: String,
    pub button: String,
    pub link: String,
}

impl TextSizes {
    pub fn for_variant(variant: SizeVariant) -> Self {
        let [heading, body, detail, button, link] = variant.sizes().map(|s| s.to_string());
        Self {
            heading,
            body,
            detail,
            button,
            link,
        }
    }

    /// Apply override classes.
    ///
    /// For each category, the first class (in class-list order) containing
    /// the category marker supplies the token: the text before its first
    /// hyphen, lower-cased. Unknown tokens pass through untouched.
    pub fn with_overrides<'a>(mut self, classes: impl IntoIterator<Item = &'a str>) -> Self {
        let classes: Vec<&str> = classes.into_iter().collect();
        for category in TextCategory::ALL {
            let token = classes
                .iter()
                .filter(|class| class.contains(category.marker()))
                .filter_map(|class| class.split('-').next())
                .find(|token| !token.is_empty());
            if let Some(token) = token {
                *self.slot_mut(category) = token.to_lowercase();
            }
        }
        self
    }

    fn slot_mut(&mut self, category: TextCategory) -> &mut String {
        match category {
            TextCategory::Heading => &mut self.heading,
            TextCategory::Body => &mut self.body,
            TextCategory::Detail => &mut self.detail,
        }
    }

    /// Class handed to the button decorator, e.g. `button-l`.
    pub fn button_class(&self) -> String {
        format!("button-{}", self.button)
    }

    pub fn as_array(&self) -> [&str; 5] {
        [
            self.heading.as_str(),
            self.body.as_str(),
            self.detail.as_str(),
            self.button.as_str(),
            self.link.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("small", ["m", "s", "s", "l", "s"])]
    #[case("medium", ["l", "m", "m", "l", "m"])]
    #[case("large", ["xl", "m", "l", "l", "m"])]
    #[case("xlarge", ["xxl", "l", "xl", "l", "l"])]
    #[case("link", ["m", "xs", "m", "s", "xs"])]
    #[case("news", ["xs", "s", "m", "s", "xs"])]
    #[case("full-desktop", ["xl", "l", "m", "l", "m"])]
    #[case("default", ["m", "m", "l", "s", "xs"])]
    fn test_single_variant_class(#[case] class: &str, #[case] expected: [&str; 5]) {
        let variant = SizeVariant::classify(["homepage-brick", class]);
        assert_eq!(variant.class_name(), class);
        assert_eq!(TextSizes::for_variant(variant).as_array(), expected);
    }

    #[test]
    fn test_unrecognized_falls_back_to_default() {
        assert_eq!(
            SizeVariant::classify(["homepage-brick", "huge"]),
            SizeVariant::Default
        );
        assert_eq!(SizeVariant::classify(std::iter::empty()), SizeVariant::Default);
    }

    #[test]
    fn test_enumeration_order_wins_over_class_order() {
        assert_eq!(
            SizeVariant::classify(["large", "small"]),
            SizeVariant::Small
        );
        assert_eq!(SizeVariant::classify(["news", "link"]), SizeVariant::Link);
    }

    #[test]
    fn test_overrides_replace_slots() {
        let sizes = TextSizes::for_variant(SizeVariant::Medium)
            .with_overrides(["homepage-brick", "medium", "gold-heading", "small-body"]);
        assert_eq!(sizes.as_array(), ["gold", "small", "m", "l", "m"]);
    }

    #[test]
    fn test_first_override_wins_and_lowercases() {
        let sizes = TextSizes::for_variant(SizeVariant::Default)
            .with_overrides(["XL-detail", "s-detail", "-heading"]);
        assert_eq!(sizes.detail, "xl");
        assert_eq!(sizes.heading, "m");
    }

    #[test]
    fn test_overrides_do_not_touch_table() {
        let _ = TextSizes::for_variant(SizeVariant::Small).with_overrides(["xxl-heading"]);
        assert_eq!(TextSizes::for_variant(SizeVariant::Small).heading, "m");
    }

    #[test]
    fn test_button_class() {
        assert_eq!(
            TextSizes::for_variant(SizeVariant::Link).button_class(),
            "button-s"
        );
    }
}
