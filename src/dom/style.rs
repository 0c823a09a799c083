//! Inline `style` attribute declarations.

use super::Element;

impl Element {
    /// Value of one inline style property.
    #[cfg(test)]
    pub fn style(&self, property: &str) -> Option<&str> {
        declarations(self.get_attr("style")?)
            .find(|(name, _)| name.eq_ignore_ascii_case(property))
            .map(|(_, value)| value)
    }

    /// Set one inline style property, keeping other declarations in order.
    ///
    /// An empty value removes the declaration. A value that would end the
    /// declaration early (a `;` outside quotes or parentheses) is rejected
    /// and the attribute is left unchanged; returns `false` in that case.
    pub fn set_style(&mut self, property: &str, value: &str) -> bool {
        let value = value.trim();
        if split_top_level(value).len() > 1 {
            return false;
        }

        let mut decls: Vec<(String, String)> = declarations(self.get_attr("style").unwrap_or_default())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        match decls.iter().position(|(name, _)| name.eq_ignore_ascii_case(property)) {
            Some(pos) if value.is_empty() => {
                decls.remove(pos);
            }
            Some(pos) => decls[pos].1 = value.to_string(),
            None if value.is_empty() => {}
            None => decls.push((property.to_string(), value.to_string())),
        }

        if decls.is_empty() {
            self.remove_attr("style");
            return true;
        }
        let style = decls
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attr("style", style);
        true
    }
}

/// `name: value` pairs of a style attribute, trimmed, empty names skipped.
fn declarations(style: &str) -> impl Iterator<Item = (&str, &str)> {
    split_top_level(style)
        .into_iter()
        .filter_map(|decl| decl.split_once(':'))
        .map(|(name, value)| (name.trim(), value.trim()))
        .filter(|(name, _)| !name.is_empty())
}

/// Split on `;` that sits outside quotes and parentheses.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quote = None;
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            (None, _) => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Attrs;

    #[test]
    fn test_set_style_appends_and_replaces() {
        let mut img = Element::with_attrs("img", Attrs::from([("style", "width: 10px")]));
        assert!(img.set_style("object-position", "left top"));
        img.set_style("width", "20px");
        assert_eq!(
            img.get_attr("style"),
            Some("width: 20px; object-position: left top;")
        );
        assert_eq!(img.style("object-position"), Some("left top"));
    }

    #[test]
    fn test_set_style_empty_value_removes() {
        let mut div = Element::new("div");
        div.set_style("background", "#ff0000");
        assert_eq!(div.style("background"), Some("#ff0000"));
        div.set_style("background", "");
        assert!(!div.has_attr("style"));
    }

    #[test]
    fn test_style_keeps_colons_in_values() {
        let mut div = Element::new("div");
        div.set_style("background", "url(https://x/y.png) no-repeat");
        assert_eq!(div.style("background"), Some("url(https://x/y.png) no-repeat"));
    }

    #[test]
    fn test_value_with_extra_declaration_is_rejected() {
        let mut div = Element::with_attrs("div", Attrs::from([("style", "width: 1px;")]));
        assert!(!div.set_style("background", "red; color: blue"));
        assert_eq!(div.get_attr("style"), Some("width: 1px;"));
        assert_eq!(div.style("color"), None);
    }

    #[test]
    fn test_semicolons_inside_urls_and_quotes_are_kept() {
        let mut div = Element::new("div");
        let value = r#"url("data:image/png;base64,AAA") center / cover"#;
        assert!(div.set_style("background", value));
        assert_eq!(div.style("background"), Some(value));
        assert_eq!(split_top_level("a: '1;2'; b: 3"), vec!["a: '1;2'", " b: 3"]);
        assert!(!div.set_style("color", "red;"));
    }
}
