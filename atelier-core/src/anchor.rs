/// Where an in-page link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorTarget<'a> {
    /// `#` alone, or not a fragment link at all: leave the click alone.
    Ignore,
    /// Element id to look up, without the leading `#`.
    Fragment(&'a str),
}

/// Classify the raw `href` attribute of an anchor.
#[must_use]
pub fn anchor_target(href: &str) -> AnchorTarget<'_> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => AnchorTarget::Fragment(id),
        _ => AnchorTarget::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fragment_is_ignored() {
        assert_eq!(anchor_target("#"), AnchorTarget::Ignore);
    }

    #[test]
    fn fragment_yields_element_id() {
        assert_eq!(anchor_target("#section2"), AnchorTarget::Fragment("section2"));
        assert_eq!(anchor_target("#contact"), AnchorTarget::Fragment("contact"));
    }

    #[test]
    fn non_fragment_links_are_ignored() {
        assert_eq!(anchor_target("/services"), AnchorTarget::Ignore);
        assert_eq!(anchor_target("mailto:contact@example.fr"), AnchorTarget::Ignore);
        assert_eq!(anchor_target(""), AnchorTarget::Ignore);
    }
}
