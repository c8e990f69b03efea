/// Icon registry: platform key -> inline SVG body

/// Glyph drawn when a platform has no icon of its own.
pub const FALLBACK_ICON: &str = r#"<circle cx="12" cy="12" r="10"/>"#;

pub trait IconRegistry: Send + Sync {
    /// Inner SVG markup for `key`, if the registry knows it
    fn lookup(&self, key: &str) -> Option<&str>;

    /// Full `<svg>` element for `key`. Never fails: unknown keys get the
    /// fallback glyph.
    fn render(&self, key: Option<&str>) -> String {
        let body = key.and_then(|k| self.lookup(k)).unwrap_or(FALLBACK_ICON);
        format!(
            r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" style="margin-right: 8px; flex-shrink: 0;">{}</svg>"#,
            body
        )
    }
}

const BUILTIN: &[(&str, &str)] = &[
    (
        "instagram",
        r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#,
    ),
    (
        "youtube",
        r#"<path d="M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17"/><polygon points="10,8 16,12 10,16" fill="currentColor"/>"#,
    ),
    ("tiktok", r#"<polygon points="5,3 19,12 5,21" fill="currentColor"/>"#),
    (
        "x",
        r#"<path d="m4 4 11.733 16h4.267l-11.733 -16z"/><path d="m20 4 -11.733 16h-4.267l11.733 -16z"/>"#,
    ),
    ("twitch", r#"<path d="M21 2H3v16h5v4l4-4h5l4-4V2zm-10 9V7m5 4V7"/>"#),
    (
        "facebook",
        r#"<path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"/>"#,
    ),
    (
        "linkedin",
        r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#,
    ),
    (
        "snapchat",
        r#"<polygon points="23,7 16,12 23,17 23,7"/><polygon points="1,7 8,12 1,17 1,7"/>"#,
    ),
    (
        "bluesky",
        r#"<path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"/>"#,
    ),
    (
        "website",
        r#"<circle cx="12" cy="12" r="10"/><path d="m2 12 20 0"/><path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"/>"#,
    ),
    (
        "paypal",
        r#"<circle cx="12" cy="12" r="10"/><path d="M16 8h-6a2 2 0 1 0 0 4h4a2 2 0 1 1 0 4H8"/>"#,
    ),
    ("kick", r#"<polygon points="5,3 19,12 5,21" fill="currentColor"/>"#),
    (
        "trovo",
        r#"<rect width="18" height="18" x="3" y="3" rx="2"/><path d="M12 8v8"/><path d="m8 12 4 4 4-4"/>"#,
    ),
];

/// The icon set shipped with the crate, one entry per registered platform.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinIcons;

impl BuiltinIcons {
    pub fn new() -> Self {
        BuiltinIcons
    }
}

impl IconRegistry for BuiltinIcons {
    fn lookup(&self, key: &str) -> Option<&str> {
        BUILTIN.iter().find(|(k, _)| *k == key).map(|(_, body)| *body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyIcons;

    impl IconRegistry for EmptyIcons {
        fn lookup(&self, _key: &str) -> Option<&str> {
            None
        }
    }

    #[test]
    fn every_platform_has_an_icon() {
        let icons = BuiltinIcons::new();
        for p in crate::platform::PLATFORMS {
            assert!(icons.lookup(p.id).is_some(), "missing icon for {}", p.id);
        }
    }

    #[test]
    fn unknown_key_renders_fallback() {
        let svg = BuiltinIcons::new().render(Some("myspace"));
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(FALLBACK_ICON));

        let svg = BuiltinIcons::new().render(None);
        assert!(svg.contains(FALLBACK_ICON));
    }

    #[test]
    fn custom_registry_falls_back_too() {
        let svg = EmptyIcons.render(Some("instagram"));
        assert!(svg.contains(FALLBACK_ICON));
    }
}
