//! Fixed copy shown on the maintenance page.

pub const PAGE_TITLE: &str = "FatbikeParts.eu | Onderhoud";
pub const PAGE_DESCRIPTION: &str = "FatbikeParts.eu is tijdelijk niet beschikbaar.";

pub const HEADLINE: &str = "We zijn binnenkort weer terug!";
pub const BRAND: &str = "FatbikeParts.eu";
pub const UNAVAILABLE_REASON: &str = " is nu niet beschikbaar door persoonlijke redenen.";
pub const THANKS: &str = "We zijn binnenkort wel weer terug! Bedankt voor het wachten ;)";

pub const CONTACT_LABEL: &str = "Toch Contact nodig?";
pub const CONTACT_EMAIL: &str = "fatbikeparts@gmail.com";
pub const CONTACT_HREF: &str = "mailto:fatbikeparts@gmail.com";

pub const LOGO_ALT: &str = "FatbikeParts icon";
pub const LOGO_SRC: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMTAwIiBoZWlnaHQ9IjEwMCIgdmlld0JveD0iMCAwIDEwMCAxMDAiIGZpbGw9Im5vbmUiIHhtbG5zPSJodHRwOi8vd3d3LnczLm9yZy8yMDAwL3N2ZyI+CjxyZWN0IHdpZHRoPSIxMDAiIGhlaWdodD0iMTAwIiBmaWxsPSIjNjM2NjZEIi8+Cjx0ZXh0IHg9IjUwIiB5PSI1NSIgdGV4dC1hbmNob3I9Im1pZGRsZSIgZm9udC1mYW1pbHk9InNhbnMtc2VyaWYiIGZvbnQtc2l6ZT0iMTQiIGZpbGw9IiNGRkZGRkYiPkltYWdlPC90ZXh0Pgo8L3N2Zz4K";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_targets_contact_email() {
        assert_eq!(CONTACT_HREF, format!("mailto:{}", CONTACT_EMAIL));
    }

    #[test]
    fn test_logo_is_inline_svg() {
        assert!(LOGO_SRC.starts_with("data:image/svg+xml;base64,"));
    }
}
