//! Localized String Resources
//!
//! Browser-locale string and plural lookup for the detail screen.

/// Supported display locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// Grammatical form selected by a locale's cardinal plural rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralForm {
    One,
    Other,
}

impl Locale {
    /// Resolve from a BCP 47 language tag ("en-US", "zh-CN", ...)
    pub fn from_tag(tag: &str) -> Locale {
        let lower = tag.to_ascii_lowercase();
        if lower == "zh" || lower.starts_with("zh-") {
            Locale::Zh
        } else {
            Locale::En
        }
    }

    /// Detect from the browser, falling back to English
    pub fn detect() -> Locale {
        web_sys::window()
            .and_then(|w| w.navigator().language())
            .map(|tag| Locale::from_tag(&tag))
            .unwrap_or_default()
    }

    /// Cardinal plural rule; zero goes through the plural branch in
    /// English, and Chinese uses one form for every count
    pub fn plural_form(self, n: u32) -> PluralForm {
        match self {
            Locale::En => {
                if n == 1 {
                    PluralForm::One
                } else {
                    PluralForm::Other
                }
            }
            Locale::Zh => PluralForm::Other,
        }
    }
}

/// Watering section header
pub fn watering_header(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Watering needs",
        Locale::Zh => "浇水需求",
    }
}

/// Pluralized watering interval phrase; the count both selects the
/// form and is substituted into the phrase
pub fn watering_needs(locale: Locale, interval_days: u32) -> String {
    match (locale, locale.plural_form(interval_days)) {
        (Locale::En, PluralForm::One) => format!("every {} day", interval_days),
        (Locale::En, PluralForm::Other) => format!("every {} days", interval_days),
        (Locale::Zh, _) => format!("每 {} 天浇水一次", interval_days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag("en-US"), Locale::En);
        assert_eq!(Locale::from_tag("zh"), Locale::Zh);
        assert_eq!(Locale::from_tag("zh-CN"), Locale::Zh);
        assert_eq!(Locale::from_tag("ZH-TW"), Locale::Zh);
        assert_eq!(Locale::from_tag(""), Locale::En);
        // "zht" is not a Chinese tag
        assert_eq!(Locale::from_tag("zht"), Locale::En);
    }

    #[test]
    fn test_singular_interval() {
        assert_eq!(watering_needs(Locale::En, 1), "every 1 day");
    }

    #[test]
    fn test_plural_interval() {
        assert_eq!(watering_needs(Locale::En, 7), "every 7 days");
    }

    #[test]
    fn test_zero_goes_through_plural_rules() {
        assert_eq!(Locale::En.plural_form(0), PluralForm::Other);
        assert_eq!(watering_needs(Locale::En, 0), "every 0 days");
    }

    #[test]
    fn test_chinese_has_single_form() {
        assert_eq!(Locale::Zh.plural_form(1), Locale::Zh.plural_form(7));
        assert_eq!(watering_needs(Locale::Zh, 3), "每 3 天浇水一次");
    }

    #[test]
    fn test_header_is_localized() {
        assert_eq!(watering_header(Locale::En), "Watering needs");
        assert_eq!(watering_header(Locale::Zh), "浇水需求");
    }
}
