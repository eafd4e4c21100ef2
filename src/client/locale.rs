use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Currency {
    #[default]
    Eur,
    Usd,
    Gbp,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Usd => "$",
            Currency::Gbp => "£",
        }
    }
}

/// Localization settings shared through context
#[derive(Clone, Debug, PartialEq)]
pub struct Locale {
    pub language: String,
    pub currency: Currency,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            currency: Currency::default(),
        }
    }
}

impl Locale {
    /// Format an amount in minor units, e.g. `123456` → `€1,234.56`
    pub fn format_price(&self, cents: i64) -> String {
        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.unsigned_abs();
        let whole = (cents / 100).to_string();

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        format!("{sign}{}{grouped}.{:02}", self.currency.symbol(), cents % 100)
    }
}

#[component]
pub fn LocaleProvider(locale: Option<Locale>, children: Element) -> Element {
    use_context_provider(move || locale.unwrap_or_default());

    rsx! { {children} }
}

pub fn use_locale() -> Locale {
    use_context::<Locale>()
}
