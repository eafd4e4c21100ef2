use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

pub const STORE_TITLE: &str = "Deity Shop with Blog";
const STORE_DESCRIPTION: &str = "This is example of Shop with Blog powered by Deity Falcon";

/// Document title for a page, following the `<page> | <store>` template
pub fn page_title(page: &str) -> String {
    let page = page.trim();
    if page.is_empty() {
        STORE_TITLE.to_string()
    } else {
        format!("{page} | {STORE_TITLE}")
    }
}

/// Default title and meta tags for every page
#[component]
pub fn HeadMetaTags() -> Element {
    rsx!(
        Title { "{STORE_TITLE}" }
        Meta { name: "description", content: STORE_DESCRIPTION }
        Meta { name: "keywords", content: "pwa,rust,dioxus,ecommerce,shop,webshop,deity" }
        Meta { name: "theme-color", content: "#fff" }
        Meta { name: "format-detection", content: "telephone=yes" }
        Meta { property: "og:title", content: STORE_TITLE }
        Meta { property: "og:type", content: "website" }
        Meta { property: "og:description", content: STORE_DESCRIPTION }
        Meta { property: "og:url", content: "/" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_title_template() {
        assert_eq!(page_title("Cart"), "Cart | Deity Shop with Blog");
    }

    #[test]
    fn blank_page_title_falls_back_to_store_title() {
        assert_eq!(page_title("  "), STORE_TITLE);
    }
}
