use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::util::api::{fetch_footer, loaded, Loaded},
    model::layout::FooterDto,
};

/// Loads the footer data and hands it to `render` once available
#[component]
pub fn FooterQuery(render: Callback<FooterDto, Element>) -> Element {
    let footer = use_resource(fetch_footer);

    let element = match loaded((*footer.read()).as_ref()) {
        Ok(Loaded::Ready(data)) => render.call(data),
        Ok(_) => render.call(FooterDto::default()),
        Err(err) => {
            tracing::error!("failed to load footer: {err}");
            render.call(FooterDto::default())
        }
    };
    element
}

#[component]
pub fn Footer(data: FooterDto) -> Element {
    rsx!(
        footer { class: "footer",
            div { class: "footer-sections",
                for section in data.sections.iter() {
                    div { key: "{section.name}", class: "footer-section",
                        h4 { "{section.name}" }
                        ul {
                            for link in section.links.iter() {
                                li { key: "{link.url}",
                                    Link { to: link.url.clone(), "{link.name}" }
                                }
                            }
                        }
                    }
                }
            }
            if !data.copyright.is_empty() {
                p { class: "footer-copyright", "{data.copyright}" }
            }
        }
    )
}
