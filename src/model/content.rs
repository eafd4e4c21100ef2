use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of content a storefront path resolves to when no static route matches.
///
/// The wire tags are the ones stored in the url rewrite table and returned by
/// `GET /api/url`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum ContentType {
    #[serde(rename = "blog-post")]
    BlogPost,
    #[serde(rename = "shop-category")]
    ShopCategory,
    #[serde(rename = "shop-product")]
    ShopProduct,
}

impl ContentType {
    /// Every content type the dynamic route can render
    pub const ALL: [ContentType; 3] = [
        ContentType::BlogPost,
        ContentType::ShopCategory,
        ContentType::ShopProduct,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            ContentType::BlogPost => "blog-post",
            ContentType::ShopCategory => "shop-category",
            ContentType::ShopProduct => "shop-product",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|content_type| content_type.tag() == tag)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownContentType(pub String);

impl fmt::Display for UnknownContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown content type: {}", self.0)
    }
}

impl std::error::Error for UnknownContentType {}

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownContentType(s.to_string()))
    }
}

/// Result of resolving a storefront path to its content
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UrlDto {
    /// The path that was looked up, e.g. `/fusion-backpack.html`
    pub path: String,
    /// Wire tag of the content type, kept as a string so newer server tags
    /// don't break older clients
    pub content_type: String,
    /// Primary key of the content in its own table
    pub id: i32,
}

impl UrlDto {
    pub fn content_type(&self) -> Option<ContentType> {
        ContentType::from_tag(&self.content_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_from_tag() {
        for content_type in ContentType::ALL {
            assert_eq!(ContentType::from_tag(content_type.tag()), Some(content_type));
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(ContentType::from_tag("cms-page"), None);
        assert_eq!(
            "cms-page".parse::<ContentType>(),
            Err(UnknownContentType("cms-page".to_string()))
        );
    }

    #[test]
    fn serializes_with_wire_tag() {
        let json = serde_json::to_string(&ContentType::ShopCategory).unwrap();
        assert_eq!(json, "\"shop-category\"");
    }

    #[test]
    fn url_dto_exposes_known_content_type() {
        let url = UrlDto {
            path: "/fusion-backpack.html".to_string(),
            content_type: "shop-product".to_string(),
            id: 3,
        };
        assert_eq!(url.content_type(), Some(ContentType::ShopProduct));
    }
}
