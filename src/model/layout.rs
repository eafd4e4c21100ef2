use serde::{Deserialize, Serialize};

/// Single entry of the header navigation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MenuItemDto {
    pub name: String,
    pub url: String,
}

/// Data rendered by the storefront header
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct HeaderDto {
    pub store_name: String,
    pub menu: Vec<MenuItemDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LinkDto {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FooterSectionDto {
    pub name: String,
    pub links: Vec<LinkDto>,
}

/// Data rendered by the storefront footer
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FooterDto {
    pub sections: Vec<FooterSectionDto>,
    pub copyright: String,
}
