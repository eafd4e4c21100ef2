use sea_orm::entity::prelude::*;

/// Maps a storefront path to the entity that owns it.
///
/// `content_type` holds the wire tag of the content (`blog-post`, `shop-category`,
/// `shop-product`) and `entity_id` the primary key in the matching table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "url_rewrite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub path: String,
    pub content_type: String,
    pub entity_id: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
