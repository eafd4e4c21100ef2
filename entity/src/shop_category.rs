use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "shop_category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub include_in_menu: bool,
    pub position: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::shop_product::Entity")]
    ShopProduct,
}

impl Related<super::shop_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShopProduct.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
