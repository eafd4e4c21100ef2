use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "shop_product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub category_id: i32,
    #[sea_orm(unique)]
    pub sku: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price_cents: i64,
    pub in_stock: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::shop_category::Entity",
        from = "Column::CategoryId",
        to = "super::shop_category::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    ShopCategory,
}

impl Related<super::shop_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShopCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
