use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "beer_order_lines")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub beer_order_id: Uuid,
    pub beer_id: Uuid,
    pub order_quantity: i32,
    pub created_date: DateTimeWithTimeZone,
    pub last_modified_date: DateTimeWithTimeZone,
    pub version: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::beer_orders::Entity",
        from = "Column::BeerOrderId",
        to = "super::beer_orders::Column::Id",
        on_delete = "Cascade"
    )]
    BeerOrder,
}

impl Related<super::beer_orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BeerOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
