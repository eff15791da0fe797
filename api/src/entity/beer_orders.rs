use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "beer_orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub customer_id: Uuid,
    pub order_status: String,
    pub order_status_callback_url: Option<String>,
    pub customer_ref: Option<String>,
    pub created_date: DateTimeWithTimeZone,
    pub last_modified_date: DateTimeWithTimeZone,
    pub version: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::beer_order_lines::Entity")]
    BeerOrderLines,
}

impl Related<super::beer_order_lines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BeerOrderLines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
