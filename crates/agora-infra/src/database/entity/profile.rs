//! Profile entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub handle: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Profile.
impl From<Model> for agora_core::domain::Profile {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            handle: model.handle,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from Domain Profile to SeaORM ActiveModel.
impl From<agora_core::domain::Profile> for ActiveModel {
    fn from(profile: agora_core::domain::Profile) -> Self {
        Self {
            id: Set(profile.id),
            user_id: Set(profile.user_id),
            handle: Set(profile.handle),
            created_at: Set(profile.created_at.into()),
        }
    }
}
