use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "instructors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_chairs::Entity")]
    CourseChairs,
    #[sea_orm(has_many = "super::schedule_blocks::Entity")]
    ScheduleBlocks,
}

impl Related<super::course_chairs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseChairs.def()
    }
}

impl Related<super::schedule_blocks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduleBlocks.def()
    }
}

// Many-to-many relationship with the courses an instructor chairs
impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_chairs::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_chairs::Relation::Instructor.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
