use crate::{
    entities::{courses, instructors, schedule_blocks, sections},
    error::{ServiceError, ServiceResult},
    services::records,
};
use chrono::{NaiveTime, Utc};
use log::{debug, info};
use models::{days::Weekday, time_range::TimeRange};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    IntoActiveModel, QueryFilter,
};
use uuid::Uuid;

/// Which blocks a candidate block competes with. A section-level block only
/// conflicts inside its section; a course-level block only with the other
/// course-level blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleScope {
    Course(Uuid),
    Section(Uuid),
}

impl ScheduleScope {
    pub fn of(course_id: Uuid, section_id: Option<Uuid>) -> Self {
        match section_id {
            Some(section_id) => Self::Section(section_id),
            None => Self::Course(course_id),
        }
    }

    fn condition(self) -> Condition {
        match self {
            Self::Section(section_id) => {
                Condition::all().add(schedule_blocks::Column::SectionId.eq(section_id))
            }
            Self::Course(course_id) => Condition::all()
                .add(schedule_blocks::Column::CourseId.eq(course_id))
                .add(schedule_blocks::Column::SectionId.is_null()),
        }
    }
}

/// The writable fields of a schedule block
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleBlockInput {
    pub course_id: Uuid,
    pub section_id: Option<Uuid>,
    pub instructor_id: Option<Uuid>,
    pub day: Weekday,
    pub time_begin: NaiveTime,
    pub time_end: NaiveTime,
    pub room: String,
}

impl ScheduleBlockInput {
    fn scope(&self) -> ScheduleScope {
        ScheduleScope::of(self.course_id, self.section_id)
    }
}

pub struct ScheduleService;

impl ScheduleService {
    const OVERLAP_MESSAGE: &'static str = "a schedule already exists for this day and time";

    /// Whether a stored block in `scope` on `day` overlaps `range`. With an
    /// instructor, only that instructor's blocks are considered. `exclude`
    /// skips the block being updated.
    pub async fn has_overlap<C: ConnectionTrait>(
        db: &C,
        scope: ScheduleScope,
        day: Weekday,
        range: TimeRange,
        instructor_id: Option<Uuid>,
        exclude: Option<Uuid>,
    ) -> ServiceResult<bool> {
        let mut condition = scope
            .condition()
            .add(schedule_blocks::Column::Day.eq(day));

        if let Some(instructor_id) = instructor_id {
            condition = condition.add(schedule_blocks::Column::InstructorId.eq(instructor_id));
        }
        if let Some(exclude) = exclude {
            condition = condition.add(schedule_blocks::Column::Id.ne(exclude));
        }

        let blocks = schedule_blocks::Entity::find()
            .filter(condition)
            .all(db)
            .await?;

        let overlapping = blocks
            .iter()
            .find(|block| block.time_range().overlaps(&range));
        if let Some(block) = overlapping {
            debug!("{day} {range} overlaps block {} ({})", block.id, block.time_range());
        }

        Ok(overlapping.is_some())
    }

    pub async fn create_schedule<C: ConnectionTrait>(
        db: &C,
        input: ScheduleBlockInput,
    ) -> ServiceResult<schedule_blocks::Model> {
        let range = Self::validate(db, &input).await?;

        if Self::has_overlap(db, input.scope(), input.day, range, input.instructor_id, None).await?
        {
            return Err(ServiceError::Conflict(Self::OVERLAP_MESSAGE.to_string()));
        }

        let now = Utc::now().naive_utc();
        let block = schedule_blocks::ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(input.course_id),
            section_id: Set(input.section_id),
            instructor_id: Set(input.instructor_id),
            day: Set(input.day),
            time_begin: Set(range.begin),
            time_end: Set(range.end),
            room: Set(input.room),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await?;

        info!("Created schedule block {} on {} {range}", block.id, block.day);
        Ok(block)
    }

    /// Replaces the fields of an existing block. The block never conflicts
    /// with its own previous slot.
    pub async fn update_schedule<C: ConnectionTrait>(
        db: &C,
        block_id: Uuid,
        input: ScheduleBlockInput,
    ) -> ServiceResult<schedule_blocks::Model> {
        let block =
            records::require::<schedule_blocks::Entity, _>(db, block_id, "schedule block").await?;
        let range = Self::validate(db, &input).await?;

        if Self::has_overlap(
            db,
            input.scope(),
            input.day,
            range,
            input.instructor_id,
            Some(block.id),
        )
        .await?
        {
            return Err(ServiceError::Conflict(Self::OVERLAP_MESSAGE.to_string()));
        }

        let mut active = block.into_active_model();
        active.course_id = Set(input.course_id);
        active.section_id = Set(input.section_id);
        active.instructor_id = Set(input.instructor_id);
        active.day = Set(input.day);
        active.time_begin = Set(range.begin);
        active.time_end = Set(range.end);
        active.room = Set(input.room);
        active.updated_at = Set(Utc::now().naive_utc());

        let updated = active.update(db).await?;
        info!("Updated schedule block {block_id} to {} {range}", updated.day);

        Ok(updated)
    }

    /// A course's blocks, ordered by day and then start time
    pub async fn blocks_for<C: ConnectionTrait>(
        db: &C,
        course_id: Uuid,
    ) -> ServiceResult<Vec<schedule_blocks::Model>> {
        records::require::<courses::Entity, _>(db, course_id, "course").await?;

        let mut blocks = schedule_blocks::Entity::find()
            .filter(schedule_blocks::Column::CourseId.eq(course_id))
            .all(db)
            .await?;
        // Weekday is stored as text, so the week order is restored here
        blocks.sort_by_key(|block| (block.day, block.time_begin));

        Ok(blocks)
    }

    /// Checks the time range and every reference of `input`
    async fn validate<C: ConnectionTrait>(
        db: &C,
        input: &ScheduleBlockInput,
    ) -> ServiceResult<TimeRange> {
        let range = TimeRange::new(input.time_begin, input.time_end).ok_or_else(|| {
            ServiceError::Validation(format!(
                "start time {} must be before end time {}",
                input.time_begin.format("%H:%M"),
                input.time_end.format("%H:%M")
            ))
        })?;

        let course = records::require::<courses::Entity, _>(db, input.course_id, "course").await?;

        if let Some(section_id) = input.section_id {
            let section =
                records::require::<sections::Entity, _>(db, section_id, "section").await?;
            if section.course_id != course.id {
                return Err(ServiceError::Validation(format!(
                    "section {} is not a section of {}",
                    section.code, course.name
                )));
            }
        }

        if let Some(instructor_id) = input.instructor_id {
            records::require::<instructors::Entity, _>(db, instructor_id, "instructor").await?;
        }

        Ok(range)
    }
}
