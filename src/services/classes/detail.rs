use super::ClassService;
use crate::errors::Result;
use crate::models::classes::entities::ClassDetail;
use crate::models::common::NamedRef;
use crate::models::subjects::entities::SubjectSummary;
use crate::services::FoundExt;

pub async fn class_detail(service: &ClassService, class_id: i64) -> Result<ClassDetail> {
    let storage = service.storage.as_ref();
    let class = service.get(class_id).await?;

    let building = async {
        match class.building_id {
            Some(id) => storage.get_building_by_id(id).await,
            None => Ok(None),
        }
    };
    let room = async {
        match class.room_id {
            Some(id) => storage.get_room_by_id(id).await,
            None => Ok(None),
        }
    };

    let (class_group, campus, building, room, teachers, subjects, student_count, timetable) = tokio::try_join!(
        storage.get_class_group_by_id(class.class_group_id),
        storage.get_campus_by_id(class.campus_id),
        building,
        room,
        storage.list_class_teachers(class_id),
        storage.list_class_subjects(class_id),
        storage.count_class_students(class_id),
        storage.list_timetable_by_class(class_id),
    )?;

    let class_group = class_group.or_not_found("Class group", class.class_group_id)?;
    let campus = campus.or_not_found("Campus", class.campus_id)?;

    Ok(ClassDetail {
        class_group: NamedRef {
            id: class_group.id,
            name: class_group.name,
        },
        campus: NamedRef {
            id: campus.id,
            name: campus.name,
        },
        building: building.map(|b| NamedRef {
            id: b.id,
            name: b.name,
        }),
        room: room.map(|r| NamedRef {
            id: r.id,
            name: r.name,
        }),
        teachers,
        subjects: subjects.iter().map(SubjectSummary::from).collect(),
        student_count,
        timetable,
        class,
    })
}
