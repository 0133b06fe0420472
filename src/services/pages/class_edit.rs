use super::{PageService, option};
use crate::errors::Result;
use crate::models::campuses::requests::CampusListQuery;
use crate::models::class_groups::requests::ClassGroupListQuery;
use crate::models::pages::{ClassEditPage, ClassFormValues};
use crate::models::subjects::requests::SubjectListQuery;
use crate::models::teachers::requests::TeacherListQuery;
use crate::models::users::entities::UserRole;
use crate::services::FoundExt;

pub async fn load(service: &PageService, role: UserRole, class_id: i64) -> Result<ClassEditPage> {
    let storage = service.storage.as_ref();

    let (class, assigned_teachers, assigned_subjects, groups, campuses, teachers, subjects) = tokio::try_join!(
        storage.get_class_by_id(class_id),
        storage.list_class_teachers(class_id),
        storage.list_class_subjects(class_id),
        storage.list_class_groups(ClassGroupListQuery::default()),
        storage.list_campuses(CampusListQuery::default()),
        storage.list_teachers(TeacherListQuery::default()),
        storage.list_subjects(SubjectListQuery::default()),
    )?;

    let class = class.or_not_found("Class", class_id)?;

    // 教学楼与教室选项依赖班级当前所在校区和教学楼
    let rooms = async {
        match class.building_id {
            Some(building_id) => storage.list_rooms_by_building(building_id).await,
            None => Ok(Vec::new()),
        }
    };
    let (buildings, rooms) =
        tokio::try_join!(storage.list_buildings_by_campus(class.campus_id), rooms)?;

    let form = ClassFormValues::new(
        &class,
        assigned_teachers.iter().map(|t| t.id).collect(),
        assigned_subjects.iter().map(|s| s.id).collect(),
    );

    Ok(ClassEditPage {
        role,
        class_id,
        form,
        class_group_options: groups.into_iter().map(|g| option(g.id, g.name)).collect(),
        campus_options: campuses.into_iter().map(|c| option(c.id, c.name)).collect(),
        building_options: buildings.into_iter().map(|b| option(b.id, b.name)).collect(),
        room_options: rooms.into_iter().map(|r| option(r.id, r.name)).collect(),
        teacher_options: teachers
            .iter()
            .map(|t| option(t.id, format!("{} {}", t.first_name, t.last_name)))
            .collect(),
        subject_options: subjects.into_iter().map(|s| option(s.id, s.name)).collect(),
    })
}
