use super::PageService;
use crate::errors::Result;
use crate::models::common::NamedRef;
use crate::models::pages::GradebookPage;
use crate::models::subjects::entities::SubjectSummary;
use crate::models::users::entities::UserRole;
use crate::services::FoundExt;

pub async fn load(service: &PageService, role: UserRole, class_id: i64) -> Result<GradebookPage> {
    let storage = service.storage.as_ref();

    let (class, subjects, lookup) = tokio::try_join!(
        storage.get_class_by_id(class_id),
        storage.list_class_subjects(class_id),
        service.gradebooks.get_or_initialize(storage, class_id),
    )?;

    let class = class.or_not_found("Class", class_id)?;

    Ok(GradebookPage {
        role,
        class: NamedRef {
            id: class.id,
            name: class.name,
        },
        subjects: subjects.iter().map(SubjectSummary::from).collect(),
        gradebook: lookup.gradebook,
    })
}
