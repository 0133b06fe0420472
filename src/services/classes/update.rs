use super::ClassService;
use super::create::{Placement, check_placement};
use crate::errors::Result;
use crate::models::classes::{entities::Class, requests::UpdateClassRequest};
use crate::services::FoundExt;

pub async fn update_class(service: &ClassService, request: UpdateClassRequest) -> Result<Class> {
    request.validate()?;
    let existing = service.get(request.id).await?;

    let placement_changed = request.class_group_id.is_some()
        || request.campus_id.is_some()
        || request.building_id.is_some()
        || request.room_id.is_some();

    // 以合并后的位置整体校验
    if placement_changed {
        let placement = Placement {
            class_group_id: request.class_group_id.unwrap_or(existing.class_group_id),
            campus_id: request.campus_id.unwrap_or(existing.campus_id),
            building_id: request.building_id.or(existing.building_id),
            room_id: request.room_id.or(existing.room_id),
        };
        check_placement(service.storage.as_ref(), &placement).await?;
    }

    let id = request.id;
    service
        .storage
        .update_class(request)
        .await?
        .or_not_found("Class", id)
}
