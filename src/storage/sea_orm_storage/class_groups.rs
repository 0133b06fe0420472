use super::{SeaOrmStorage, contains_ignore_case, db_delete_error, db_error, ensure_deleted};
use crate::entity::class_groups::{ActiveModel, Column, Entity as ClassGroups};
use crate::errors::Result;
use crate::models::class_groups::{
    entities::ClassGroup,
    requests::{ClassGroupListQuery, CreateClassGroupRequest, UpdateClassGroupRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_class_group_impl(&self, req: CreateClassGroupRequest) -> Result<ClassGroup> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            description: Set(req.description),
            campus_id: Set(req.campus_id),
            status: Set(req.status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("create class group"))?;

        Ok(result.into_class_group())
    }

    pub async fn get_class_group_by_id_impl(&self, id: i64) -> Result<Option<ClassGroup>> {
        let result = ClassGroups::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("query class group"))?;

        Ok(result.map(|m| m.into_class_group()))
    }

    pub async fn list_class_groups_impl(
        &self,
        query: ClassGroupListQuery,
    ) -> Result<Vec<ClassGroup>> {
        let status = query.status.unwrap_or_default();
        let mut select = ClassGroups::find().filter(Column::Status.eq(status.to_string()));

        if let Some(cond) = contains_ignore_case(&["name"], query.search.as_deref()) {
            select = select.filter(cond);
        }

        let groups = select
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(db_error("list class groups"))?;

        Ok(groups.into_iter().map(|m| m.into_class_group()).collect())
    }

    pub async fn update_class_group_impl(
        &self,
        update: UpdateClassGroupRequest,
    ) -> Result<Option<ClassGroup>> {
        if self.get_class_group_by_id_impl(update.id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(update.id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name.trim().to_string());
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(campus_id) = update.campus_id {
            model.campus_id = Set(Some(campus_id));
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(db_error("update class group"))?;

        Ok(Some(result.into_class_group()))
    }

    pub async fn delete_class_group_impl(&self, id: i64) -> Result<()> {
        let result = ClassGroups::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_delete_error("delete class group"))?;

        ensure_deleted(result, "Class group", id)
    }
}
