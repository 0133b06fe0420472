use super::{SeaOrmStorage, contains_ignore_case, db_delete_error, db_error, ensure_deleted};
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::errors::Result;
use crate::models::subjects::{
    entities::Subject,
    requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            code: Set(req.code.trim().to_uppercase()),
            description: Set(req.description),
            status: Set(req.status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("create subject"))?;

        Ok(result.into_subject())
    }

    pub async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("query subject"))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 列出科目，状态缺省为 active
    pub async fn list_subjects_impl(&self, query: SubjectListQuery) -> Result<Vec<Subject>> {
        let status = query.status.unwrap_or_default();
        let mut select = Subjects::find().filter(Column::Status.eq(status.to_string()));

        if let Some(cond) = contains_ignore_case(&["name"], query.search.as_deref()) {
            select = select.filter(cond);
        }

        let subjects = select
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(db_error("list subjects"))?;

        Ok(subjects.into_iter().map(|m| m.into_subject()).collect())
    }

    pub async fn update_subject_impl(&self, update: UpdateSubjectRequest) -> Result<Option<Subject>> {
        if self.get_subject_by_id_impl(update.id).await?.is_none() {
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
        if let Some(code) = update.code {
            model.code = Set(code.trim().to_uppercase());
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(db_error("update subject"))?;

        Ok(Some(result.into_subject()))
    }

    pub async fn delete_subject_impl(&self, id: i64) -> Result<()> {
        let result = Subjects::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_delete_error("delete subject"))?;

        ensure_deleted(result, "Subject", id)
    }
}
