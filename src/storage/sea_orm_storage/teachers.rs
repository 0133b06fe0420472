//! 教师存储操作
//!
//! 教师与资料分表存储，读取时由两次查询组合。

use std::collections::HashMap;

use super::{SeaOrmStorage, contains_ignore_case, db_delete_error, db_error, ensure_deleted};
use crate::entity::teacher_profiles::{
    ActiveModel as ProfileActiveModel, Column as ProfileColumn, Entity as TeacherProfiles,
    encode_id_set,
};
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::errors::Result;
use crate::models::teachers::{
    entities::{Teacher, TeacherProfile},
    requests::{CreateTeacherRequest, TeacherListQuery, TeacherProfileInput, UpdateTeacherRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();
        let txn = self.db.begin().await.map_err(db_error("begin transaction"))?;

        let model = ActiveModel {
            user_id: Set(req.user_id),
            first_name: Set(req.first_name.trim().to_string()),
            last_name: Set(req.last_name.trim().to_string()),
            email: Set(req.email.trim().to_lowercase()),
            phone: Set(req.phone),
            status: Set(req.status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let teacher = model
            .insert(&txn)
            .await
            .map_err(db_error("create teacher"))?;

        let profile = match req.profile {
            Some(input) => Some(upsert_profile(&txn, teacher.id, input, now).await?),
            None => None,
        };

        txn.commit().await.map_err(db_error("commit transaction"))?;

        Ok(teacher.into_teacher(profile))
    }

    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<Teacher>> {
        let Some(teacher) = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("query teacher"))?
        else {
            return Ok(None);
        };

        let profile = TeacherProfiles::find()
            .filter(ProfileColumn::TeacherId.eq(id))
            .one(&self.db)
            .await
            .map_err(db_error("query teacher profile"))?
            .map(|m| m.into_profile());

        Ok(Some(teacher.into_teacher(profile)))
    }

    /// 列出教师：状态缺省 active，名或姓大小写不敏感匹配，可按资料中的校区过滤
    pub async fn list_teachers_impl(&self, query: TeacherListQuery) -> Result<Vec<Teacher>> {
        let status = query.status.unwrap_or_default();
        let mut select = Teachers::find().filter(Column::Status.eq(status.to_string()));

        if let Some(cond) =
            contains_ignore_case(&["first_name", "last_name"], query.search.as_deref())
        {
            select = select.filter(cond);
        }

        let teachers = select
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName)
            .all(&self.db)
            .await
            .map_err(db_error("list teachers"))?;

        if teachers.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = teachers.iter().map(|t| t.id).collect();
        let mut profiles: HashMap<i64, TeacherProfile> = TeacherProfiles::find()
            .filter(ProfileColumn::TeacherId.is_in(ids))
            .all(&self.db)
            .await
            .map_err(db_error("list teacher profiles"))?
            .into_iter()
            .map(|m| (m.teacher_id, m.into_profile()))
            .collect();

        let result = teachers
            .into_iter()
            .map(|t| {
                let profile = profiles.remove(&t.id);
                t.into_teacher(profile)
            })
            .filter(|t| match query.campus_id {
                Some(campus_id) => t
                    .profile
                    .as_ref()
                    .is_some_and(|p| p.campus_ids.contains(&campus_id)),
                None => true,
            })
            .collect();

        Ok(result)
    }

    /// 更新教师；提供 profile 时整体覆盖，不存在则创建
    pub async fn update_teacher_impl(&self, update: UpdateTeacherRequest) -> Result<Option<Teacher>> {
        if Teachers::find_by_id(update.id)
            .one(&self.db)
            .await
            .map_err(db_error("query teacher"))?
            .is_none()
        {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();
        let txn = self.db.begin().await.map_err(db_error("begin transaction"))?;

        let mut model = ActiveModel {
            id: Set(update.id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(first_name) = update.first_name {
            model.first_name = Set(first_name.trim().to_string());
        }
        if let Some(last_name) = update.last_name {
            model.last_name = Set(last_name.trim().to_string());
        }
        if let Some(email) = update.email {
            model.email = Set(email.trim().to_lowercase());
        }
        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&txn)
            .await
            .map_err(db_error("update teacher"))?;

        if let Some(input) = update.profile {
            upsert_profile(&txn, update.id, input, now).await?;
        }

        txn.commit().await.map_err(db_error("commit transaction"))?;

        self.get_teacher_by_id_impl(update.id).await
    }

    pub async fn delete_teacher_impl(&self, id: i64) -> Result<()> {
        let result = Teachers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_delete_error("delete teacher"))?;

        ensure_deleted(result, "Teacher", id)
    }
}

/// 写入教师资料（存在则覆盖）
async fn upsert_profile<C: ConnectionTrait>(
    conn: &C,
    teacher_id: i64,
    input: TeacherProfileInput,
    now: i64,
) -> Result<TeacherProfile> {
    let input = input.normalized();

    let existing = TeacherProfiles::find()
        .filter(ProfileColumn::TeacherId.eq(teacher_id))
        .one(conn)
        .await
        .map_err(db_error("query teacher profile"))?;

    let is_update = existing.is_some();
    let mut model = match existing {
        Some(profile) => ProfileActiveModel {
            id: Set(profile.id),
            ..Default::default()
        },
        None => ProfileActiveModel {
            teacher_id: Set(teacher_id),
            ..Default::default()
        },
    };

    model.teacher_type = Set(input.teacher_type.to_string());
    model.specialization = Set(input.specialization);
    model.subject_ids = Set(encode_id_set(&input.subject_ids));
    model.class_ids = Set(encode_id_set(&input.class_ids));
    model.campus_ids = Set(encode_id_set(&input.campus_ids));
    model.updated_at = Set(now);

    let saved = if is_update {
        model.update(conn).await
    } else {
        model.insert(conn).await
    }
    .map_err(db_error("save teacher profile"))?;

    Ok(saved.into_profile())
}
