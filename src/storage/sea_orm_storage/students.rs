use super::{SeaOrmStorage, contains_ignore_case, db_delete_error, db_error, ensure_deleted};
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::Result;
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_number: Set(req.student_number.trim().to_string()),
            first_name: Set(req.first_name.trim().to_string()),
            last_name: Set(req.last_name.trim().to_string()),
            email: Set(req.email),
            status: Set(req.status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("create student"))?;

        Ok(result.into_student())
    }

    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("query student"))?;

        Ok(result.map(|m| m.into_student()))
    }

    pub async fn list_students_impl(&self, query: StudentListQuery) -> Result<Vec<Student>> {
        let status = query.status.unwrap_or_default();
        let mut select = Students::find().filter(Column::Status.eq(status.to_string()));

        if let Some(cond) =
            contains_ignore_case(&["first_name", "last_name"], query.search.as_deref())
        {
            select = select.filter(cond);
        }

        let students = select
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName)
            .all(&self.db)
            .await
            .map_err(db_error("list students"))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    pub async fn update_student_impl(&self, update: UpdateStudentRequest) -> Result<Option<Student>> {
        if self.get_student_by_id_impl(update.id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(update.id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(first_name) = update.first_name {
            model.first_name = Set(first_name.trim().to_string());
        }
        if let Some(last_name) = update.last_name {
            model.last_name = Set(last_name.trim().to_string());
        }
        if let Some(email) = update.email {
            model.email = Set(Some(email));
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(db_error("update student"))?;

        Ok(Some(result.into_student()))
    }

    pub async fn delete_student_impl(&self, id: i64) -> Result<()> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_delete_error("delete student"))?;

        ensure_deleted(result, "Student", id)
    }
}
