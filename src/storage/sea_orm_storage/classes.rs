//! 班级存储操作
//!
//! 关联数据（教师、学生、科目）通过独立查询返回扁平列表，不做深层预加载。

use super::{SeaOrmStorage, contains_ignore_case, db_delete_error, db_error, ensure_deleted};
use crate::entity::class_students::{
    ActiveModel as ClassStudentActiveModel, Column as ClassStudentColumn,
    Entity as ClassStudents,
};
use crate::entity::class_subjects::{
    ActiveModel as ClassSubjectActiveModel, Column as ClassSubjectColumn,
    Entity as ClassSubjects,
};
use crate::entity::class_teachers::{
    ActiveModel as ClassTeacherActiveModel, Column as ClassTeacherColumn,
    Entity as ClassTeachers,
};
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::entity::prelude::{Students, Subjects, Teachers};
use crate::entity::{students, subjects, teachers};
use crate::errors::Result;
use crate::models::{
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
    },
    common::normalize_ids,
    students::entities::Student,
    subjects::entities::Subject,
    teachers::entities::TeacherSummary,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建班级，教师与科目关联在同一事务内写入
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();
        let txn = self.db.begin().await.map_err(db_error("begin transaction"))?;

        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            capacity: Set(req.capacity),
            status: Set(req.status.to_string()),
            class_group_id: Set(req.class_group_id),
            campus_id: Set(req.campus_id),
            building_id: Set(req.building_id),
            room_id: Set(req.room_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let class = model
            .insert(&txn)
            .await
            .map_err(db_error("create class"))?;

        for teacher_id in normalize_ids(&req.teacher_ids) {
            ClassTeacherActiveModel {
                class_id: Set(class.id),
                teacher_id: Set(teacher_id),
                assigned_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(db_error("assign class teacher"))?;
        }

        for subject_id in normalize_ids(&req.subject_ids) {
            ClassSubjectActiveModel {
                class_id: Set(class.id),
                subject_id: Set(subject_id),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(db_error("add class subject"))?;
        }

        txn.commit().await.map_err(db_error("commit transaction"))?;

        Ok(class.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(db_error("query class"))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 列出班级，状态缺省为 active，名称大小写不敏感匹配
    pub async fn list_classes_impl(&self, query: ClassListQuery) -> Result<Vec<Class>> {
        let status = query.status.unwrap_or_default();
        let mut select = Classes::find().filter(Column::Status.eq(status.to_string()));

        if let Some(campus_id) = query.campus_id {
            select = select.filter(Column::CampusId.eq(campus_id));
        }
        if let Some(class_group_id) = query.class_group_id {
            select = select.filter(Column::ClassGroupId.eq(class_group_id));
        }
        if let Some(cond) = contains_ignore_case(&["name"], query.search.as_deref()) {
            select = select.filter(cond);
        }

        let classes = select
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error("list classes"))?;

        Ok(classes.into_iter().map(|m| m.into_class()).collect())
    }

    /// 更新班级信息
    pub async fn update_class_impl(&self, update: UpdateClassRequest) -> Result<Option<Class>> {
        // 先检查班级是否存在
        if self.get_class_by_id_impl(update.id).await?.is_none() {
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
        if let Some(capacity) = update.capacity {
            model.capacity = Set(capacity);
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(class_group_id) = update.class_group_id {
            model.class_group_id = Set(class_group_id);
        }
        if let Some(campus_id) = update.campus_id {
            model.campus_id = Set(campus_id);
        }
        if let Some(building_id) = update.building_id {
            model.building_id = Set(Some(building_id));
        }
        if let Some(room_id) = update.room_id {
            model.room_id = Set(Some(room_id));
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(db_error("update class"))?;

        Ok(Some(result.into_class()))
    }

    /// 删除班级，不存在时返回 NotFound
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<()> {
        let result = Classes::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(db_delete_error("delete class"))?;

        ensure_deleted(result, "Class", class_id)
    }

    pub async fn add_class_teacher_impl(&self, class_id: i64, teacher_id: i64) -> Result<()> {
        ClassTeacherActiveModel {
            class_id: Set(class_id),
            teacher_id: Set(teacher_id),
            assigned_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(db_error("assign class teacher"))?;

        Ok(())
    }

    pub async fn remove_class_teacher_impl(&self, class_id: i64, teacher_id: i64) -> Result<()> {
        let result = ClassTeachers::delete_many()
            .filter(ClassTeacherColumn::ClassId.eq(class_id))
            .filter(ClassTeacherColumn::TeacherId.eq(teacher_id))
            .exec(&self.db)
            .await
            .map_err(db_error("remove class teacher"))?;

        ensure_deleted(result, "Class teacher", teacher_id)
    }

    /// 班级教师摘要，按姓名排序
    pub async fn list_class_teachers_impl(&self, class_id: i64) -> Result<Vec<TeacherSummary>> {
        let teacher_ids: Vec<i64> = ClassTeachers::find()
            .select_only()
            .column(ClassTeacherColumn::TeacherId)
            .filter(ClassTeacherColumn::ClassId.eq(class_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("list class teachers"))?;

        if teacher_ids.is_empty() {
            return Ok(Vec::new());
        }

        let teachers = Teachers::find()
            .filter(teachers::Column::Id.is_in(teacher_ids))
            .order_by_asc(teachers::Column::LastName)
            .order_by_asc(teachers::Column::FirstName)
            .all(&self.db)
            .await
            .map_err(db_error("list class teachers"))?;

        Ok(teachers.into_iter().map(|m| m.into_summary()).collect())
    }

    pub async fn enroll_class_student_impl(&self, class_id: i64, student_id: i64) -> Result<()> {
        ClassStudentActiveModel {
            class_id: Set(class_id),
            student_id: Set(student_id),
            enrolled_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(db_error("enroll class student"))?;

        Ok(())
    }

    pub async fn unenroll_class_student_impl(&self, class_id: i64, student_id: i64) -> Result<()> {
        let result = ClassStudents::delete_many()
            .filter(ClassStudentColumn::ClassId.eq(class_id))
            .filter(ClassStudentColumn::StudentId.eq(student_id))
            .exec(&self.db)
            .await
            .map_err(db_error("unenroll class student"))?;

        ensure_deleted(result, "Class student", student_id)
    }

    pub async fn list_class_students_impl(&self, class_id: i64) -> Result<Vec<Student>> {
        let student_ids: Vec<i64> = ClassStudents::find()
            .select_only()
            .column(ClassStudentColumn::StudentId)
            .filter(ClassStudentColumn::ClassId.eq(class_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("list class students"))?;

        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        let students = Students::find()
            .filter(students::Column::Id.is_in(student_ids))
            .order_by_asc(students::Column::LastName)
            .order_by_asc(students::Column::FirstName)
            .all(&self.db)
            .await
            .map_err(db_error("list class students"))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    pub async fn count_class_students_impl(&self, class_id: i64) -> Result<i64> {
        let count = ClassStudents::find()
            .filter(ClassStudentColumn::ClassId.eq(class_id))
            .count(&self.db)
            .await
            .map_err(db_error("count class students"))?;

        Ok(count as i64)
    }

    pub async fn add_class_subject_impl(&self, class_id: i64, subject_id: i64) -> Result<()> {
        ClassSubjectActiveModel {
            class_id: Set(class_id),
            subject_id: Set(subject_id),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(db_error("add class subject"))?;

        Ok(())
    }

    pub async fn remove_class_subject_impl(&self, class_id: i64, subject_id: i64) -> Result<()> {
        let result = ClassSubjects::delete_many()
            .filter(ClassSubjectColumn::ClassId.eq(class_id))
            .filter(ClassSubjectColumn::SubjectId.eq(subject_id))
            .exec(&self.db)
            .await
            .map_err(db_error("remove class subject"))?;

        ensure_deleted(result, "Class subject", subject_id)
    }

    /// 班级科目，按名称排序
    pub async fn list_class_subjects_impl(&self, class_id: i64) -> Result<Vec<Subject>> {
        let subject_ids: Vec<i64> = ClassSubjects::find()
            .select_only()
            .column(ClassSubjectColumn::SubjectId)
            .filter(ClassSubjectColumn::ClassId.eq(class_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("list class subjects"))?;

        if subject_ids.is_empty() {
            return Ok(Vec::new());
        }

        let subjects = Subjects::find()
            .filter(subjects::Column::Id.is_in(subject_ids))
            .order_by_asc(subjects::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_error("list class subjects"))?;

        Ok(subjects.into_iter().map(|m| m.into_subject()).collect())
    }
}
