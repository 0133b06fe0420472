//! 成绩册与评估体系存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::assessment_periods::{
    ActiveModel as PeriodActiveModel, Column as PeriodColumn, Entity as AssessmentPeriods,
};
use crate::entity::assessment_systems::{
    ActiveModel as SystemActiveModel, Column as SystemColumn, Entity as AssessmentSystems,
};
use crate::entity::gradebooks::{ActiveModel, Column, Entity as Gradebooks};
use crate::entity::subject_records::{
    ActiveModel as RecordActiveModel, Column as RecordColumn, Entity as SubjectRecords,
};
use crate::entity::term_structures::{
    ActiveModel as StructureActiveModel, Column as StructureColumn, Entity as TermStructures,
};
use crate::entity::terms::{ActiveModel as TermActiveModel, Column as TermColumn, Entity as Terms};
use crate::errors::Result;
use crate::models::common::RecordStatus;
use crate::models::gradebooks::{
    entities::{
        AssessmentPeriod, AssessmentSystem, GradebookBlueprint, GradebookRecord, SubjectRecord,
        Term, TermStructure,
    },
    requests::{CreateAssessmentSystemRequest, UpdateSubjectRecordRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
    sea_query::Expr,
};

impl SeaOrmStorage {
    pub async fn find_gradebook_by_class_impl(
        &self,
        class_id: i64,
    ) -> Result<Option<GradebookRecord>> {
        let result = Gradebooks::find()
            .filter(Column::ClassId.eq(class_id))
            .one(&self.db)
            .await
            .map_err(db_error("query gradebook"))?;

        Ok(result.map(|m| m.into_record()))
    }

    pub async fn get_gradebook_by_id_impl(&self, id: i64) -> Result<Option<GradebookRecord>> {
        let result = Gradebooks::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("query gradebook"))?;

        Ok(result.map(|m| m.into_record()))
    }

    /// 在单个事务内写入成绩册、学期结构、学期、评估阶段与科目记录
    ///
    /// class_id 上的唯一索引保证并发初始化时只有一个事务能提交，
    /// 失败方会得到 Conflict 错误。
    pub async fn create_gradebook_impl(
        &self,
        blueprint: GradebookBlueprint,
    ) -> Result<GradebookRecord> {
        let now = chrono::Utc::now().timestamp();
        let txn = self.db.begin().await.map_err(db_error("begin transaction"))?;

        let gradebook = ActiveModel {
            class_id: Set(blueprint.class_id),
            assessment_system_id: Set(blueprint.assessment_system_id),
            status: Set(RecordStatus::Active.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(db_error("create gradebook"))?;

        let structure = StructureActiveModel {
            gradebook_id: Set(gradebook.id),
            academic_year: Set(blueprint.academic_year),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(db_error("create term structure"))?;

        for term in blueprint.terms {
            let saved = TermActiveModel {
                term_structure_id: Set(structure.id),
                name: Set(term.name),
                sequence: Set(term.sequence),
                start_date: Set(None),
                end_date: Set(None),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(db_error("create term"))?;

            for period in term.periods {
                PeriodActiveModel {
                    term_id: Set(saved.id),
                    name: Set(period.name),
                    sequence: Set(period.sequence),
                    weight: Set(period.weight),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(db_error("create assessment period"))?;
            }
        }

        for subject_id in blueprint.subject_ids {
            RecordActiveModel {
                gradebook_id: Set(gradebook.id),
                subject_id: Set(subject_id),
                score: Set(None),
                grade: Set(None),
                remarks: Set(None),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(db_error("create subject record"))?;
        }

        txn.commit().await.map_err(db_error("commit transaction"))?;

        Ok(gradebook.into_record())
    }

    pub async fn get_term_structure_impl(&self, gradebook_id: i64) -> Result<Option<TermStructure>> {
        let result = TermStructures::find()
            .filter(StructureColumn::GradebookId.eq(gradebook_id))
            .one(&self.db)
            .await
            .map_err(db_error("query term structure"))?;

        Ok(result.map(|m| m.into_term_structure()))
    }

    pub async fn list_terms_impl(&self, term_structure_id: i64) -> Result<Vec<Term>> {
        let terms = Terms::find()
            .filter(TermColumn::TermStructureId.eq(term_structure_id))
            .order_by_asc(TermColumn::Sequence)
            .all(&self.db)
            .await
            .map_err(db_error("list terms"))?;

        Ok(terms.into_iter().map(|m| m.into_term()).collect())
    }

    pub async fn list_assessment_periods_impl(
        &self,
        term_ids: &[i64],
    ) -> Result<Vec<AssessmentPeriod>> {
        if term_ids.is_empty() {
            return Ok(Vec::new());
        }

        let periods = AssessmentPeriods::find()
            .filter(PeriodColumn::TermId.is_in(term_ids.iter().copied()))
            .order_by_asc(PeriodColumn::TermId)
            .order_by_asc(PeriodColumn::Sequence)
            .all(&self.db)
            .await
            .map_err(db_error("list assessment periods"))?;

        Ok(periods.into_iter().map(|m| m.into_period()).collect())
    }

    pub async fn list_subject_records_impl(&self, gradebook_id: i64) -> Result<Vec<SubjectRecord>> {
        let records = SubjectRecords::find()
            .filter(RecordColumn::GradebookId.eq(gradebook_id))
            .order_by_asc(RecordColumn::SubjectId)
            .all(&self.db)
            .await
            .map_err(db_error("list subject records"))?;

        Ok(records.into_iter().map(|m| m.into_subject_record()).collect())
    }

    pub async fn update_subject_record_impl(
        &self,
        update: UpdateSubjectRecordRequest,
    ) -> Result<Option<SubjectRecord>> {
        let existing = SubjectRecords::find()
            .filter(RecordColumn::GradebookId.eq(update.gradebook_id))
            .filter(RecordColumn::SubjectId.eq(update.subject_id))
            .one(&self.db)
            .await
            .map_err(db_error("query subject record"))?;

        let Some(record) = existing else {
            return Ok(None);
        };

        // 只写入提供的字段；空字符串清空等级或评语
        let mut model: RecordActiveModel = record.into();
        if let Some(score) = update.score {
            model.score = Set(Some(score));
        }
        if let Some(grade) = update.grade {
            model.grade = Set(Some(grade.trim().to_string()).filter(|g| !g.is_empty()));
        }
        if let Some(remarks) = update.remarks {
            model.remarks = Set(Some(remarks).filter(|r| !r.trim().is_empty()));
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(db_error("update subject record"))?;

        Ok(Some(updated.into_subject_record()))
    }

    /// 创建评估体系；设为默认时清除其它体系的默认标记
    pub async fn create_assessment_system_impl(
        &self,
        req: CreateAssessmentSystemRequest,
    ) -> Result<AssessmentSystem> {
        let txn = self.db.begin().await.map_err(db_error("begin transaction"))?;

        if req.is_default {
            AssessmentSystems::update_many()
                .col_expr(SystemColumn::IsDefault, Expr::value(false))
                .filter(SystemColumn::IsDefault.eq(true))
                .exec(&txn)
                .await
                .map_err(db_error("reset default assessment system"))?;
        }

        let saved = SystemActiveModel {
            name: Set(req.name.trim().to_string()),
            kind: Set(req.kind.to_string()),
            min_score: Set(req.min_score),
            max_score: Set(req.max_score),
            passing_score: Set(req.passing_score),
            is_default: Set(req.is_default),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(db_error("create assessment system"))?;

        txn.commit().await.map_err(db_error("commit transaction"))?;

        Ok(saved.into_assessment_system())
    }

    pub async fn get_assessment_system_by_id_impl(
        &self,
        id: i64,
    ) -> Result<Option<AssessmentSystem>> {
        let result = AssessmentSystems::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("query assessment system"))?;

        Ok(result.map(|m| m.into_assessment_system()))
    }

    pub async fn get_assessment_system_by_name_impl(
        &self,
        name: &str,
    ) -> Result<Option<AssessmentSystem>> {
        let result = AssessmentSystems::find()
            .filter(SystemColumn::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_error("query assessment system"))?;

        Ok(result.map(|m| m.into_assessment_system()))
    }

    pub async fn find_default_assessment_system_impl(&self) -> Result<Option<AssessmentSystem>> {
        let result = AssessmentSystems::find()
            .filter(SystemColumn::IsDefault.eq(true))
            .order_by_asc(SystemColumn::Id)
            .one(&self.db)
            .await
            .map_err(db_error("query default assessment system"))?;

        Ok(result.map(|m| m.into_assessment_system()))
    }

    pub async fn list_assessment_systems_impl(&self) -> Result<Vec<AssessmentSystem>> {
        let systems = AssessmentSystems::find()
            .order_by_asc(SystemColumn::Name)
            .all(&self.db)
            .await
            .map_err(db_error("list assessment systems"))?;

        Ok(systems
            .into_iter()
            .map(|m| m.into_assessment_system())
            .collect())
    }
}
