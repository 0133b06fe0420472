use chrono::NaiveDate;

use crate::config::GradebookConfig;
use crate::models::gradebooks::entities::{GradebookBlueprint, PeriodBlueprint, TermBlueprint};
use crate::utils::dates::academic_year_for;

/// 根据配置生成成绩册初始化蓝图
///
/// 每个学期包含全部配置的评估阶段，阶段权重平均分配（保留两位小数）。
/// 学期或评估阶段配置为空时使用默认配置。
pub fn build_blueprint(
    config: &GradebookConfig,
    class_id: i64,
    assessment_system_id: i64,
    subject_ids: Vec<i64>,
    today: NaiveDate,
) -> GradebookBlueprint {
    let defaults = GradebookConfig::default();
    let term_names = if config.term_names.is_empty() {
        &defaults.term_names
    } else {
        &config.term_names
    };
    let period_names = if config.assessment_periods.is_empty() {
        &defaults.assessment_periods
    } else {
        &config.assessment_periods
    };

    let weight = (100.0 / period_names.len() as f64 * 100.0).round() / 100.0;

    let terms = term_names
        .iter()
        .zip(1..)
        .map(|(name, sequence)| TermBlueprint {
            name: name.clone(),
            sequence,
            periods: period_names
                .iter()
                .zip(1..)
                .map(|(name, sequence)| PeriodBlueprint {
                    name: name.clone(),
                    sequence,
                    weight,
                })
                .collect(),
        })
        .collect();

    GradebookBlueprint {
        class_id,
        assessment_system_id,
        academic_year: academic_year_for(today),
        terms,
        subject_ids,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_blueprint_from_default_config() {
        let blueprint = build_blueprint(
            &GradebookConfig::default(),
            4,
            1,
            vec![2, 3],
            day(2025, 10, 1),
        );

        assert_eq!(blueprint.class_id, 4);
        assert_eq!(blueprint.academic_year, "2025-2026");
        assert_eq!(blueprint.terms.len(), 3);
        assert_eq!(blueprint.terms[2].sequence, 3);
        for term in &blueprint.terms {
            assert_eq!(term.periods.len(), 2);
            assert!(term.periods.iter().all(|p| p.weight == 50.0));
        }
        assert_eq!(blueprint.subject_ids, vec![2, 3]);
    }

    #[test]
    fn test_weights_are_rounded_and_empty_config_falls_back() {
        let config = GradebookConfig {
            term_names: vec![],
            assessment_periods: vec!["A".into(), "B".into(), "C".into()],
            ..GradebookConfig::default()
        };
        let blueprint = build_blueprint(&config, 1, 1, vec![], day(2025, 3, 1));

        assert_eq!(blueprint.academic_year, "2024-2025");
        assert_eq!(blueprint.terms.len(), 3);
        assert_eq!(blueprint.terms[0].periods[0].weight, 33.33);
    }
}
