//! # Session Planning Service
//!
//! 抽出された研修データからセッション群を構成するビジネスルール

use chrono::NaiveDate;

use crate::domain::entities::training_session::{Participant, TrainingSession};
use crate::domain::errors::DomainError;
use crate::domain::repositories::intake_repository::ConventionData;

/// セッション構成サービス
///
/// 複数日にまたがる研修は日付ごとに兄弟セッションへ展開される。
/// 各セッションは企業・講師・参加者リストを共有し、IDと日付は固有、
/// 研修名には " (Jour k)" が付与される
pub struct SessionPlanner;

impl SessionPlanner {
    /// 抽出結果をセッション群へ展開する
    ///
    /// # Arguments
    ///
    /// * `data` - 抽出された研修データ
    /// * `trainer_name` - 割り当てる講師名
    /// * `fallback_date` - 日付が1件も抽出されなかった場合に使う当日の日付
    ///
    /// # Returns
    ///
    /// 日付ごとのセッションのリスト（抽出された日付順）
    ///
    /// # Errors
    ///
    /// 企業名・研修名・講師名・参加者名のいずれかが空白の場合にエラーを返す。
    /// その場合セッションは1件も作成されない
    pub fn expand(
        data: &ConventionData,
        trainer_name: &str,
        fallback_date: NaiveDate,
    ) -> Result<Vec<TrainingSession>, DomainError> {
        let dates: Vec<NaiveDate> = if data.dates.is_empty() {
            vec![fallback_date]
        } else {
            data.dates.clone()
        };

        let multi_day = dates.len() > 1;
        let mut sessions = Vec::with_capacity(dates.len());

        for (index, date) in dates.into_iter().enumerate() {
            let training_name = if multi_day {
                format!("{} (Jour {})", data.training_name, index + 1)
            } else {
                data.training_name.clone()
            };

            let participants = data
                .participants
                .iter()
                .map(|draft| Participant::new(&draft.name, &draft.email, &draft.role))
                .collect::<Result<Vec<_>, _>>()?;

            sessions.push(TrainingSession::new(
                &data.company_name,
                &training_name,
                date,
                trainer_name,
                participants,
            )?);
        }

        Ok(sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::intake_repository::ParticipantDraft;

    fn create_test_convention(dates: Vec<NaiveDate>) -> ConventionData {
        ConventionData {
            company_name: "TechSolutions SAS".to_string(),
            training_name: "Automatisation avec Python".to_string(),
            dates,
            participants: vec![
                ParticipantDraft {
                    name: "Alice Martin".to_string(),
                    email: "alice@tech.com".to_string(),
                    role: "Dev".to_string(),
                },
                ParticipantDraft {
                    name: "Bob Wilson".to_string(),
                    email: "bob@tech.com".to_string(),
                    role: "Manager".to_string(),
                },
            ],
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    #[test]
    fn test_expand_single_date_no_suffix() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let data = create_test_convention(vec![date]);

        let sessions = SessionPlanner::expand(&data, "Rali El kohen", today()).unwrap();

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].training_name, "Automatisation avec Python");
        assert_eq!(sessions[0].date, date);
        assert_eq!(sessions[0].trainer_name, "Rali El kohen");
    }

    #[test]
    fn test_expand_multi_day_suffixes_and_shares_roster() {
        let data = create_test_convention(vec![
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 11).unwrap(),
        ]);

        let sessions = SessionPlanner::expand(&data, "Rali El kohen", today()).unwrap();

        assert_eq!(sessions.len(), 2);
        assert_eq!(
            sessions[0].training_name,
            "Automatisation avec Python (Jour 1)"
        );
        assert_eq!(
            sessions[1].training_name,
            "Automatisation avec Python (Jour 2)"
        );
        assert_ne!(sessions[0].id, sessions[1].id);
        assert_eq!(sessions[0].company_name, sessions[1].company_name);

        let names = |s: &TrainingSession| {
            s.participants
                .iter()
                .map(|p| p.name.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(names(&sessions[0]), names(&sessions[1]));
    }

    #[test]
    fn test_expand_empty_dates_falls_back_to_today() {
        let data = create_test_convention(vec![]);

        let sessions = SessionPlanner::expand(&data, "Rali El kohen", today()).unwrap();

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].date, today());
        // 単日なのでサフィックスなし
        assert_eq!(sessions[0].training_name, "Automatisation avec Python");
    }

    #[test]
    fn test_expand_blank_company_creates_nothing() {
        let mut data = create_test_convention(vec![today()]);
        data.company_name = "  ".to_string();

        let result = SessionPlanner::expand(&data, "Rali El kohen", today());

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_expand_blank_participant_name_creates_nothing() {
        let mut data = create_test_convention(vec![today()]);
        data.participants[1].name = "".to_string();

        let result = SessionPlanner::expand(&data, "Rali El kohen", today());

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_expand_participants_start_unsigned() {
        let data = create_test_convention(vec![today()]);

        let sessions = SessionPlanner::expand(&data, "Rali El kohen", today()).unwrap();

        for participant in &sessions[0].participants {
            assert!(!participant.has_signed);
            assert!(!participant.is_present);
            assert!(participant.signature.is_none());
        }
    }
}
