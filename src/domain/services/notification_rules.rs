//! # Notification Rules Service
//!
//! 通知導出のビジネスルール
//!
//! 時刻比較に基づく状態判定（開始直前・クローズ忘れ）はすべてこのサービスに
//! 集約される。呼び出し元が既存の通知ログを渡し、エンジンは新規分のみを返す。

use std::collections::HashSet;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::domain::entities::notification::{Notification, NotificationKind};
use crate::domain::entities::training_session::{TrainingSession, TrainingStatus};

/// 開始前アラートの導出ウィンドウ（分）
const PRE_ALERT_WINDOW_MINUTES: i64 = 15;

/// 通知導出エンジン
///
/// `(全セッション, 既存通知, 現在時刻)` の純粋関数。内部状態を持たず、
/// 蓄積された通知ログの所有は呼び出し元の責務。既存通知は既読・未読を
/// 問わず抑制集合として扱われ、同じ (種類, セッション) の組に対して
/// 通知が二度導出されることはない
pub struct NotificationEngine;

impl NotificationEngine {
    /// 全セッションを走査して新規通知を導出する
    ///
    /// # Arguments
    ///
    /// * `sessions` - 走査対象の全セッション
    /// * `existing` - 既存の通知ログ（抑制集合）
    /// * `now` - 現在時刻（ローカル時刻）
    ///
    /// # Returns
    ///
    /// 新規に導出された通知のリスト。1回の呼び出し内でも
    /// IDの重複は発生しない
    pub fn check(
        sessions: &[TrainingSession],
        existing: &[Notification],
        now: NaiveDateTime,
    ) -> Vec<Notification> {
        // 既存 ∪ 今回導出済み を重複排除キーの集合として保持する
        let mut seen: HashSet<String> = existing.iter().map(|n| n.id.clone()).collect();
        let mut new_notifications = Vec::new();

        for session in sessions {
            // ルール1: 開始前アラート（開始まで残り (0, 15] 分）
            if session.status == TrainingStatus::Scheduled {
                let remaining = session.starts_at() - now;
                if remaining > Duration::zero()
                    && remaining <= Duration::minutes(PRE_ALERT_WINDOW_MINUTES)
                {
                    let id = Notification::pre_id(&session.id);
                    if seen.insert(id.clone()) {
                        new_notifications.push(Notification {
                            id,
                            title: "Formation imminente".to_string(),
                            message: format!(
                                "La formation \"{}\" commence dans 15 min. \
                                 Pensez à faire signer les participants.",
                                session.training_name
                            ),
                            kind: NotificationKind::Alert,
                            timestamp: now,
                            training_id: Some(session.id.clone()),
                            read: false,
                        });
                    }
                }
            }

            // ルール2: クローズ忘れリマインダー（実施日の翌日0時以降）
            if session.status != TrainingStatus::Completed {
                if let Some(threshold) = day_after_midnight(session.date) {
                    if now >= threshold {
                        let id = Notification::post_id(&session.id);
                        if seen.insert(id.clone()) {
                            new_notifications.push(Notification {
                                id,
                                title: "Session non clôturée".to_string(),
                                message: format!(
                                    "Oubli de signature ? La session \"{}\" du {} \
                                     n'est pas clôturée par le formateur.",
                                    session.training_name,
                                    format_date_fr(session.date)
                                ),
                                kind: NotificationKind::Reminder,
                                timestamp: now,
                                training_id: Some(session.id.clone()),
                                read: false,
                            });
                        }
                    }
                }
            }
        }

        new_notifications
    }
}

/// 実施日の翌日0時（ローカル深夜）を返す
fn day_after_midnight(date: NaiveDate) -> Option<NaiveDateTime> {
    date.succ_opt().and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// DD/MM/YYYY 形式の表示用日付
fn format_date_fr(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
