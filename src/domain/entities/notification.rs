//! # Notification Entity
//!
//! 運用者向け通知のドメインエンティティ

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 通知の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// 開始直前のアラート
    Alert,
    /// 未クローズセッションのリマインダー
    Reminder,
}

/// 運用者向け通知
///
/// `id` は通知の種類とセッションIDから決定的に導出される重複排除キーであり、
/// ランダムな識別子ではない。同じ (種類, セッション) の組に対して
/// 二度生成されることはない
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub timestamp: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_id: Option<String>,
    pub read: bool,
}

impl Notification {
    /// 開始前アラートの重複排除キー
    pub fn pre_id(session_id: &str) -> String {
        format!("pre-{}", session_id)
    }

    /// 未クローズリマインダーの重複排除キー
    pub fn post_id(session_id: &str) -> String {
        format!("post-{}", session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn create_test_notification() -> Notification {
        Notification {
            id: Notification::pre_id("s1"),
            title: "Formation imminente".to_string(),
            message: "La formation \"Rust\" commence dans 15 min.".to_string(),
            kind: NotificationKind::Alert,
            timestamp: NaiveDate::from_ymd_opt(2024, 1, 10)
                .unwrap()
                .and_hms_opt(9, 20, 0)
                .unwrap(),
            training_id: Some("s1".to_string()),
            read: false,
        }
    }

    #[test]
    fn test_dedup_keys_are_deterministic() {
        assert_eq!(Notification::pre_id("abc"), "pre-abc");
        assert_eq!(Notification::post_id("abc"), "post-abc");
        assert_ne!(Notification::pre_id("abc"), Notification::post_id("abc"));
    }

    #[test]
    fn test_serialization_field_shapes() {
        let notif = create_test_notification();

        let json_str = serde_json::to_string(&notif).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json_str).unwrap();

        assert_eq!(parsed["id"], "pre-s1");
        assert_eq!(parsed["type"], "alert");
        assert_eq!(parsed["trainingId"], "s1");
        assert_eq!(parsed["read"], false);
    }

    #[test]
    fn test_kind_roundtrip() {
        let mut notif = create_test_notification();
        notif.kind = NotificationKind::Reminder;

        let json_str = serde_json::to_string(&notif).unwrap();
        let back: Notification = serde_json::from_str(&json_str).unwrap();

        assert_eq!(back.kind, NotificationKind::Reminder);
    }
}
