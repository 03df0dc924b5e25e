//! Built-in keyword rules
//!
//! Tiered weights: 3 for launch blockers, 2 for strong signals, 1 for weak
//! signals. Keywords are Japanese with common English equivalents.

use super::rule::{ClassificationRule, KeywordGroup};
use crate::core::quadrant::Quadrant;

pub(crate) fn rules() -> Vec<ClassificationRule> {
    vec![ship_now(), validate_grow(), delegate_automate(), drop_backlog()]
}

fn ship_now() -> ClassificationRule {
    ClassificationRule::new(Quadrant::A, "launch-blocking issue to fix immediately")
        .with_group(
            KeywordGroup::new(
                3,
                [
                    "バグ", "エラー", "緊急", "ブロッカー", "動かない", "壊れた", "ダウン", "障害",
                    "bug", "crash", "outage", "urgent", "blocker", "hotfix",
                ],
            )
            .with_category("blocker"),
        )
        .with_group(
            KeywordGroup::new(
                3,
                [
                    "決済", "支払い", "課金", "セキュリティ", "脆弱性", "ハッキング",
                    "payment", "billing", "security", "vulnerability",
                ],
            )
            .with_category("revenue-critical"),
        )
        .with_group(
            KeywordGroup::new(
                2,
                [
                    "修正", "デプロイ", "本番", "サーバー", "ログイン", "認証",
                    "deploy", "production", "login",
                ],
            )
            .with_category("production"),
        )
}

fn validate_grow() -> ClassificationRule {
    ClassificationRule::new(Quadrant::B, "high-ROI validation or growth work")
        .with_group(
            KeywordGroup::new(
                2,
                [
                    "収益", "売上", "コンバージョン", "リテンション", "成長",
                    "revenue", "conversion", "retention", "growth",
                ],
            )
            .with_category("growth"),
        )
        .with_group(
            KeywordGroup::new(
                2,
                [
                    "検証", "仮説", "A/B", "A/Bテスト", "分析", "ユーザー",
                    "validate", "hypothesis", "interview", "analytics",
                ],
            )
            .with_category("validation"),
        )
        .with_group(
            KeywordGroup::new(
                1,
                [
                    "機能", "新機能", "追加", "改善", "最適化", "パフォーマンス", "体験",
                    "UI", "UX", "デザイン", "マーケティング", "データ", "統計",
                    "feature", "improve", "optimize", "performance", "design", "marketing",
                ],
            )
            .with_category("product"),
        )
}

fn delegate_automate() -> ClassificationRule {
    ClassificationRule::new(Quadrant::C, "ops work to delegate or automate")
        .with_group(
            KeywordGroup::new(
                2,
                [
                    "設定", "環境", "セットアップ", "インストール", "依存関係", "CI/CD",
                    "バックアップ", "監視", "setup", "install", "backup", "monitoring",
                ],
            )
            .with_category("operations"),
        )
        .with_group(
            KeywordGroup::new(1, ["メール", "通知", "アラート", "email", "notification", "alert"])
                .with_category("communication"),
        )
        .with_group(
            KeywordGroup::new(
                1,
                [
                    "ドキュメント", "README", "コメント", "整理", "リファクタ", "ログ",
                    "テスト", "単体テスト", "結合テスト", "E2E", "docs", "refactor", "cleanup",
                ],
            )
            .with_category("housekeeping"),
        )
}

fn drop_backlog() -> ClassificationRule {
    ClassificationRule::new(Quadrant::D, "low-impact backlog item")
        .with_group(
            KeywordGroup::new(
                1,
                [
                    "アイデア", "検討", "調査", "研究", "実験", "プロトタイプ",
                    "idea", "research", "experiment", "prototype",
                ],
            )
            .with_category("exploration"),
        )
        .with_group(
            KeywordGroup::new(1, ["将来", "後で", "いつか", "余裕", "時間", "暇", "someday", "later"])
                .with_category("someday"),
        )
        .with_group(
            KeywordGroup::new(
                1,
                ["趣味", "学習", "勉強", "練習", "試行錯誤", "hobby", "learn", "study"],
            )
            .with_category("learning"),
        )
}
