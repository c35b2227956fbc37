//! # エラーレスポンス
//!
//! 全エンドポイント共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - 失敗レスポンスのボディは `{"message": <エラーメッセージ>}` の一形式のみ
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は各サービスの責務（shared に axum 依存を入れない）
//! - 404 はボディを持たないため、この型を経由しない

use serde::{Deserialize, Serialize};

/// エラーレスポンスボディ
///
/// ステータスコードはレスポンス側で決まり、ボディは常に
/// `{"message": …}` の単一形式。エラーコード体系や再試行情報は持たない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    /// エラーメッセージからレスポンスボディを作成する
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_でメッセージが設定される() {
        let error = ErrorResponse::new("description は必須です");

        assert_eq!(error.message, "description は必須です");
    }

    #[test]
    fn test_serializeで正しいjson形状にする() {
        let error = ErrorResponse::new("内部エラー");
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json, serde_json::json!({ "message": "内部エラー" }));
    }

    #[test]
    fn test_jsonデシリアライズが正しく動作する() {
        let json = r#"{"message": "データベースエラー"}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();

        assert_eq!(error.message, "データベースエラー");
    }
}
