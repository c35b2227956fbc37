//! # Product API エラー定義
//!
//! Product API で発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## 設計方針
//!
//! ハンドラは構造化された [`ApiError`] を返し、この一箇所で HTTP
//! レスポンスへ変換する。すべての操作が同じ変換を通るため、
//! エラーが握りつぶされて未処理のまま落ちる経路は存在しない。
//!
//! | バリアント | HTTP ステータス | レスポンスボディ |
//! |-----------|----------------|----------------|
//! | `Validation` | 400 Bad Request | `{"message": …}` |
//! | `NotFound` | 404 Not Found | なし（空ボディ） |
//! | `Store` | 500 Internal Server Error | `{"message": …}` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use zaiko_domain::DomainError;
use zaiko_infra::InfraError;
use zaiko_shared::ErrorResponse;

/// Product API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// バリデーションエラー
    ///
    /// メッセージには違反したフィールド名が含まれる。
    #[error("{0}")]
    Validation(String),

    /// リソースが見つからない
    ///
    /// 404 は空ボディで返すため、メッセージは持たない。
    #[error("リソースが見つかりません")]
    NotFound,

    /// データストアエラー
    #[error("{0}")]
    Store(#[from] InfraError),
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(_) => Self::Validation(e.to_string()),
            DomainError::NotFound { .. } => Self::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg))).into_response()
            }
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Store(e) => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "データストアエラー"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new(e.to_string())),
                )
                    .into_response()
            }
        }
    }
}
