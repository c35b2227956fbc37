//! # 商品ハンドラ
//!
//! 商品カタログの公開 API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /api/products` - 商品一覧
//! - `POST /api/products` - 商品作成
//! - `GET /api/products/{product_id}` - 商品取得
//! - `PUT /api/products/{product_id}` - 商品更新（全置換）
//! - `DELETE /api/products/{product_id}` - 商品削除
//!
//! ## レスポンス形式
//!
//! 成功時は商品レコード（一覧は配列）をそのまま JSON で返す。
//! 404 は空ボディ、400/500 は `{"message": …}` ボディ
//! （変換は [`crate::error::ApiError`] に集約）。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use zaiko_domain::product::{Product, ProductId};

use crate::{
    error::ApiError,
    usecase::product::{CreateProductInput, ProductUseCaseImpl, UpdateProductInput},
};

/// 商品 API の共有状態
pub struct ProductState {
    pub usecase: ProductUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 商品作成リクエスト
///
/// フィールド欠落はデシリアライズエラーではなくバリデーションエラーとして
/// 報告するため、`Option` で受ける。
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name:        Option<String>,
    pub description: Option<String>,
}

/// 商品更新リクエスト（全置換）
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name:        Option<String>,
    pub description: Option<String>,
}

/// 商品 DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductDto {
    pub id:          Uuid,
    pub name:        String,
    pub description: String,
    pub created_at:  String,
    pub updated_at:  String,
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            id:          *product.id().as_uuid(),
            name:        product.name().as_str().to_string(),
            description: product.description().as_str().to_string(),
            created_at:  product.created_at().to_rfc3339(),
            updated_at:  product.updated_at().to_rfc3339(),
        }
    }
}

// --- ハンドラ ---

/// GET /api/products
///
/// 全商品を取得する。並び順はストアの自然な順序であり、契約ではない。
///
/// ## レスポンス
///
/// - `200 OK`: 商品の JSON 配列（0 件なら空配列）
#[tracing::instrument(skip_all)]
pub async fn list_products(
    State(state): State<Arc<ProductState>>,
) -> Result<impl IntoResponse, ApiError> {
    let products = state.usecase.list_products().await?;

    let items: Vec<ProductDto> = products.iter().map(ProductDto::from).collect();

    Ok((StatusCode::OK, Json(items)))
}

/// POST /api/products
///
/// 商品を作成する。
///
/// ## レスポンス
///
/// - `201 Created`: 採番された ID を含む作成済み商品
/// - `400 Bad Request`: name / description の欠落・空文字列
#[tracing::instrument(skip_all)]
pub async fn create_product(
    State(state): State<Arc<ProductState>>,
    Json(req): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = CreateProductInput {
        name:        req.name,
        description: req.description,
    };

    let product = state.usecase.create_product(input).await?;

    Ok((StatusCode::CREATED, Json(ProductDto::from(&product))))
}

/// GET /api/products/{product_id}
///
/// ID で商品を取得する。
///
/// ## レスポンス
///
/// - `200 OK`: 商品レコード
/// - `404 Not Found`: 商品が見つからない（空ボディ）
#[tracing::instrument(skip_all, fields(%product_id))]
pub async fn get_product(
    State(state): State<Arc<ProductState>>,
    Path(product_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let product_id = ProductId::from_uuid(product_id);

    let product = state.usecase.get_product(&product_id).await?;

    Ok((StatusCode::OK, Json(ProductDto::from(&product))))
}

/// PUT /api/products/{product_id}
///
/// 商品を全置換で更新し、置換後のレコードを返す。
///
/// ## レスポンス
///
/// - `200 OK`: 置換後の商品
/// - `400 Bad Request`: name / description の欠落・空文字列
/// - `404 Not Found`: 商品が見つからない（空ボディ）
#[tracing::instrument(skip_all, fields(%product_id))]
pub async fn update_product(
    State(state): State<Arc<ProductState>>,
    Path(product_id): Path<Uuid>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = UpdateProductInput {
        product_id:  ProductId::from_uuid(product_id),
        name:        req.name,
        description: req.description,
    };

    let product = state.usecase.update_product(input).await?;

    Ok((StatusCode::OK, Json(ProductDto::from(&product))))
}

/// DELETE /api/products/{product_id}
///
/// 商品を削除し、削除済みのレコードを返す。
///
/// ## レスポンス
///
/// - `200 OK`: 削除された商品
/// - `404 Not Found`: 商品が見つからない（空ボディ）
#[tracing::instrument(skip_all, fields(%product_id))]
pub async fn delete_product(
    State(state): State<Arc<ProductState>>,
    Path(product_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let product_id = ProductId::from_uuid(product_id);

    let product = state.usecase.delete_product(&product_id).await?;

    Ok((StatusCode::OK, Json(ProductDto::from(&product))))
}
