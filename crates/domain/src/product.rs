//! # 商品
//!
//! カタログに登録される商品を表現するドメインモデル。
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use zaiko_domain::product::{Product, ProductDescription, ProductId, ProductName};
//!
//! let product = Product::new(
//!     ProductId::new(),
//!     ProductName::new("Ramen")?,
//!     ProductDescription::new("tasty")?,
//!     chrono::Utc::now(),
//! );
//!
//! assert_eq!(product.name().as_str(), "Ramen");
//! assert_eq!(product.created_at(), product.updated_at());
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};

define_uuid_id! {
    /// 商品の一意識別子
    ///
    /// 作成時に一度だけ採番され、以後変更されない。
    pub struct ProductId;
}

// =========================================================================
// ProductName / ProductDescription（値オブジェクト）
// =========================================================================

define_validated_string! {
    /// 商品名（値オブジェクト）
    ///
    /// 1〜255 文字。前後の空白は除去される。
    pub struct ProductName {
        label: "name",
        max_length: 255,
    }
}

define_validated_string! {
    /// 商品説明（値オブジェクト）
    ///
    /// 1〜2000 文字。前後の空白は除去される。
    pub struct ProductDescription {
        label: "description",
        max_length: 2000,
    }
}

// =========================================================================
// Product（商品エンティティ）
// =========================================================================

/// 商品エンティティ
///
/// # 不変条件
///
/// - `id` は作成時に採番され、以後のすべての操作で保存される
/// - `name` / `description` は常にバリデーション済みの値オブジェクト
/// - `created_at` は作成時刻で固定、`updated_at` は置換のたびに進む
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id:          ProductId,
    name:        ProductName,
    description: ProductDescription,
    created_at:  DateTime<Utc>,
    updated_at:  DateTime<Utc>,
}

impl Product {
    /// 新しい商品を作成する
    ///
    /// `name` / `description` は値オブジェクトとしてバリデーション済みのため、
    /// 構築自体は失敗しない。
    pub fn new(
        id: ProductId,
        name: ProductName,
        description: ProductDescription,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// データベースから商品を復元する
    pub fn from_db(
        id: ProductId,
        name: ProductName,
        description: ProductDescription,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            created_at,
            updated_at,
        }
    }

    /// 商品の内容を置き換える
    ///
    /// `id` と `created_at` は保存され、`updated_at` のみ進む。
    pub fn replace(
        self,
        name: ProductName,
        description: ProductDescription,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            name,
            description,
            updated_at: now,
            ..self
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &ProductName {
        &self.name
    }

    pub fn description(&self) -> &ProductDescription {
        &self.description
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
