//! # ProductRepository
//!
//! 商品の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - クエリは実行時バインドの `sqlx::query` を使用する
//!   （ビルドにデータベース接続を要求しない）
//! - 行からエンティティへの復元は `Product::from_db` に集約する

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;
use zaiko_domain::product::{Product, ProductDescription, ProductId, ProductName};

use crate::error::InfraError;

/// 商品リポジトリトレイト
///
/// データストアに対する商品の CRUD 操作を定義する。
/// 一覧の並び順はストアの自然な順序（ここでは作成時刻順）であり、
/// API の契約ではない。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 全商品を取得する
    async fn find_all(&self) -> Result<Vec<Product>, InfraError>;

    /// ID で商品を検索する
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, InfraError>;

    /// 商品を挿入する
    async fn insert(&self, product: &Product) -> Result<(), InfraError>;

    /// 商品を更新する（置換後の状態を反映）
    async fn update(&self, product: &Product) -> Result<(), InfraError>;

    /// 商品を削除する
    ///
    /// 行が削除された場合は `true`、対象が存在しなかった場合は `false` を返す。
    async fn delete(&self, id: &ProductId) -> Result<bool, InfraError>;
}

/// PostgreSQL 実装の ProductRepository
#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// DB 行から商品エンティティを復元する
fn row_to_product(row: &PgRow) -> Result<Product, InfraError> {
    let id: Uuid = row.try_get("id")?;
    let name: String = row.try_get("name")?;
    let description: String = row.try_get("description")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at")?;

    // DB の NOT NULL 制約と CHECK 制約により値は常に有効
    let name = ProductName::new(name).expect("DB に格納された name は常に有効");
    let description =
        ProductDescription::new(description).expect("DB に格納された description は常に有効");

    Ok(Product::from_db(
        ProductId::from_uuid(id),
        name,
        description,
        created_at,
        updated_at,
    ))
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Product>, InfraError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM products
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_product).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, InfraError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_product).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, product: &Product) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(product.id().as_uuid())
        .bind(product.name().as_str())
        .bind(product.description().as_str())
        .bind(product.created_at())
        .bind(product.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn update(&self, product: &Product) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            UPDATE products
            SET name = $2, description = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(product.id().as_uuid())
        .bind(product.name().as_str())
        .bind(product.description().as_str())
        .bind(product.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &ProductId) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PostgresProductRepository>();
    }
}
