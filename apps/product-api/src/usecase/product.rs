//! 商品管理ユースケース

use std::sync::Arc;

use zaiko_domain::{
    DomainError,
    clock::Clock,
    product::{Product, ProductDescription, ProductId, ProductName},
};
use zaiko_infra::repository::ProductRepository;

use crate::error::ApiError;

/// 商品作成の入力
///
/// フィールドの欠落をデシリアライズエラーではなくバリデーションエラーとして
/// 報告するため、両フィールドとも `Option` で受ける。
pub struct CreateProductInput {
    pub name:        Option<String>,
    pub description: Option<String>,
}

/// 商品更新の入力
///
/// 更新は部分更新ではなく全置換。`name` / `description` とも必須で、
/// 欠落はバリデーションエラーになる。
pub struct UpdateProductInput {
    pub product_id:  ProductId,
    pub name:        Option<String>,
    pub description: Option<String>,
}

/// 商品管理ユースケース
pub struct ProductUseCaseImpl {
    product_repository: Arc<dyn ProductRepository>,
    clock: Arc<dyn Clock>,
}

impl ProductUseCaseImpl {
    pub fn new(product_repository: Arc<dyn ProductRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            product_repository,
            clock,
        }
    }

    /// 商品一覧を取得する（ストアの自然な順序）
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let products = self.product_repository.find_all().await?;
        Ok(products)
    }

    /// ID で商品を取得する
    pub async fn get_product(&self, product_id: &ProductId) -> Result<Product, ApiError> {
        let product = self
            .product_repository
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity_type: "Product",
                id:          product_id.to_string(),
            })?;

        Ok(product)
    }

    /// 商品を作成する
    ///
    /// 1. name / description のバリデーション
    /// 2. ID 採番（UUID v7）と Product エンティティ生成
    /// 3. 挿入
    pub async fn create_product(&self, input: CreateProductInput) -> Result<Product, ApiError> {
        let name = ProductName::new(input.name.unwrap_or_default())?;
        let description = ProductDescription::new(input.description.unwrap_or_default())?;

        let product = Product::new(ProductId::new(), name, description, self.clock.now());

        self.product_repository.insert(&product).await?;

        Ok(product)
    }

    /// 商品を全置換で更新する
    ///
    /// 対象が存在すれば置換後の商品を返す。`id` と `created_at` は保存される。
    pub async fn update_product(&self, input: UpdateProductInput) -> Result<Product, ApiError> {
        let name = ProductName::new(input.name.unwrap_or_default())?;
        let description = ProductDescription::new(input.description.unwrap_or_default())?;

        let product = self.get_product(&input.product_id).await?;

        let product = product.replace(name, description, self.clock.now());

        self.product_repository.update(&product).await?;

        Ok(product)
    }

    /// 商品を削除する
    ///
    /// 削除された商品を返す。取得と削除の間に消えた場合も NotFound になる。
    pub async fn delete_product(&self, product_id: &ProductId) -> Result<Product, ApiError> {
        let product = self.get_product(product_id).await?;

        let deleted = self.product_repository.delete(product_id).await?;
        if !deleted {
            return Err(ApiError::NotFound);
        }

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;
    use zaiko_domain::clock::FixedClock;
    use zaiko_infra::mock::MockProductRepository;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn create_usecase(repo: MockProductRepository) -> ProductUseCaseImpl {
        ProductUseCaseImpl::new(
            Arc::new(repo) as Arc<dyn ProductRepository>,
            Arc::new(FixedClock::new(fixed_now())) as Arc<dyn Clock>,
        )
    }

    fn valid_input() -> CreateProductInput {
        CreateProductInput {
            name:        Some("Ramen".to_string()),
            description: Some("tasty".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_で商品がリポジトリに保存される() {
        // Given
        let repo = MockProductRepository::new();
        let sut = create_usecase(repo.clone());

        // When
        let product = sut.create_product(valid_input()).await.unwrap();

        // Then
        assert_eq!(repo.len(), 1);
        assert_eq!(product.name().as_str(), "Ramen");
        assert_eq!(product.description().as_str(), "tasty");
        assert_eq!(product.created_at(), fixed_now());
    }

    #[tokio::test]
    async fn test_create_はdescription欠落でvalidationエラーになる() {
        // Given
        let repo = MockProductRepository::new();
        let sut = create_usecase(repo.clone());
        let input = CreateProductInput {
            name:        Some("Ramen".to_string()),
            description: None,
        };

        // When
        let error = sut.create_product(input).await.unwrap_err();

        // Then
        let ApiError::Validation(message) = error else {
            panic!("expected validation error");
        };
        assert!(message.contains("description"));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_get_は保存済み商品をそのまま返す() {
        // Given
        let repo = MockProductRepository::new();
        let sut = create_usecase(repo);
        let created = sut.create_product(valid_input()).await.unwrap();

        // When
        let found = sut.get_product(created.id()).await.unwrap();

        // Then
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_get_は存在しないidでnot_foundになる() {
        let sut = create_usecase(MockProductRepository::new());

        let error = sut.get_product(&ProductId::new()).await.unwrap_err();

        assert!(matches!(error, ApiError::NotFound));
    }

    #[tokio::test]
    async fn test_update_で置換後の商品が返りidが保存される() {
        // Given
        let repo = MockProductRepository::new();
        let sut = create_usecase(repo);
        let created = sut.create_product(valid_input()).await.unwrap();

        // When
        let updated = sut
            .update_product(UpdateProductInput {
                product_id:  *created.id(),
                name:        Some("updated name".to_string()),
                description: Some("updated description".to_string()),
            })
            .await
            .unwrap();

        // Then
        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.name().as_str(), "updated name");

        // 再取得しても置換後の内容が見える
        let found = sut.get_product(created.id()).await.unwrap();
        assert_eq!(found.name().as_str(), "updated name");
        assert_eq!(found.description().as_str(), "updated description");
    }

    #[tokio::test]
    async fn test_update_は存在しないidでnot_foundになる() {
        let sut = create_usecase(MockProductRepository::new());

        let error = sut
            .update_product(UpdateProductInput {
                product_id:  ProductId::new(),
                name:        Some("updated name".to_string()),
                description: Some("updated description".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(error, ApiError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_で削除済み商品が返り再削除はnot_foundになる() {
        // Given
        let repo = MockProductRepository::new();
        let sut = create_usecase(repo.clone());
        let created = sut.create_product(valid_input()).await.unwrap();

        // When
        let deleted = sut.delete_product(created.id()).await.unwrap();

        // Then
        assert_eq!(deleted, created);
        assert_eq!(repo.len(), 0);

        let error = sut.delete_product(created.id()).await.unwrap_err();
        assert!(matches!(error, ApiError::NotFound));
    }
}
