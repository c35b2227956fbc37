//! # テスト用モックリポジトリ
//!
//! ユースケーステストや統合テストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! zaiko-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use zaiko_domain::product::{Product, ProductId};

use crate::{error::InfraError, repository::ProductRepository};

/// インメモリの ProductRepository 実装
///
/// `Vec<Product>` を `Mutex` で保護した素朴な実装。
/// 挿入順がそのまま一覧の並び順になる。
#[derive(Clone, Default)]
pub struct MockProductRepository {
    products: Arc<Mutex<Vec<Product>>>,
}

impl MockProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(Mutex::new(products)),
        }
    }

    /// 現在格納されている商品数を返す
    pub fn len(&self) -> usize {
        self.products.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProductRepository for MockProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, InfraError> {
        Ok(self.products.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, InfraError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id() == id)
            .cloned())
    }

    async fn insert(&self, product: &Product) -> Result<(), InfraError> {
        self.products.lock().unwrap().push(product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), InfraError> {
        let mut products = self.products.lock().unwrap();
        if let Some(existing) = products.iter_mut().find(|p| p.id() == product.id()) {
            *existing = product.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<bool, InfraError> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id() != id);
        Ok(products.len() < before)
    }
}
