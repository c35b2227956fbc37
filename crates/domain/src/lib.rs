//! # Zaiko ドメイン層
//!
//! 商品カタログのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`product::Product`]）
//! - **値オブジェクト**: バリデーション済みの不変オブジェクト
//!   （[`product::ProductName`], [`product::ProductDescription`]）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型（[`DomainError`]）
//!
//! ## 依存関係の方向
//!
//! ```text
//! product-api → infra → domain → shared
//! ```
//!
//! ドメイン層はインフラ層（DB、外部サービス）には一切依存しない。
//! これにより、ビジネスロジックの純粋性が保たれる。
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
//! assert_eq!(product.name().as_str(), "Ramen");
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

pub mod clock;
pub mod error;
pub mod product;

pub use error::DomainError;
