//! # リポジトリ実装
//!
//! データストアに対する操作をトレイトとして定義し、具体的な実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: 利用側はトレイト経由でリポジトリを受け取る
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod product_repository;

pub use product_repository::{PostgresProductRepository, ProductRepository};
