//! # ユースケース層
//!
//! ハンドラとリポジトリの間でバリデーションとオーケストレーションを担う。
//!
//! ## 設計方針
//!
//! - バリデーションはストアに委ねず、ここで明示的に実行する
//! - リポジトリと時刻プロバイダはコンストラクタで注入する
//!   （グローバル状態や import 時の副作用を持たない）

pub mod product;

pub use product::{CreateProductInput, ProductUseCaseImpl, UpdateProductInput};
