//! # Product API サーバー
//!
//! 商品カタログの CRUD を提供する HTTP サービス。
//!
//! ## 役割
//!
//! - **リクエスト処理**: HTTP リクエストをデータストア操作に変換し、
//!   結果をステータスコードと JSON レスポンスにマッピングする
//! - **データ永続化**: PostgreSQL への商品レコード保存
//!
//! リクエスト間で共有する可変状態は持たない（ステートレス）。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | **Yes** | ポート番号 |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p zaiko-product-api
//!
//! # 本番環境
//! API_PORT=3000 DATABASE_URL=postgres://... cargo run -p zaiko-product-api --release
//! ```
//!
//! ## ライフサイクル
//!
//! 1. 設定読み込み → データベース接続 → マイグレーション適用
//! 2. リスナーを開いてリクエストを受け付ける
//! 3. SIGINT / SIGTERM 受信で新規受付を停止し、接続プールをクローズする

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zaiko_domain::clock::SystemClock;
use zaiko_infra::{db, repository::PostgresProductRepository};
use zaiko_product_api::{
    config::ApiConfig,
    handler::{
        ProductState,
        create_product,
        delete_product,
        get_product,
        health_check,
        list_products,
        update_product,
    },
    usecase::ProductUseCaseImpl,
};
use zaiko_shared::observability::LogFormat;

/// Product API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    init_tracing();

    // 設定読み込み
    let config = ApiConfig::from_env().expect("設定の読み込みに失敗しました");

    tracing::info!(
        "Product API サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // データベース接続プールを作成し、マイグレーションを適用する
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("データベース接続に失敗しました");
    db::run_migrations(&pool).await?;
    tracing::info!("データベースに接続しました");

    // 依存コンポーネントを初期化
    let product_repository = PostgresProductRepository::new(pool.clone());
    let usecase = ProductUseCaseImpl::new(Arc::new(product_repository), Arc::new(SystemClock));
    let state = Arc::new(ProductState { usecase });

    // ルーター構築
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/{product_id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Product API サーバーが起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // シャットダウン時に接続プールをクローズする
    pool.close().await;
    tracing::info!("データベース接続をクローズしました");

    Ok(())
}

/// トレーシングサブスクライバを初期化する
///
/// `LOG_FORMAT` 環境変数で JSON / Pretty 出力を切り替える。
fn init_tracing() {
    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,zaiko_product_api=debug,zaiko_infra=debug".into()),
    );

    match LogFormat::from_env() {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }
}

/// SIGINT / SIGTERM を待つ
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("SIGINT ハンドラの登録に失敗しました");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("SIGTERM ハンドラの登録に失敗しました")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("シャットダウンシグナルを受信しました");
}
