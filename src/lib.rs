pub mod api;
pub mod config;
pub mod content;
pub mod error;
pub mod state;
pub mod storage;

use tracing_subscriber::{EnvFilter, fmt::time::ChronoLocal};

use config::SiteConfig;
use state::AppState;
use storage::ShowcaseSource;

pub async fn run() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_env_filter(EnvFilter::from_env("SPARKKIT_LOG"))
        .init();

    let config = SiteConfig::from_env().expect("配置加载失败");
    let db = storage::try_init_db_from_env().await;
    let state = AppState::new(ShowcaseSource::new(db), config);

    api::run_server(state).await
}
