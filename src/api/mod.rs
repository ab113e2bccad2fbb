mod feeds;
mod query;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub use self::feeds::{build_rss, build_sitemap};

/// 配置全部路由
///
/// JSON 接口挂在 `/api` 下，SEO 文件挂在根路径：
/// - `GET /api/showcases`：作品列表（筛选/分页/本地化摘要）
/// - `GET /api/showcases/{pen_user}/{pen_slug}`：作品详情
/// - `GET /api/featured`：今日精选
/// - `GET /api/filters`：可用筛选项
/// - `GET /api/status`：同步状态
/// - `GET /rss.xml`、`GET /sitemap.xml`
pub fn setup_route(state: AppState) -> Router {
    Router::new()
        .nest("/api", query::setup_route())
        .merge(feeds::setup_route())
        .with_state(state)
}

pub async fn run_server(state: AppState) {
    let listen_addr = state.config().listen_addr.clone();
    let router = add_middlewares(setup_route(state));

    let listener = tokio::net::TcpListener::bind(&listen_addr).await.unwrap();
    println!("Listening on {listen_addr}");
    axum::serve(listener, router).await.unwrap();
}

fn add_middlewares(router: Router) -> Router {
    fn log_failure(
        err: tower_http::classify::ServerErrorsFailureClass,
        _latency: std::time::Duration,
        _span: &tracing::Span,
    ) {
        tracing::error!(error = %err, "request failed");
    }

    router.layer(TraceLayer::new_for_http().on_failure(log_failure))
}
