use std::sync::Arc;

use axum::extract::FromRef;

use crate::{config::SiteConfig, storage::ShowcaseSource};

/// 应用程序上下文
///
/// [`AppState`] 封装了作品数据源和站点配置，提供统一访问入口。
#[derive(Clone, FromRef)]
pub struct AppState {
    source: ShowcaseSource,
    config: Arc<SiteConfig>,
}

impl AppState {
    /// 创建一个新的 [`AppState`] 实例
    pub fn new(source: ShowcaseSource, config: SiteConfig) -> Self {
        Self {
            source,
            config: Arc::new(config),
        }
    }

    /// 获取数据源
    pub fn source(&self) -> &ShowcaseSource {
        &self.source
    }

    /// 获取站点配置
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}
