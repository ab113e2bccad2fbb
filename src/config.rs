use std::{env, fs};

use serde::Deserialize;

use crate::content::{FeaturedConfig, Locale};
use crate::error::Result;

/// 站点配置
///
/// 通过环境变量 `SPARKKIT_CONFIG` 指向的 TOML 文件加载，
/// 未设置时全部取默认值。字段可以只写一部分，缺省按默认补齐。
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// 站点根地址，用于 canonical/sitemap/RSS 链接
    pub site_url: String,
    pub base_path: String,
    pub default_locale: Locale,
    /// 每日精选每档条数
    pub featured_per_tier: usize,
    /// 精选换档小时（北京时间）
    pub daily_refresh_hour: u32,
    pub listen_addr: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: "https://spark.vincentke.cc".to_string(),
            base_path: String::new(),
            default_locale: Locale::En,
            featured_per_tier: 3,
            daily_refresh_hour: 8,
            listen_addr: "0.0.0.0:3000".to_string(),
        }
    }
}

impl SiteConfig {
    /// 从环境加载配置
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var("SPARKKIT_CONFIG") else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(&path)?;
        let mut config: SiteConfig = toml::from_str(&content)?;
        config.site_url = normalize_site_url(&config.site_url);
        config.base_path = normalize_base_path(&config.base_path);
        Ok(config)
    }

    /// 拼出站内绝对地址；已是绝对 URL 的路径原样返回
    pub fn absolute_url(&self, pathname: &str) -> String {
        if pathname.is_empty() {
            return self.site_url.clone();
        }

        if pathname.starts_with("http://") || pathname.starts_with("https://") {
            return pathname.to_string();
        }

        if pathname.starts_with('/') {
            format!("{}{}", self.site_url, pathname)
        } else {
            format!("{}/{}", self.site_url, pathname)
        }
    }

    /// 每日精选的抽样配置
    pub fn featured(&self) -> FeaturedConfig {
        FeaturedConfig {
            per_tier: self.featured_per_tier,
            refresh_hour: self.daily_refresh_hour,
        }
    }
}

fn normalize_site_url(value: &str) -> String {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        SiteConfig::default().site_url
    } else {
        trimmed.to_string()
    }
}

fn normalize_base_path(value: &str) -> String {
    let trimmed = value.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.featured_per_tier, 3);
        assert_eq!(config.daily_refresh_hour, 8);
        assert_eq!(config.default_locale, Locale::En);
        assert_eq!(config.site_url, "https://spark.vincentke.cc");
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: SiteConfig = toml::from_str(
            r#"
            site_url = "https://demo.example.com"
            default_locale = "zh"
            "#,
        )
        .expect("Failed to parse config");

        assert_eq!(config.site_url, "https://demo.example.com");
        assert_eq!(config.default_locale, Locale::Zh);
        assert_eq!(config.featured_per_tier, 3);
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
    }

    #[test]
    fn test_absolute_url_joining() {
        let config = SiteConfig::default();
        assert_eq!(config.absolute_url(""), "https://spark.vincentke.cc");
        assert_eq!(
            config.absolute_url("/showcases"),
            "https://spark.vincentke.cc/showcases"
        );
        assert_eq!(
            config.absolute_url("rss.xml"),
            "https://spark.vincentke.cc/rss.xml"
        );
        assert_eq!(
            config.absolute_url("https://codepen.io/u/pen/x"),
            "https://codepen.io/u/pen/x"
        );
    }

    #[test]
    fn test_url_and_base_path_normalization() {
        assert_eq!(
            normalize_site_url("https://demo.example.com/ "),
            "https://demo.example.com"
        );
        assert_eq!(normalize_site_url("  "), "https://spark.vincentke.cc");
        assert_eq!(normalize_base_path("/spark/"), "/spark");
        assert_eq!(normalize_base_path(""), "");
    }
}
