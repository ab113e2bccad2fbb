use crate::content::ShowcaseRecord;

use super::SyncStatus;

/// 静态回退数据集
///
/// 远程数据源不可用时的展示数据，双语字段齐全，
/// 难度和技术栈有意分散，保证列表筛选和每日精选都有内容可用。
pub fn fallback_showcases() -> Vec<ShowcaseRecord> {
    vec![
        ShowcaseRecord {
            id: "fallback-1".to_string(),
            pen_user: "madebyevan".to_string(),
            pen_slug: "glass-light-show".to_string(),
            author_name: Some("Evan You".to_string()),
            author_url: Some("https://codepen.io/madebyevan".to_string()),
            thumbnail_url: Some(
                "https://images.unsplash.com/photo-1527443224154-cb9e9e1d69c4?w=960".to_string(),
            ),
            stack: Some("WebGL".to_string()),
            tags: Some(strings(&["animation", "webgl", "interactive"])),
            difficulty: Some("Advanced".to_string()),
            title_zh: Some("Three.js 玻璃态灯光秀".to_string()),
            title_en: Some("Three.js Glassmorphism Light Show".to_string()),
            summary_zh: Some("以玻璃拟态与 WebGL 渲染打造的沉浸式灯光互动体验。".to_string()),
            summary_en: Some(
                "Immersive glassmorphism stage rendered with WebGL and custom shaders.".to_string(),
            ),
            headline_zh: Some("视觉与性能并重的舞台灯光".to_string()),
            headline_en: Some(
                "Glassmorphism stage balancing aesthetics and performance".to_string(),
            ),
            key_points_zh: Some(strings(&[
                "自定义帧缓冲管理光晕与折射效果",
                "CSS 变量与 Three.js uniforms 双向绑定",
                "GPU Instancing 提升多光源渲染效率",
            ])),
            key_points_en: Some(strings(&[
                "Custom frame buffers drive glow and refraction",
                "CSS variables stay in sync with Three.js uniforms",
                "GPU instancing keeps dozens of lights smooth",
            ])),
            body_md_zh: Some(
                "通过 **Three.js** 构建的多光源舞台，结合玻璃拟态 UI，\
以 `requestAnimationFrame` 动态响应指针输入。"
                    .to_string(),
            ),
            body_md_en: Some(
                "A multi-light stage built with **Three.js** and glassmorphism UI, \
driven by pointer-aware uniforms."
                    .to_string(),
            ),
            reuse_steps_zh: Some(strings(&[
                "拆分光源与 UI 图层，便于复用",
                "以 CSS 变量控制全局主题色",
            ])),
            reuse_steps_en: Some(strings(&[
                "Split light sources and UI overlays for reuse",
                "Control palette through CSS custom properties",
            ])),
            perf_notes_zh: Some("帧率保持在 50fps 以上再叠加后处理。".to_string()),
            perf_notes_en: Some("Keep frame times under 20ms before adding passes.".to_string()),
            created_at: Some("2025-09-20T02:10:00Z".to_string()),
            updated_at: Some("2025-09-22T08:30:00Z".to_string()),
            ..empty()
        },
        ShowcaseRecord {
            id: "fallback-2".to_string(),
            pen_user: "sdras".to_string(),
            pen_slug: "svg-lottie-lab".to_string(),
            author_name: Some("Sarah Drasner".to_string()),
            author_url: Some("https://codepen.io/sdras".to_string()),
            stack: Some("SVG".to_string()),
            tags: Some(strings(&["svg", "animation", "lottie"])),
            difficulty: Some("Intermediate".to_string()),
            title_zh: Some("SVG x Lottie 动画实验".to_string()),
            title_en: Some("SVG x Lottie Animation Lab".to_string()),
            summary_zh: Some("将 Lottie JSON 与 SVG 滤镜结合，实现极轻量动画表达。".to_string()),
            summary_en: Some(
                "Lightweight animation using Lottie JSON coupled with SVG filters.".to_string(),
            ),
            key_points_zh: Some(strings(&[
                "通过 Lottie Web 动态挂载 JSON",
                "SVG filter 创建柔光与噪点质感",
                "IntersectionObserver 控制播放暂停",
            ])),
            key_points_en: Some(strings(&[
                "Loads JSON animation via Lottie Web",
                "SVG filters craft glow and texture",
                "IntersectionObserver toggles playback",
            ])),
            body_md_zh: Some(
                "结合 **Lottie** 与 SVG 滤镜的动效实验，\
利用 `prefers-reduced-motion` 保障可及性。"
                    .to_string(),
            ),
            body_md_en: Some(
                "An experiment blending **Lottie** with SVG filters, \
respectful of `prefers-reduced-motion`."
                    .to_string(),
            ),
            perf_notes_zh: Some("动画资源 < 80KB，可内联于 HTML 增强首屏。".to_string()),
            perf_notes_en: Some(
                "Animation payload is under 80KB; inline for faster first paint.".to_string(),
            ),
            created_at: Some("2025-09-18T06:00:00Z".to_string()),
            updated_at: Some("2025-09-21T12:00:00Z".to_string()),
            ..empty()
        },
        ShowcaseRecord {
            id: "fallback-3".to_string(),
            pen_user: "chriscoyier".to_string(),
            pen_slug: "grid-gallery".to_string(),
            author_name: Some("Chris Coyier".to_string()),
            stack: Some("CSS".to_string()),
            tags: Some(strings(&["layout", "grid"])),
            difficulty: Some("Beginner".to_string()),
            title_zh: Some("CSS Grid 瀑布流画廊".to_string()),
            title_en: Some("CSS Grid Masonry Gallery".to_string()),
            summary_zh: Some("纯 CSS 实现的响应式瀑布流布局，无需任何脚本。".to_string()),
            summary_en: Some("Responsive masonry layout in pure CSS, zero JavaScript.".to_string()),
            created_at: Some("2025-09-15T03:20:00Z".to_string()),
            updated_at: Some("2025-09-15T03:20:00Z".to_string()),
            ..empty()
        },
        ShowcaseRecord {
            id: "fallback-4".to_string(),
            pen_user: "yuanchuan".to_string(),
            pen_slug: "particle-field".to_string(),
            author_name: Some("Yuan Chuan".to_string()),
            stack: Some("Canvas".to_string()),
            tags: Some(strings(&["particles", "generative", "interactive"])),
            difficulty: Some("Advanced".to_string()),
            title_zh: Some("生成式粒子场".to_string()),
            title_en: Some("Generative Particle Field".to_string()),
            summary_zh: Some("基于噪声函数的粒子运动场，可随指针扰动。".to_string()),
            summary_en: Some("Noise-driven particle field that reacts to pointer motion.".to_string()),
            perf_notes_zh: Some("离屏 Canvas 合批绘制，粒子数过万仍流畅。".to_string()),
            created_at: Some("2025-09-12T09:45:00Z".to_string()),
            updated_at: Some("2025-09-19T01:05:00Z".to_string()),
            ..empty()
        },
        ShowcaseRecord {
            id: "fallback-5".to_string(),
            pen_user: "una".to_string(),
            pen_slug: "scroll-charts".to_string(),
            author_name: Some("Una Kravets".to_string()),
            stack: Some("SVG".to_string()),
            tags: Some(strings(&["charts", "svg", "scroll"])),
            difficulty: Some("Intermediate".to_string()),
            title_zh: Some("滚动驱动的数据图表".to_string()),
            title_en: Some("Scroll-driven Data Charts".to_string()),
            summary_zh: Some("用 scroll-timeline 让图表随滚动逐段展开。".to_string()),
            summary_en: Some("Charts that reveal with scroll-timeline animations.".to_string()),
            created_at: Some("2025-09-10T07:00:00Z".to_string()),
            updated_at: Some("2025-09-17T04:40:00Z".to_string()),
            ..empty()
        },
        ShowcaseRecord {
            id: "fallback-6".to_string(),
            pen_user: "jhey".to_string(),
            pen_slug: "magnetic-buttons".to_string(),
            author_name: Some("Jhey Tompkins".to_string()),
            stack: Some("CSS".to_string()),
            tags: Some(strings(&["interaction", "animation"])),
            difficulty: Some("Intermediate".to_string()),
            title_zh: Some("磁吸按钮交互".to_string()),
            title_en: Some("Magnetic Button Interactions".to_string()),
            summary_zh: Some("指针靠近时按钮产生磁吸位移与回弹。".to_string()),
            summary_en: Some("Buttons that attract toward the pointer with springy easing.".to_string()),
            created_at: Some("2025-09-08T11:30:00Z".to_string()),
            updated_at: Some("2025-09-08T11:30:00Z".to_string()),
            ..empty()
        },
        ShowcaseRecord {
            id: "fallback-7".to_string(),
            pen_user: "ksenia-k".to_string(),
            pen_slug: "shader-gradients".to_string(),
            author_name: Some("Ksenia Kondrashova".to_string()),
            stack: Some("WebGL".to_string()),
            tags: Some(strings(&["webgl", "shader", "gradient"])),
            difficulty: Some("Advanced".to_string()),
            title_zh: Some("流动渐变着色器".to_string()),
            title_en: Some("Flowing Gradient Shaders".to_string()),
            summary_zh: Some("片元着色器生成的有机流动渐变背景。".to_string()),
            summary_en: Some("Organic flowing gradients generated in a fragment shader.".to_string()),
            created_at: Some("2025-09-05T02:00:00Z".to_string()),
            updated_at: Some("2025-09-16T10:15:00Z".to_string()),
            ..empty()
        },
        ShowcaseRecord {
            id: "fallback-8".to_string(),
            pen_user: "t_afif".to_string(),
            pen_slug: "css-loaders".to_string(),
            author_name: Some("Temani Afif".to_string()),
            stack: Some("CSS".to_string()),
            tags: Some(strings(&["loader", "animation"])),
            difficulty: Some("Beginner".to_string()),
            title_zh: Some("单元素 CSS 加载动画合集".to_string()),
            title_en: Some("Single-element CSS Loaders".to_string()),
            summary_zh: Some("一个元素实现的多款加载动画，零依赖可直接拷贝。".to_string()),
            summary_en: Some("A set of loaders built from one element each, copy-paste ready.".to_string()),
            created_at: Some("2025-09-02T05:25:00Z".to_string()),
            updated_at: Some("2025-09-14T09:50:00Z".to_string()),
            ..empty()
        },
    ]
}

/// 回退模式下的同步状态
pub fn fallback_status() -> SyncStatus {
    SyncStatus {
        version: "2025.09.23".to_string(),
        last_synced_at: "2025-09-23T00:00:00Z".to_string(),
        total_indexed: 8,
        cache_hit_rate: Some(0.86),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn empty() -> ShowcaseRecord {
    ShowcaseRecord {
        id: String::new(),
        pen_user: String::new(),
        pen_slug: String::new(),
        author_name: None,
        author_url: None,
        thumbnail_url: None,
        oembed_html: None,
        stack: None,
        tags: None,
        difficulty: None,
        title_zh: None,
        title_en: None,
        summary_zh: None,
        summary_en: None,
        headline_zh: None,
        headline_en: None,
        key_points_zh: None,
        key_points_en: None,
        body_md_zh: None,
        body_md_en: None,
        reuse_steps_zh: None,
        reuse_steps_en: None,
        perf_notes_zh: None,
        perf_notes_en: None,
        created_at: None,
        updated_at: None,
    }
}
