//! # Artist Wordcloud
//!
//! 根据歌手名抓取其全部歌词，清洗合并后生成词云
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（HTTP 客户端、Page），只暴露能力
//! - `HttpFetcher` - 取页面文本的能力，测试中用假实现替换
//! - `JsExecutor` - 唯一的 page owner，提供 goto() / eval() 能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个歌手
//! - `NameResolver` - 歌手名 → 目录 id
//! - `LinkEnumerator` - 游标翻页 / 渐进加载 / 专辑 三种链接枚举
//! - `ContentFetcher` - 有界并发抓取歌词，结果顺序与输入一致
//! - `Aggregator` - 合并语料并交给渲染协作者
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个歌手"的完整处理流程
//! - `ArtistCtx` - 上下文封装（歌手 + 专辑 + 序号）
//! - `ArtistFlow` - 流程编排（resolve → enumerate → fetch → aggregate → render）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 应用入口，批量 / 交互模式，持有浏览器
//! - `orchestrator/artist_processor` - 单个歌手处理器，按错误类别上报
//!
//! ## 模块结构

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod render;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{Config, EnumerationStrategy};
pub use error::{AppError, AppResult};
pub use models::{ArtistQuery, CatalogIdentifier, Corpus, ResolvedArtist};
pub use orchestrator::{App, BatchStats};
pub use services::lyric_cleaner::clean;
pub use workflow::{ArtistCtx, ArtistFlow, ArtistReport};
