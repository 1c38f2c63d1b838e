//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 应用入口
//! - 管理应用生命周期（初始化、运行）
//! - 批量模式 / 交互模式
//! - 管理浏览器资源（Browser）
//! - 输出全局统计信息
//!
//! ### `artist_processor` - 单个歌手处理器
//! - 调用 ArtistFlow
//! - 按错误类别上报，返回处理结论
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<歌手名>)
//!     ↓
//! artist_processor (处理单个歌手，分类上报错误)
//!     ↓
//! workflow::ArtistFlow (resolve → enumerate → fetch → aggregate)
//!     ↓
//! services (能力层：解析 / 枚举 / 抓取 / 聚合)
//!     ↓
//! infrastructure (基础设施：HttpFetcher / JsExecutor)
//! ```

pub mod artist_processor;
pub mod batch_processor;

pub use artist_processor::{process_artist, ArtistOutcome};
pub use batch_processor::{App, BatchStats};
