//! 单个歌手处理器 - 编排层
//!
//! 调用 [`ArtistFlow`]，把错误按类别上报（stderr + 日志），返回给调用方一个结论。
//! 是否重试、是否继续由上层（批量 / 交互）决定。

use tracing::{debug, error, info, warn};

use crate::error::AppError;
use crate::utils::logging::truncate_text;
use crate::workflow::{ArtistCtx, ArtistFlow, ArtistReport};

/// 单个歌手的处理结论
#[derive(Debug)]
pub enum ArtistOutcome {
    /// 词云已生成
    Done(ArtistReport),
    /// 目录中找不到
    NotFound,
    /// 网络 / 写入 / 浏览器等其他失败
    Failed,
}

impl ArtistOutcome {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

/// 处理一个歌手
pub async fn process_artist(flow: &ArtistFlow, ctx: &ArtistCtx) -> ArtistOutcome {
    info!("\n{}", "─".repeat(60));
    info!("{} 🎤 开始处理", ctx);

    match flow.run(ctx).await {
        Ok(report) => {
            if report.outcome.is_partial() {
                warn!("{} ⚠️ 链接不完整，词云基于部分歌曲", ctx);
            }
            debug!("{} 语料预览: {}", ctx, truncate_text(report.corpus.as_str(), 80));
            if let Some(path) = &report.output {
                info!(
                    "{} ✅ 完成: {}/{} 首歌词 → {}",
                    ctx,
                    report.fetched,
                    report.links,
                    path.display()
                );
            }
            ArtistOutcome::Done(report)
        }
        Err(e) if e.is_not_found() => {
            eprintln!("找不到歌手: {}", ctx.query.raw());
            warn!("{} ❌ {}", ctx, e);
            ArtistOutcome::NotFound
        }
        Err(e) => {
            report_failure(ctx, &e);
            ArtistOutcome::Failed
        }
    }
}

fn report_failure(ctx: &ArtistCtx, e: &AppError) {
    match e {
        AppError::Transient { .. } => {
            eprintln!("{} 网络请求失败: {}", ctx.query.raw(), e);
            error!("{} ❌ 网络请求失败: {}", ctx, e);
        }
        AppError::WriteFailure { .. } => {
            eprintln!("{} 词云保存失败: {}", ctx.query.raw(), e);
            error!("{} ❌ 词云保存失败: {}", ctx, e);
        }
        _ => {
            eprintln!("{} 处理失败: {}", ctx.query.raw(), e);
            error!("{} ❌ 处理过程中发生错误: {}", ctx, e);
        }
    }
}
