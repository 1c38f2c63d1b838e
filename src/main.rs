use anyhow::{bail, Result};
use artist_wordcloud::utils::logging;
use artist_wordcloud::{App, Config};

const USAGE: &str = "用法: artist-wordcloud [--album <专辑名>] [歌手名 ...]";

/// 命令行参数
struct Args {
    album: Option<String>,
    artists: Vec<String>,
}

fn parse_args(raw: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut album = None;
    let mut artists = Vec::new();
    let mut iter = raw.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--album" => match iter.next() {
                Some(name) => album = Some(name),
                None => bail!("--album 需要专辑名\n{}", USAGE),
            },
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ => artists.push(arg),
        }
    }

    if album.is_some() && artists.len() != 1 {
        bail!("--album 只能搭配一个歌手名\n{}", USAGE);
    }
    Ok(Args { album, artists })
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;

    // 加载配置（此时全局日志尚未初始化，环境变量告警走临时订阅者）
    let config = logging::bootstrap(Config::load)?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let app = App::initialize(config).await?;
    if args.artists.is_empty() {
        app.run_interactive().await?;
    } else {
        app.run_batch(&args.artists, args.album.as_deref()).await;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn album_takes_one_artist() {
        let parsed = args(&["--album", "Karma and Effect", "Seether"]).unwrap();
        assert_eq!(parsed.album.as_deref(), Some("Karma and Effect"));
        assert_eq!(parsed.artists, vec!["Seether"]);

        assert!(args(&["--album", "X", "A", "B"]).is_err());
        assert!(args(&["--album"]).is_err());
    }

    #[test]
    fn no_arguments_means_interactive() {
        assert!(args(&[]).unwrap().artists.is_empty());
    }
}
