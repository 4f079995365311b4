use anyhow::Result;
use clap::Parser;
use ielts_answer_sheet::cli::Cli;
use ielts_answer_sheet::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logger::init(cli.verbose || config.verbose_logging);

    // 执行命令
    App::new(config).run(cli.command).await?;

    Ok(())
}
