//! 命令行参数定义

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::NumberingMode;

#[derive(Debug, Parser)]
#[command(
    name = "ielts-answer-sheet",
    version,
    about = "IELTS 答题卡生成器 - 把题组定义渲染成可自评分的独立 HTML 答题卡"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// 显示详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 渲染答题卡并保存为 HTML
    Render {
        /// 答题卡定义文件（TOML）
        #[arg(value_name = "SHEET")]
        sheet: PathBuf,
        /// 输出路径（默认: <OUTPUT_DIR>/<定义文件名>.html）
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// 在浏览器中预览答题卡
    Preview {
        #[arg(value_name = "SHEET")]
        sheet: PathBuf,
    },

    /// 用无头浏览器把答题卡打印成 PDF
    Pdf {
        #[arg(value_name = "SHEET")]
        sheet: PathBuf,
        /// 输出路径（默认: <OUTPUT_DIR>/<定义文件名>.pdf）
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// 显示题组列表和题号
    Describe {
        #[arg(value_name = "SHEET")]
        sheet: PathBuf,
        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 交互式编辑题组
    Shell {
        /// 初始题号模式（amount / end）
        #[arg(long, default_value = "amount")]
        mode: NumberingMode,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Render { .. } => "render",
            Command::Preview { .. } => "preview",
            Command::Pdf { .. } => "pdf",
            Command::Describe { .. } => "describe",
            Command::Shell { .. } => "shell",
        }
    }
}
