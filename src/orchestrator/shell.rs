//! 交互式命令行 - 编排层
//!
//! 代替桌面表单的展示层：读取一行命令，修改题组模型，然后通过
//! `describe_sections()` 重新打印列表。校验失败只提示错误，模型保持不变。

use std::path::PathBuf;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error};

use crate::models::{AnswerType, NumberingMode};
use crate::services::SectionModel;
use crate::workflow::ExportFlow;

const HELP: &str = "\
命令:
  mode amount|end            切换题号模式（数量 / 结束题号）
  add <题型> <数量或结束题号> [最大序号/字母]
  up <n> | down <n> | rm <n>  上移 / 下移 / 删除第 n 个题组
  list                       显示题组列表
  types                      显示题型及简写
  save <路径>                保存 HTML
  preview                    在浏览器中预览
  help                       显示帮助
  quit | exit                退出
";

/// 交互命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Mode(NumberingMode),
    Add {
        answer_type: AnswerType,
        value: String,
        extra: String,
    },
    Up(usize),
    Down(usize),
    Remove(usize),
    List,
    Types,
    Save(PathBuf),
    Preview,
    Help,
    Quit,
}

impl ShellCommand {
    /// 解析一行输入，空行返回 `Ok(None)`
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = parts.collect();

        let command = match (keyword.to_lowercase().as_str(), args.as_slice()) {
            ("mode", [mode]) => ShellCommand::Mode(mode.parse()?),
            ("add", [answer_type, value, rest @ ..]) if rest.len() <= 1 => ShellCommand::Add {
                answer_type: AnswerType::parse(answer_type)
                    .ok_or_else(|| format!("未知题型: {} (输入 types 查看)", answer_type))?,
                value: value.to_string(),
                extra: rest.first().map(|s| s.to_string()).unwrap_or_default(),
            },
            ("up", [n]) => ShellCommand::Up(parse_position(n)?),
            ("down", [n]) => ShellCommand::Down(parse_position(n)?),
            ("rm" | "remove", [n]) => ShellCommand::Remove(parse_position(n)?),
            ("list" | "ls", []) => ShellCommand::List,
            ("types", []) => ShellCommand::Types,
            ("save", [_, ..]) => ShellCommand::Save(PathBuf::from(args.join(" "))),
            ("preview", []) => ShellCommand::Preview,
            ("help" | "?", []) => ShellCommand::Help,
            ("quit" | "exit", []) => ShellCommand::Quit,
            (other, _) => return Err(format!("无法识别的命令: {} (输入 help 查看)", other)),
        };
        Ok(Some(command))
    }
}

// 列表位置从 1 开始
fn parse_position(s: &str) -> Result<usize, String> {
    s.parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| format!("无效位置: {}", s))
}

/// 交互式命令行
pub struct Shell<'a, R, W> {
    flow: &'a ExportFlow,
    reader: R,
    writer: W,
}

impl<'a, R, W> Shell<'a, R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(flow: &'a ExportFlow, reader: R, writer: W) -> Self {
        Self {
            flow,
            reader,
            writer,
        }
    }

    /// 运行直到 quit 或输入结束
    pub async fn run(&mut self, model: &mut SectionModel) -> Result<()> {
        self.write(HELP).await?;
        self.print_sections(model).await?;

        let mut line = String::new();
        loop {
            self.write("> ").await?;
            line.clear();
            if self.reader.read_line(&mut line).await? == 0 {
                break;
            }

            let command = match ShellCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(msg) => {
                    self.write(&format!("❌ {}\n", msg)).await?;
                    continue;
                }
            };
            debug!("执行命令: {:?}", command);

            if command == ShellCommand::Quit {
                break;
            }
            self.execute(command, model).await?;
        }

        self.writer.flush().await?;
        Ok(())
    }

    async fn execute(&mut self, command: ShellCommand, model: &mut SectionModel) -> Result<()> {
        match command {
            ShellCommand::Mode(mode) => {
                model.set_numbering_mode(mode);
                self.print_sections(model).await
            }
            ShellCommand::Add {
                answer_type,
                value,
                extra,
            } => {
                let added = model.add_section(answer_type, &value, &extra).map(|_| ());
                match added {
                    Ok(()) => self.print_sections(model).await,
                    Err(e) => self.write(&format!("❌ {}\n", e)).await,
                }
            }
            ShellCommand::Up(position) => {
                if self.check_position(position, model).await? {
                    model.move_up(position - 1)?;
                    self.print_sections(model).await?;
                }
                Ok(())
            }
            ShellCommand::Down(position) => {
                if self.check_position(position, model).await? {
                    model.move_down(position - 1)?;
                    self.print_sections(model).await?;
                }
                Ok(())
            }
            ShellCommand::Remove(position) => {
                if self.check_position(position, model).await? {
                    model.remove_section(position - 1)?;
                    self.print_sections(model).await?;
                }
                Ok(())
            }
            ShellCommand::List => self.print_sections(model).await,
            ShellCommand::Types => {
                let mut out = String::new();
                for answer_type in AnswerType::ALL {
                    out.push_str(&format!("  {:<8} {}\n", answer_type.alias(), answer_type.label()));
                }
                self.write(&out).await
            }
            ShellCommand::Save(path) => match self.flow.save_html(model, &path).await {
                Ok(saved) => self.write(&format!("✅ 已保存: {}\n", saved.display())).await,
                Err(e) => {
                    error!("保存失败: {}", e);
                    self.write(&format!("❌ {}\n", e)).await
                }
            },
            ShellCommand::Preview => match self.flow.preview(model) {
                Ok(_) => self.write("✅ 已打开预览\n").await,
                Err(e) => {
                    error!("预览失败: {}", e);
                    self.write(&format!("❌ {}\n", e)).await
                }
            },
            ShellCommand::Help => self.write(HELP).await,
            ShellCommand::Quit => Ok(()),
        }
    }

    async fn check_position(&mut self, position: usize, model: &SectionModel) -> Result<bool> {
        if position > model.len() {
            self.write(&format!("❌ 无效位置: {} (共 {} 个题组)\n", position, model.len()))
                .await?;
            return Ok(false);
        }
        Ok(true)
    }

    async fn print_sections(&mut self, model: &SectionModel) -> Result<()> {
        let mode = model.mode();
        let mut out = format!("题号模式: {} ({})\n", mode, mode.input_label());
        let summaries = model.describe_sections();
        if summaries.is_empty() {
            out.push_str("  (暂无题组)\n");
        }
        for summary in &summaries {
            out.push_str(&format!("  {}. {}\n", summary.position, summary));
        }
        out.push_str(&format!("下一题号: {}\n", model.next_question_number()));
        self.write(&out).await
    }

    async fn write(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        Ok(())
    }
}
