//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 1. **加载定义**：读取答题卡定义文件并逐个题组校验
//! 2. **命令分发**：render / preview / pdf / describe / shell
//! 3. **向下委托**：导出交给 `ExportFlow`，交互交给 `Shell`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::io::BufReader;
use tracing::info;

use crate::cli::Command;
use crate::config::Config;
use crate::models::load_sheet;
use crate::orchestrator::shell::Shell;
use crate::services::SectionModel;
use crate::utils::logging::{log_export_done, log_sections, log_startup};
use crate::workflow::ExportFlow;

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 执行一个命令
    pub async fn run(&self, command: Command) -> Result<()> {
        log_startup(command.name());

        match command {
            Command::Render { sheet, output } => {
                let (model, flow) = self.load(&sheet).await?;
                let output = output.unwrap_or_else(|| self.default_output(&sheet, "html"));
                let saved = flow.save_html(&model, &output).await?;
                log_export_done(&saved.display().to_string());
            }
            Command::Preview { sheet } => {
                let (model, flow) = self.load(&sheet).await?;
                flow.preview(&model)?;
                log_export_done("browser");
            }
            Command::Pdf { sheet, output } => {
                let (model, flow) = self.load(&sheet).await?;
                let output = output.unwrap_or_else(|| self.default_output(&sheet, "pdf"));
                let saved = flow.save_pdf(&model, &output).await?;
                log_export_done(&saved.display().to_string());
            }
            Command::Describe { sheet, json } => {
                let (model, _) = self.load(&sheet).await?;
                let summaries = model.describe_sections();
                if json {
                    println!("{}", serde_json::to_string_pretty(&summaries)?);
                } else {
                    for summary in &summaries {
                        println!("{}. {}", summary.position, summary);
                    }
                    println!("共 {} 题", model.total_questions());
                }
            }
            Command::Shell { mode } => {
                let flow = ExportFlow::new(&self.config);
                let mut model = SectionModel::new(mode);
                let reader = BufReader::new(tokio::io::stdin());
                Shell::new(&flow, reader, tokio::io::stdout())
                    .run(&mut model)
                    .await?;
                info!("👋 已退出，共 {} 个题组", model.len());
            }
        }

        Ok(())
    }

    /// 加载定义文件，返回题组模型和对应标题的导出流程
    async fn load(&self, sheet: &Path) -> Result<(SectionModel, ExportFlow)> {
        info!("\n📁 正在加载答题卡定义: {}", sheet.display());
        let definition = load_sheet(sheet).await?;
        let model = SectionModel::from_definition(&definition)
            .with_context(|| format!("答题卡定义无效: {}", sheet.display()))?;

        let mut flow = ExportFlow::new(&self.config);
        if let Some(title) = definition.title {
            flow = flow.with_title(title);
        }
        log_sections(flow.title(), &model);

        Ok((model, flow))
    }

    fn default_output(&self, sheet: &Path, extension: &str) -> PathBuf {
        let stem = sheet
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "answer_sheet".to_string());
        PathBuf::from(&self.config.output_dir).join(format!("{}.{}", stem, extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_uses_sheet_stem() {
        let app = App::new(Config {
            output_dir: "out".to_string(),
            ..Config::default()
        });

        assert_eq!(
            app.default_output(Path::new("sheets/test1.toml"), "html"),
            PathBuf::from("out").join("test1.html")
        );
        assert_eq!(
            app.default_output(Path::new("sheets/test1.toml"), "pdf"),
            PathBuf::from("out").join("test1.pdf")
        );
    }

    #[tokio::test]
    async fn test_render_command_writes_html() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = dir.path().join("mock.toml");
        std::fs::write(
            &sheet,
            "title = \"Mock\"\nmode = \"end\"\n[[sections]]\ntype = \"tfng\"\nvalue = 6\n[[sections]]\ntype = \"roman\"\nvalue = 10\nextra = 5\n",
        )
        .unwrap();

        let app = App::new(Config {
            output_dir: dir.path().join("out").to_string_lossy().to_string(),
            export_log_file: dir.path().join("export_log.txt").to_string_lossy().to_string(),
            ..Config::default()
        });
        app.run(Command::Render {
            sheet: sheet.clone(),
            output: None,
        })
        .await
        .unwrap();

        let html = std::fs::read_to_string(dir.path().join("out").join("mock.html")).unwrap();
        assert!(html.contains("<h2>Mock</h2>"));
        assert_eq!(html.matches("class=\"qbox\"").count(), 10);
    }

    #[tokio::test]
    async fn test_render_command_rejects_invalid_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = dir.path().join("bad.toml");
        std::fs::write(&sheet, "[[sections]]\ntype = \"letter\"\nvalue = 3\nextra = \"ab\"\n").unwrap();

        let app = App::new(Config {
            output_dir: dir.path().join("out").to_string_lossy().to_string(),
            export_log_file: dir.path().join("export_log.txt").to_string_lossy().to_string(),
            ..Config::default()
        });
        let err = app
            .run(Command::Render {
                sheet,
                output: None,
            })
            .await
            .unwrap_err();

        assert!(format!("{:#}", err).contains("第 1 个题组无效"));
        assert!(!dir.path().join("out").exists());
    }
}
