use anyhow::Result;
use tracing::{error, info, warn};

use crate::clients::HttpPredictClient;
use crate::config::Config;
use crate::models::SelectedFile;
use crate::workflow::{SubmissionController, SubmissionState};

/// 应用主结构
pub struct App {
    config: Config,
    controller: SubmissionController<HttpPredictClient>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        log_startup(&config);

        let client = HttpPredictClient::new(&config);
        let controller = SubmissionController::new(client);

        Self { config, controller }
    }

    /// 运行应用主逻辑
    ///
    /// 依次提交命令行给出的每张图片并展示识别结果
    pub async fn run(&mut self, image_paths: Vec<String>) -> Result<()> {
        if image_paths.is_empty() {
            // 对应"请先选择图片"的拦截提示
            warn!("⚠️ 没有传入图片路径，用法: mnist_digit_submit <图片路径>...");
            return Ok(());
        }

        let mut stats = ProcessingStats {
            total: image_paths.len(),
            ..Default::default()
        };

        for (idx, path) in image_paths.iter().enumerate() {
            let image_index = idx + 1;

            let file = match SelectedFile::load(path).await {
                Ok(file) => file,
                Err(e) => {
                    error!("[图片 {}] ❌ {}", image_index, e);
                    stats.failed += 1;
                    continue;
                }
            };

            if self.config.verbose_logging {
                info!(
                    "[图片 {}] 文件: {} ({} 字节)",
                    image_index,
                    file.file_name,
                    file.bytes.len()
                );
            }

            self.controller.select_file(file);

            info!("[图片 {}] 📤 正在提交识别...", image_index);

            match self.controller.submit().await {
                Ok(state) => {
                    render_state(image_index, &state);
                    if matches!(state, SubmissionState::Succeeded(_)) {
                        stats.success += 1;
                    } else {
                        stats.failed += 1;
                    }
                }
                Err(e) => {
                    // 前置条件拦截，不发请求
                    warn!("[图片 {}] ⚠️ {}", image_index, e);
                    stats.failed += 1;
                }
            }
        }

        print_final_stats(&stats);

        Ok(())
    }
}

/// 处理统计
#[derive(Debug, Default)]
struct ProcessingStats {
    success: usize,
    failed: usize,
    total: usize,
}

/// 展示单次提交的终态
fn render_state(image_index: usize, state: &SubmissionState) {
    match state {
        SubmissionState::Succeeded(digit) => {
            info!("[图片 {}] ✓ 识别结果: {}", image_index, digit);
        }
        SubmissionState::Failed(message) => {
            error!("[图片 {}] ❌ {}", image_index, message);
        }
        // submit 返回的只会是终态
        SubmissionState::Idle | SubmissionState::Submitting => {}
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - MNIST 手写数字识别客户端");
    info!("📡 推理服务: {}", config.predict_api_base_url);
    info!("{}", "=".repeat(60));
}

fn print_final_stats(stats: &ProcessingStats) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部识别完成统计");
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", stats.success, stats.total);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
}
