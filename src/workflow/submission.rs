//! 图片提交流程 - 流程层
//!
//! 核心职责：定义"一次提交"的完整状态机
//!
//! 状态转换：
//! 1. Idle --submit()--> Submitting
//! 2. Submitting --识别成功--> Succeeded
//! 3. Submitting --业务错误/传输失败--> Failed
//! 4. Succeeded / Failed --submit()--> Submitting（可无限重新提交）

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::clients::InferenceClient;
use crate::error::SubmitError;
use crate::models::{Digit, PredictOutcome, SelectedFile};

/// 提交状态
///
/// Succeeded 和 Failed 同一时刻最多出现一个；
/// 进入 Submitting 时上一次的结果或错误会被清除
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    /// 初始状态，尚未提交
    Idle,
    /// 请求已发出，等待服务响应
    Submitting,
    /// 识别成功，携带识别出的数字
    Succeeded(Digit),
    /// 识别失败，携带展示给用户的错误信息
    Failed(String),
}

impl SubmissionState {
    /// 是否处于提交中
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

/// 图片提交流程控制器
///
/// - 持有唯一的选中文件和状态机
/// - 只依赖推理能力（InferenceClient），不关心 HTTP 细节
/// - 状态通过 watch 通道发布，展示层只读订阅
pub struct SubmissionController<C: InferenceClient> {
    client: C,
    selected: Option<SelectedFile>,
    state_tx: watch::Sender<SubmissionState>,
}

impl<C: InferenceClient> SubmissionController<C> {
    /// 创建新的提交控制器，初始状态为 Idle
    pub fn new(client: C) -> Self {
        let (state_tx, _state_rx) = watch::channel(SubmissionState::Idle);
        Self {
            client,
            selected: None,
            state_tx,
        }
    }

    /// 选择待识别的图片
    ///
    /// 整体替换上一次选中的文件，不改变提交状态
    pub fn select_file(&mut self, file: SelectedFile) {
        debug!("选中图片: {} ({} 字节)", file.file_name, file.bytes.len());
        self.selected = Some(file);
    }

    /// 当前是否已选中文件
    pub fn has_selected_file(&self) -> bool {
        self.selected.is_some()
    }

    /// 当前状态快照
    pub fn state(&self) -> SubmissionState {
        self.state_tx.borrow().clone()
    }

    /// 订阅状态变化（展示层使用，只读）
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state_tx.subscribe()
    }

    /// 提交当前选中的图片
    ///
    /// # 前置条件
    /// 必须已经选中文件，否则同步拒绝（不发请求、不改状态）
    ///
    /// # 返回
    /// 返回本次提交的终态（Succeeded 或 Failed）
    pub async fn submit(&mut self) -> Result<SubmissionState, SubmitError> {
        let file = match &self.selected {
            Some(file) => file,
            None => {
                warn!("⚠️ 未选择图片，提交被拦截");
                return Err(SubmitError::NoFileSelected);
            }
        };

        // 进入 Submitting，同时清除上一次的结果或错误
        self.state_tx.send_replace(SubmissionState::Submitting);

        let outcome = self.client.predict(file).await;

        // 三种出路各发布一个终态，Submitting 恰好退出一次
        let next = match outcome {
            Ok(PredictOutcome::Prediction(digit)) => SubmissionState::Succeeded(digit),
            Ok(PredictOutcome::ServiceError(message)) => {
                // 业务错误原样展示
                SubmissionState::Failed(message)
            }
            Err(e) => SubmissionState::Failed(format!("Error: {}", e)),
        };

        self.state_tx.send_replace(next.clone());
        Ok(next)
    }
}
