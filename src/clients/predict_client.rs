/// 推理服务 API 客户端
///
/// 封装所有与推理服务相关的调用逻辑
use async_trait::async_trait;
use reqwest::multipart;
use tracing::debug;

use crate::config::Config;
use crate::error::PredictError;
use crate::models::{Digit, PredictOutcome, PredictResponse, SelectedFile};

/// 推理能力边界
///
/// 流程层只依赖这个 trait，不关心 HTTP 细节
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// 发送图片并获取识别结果
    ///
    /// # 返回
    /// - `Ok(PredictOutcome::Prediction)` - 服务识别出了数字
    /// - `Ok(PredictOutcome::ServiceError)` - 服务在响应体中报告了业务错误
    /// - `Err(PredictError)` - 传输层失败（网络、状态码、解码）
    async fn predict(&self, file: &SelectedFile) -> Result<PredictOutcome, PredictError>;
}

/// 推理服务 HTTP 客户端
pub struct HttpPredictClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPredictClient {
    /// 创建新的推理客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.predict_api_base_url.clone(),
        }
    }

    /// 使用自定义服务地址创建
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/predict", self.base_url)
    }
}

#[async_trait]
impl InferenceClient for HttpPredictClient {
    async fn predict(&self, file: &SelectedFile) -> Result<PredictOutcome, PredictError> {
        let endpoint = self.endpoint();

        // 图片作为唯一的 multipart 字段 "file" 发送
        let part = multipart::Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        let form = multipart::Form::new().part("file", part);

        debug!(
            "POST {} (文件: {}, {} 字节)",
            endpoint,
            file.file_name,
            file.bytes.len()
        );

        let response = self
            .http
            .post(&endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| PredictError::request_failed(&endpoint, e))?;

        // 非成功状态码一律视为传输失败，不看响应体
        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::BadStatus {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body: PredictResponse =
            response
                .json()
                .await
                .map_err(|e| PredictError::DecodeFailed {
                    source: Box::new(e),
                })?;

        debug!("服务响应: {:?}", body);

        // error 字段优先于 prediction 检查
        if let Some(message) = body.error {
            return Ok(PredictOutcome::ServiceError(message));
        }

        match body.prediction {
            Some(value) => Ok(PredictOutcome::Prediction(Digit::try_from(value)?)),
            None => Err(PredictError::EmptyResponse { endpoint }),
        }
    }
}
