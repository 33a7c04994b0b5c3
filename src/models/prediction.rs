//! 识别结果数据模型
//!
//! 封装推理服务的返回格式以及经过校验的识别结果

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PredictError;

/// 经过校验的识别数字，保证落在 0-9 范围内
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    /// 获取数字值
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u64> for Digit {
    type Error = PredictError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value <= 9 {
            Ok(Digit(value as u8))
        } else {
            Err(PredictError::InvalidPrediction { value })
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 推理服务响应的线上格式
///
/// 服务约定：prediction 与 error 二者只会出现其一
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 一次成功传输的识别结果
///
/// 传输层失败走 `Err(PredictError)`，不会出现在这里
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictOutcome {
    /// 服务返回了识别出的数字
    Prediction(Digit),
    /// 服务在响应体中明确报告了业务错误
    ServiceError(String),
}
