use std::fmt;

/// 提交前置条件错误
///
/// 在请求发出之前就被拦截的错误，不会改变提交状态
#[derive(Debug)]
pub enum SubmitError {
    /// 未选择图片就点击了提交
    NoFileSelected,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::NoFileSelected => write!(f, "请先选择要识别的图片"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// 推理服务调用错误（传输层）
///
/// 涵盖"请求/响应交换没有完成"的所有情况：
/// 网络失败、非成功状态码、响应体无法解码
#[derive(Debug)]
pub enum PredictError {
    /// 网络请求失败
    RequestFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 服务返回非成功状态码（无论响应体内容如何）
    BadStatus {
        endpoint: String,
        status: u16,
    },
    /// 响应体 JSON 解析失败
    DecodeFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 响应中的 prediction 超出 0-9 范围
    InvalidPrediction {
        value: u64,
    },
    /// 响应中既没有 prediction 也没有 error 字段
    EmptyResponse {
        endpoint: String,
    },
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::RequestFailed { endpoint, source } => {
                write!(f, "请求失败 ({}): {}", endpoint, source)
            }
            PredictError::BadStatus { endpoint, status } => {
                write!(f, "服务返回错误状态码 ({}): {}", endpoint, status)
            }
            PredictError::DecodeFailed { source } => {
                write!(f, "JSON解析失败: {}", source)
            }
            PredictError::InvalidPrediction { value } => {
                write!(f, "预测值 {} 超出范围 [0, 9]", value)
            }
            PredictError::EmptyResponse { endpoint } => {
                write!(f, "服务返回空结果: {}", endpoint)
            }
        }
    }
}

impl std::error::Error for PredictError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PredictError::RequestFailed { source, .. }
            | PredictError::DecodeFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 文件不存在
    NotFound {
        path: String,
    },
    /// 读取文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::NotFound { path } => write!(f, "文件不存在: {}", path),
            FileError::ReadFailed { path, source } => {
                write!(f, "读取文件失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

// ========== 便捷构造函数 ==========
// 注意：不需要手动实现 From<...> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl PredictError {
    /// 创建网络请求失败错误
    pub fn request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PredictError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }
}

impl FileError {
    /// 创建文件读取失败错误
    pub fn read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        FileError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_failed_display_includes_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = FileError::read_failed("digits/seven.png", io_err);

        let message = err.to_string();
        assert!(message.contains("digits/seven.png"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_request_failed_display_includes_endpoint() {
        let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = PredictError::request_failed("http://127.0.0.1:8000/predict", io_err);

        let message = err.to_string();
        assert!(message.contains("http://127.0.0.1:8000/predict"));
        assert!(message.contains("refused"));
    }
}
