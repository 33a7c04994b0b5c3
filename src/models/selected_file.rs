//! 用户选中的待识别图片
//!
//! 同一时刻最多只有一张；重新选择时整体替换，提交不会清除它

use std::path::Path;

use tracing::debug;

use crate::error::FileError;

/// 用户选中的图片文件
#[derive(Debug, Clone)]
pub struct SelectedFile {
    /// 原始文件名（作为 multipart 字段的 file_name 发送）
    pub file_name: String,
    /// 文件二进制内容
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// 用内存中的数据创建选中文件
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// 从磁盘加载图片文件
    ///
    /// 这里不做任何格式或大小校验，校验交给推理服务
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, FileError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(FileError::NotFound {
                path: path.display().to_string(),
            });
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| FileError::read_failed(path.display().to_string(), e))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        debug!("已加载图片 {} ({} 字节)", file_name, bytes.len());

        Ok(Self { file_name, bytes })
    }
}
