//! # MNIST Digit Submit
//!
//! 一个向远程推理服务提交手写数字图片并展示识别结果的客户端
//!
//! ## 架构设计
//!
//! 本系统采用三层架构：
//!
//! ### ① 边界层（Clients）
//! - `clients/` - 封装与推理服务的 HTTP 交互
//! - `InferenceClient` - 推理能力 trait，流程层只依赖它
//! - `HttpPredictClient` - reqwest 实现，multipart 上传图片
//!
//! ### ② 流程层（Workflow）
//! - `workflow/` - 定义"一次提交"的完整状态机
//! - `SubmissionState` - Idle / Submitting / Succeeded / Failed
//! - `SubmissionController` - 持有选中文件，编排提交流程
//!
//! ### ③ 展示层（App）
//! - `app.rs` - 命令行前端，驱动 select_file + submit 并渲染状态
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::{HttpPredictClient, InferenceClient};
pub use config::Config;
pub use error::{FileError, PredictError, SubmitError};
pub use models::{Digit, PredictOutcome, PredictResponse, SelectedFile};
pub use workflow::{SubmissionController, SubmissionState};
