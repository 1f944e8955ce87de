//! HTTP client for Asset Administration Shell servers
//!
//! [`ClientBuilder`] creates an [`AssetAdministrationShellHttpClient`] that
//! talks to one shell over its REST interface. Every call returns an
//! [`aas_core::ApiResult`]; transport failures are reported the same way as
//! error responses.
//!
//! # TODO
//!
//! ## 连接管理
//! - [x] 客户端构建器（Builder）模式实现
//! - [x] 从 Settings.xml 读取端点、超时和代理
//! - [x] 代理支持（含基本认证）
//! - [x] 可达性检测
//!
//! ## 客户端功能
//! - [x] 读取 Shell 和子模型
//! - [x] 读取/写入子模型元素及其值
//! - [x] 创建、替换和删除子模型元素
//! - [x] 操作调用（同步）
//! - [ ] 异步操作调用与结果轮询
//!
//! ## 高级功能
//! - [ ] Registry 客户端
//! - [ ] 自动重试机制

pub mod builder;
pub mod http;
pub mod shell_client;

pub use builder::ClientBuilder;
pub use http::{
    HttpMethod, HttpResponse, HttpTransport, SimpleHttpClient, evaluate_empty_response,
    evaluate_response,
};
pub use shell_client::{AssetAdministrationShellHttpClient, InvocationRequest, InvocationResponse};
