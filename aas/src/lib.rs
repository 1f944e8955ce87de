//! aas - Rust implementation of the Asset Administration Shell
//!
//! # Architecture
//!
//! - `aas-core`: Errors, identifiers, references, language strings, data types, result wrapper
//! - `aas-model`: Shells, assets, submodels, submodel elements, concept descriptions
//! - `aas-export`: Environments, V1.0 ⇄ V2.0 schema conversion
//! - `aas-utils`: Settings.xml, logging setup, network helpers
//! - `aas-client`: HTTP client for shell servers
//!
//! # Implementation Status
//!
//! ## ✅ 已完成
//! - 元模型（Shell, Asset, Submodel, 13 种子模型元素, ConceptDescription）
//! - V2.0 JSON 序列化（按 modelType 多态解码）
//! - V1.0 ⇄ V2.0 环境转换（含概念描述解析）
//! - 结果/消息封装
//! - Settings.xml 读写、日志初始化、网络工具
//! - Shell HTTP 客户端
//! - `aas-convert` 命令行工具
//!
//! ## 📋 待实现
//! - XML / AASX 包格式
//! - 服务端实现
//!
//! # Usage
//!
//! ```no_run
//! use aas::export::{AssetAdministrationShellEnvironment, SchemaVersion};
//!
//! let env = AssetAdministrationShellEnvironment::load("env_v1.json")?;
//! env.save("env_v2.json", SchemaVersion::V2_0)?;
//! # Ok::<(), aas::AasError>(())
//! ```

// Re-export core types
pub use aas_core::{AasError, AasResult, ApiResult, Message, MessageCollection, MessageType};
pub use aas_core::{DataType, ElementValue, Identifier, Key, KeyElements, Reference};

// Re-export the metamodel
pub mod model {
    pub use aas_model::*;
}

// Re-export environment handling and schema conversion
pub mod export {
    pub use aas_export::*;
}

// Re-export utilities
pub mod utils {
    pub use aas_utils::*;
}

// Re-export client API
pub mod client {
    pub use aas_client::*;
}
