//! # Application Dependencies / 应用依赖
//!
//! Parameter grouping for the application layer. Not a builder: no build
//! steps, no defaults, no hidden logic.
//! 仅用于参数打包：无构建步骤、无默认值、无隐藏逻辑。

use std::sync::Arc;

use blog_core::ports::{DocumentStorePort, FileEncoderPort, NavigatorPort, UiPort};
use blog_core::upload::UploadLimits;

/// All dependencies are required.
/// 所有依赖都是必需的。
#[derive(Clone)]
pub struct AppDeps {
    // Storage / 存储
    pub document_store: Arc<dyn DocumentStorePort>,

    // Upload pipeline / 上传
    pub file_encoder: Arc<dyn FileEncoderPort>,
    pub upload_limits: UploadLimits,

    // Presentation / 展示
    pub navigator: Arc<dyn NavigatorPort>,
    pub ui: Arc<dyn UiPort>,
}
