use std::sync::Arc;

use tracing::{error, warn};

use crate::storage::{Storage, create_storage};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 启动前预处理：建立存储连接并运行迁移
///
/// 存储不可用时直接退出，服务没有降级运行的意义。
pub async fn prepare_server_startup() -> StartupContext {
    warn!("Initializing storage backend...");

    let storage = match create_storage().await {
        Ok(storage) => storage,
        Err(e) => {
            error!("Failed to initialize storage: {}", e.format_simple());
            std::process::exit(1);
        }
    };

    warn!("Storage backend ready");

    StartupContext { storage }
}
