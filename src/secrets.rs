//! 数据库凭据解析
//!
//! 外部协作者，按以下顺序解析数据库连接 URL：
//! 1. 配置了 Vault secret_path：从 KV v2 读取 username/password，
//!    与配置的 host/port/name 组合成 PostgreSQL URL。
//! 2. 配置了 database.url（或 DATABASE_URL）：原样使用。
//! 3. 默认本地 SQLite 文件。
//!
//! 错误信息与日志绝不包含凭据本身。

use std::collections::HashMap;

use secrecy::{ExposeSecret, Secret};
use tracing::{debug, info};
use vaultrs::client::{VaultClient, VaultClientSettingsBuilder};
use vaultrs::kv2;

use crate::config::AppConfig;
use crate::errors::{GradeServiceError, Result};

const DEFAULT_SQLITE_URL: &str = "sqlite://grades.db?mode=rwc";

pub async fn resolve_database_url(config: &AppConfig) -> Result<String> {
    if !config.vault.secret_path.is_empty() {
        return resolve_from_vault(config).await;
    }

    if !config.database.url.is_empty() {
        debug!("Using explicitly configured database URL");
        return Ok(config.database.url.clone());
    }

    info!("No database configured, falling back to local SQLite store");
    Ok(DEFAULT_SQLITE_URL.to_string())
}

/// 从 Vault KV v2 读取凭据并组合连接 URL
async fn resolve_from_vault(config: &AppConfig) -> Result<String> {
    info!(
        "Resolving database credentials from Vault at {} (path: {})",
        config.vault.addr, config.vault.secret_path
    );

    let settings = VaultClientSettingsBuilder::default()
        .address(&config.vault.addr)
        .token(&config.vault.token)
        .build()
        .map_err(|e| {
            GradeServiceError::secret_resolution(format!(
                "Failed to build Vault client settings: {e}"
            ))
        })?;

    let client = VaultClient::new(settings).map_err(|e| {
        GradeServiceError::secret_resolution(format!("Failed to create Vault client: {e}"))
    })?;

    let secret: HashMap<String, String> =
        kv2::read(&client, &config.vault.mount, &config.vault.secret_path)
            .await
            .map_err(|e| {
                GradeServiceError::secret_resolution(format!(
                    "Failed to read secret at path {}: {e}",
                    config.vault.secret_path
                ))
            })?;

    let username = secret
        .get("username")
        .cloned()
        .ok_or_else(|| missing_field(&config.vault.secret_path, "username"))?;
    let password: Secret<String> = secret
        .get("password")
        .cloned()
        .map(Secret::new)
        .ok_or_else(|| missing_field(&config.vault.secret_path, "password"))?;

    info!(
        "Database credentials resolved, connecting to {}:{}/{}",
        config.database.host, config.database.port, config.database.name
    );

    Ok(format!(
        "postgres://{}:{}@{}:{}/{}",
        username,
        password.expose_secret(),
        config.database.host,
        config.database.port,
        config.database.name
    ))
}

fn missing_field(path: &str, field: &str) -> GradeServiceError {
    GradeServiceError::secret_resolution(format!(
        "Field '{field}' not found in secret at path: {path}"
    ))
}
