//! Server info integration tests.

use std::collections::HashMap;
use std::io::Write;

use kc_federation::USER_STORAGE_SPI;
use kc_federation_memory::{MemoryUserStorageProviderFactory, INFO_PATH, PROVIDER_ID};
use kc_spi::ProviderFactory;

use crate::common::TestEnv;

/// Tests that the bundled build info is published.
#[tokio::test]
async fn test_bundled_server_info() -> anyhow::Result<()> {
    let env = TestEnv::new();

    let info = env
        .registry
        .operational_info(USER_STORAGE_SPI, PROVIDER_ID)
        .ok_or_else(|| anyhow::anyhow!("factory should publish server info"))?;

    assert_eq!(info.get("name").map(String::as_str), Some("kc-federation-memory"));
    assert!(info.contains_key("version"));
    assert!(info.contains_key("git.commit"));

    Ok(())
}

/// Tests that an on-disk resource replaces the bundled one.
#[tokio::test]
async fn test_server_info_from_file() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join(format!("{}-info.properties", uuid::Uuid::now_v7()));
    let mut file = std::fs::File::create(&path)?;
    writeln!(file, "# deployment info")?;
    writeln!(file, "environment = staging")?;
    writeln!(file, "owner: identity-team")?;
    drop(file);

    let mut factory = MemoryUserStorageProviderFactory::new();
    let config = HashMap::from([(INFO_PATH.to_string(), path.display().to_string())]);
    factory.init(&config).await?;
    let env = TestEnv::with_factory(factory);

    let info = env
        .registry
        .operational_info(USER_STORAGE_SPI, PROVIDER_ID)
        .ok_or_else(|| anyhow::anyhow!("factory should publish server info"))?;

    assert_eq!(info.len(), 2);
    assert_eq!(info.get("environment").map(String::as_str), Some("staging"));
    assert_eq!(info.get("owner").map(String::as_str), Some("identity-team"));

    std::fs::remove_file(path)?;
    Ok(())
}

/// Tests that a missing resource degrades to an empty map.
#[tokio::test]
async fn test_missing_server_info_is_empty() -> anyhow::Result<()> {
    let mut factory = MemoryUserStorageProviderFactory::new();
    let config = HashMap::from([(
        INFO_PATH.to_string(),
        "/nonexistent/kc/info.properties".to_string(),
    )]);
    factory.init(&config).await?;
    let env = TestEnv::with_factory(factory);

    let info = env
        .registry
        .operational_info(USER_STORAGE_SPI, PROVIDER_ID)
        .ok_or_else(|| anyhow::anyhow!("factory should publish server info"))?;

    assert!(info.is_empty());
    Ok(())
}
