use super::*;

#[test]
fn test_config_default() {
    let config = BrowserManagerConfig::default();
    assert_eq!(config.debug_port, 9222);
    assert_eq!(config.launch_attempts, 30);
    assert!(!config.headless);
}

#[test]
fn test_config_endpoint() {
    let config = BrowserManagerConfig {
        debug_port: 9333,
        ..Default::default()
    };
    assert_eq!(config.endpoint(), "http://localhost:9333");
}

#[test]
fn test_browser_error_display() {
    let err = BrowserError::ConnectionFailed("timeout".to_string());
    assert_eq!(err.to_string(), "Connection failed: timeout");

    let err = BrowserError::LaunchFailed("permission denied".to_string());
    assert_eq!(err.to_string(), "Failed to launch Chrome: permission denied");
}

#[test]
fn test_cdp_error_mapping() {
    let err: BrowserError = crate::cdp::CdpError::Timeout("slow".to_string()).into();
    assert!(matches!(err, BrowserError::Timeout(_)));

    let err: BrowserError = crate::cdp::CdpError::SessionClosed.into();
    assert!(matches!(err, BrowserError::NotConnected));
}

#[test]
fn test_driver_error_mapping() {
    use cupfinals_protocols::DriverError;

    let err: DriverError = BrowserError::Timeout("//th/a".to_string()).into();
    assert!(err.is_timeout());

    let err: DriverError = BrowserError::NavigationFailed("dns".to_string()).into();
    assert!(matches!(err, DriverError::Navigation(_)));

    let err: DriverError = BrowserError::ChromeNotFound.into();
    assert!(matches!(err, DriverError::Browser(_)));
}

#[test]
fn test_find_chrome() {
    if let Some(path) = BrowserManager::find_chrome() {
        assert!(path.exists());
    }
}

#[tokio::test]
async fn test_close_without_connect() {
    let manager = BrowserManager::new(BrowserManagerConfig::default());
    assert!(manager.close().await.is_ok());
    assert!(manager.shutdown().await.is_ok());
}

#[tokio::test]
async fn test_client_requires_connect() {
    let manager = BrowserManager::new(BrowserManagerConfig::default());
    assert!(matches!(manager.client().await, Err(BrowserError::NotConnected)));
}
