use ory_login_client::application::config::{
    Config, ProjectSlug, RateLimiterConfig, RestApiConfig, ServerConfiguration,
};
use ory_login_client::error::AppError;

#[test]
fn test_project_url_matches_template_exactly() {
    for slug in ["a", "playground", "affectionate-archimedes-s9mkjq77k0", "ABC123"] {
        let config = Config::new(slug).unwrap();
        assert_eq!(
            config.base_url().unwrap(),
            format!("https://{slug}.projects.oryapis.com")
        );
    }
}

#[test]
fn test_single_server_entry() {
    let config = Config::new("demo").unwrap();
    assert_eq!(config.server_index, 0);
    assert_eq!(
        config.servers,
        vec![ServerConfiguration {
            url: "https://demo.projects.oryapis.com".to_string(),
            description: Some("Ory Network project demo".to_string()),
        }]
    );
}

#[test]
fn test_empty_slug_fails_at_construction() {
    match Config::new("") {
        Err(AppError::InvalidInput(msg)) => assert!(msg.contains("must not be empty")),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_from_env_reads_slug() {
    // The only test in this binary touching ORY_PROJECT_SLUG or ORY_RATE_LIMIT_*.
    unsafe { std::env::set_var("ORY_PROJECT_SLUG", "env-project") };
    unsafe { std::env::remove_var("ORY_RATE_LIMIT_MAX_REQUESTS") };
    unsafe { std::env::remove_var("ORY_RATE_LIMIT_PERIOD_SECONDS") };
    unsafe { std::env::remove_var("ORY_RATE_LIMIT_BURST_SIZE") };
    let config = Config::from_env().unwrap();
    assert_eq!(config.project_slug, ProjectSlug::new("env-project").unwrap());
    assert_eq!(config.rate_limiter, None);

    unsafe { std::env::set_var("ORY_RATE_LIMIT_MAX_REQUESTS", "7") };
    let config = Config::from_env().unwrap();
    assert_eq!(
        config.rate_limiter,
        Some(RateLimiterConfig {
            max_requests: 7,
            period_seconds: 60,
            burst_size: 10,
        })
    );
    assert_eq!(Config::new("env-project").unwrap().rate_limiter, None);
    unsafe { std::env::remove_var("ORY_RATE_LIMIT_MAX_REQUESTS") };

    unsafe { std::env::set_var("ORY_PROJECT_SLUG", "   ") };
    assert!(matches!(Config::from_env(), Err(AppError::InvalidInput(_))));

    unsafe { std::env::remove_var("ORY_PROJECT_SLUG") };
    assert!(matches!(Config::from_env(), Err(AppError::InvalidInput(_))));
}

#[test]
fn test_builders() {
    let limits = RateLimiterConfig {
        max_requests: 5,
        period_seconds: 1,
        burst_size: 5,
    };
    let config = Config::new("demo")
        .unwrap()
        .with_timeout(3)
        .with_rate_limiter(limits.clone());
    assert_eq!(config.rest_api, RestApiConfig { timeout: 3 });
    assert_eq!(config.rate_limiter, Some(limits));
}

#[test]
fn test_config_serialization_round_trip() {
    let config = Config::new("demo").unwrap().with_timeout(12);
    let json = serde_json::to_string(&config).unwrap();
    let decoded: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, config);
}
