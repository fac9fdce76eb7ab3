use super::*;

/// Tests reading repository metadata.
///
/// Expected: Ok(RepoStats) with name, stars and forks
#[tokio::test]
async fn returns_stats() {
    let test = TestBuilder::new()
        .with_json(
            &fixture::github::repo_path(),
            200,
            fixture::github::repository("DexIndex0", 5, 2),
        )
        .build()
        .await;

    let stats = service(&test.url(), None).fetch_repo_stats().await.unwrap();

    assert_eq!(stats.name, "DexIndex0");
    assert_eq!(stats.stargazers_count, 5);
    assert_eq!(stats.forks_count, 2);
}

/// Tests metadata missing the fork count.
///
/// Expected: Err(AdapterError::MalformedResponse)
#[tokio::test]
async fn missing_field_is_malformed() {
    let test = TestBuilder::new()
        .with_json(
            &fixture::github::repo_path(),
            200,
            serde_json::json!({ "name": "DexIndex0", "stargazers_count": 5 }),
        )
        .build()
        .await;

    let result = service(&test.url(), None).fetch_repo_stats().await;

    assert!(matches!(result, Err(AdapterError::MalformedResponse { .. })));
}

/// Tests a server error from GitHub.
///
/// Expected: Err(AdapterError::Remote { status: 502 })
#[tokio::test]
async fn server_error_is_remote_error() {
    let test = TestBuilder::new()
        .with_status(&fixture::github::repo_path(), 502)
        .build()
        .await;

    let result = service(&test.url(), None).fetch_repo_stats().await;

    assert!(matches!(result, Err(AdapterError::Remote { status: 502, .. })));
}
