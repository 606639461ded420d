//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Every test works inside its own uniquely named team, so they can share one database.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

fn names(rows: &[MemberTeamRow]) -> Vec<Option<String>> {
    rows.iter().map(|row| row.username.clone()).collect()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Search Tests
// ============================================================================

#[tokio::test]
async fn test_search_by_team_name() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let roster = Roster::create(&server, &[10, 20, 30]).await.unwrap();

    let response = server
        .get_query("/api/v1/members/search", &[("teamName", &roster.team.name)])
        .await
        .unwrap();
    let rows: Vec<MemberTeamRow> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(names(&rows), roster.usernames(&[0, 1, 2]));
    assert!(rows.iter().all(|row| row.team_id == Some(roster.team.id)));
    assert!(rows.iter().all(|row| row.team_name.as_deref() == Some(roster.team.name.as_str())));
    assert!(rows.windows(2).all(|pair| pair[0].member_id < pair[1].member_id));
}

#[tokio::test]
async fn test_search_age_range() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let roster = Roster::create(&server, &[10, 20, 30, 40]).await.unwrap();

    let response = server
        .get_query(
            "/api/v1/members/search",
            &[("teamName", roster.team.name.as_str()), ("ageGoe", "20"), ("ageLoe", "30")],
        )
        .await
        .unwrap();
    let rows: Vec<MemberTeamRow> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(names(&rows), roster.usernames(&[1, 2]));

    let response = server
        .get_query(
            "/api/v1/members/search",
            &[("teamName", roster.team.name.as_str()), ("ageGoe", "35")],
        )
        .await
        .unwrap();
    let rows: Vec<MemberTeamRow> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(names(&rows), roster.usernames(&[3]));
    assert_eq!(rows[0].age, 40);
}

#[tokio::test]
async fn test_search_unknown_team_is_empty() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let missing = format!("missing-{}", unique_suffix());

    let response = server
        .get_query("/api/v1/members/search", &[("teamName", &missing)])
        .await
        .unwrap();
    let rows: Vec<MemberTeamRow> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_blank_filters_are_ignored() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let roster = Roster::create(&server, &[10, 20]).await.unwrap();

    let response = server
        .get_query(
            "/api/v1/members/search",
            &[("teamName", roster.team.name.as_str()), ("username", " ")],
        )
        .await
        .unwrap();
    let rows: Vec<MemberTeamRow> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(names(&rows), roster.usernames(&[0, 1]));
}

#[tokio::test]
async fn test_search_includes_members_without_team() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateMemberRequest::unique(77, None);
    let username = request.username.clone().unwrap();
    let response = server.post("/api/v1/members", &request).await.unwrap();
    let created: MemberResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_query("/api/v1/members/search", &[("username", &username)])
        .await
        .unwrap();
    let rows: Vec<MemberTeamRow> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].member_id, created.id);
    assert!(rows[0].team_id.is_none());
    assert!(rows[0].team_name.is_none());
}

#[tokio::test]
async fn test_count_matches_search() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let roster = Roster::create(&server, &[10, 20, 30]).await.unwrap();

    let response = server
        .get_query(
            "/api/v1/members/search/count",
            &[("teamName", roster.team.name.as_str()), ("ageLoe", "20")],
        )
        .await
        .unwrap();
    let body: CountBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.count, 2);
}

#[tokio::test]
async fn test_search_rejects_negative_age() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get_query("/api/v1/members/search", &[("ageGoe", "-1")])
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
}

// ============================================================================
// Paging Tests
// ============================================================================

#[tokio::test]
async fn test_page_strategies_agree() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let roster = Roster::create(&server, &[10, 20, 30, 40]).await.unwrap();

    for strategy in ["simple", "optimized"] {
        let response = server
            .get_query(
                "/api/v1/members/search/page",
                &[
                    ("teamName", roster.team.name.as_str()),
                    ("page", "0"),
                    ("size", "3"),
                    ("strategy", strategy),
                ],
            )
            .await
            .unwrap();
        let page: PageBody = assert_json(response, StatusCode::OK).await.unwrap();

        assert_eq!(page.strategy, strategy);
        assert_eq!(names(&page.content), roster.usernames(&[0, 1, 2]));
        assert_eq!(page.total_elements, 4);
        assert_eq!(page.total_pages, 2);
        assert!(page.has_next);
        assert!(!page.has_previous);

        let response = server
            .get_query(
                "/api/v1/members/search/page",
                &[
                    ("teamName", roster.team.name.as_str()),
                    ("page", "1"),
                    ("size", "3"),
                    ("strategy", strategy),
                ],
            )
            .await
            .unwrap();
        let page: PageBody = assert_json(response, StatusCode::OK).await.unwrap();

        assert_eq!(page.page, 1);
        assert_eq!(names(&page.content), roster.usernames(&[3]));
        assert_eq!(page.total_elements, 4);
        assert!(!page.has_next);
        assert!(page.has_previous);
    }
}

#[tokio::test]
async fn test_page_past_the_end_reports_total() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let roster = Roster::create(&server, &[10, 20]).await.unwrap();

    for strategy in ["simple", "complex"] {
        let response = server
            .get_query(
                "/api/v1/members/search/page",
                &[
                    ("teamName", roster.team.name.as_str()),
                    ("page", "5"),
                    ("size", "2"),
                    ("strategy", strategy),
                ],
            )
            .await
            .unwrap();
        let page: PageBody = assert_json(response, StatusCode::OK).await.unwrap();

        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 2);
        assert_eq!(page.size, 2);
    }
}

#[tokio::test]
async fn test_page_rejects_oversized_request() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get_query("/api/v1/members/search/page", &[("size", "100000")])
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_page_number_out_of_range() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get_query(
            "/api/v1/members/search/page",
            &[("page", "9223372036854775807"), ("size", "1")],
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_PAGE_REQUEST");
}

// ============================================================================
// Member Tests
// ============================================================================

#[tokio::test]
async fn test_create_then_find_by_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateMemberRequest::unique(25, None);
    let username = request.username.clone().unwrap();

    let response = server.post("/api/v1/members", &request).await.unwrap();
    let created: MemberResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.username.as_deref(), Some(username.as_str()));
    assert_eq!(created.age, 25);

    let response = server
        .get_query("/api/v1/members", &[("username", &username)])
        .await
        .unwrap();
    let members: Vec<MemberResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, created.id);

    let response = server
        .get(&format!("/api/v1/members/{}", created.id))
        .await
        .unwrap();
    let fetched: MemberResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, created.id);
}

#[tokio::test]
async fn test_create_member_with_unknown_team() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateMemberRequest::unique(30, Some(i64::MAX));

    let response = server.post("/api/v1/members", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_TEAM");
}

#[tokio::test]
async fn test_create_member_rejects_negative_age() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateMemberRequest::unique(-1, None);

    let response = server.post("/api/v1/members", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_get_unknown_member() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get(&format!("/api/v1/members/{}", i64::MAX))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_MEMBER");
    assert!(!body.error.message.is_empty());
}

#[tokio::test]
async fn test_delete_member() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let roster = Roster::create(&server, &[10]).await.unwrap();
    let member_id = roster.members[0].id;

    let response = server
        .delete(&format!("/api/v1/members/{member_id}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/members/{member_id}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_member_summaries_include_new_member() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let roster = Roster::create(&server, &[42]).await.unwrap();

    let response = server.get("/api/v1/members/summaries").await.unwrap();
    let summaries: Vec<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();

    let username = roster.members[0].username.clone().unwrap();
    assert!(summaries
        .iter()
        .any(|s| s["username"] == username.as_str() && s["age"] == 42));
}

// ============================================================================
// Team Tests
// ============================================================================

#[tokio::test]
async fn test_get_team_with_members() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let roster = Roster::create(&server, &[10, 20]).await.unwrap();

    let response = server
        .get(&format!("/api/v1/teams/{}", roster.team.id))
        .await
        .unwrap();
    let team: TeamWithMembersResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(team.id, roster.team.id);
    assert_eq!(team.name, roster.team.name);
    assert_eq!(team.member_count, 2);
    assert_eq!(
        team.members.iter().map(|m| m.id).collect::<Vec<_>>(),
        roster.members.iter().map(|m| m.id).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn test_find_team_by_name() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let roster = Roster::create(&server, &[]).await.unwrap();

    let response = server
        .get_query("/api/v1/teams", &[("name", &roster.team.name)])
        .await
        .unwrap();
    let team: TeamResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(team.id, roster.team.id);

    let response = server
        .get_query("/api/v1/teams", &[("name", format!("missing-{}", unique_suffix()))])
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_team_name() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateTeamRequest::unique();

    let response = server.post("/api/v1/teams", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/v1/teams", &request).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "TEAM_NAME_EXISTS");
}

#[tokio::test]
async fn test_delete_team_keeps_members() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let roster = Roster::create(&server, &[10]).await.unwrap();
    let member_id = roster.members[0].id;

    let response = server
        .delete(&format!("/api/v1/teams/{}", roster.team.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/members/{member_id}"))
        .await
        .unwrap();
    let member: MemberResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(member.team_id.is_none());

    let response = server
        .get(&format!("/api/v1/teams/{}", roster.team.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
