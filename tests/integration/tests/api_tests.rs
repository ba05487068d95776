//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET, ADMIN_LICENSE, ADMIN_PASSWORD
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Log in as the seeded primary admin and return the access token
async fn admin_token(server: &TestServer) -> String {
    let response = server
        .post("/api/v1/auth/login", &LoginRequest::admin())
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    auth.access_token
}

/// Register a guide, approve it as admin, and log it in
async fn approved_guide(server: &TestServer) -> (RegisterRequest, String) {
    let register_req = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &register_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let admin = admin_token(server).await;
    let response = server
        .put_auth(
            &format!("/api/v1/admin/guides/{}/approval", register_req.license_no),
            &admin,
            &SetApprovalRequest { approved: true },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post(
            "/api/v1/auth/login",
            &LoginRequest::from_register(&register_req),
        )
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    (register_req, auth.access_token)
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
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_guide() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let guide: GuideResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(guide.license_no, request.license_no);
    assert_eq!(guide.name, request.name);
    assert_eq!(guide.role, "guide");
    assert!(!guide.approved);
}

#[tokio::test]
async fn test_register_duplicate_license() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/v1/auth/register", &request).await.unwrap();

    // Second registration with same license number
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "LICENSE_ALREADY_REGISTERED");
}

#[tokio::test]
async fn test_register_weak_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "lettersonly".to_string();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_before_approval() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();

    let response = server
        .post(
            "/api/v1/auth/login",
            &LoginRequest::from_register(&register_req),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "ACCOUNT_PENDING_APPROVAL");
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        license_no: "LIC-DOES-NOT-EXIST".to_string(),
        password: "wrongpass1".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_admin_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/auth/login", &LoginRequest::admin())
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.token_type, "Bearer");
    assert_eq!(auth.guide.role, "admin");
    assert!(auth.guide.approved);
    assert!(!auth.access_token.is_empty());
    assert!(auth.expires_in > 0);
}

#[tokio::test]
async fn test_approval_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, token) = approved_guide(&server).await;

    // The issued token works against a protected route
    let response = server.get_auth("/api/v1/guides/@me", &token).await.unwrap();
    let guide: GuideResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(guide.license_no, register_req.license_no);
    assert!(guide.approved);
}

#[tokio::test]
async fn test_protected_route_without_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/guides/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_update_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = approved_guide(&server).await;

    let update = UpdateProfileRequest {
        bio: Some("Licensed guide since 2015".to_string()),
        base_rate: Some(75.0),
        ..Default::default()
    };
    let response = server
        .patch_auth("/api/v1/guides/@me", &token, &update)
        .await
        .unwrap();
    let guide: GuideResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(guide.bio.as_deref(), Some("Licensed guide since 2015"));
    assert_eq!(guide.base_rate, Some(75.0));
}

#[tokio::test]
async fn test_change_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, token) = approved_guide(&server).await;

    let change = ChangePasswordRequest {
        current_password: register_req.password.clone(),
        new_password: "NewPass456!".to_string(),
    };
    let response = server
        .put_auth("/api/v1/guides/@me/password", &token, &change)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Old password no longer works
    let response = server
        .post(
            "/api/v1/auth/login",
            &LoginRequest::from_register(&register_req),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // New password does
    let response = server
        .post(
            "/api/v1/auth/login",
            &LoginRequest {
                license_no: register_req.license_no.clone(),
                password: "NewPass456!".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_change_password_wrong_current() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = approved_guide(&server).await;

    let change = ChangePasswordRequest {
        current_password: "notmypassword1".to_string(),
        new_password: "NewPass456!".to_string(),
    };
    let response = server
        .put_auth("/api/v1/guides/@me/password", &token, &change)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Language Tests
// ============================================================================

#[tokio::test]
async fn test_language_catalog_crud() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;

    // Create
    let request = CreateLanguageRequest::unique();
    let response = server
        .post_auth("/api/v1/admin/languages", &admin, &request)
        .await
        .unwrap();
    let language: LanguageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(language.name, request.name);

    // Duplicate name conflicts
    let response = server
        .post_auth("/api/v1/admin/languages", &admin, &request)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "LANGUAGE_ALREADY_EXISTS");

    // Rename
    let renamed = CreateLanguageRequest::unique();
    let response = server
        .patch_auth(
            &format!("/api/v1/admin/languages/{}", language.id),
            &admin,
            &renamed,
        )
        .await
        .unwrap();
    let language: LanguageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(language.name, renamed.name);

    // Listed publicly
    let response = server.get("/api/v1/languages").await.unwrap();
    let catalog: Vec<LanguageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(catalog.iter().any(|l| l.id == language.id));

    // Delete
    let response = server
        .delete_auth(&format!("/api/v1/admin/languages/{}", language.id), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_set_guide_languages() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let (_, token) = approved_guide(&server).await;

    let response = server
        .post_auth(
            "/api/v1/admin/languages",
            &admin,
            &CreateLanguageRequest::unique(),
        )
        .await
        .unwrap();
    let language: LanguageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let request = SetLanguagesRequest {
        languages: vec![LanguageSelection {
            language_id: language.id,
            level: Some("Native".to_string()),
        }],
    };
    let response = server
        .put_auth("/api/v1/guides/@me/languages", &token, &request)
        .await
        .unwrap();
    let languages: Vec<GuideLanguageResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(languages.len(), 1);
    assert_eq!(languages[0].language_id, language.id);
    assert_eq!(languages[0].name.as_deref(), Some(language.name.as_str()));
    assert_eq!(languages[0].level.as_deref(), Some("Native"));
}

#[tokio::test]
async fn test_replace_language_set_leaves_no_residue() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let (_, token) = approved_guide(&server).await;

    let mut language_ids = Vec::new();
    for _ in 0..3 {
        let response = server
            .post_auth(
                "/api/v1/admin/languages",
                &admin,
                &CreateLanguageRequest::unique(),
            )
            .await
            .unwrap();
        let language: LanguageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        language_ids.push(language.id);
    }

    // Claim all three
    let request = SetLanguagesRequest {
        languages: language_ids
            .iter()
            .map(|&id| LanguageSelection {
                language_id: id,
                level: None,
            })
            .collect(),
    };
    let response = server
        .put_auth("/api/v1/guides/@me/languages", &token, &request)
        .await
        .unwrap();
    let languages: Vec<GuideLanguageResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(languages.len(), 3);

    // Replace with a single one; the other two must not linger
    let kept = language_ids[1];
    let request = SetLanguagesRequest {
        languages: vec![LanguageSelection {
            language_id: kept,
            level: Some("Basic".to_string()),
        }],
    };
    server
        .put_auth("/api/v1/guides/@me/languages", &token, &request)
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/guides/@me/languages", &token)
        .await
        .unwrap();
    let languages: Vec<GuideLanguageResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(languages.len(), 1);
    assert_eq!(languages[0].language_id, kept);
    assert_eq!(languages[0].level.as_deref(), Some("Basic"));
}

#[tokio::test]
async fn test_set_unknown_language() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = approved_guide(&server).await;

    let request = SetLanguagesRequest {
        languages: vec![LanguageSelection {
            language_id: i64::MAX,
            level: None,
        }],
    };
    let response = server
        .put_auth("/api/v1/guides/@me/languages", &token, &request)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "UNKNOWN_LANGUAGE");
}

// ============================================================================
// Availability Tests
// ============================================================================

#[tokio::test]
async fn test_publish_and_list_slots() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = approved_guide(&server).await;

    let request = CreateSlotRequest::tomorrow_morning();
    let response = server
        .post_auth("/api/v1/guides/@me/availability", &token, &request)
        .await
        .unwrap();
    let slot: SlotResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(slot.day, request.day);
    assert_eq!(slot.status, "Available");

    let response = server
        .get_auth("/api/v1/guides/@me/availability", &token)
        .await
        .unwrap();
    let slots: Vec<SlotResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(slots.iter().any(|s| s.id == slot.id));
}

#[tokio::test]
async fn test_publish_duplicate_slot() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = approved_guide(&server).await;

    let request = CreateSlotRequest::tomorrow_morning();
    server
        .post_auth("/api/v1/guides/@me/availability", &token, &request)
        .await
        .unwrap();

    let response = server
        .post_auth("/api/v1/guides/@me/availability", &token, &request)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "SLOT_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_publish_slot_invalid_window() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = approved_guide(&server).await;

    let mut request = CreateSlotRequest::tomorrow_morning();
    std::mem::swap(&mut request.start_time, &mut request.end_time);

    let response = server
        .post_auth("/api/v1/guides/@me/availability", &token, &request)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "INVALID_TIME_WINDOW");
}

#[tokio::test]
async fn test_publish_slot_in_past() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = approved_guide(&server).await;

    let mut request = CreateSlotRequest::tomorrow_morning();
    request.day = chrono::Utc::now().date_naive() - chrono::Duration::days(2);

    let response = server
        .post_auth("/api/v1/guides/@me/availability", &token, &request)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "DATE_IN_PAST");
}

#[tokio::test]
async fn test_delete_slot() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = approved_guide(&server).await;

    let response = server
        .post_auth(
            "/api/v1/guides/@me/availability",
            &token,
            &CreateSlotRequest::tomorrow_morning(),
        )
        .await
        .unwrap();
    let slot: SlotResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/guides/@me/availability/{}", slot.id),
            &token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Already gone
    let response = server
        .delete_auth(
            &format!("/api/v1/guides/@me/availability/{}", slot.id),
            &token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_foreign_slot() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner_token) = approved_guide(&server).await;
    let (_, other_token) = approved_guide(&server).await;

    let response = server
        .post_auth(
            "/api/v1/guides/@me/availability",
            &owner_token,
            &CreateSlotRequest::tomorrow_morning(),
        )
        .await
        .unwrap();
    let slot: SlotResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Another guide cannot delete it, and cannot tell it exists
    let response = server
        .delete_auth(
            &format!("/api/v1/guides/@me/availability/{}", slot.id),
            &other_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Search Tests
// ============================================================================

#[tokio::test]
async fn test_search_by_day() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, token) = approved_guide(&server).await;

    let slot = CreateSlotRequest::tomorrow_morning();
    server
        .post_auth("/api/v1/guides/@me/availability", &token, &slot)
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/v1/search?day={}", slot.day))
        .await
        .unwrap();
    let results: Vec<SearchResult> = assert_json(response, StatusCode::OK).await.unwrap();

    let hit = results
        .iter()
        .find(|r| r.license_no == register_req.license_no)
        .expect("guide should appear in search results");
    assert_eq!(hit.name, register_req.name);
    assert_eq!(hit.start_time, slot.start_time);
}

#[tokio::test]
async fn test_search_excludes_unapproved() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Registered but never approved, so it cannot log in or publish slots;
    // searching any day must not surface it
    let register_req = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();

    let day = chrono::Utc::now().date_naive() + chrono::Duration::days(1);
    let response = server.get(&format!("/api/v1/search?day={day}")).await.unwrap();
    let results: Vec<SearchResult> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(results.iter().all(|r| r.license_no != register_req.license_no));
}

#[tokio::test]
async fn test_search_with_language_filter() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let (register_req, token) = approved_guide(&server).await;

    // Catalog language claimed by the guide
    let response = server
        .post_auth(
            "/api/v1/admin/languages",
            &admin,
            &CreateLanguageRequest::unique(),
        )
        .await
        .unwrap();
    let spoken: LanguageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Catalog language nobody claims
    let response = server
        .post_auth(
            "/api/v1/admin/languages",
            &admin,
            &CreateLanguageRequest::unique(),
        )
        .await
        .unwrap();
    let unspoken: LanguageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .put_auth(
            "/api/v1/guides/@me/languages",
            &token,
            &SetLanguagesRequest {
                languages: vec![LanguageSelection {
                    language_id: spoken.id,
                    level: Some("Advanced".to_string()),
                }],
            },
        )
        .await
        .unwrap();

    let slot = CreateSlotRequest::tomorrow_morning();
    server
        .post_auth("/api/v1/guides/@me/availability", &token, &slot)
        .await
        .unwrap();

    // Matching filter includes the guide, with language names resolved
    let response = server
        .get(&format!(
            "/api/v1/search?day={}&language_id={}",
            slot.day, spoken.id
        ))
        .await
        .unwrap();
    let results: Vec<SearchResult> = assert_json(response, StatusCode::OK).await.unwrap();
    let hit = results
        .iter()
        .find(|r| r.license_no == register_req.license_no)
        .expect("guide should match the language filter");
    assert!(hit.languages.contains(&spoken.name));

    // Non-matching filter excludes the guide
    let response = server
        .get(&format!(
            "/api/v1/search?day={}&language_id={}",
            slot.day, unspoken.id
        ))
        .await
        .unwrap();
    let results: Vec<SearchResult> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(results.iter().all(|r| r.license_no != register_req.license_no));
}

// ============================================================================
// Complaint Tests
// ============================================================================

#[tokio::test]
async fn test_complaint_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let (register_req, token) = approved_guide(&server).await;

    // Filed publicly, no auth
    let response = server
        .post(
            "/api/v1/complaints",
            &CreateComplaintRequest::against(&register_req.license_no),
        )
        .await
        .unwrap();
    let created: ComplaintCreatedResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    // Visible to the guide it names
    let response = server
        .get_auth("/api/v1/guides/@me/complaints", &token)
        .await
        .unwrap();
    let complaints: Vec<ComplaintResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let ticket = complaints
        .iter()
        .find(|c| c.id == created.id)
        .expect("guide should see its own complaint");
    assert_eq!(ticket.status, "Pending");
    assert_eq!(ticket.guide_name, register_req.name);

    // Admin updates the status
    let response = server
        .patch_auth(
            &format!("/api/v1/admin/complaints/{}", created.id),
            &admin,
            &UpdateComplaintStatusRequest {
                status: "Resolved".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Admin deletes the ticket
    let response = server
        .delete_auth(&format!("/api/v1/admin/complaints/{}", created.id), &admin)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_complaint_anonymous_reporter() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, token) = approved_guide(&server).await;

    let mut request = CreateComplaintRequest::against(&register_req.license_no);
    request.reporter = None;
    let response = server.post("/api/v1/complaints", &request).await.unwrap();
    let created: ComplaintCreatedResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/guides/@me/complaints", &token)
        .await
        .unwrap();
    let complaints: Vec<ComplaintResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let ticket = complaints.iter().find(|c| c.id == created.id).unwrap();
    assert_eq!(ticket.reporter, "Anonymous");
}

#[tokio::test]
async fn test_complaint_unknown_guide() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateComplaintRequest::against("LIC-DOES-NOT-EXIST");

    let response = server.post("/api/v1/complaints", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "UNKNOWN_GUIDE");
}

// ============================================================================
// Booking Tests
// ============================================================================

#[tokio::test]
async fn test_booking_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let (register_req, token) = approved_guide(&server).await;

    // Admin records a booking; total is base_rate * duration
    let request = CreateBookingRequest::tomorrow_for(&register_req.license_no);
    let response = server
        .post_auth("/api/v1/admin/bookings", &admin, &request)
        .await
        .unwrap();
    let booking: BookingResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(booking.status, "Confirmed");
    assert!((booking.total_rate - 150.0).abs() < f64::EPSILON);

    // The guide sees it
    let response = server
        .get_auth("/api/v1/guides/@me/bookings", &token)
        .await
        .unwrap();
    let bookings: Vec<BookingResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(bookings.iter().any(|b| b.id == booking.id));

    // Admin marks it completed
    let response = server
        .patch_auth(
            &format!("/api/v1/admin/bookings/{}", booking.id),
            &admin,
            &UpdateBookingStatusRequest {
                status: "Completed".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_booking_unknown_guide() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;

    let request = CreateBookingRequest::tomorrow_for("LIC-DOES-NOT-EXIST");
    let response = server
        .post_auth("/api/v1/admin/bookings", &admin, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_routes_reject_plain_guides() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = approved_guide(&server).await;

    let response = server.get_auth("/api/v1/admin/guides", &token).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "ADMIN_REQUIRED");
}

#[tokio::test]
async fn test_admin_lists_guides() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let (register_req, _) = approved_guide(&server).await;

    let response = server.get_auth("/api/v1/admin/guides", &admin).await.unwrap();
    let guides: Vec<GuideResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(guides.iter().any(|g| g.license_no == register_req.license_no));
}

#[tokio::test]
async fn test_promote_guide_to_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let (register_req, _) = approved_guide(&server).await;

    let response = server
        .put_auth(
            &format!("/api/v1/admin/guides/{}/role", register_req.license_no),
            &admin,
            &SetRoleRequest {
                role: "admin".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Role changes take effect on the next login
    let response = server
        .post(
            "/api/v1/auth/login",
            &LoginRequest::from_register(&register_req),
        )
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.guide.role, "admin");

    let response = server
        .get_auth("/api/v1/admin/guides", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_primary_admin_cannot_be_demoted() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let admin_license = std::env::var("ADMIN_LICENSE").unwrap();

    let response = server
        .put_auth(
            &format!("/api/v1/admin/guides/{admin_license}/role"),
            &admin,
            &SetRoleRequest {
                role: "guide".to_string(),
            },
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "PRIMARY_ADMIN_IMMUTABLE");
}

#[tokio::test]
async fn test_primary_admin_cannot_be_deleted() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let admin_license = std::env::var("ADMIN_LICENSE").unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/admin/guides/{admin_license}"), &admin)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "PRIMARY_ADMIN_IMMUTABLE");
}

#[tokio::test]
async fn test_delete_guide_account_cascades() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = admin_token(&server).await;
    let (register_req, token) = approved_guide(&server).await;

    // Give the account dependent rows: a published slot and a complaint
    let slot = CreateSlotRequest::tomorrow_morning();
    server
        .post_auth("/api/v1/guides/@me/availability", &token, &slot)
        .await
        .unwrap();
    server
        .post(
            "/api/v1/complaints",
            &CreateComplaintRequest::against(&register_req.license_no),
        )
        .await
        .unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/admin/guides/{}", register_req.license_no),
            &admin,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The account is gone
    let response = server
        .post(
            "/api/v1/auth/login",
            &LoginRequest::from_register(&register_req),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // The published slot went with it
    let response = server
        .get(&format!("/api/v1/search?day={}", slot.day))
        .await
        .unwrap();
    let results: Vec<SearchResult> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(results.iter().all(|r| r.license_no != register_req.license_no));

    // So did the complaint ticket
    let response = server
        .get_auth("/api/v1/admin/complaints", &admin)
        .await
        .unwrap();
    let complaints: Vec<ComplaintResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(complaints
        .iter()
        .all(|c| c.license_no != register_req.license_no));
}
