//! Integration tests for the user management commands against a mocked API.
//!
//! Each test wires a full `StateCtx` (config, cache, notifications, inputs,
//! computes, commands), dispatches commands the way the UI does, and asserts
//! on the resulting compute states, cache behavior, and request counts.

use insider_business::{
    BusinessConfig, CreateUserCommand, CreateUserCompute, CreateUserInput, CreateUserPayload,
    CreateUserResult, DeleteUserCommand, DeleteUserCompute, DeleteUserInput, DeleteUserResult,
    ListUsersCommand, ListUsersCompute, ListUsersInput, ListUsersResult, Notifications,
    UpdateUserStatusCommand, UpdateUserStatusCompute, UpdateUserStatusInput,
    UpdateUserStatusResult, UserFilters, UserStatus, UsersQueryCache,
};
use insider_states::StateCtx;
use std::time::Duration;
use ustr::Ustr;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn make_ctx(base_url: String) -> StateCtx {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut ctx = StateCtx::new();
    ctx.add_state(BusinessConfig::new(base_url));
    ctx.add_state(UsersQueryCache::default());
    ctx.add_state(Notifications::default());
    ctx.add_state(ListUsersInput::default());
    ctx.add_state(CreateUserInput::default());
    ctx.add_state(UpdateUserStatusInput::default());
    ctx.add_state(DeleteUserInput::default());
    ctx.record_compute(ListUsersCompute::default());
    ctx.record_compute(CreateUserCompute::default());
    ctx.record_compute(UpdateUserStatusCompute::default());
    ctx.record_compute(DeleteUserCompute::default());
    ctx.record_command(ListUsersCommand);
    ctx.record_command(CreateUserCommand);
    ctx.record_command(UpdateUserStatusCommand);
    ctx.record_command(DeleteUserCommand);
    ctx
}

/// Pumps `sync_computes` until `done` holds or a timeout elapses.
async fn wait_until(ctx: &mut StateCtx, what: &str, mut done: impl FnMut(&StateCtx) -> bool) {
    for _ in 0..200 {
        ctx.sync_computes();
        if done(ctx) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("timed out waiting for {what}");
}

fn user_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "user_id": id,
        "full_name": name,
        "email": format!("{id}@example.com"),
        "role": "agent",
        "status": "active",
        "created_at": "2026-08-01T10:00:00Z",
    })
}

fn page_json(users: &[serde_json::Value], page: u32) -> serde_json::Value {
    serde_json::json!({
        "data": users,
        "page": page,
        "per_page": 10,
        "total": users.len(),
        "total_pages": 1,
    })
}

#[tokio::test]
async fn list_fetches_then_serves_repeat_query_from_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_json(&[user_json("u-1", "Alice")], 1)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut ctx = make_ctx(server.uri());

    ctx.dispatch::<ListUsersCommand>();
    wait_until(&mut ctx, "first list fetch", |ctx| {
        ctx.cached::<ListUsersCompute>()
            .is_some_and(|c| c.users().is_some())
    })
    .await;

    let compute = ctx.cached::<ListUsersCompute>().unwrap();
    match &compute.result {
        ListUsersResult::Success {
            response,
            from_cache,
        } => {
            assert!(!from_cache, "first load must come from the network");
            assert_eq!(response.data.len(), 1);
            assert_eq!(response.data[0].full_name, "Alice");
        }
        other => panic!("expected success, got {other:?}"),
    }

    // Same (page, filters) again: resolved from the cache, and the mock's
    // expect(1) verifies no second request went out.
    ctx.update_cached::<ListUsersCompute>(ListUsersCompute::reset);
    ctx.dispatch::<ListUsersCommand>();
    wait_until(&mut ctx, "cached list result", |ctx| {
        ctx.cached::<ListUsersCompute>()
            .is_some_and(|c| c.users().is_some())
    })
    .await;

    let compute = ctx.cached::<ListUsersCompute>().unwrap();
    assert!(matches!(
        compute.result,
        ListUsersResult::Success {
            from_cache: true,
            ..
        }
    ));
}

#[tokio::test]
async fn distinct_pages_and_filters_are_cached_separately() {
    let server = MockServer::start().await;
    // Without this the unfiltered mock would also match the role-filtered
    // request, since mocks are tried in mount order.
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("page", "1"))
        .and(query_param_is_missing("role"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_json(&[user_json("u-1", "Alice")], 1)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("page", "1"))
        .and(query_param("role", "counselor"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_json(&[user_json("u-2", "Sam")], 1)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut ctx = make_ctx(server.uri());

    ctx.dispatch::<ListUsersCommand>();
    wait_until(&mut ctx, "unfiltered page", |ctx| {
        ctx.cached::<ListUsersCompute>()
            .is_some_and(|c| c.users().is_some())
    })
    .await;

    // A different filter set is a different cache key, so this fetches.
    ctx.update::<ListUsersInput>(|input| {
        input.filters = UserFilters {
            role: Some("counselor".to_owned()),
            status: None,
            search: None,
        };
    });
    ctx.update_cached::<ListUsersCompute>(ListUsersCompute::reset);
    ctx.dispatch::<ListUsersCommand>();
    wait_until(&mut ctx, "filtered page", |ctx| {
        ctx.cached::<ListUsersCompute>()
            .is_some_and(|c| c.users().is_some_and(|users| users[0].full_name == "Sam"))
    })
    .await;

    assert_eq!(ctx.state::<UsersQueryCache>().len(), 2);
}

#[tokio::test]
async fn delete_invalidates_cache_so_next_list_refetches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_json(&[user_json("u-1", "Alice")], 1)),
        )
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/u-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut ctx = make_ctx(server.uri());

    ctx.dispatch::<ListUsersCommand>();
    wait_until(&mut ctx, "initial list", |ctx| {
        ctx.cached::<ListUsersCompute>()
            .is_some_and(|c| c.users().is_some())
    })
    .await;

    ctx.update::<DeleteUserInput>(|input| {
        input.user_id = Some(Ustr::from("u-1"));
    });
    ctx.dispatch::<DeleteUserCommand>();
    wait_until(&mut ctx, "delete", |ctx| {
        ctx.cached::<DeleteUserCompute>()
            .is_some_and(DeleteUserCompute::is_success)
    })
    .await;

    let compute = ctx.cached::<DeleteUserCompute>().unwrap();
    assert!(matches!(
        compute.result,
        DeleteUserResult::Success(id) if id.as_str() == "u-1"
    ));
    assert!(
        ctx.state::<Notifications>()
            .iter()
            .any(|n| n == "User deleted successfully")
    );

    // The cached page went stale, so the same query hits the network again;
    // the mock's expect(2) verifies the refetch happened.
    ctx.update_cached::<ListUsersCompute>(ListUsersCompute::reset);
    ctx.dispatch::<ListUsersCommand>();
    wait_until(&mut ctx, "refetch after delete", |ctx| {
        ctx.cached::<ListUsersCompute>().is_some_and(|c| {
            matches!(
                c.result,
                ListUsersResult::Success {
                    from_cache: false,
                    ..
                }
            )
        })
    })
    .await;
}

#[tokio::test]
async fn create_success_notifies_and_invalidates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .and(body_json(serde_json::json!({
            "full_name": "Bea Ortiz",
            "email": "bea@example.com",
            "role": "counselor",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(user_json("u-9", "Bea Ortiz")))
        .expect(1)
        .mount(&server)
        .await;

    let mut ctx = make_ctx(server.uri());
    // Seed a cached page so invalidation is observable.
    ctx.update::<UsersQueryCache>(|cache| {
        cache.insert(
            insider_business::UsersQueryKey {
                page: 1,
                filters: UserFilters::default(),
            },
            insider_business::PaginatedResponse {
                data: vec![],
                page: 1,
                per_page: 10,
                total: 0,
                total_pages: 1,
            },
        );
    });
    ctx.sync_computes();

    ctx.update::<CreateUserInput>(|input| {
        input.payload = Some(CreateUserPayload {
            full_name: "Bea Ortiz".to_owned(),
            email: "bea@example.com".to_owned(),
            role: "counselor".to_owned(),
        });
    });
    ctx.dispatch::<CreateUserCommand>();
    wait_until(&mut ctx, "create", |ctx| {
        ctx.cached::<CreateUserCompute>()
            .is_some_and(CreateUserCompute::is_success)
    })
    .await;

    let compute = ctx.cached::<CreateUserCompute>().unwrap();
    match &compute.result {
        CreateUserResult::Success(user) => assert_eq!(user.user_id, "u-9"),
        other => panic!("expected success, got {other:?}"),
    }
    assert!(
        ctx.state::<Notifications>()
            .iter()
            .any(|n| n == "User added successfully")
    );
    let cache = ctx.state::<UsersQueryCache>();
    assert!(cache.is_stale(&insider_business::UsersQueryKey {
        page: 1,
        filters: UserFilters::default(),
    }));
}

#[tokio::test]
async fn create_failure_reports_error_without_notifying() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "error": "duplicate_email",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut ctx = make_ctx(server.uri());
    ctx.update::<CreateUserInput>(|input| {
        input.payload = Some(CreateUserPayload {
            full_name: "Dup User".to_owned(),
            email: "dup@example.com".to_owned(),
            role: "agent".to_owned(),
        });
    });
    ctx.dispatch::<CreateUserCommand>();
    wait_until(&mut ctx, "create failure", |ctx| {
        ctx.cached::<CreateUserCompute>()
            .is_some_and(|c| c.error_message().is_some())
    })
    .await;

    let compute = ctx.cached::<CreateUserCompute>().unwrap();
    assert!(
        compute.error_message().is_some_and(|e| e.contains("409")),
        "error should carry the status code"
    );
    assert!(ctx.state::<Notifications>().is_empty());
}

#[tokio::test]
async fn create_forwards_payload_to_server_without_local_validation() {
    // The payload is opaque to the command; even empty fields must go out
    // and let the server decide. The expect(1) fails if no request is sent.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .and(body_json(serde_json::json!({
            "full_name": "",
            "email": "",
            "role": "agent",
        })))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "error": "full_name is required",
            })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut ctx = make_ctx(server.uri());
    ctx.update::<CreateUserInput>(|input| {
        input.payload = Some(CreateUserPayload {
            full_name: String::new(),
            email: String::new(),
            role: "agent".to_owned(),
        });
    });
    ctx.dispatch::<CreateUserCommand>();
    wait_until(&mut ctx, "server-side rejection", |ctx| {
        ctx.cached::<CreateUserCompute>()
            .is_some_and(|c| c.error_message().is_some())
    })
    .await;

    let compute = ctx.cached::<CreateUserCompute>().unwrap();
    assert!(
        compute.error_message().is_some_and(|e| e.contains("422")),
        "the error must come from the server, not a local check"
    );
}

#[tokio::test]
async fn update_status_success_flow() {
    let server = MockServer::start().await;
    let mut updated = user_json("u-1", "Alice");
    updated["status"] = serde_json::json!("suspended");
    Mock::given(method("PATCH"))
        .and(path("/api/users/u-1/status"))
        .and(body_json(serde_json::json!({ "status": "suspended" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .expect(1)
        .mount(&server)
        .await;

    let mut ctx = make_ctx(server.uri());
    ctx.update::<UpdateUserStatusInput>(|input| {
        input.user_id = Some(Ustr::from("u-1"));
        input.status = UserStatus::Suspended;
    });
    ctx.dispatch::<UpdateUserStatusCommand>();
    wait_until(&mut ctx, "status update", |ctx| {
        ctx.cached::<UpdateUserStatusCompute>()
            .is_some_and(UpdateUserStatusCompute::is_success)
    })
    .await;

    let compute = ctx.cached::<UpdateUserStatusCompute>().unwrap();
    match &compute.result {
        UpdateUserStatusResult::Success(user) => {
            assert_eq!(user.status, UserStatus::Suspended);
        }
        other => panic!("expected success, got {other:?}"),
    }
    assert!(
        ctx.state::<Notifications>()
            .iter()
            .any(|n| n == "User status updated successfully")
    );
}

#[tokio::test]
async fn mutation_commands_skip_when_no_target_is_set() {
    // No mocks mounted: any request would fail the test through an error
    // result, and the computes must stay Idle.
    let server = MockServer::start().await;
    let mut ctx = make_ctx(server.uri());

    ctx.dispatch::<CreateUserCommand>();
    ctx.dispatch::<DeleteUserCommand>();
    ctx.dispatch::<UpdateUserStatusCommand>();
    tokio::time::sleep(Duration::from_millis(100)).await;
    ctx.sync_computes();

    assert!(matches!(
        ctx.cached::<CreateUserCompute>().unwrap().result,
        CreateUserResult::Idle
    ));
    assert!(matches!(
        ctx.cached::<DeleteUserCompute>().unwrap().result,
        DeleteUserResult::Idle
    ));
    assert!(matches!(
        ctx.cached::<UpdateUserStatusCompute>().unwrap().result,
        UpdateUserStatusResult::Idle
    ));
}
