//! End-to-end HTTP scenarios against the in-memory repository.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use backend::Trace;
use backend::domain::UserService;
use backend::inbound::http::json_config;
use backend::inbound::http::state::HttpState;
use backend::inbound::http::users::{
    UserResponse, create_user, delete_user, get_user, list_users, update_user,
};
use backend::outbound::memory::InMemoryUserRepository;
use rstest::rstest;
use serde_json::{Value, json};

macro_rules! users_app {
    () => {{
        let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
        test::init_service(
            App::new()
                .app_data(web::Data::new(HttpState::new(Arc::new(service))))
                .app_data(json_config())
                .wrap(Trace)
                .service(create_user)
                .service(list_users)
                .service(get_user)
                .service(update_user)
                .service(delete_user),
        )
        .await
    }};
}

#[rstest]
#[actix_web::test]
async fn user_lifecycle() {
    let app = users_app!();

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Ada", "email": "ada@example.com", "age": 30 }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: UserResponse = test::read_body_json(res).await;
    assert!(created.id > 0);
    let uri = format!("/users/{}", created.id);

    let res = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let fetched: UserResponse = test::read_body_json(res).await;
    assert_eq!(fetched, created);

    let res = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({ "name": "Ada L.", "email": "ada@example.com", "age": 31 }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: UserResponse = test::read_body_json(res).await;
    assert_eq!(
        updated,
        UserResponse {
            id: created.id,
            name: "Ada L.".into(),
            email: "ada@example.com".into(),
            age: 31,
        }
    );

    let res = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(test::read_body(res).await.is_empty());

    let res = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn listing_reflects_creates() {
    let app = users_app!();

    let res = test::call_service(&app, test::TestRequest::get().uri("/users").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let empty: Value = test::read_body_json(res).await;
    assert_eq!(empty, json!([]));

    for (name, age) in [("Ada", 36), ("Alan", 41)] {
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/users")
                .set_json(json!({
                    "name": name,
                    "email": format!("{}@example.com", name.to_lowercase()),
                    "age": age,
                }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = test::call_service(&app, test::TestRequest::get().uri("/users").to_request()).await;
    let users: Vec<UserResponse> = test::read_body_json(res).await;
    let names: Vec<&str> = users.iter().map(|user| user.name.as_str()).collect();
    assert_eq!(names, ["Ada", "Alan"]);
}

#[rstest]
#[case("/users/abc")]
#[case("/users/999999")]
#[actix_web::test]
async fn unknown_users_are_not_found(#[case] uri: &str) {
    let app = users_app!();

    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn error_bodies_echo_the_trace_header() {
    let app = users_app!();

    let res = test::call_service(&app, test::TestRequest::get().uri("/users/7").to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let header = res
        .headers()
        .get("trace-id")
        .expect("trace-id header")
        .to_str()
        .expect("ascii header")
        .to_owned();
    let body: Value = test::read_body_json(res).await;

    assert_eq!(body["code"], "not_found");
    assert_eq!(body["traceId"], header.as_str());
}
