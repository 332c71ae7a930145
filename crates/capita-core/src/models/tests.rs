use super::*;
use crate::api::{CustomHttpResponse, Profile, User, UserProfile};

#[test]
fn login_state_constructors() {
    let loading = LoginState::loading();
    assert_eq!(loading.data_state, DataState::Loading);
    assert!(!loading.is_terminal());
    assert!(loading.error.is_none());

    let error = LoginState::error("Bad credentials");
    assert_eq!(error.data_state, DataState::Error);
    assert_eq!(error.login_success, Some(false));
    assert_eq!(error.error.as_deref(), Some("Bad credentials"));
    assert!(error.is_terminal());

    assert_eq!(LoginState::default(), LoginState::loaded());
}

#[test]
fn login_state_serializes_sparse_camel_case() {
    let value = serde_json::to_value(LoginState::error("nope")).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({
            "dataState": "ERROR_STATE",
            "loginSuccess": false,
            "error": "nope"
        })
    );
}

#[test]
fn user_accepts_backend_flag_names() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 7,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "enabled": true,
        "notLocked": true,
        "createdAt": "2024-02-03T04:05:06",
        "roleName": "ROLE_USER",
        "permissions": "READ:USER, READ:CUSTOMER"
    }))
    .expect("user");
    assert!(user.enabled);
    assert!(user.not_locked);
    assert!(!user.using_mfa);
    assert_eq!(user.display_name(), "Ada Lovelace");
    assert_eq!(user.permission_list(), vec!["READ:USER", "READ:CUSTOMER"]);
}

#[test]
fn user_defaults_omitted_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 1,
        "firstName": "Bo",
        "lastName": "",
        "email": "bo@example.com"
    }))
    .expect("user");
    assert!(!user.enabled);
    assert!(!user.not_locked);
    assert!(user.role_name.is_empty());
    assert!(user.permission_list().is_empty());
    assert_eq!(user.display_name(), "Bo");
}

#[test]
fn login_envelope_with_profile() {
    let body = serde_json::json!({
        "timeStamp": "2024-05-01T10:00:00.123456789",
        "statusCode": 200,
        "status": "OK",
        "message": "Login success",
        "data": {
            "user": {
                "id": 1,
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "isNotLocked": true
            },
            "access_token": "access-1",
            "refresh_token": "refresh-1"
        }
    });
    let response: CustomHttpResponse<Profile> = serde_json::from_value(body).expect("envelope");
    assert_eq!(response.status_code, 200);
    assert!(response.reason.is_none());
    let profile = response.into_data().expect("data");
    assert_eq!(profile.access_token, "access-1");
    assert_eq!(profile.refresh_token, "refresh-1");
    assert!(profile.events.is_empty());
    assert!(profile.roles.is_empty());
    assert!(profile.user.not_locked);
}

#[test]
fn envelope_without_data_or_message() {
    let body = serde_json::json!({
        "timeStamp": "2024-05-01T10:00:00",
        "statusCode": 401,
        "status": "BAD_REQUEST",
        "reason": "Bad credentials"
    });
    let response: CustomHttpResponse<UserProfile> =
        serde_json::from_value(body).expect("envelope");
    assert!(response.data.is_none());
    assert!(response.message.is_empty());
    assert_eq!(response.reason.as_deref(), Some("Bad credentials"));
}

#[test]
fn profile_reads_roles_and_events() {
    let body = serde_json::json!({
        "user": {"id": 2, "firstName": "Grace", "lastName": "Hopper", "email": "g@example.com"},
        "events": [{"id": 11, "type": "LOGIN_ATTEMPT_SUCCESS", "device": "Firefox", "ipAddress": "10.0.0.1"}],
        "role": [{"id": 1, "name": "ROLE_ADMIN", "permission": "READ:USER"}]
    });
    let profile: UserProfile = serde_json::from_value(body).expect("profile");
    assert_eq!(profile.events.len(), 1);
    assert_eq!(profile.events[0].kind, "LOGIN_ATTEMPT_SUCCESS");
    assert_eq!(profile.events[0].ip_address.as_deref(), Some("10.0.0.1"));
    assert_eq!(profile.roles[0].name, "ROLE_ADMIN");
}

#[test]
fn envelope_accepts_timestamp_without_seconds() {
    let body = serde_json::json!({
        "timeStamp": "2024-05-01T10:00",
        "statusCode": 200,
        "status": "OK",
        "message": "Login success"
    });
    let response: CustomHttpResponse<Profile> = serde_json::from_value(body).expect("envelope");
    assert_eq!(
        response.time_stamp,
        chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|date| date.and_hms_opt(10, 0, 0))
            .expect("date")
    );
    assert!(response.data.is_none());
}

#[test]
fn user_created_at_without_seconds() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 4,
        "firstName": "Edsger",
        "lastName": "Dijkstra",
        "email": "ewd@example.com",
        "createdAt": "2023-11-30T08:15"
    }))
    .expect("user");
    assert_eq!(
        user.created_at.map(|at| at.to_string()).as_deref(),
        Some("2023-11-30 08:15:00")
    );
}

#[test]
fn timestamp_parse_rejects_garbage() {
    assert!(crate::api::timestamp::parse("yesterday").is_none());
    assert!(crate::api::timestamp::parse("2024-05-01T10:00:00.123").is_some());
    assert!(crate::api::timestamp::parse("2024-05-01T10:00:00Z").is_some());
    let err = serde_json::from_value::<CustomHttpResponse<Profile>>(serde_json::json!({
        "timeStamp": "not a date",
        "statusCode": 200,
        "status": "OK"
    }));
    assert!(err.is_err());
}
