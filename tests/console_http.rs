//! End-to-end behaviour of the console against a local HTTP server

use canarytools::{
    ApiResponse, Console, DeviceIpsQuery, DeviceIpsResult, DeviceTextIps, DevicesQuery, Error,
    IncidentsQuery,
};
use mockito::Matcher;
use serde_json::json;

const TOKEN: &str = "0123456789abcdef0123456789abcdef";

fn console(server: &mockito::Server) -> Console {
    Console::builder()
        .api_key(TOKEN)
        .base_url(server.url())
        .build()
        .expect("valid console")
}

fn token_param() -> Matcher {
    Matcher::UrlEncoded("auth_token".into(), TOKEN.into())
}

fn incidents_body() -> String {
    json!({
        "cursor": {"next": null, "next_link": null, "prev": null, "prev_link": null},
        "feed": "Unacknowledged Incidents",
        "incidents": [{
            "description": {
                "acknowledged": "False",
                "created": "1586338742",
                "created_std": "2020-04-08 09:39:02 UTC+0000",
                "description": "HTTP Login Attempt",
                "dst_host": "10.0.0.5",
                "dst_port": "80",
                "events": [{"timestamp": 1586338741, "timestamp_std": "2020-04-08 09:39:01 UTC+0000"}],
                "events_count": "1",
                "events_list": "1586338741",
                "flock_id": "flock:default",
                "flock_name": "Default Flock",
                "ip_address": "",
                "ippers": "",
                "local_time": "2020-04-08 09:39:01",
                "logtype": "3001",
                "mac_address": "",
                "matched_annotations": {},
                "name": "ExampleBird",
                "node_id": "00034f1ec1a2b3c4",
                "notified": "False",
                "src_host": "10.0.0.9",
                "src_host_reverse": "",
                "src_port": "60961"
            },
            "hash_id": "b6c1e2f0",
            "id": "incident:httplogin:1586338742",
            "summary": "HTTP Login Attempt",
            "updated": "Wed, 08 Apr 2020 10:55:09 GMT",
            "updated_id": 142,
            "updated_std": "2020-04-08 10:55:09 UTC+0000",
            "updated_time": "1586343309"
        }]
    })
    .to_string()
}

#[test]
fn settings_fetch_returns_embedded_token() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/v1/settings")
        .match_query(token_param())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "auth_token": TOKEN,
                "auth_token_enabled": true,
                "canarytokens_user_domains_enable": false,
                "canarytokens_webroot_enable": true,
                "console_domain": "1234abcd.canary.tools",
                "console_settings_change_enable": true,
                "device_settings_change_enable": true,
                "email_notification_enable": false,
                "generic_incident_webhooks": ["https://hooks.example.com/canary"],
                "globally_enforce_2fa": false,
                "hipchat_integration_urls": []
            })
            .to_string(),
        )
        .create();

    let settings = console(&server)
        .settings
        .fetch()
        .unwrap()
        .success()
        .expect("settings");

    mock.assert();
    assert_eq!(settings.auth_token.expose(), TOKEN);
    assert!(settings.auth_token_enabled);
    assert_eq!(settings.generic_incident_webhooks.len(), 1);
}

#[test]
fn not_found_is_a_value_with_the_full_url() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/v1/devices/all")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body("Not Found")
        .create();

    let response = console(&server).devices.all(&DevicesQuery::new()).unwrap();

    match response {
        ApiResponse::Failure(err) => {
            assert_eq!(err.status_code, 404);
            assert_eq!(err.endpoint, format!("{}/api/v1/devices/all", server.url()));
            assert_eq!(err.message, "Not Found");
        }
        ApiResponse::Success(_) => panic!("Expected a failure"),
    }
}

#[test]
fn wrong_api_version_is_a_not_found_failure() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/v0/settings")
        .match_query(Matcher::Any)
        .with_status(404)
        .create();

    let console = Console::builder()
        .api_key(TOKEN)
        .base_url(server.url())
        .api_version("v0")
        .build()
        .unwrap();

    let failure = console.settings.fetch().unwrap().failure().unwrap();
    assert!(failure.is_not_found());
}

#[test]
fn device_ips_download_returns_raw_text() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/v1/device/ips")
        .match_query(Matcher::AllOf(vec![
            token_param(),
            Matcher::UrlEncoded("download".into(), "true".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("1.2.3.4\n5.6.6.7")
        .create();

    let result = console(&server)
        .devices
        .ips(&DeviceIpsQuery::new().download(true))
        .unwrap()
        .success()
        .unwrap();

    assert_eq!(
        result,
        DeviceIpsResult::Text(DeviceTextIps {
            ips: "1.2.3.4\n5.6.6.7".to_string()
        })
    );
}

#[test]
fn unacknowledged_drops_incidents_since_but_acknowledged_keeps_it() {
    let mut server = mockito::Server::new();
    let acknowledged = server
        .mock("GET", "/api/v1/incidents/acknowledged")
        .match_query(Matcher::Exact(format!(
            "auth_token={TOKEN}&event_limit=1&incidents_since=10&limit=5&shrink=true"
        )))
        .with_status(200)
        .with_body(incidents_body())
        .expect(1)
        .create();
    let unacknowledged = server
        .mock("GET", "/api/v1/incidents/unacknowledged")
        .match_query(Matcher::Exact(format!(
            "auth_token={TOKEN}&event_limit=1&limit=5&shrink=true"
        )))
        .with_status(200)
        .with_body(incidents_body())
        .expect(1)
        .create();

    let console = console(&server);
    let query = IncidentsQuery::new().incidents_since(10).limit(5);

    let page = console
        .incidents
        .unacknowledged(&query)
        .unwrap()
        .success()
        .expect("mock matched without incidents_since");
    console
        .incidents
        .acknowledged(&query)
        .unwrap()
        .success()
        .expect("mock matched with incidents_since");

    acknowledged.assert();
    unacknowledged.assert();
    assert_eq!(page.incidents[0].description.name(), "ExampleBird");
    assert!(!page.incidents[0].description.acknowledged());
}

#[test]
fn schema_drift_is_an_error_not_a_failure() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/api/v1/settings/api/enable")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status": "ok"}"#)
        .create();

    let result = console(&server).api.enable();

    match result {
        Err(Error::Schema { endpoint, .. }) => {
            assert_eq!(endpoint, format!("{}/api/v1/settings/api/enable", server.url()))
        }
        other => panic!("Expected schema error, got {other:?}"),
    }
}

#[test]
fn token_is_sent_as_query_parameter_on_every_verb() {
    let mut server = mockito::Server::new();
    let ok = r#"{"result": "success"}"#;
    let post = server
        .mock("POST", "/api/v1/flock/note/add")
        .match_query(Matcher::AllOf(vec![
            token_param(),
            Matcher::UrlEncoded("note".into(), "rack 4".into()),
            Matcher::UrlEncoded("flock_id".into(), "flock:default".into()),
        ]))
        .with_body(ok)
        .create();
    let delete = server
        .mock("DELETE", "/api/v1/flock/note/delete")
        .match_query(token_param())
        .with_body(ok)
        .create();

    let console = console(&server);
    console
        .flocks
        .add_note(&canarytools::FlockNoteQuery::new("rack 4"))
        .unwrap()
        .success()
        .unwrap();
    console
        .flocks
        .delete_note(&canarytools::FlockQuery::default())
        .unwrap()
        .success()
        .unwrap();

    post.assert();
    delete.assert();
}
