//! Tests for the MCP surface: tool discovery, dispatch, parameter
//! validation, remote error mapping and the locally computed job views.
//!
//! Remote behavior is simulated with wiremock; no test talks to a live
//! JPI account.

use serde_json::{Value, json};
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::core::{JpiMcpServer, McpServerInfo};
use crate::client::JpiClient;
use crate::config::JpiClientConfig;

const TEST_TOKEN: &str = "test-token";

/// Test helper: an MCP server pointed at a fresh mock endpoint.
async fn test_server() -> (JpiMcpServer, MockServer) {
    let remote = MockServer::start().await;
    let config = JpiClientConfig::new(remote.uri(), TEST_TOKEN);
    (JpiMcpServer::new(JpiClient::new(config)), remote)
}

#[tokio::test]
async fn test_tool_discovery() {
    let (server, _remote) = test_server().await;
    let tools = server.get_tools();

    assert_eq!(tools.len(), 69, "Should expose 69 tools");

    let tool_names: Vec<&str> = tools
        .iter()
        .filter_map(|t| t.get("name").and_then(Value::as_str))
        .collect();

    let expected_tools = [
        "jpi_api_info",
        "jpi_list_components",
        "jpi_create_job",
        "jpi_list_jobs_summary",
        "jpi_list_jobs_at_risk",
        "jpi_add_tasks_batch",
        "jpi_create_tasks_cross_jobs",
        "jpi_add_tcr",
        "jpi_get_events_filtered",
        "jpi_update_settings",
    ];
    for expected in expected_tools {
        assert!(
            tool_names.contains(&expected),
            "Should contain tool: {}",
            expected
        );
    }

    // Every tool carries the full discovery shape.
    for tool in &tools {
        let name = tool.get("name").and_then(Value::as_str).unwrap_or("?");
        assert!(
            tool.get("description").and_then(Value::as_str).is_some(),
            "Tool {} should have a description",
            name
        );
        assert_eq!(
            tool.pointer("/inputSchema/type").and_then(Value::as_str),
            Some("object"),
            "Tool {} should have an object input schema",
            name
        );
    }

    let mut deduped = tool_names.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), tool_names.len(), "Tool names must be unique");
}

#[tokio::test]
async fn test_api_info_is_answered_locally() {
    let (server, remote) = test_server().await;

    // No mock registered: any request to the remote would 404 the test.
    let result = server.execute_tool("jpi_api_info", json!({})).await;

    assert!(result.success);
    assert_eq!(result.content["totalEndpoints"], json!(69));
    assert_eq!(result.content["baseUrl"], json!(remote.uri()));
    assert_eq!(result.metadata, Some(json!({"operation": "api_info"})));
}

#[tokio::test]
async fn test_unknown_tool() {
    let (server, _remote) = test_server().await;

    let result = server.execute_tool("jpi_launch_rockets", json!({})).await;

    assert!(!result.success);
    assert_eq!(result.content["error"], json!("Unknown tool"));
    assert_eq!(result.content["tool_name"], json!("jpi_launch_rockets"));
    assert!(result.metadata.is_none());
}

#[tokio::test]
async fn test_get_job_success() {
    let (server, remote) = test_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/jobs/1f0c"))
        .and(header("X-Api-Key", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Guid": "1f0c",
            "Name": "Gear housing",
            "JobNo": "J-100",
            "BufferLevel": 1.8
        })))
        .expect(1)
        .mount(&remote)
        .await;

    let result = server.execute_tool("jpi_get_job", json!({"guid": "1f0c"})).await;

    assert!(result.success, "unexpected failure: {}", result.content);
    assert_eq!(result.content["Name"], json!("Gear housing"));
    assert_eq!(result.content["BufferLevel"], json!(1.8));
    assert_eq!(result.metadata, Some(json!({"operation": "get_job"})));
}

#[tokio::test]
async fn test_create_job_sends_typed_body() {
    let (server, remote) = test_server().await;

    // Routing-free create: the payload bag goes to the wire in PascalCase,
    // unknown fields dropped by the typed shape.
    Mock::given(method("POST"))
        .and(path("/v1/jobs"))
        .and(body_json(json!({
            "Name": "Gear housing",
            "Tasks": [{
                "TaskNo": "10",
                "Name": "Milling",
                "ResourceGroupConstraints": [
                    {"ResourceGroup": "CNC", "ResourceUsage": 1.0}
                ]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Guid": "new-guid",
            "Name": "Gear housing"
        })))
        .expect(1)
        .mount(&remote)
        .await;

    let result = server
        .execute_tool(
            "jpi_create_job",
            json!({
                "Name": "Gear housing",
                "Tasks": [{
                    "TaskNo": "10",
                    "Name": "Milling",
                    "ResourceGroupConstraints": [
                        {"ResourceGroup": "CNC", "ResourceUsage": 1.0}
                    ]
                }]
            }),
        )
        .await;

    assert!(result.success, "unexpected failure: {}", result.content);
    assert_eq!(result.content["Guid"], json!("new-guid"));
}

#[tokio::test]
async fn test_update_job_ignores_routing_param_in_body() {
    let (server, remote) = test_server().await;

    // `guid` routes the request; it must not leak into the PATCH body.
    Mock::given(method("PATCH"))
        .and(path("/v1/jobs/1f0c"))
        .and(body_json(json!({"Name": "Renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Guid": "1f0c",
            "Name": "Renamed"
        })))
        .expect(1)
        .mount(&remote)
        .await;

    let result = server
        .execute_tool("jpi_update_job", json!({"guid": "1f0c", "Name": "Renamed"}))
        .await;

    assert!(result.success, "unexpected failure: {}", result.content);
    assert_eq!(result.content["Name"], json!("Renamed"));
}

#[tokio::test]
async fn test_missing_routing_parameter_short_circuits() {
    let (server, _remote) = test_server().await;

    // No mock mounted: an early return means no request is attempted.
    let result = server.execute_tool("jpi_get_job", json!({})).await;

    assert!(!result.success);
    assert_eq!(result.content["error"], json!("Missing guid parameter"));

    let result = server
        .execute_tool("jpi_get_task", json!({"jobGuid": "1f0c"}))
        .await;
    assert!(!result.success);
    assert_eq!(result.content["error"], json!("Missing taskGuid parameter"));
}

#[tokio::test]
async fn test_invalid_payload_short_circuits() {
    let (server, _remote) = test_server().await;

    // Name is required on job creation; serde rejects the bag locally.
    let result = server
        .execute_tool("jpi_create_job", json!({"JobNo": "J-7"}))
        .await;

    assert!(!result.success);
    let message = result.content["error"].as_str().unwrap_or_default();
    assert!(
        message.starts_with("Invalid payload:"),
        "unexpected error: {}",
        message
    );
}

#[tokio::test]
async fn test_batch_requires_collection_parameter() {
    let (server, _remote) = test_server().await;

    let result = server.execute_tool("jpi_create_jobs_batch", json!({})).await;

    assert!(!result.success);
    assert_eq!(result.content["error"], json!("Missing jobs parameter"));
}

#[tokio::test]
async fn test_delete_jobs_batch_posts_guid_array() {
    let (server, remote) = test_server().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/jobs/batch"))
        .and(body_json(json!(["a", "b"])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"Guid": "c", "Name": "Survivor"}
        ])))
        .expect(1)
        .mount(&remote)
        .await;

    let result = server
        .execute_tool("jpi_delete_jobs_batch", json!({"guids": ["a", "b"]}))
        .await;

    assert!(result.success, "unexpected failure: {}", result.content);
    assert_eq!(result.content[0]["Guid"], json!("c"));
}

#[tokio::test]
async fn test_empty_delete_body_reads_as_empty_list() {
    let (server, remote) = test_server().await;

    // Deleting the last job yields a 200 with no body at all.
    Mock::given(method("DELETE"))
        .and(path("/v1/jobs/1f0c"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&remote)
        .await;

    let result = server.execute_tool("jpi_delete_job", json!({"guid": "1f0c"})).await;

    assert!(result.success, "unexpected failure: {}", result.content);
    assert_eq!(result.content, json!([]));
}

#[tokio::test]
async fn test_remote_error_keeps_status_and_json_body() {
    let (server, remote) = test_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/jobs/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "Message": "Job not found"
        })))
        .mount(&remote)
        .await;

    let result = server.execute_tool("jpi_get_job", json!({"guid": "nope"})).await;

    assert!(!result.success);
    assert_eq!(result.content["error"], json!(true));
    assert_eq!(result.content["status"], json!(404));
    assert_eq!(result.content["statusText"], json!("Not Found"));
    assert_eq!(
        result.content["message"],
        json!("JPI API error: 404 Not Found")
    );
    assert_eq!(result.content["body"]["Message"], json!("Job not found"));
    assert_eq!(result.metadata, Some(json!({"operation": "get_job"})));
}

#[tokio::test]
async fn test_remote_error_with_non_json_body() {
    let (server, remote) = test_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/settings"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&remote)
        .await;

    let result = server.execute_tool("jpi_get_settings", json!({})).await;

    assert!(!result.success);
    assert_eq!(result.content["status"], json!(502));
    assert_eq!(result.content["body"], json!("bad gateway"));
}

#[tokio::test]
async fn test_add_tasks_batch_hits_job_scoped_path() {
    let (server, remote) = test_server().await;

    Mock::given(method("POST"))
        .and(path("/v1/jobs/1f0c/task/batch"))
        .and(body_partial_json(json!([{"TaskNo": "20"}])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"Guid": "t-20", "TaskNo": "20", "Name": "Deburring"}
        ])))
        .expect(1)
        .mount(&remote)
        .await;

    let result = server
        .execute_tool(
            "jpi_add_tasks_batch",
            json!({
                "jobGuid": "1f0c",
                "tasks": [{
                    "TaskNo": "20",
                    "ResourceGroupConstraints": [
                        {"ResourceGroup": "Assembly", "ResourceUsage": 2.0}
                    ]
                }]
            }),
        )
        .await;

    assert!(result.success, "unexpected failure: {}", result.content);
    assert_eq!(result.content[0]["Guid"], json!("t-20"));
}

#[tokio::test]
async fn test_add_tcr_accepts_component_guid_alias() {
    let (server, remote) = test_server().await;

    // The wire shape names the field Component; the tool takes ComponentGuid.
    Mock::given(method("POST"))
        .and(path("/v1/jobtemplates/tmpl-1/tcr"))
        .and(body_json(json!({"Component": "comp-9", "TaskNo": "30"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Guid": "tcr-1",
            "TaskNo": "30",
            "Component": {"Guid": "comp-9", "Name": "Bearing set"}
        })))
        .expect(1)
        .mount(&remote)
        .await;

    let result = server
        .execute_tool(
            "jpi_add_tcr",
            json!({
                "templateGuid": "tmpl-1",
                "ComponentGuid": "comp-9",
                "TaskNo": "30"
            }),
        )
        .await;

    assert!(result.success, "unexpected failure: {}", result.content);
    assert_eq!(result.content["Guid"], json!("tcr-1"));
}

#[tokio::test]
async fn test_event_timestamp_is_percent_encoded() {
    let (server, remote) = test_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/jpievents/2024-01-01T00%3A00%3A00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"JpiEvent": "ev-1", "EventType": "Created", "ObjectType": "Job"}
        ])))
        .expect(1)
        .mount(&remote)
        .await;

    let result = server
        .execute_tool(
            "jpi_get_events",
            json!({"createdAfter": "2024-01-01T00:00:00Z"}),
        )
        .await;

    assert!(result.success, "unexpected failure: {}", result.content);
    assert_eq!(result.content[0]["EventType"], json!("Created"));
}

#[tokio::test]
async fn test_filtered_events_append_type_after_comma() {
    let (server, remote) = test_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/jpievents/2024-01-01T00%3A00%3A00Z,JobDeleted"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&remote)
        .await;

    let result = server
        .execute_tool(
            "jpi_get_events_filtered",
            json!({
                "createdAfter": "2024-01-01T00:00:00Z",
                "eventType": "JobDeleted"
            }),
        )
        .await;

    assert!(result.success, "unexpected failure: {}", result.content);
    assert_eq!(result.content, json!([]));
}

fn jobs_fixture() -> Value {
    json!([
        {
            "Guid": "late",
            "Name": "Late order",
            "IsDueDateExceeded": true,
            "BufferLevel": 3.0,
            "Tasks": [
                {"Guid": "t1", "TaskStatus": "Finished"},
                {"Guid": "t2", "TaskStatus": "Planned"},
                {"Guid": "t3", "TaskStatus": "Planned"}
            ]
        },
        {
            "Guid": "thin",
            "Name": "Thin buffer",
            "IsDueDateExceeded": false,
            "BufferLevel": 0.4,
            "Tasks": []
        },
        {
            "Guid": "healthy",
            "Name": "Healthy order",
            "IsDueDateExceeded": false,
            "BufferLevel": 2.5,
            "Tasks": [{"Guid": "t4", "TaskStatus": "Planned"}]
        }
    ])
}

#[tokio::test]
async fn test_jobs_at_risk_default_threshold() {
    let (server, remote) = test_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(jobs_fixture()))
        .mount(&remote)
        .await;

    let result = server.execute_tool("jpi_list_jobs_at_risk", json!({})).await;

    assert!(result.success, "unexpected failure: {}", result.content);
    let flagged = result.content.as_array().expect("array result");
    assert_eq!(flagged.len(), 2);
    assert_eq!(flagged[0]["Guid"], json!("late"));
    assert_eq!(flagged[1]["Guid"], json!("thin"));

    // Projection carries task counts computed from the full job.
    assert_eq!(flagged[0]["TaskCount"], json!(3));
    assert_eq!(flagged[0]["FinishedTaskCount"], json!(1));
    assert_eq!(flagged[0]["PlannedTaskCount"], json!(2));
    assert!(flagged[0].get("Tasks").is_none(), "Tasks must be stripped");
}

#[tokio::test]
async fn test_jobs_at_risk_custom_threshold() {
    let (server, remote) = test_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(jobs_fixture()))
        .mount(&remote)
        .await;

    // Threshold below every buffer level: only the exceeded due date flags.
    let result = server
        .execute_tool("jpi_list_jobs_at_risk", json!({"bufferThreshold": 0.2}))
        .await;

    assert!(result.success, "unexpected failure: {}", result.content);
    let flagged = result.content.as_array().expect("array result");
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0]["Guid"], json!("late"));
}

#[tokio::test]
async fn test_jobs_summary_strips_task_payloads() {
    let (server, remote) = test_server().await;

    Mock::given(method("GET"))
        .and(path("/v1/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(jobs_fixture()))
        .mount(&remote)
        .await;

    let result = server.execute_tool("jpi_list_jobs_summary", json!({})).await;

    assert!(result.success, "unexpected failure: {}", result.content);
    let summaries = result.content.as_array().expect("array result");
    assert_eq!(summaries.len(), 3);
    for summary in summaries {
        assert!(summary.get("Tasks").is_none());
        assert!(summary.get("ComponentReferences").is_none());
    }
    assert_eq!(summaries[0]["TaskCount"], json!(3));
    assert_eq!(summaries[1]["TaskCount"], json!(0));
    assert_eq!(summaries[0]["Name"], json!("Late order"));
}

#[tokio::test]
async fn test_update_settings_round_trip() {
    let (server, remote) = test_server().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/settings"))
        .and(body_json(json!({"PlanningHorizon": 60.0})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "PlanningHorizon": 60.0,
            "Locale": "en-US",
            "GlobalApplyCapacityConstraints": true
        })))
        .expect(1)
        .mount(&remote)
        .await;

    let result = server
        .execute_tool("jpi_update_settings", json!({"PlanningHorizon": 60.0}))
        .await;

    assert!(result.success, "unexpected failure: {}", result.content);
    assert_eq!(result.content["PlanningHorizon"], json!(60.0));
    assert_eq!(result.content["Locale"], json!("en-US"));
}

#[tokio::test]
async fn test_server_info_defaults() {
    let info = McpServerInfo::default();
    assert_eq!(info.name, "jpi-mcp");
    assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
}
