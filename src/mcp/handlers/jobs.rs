//! Job tool handlers: CRUD, tasks, component references, batches and the
//! two locally computed listing views.

use serde_json::{Value, json};

use super::{api_result, parse_payload, require_field, require_str};
use crate::mcp::core::{JpiMcpServer, JpiToolResult};
use crate::types::{
    JobAtRisk, JobComponentRefPatch, JobPatch, NewCrossJobTask, NewJob, NewJobComponentRef,
    NewTask, TaskPatch,
};

/// BufferLevel below which a job counts as at risk when the caller does not
/// pass a threshold.
const DEFAULT_BUFFER_THRESHOLD: f64 = 1.0;

pub async fn handle_list_jobs(server: &JpiMcpServer, _arguments: Value) -> JpiToolResult {
    api_result("list_jobs", server.client.list_jobs().await)
}

/// Fetches all jobs and strips the task payloads, leaving job metadata plus
/// a task count. Computed locally; the remote has no summary endpoint.
pub async fn handle_list_jobs_summary(server: &JpiMcpServer, _arguments: Value) -> JpiToolResult {
    let jobs = match server.client.list_jobs().await {
        Ok(jobs) => jobs,
        Err(e) => return api_result::<()>("list_jobs_summary", Err(e)),
    };

    let summaries: Vec<Value> = jobs
        .iter()
        .map(|job| {
            let task_count = job.tasks.as_ref().map_or(0, Vec::len);
            let mut value = serde_json::to_value(job).unwrap_or_else(|_| json!({}));
            if let Some(obj) = value.as_object_mut() {
                obj.remove("Tasks");
                obj.remove("ComponentReferences");
                obj.insert("TaskCount".to_string(), json!(task_count));
            }
            value
        })
        .collect();

    api_result("list_jobs_summary", Ok(summaries))
}

/// Fetches all jobs and keeps only those flagged by the risk predicate,
/// projected down to the scheduling-status fields.
pub async fn handle_list_jobs_at_risk(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let threshold = arguments
        .get("bufferThreshold")
        .and_then(Value::as_f64)
        .unwrap_or(DEFAULT_BUFFER_THRESHOLD);

    let jobs = match server.client.list_jobs().await {
        Ok(jobs) => jobs,
        Err(e) => return api_result::<()>("list_jobs_at_risk", Err(e)),
    };

    let at_risk: Vec<JobAtRisk> = jobs
        .iter()
        .filter(|job| JobAtRisk::is_at_risk(job, threshold))
        .map(JobAtRisk::from_job)
        .collect();

    api_result("list_jobs_at_risk", Ok(at_risk))
}

pub async fn handle_create_job(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let data: NewJob = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result("create_job", server.client.create_job(&data).await)
}

pub async fn handle_get_job(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let guid = match require_str(&arguments, "guid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    api_result("get_job", server.client.get_job(guid).await)
}

pub async fn handle_update_job(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let guid = match require_str(&arguments, "guid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let data: JobPatch = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result("update_job", server.client.update_job(&guid, &data).await)
}

pub async fn handle_delete_job(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let guid = match require_str(&arguments, "guid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    api_result("delete_job", server.client.delete_job(guid).await)
}

// Tasks.

pub async fn handle_get_task(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let job_guid = match require_str(&arguments, "jobGuid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    let task_guid = match require_str(&arguments, "taskGuid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    api_result("get_task", server.client.get_task(job_guid, task_guid).await)
}

pub async fn handle_add_task(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let job_guid = match require_str(&arguments, "jobGuid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let data: NewTask = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result("add_task", server.client.add_task(&job_guid, &data).await)
}

pub async fn handle_update_task(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let job_guid = match require_str(&arguments, "jobGuid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let task_guid = match require_str(&arguments, "taskGuid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let data: TaskPatch = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result(
        "update_task",
        server.client.update_task(&job_guid, &task_guid, &data).await,
    )
}

pub async fn handle_delete_task(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let job_guid = match require_str(&arguments, "jobGuid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    let task_guid = match require_str(&arguments, "taskGuid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    api_result(
        "delete_task",
        server.client.delete_task(job_guid, task_guid).await,
    )
}

// Component references.

pub async fn handle_get_jcr(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let job_guid = match require_str(&arguments, "jobGuid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    let jcr_guid = match require_str(&arguments, "jcrGuid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    api_result("get_jcr", server.client.get_jcr(job_guid, jcr_guid).await)
}

pub async fn handle_add_jcr(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let job_guid = match require_str(&arguments, "jobGuid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let data: NewJobComponentRef = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result("add_jcr", server.client.add_jcr(&job_guid, &data).await)
}

pub async fn handle_update_jcr(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let job_guid = match require_str(&arguments, "jobGuid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let jcr_guid = match require_str(&arguments, "jcrGuid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let data: JobComponentRefPatch = match parse_payload(arguments) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result(
        "update_jcr",
        server.client.update_jcr(&job_guid, &jcr_guid, &data).await,
    )
}

pub async fn handle_delete_jcr(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let job_guid = match require_str(&arguments, "jobGuid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    let jcr_guid = match require_str(&arguments, "jcrGuid") {
        Ok(g) => g,
        Err(e) => return e,
    };
    api_result(
        "delete_jcr",
        server.client.delete_jcr(job_guid, jcr_guid).await,
    )
}

// Batches.

pub async fn handle_create_jobs_batch(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let jobs: Vec<NewJob> = match require_field(&arguments, "jobs").and_then(parse_payload) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result(
        "create_jobs_batch",
        server.client.create_jobs_batch(&jobs).await,
    )
}

pub async fn handle_update_jobs_batch(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let jobs: Vec<JobPatch> = match require_field(&arguments, "jobs").and_then(parse_payload) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result(
        "update_jobs_batch",
        server.client.update_jobs_batch(&jobs).await,
    )
}

pub async fn handle_delete_jobs_batch(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let guids: Vec<String> = match require_field(&arguments, "guids").and_then(parse_payload) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result(
        "delete_jobs_batch",
        server.client.delete_jobs_batch(&guids).await,
    )
}

pub async fn handle_add_tasks_batch(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let job_guid = match require_str(&arguments, "jobGuid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let tasks: Vec<NewTask> = match require_field(&arguments, "tasks").and_then(parse_payload) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result(
        "add_tasks_batch",
        server.client.add_tasks_batch(&job_guid, &tasks).await,
    )
}

pub async fn handle_update_tasks_batch(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let job_guid = match require_str(&arguments, "jobGuid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let tasks: Vec<TaskPatch> = match require_field(&arguments, "tasks").and_then(parse_payload) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result(
        "update_tasks_batch",
        server.client.update_tasks_batch(&job_guid, &tasks).await,
    )
}

pub async fn handle_delete_tasks_batch(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let job_guid = match require_str(&arguments, "jobGuid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let task_guids: Vec<String> =
        match require_field(&arguments, "taskGuids").and_then(parse_payload) {
            Ok(d) => d,
            Err(e) => return e,
        };
    api_result(
        "delete_tasks_batch",
        server.client.delete_tasks_batch(&job_guid, &task_guids).await,
    )
}

pub async fn handle_add_jcrs_batch(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let job_guid = match require_str(&arguments, "jobGuid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let jcrs: Vec<NewJobComponentRef> =
        match require_field(&arguments, "jcrs").and_then(parse_payload) {
            Ok(d) => d,
            Err(e) => return e,
        };
    api_result(
        "add_jcrs_batch",
        server.client.add_jcrs_batch(&job_guid, &jcrs).await,
    )
}

pub async fn handle_update_jcrs_batch(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let job_guid = match require_str(&arguments, "jobGuid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let jcrs: Vec<JobComponentRefPatch> =
        match require_field(&arguments, "jcrs").and_then(parse_payload) {
            Ok(d) => d,
            Err(e) => return e,
        };
    api_result(
        "update_jcrs_batch",
        server.client.update_jcrs_batch(&job_guid, &jcrs).await,
    )
}

pub async fn handle_delete_jcrs_batch(server: &JpiMcpServer, arguments: Value) -> JpiToolResult {
    let job_guid = match require_str(&arguments, "jobGuid") {
        Ok(g) => g.to_string(),
        Err(e) => return e,
    };
    let jcr_guids: Vec<String> =
        match require_field(&arguments, "jcrGuids").and_then(parse_payload) {
            Ok(d) => d,
            Err(e) => return e,
        };
    api_result(
        "delete_jcrs_batch",
        server.client.delete_jcrs_batch(&job_guid, &jcr_guids).await,
    )
}

// Cross-job batches.

pub async fn handle_create_tasks_cross_jobs(
    server: &JpiMcpServer,
    arguments: Value,
) -> JpiToolResult {
    let tasks: Vec<NewCrossJobTask> =
        match require_field(&arguments, "tasks").and_then(parse_payload) {
            Ok(d) => d,
            Err(e) => return e,
        };
    api_result(
        "create_tasks_cross_jobs",
        server.client.create_tasks_cross_jobs(&tasks).await,
    )
}

pub async fn handle_update_tasks_cross_jobs(
    server: &JpiMcpServer,
    arguments: Value,
) -> JpiToolResult {
    let tasks: Vec<TaskPatch> = match require_field(&arguments, "tasks").and_then(parse_payload) {
        Ok(d) => d,
        Err(e) => return e,
    };
    api_result(
        "update_tasks_cross_jobs",
        server.client.update_tasks_cross_jobs(&tasks).await,
    )
}

pub async fn handle_delete_tasks_cross_jobs(
    server: &JpiMcpServer,
    arguments: Value,
) -> JpiToolResult {
    let task_guids: Vec<String> =
        match require_field(&arguments, "taskGuids").and_then(parse_payload) {
            Ok(d) => d,
            Err(e) => return e,
        };
    api_result(
        "delete_tasks_cross_jobs",
        server.client.delete_tasks_cross_jobs(&task_guids).await,
    )
}
