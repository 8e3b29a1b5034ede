//! Job, task and job-component-reference endpoints, including the three
//! batch families and the cross-job task batch.

use reqwest::Method;

use super::{JpiClient, NO_BODY};
use crate::error::JpiResult;
use crate::types::{
    Job, JobComponentRef, JobComponentRefPatch, JobPatch, NewCrossJobTask, NewJob,
    NewJobComponentRef, NewTask, Task, TaskPatch,
};

impl JpiClient {
    pub async fn list_jobs(&self) -> JpiResult<Vec<Job>> {
        self.request_list(Method::GET, "/v1/jobs", NO_BODY).await
    }

    pub async fn create_job(&self, data: &NewJob) -> JpiResult<Job> {
        self.request(Method::POST, "/v1/jobs", Some(data)).await
    }

    pub async fn get_job(&self, guid: &str) -> JpiResult<Job> {
        self.request(Method::GET, &format!("/v1/jobs/{guid}"), NO_BODY)
            .await
    }

    pub async fn update_job(&self, guid: &str, data: &JobPatch) -> JpiResult<Job> {
        self.request(Method::PATCH, &format!("/v1/jobs/{guid}"), Some(data))
            .await
    }

    /// Deletes a job and returns the remaining jobs.
    pub async fn delete_job(&self, guid: &str) -> JpiResult<Vec<Job>> {
        self.request_list(Method::DELETE, &format!("/v1/jobs/{guid}"), NO_BODY)
            .await
    }

    // Tasks within a job.

    pub async fn get_task(&self, job_guid: &str, task_guid: &str) -> JpiResult<Task> {
        self.request(
            Method::GET,
            &format!("/v1/jobs/{job_guid}/task/{task_guid}"),
            NO_BODY,
        )
        .await
    }

    pub async fn add_task(&self, job_guid: &str, data: &NewTask) -> JpiResult<Task> {
        self.request(Method::POST, &format!("/v1/jobs/{job_guid}/task"), Some(data))
            .await
    }

    pub async fn update_task(
        &self,
        job_guid: &str,
        task_guid: &str,
        data: &TaskPatch,
    ) -> JpiResult<Task> {
        self.request(
            Method::PATCH,
            &format!("/v1/jobs/{job_guid}/task/{task_guid}"),
            Some(data),
        )
        .await
    }

    /// Deletes a task and returns the updated job.
    pub async fn delete_task(&self, job_guid: &str, task_guid: &str) -> JpiResult<Job> {
        self.request(
            Method::DELETE,
            &format!("/v1/jobs/{job_guid}/task/{task_guid}"),
            NO_BODY,
        )
        .await
    }

    // Job component references.

    pub async fn get_jcr(&self, job_guid: &str, jcr_guid: &str) -> JpiResult<JobComponentRef> {
        self.request(
            Method::GET,
            &format!("/v1/jobs/{job_guid}/jcr/{jcr_guid}"),
            NO_BODY,
        )
        .await
    }

    pub async fn add_jcr(
        &self,
        job_guid: &str,
        data: &NewJobComponentRef,
    ) -> JpiResult<JobComponentRef> {
        self.request(Method::POST, &format!("/v1/jobs/{job_guid}/jcr"), Some(data))
            .await
    }

    pub async fn update_jcr(
        &self,
        job_guid: &str,
        jcr_guid: &str,
        data: &JobComponentRefPatch,
    ) -> JpiResult<JobComponentRef> {
        self.request(
            Method::PATCH,
            &format!("/v1/jobs/{job_guid}/jcr/{jcr_guid}"),
            Some(data),
        )
        .await
    }

    /// Deletes a component reference and returns the updated job.
    pub async fn delete_jcr(&self, job_guid: &str, jcr_guid: &str) -> JpiResult<Job> {
        self.request(
            Method::DELETE,
            &format!("/v1/jobs/{job_guid}/jcr/{jcr_guid}"),
            NO_BODY,
        )
        .await
    }

    // Batch endpoints.

    pub async fn create_jobs_batch(&self, data: &[NewJob]) -> JpiResult<Vec<Job>> {
        self.request_list(Method::POST, "/v1/jobs/batch", Some(data))
            .await
    }

    pub async fn update_jobs_batch(&self, data: &[JobPatch]) -> JpiResult<Vec<Job>> {
        self.request_list(Method::PATCH, "/v1/jobs/batch", Some(data))
            .await
    }

    /// Deletes jobs by GUID and returns the remaining jobs.
    pub async fn delete_jobs_batch(&self, guids: &[String]) -> JpiResult<Vec<Job>> {
        self.request_list(Method::DELETE, "/v1/jobs/batch", Some(guids))
            .await
    }

    pub async fn add_tasks_batch(&self, job_guid: &str, data: &[NewTask]) -> JpiResult<Vec<Task>> {
        self.request_list(
            Method::POST,
            &format!("/v1/jobs/{job_guid}/task/batch"),
            Some(data),
        )
        .await
    }

    pub async fn update_tasks_batch(
        &self,
        job_guid: &str,
        data: &[TaskPatch],
    ) -> JpiResult<Vec<Task>> {
        self.request_list(
            Method::PATCH,
            &format!("/v1/jobs/{job_guid}/task/batch"),
            Some(data),
        )
        .await
    }

    /// Deletes tasks by GUID and returns the updated job.
    pub async fn delete_tasks_batch(&self, job_guid: &str, task_guids: &[String]) -> JpiResult<Job> {
        self.request(
            Method::DELETE,
            &format!("/v1/jobs/{job_guid}/task/batch"),
            Some(task_guids),
        )
        .await
    }

    pub async fn add_jcrs_batch(
        &self,
        job_guid: &str,
        data: &[NewJobComponentRef],
    ) -> JpiResult<Vec<JobComponentRef>> {
        self.request_list(
            Method::POST,
            &format!("/v1/jobs/{job_guid}/jcr/batch"),
            Some(data),
        )
        .await
    }

    pub async fn update_jcrs_batch(
        &self,
        job_guid: &str,
        data: &[JobComponentRefPatch],
    ) -> JpiResult<Vec<JobComponentRef>> {
        self.request_list(
            Method::PATCH,
            &format!("/v1/jobs/{job_guid}/jcr/batch"),
            Some(data),
        )
        .await
    }

    /// Deletes component references by GUID and returns the updated job.
    pub async fn delete_jcrs_batch(&self, job_guid: &str, jcr_guids: &[String]) -> JpiResult<Job> {
        self.request(
            Method::DELETE,
            &format!("/v1/jobs/{job_guid}/jcr/batch"),
            Some(jcr_guids),
        )
        .await
    }

    // Cross-job task batch: each entry carries its own job GUID.

    pub async fn create_tasks_cross_jobs(&self, data: &[NewCrossJobTask]) -> JpiResult<Vec<Task>> {
        self.request_list(Method::POST, "/v1/jobs/tasks/batch", Some(data))
            .await
    }

    /// Patches tasks across jobs; each patch selects its task by GUID.
    pub async fn update_tasks_cross_jobs(&self, data: &[TaskPatch]) -> JpiResult<Vec<Task>> {
        self.request_list(Method::PATCH, "/v1/jobs/tasks/batch", Some(data))
            .await
    }

    /// Deletes tasks across jobs and returns the affected jobs.
    pub async fn delete_tasks_cross_jobs(&self, task_guids: &[String]) -> JpiResult<Vec<Job>> {
        self.request_list(Method::DELETE, "/v1/jobs/tasks/batch", Some(task_guids))
            .await
    }
}
