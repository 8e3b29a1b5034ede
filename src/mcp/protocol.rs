//! Tool discovery and dispatch.

use log::debug;
use serde_json::{Value, json};

use super::core::{JpiMcpServer, JpiToolResult};
use super::handlers::{components, events, jobs, resources, settings, system, templates};
use super::tools::{
    component_schemas, event_schemas, job_schemas, resource_schemas, settings_schemas,
    system_schemas, template_schemas,
};

impl JpiMcpServer {
    /// The full tool catalog for discovery: 69 tools covering every JPI
    /// endpoint plus the locally computed views.
    pub fn get_tools(&self) -> Vec<Value> {
        vec![
            system_schemas::api_info_tool(),
            // Components
            component_schemas::list_components_tool(),
            component_schemas::create_component_tool(),
            component_schemas::get_component_tool(),
            component_schemas::update_component_tool(),
            component_schemas::delete_component_tool(),
            component_schemas::get_component_task_tool(),
            component_schemas::add_component_task_tool(),
            component_schemas::update_component_task_tool(),
            component_schemas::delete_component_task_tool(),
            // Jobs
            job_schemas::list_jobs_tool(),
            job_schemas::list_jobs_summary_tool(),
            job_schemas::list_jobs_at_risk_tool(),
            job_schemas::create_job_tool(),
            job_schemas::get_job_tool(),
            job_schemas::update_job_tool(),
            job_schemas::delete_job_tool(),
            job_schemas::get_task_tool(),
            job_schemas::add_task_tool(),
            job_schemas::update_task_tool(),
            job_schemas::delete_task_tool(),
            job_schemas::get_jcr_tool(),
            job_schemas::add_jcr_tool(),
            job_schemas::update_jcr_tool(),
            job_schemas::delete_jcr_tool(),
            job_schemas::create_jobs_batch_tool(),
            job_schemas::update_jobs_batch_tool(),
            job_schemas::delete_jobs_batch_tool(),
            job_schemas::add_tasks_batch_tool(),
            job_schemas::update_tasks_batch_tool(),
            job_schemas::delete_tasks_batch_tool(),
            job_schemas::add_jcrs_batch_tool(),
            job_schemas::update_jcrs_batch_tool(),
            job_schemas::delete_jcrs_batch_tool(),
            job_schemas::create_tasks_cross_jobs_tool(),
            job_schemas::update_tasks_cross_jobs_tool(),
            job_schemas::delete_tasks_cross_jobs_tool(),
            // Templates
            template_schemas::list_templates_tool(),
            template_schemas::create_template_tool(),
            template_schemas::get_template_tool(),
            template_schemas::update_template_tool(),
            template_schemas::delete_template_tool(),
            template_schemas::get_template_task_tool(),
            template_schemas::add_template_task_tool(),
            template_schemas::update_template_task_tool(),
            template_schemas::delete_template_task_tool(),
            template_schemas::get_tcr_tool(),
            template_schemas::add_tcr_tool(),
            template_schemas::update_tcr_tool(),
            template_schemas::delete_tcr_tool(),
            // Events
            event_schemas::get_events_tool(),
            event_schemas::get_events_filtered_tool(),
            // Resource categories
            resource_schemas::list_resource_categories_tool(),
            resource_schemas::create_resource_category_tool(),
            resource_schemas::get_resource_category_tool(),
            resource_schemas::update_resource_category_tool(),
            resource_schemas::delete_resource_category_tool(),
            // Resource groups
            resource_schemas::list_resource_groups_tool(),
            resource_schemas::create_resource_group_tool(),
            resource_schemas::get_resource_group_tool(),
            resource_schemas::update_resource_group_tool(),
            resource_schemas::delete_resource_group_tool(),
            // Resources
            resource_schemas::list_resources_tool(),
            resource_schemas::create_resource_tool(),
            resource_schemas::get_resource_tool(),
            resource_schemas::update_resource_tool(),
            resource_schemas::delete_resource_tool(),
            // Settings
            settings_schemas::get_settings_tool(),
            settings_schemas::update_settings_tool(),
        ]
    }

    /// Routes one tool execution request to its handler.
    pub async fn execute_tool(&self, tool_name: &str, arguments: Value) -> JpiToolResult {
        debug!("Executing MCP tool: {} with args: {}", tool_name, arguments);

        match tool_name {
            "jpi_api_info" => system::handle_api_info(self, arguments).await,

            // Components
            "jpi_list_components" => components::handle_list_components(self, arguments).await,
            "jpi_create_component" => components::handle_create_component(self, arguments).await,
            "jpi_get_component" => components::handle_get_component(self, arguments).await,
            "jpi_update_component" => components::handle_update_component(self, arguments).await,
            "jpi_delete_component" => components::handle_delete_component(self, arguments).await,
            "jpi_get_component_task" => {
                components::handle_get_component_task(self, arguments).await
            }
            "jpi_add_component_task" => {
                components::handle_add_component_task(self, arguments).await
            }
            "jpi_update_component_task" => {
                components::handle_update_component_task(self, arguments).await
            }
            "jpi_delete_component_task" => {
                components::handle_delete_component_task(self, arguments).await
            }

            // Jobs
            "jpi_list_jobs" => jobs::handle_list_jobs(self, arguments).await,
            "jpi_list_jobs_summary" => jobs::handle_list_jobs_summary(self, arguments).await,
            "jpi_list_jobs_at_risk" => jobs::handle_list_jobs_at_risk(self, arguments).await,
            "jpi_create_job" => jobs::handle_create_job(self, arguments).await,
            "jpi_get_job" => jobs::handle_get_job(self, arguments).await,
            "jpi_update_job" => jobs::handle_update_job(self, arguments).await,
            "jpi_delete_job" => jobs::handle_delete_job(self, arguments).await,
            "jpi_get_task" => jobs::handle_get_task(self, arguments).await,
            "jpi_add_task" => jobs::handle_add_task(self, arguments).await,
            "jpi_update_task" => jobs::handle_update_task(self, arguments).await,
            "jpi_delete_task" => jobs::handle_delete_task(self, arguments).await,
            "jpi_get_jcr" => jobs::handle_get_jcr(self, arguments).await,
            "jpi_add_jcr" => jobs::handle_add_jcr(self, arguments).await,
            "jpi_update_jcr" => jobs::handle_update_jcr(self, arguments).await,
            "jpi_delete_jcr" => jobs::handle_delete_jcr(self, arguments).await,
            "jpi_create_jobs_batch" => jobs::handle_create_jobs_batch(self, arguments).await,
            "jpi_update_jobs_batch" => jobs::handle_update_jobs_batch(self, arguments).await,
            "jpi_delete_jobs_batch" => jobs::handle_delete_jobs_batch(self, arguments).await,
            "jpi_add_tasks_batch" => jobs::handle_add_tasks_batch(self, arguments).await,
            "jpi_update_tasks_batch" => jobs::handle_update_tasks_batch(self, arguments).await,
            "jpi_delete_tasks_batch" => jobs::handle_delete_tasks_batch(self, arguments).await,
            "jpi_add_jcrs_batch" => jobs::handle_add_jcrs_batch(self, arguments).await,
            "jpi_update_jcrs_batch" => jobs::handle_update_jcrs_batch(self, arguments).await,
            "jpi_delete_jcrs_batch" => jobs::handle_delete_jcrs_batch(self, arguments).await,
            "jpi_create_tasks_cross_jobs" => {
                jobs::handle_create_tasks_cross_jobs(self, arguments).await
            }
            "jpi_update_tasks_cross_jobs" => {
                jobs::handle_update_tasks_cross_jobs(self, arguments).await
            }
            "jpi_delete_tasks_cross_jobs" => {
                jobs::handle_delete_tasks_cross_jobs(self, arguments).await
            }

            // Templates
            "jpi_list_templates" => templates::handle_list_templates(self, arguments).await,
            "jpi_create_template" => templates::handle_create_template(self, arguments).await,
            "jpi_get_template" => templates::handle_get_template(self, arguments).await,
            "jpi_update_template" => templates::handle_update_template(self, arguments).await,
            "jpi_delete_template" => templates::handle_delete_template(self, arguments).await,
            "jpi_get_template_task" => templates::handle_get_template_task(self, arguments).await,
            "jpi_add_template_task" => templates::handle_add_template_task(self, arguments).await,
            "jpi_update_template_task" => {
                templates::handle_update_template_task(self, arguments).await
            }
            "jpi_delete_template_task" => {
                templates::handle_delete_template_task(self, arguments).await
            }
            "jpi_get_tcr" => templates::handle_get_tcr(self, arguments).await,
            "jpi_add_tcr" => templates::handle_add_tcr(self, arguments).await,
            "jpi_update_tcr" => templates::handle_update_tcr(self, arguments).await,
            "jpi_delete_tcr" => templates::handle_delete_tcr(self, arguments).await,

            // Events
            "jpi_get_events" => events::handle_get_events(self, arguments).await,
            "jpi_get_events_filtered" => {
                events::handle_get_events_filtered(self, arguments).await
            }

            // Resource categories
            "jpi_list_resource_categories" => {
                resources::handle_list_resource_categories(self, arguments).await
            }
            "jpi_create_resource_category" => {
                resources::handle_create_resource_category(self, arguments).await
            }
            "jpi_get_resource_category" => {
                resources::handle_get_resource_category(self, arguments).await
            }
            "jpi_update_resource_category" => {
                resources::handle_update_resource_category(self, arguments).await
            }
            "jpi_delete_resource_category" => {
                resources::handle_delete_resource_category(self, arguments).await
            }

            // Resource groups
            "jpi_list_resource_groups" => {
                resources::handle_list_resource_groups(self, arguments).await
            }
            "jpi_create_resource_group" => {
                resources::handle_create_resource_group(self, arguments).await
            }
            "jpi_get_resource_group" => {
                resources::handle_get_resource_group(self, arguments).await
            }
            "jpi_update_resource_group" => {
                resources::handle_update_resource_group(self, arguments).await
            }
            "jpi_delete_resource_group" => {
                resources::handle_delete_resource_group(self, arguments).await
            }

            // Resources
            "jpi_list_resources" => resources::handle_list_resources(self, arguments).await,
            "jpi_create_resource" => resources::handle_create_resource(self, arguments).await,
            "jpi_get_resource" => resources::handle_get_resource(self, arguments).await,
            "jpi_update_resource" => resources::handle_update_resource(self, arguments).await,
            "jpi_delete_resource" => resources::handle_delete_resource(self, arguments).await,

            // Settings
            "jpi_get_settings" => settings::handle_get_settings(self, arguments).await,
            "jpi_update_settings" => settings::handle_update_settings(self, arguments).await,

            _ => JpiToolResult {
                success: false,
                content: json!({
                    "error": "Unknown tool",
                    "tool_name": tool_name
                }),
                metadata: None,
            },
        }
    }
}
