//! Job tool schema definitions: job CRUD, tasks, component references, the
//! batch families and the condensed listing views.

use serde_json::{Value, json};

pub fn list_jobs_tool() -> Value {
    json!({
        "name": "jpi_list_jobs",
        "description": "List all jobs in the JPI system with FULL task details. WARNING: Returns large payload. Use jpi_list_jobs_summary for job overviews or jpi_list_jobs_at_risk for risk analysis.",
        "inputSchema": {
            "type": "object",
            "properties": {},
            "required": []
        }
    })
}

pub fn list_jobs_summary_tool() -> Value {
    json!({
        "name": "jpi_list_jobs_summary",
        "description": "List all jobs WITHOUT task details. Returns job metadata only (Name, DueDate, PlannedEnd, Status, etc.) with TaskCount. Use this for job overviews to reduce token usage (~80% smaller than jpi_list_jobs).",
        "inputSchema": {
            "type": "object",
            "properties": {},
            "required": []
        }
    })
}

pub fn list_jobs_at_risk_tool() -> Value {
    json!({
        "name": "jpi_list_jobs_at_risk",
        "description": "List jobs at risk of missing due dates. Returns only jobs where IsDueDateExceeded=true OR BufferLevel < threshold. Minimal fields for maximum token efficiency (~95% smaller than jpi_list_jobs).",
        "inputSchema": {
            "type": "object",
            "properties": {
                "bufferThreshold": {
                    "type": "number",
                    "description": "BufferLevel threshold (default: 1.0). Jobs with BufferLevel below this are considered at risk. Negative BufferLevel means already late."
                }
            },
            "required": []
        }
    })
}

pub fn create_job_tool() -> Value {
    json!({
        "name": "jpi_create_job",
        "description": "Create a new job with tasks and scheduling information.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "Name": {"type": "string", "description": "Job name"},
                "JobNo": {"type": "string", "description": "Job number/external ID"},
                "DueDate": {"type": "string", "description": "Due date (ISO 8601)"},
                "ReleaseDate": {"type": "string", "description": "Release date (ISO 8601)"},
                "Strategy": {"type": "string", "description": "Scheduling strategy (Asap, Jit, ASAP_PLUS, JIT_PLUS)", "enum": ["Asap", "Jit", "ASAP_PLUS", "JIT_PLUS"]},
                "OrderStatus": {"type": "string", "description": "Job status (Quoted, Ordered, Released, Standby)", "enum": ["Quoted", "Ordered", "Released", "Standby"]},
                "Customer": {"type": "string", "description": "Customer name"},
                "Quantity": {"type": "number", "description": "Quantity to produce"},
                "Tasks": {"type": "array", "description": "Array of job tasks"}
            },
            "required": ["Name", "Tasks"]
        }
    })
}

pub fn get_job_tool() -> Value {
    json!({
        "name": "jpi_get_job",
        "description": "Get a specific job by its GUID.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "guid": {"type": "string", "description": "Job GUID"}
            },
            "required": ["guid"]
        }
    })
}

pub fn update_job_tool() -> Value {
    json!({
        "name": "jpi_update_job",
        "description": "Update an existing job.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "guid": {"type": "string", "description": "Job GUID"},
                "Name": {"type": "string", "description": "New job name"},
                "DueDate": {"type": "string", "description": "New due date (ISO 8601)"},
                "ReleaseDate": {"type": "string", "description": "New release date (ISO 8601)"},
                "OrderStatus": {"type": "string", "description": "Job status", "enum": ["Quoted", "Ordered", "Released", "Standby"]},
                "Strategy": {"type": "string", "description": "Scheduling strategy", "enum": ["Asap", "Jit", "ASAP_PLUS", "JIT_PLUS"]},
                "Customer": {"type": "string", "description": "Customer name"},
                "Quantity": {"type": "number", "description": "Quantity"}
            },
            "required": ["guid"]
        }
    })
}

pub fn delete_job_tool() -> Value {
    json!({
        "name": "jpi_delete_job",
        "description": "Delete a job by its GUID.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "guid": {"type": "string", "description": "Job GUID"}
            },
            "required": ["guid"]
        }
    })
}

pub fn get_task_tool() -> Value {
    json!({
        "name": "jpi_get_task",
        "description": "Get a specific task within a job.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "jobGuid": {"type": "string", "description": "Job GUID"},
                "taskGuid": {"type": "string", "description": "Task GUID"}
            },
            "required": ["jobGuid", "taskGuid"]
        }
    })
}

pub fn add_task_tool() -> Value {
    json!({
        "name": "jpi_add_task",
        "description": "Add a new task to a job.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "jobGuid": {"type": "string", "description": "Job GUID"},
                "TaskNo": {"type": "string", "description": "Task number (e.g., \"T010\")"},
                "Name": {"type": "string", "description": "Task name"},
                "ProductionTimePerUnit": {"type": "number", "description": "Production time in seconds"},
                "SetupTime": {"type": "number", "description": "Setup time in seconds"},
                "TeardownTime": {"type": "number", "description": "Teardown time in seconds"},
                "TransferTime": {"type": "number", "description": "Transfer time in seconds"},
                "ResourceGroupConstraints": {"type": "array", "description": "Resource group constraints array"},
                "Quantity": {"type": "number", "description": "Quantity"},
                "PredecessorTaskNos": {"type": "array", "items": {"type": "string"}, "description": "Predecessor task numbers"}
            },
            "required": ["jobGuid", "TaskNo", "ResourceGroupConstraints"]
        }
    })
}

pub fn update_task_tool() -> Value {
    json!({
        "name": "jpi_update_task",
        "description": "Update a task within a job.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "jobGuid": {"type": "string", "description": "Job GUID"},
                "taskGuid": {"type": "string", "description": "Task GUID"},
                "Name": {"type": "string", "description": "New task name"},
                "ProductionTimePerUnit": {"type": "number", "description": "New production time in seconds"},
                "SetupTime": {"type": "number", "description": "New setup time in seconds"},
                "TeardownTime": {"type": "number", "description": "New teardown time in seconds"},
                "TaskStatus": {"type": "string", "description": "Task status", "enum": ["Planned", "Started", "Finished", "None", "Standby"]},
                "StartNotEarlierThan": {"type": "string", "description": "Earliest start constraint (ISO 8601)"},
                "EndNotLaterThan": {"type": "string", "description": "Latest end constraint (ISO 8601)"}
            },
            "required": ["jobGuid", "taskGuid"]
        }
    })
}

pub fn delete_task_tool() -> Value {
    json!({
        "name": "jpi_delete_task",
        "description": "Delete a task from a job.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "jobGuid": {"type": "string", "description": "Job GUID"},
                "taskGuid": {"type": "string", "description": "Task GUID"}
            },
            "required": ["jobGuid", "taskGuid"]
        }
    })
}

pub fn get_jcr_tool() -> Value {
    json!({
        "name": "jpi_get_jcr",
        "description": "Get a Job Component Reference (JCR) - a reference to a component used in a job.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "jobGuid": {"type": "string", "description": "Job GUID"},
                "jcrGuid": {"type": "string", "description": "JCR GUID"}
            },
            "required": ["jobGuid", "jcrGuid"]
        }
    })
}

pub fn add_jcr_tool() -> Value {
    json!({
        "name": "jpi_add_jcr",
        "description": "Add a Job Component Reference to a job.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "jobGuid": {"type": "string", "description": "Job GUID"},
                "ComponentGuid": {"type": "string", "description": "Component GUID to reference"},
                "TaskNo": {"type": "string", "description": "Task number for the JCR"},
                "Quantity": {"type": "number", "description": "Quantity"},
                "PredecessorTaskNos": {"type": "array", "items": {"type": "string"}, "description": "Predecessor task numbers"}
            },
            "required": ["jobGuid", "ComponentGuid"]
        }
    })
}

pub fn update_jcr_tool() -> Value {
    json!({
        "name": "jpi_update_jcr",
        "description": "Update a Job Component Reference.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "jobGuid": {"type": "string", "description": "Job GUID"},
                "jcrGuid": {"type": "string", "description": "JCR GUID"},
                "TaskNo": {"type": "string", "description": "New task number"},
                "Quantity": {"type": "number", "description": "New quantity"},
                "PredecessorTaskNos": {"type": "array", "items": {"type": "string"}, "description": "Predecessor task numbers"}
            },
            "required": ["jobGuid", "jcrGuid"]
        }
    })
}

pub fn delete_jcr_tool() -> Value {
    json!({
        "name": "jpi_delete_jcr",
        "description": "Delete a Job Component Reference.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "jobGuid": {"type": "string", "description": "Job GUID"},
                "jcrGuid": {"type": "string", "description": "JCR GUID"}
            },
            "required": ["jobGuid", "jcrGuid"]
        }
    })
}

pub fn create_jobs_batch_tool() -> Value {
    json!({
        "name": "jpi_create_jobs_batch",
        "description": "Create multiple jobs in a single batch operation.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "jobs": {"type": "array", "description": "Array of job objects to create"}
            },
            "required": ["jobs"]
        }
    })
}

pub fn update_jobs_batch_tool() -> Value {
    json!({
        "name": "jpi_update_jobs_batch",
        "description": "Update multiple jobs in a single batch operation.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "jobs": {"type": "array", "description": "Array of job objects with guid and fields to update"}
            },
            "required": ["jobs"]
        }
    })
}

pub fn delete_jobs_batch_tool() -> Value {
    json!({
        "name": "jpi_delete_jobs_batch",
        "description": "Delete multiple jobs in a single batch operation.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "guids": {"type": "array", "items": {"type": "string"}, "description": "Array of job GUIDs to delete"}
            },
            "required": ["guids"]
        }
    })
}

pub fn add_tasks_batch_tool() -> Value {
    json!({
        "name": "jpi_add_tasks_batch",
        "description": "Add multiple tasks to a job in a single batch operation.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "jobGuid": {"type": "string", "description": "Job GUID"},
                "tasks": {"type": "array", "description": "Array of task objects to add"}
            },
            "required": ["jobGuid", "tasks"]
        }
    })
}

pub fn update_tasks_batch_tool() -> Value {
    json!({
        "name": "jpi_update_tasks_batch",
        "description": "Update multiple tasks within a job in a single batch operation.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "jobGuid": {"type": "string", "description": "Job GUID"},
                "tasks": {"type": "array", "description": "Array of task objects with guid and fields to update"}
            },
            "required": ["jobGuid", "tasks"]
        }
    })
}

pub fn delete_tasks_batch_tool() -> Value {
    json!({
        "name": "jpi_delete_tasks_batch",
        "description": "Delete multiple tasks from a job in a single batch operation.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "jobGuid": {"type": "string", "description": "Job GUID"},
                "taskGuids": {"type": "array", "items": {"type": "string"}, "description": "Array of task GUIDs to delete"}
            },
            "required": ["jobGuid", "taskGuids"]
        }
    })
}

pub fn add_jcrs_batch_tool() -> Value {
    json!({
        "name": "jpi_add_jcrs_batch",
        "description": "Add multiple Job Component References to a job in a single batch operation.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "jobGuid": {"type": "string", "description": "Job GUID"},
                "jcrs": {"type": "array", "description": "Array of JCR objects to add"}
            },
            "required": ["jobGuid", "jcrs"]
        }
    })
}

pub fn update_jcrs_batch_tool() -> Value {
    json!({
        "name": "jpi_update_jcrs_batch",
        "description": "Update multiple Job Component References in a single batch operation.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "jobGuid": {"type": "string", "description": "Job GUID"},
                "jcrs": {"type": "array", "description": "Array of JCR objects with guid and fields to update"}
            },
            "required": ["jobGuid", "jcrs"]
        }
    })
}

pub fn delete_jcrs_batch_tool() -> Value {
    json!({
        "name": "jpi_delete_jcrs_batch",
        "description": "Delete multiple Job Component References in a single batch operation.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "jobGuid": {"type": "string", "description": "Job GUID"},
                "jcrGuids": {"type": "array", "items": {"type": "string"}, "description": "Array of JCR GUIDs to delete"}
            },
            "required": ["jobGuid", "jcrGuids"]
        }
    })
}

pub fn create_tasks_cross_jobs_tool() -> Value {
    json!({
        "name": "jpi_create_tasks_cross_jobs",
        "description": "Create tasks across multiple jobs in a single batch operation.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "tasks": {"type": "array", "description": "Array of task objects with jobGuid specified for each"}
            },
            "required": ["tasks"]
        }
    })
}

pub fn update_tasks_cross_jobs_tool() -> Value {
    json!({
        "name": "jpi_update_tasks_cross_jobs",
        "description": "Update tasks across multiple jobs in a single batch operation.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "tasks": {"type": "array", "description": "Array of task objects with guid and fields to update"}
            },
            "required": ["tasks"]
        }
    })
}

pub fn delete_tasks_cross_jobs_tool() -> Value {
    json!({
        "name": "jpi_delete_tasks_cross_jobs",
        "description": "Delete tasks across multiple jobs in a single batch operation.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "taskGuids": {"type": "array", "items": {"type": "string"}, "description": "Array of task GUIDs to delete"}
            },
            "required": ["taskGuids"]
        }
    })
}
