//! Job template tool schema definitions.

use serde_json::{Value, json};

pub fn list_templates_tool() -> Value {
    json!({
        "name": "jpi_list_templates",
        "description": "List all job templates. Templates are reusable job definitions.",
        "inputSchema": {
            "type": "object",
            "properties": {},
            "required": []
        }
    })
}

pub fn create_template_tool() -> Value {
    json!({
        "name": "jpi_create_template",
        "description": "Create a new job template.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "Name": {"type": "string", "description": "Template name"},
                "HyperLinks": {"type": "array", "description": "Array of hyperlinks"}
            },
            "required": ["Name"]
        }
    })
}

pub fn get_template_tool() -> Value {
    json!({
        "name": "jpi_get_template",
        "description": "Get a specific job template by its GUID.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "guid": {"type": "string", "description": "Template GUID"}
            },
            "required": ["guid"]
        }
    })
}

pub fn update_template_tool() -> Value {
    json!({
        "name": "jpi_update_template",
        "description": "Update an existing job template.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "guid": {"type": "string", "description": "Template GUID"},
                "Name": {"type": "string", "description": "New template name"}
            },
            "required": ["guid"]
        }
    })
}

pub fn delete_template_tool() -> Value {
    json!({
        "name": "jpi_delete_template",
        "description": "Delete a job template by its GUID.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "guid": {"type": "string", "description": "Template GUID"}
            },
            "required": ["guid"]
        }
    })
}

pub fn get_template_task_tool() -> Value {
    json!({
        "name": "jpi_get_template_task",
        "description": "Get a specific task within a template.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "templateGuid": {"type": "string", "description": "Template GUID"},
                "taskGuid": {"type": "string", "description": "Task GUID"}
            },
            "required": ["templateGuid", "taskGuid"]
        }
    })
}

pub fn add_template_task_tool() -> Value {
    json!({
        "name": "jpi_add_template_task",
        "description": "Add a new task to a template.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "templateGuid": {"type": "string", "description": "Template GUID"},
                "TaskNo": {"type": "string", "description": "Task number (e.g., \"T010\")"},
                "Name": {"type": "string", "description": "Task name"},
                "ProductionTimePerUnit": {"type": "number", "description": "Production time in seconds"},
                "SetupTime": {"type": "number", "description": "Setup time in seconds"},
                "TeardownTime": {"type": "number", "description": "Teardown time in seconds"},
                "ResourceGroupConstraints": {"type": "array", "description": "Resource group constraints"}
            },
            "required": ["templateGuid", "TaskNo", "ResourceGroupConstraints"]
        }
    })
}

pub fn update_template_task_tool() -> Value {
    json!({
        "name": "jpi_update_template_task",
        "description": "Update a task within a template.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "templateGuid": {"type": "string", "description": "Template GUID"},
                "taskGuid": {"type": "string", "description": "Task GUID"},
                "Name": {"type": "string", "description": "New task name"},
                "ProductionTimePerUnit": {"type": "number", "description": "New production time in seconds"},
                "SetupTime": {"type": "number", "description": "New setup time in seconds"},
                "TeardownTime": {"type": "number", "description": "New teardown time in seconds"}
            },
            "required": ["templateGuid", "taskGuid"]
        }
    })
}

pub fn delete_template_task_tool() -> Value {
    json!({
        "name": "jpi_delete_template_task",
        "description": "Delete a task from a template.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "templateGuid": {"type": "string", "description": "Template GUID"},
                "taskGuid": {"type": "string", "description": "Task GUID"}
            },
            "required": ["templateGuid", "taskGuid"]
        }
    })
}

pub fn get_tcr_tool() -> Value {
    json!({
        "name": "jpi_get_tcr",
        "description": "Get a Template Component Reference (TCR).",
        "inputSchema": {
            "type": "object",
            "properties": {
                "templateGuid": {"type": "string", "description": "Template GUID"},
                "tcrGuid": {"type": "string", "description": "TCR GUID"}
            },
            "required": ["templateGuid", "tcrGuid"]
        }
    })
}

pub fn add_tcr_tool() -> Value {
    json!({
        "name": "jpi_add_tcr",
        "description": "Add a Template Component Reference to a template.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "templateGuid": {"type": "string", "description": "Template GUID"},
                "ComponentGuid": {"type": "string", "description": "Component GUID to reference"},
                "Quantity": {"type": "number", "description": "Quantity"}
            },
            "required": ["templateGuid", "ComponentGuid"]
        }
    })
}

pub fn update_tcr_tool() -> Value {
    json!({
        "name": "jpi_update_tcr",
        "description": "Update a Template Component Reference.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "templateGuid": {"type": "string", "description": "Template GUID"},
                "tcrGuid": {"type": "string", "description": "TCR GUID"},
                "Quantity": {"type": "number", "description": "New quantity"}
            },
            "required": ["templateGuid", "tcrGuid"]
        }
    })
}

pub fn delete_tcr_tool() -> Value {
    json!({
        "name": "jpi_delete_tcr",
        "description": "Delete a Template Component Reference.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "templateGuid": {"type": "string", "description": "Template GUID"},
                "tcrGuid": {"type": "string", "description": "TCR GUID"}
            },
            "required": ["templateGuid", "tcrGuid"]
        }
    })
}
