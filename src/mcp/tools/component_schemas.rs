//! Component tool schema definitions.

use serde_json::{Value, json};

pub fn list_components_tool() -> Value {
    json!({
        "name": "jpi_list_components",
        "description": "List all components in the JPI system. Components are reusable building blocks that can be referenced by jobs.",
        "inputSchema": {
            "type": "object",
            "properties": {},
            "required": []
        }
    })
}

pub fn create_component_tool() -> Value {
    json!({
        "name": "jpi_create_component",
        "description": "Create a new component with tasks.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "Name": {"type": "string", "description": "Component name"},
                "Tasks": {
                    "type": "array",
                    "description": "Array of component tasks",
                    "items": {
                        "type": "object",
                        "properties": {
                            "TaskNo": {"type": "string", "description": "Task number (e.g., \"T010\")"},
                            "Name": {"type": "string"},
                            "ProductionTimePerUnit": {"type": "number", "description": "Production time in seconds"},
                            "ResourceGroupConstraints": {"type": "array", "description": "Resource group constraints"}
                        },
                        "required": ["TaskNo", "ResourceGroupConstraints"]
                    }
                }
            },
            "required": ["Name"]
        }
    })
}

pub fn get_component_tool() -> Value {
    json!({
        "name": "jpi_get_component",
        "description": "Get a specific component by its GUID.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "guid": {"type": "string", "description": "Component GUID"}
            },
            "required": ["guid"]
        }
    })
}

pub fn update_component_tool() -> Value {
    json!({
        "name": "jpi_update_component",
        "description": "Update an existing component.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "guid": {"type": "string", "description": "Component GUID"},
                "Name": {"type": "string", "description": "New component name"}
            },
            "required": ["guid"]
        }
    })
}

pub fn delete_component_tool() -> Value {
    json!({
        "name": "jpi_delete_component",
        "description": "Delete a component by its GUID.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "guid": {"type": "string", "description": "Component GUID"}
            },
            "required": ["guid"]
        }
    })
}

pub fn get_component_task_tool() -> Value {
    json!({
        "name": "jpi_get_component_task",
        "description": "Get a specific task within a component.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "componentGuid": {"type": "string", "description": "Component GUID"},
                "taskGuid": {"type": "string", "description": "Task GUID"}
            },
            "required": ["componentGuid", "taskGuid"]
        }
    })
}

pub fn add_component_task_tool() -> Value {
    json!({
        "name": "jpi_add_component_task",
        "description": "Add a new task to a component.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "componentGuid": {"type": "string", "description": "Component GUID"},
                "TaskNo": {"type": "string", "description": "Task number (e.g., \"T010\")"},
                "Name": {"type": "string", "description": "Task name"},
                "ProductionTimePerUnit": {"type": "number", "description": "Production time in seconds"},
                "SetupTime": {"type": "number", "description": "Setup time in seconds"},
                "TeardownTime": {"type": "number", "description": "Teardown time in seconds"},
                "ResourceGroupConstraints": {"type": "array", "description": "Resource group constraints array"}
            },
            "required": ["componentGuid", "TaskNo", "ResourceGroupConstraints"]
        }
    })
}

pub fn update_component_task_tool() -> Value {
    json!({
        "name": "jpi_update_component_task",
        "description": "Update a task within a component.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "componentGuid": {"type": "string", "description": "Component GUID"},
                "taskGuid": {"type": "string", "description": "Task GUID"},
                "Name": {"type": "string", "description": "New task name"},
                "ProductionTimePerUnit": {"type": "number", "description": "New production time in seconds"},
                "SetupTime": {"type": "number", "description": "New setup time in seconds"},
                "TeardownTime": {"type": "number", "description": "New teardown time in seconds"}
            },
            "required": ["componentGuid", "taskGuid"]
        }
    })
}

pub fn delete_component_task_tool() -> Value {
    json!({
        "name": "jpi_delete_component_task",
        "description": "Delete a task from a component.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "componentGuid": {"type": "string", "description": "Component GUID"},
                "taskGuid": {"type": "string", "description": "Task GUID"}
            },
            "required": ["componentGuid", "taskGuid"]
        }
    })
}
