//! Resource, resource group and resource category tool schema definitions.

use serde_json::{Value, json};

pub fn list_resource_categories_tool() -> Value {
    json!({
        "name": "jpi_list_resource_categories",
        "description": "List all resource categories. Categories group related resource groups.",
        "inputSchema": {
            "type": "object",
            "properties": {},
            "required": []
        }
    })
}

pub fn create_resource_category_tool() -> Value {
    json!({
        "name": "jpi_create_resource_category",
        "description": "Create a new resource category.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "Name": {"type": "string", "description": "Category name"}
            },
            "required": ["Name"]
        }
    })
}

pub fn get_resource_category_tool() -> Value {
    json!({
        "name": "jpi_get_resource_category",
        "description": "Get a specific resource category by its GUID.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "guid": {"type": "string", "description": "Category GUID"}
            },
            "required": ["guid"]
        }
    })
}

pub fn update_resource_category_tool() -> Value {
    json!({
        "name": "jpi_update_resource_category",
        "description": "Update a resource category.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "guid": {"type": "string", "description": "Category GUID"},
                "Name": {"type": "string", "description": "New category name"}
            },
            "required": ["guid"]
        }
    })
}

pub fn delete_resource_category_tool() -> Value {
    json!({
        "name": "jpi_delete_resource_category",
        "description": "Delete a resource category by its GUID.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "guid": {"type": "string", "description": "Category GUID"}
            },
            "required": ["guid"]
        }
    })
}

pub fn list_resource_groups_tool() -> Value {
    json!({
        "name": "jpi_list_resource_groups",
        "description": "List all resource groups. Groups organize resources that can perform similar work.",
        "inputSchema": {
            "type": "object",
            "properties": {},
            "required": []
        }
    })
}

pub fn create_resource_group_tool() -> Value {
    json!({
        "name": "jpi_create_resource_group",
        "description": "Create a new resource group.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "Name": {"type": "string", "description": "Group name"},
                "ResourceCategoryGuid": {"type": "string", "description": "Category GUID (optional)"},
                "Resources": {"type": "array", "items": {"type": "string"}, "description": "Array of resource GUIDs"}
            },
            "required": ["Name"]
        }
    })
}

pub fn get_resource_group_tool() -> Value {
    json!({
        "name": "jpi_get_resource_group",
        "description": "Get a specific resource group by its GUID.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "guid": {"type": "string", "description": "Group GUID"}
            },
            "required": ["guid"]
        }
    })
}

pub fn update_resource_group_tool() -> Value {
    json!({
        "name": "jpi_update_resource_group",
        "description": "Update a resource group.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "guid": {"type": "string", "description": "Group GUID"},
                "Name": {"type": "string", "description": "New group name"},
                "ResourceCategoryGuid": {"type": "string", "description": "New category GUID"},
                "Resources": {"type": "array", "items": {"type": "string"}, "description": "New resource GUIDs"}
            },
            "required": ["guid"]
        }
    })
}

pub fn delete_resource_group_tool() -> Value {
    json!({
        "name": "jpi_delete_resource_group",
        "description": "Delete a resource group by its GUID.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "guid": {"type": "string", "description": "Group GUID"}
            },
            "required": ["guid"]
        }
    })
}

pub fn list_resources_tool() -> Value {
    json!({
        "name": "jpi_list_resources",
        "description": "List all resources. Resources are machines, workers, or other entities that perform work.",
        "inputSchema": {
            "type": "object",
            "properties": {},
            "required": []
        }
    })
}

pub fn create_resource_tool() -> Value {
    json!({
        "name": "jpi_create_resource",
        "description": "Create a new resource.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "Name": {"type": "string", "description": "Resource name"},
                "Capacity": {"type": "number", "description": "Resource capacity (default 100)"},
                "Finite": {"type": "boolean", "description": "Whether resource is finite"},
                "ResourceGroupGuid": {"type": "string", "description": "Resource group GUID"},
                "WorktimesPerWeekday": {"type": "array", "description": "Work schedule configuration"}
            },
            "required": ["Name", "WorktimesPerWeekday"]
        }
    })
}

pub fn get_resource_tool() -> Value {
    json!({
        "name": "jpi_get_resource",
        "description": "Get a specific resource by its GUID.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "guid": {"type": "string", "description": "Resource GUID"}
            },
            "required": ["guid"]
        }
    })
}

pub fn update_resource_tool() -> Value {
    json!({
        "name": "jpi_update_resource",
        "description": "Update a resource.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "guid": {"type": "string", "description": "Resource GUID"},
                "Name": {"type": "string", "description": "New resource name"},
                "Capacity": {"type": "number", "description": "New capacity"},
                "Finite": {"type": "boolean", "description": "Whether resource is finite"},
                "Disabled": {"type": "boolean", "description": "Whether resource is disabled"}
            },
            "required": ["guid"]
        }
    })
}

pub fn delete_resource_tool() -> Value {
    json!({
        "name": "jpi_delete_resource",
        "description": "Delete a resource by its GUID.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "guid": {"type": "string", "description": "Resource GUID"}
            },
            "required": ["guid"]
        }
    })
}
