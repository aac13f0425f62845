//! Mobile computer-use tool schema.
//!
//! The fixed set of functions the model may call. All coordinates are
//! integers on the 0-1000 grid, independent of the actual screen size.

use once_cell::sync::Lazy;
use serde_json::json;

use crate::types::{FunctionDeclaration, GeminiTool};

static DECLARATIONS: Lazy<Vec<FunctionDeclaration>> = Lazy::new(|| {
    vec![
        FunctionDeclaration {
            name: "tap_at".to_string(),
            description: "Tap at the specified coordinates on the screen".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "x": { "type": "integer", "description": "X coordinate (0-1000 grid)" },
                    "y": { "type": "integer", "description": "Y coordinate (0-1000 grid)" }
                },
                "required": ["x", "y"]
            }),
        },
        FunctionDeclaration {
            name: "double_tap_at".to_string(),
            description: "Double tap at the specified coordinates".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "x": { "type": "integer", "description": "X coordinate (0-1000)" },
                    "y": { "type": "integer", "description": "Y coordinate (0-1000)" }
                },
                "required": ["x", "y"]
            }),
        },
        FunctionDeclaration {
            name: "long_press_at".to_string(),
            description: "Long press at coordinates for context menus or drag initiation"
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "x": { "type": "integer", "description": "X coordinate (0-1000)" },
                    "y": { "type": "integer", "description": "Y coordinate (0-1000)" },
                    "duration_ms": {
                        "type": "integer",
                        "description": "Press duration in milliseconds (default 500)"
                    }
                },
                "required": ["x", "y"]
            }),
        },
        FunctionDeclaration {
            name: "swipe".to_string(),
            description: "Swipe from start to end coordinates. Use for scrolling, \
                          pull-to-refresh, or navigation gestures."
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "start_x": { "type": "integer", "description": "Start X (0-1000)" },
                    "start_y": { "type": "integer", "description": "Start Y (0-1000)" },
                    "end_x": { "type": "integer", "description": "End X (0-1000)" },
                    "end_y": { "type": "integer", "description": "End Y (0-1000)" },
                    "duration_ms": {
                        "type": "integer",
                        "description": "Swipe duration in milliseconds (default 300)"
                    }
                },
                "required": ["start_x", "start_y", "end_x", "end_y"]
            }),
        },
        FunctionDeclaration {
            name: "type_text_at".to_string(),
            description: "Type text at the specified coordinates. Taps first to focus, then types."
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "x": { "type": "integer", "description": "X coordinate to tap (0-1000)" },
                    "y": { "type": "integer", "description": "Y coordinate to tap (0-1000)" },
                    "text": { "type": "string", "description": "Text to type" },
                    "press_enter": {
                        "type": "boolean",
                        "description": "Press enter/return after typing"
                    }
                },
                "required": ["x", "y", "text"]
            }),
        },
        FunctionDeclaration {
            name: "go_back".to_string(),
            description: "Navigate back (Android back button or iOS back gesture)".to_string(),
            parameters: json!({ "type": "object", "properties": {} }),
        },
        FunctionDeclaration {
            name: "go_home".to_string(),
            description: "Go to device home screen".to_string(),
            parameters: json!({ "type": "object", "properties": {} }),
        },
        FunctionDeclaration {
            name: "open_app".to_string(),
            description: "Launch an application by name or package/bundle ID".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "app_name": {
                        "type": "string",
                        "description": "App name or bundle ID / package name"
                    }
                },
                "required": ["app_name"]
            }),
        },
        FunctionDeclaration {
            name: "open_url".to_string(),
            description: "Open a URL in the mobile browser".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "url": { "type": "string", "description": "URL to open" }
                },
                "required": ["url"]
            }),
        },
        FunctionDeclaration {
            name: "wait".to_string(),
            description: "Wait for specified duration".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "seconds": { "type": "number", "description": "Duration to wait in seconds" }
                },
                "required": ["seconds"]
            }),
        },
        FunctionDeclaration {
            name: "pinch".to_string(),
            description: "Pinch gesture for zooming. Scale < 1 zooms out, scale > 1 zooms in."
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "center_x": { "type": "integer", "description": "Center X (0-1000)" },
                    "center_y": { "type": "integer", "description": "Center Y (0-1000)" },
                    "scale": {
                        "type": "number",
                        "description": "Scale factor (0.5 = zoom out 50%, 2.0 = zoom in 100%)"
                    }
                },
                "required": ["center_x", "center_y", "scale"]
            }),
        },
        FunctionDeclaration {
            name: "scroll".to_string(),
            description: "Scroll the page/document in specified direction".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "direction": {
                        "type": "string",
                        "description": "Scroll direction: up, down, left, right"
                    },
                    "amount": {
                        "type": "integer",
                        "description": "Scroll amount (1-10, default 5)"
                    }
                },
                "required": ["direction"]
            }),
        },
    ]
});

/// The mobile tool set sent with every request.
pub fn mobile_tools() -> Vec<GeminiTool> {
    vec![GeminiTool {
        function_declarations: DECLARATIONS.clone(),
    }]
}

#[cfg(test)]
#[path = "tools_tests.rs"]
mod tests;
