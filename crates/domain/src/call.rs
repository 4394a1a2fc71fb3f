//! Remote call — a server API invocation awaiting transport.
//!
//! The panel server exposes a single dispatch endpoint that accepts a POST
//! with one form field, `json`, holding a JSON triple
//! `[function_name, [], kwargs]`. Positional arguments are always empty;
//! every parameter travels as a keyword argument.

use serde_json::{Map, Value};

/// A pending server API call: a function name plus keyword arguments.
///
/// Created per UI action and discarded after the response arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCall {
    function: String,
    kwargs: Map<String, Value>,
}

impl RemoteCall {
    /// Create a call with no keyword arguments.
    #[must_use]
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            kwargs: Map::new(),
        }
    }

    /// Add a keyword argument.
    #[must_use]
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.kwargs.insert(name.into(), value.into());
        self
    }

    /// The remote function name.
    #[must_use]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// A `press_remote` call for the given device and button.
    #[must_use]
    pub fn press_remote(device: &str, button: &str) -> Self {
        Self::new("press_remote")
            .kwarg("device", device)
            .kwarg("button", button)
    }

    /// A `set_light_scene` call.
    #[must_use]
    pub fn set_light_scene(scene_name: &str) -> Self {
        Self::new("set_light_scene").kwarg("scene_name", scene_name)
    }

    /// A `turn_on_switch` call.
    #[must_use]
    pub fn turn_on_switch(switch_name: &str) -> Self {
        Self::new("turn_on_switch").kwarg("switch_name", switch_name)
    }

    /// A `turn_off_switch` call.
    #[must_use]
    pub fn turn_off_switch(switch_name: &str) -> Self {
        Self::new("turn_off_switch").kwarg("switch_name", switch_name)
    }

    /// Serialize as the wire triple `[function_name, [], kwargs]`.
    #[must_use]
    pub fn to_wire_json(&self) -> String {
        let triple = Value::Array(vec![
            Value::String(self.function.clone()),
            Value::Array(Vec::new()),
            Value::Object(self.kwargs.clone()),
        ]);
        triple.to_string()
    }

    /// Encode as the POST form body `json=<url-encoded wire triple>`.
    #[must_use]
    pub fn to_form_body(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("json", &self.to_wire_json())
            .finish()
    }
}
