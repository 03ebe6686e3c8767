// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;

use disk_space_types::{ChannelValue, MethodCall};

use crate::error::{Result, ServiceError};

pub type MethodHandler = Box<dyn Fn(&MethodCall) -> ChannelValue + Send + Sync>;

/// Value answered for a method nobody registered
pub const UNKNOWN_METHOD_VALUE: ChannelValue = ChannelValue::Double(0.0);

/// Named dispatch table from method names to handlers
pub struct MethodChannel {
    name: String,
    handlers: HashMap<String, MethodHandler>,
}

impl MethodChannel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handlers: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn register<F>(&mut self, method: &str, handler: F) -> Result<()>
    where
        F: Fn(&MethodCall) -> ChannelValue + Send + Sync + 'static,
    {
        if self.handlers.contains_key(method) {
            return Err(ServiceError::DuplicateHandler(method.to_string()));
        }

        self.handlers.insert(method.to_string(), Box::new(handler));
        Ok(())
    }

    /// Registered method names, sorted
    pub fn methods(&self) -> Vec<&str> {
        let mut methods: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        methods.sort_unstable();
        methods
    }

    /// Answer `call` with exactly one value.
    pub fn invoke(&self, call: &MethodCall) -> ChannelValue {
        match self.handlers.get(&call.method) {
            Some(handler) => {
                let value = handler(call);
                tracing::debug!("{}: {} -> {:?}", self.name, call.method, value);
                value
            }
            None => {
                tracing::debug!("{}: unrecognized method {}", self.name, call.method);
                UNKNOWN_METHOD_VALUE
            }
        }
    }
}

impl std::fmt::Debug for MethodChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodChannel")
            .field("name", &self.name)
            .field("methods", &self.methods())
            .finish()
    }
}
