//! Required settings - the key/value pairs a settings document must hold
//!
//! Values are `serde_json::Value`s; their canonical text (`true`, `"x"`,
//! `3`) is what the merger searches for and inserts.

use serde_json::Value;

/// One required `"key": value` pair
#[derive(Debug, Clone, PartialEq)]
pub struct RequiredSetting {
    key: String,
    value: Value,
}

impl RequiredSetting {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The key as a JSON string literal, quotes and escapes included
    pub fn quoted_key(&self) -> String {
        Value::String(self.key.clone()).to_string()
    }

    /// Compact JSON rendering of the value
    pub fn canonical_value(&self) -> String {
        self.value.to_string()
    }

    /// `"key": value`, as inserted into documents and shown in status lines
    pub fn render(&self) -> String {
        format!("{}: {}", self.quoted_key(), self.canonical_value())
    }
}

/// Ordered set of required settings; insertion order is output order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequiredSettings {
    entries: Vec<RequiredSetting>,
}

impl RequiredSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings VS Code needs for Copilot to pick up instruction and prompt files
    pub fn vscode_defaults() -> Self {
        Self::new()
            .with("github.copilot.chat.codeGeneration.useInstructionFiles", true)
            .with("chat.promptFiles", true)
    }

    /// Add a pair. A key already present keeps its position and takes the new value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(RequiredSetting::new(key, value));
        self
    }

    pub fn insert(&mut self, setting: RequiredSetting) {
        match self.entries.iter_mut().find(|e| e.key == setting.key) {
            Some(existing) => existing.value = setting.value,
            None => self.entries.push(setting),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RequiredSetting> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<RequiredSetting> for RequiredSettings {
    fn from_iter<I: IntoIterator<Item = RequiredSetting>>(iter: I) -> Self {
        let mut settings = Self::new();
        for setting in iter {
            settings.insert(setting);
        }
        settings
    }
}
