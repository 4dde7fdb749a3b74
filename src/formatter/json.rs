//! JSON formatter: ignores patterns entirely, emitting a JSON object shaped
//! by a name-mapping and a field-hierarchy instead.

use super::Formatter;
use crate::error::Error;
use crate::record::Record;
use serde_json::{Map, Value as Json};
use std::collections::HashMap;

/// Configuration for `JsonFormatter`. Left deliberately plain-data (no
/// builder) since all three fields are typically set once at construction
/// from a literal.
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Renames an attribute's output key.
    pub name_mapping: HashMap<String, String>,
    /// Nests an attribute under the given object path.
    pub field_hierarchy: HashMap<String, Vec<String>>,
    /// Appends `\n` to the emitted string.
    pub newline: bool,
}

/// Emits one record per call as a single-line JSON object.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    #[must_use]
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    /// Descends `root` through `path`, creating intermediate objects on
    /// demand, and returns the map the leaf key should be set on.
    fn descend<'a>(root: &'a mut Map<String, Json>, path: &[String]) -> &'a mut Map<String, Json> {
        let mut current = root;
        for segment in path {
            let entry = current
                .entry(segment.clone())
                .or_insert_with(|| Json::Object(Map::new()));
            current = entry
                .as_object_mut()
                .expect("field_hierarchy entries are always created as objects");
        }
        current
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, record: &Record) -> Result<String, Error> {
        let mut root = Map::new();

        for (name, value) in record.attributes() {
            let key = self
                .config
                .name_mapping
                .get(name)
                .cloned()
                .unwrap_or_else(|| name.clone());

            let path = self.config.field_hierarchy.get(name);
            let target = match path {
                Some(path) => Self::descend(&mut root, path),
                None => &mut root,
            };
            target.insert(key, value.clone().into());
        }

        let mut json = serde_json::to_string(&Json::Object(root))?;
        if self.config.newline {
            json.push('\n');
        }
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn single_attribute() {
        let fmt = JsonFormatter::new(JsonConfig::default());
        let record = Record::new().message("le message");
        assert_eq!(fmt.format(&record).unwrap(), r#"{"message":"le message"}"#);
    }

    #[test]
    fn multiple_attributes_preserve_type() {
        let fmt = JsonFormatter::new(JsonConfig::default());
        let record = Record::new().message("le message").with("timestamp", 100_500i64);
        let out = fmt.format(&record).unwrap();
        let doc: Json = serde_json::from_str(&out).unwrap();
        assert_eq!(doc["message"], "le message");
        assert_eq!(doc["timestamp"], 100_500);
    }

    #[test]
    fn name_mapping_renames_key() {
        let mut config = JsonConfig::default();
        config
            .name_mapping
            .insert("message".to_string(), "@message".to_string());
        let fmt = JsonFormatter::new(config);
        let record = Record::new().message("le message").with("timestamp", 100_500i64);
        let doc: Json = serde_json::from_str(&fmt.format(&record).unwrap()).unwrap();
        assert_eq!(doc["@message"], "le message");
        assert_eq!(doc["timestamp"], 100_500);
    }

    #[test]
    fn newline_appended_when_configured() {
        let mut config = JsonConfig::default();
        config.newline = true;
        let fmt = JsonFormatter::new(config);
        let record = Record::new().message("le message");
        assert!(fmt.format(&record).unwrap().ends_with('\n'));
    }

    #[test]
    fn field_hierarchy_nests_single_level() {
        let mut config = JsonConfig::default();
        config
            .field_hierarchy
            .insert("timestamp".to_string(), vec!["fields".to_string()]);
        let fmt = JsonFormatter::new(config);
        let record = Record::new().message("le message").with("timestamp", 100_500i64);
        let doc: Json = serde_json::from_str(&fmt.format(&record).unwrap()).unwrap();
        assert_eq!(doc["message"], "le message");
        assert_eq!(doc["fields"]["timestamp"], 100_500);
    }

    #[test]
    fn field_hierarchy_nests_multiple_levels() {
        let mut config = JsonConfig::default();
        config
            .field_hierarchy
            .insert("message".to_string(), vec!["fields".to_string()]);
        config.field_hierarchy.insert(
            "timestamp".to_string(),
            vec!["fields".to_string(), "aux".to_string()],
        );
        let fmt = JsonFormatter::new(config);
        let record = Record::new().message("le message").with("timestamp", 100_500i64);
        let doc: Json = serde_json::from_str(&fmt.format(&record).unwrap()).unwrap();
        assert_eq!(doc["fields"]["message"], "le message");
        assert_eq!(doc["fields"]["aux"]["timestamp"], 100_500);
    }
}
