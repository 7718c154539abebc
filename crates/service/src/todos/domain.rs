use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
}

/// A named grouping; the name is its identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub name: String,
}

/// Create-todo input. Required fields are optional here so that a missing
/// field is reported as a validation error rather than a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTodo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Partial update of a todo.
///
/// A field is provided only when it carries a non-empty string; absent,
/// `null` and `""` all keep the prior value. No field can be cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCategory {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryRename {
    #[serde(default, rename = "newName")]
    pub new_name: Option<String>,
}

/// Collection sizes, used by the metrics gauges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub todos: usize,
    pub categories: usize,
}

/// Empty strings count as "not provided".
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl TodoPatch {
    pub fn apply(self, todo: &mut Todo) {
        if let Some(title) = non_empty(self.title) {
            todo.title = title;
        }
        if let Some(description) = non_empty(self.description) {
            todo.description = Some(description);
        }
        if let Some(category) = non_empty(self.category) {
            todo.category = category;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Todo {
        Todo {
            id: Uuid::new_v4(),
            title: "buy milk".into(),
            description: Some("2 liters".into()),
            category: "home".into(),
        }
    }

    fn patch(json: &str) -> TodoPatch {
        serde_json::from_str(json).expect("patch json")
    }

    #[test]
    fn absent_fields_keep_prior_values() {
        let mut todo = sample();
        let before = todo.clone();
        patch("{}").apply(&mut todo);
        assert_eq!(todo, before);
    }

    #[test]
    fn empty_strings_do_not_clear() {
        let mut todo = sample();
        let before = todo.clone();
        patch(r#"{"title":"","description":"","category":""}"#).apply(&mut todo);
        assert_eq!(todo, before);
    }

    #[test]
    fn null_fields_keep_prior_values() {
        let mut todo = sample();
        let before = todo.clone();
        patch(r#"{"description":null,"title":null,"category":null}"#).apply(&mut todo);
        assert_eq!(todo, before);
    }

    #[test]
    fn subset_update_replaces_only_given_fields() {
        let mut todo = sample();
        patch(r#"{"title":"buy bread"}"#).apply(&mut todo);
        assert_eq!(todo.title, "buy bread");
        assert_eq!(todo.description.as_deref(), Some("2 liters"));
        assert_eq!(todo.category, "home");
    }

    #[test]
    fn todo_without_description_omits_field() {
        let mut todo = sample();
        todo.description = None;
        let v = serde_json::to_value(&todo).expect("serialize");
        assert!(v.get("description").is_none());
        assert_eq!(v["id"], serde_json::Value::String(todo.id.to_string()));
    }

    #[test]
    fn rename_reads_camel_case_field() {
        let r: CategoryRename = serde_json::from_str(r#"{"newName":"job"}"#).expect("json");
        assert_eq!(r.new_name.as_deref(), Some("job"));
    }
}
