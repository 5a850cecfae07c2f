use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Represents a registered user in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Payload for creating a new user.
///
/// Both fields are optional on the wire so that a missing field surfaces as a
/// validation error rather than a body rejection. Each field is read on its
/// own through `truthy_text`, so one odd value never discards the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserCreate {
    #[serde(deserialize_with = "truthy_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "truthy_text")]
    pub email: Option<String>,
}

/// Payload for updating an existing user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserPatch {
    #[serde(deserialize_with = "truthy_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "truthy_text")]
    pub email: Option<String>,
}

/// Read any JSON value as an optional text field.
///
/// Falsy values (`null`, `false`, `0`, `""`) become `None`. Other scalars keep
/// their JSON spelling (`true`, `42`), and arrays and objects are stored as
/// compact JSON text.
fn truthy_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    };
    Ok(provided(text))
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the registry
    /// * `name` - User's display name
    /// * `email` - User's email address
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Records present at startup, before any client request.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "John Doe", "john@example.com"),
        User::new(2, "Jane Smith", "jane@example.com"),
    ]
}

/// Returns the value only if it is present and non-empty.
///
/// An empty string counts as absent, both for creation and for updates.
pub fn provided(field: Option<String>) -> Option<String> {
    field.filter(|value| is_provided(Some(value.as_str())))
}

/// The single presence rule shared by creation checks and updates.
pub fn is_provided(field: Option<&str>) -> bool {
    field.is_some_and(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_as_flat_object() {
        let user = User::new(3, "A", "a@x.com");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 3, "name": "A", "email": "a@x.com" })
        );
    }

    #[test]
    fn test_payloads_tolerate_missing_and_null_fields() {
        let create: UserCreate = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
        assert_eq!(create.name.as_deref(), Some("A"));
        assert_eq!(create.email, None);

        let patch: UserPatch = serde_json::from_str(r#"{"email":null}"#).unwrap();
        assert_eq!(patch, UserPatch::default());
    }

    #[test]
    fn test_falsy_values_read_as_absent_per_field() {
        let patch: UserPatch =
            serde_json::from_str(r#"{"name":false,"email":"new@x.com"}"#).unwrap();
        assert_eq!(patch.name, None);
        assert_eq!(patch.email.as_deref(), Some("new@x.com"));

        for falsy in ["null", "false", "0", "0.0", "\"\""] {
            let body = format!(r#"{{"name":{falsy},"email":"a@x.com"}}"#);
            let create: UserCreate = serde_json::from_str(&body).unwrap();
            assert_eq!(create.name, None, "{falsy} should be absent");
            assert_eq!(create.email.as_deref(), Some("a@x.com"));
        }
    }

    #[test]
    fn test_truthy_non_strings_keep_json_spelling() {
        let patch: UserPatch =
            serde_json::from_str(r#"{"name":true,"email":[1,2]}"#).unwrap();
        assert_eq!(patch.name.as_deref(), Some("true"));
        assert_eq!(patch.email.as_deref(), Some("[1,2]"));

        let create: UserCreate = serde_json::from_str(r#"{"name":7,"email":"a@x.com"}"#).unwrap();
        assert_eq!(create.name.as_deref(), Some("7"));
    }

    #[test]
    fn test_provided_treats_empty_as_absent() {
        assert_eq!(provided(None), None);
        assert_eq!(provided(Some(String::new())), None);
        assert_eq!(provided(Some("x".into())), Some("x".to_string()));
    }

    #[test]
    fn test_seed_users() {
        let ids: Vec<u64> = seed_users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
