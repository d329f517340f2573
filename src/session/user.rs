//! Signed-in user and navigation menu types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rest::string_or_number;

/// The signed-in user, as returned by the current-user endpoint.
///
/// Only the fields the shell reads are typed; anything else the backend
/// sends is kept in [`extra`](Self::extra).
///
/// # Example
///
/// ```rust
/// use admin_console::session::CurrentUser;
///
/// let user: CurrentUser = serde_json::from_str(
///     r#"{"name":"Alice","userid":42,"access":"admin","tenant":"acme"}"#,
/// ).unwrap();
///
/// assert_eq!(user.userid.as_deref(), Some("42"));
/// assert_eq!(user.extra["tenant"], "acme");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// User identifier, numeric ids are kept as their decimal text.
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub userid: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Job title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Access role used for route guarding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A node of the navigation menu tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Route path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Icon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Whether the entry is routed but not listed.
    #[serde(default)]
    pub hide_in_menu: bool,
    /// Nested entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MenuItem {
    /// Returns the entries shown in navigation, depth first.
    ///
    /// Hidden entries are skipped along with their children.
    #[must_use]
    pub fn visible(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        if !self.hide_in_menu {
            out.push(self);
            for child in &self.children {
                out.extend(child.visible());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_current_user_string_id() {
        let user: CurrentUser =
            serde_json::from_value(json!({"name": "Bob", "userid": "u-7"})).unwrap();
        assert_eq!(user.userid.as_deref(), Some("u-7"));
        assert!(user.extra.is_empty());
    }

    #[test]
    fn test_current_user_keeps_unknown_fields() {
        let user: CurrentUser = serde_json::from_value(json!({
            "name": "Bob",
            "phone": "123",
            "tags": [{"key": "1"}]
        }))
        .unwrap();

        assert_eq!(user.extra.get("phone"), Some(&json!("123")));
        assert!(user.extra.contains_key("tags"));

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["phone"], "123");
    }

    #[test]
    fn test_menu_tree() {
        let menu: MenuItem = serde_json::from_value(json!({
            "path": "/system",
            "name": "System",
            "children": [
                {"path": "/system/users", "name": "Users"},
                {
                    "path": "/system/hidden",
                    "hideInMenu": true,
                    "children": [{"path": "/system/hidden/child"}]
                }
            ]
        }))
        .unwrap();

        assert_eq!(menu.children.len(), 2);
        assert!(menu.children[1].hide_in_menu);

        let paths: Vec<_> = menu
            .visible()
            .iter()
            .filter_map(|item| item.path.as_deref())
            .collect();
        assert_eq!(paths, vec!["/system", "/system/users"]);
    }
}
