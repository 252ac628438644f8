//! Application identity printed in every log header.

use serde::{Deserialize, Serialize};

/// Who is logging. All fields are free text and never validated.
///
/// # Example
///
/// ```rust
/// use safe_fsm::log::AppInfo;
///
/// let app = AppInfo::new("Ada", "Water", "1", "4", "2");
/// assert_eq!(app.version(), "v1.4.2");
/// assert_eq!(app.signature(), "Water(v1.4.2)");
/// assert_eq!(app.banner(), "Water v1.4.2 by Ada");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppInfo {
    pub author: String,
    pub name: String,
    pub major: String,
    pub minor: String,
    pub patch: String,
}

impl AppInfo {
    pub fn new(
        author: impl Into<String>,
        name: impl Into<String>,
        major: impl Into<String>,
        minor: impl Into<String>,
        patch: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            name: name.into(),
            major: major.into(),
            minor: minor.into(),
            patch: patch.into(),
        }
    }

    pub fn version(&self) -> String {
        format!("v{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// `<name>(v<major>.<minor>.<patch>)`, as used in line headers.
    pub fn signature(&self) -> String {
        format!("{}({})", self.name, self.version())
    }

    pub fn banner(&self) -> String {
        format!("{} {} by {}", self.name, self.version(), self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_not_validated() {
        let app = AppInfo::new("", "weird name", "x", "", "rc-1");
        assert_eq!(app.signature(), "weird name(vx..rc-1)");
    }

    #[test]
    fn missing_fields_deserialize_to_empty() {
        let app: AppInfo = serde_json::from_str(r#"{"name": "Water"}"#).unwrap();
        assert_eq!(app.name, "Water");
        assert_eq!(app.version(), "v..");
    }
}
