//! Loggly logging endpoint resource.
//!
//! # Responsibilities
//! - Map CRUD operations to the versioned sub-resource path
//! - Validate required identifiers before any network call
//! - Decode records, tolerating the API's number-or-string numerics
//!
//! # Design Decisions
//! - Required-field checks run in a fixed order (service, then version, then
//!   name) so that callers see a deterministic error when several are missing
//! - Optional fields are Option<T>: absent means "leave unchanged" on update,
//!   never inferred from a zero value
//! - format_version's default of 2 is server policy; the client never sets it

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::{ApiError, ApiResult};
use crate::logging::field;

/// One configured Loggly endpoint attached to a service version.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Loggly {
    pub service_id: String,
    #[serde(deserialize_with = "field::u64_flexible")]
    pub version: u64,

    /// Unique key within the (service_id, version) scope.
    pub name: String,
    pub token: String,
    /// Log-line template.
    pub format: String,
    /// Templating syntax version (1 or 2); assigned server-side when omitted.
    #[serde(deserialize_with = "field::u32_flexible")]
    pub format_version: u32,
    /// Where in the request pipeline the entry is emitted (e.g. "waf_debug").
    #[serde(default)]
    pub placement: Option<String>,
}

/// Input for [`Client::list_loggly`].
#[derive(Debug, Clone, Default)]
pub struct ListLogglyParams {
    pub service_id: String,
    pub version: u64,
}

/// Input for [`Client::create_loggly`].
///
/// Identifier fields address the service version; the rest is the form body.
/// Omitted fields take server-side defaults.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateLoggly {
    #[serde(skip)]
    pub service_id: String,
    #[serde(skip)]
    pub version: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
}

/// Input for [`Client::get_loggly`].
#[derive(Debug, Clone, Default)]
pub struct GetLogglyParams {
    pub service_id: String,
    pub version: u64,
    pub name: String,
}

/// Input for [`Client::update_loggly`].
///
/// `name` addresses the existing record; `new_name` renames its key. Fields
/// left as None are not sent and keep their current values.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateLoggly {
    #[serde(skip)]
    pub service_id: String,
    #[serde(skip)]
    pub version: u64,
    #[serde(skip)]
    pub name: String,

    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
}

/// Input for [`Client::delete_loggly`].
#[derive(Debug, Clone, Default)]
pub struct DeleteLogglyParams {
    pub service_id: String,
    pub version: u64,
    pub name: String,
}

fn require_scope(service_id: &str, version: u64) -> ApiResult<()> {
    if service_id.is_empty() {
        return Err(ApiError::MissingService);
    }
    if version == 0 {
        return Err(ApiError::MissingVersion);
    }
    Ok(())
}

fn require_name(name: &str) -> ApiResult<()> {
    if name.is_empty() {
        return Err(ApiError::MissingName);
    }
    Ok(())
}

impl Client {
    /// List all Loggly endpoints on a service version.
    pub async fn list_loggly(&self, params: &ListLogglyParams) -> ApiResult<Vec<Loggly>> {
        require_scope(&params.service_id, params.version)?;

        let version = params.version.to_string();
        self.get_json(&[
            "service",
            &params.service_id,
            "version",
            &version,
            "logging",
            "loggly",
        ])
        .await
    }

    /// Create a Loggly endpoint on a service version.
    ///
    /// Returns the record as stored, including server-assigned defaults.
    pub async fn create_loggly(&self, input: &CreateLoggly) -> ApiResult<Loggly> {
        require_scope(&input.service_id, input.version)?;

        let version = input.version.to_string();
        self.post_form(
            &[
                "service",
                &input.service_id,
                "version",
                &version,
                "logging",
                "loggly",
            ],
            input,
        )
        .await
    }

    /// Fetch one Loggly endpoint by name.
    pub async fn get_loggly(&self, params: &GetLogglyParams) -> ApiResult<Loggly> {
        require_scope(&params.service_id, params.version)?;
        require_name(&params.name)?;

        let version = params.version.to_string();
        self.get_json(&[
            "service",
            &params.service_id,
            "version",
            &version,
            "logging",
            "loggly",
            &params.name,
        ])
        .await
    }

    /// Update a Loggly endpoint, optionally renaming it via `new_name`.
    pub async fn update_loggly(&self, input: &UpdateLoggly) -> ApiResult<Loggly> {
        require_scope(&input.service_id, input.version)?;
        require_name(&input.name)?;

        let version = input.version.to_string();
        self.put_form(
            &[
                "service",
                &input.service_id,
                "version",
                &version,
                "logging",
                "loggly",
                &input.name,
            ],
            input,
        )
        .await
    }

    /// Delete a Loggly endpoint by name.
    ///
    /// Deleting a name that does not exist surfaces the server's 404 as
    /// [`ApiError::Remote`]; callers cleaning up speculatively can inspect it
    /// with [`ApiError::is_not_found`].
    pub async fn delete_loggly(&self, params: &DeleteLogglyParams) -> ApiResult<()> {
        require_scope(&params.service_id, params.version)?;
        require_name(&params.name)?;

        let version = params.version.to_string();
        self.delete(&[
            "service",
            &params.service_id,
            "version",
            &version,
            "logging",
            "loggly",
            &params.name,
        ])
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body_skips_identifiers_and_absent_fields() {
        let input = CreateLoggly {
            service_id: "SU1Z0isx".into(),
            version: 1,
            name: Some("test-loggly".into()),
            token: Some("abcd1234".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&input).unwrap();
        let map = value.as_object().unwrap();

        assert_eq!(map.get("name").unwrap(), "test-loggly");
        assert_eq!(map.get("token").unwrap(), "abcd1234");
        assert!(!map.contains_key("service_id"));
        assert!(!map.contains_key("version"));
        assert!(!map.contains_key("format"));
        assert!(!map.contains_key("format_version"));
        assert!(!map.contains_key("placement"));
    }

    #[test]
    fn test_update_body_maps_new_name_to_name() {
        let input = UpdateLoggly {
            service_id: "SU1Z0isx".into(),
            version: 1,
            name: "test-loggly".into(),
            new_name: Some("new-test-loggly".into()),
            format_version: Some(2),
            ..Default::default()
        };
        let value = serde_json::to_value(&input).unwrap();
        let map = value.as_object().unwrap();

        // The addressed record's name stays in the path, not the body.
        assert_eq!(map.get("name").unwrap(), "new-test-loggly");
        assert_eq!(map.get("format_version").unwrap(), 2);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_record_decodes_string_numerics() {
        let json = r#"{
            "service_id": "SU1Z0isx",
            "version": "1",
            "name": "test-loggly",
            "token": "abcd1234",
            "format": "format",
            "format_version": "2",
            "placement": null
        }"#;
        let record: Loggly = serde_json::from_str(json).unwrap();
        assert_eq!(record.version, 1);
        assert_eq!(record.format_version, 2);
        assert_eq!(record.placement, None);
    }
}
