//! Typed product entities and their operations.
//!
//! Each entity owns its endpoint paths and payload envelope. Responses
//! are deserialized leniently: the server returns far more attributes
//! than the suite asserts on, and unknown fields are ignored.

use serde::Deserialize;
use serde_json::{json, Value};

use super::client::{results, Client};
use super::tasks::Task;
use crate::result::ValidarResult;

fn parse<T: serde::de::DeserializeOwned>(value: Value) -> ValidarResult<T> {
    Ok(serde_json::from_value(value)?)
}

/// Reference to a related entity inside a server response
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EntityRef {
    /// Server-assigned identifier
    pub id: u64,
    /// Display name, when the server includes one
    #[serde(default)]
    pub name: Option<String>,
}

// ============================================================================
// Infrastructure entities (api/v2)
// ============================================================================

/// An organization
#[derive(Debug, Clone, Deserialize)]
pub struct Organization {
    /// Server-assigned identifier
    pub id: u64,
    /// Name
    pub name: String,
    /// URL-safe label
    #[serde(default)]
    pub label: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
}

impl Organization {
    /// Create an organization
    pub async fn create(api: &Client, name: &str) -> ValidarResult<Self> {
        let body = json!({ "organization": { "name": name } });
        parse(api.post("api/v2/organizations", &body).await?)
    }

    /// Read an organization by id
    pub async fn read(api: &Client, id: u64) -> ValidarResult<Self> {
        parse(api.get(&format!("api/v2/organizations/{id}")).await?)
    }

    /// Delete an organization
    pub async fn delete(api: &Client, id: u64) -> ValidarResult<()> {
        let _ = api.delete(&format!("api/v2/organizations/{id}")).await?;
        Ok(())
    }
}

/// A puppet environment
#[derive(Debug, Clone, Deserialize)]
pub struct Environment {
    /// Server-assigned identifier
    pub id: u64,
    /// Name
    pub name: String,
}

impl Environment {
    /// Create an environment
    pub async fn create(api: &Client, name: &str) -> ValidarResult<Self> {
        let body = json!({ "environment": { "name": name } });
        parse(api.post("api/v2/environments", &body).await?)
    }

    /// Read an environment by id
    pub async fn read(api: &Client, id: u64) -> ValidarResult<Self> {
        parse(api.get(&format!("api/v2/environments/{id}")).await?)
    }

    /// Rename an environment
    pub async fn update(api: &Client, id: u64, new_name: &str) -> ValidarResult<Self> {
        let body = json!({ "environment": { "name": new_name } });
        parse(api.put(&format!("api/v2/environments/{id}"), &body).await?)
    }

    /// Delete an environment
    pub async fn delete(api: &Client, id: u64) -> ValidarResult<()> {
        let _ = api.delete(&format!("api/v2/environments/{id}")).await?;
        Ok(())
    }

    /// Search environments by exact name
    pub async fn search(api: &Client, name: &str) -> ValidarResult<Vec<Self>> {
        let value = api
            .get_with_query("api/v2/environments", &[("search", format!("name={name:?}"))])
            .await?;
        results(&value)
    }
}

/// An installation medium
#[derive(Debug, Clone, Deserialize)]
pub struct Medium {
    /// Server-assigned identifier
    pub id: u64,
    /// Name
    pub name: String,
    /// Media URL
    pub path: String,
    /// Operating system family
    #[serde(default)]
    pub os_family: Option<String>,
}

impl Medium {
    /// Create a medium
    pub async fn create(
        api: &Client,
        name: &str,
        path: &str,
        os_family: &str,
    ) -> ValidarResult<Self> {
        let body = json!({
            "medium": { "name": name, "path": path, "os_family": os_family }
        });
        parse(api.post("api/v2/media", &body).await?)
    }

    /// Read a medium by id
    pub async fn read(api: &Client, id: u64) -> ValidarResult<Self> {
        parse(api.get(&format!("api/v2/media/{id}")).await?)
    }

    /// Update a medium's attributes
    pub async fn update(api: &Client, id: u64, medium: &Value) -> ValidarResult<Self> {
        let body = json!({ "medium": medium });
        parse(api.put(&format!("api/v2/media/{id}"), &body).await?)
    }

    /// Delete a medium
    pub async fn delete(api: &Client, id: u64) -> ValidarResult<()> {
        let _ = api.delete(&format!("api/v2/media/{id}")).await?;
        Ok(())
    }
}

/// The built-in capsule/proxy attached to every deployment
#[derive(Debug, Clone, Deserialize)]
pub struct SmartProxy {
    /// Server-assigned identifier
    pub id: u64,
    /// Name
    pub name: String,
    /// Proxy URL
    #[serde(default)]
    pub url: String,
}

impl SmartProxy {
    /// List all smart proxies. Every deployment ships a built-in one,
    /// so this never comes back empty on a healthy server.
    pub async fn search(api: &Client) -> ValidarResult<Vec<Self>> {
        let value = api.get("api/v2/smart_proxies").await?;
        results(&value)
    }

    /// Issue an empty update and return the server's full echo of the
    /// entity, attribute names included.
    pub async fn update_echo(api: &Client, id: u64) -> ValidarResult<Value> {
        api.put(&format!("api/v2/smart_proxies/{id}"), &json!({ "smart_proxy": {} }))
            .await
    }
}

// ============================================================================
// Content entities (content/api/v2)
// ============================================================================

/// A lifecycle environment
#[derive(Debug, Clone, Deserialize)]
pub struct LifecycleEnvironment {
    /// Server-assigned identifier
    pub id: u64,
    /// Name
    pub name: String,
    /// URL-safe label
    #[serde(default)]
    pub label: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Owning organization
    #[serde(default)]
    pub organization: Option<EntityRef>,
    /// The stage content is promoted from; Library for first stages
    #[serde(default)]
    pub prior: Option<EntityRef>,
}

/// Fields for creating a lifecycle environment
#[derive(Debug, Clone, Default)]
pub struct LifecycleEnvironmentCreate {
    /// Name (required)
    pub name: String,
    /// URL-safe label
    pub label: Option<String>,
    /// Description
    pub description: Option<String>,
    /// Prior environment id; the server defaults to Library
    pub prior_id: Option<u64>,
}

impl LifecycleEnvironment {
    /// Create a lifecycle environment inside an organization
    pub async fn create(
        api: &Client,
        org_id: u64,
        fields: &LifecycleEnvironmentCreate,
    ) -> ValidarResult<Self> {
        let mut body = json!({
            "organization_id": org_id,
            "name": fields.name,
        });
        if let Some(ref label) = fields.label {
            body["label"] = json!(label);
        }
        if let Some(ref description) = fields.description {
            body["description"] = json!(description);
        }
        if let Some(prior_id) = fields.prior_id {
            body["prior_id"] = json!(prior_id);
        }
        parse(api.post("content/api/v2/environments", &body).await?)
    }

    /// Read a lifecycle environment by id
    pub async fn read(api: &Client, id: u64) -> ValidarResult<Self> {
        parse(api.get(&format!("content/api/v2/environments/{id}")).await?)
    }

    /// Update name or description
    pub async fn update(api: &Client, id: u64, fields: &Value) -> ValidarResult<Self> {
        parse(
            api.put(&format!("content/api/v2/environments/{id}"), fields)
                .await?,
        )
    }

    /// Delete a lifecycle environment
    pub async fn delete(api: &Client, id: u64) -> ValidarResult<()> {
        let _ = api
            .delete(&format!("content/api/v2/environments/{id}"))
            .await?;
        Ok(())
    }

    /// List the promotion paths of an organization
    pub async fn paths(api: &Client, org_id: u64) -> ValidarResult<Value> {
        api.get(&format!(
            "content/api/v2/organizations/{org_id}/environments/paths"
        ))
        .await
    }
}

/// A product: the container repositories belong to
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    /// Server-assigned identifier
    pub id: u64,
    /// Name
    pub name: String,
    /// Owning organization
    #[serde(default)]
    pub organization: Option<EntityRef>,
    /// Repositories in this product
    #[serde(default)]
    pub repositories: Vec<EntityRef>,
}

impl Product {
    /// Create a product inside an organization
    pub async fn create(api: &Client, org_id: u64, name: &str) -> ValidarResult<Self> {
        let body = json!({ "organization_id": org_id, "name": name });
        parse(api.post("content/api/v2/products", &body).await?)
    }

    /// Read a product by id
    pub async fn read(api: &Client, id: u64) -> ValidarResult<Self> {
        parse(api.get(&format!("content/api/v2/products/{id}")).await?)
    }

    /// Delete a product
    pub async fn delete(api: &Client, id: u64) -> ValidarResult<()> {
        let _ = api.delete(&format!("content/api/v2/products/{id}")).await?;
        Ok(())
    }
}

/// Repository content types the suite exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// Yum/RPM content
    Yum,
    /// Container images pulled from an upstream registry
    Container,
}

impl ContentType {
    /// Wire name of the content type
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yum => "yum",
            Self::Container => "container",
        }
    }
}

/// A repository
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// Server-assigned identifier
    pub id: u64,
    /// Name
    pub name: String,
    /// Content type wire name
    pub content_type: String,
    /// Feed URL
    #[serde(default)]
    pub url: Option<String>,
    /// Upstream image name, for container repositories
    #[serde(default)]
    pub upstream_name: Option<String>,
    /// Owning product
    #[serde(default)]
    pub product: Option<EntityRef>,
    /// Unit counts per content kind, populated after a sync
    #[serde(default)]
    pub content_counts: std::collections::HashMap<String, u64>,
}

/// Fields for creating a repository
#[derive(Debug, Clone)]
pub struct RepositoryCreate {
    /// Name (required)
    pub name: String,
    /// Content type
    pub content_type: ContentType,
    /// Feed URL
    pub url: Option<String>,
    /// Upstream image name, required for container repositories
    pub upstream_name: Option<String>,
    /// GPG key to attach
    pub gpg_key_id: Option<u64>,
}

impl RepositoryCreate {
    /// A yum repository with a feed URL
    #[must_use]
    pub fn yum(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content_type: ContentType::Yum,
            url: Some(url.into()),
            upstream_name: None,
            gpg_key_id: None,
        }
    }

    /// A container repository mirroring an upstream image
    #[must_use]
    pub fn container(
        name: impl Into<String>,
        url: impl Into<String>,
        upstream_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: ContentType::Container,
            url: Some(url.into()),
            upstream_name: Some(upstream_name.into()),
            gpg_key_id: None,
        }
    }

    /// Attach a GPG key
    #[must_use]
    pub const fn with_gpg_key(mut self, gpg_key_id: u64) -> Self {
        self.gpg_key_id = Some(gpg_key_id);
        self
    }

    pub(crate) fn to_body(&self, product_id: u64) -> Value {
        let mut body = json!({
            "product_id": product_id,
            "name": self.name,
            "content_type": self.content_type.as_str(),
        });
        if let Some(ref url) = self.url {
            body["url"] = json!(url);
        }
        if let Some(ref upstream) = self.upstream_name {
            body["upstream_name"] = json!(upstream);
        }
        if let Some(gpg_key_id) = self.gpg_key_id {
            body["gpg_key_id"] = json!(gpg_key_id);
        }
        body
    }
}

impl Repository {
    /// Create a repository inside a product
    pub async fn create(
        api: &Client,
        product_id: u64,
        fields: &RepositoryCreate,
    ) -> ValidarResult<Self> {
        parse(
            api.post("content/api/v2/repositories", &fields.to_body(product_id))
                .await?,
        )
    }

    /// Read a repository by id
    pub async fn read(api: &Client, id: u64) -> ValidarResult<Self> {
        parse(api.get(&format!("content/api/v2/repositories/{id}")).await?)
    }

    /// Update repository attributes
    pub async fn update(api: &Client, id: u64, fields: &Value) -> ValidarResult<Self> {
        parse(
            api.put(&format!("content/api/v2/repositories/{id}"), fields)
                .await?,
        )
    }

    /// Delete a repository
    pub async fn delete(api: &Client, id: u64) -> ValidarResult<()> {
        let _ = api
            .delete(&format!("content/api/v2/repositories/{id}"))
            .await?;
        Ok(())
    }

    /// Kick off a sync; await completion with [`super::tasks::wait_for`]
    pub async fn sync(api: &Client, id: u64) -> ValidarResult<Task> {
        parse(
            api.post(&format!("content/api/v2/repositories/{id}/sync"), &json!({}))
                .await?,
        )
    }
}

/// A GPG key scoped to an organization
#[derive(Debug, Clone, Deserialize)]
pub struct GpgKey {
    /// Server-assigned identifier
    pub id: u64,
    /// Name
    pub name: String,
    /// Owning organization
    #[serde(default)]
    pub organization: Option<EntityRef>,
}

impl GpgKey {
    /// Create a GPG key inside an organization
    pub async fn create(
        api: &Client,
        org_id: u64,
        name: &str,
        content: &str,
    ) -> ValidarResult<Self> {
        let body = json!({
            "organization_id": org_id,
            "name": name,
            "content": content,
        });
        parse(api.post("content/api/v2/gpg_keys", &body).await?)
    }

    /// Read a GPG key by id
    pub async fn read(api: &Client, id: u64) -> ValidarResult<Self> {
        parse(api.get(&format!("content/api/v2/gpg_keys/{id}")).await?)
    }

    /// Search the GPG keys of one organization
    pub async fn search(api: &Client, org_id: u64) -> ValidarResult<Vec<Self>> {
        let value = api
            .get_with_query(
                "content/api/v2/gpg_keys",
                &[("organization_id", org_id.to_string())],
            )
            .await?;
        results(&value)
    }
}

/// A content view
#[derive(Debug, Clone, Deserialize)]
pub struct ContentView {
    /// Server-assigned identifier
    pub id: u64,
    /// Name
    pub name: String,
    /// Owning organization
    #[serde(default)]
    pub organization: Option<EntityRef>,
    /// Repositories bundled by this view
    #[serde(default)]
    pub repository_ids: Vec<u64>,
    /// Published versions, oldest first
    #[serde(default)]
    pub versions: Vec<EntityRef>,
}

impl ContentView {
    /// Create a content view inside an organization
    pub async fn create(api: &Client, org_id: u64, name: &str) -> ValidarResult<Self> {
        let body = json!({ "organization_id": org_id, "name": name });
        parse(api.post("content/api/v2/content_views", &body).await?)
    }

    /// Read a content view by id
    pub async fn read(api: &Client, id: u64) -> ValidarResult<Self> {
        parse(api.get(&format!("content/api/v2/content_views/{id}")).await?)
    }

    /// Replace the repository set of the view
    pub async fn set_repositories(
        api: &Client,
        id: u64,
        repository_ids: &[u64],
    ) -> ValidarResult<Self> {
        let body = json!({ "repository_ids": repository_ids });
        parse(
            api.put(&format!("content/api/v2/content_views/{id}"), &body)
                .await?,
        )
    }

    /// Publish a new version; await completion with
    /// [`super::tasks::wait_for`]
    pub async fn publish(api: &Client, id: u64) -> ValidarResult<Task> {
        parse(
            api.post(
                &format!("content/api/v2/content_views/{id}/publish"),
                &json!({}),
            )
            .await?,
        )
    }

    /// Disassociate the view from a lifecycle environment
    pub async fn delete_from_environment(
        api: &Client,
        id: u64,
        environment_id: u64,
    ) -> ValidarResult<Task> {
        parse(
            api.delete(&format!(
                "content/api/v2/content_views/{id}/environments/{environment_id}"
            ))
            .await?,
        )
    }

    /// Delete a content view
    pub async fn delete(api: &Client, id: u64) -> ValidarResult<()> {
        let _ = api
            .delete(&format!("content/api/v2/content_views/{id}"))
            .await?;
        Ok(())
    }
}

/// A published version of a content view
#[derive(Debug, Clone, Deserialize)]
pub struct ContentViewVersion {
    /// Server-assigned identifier
    pub id: u64,
    /// Dotted version string, e.g. `1.0`
    #[serde(default)]
    pub version: String,
    /// Lifecycle environments this version is available in
    #[serde(default)]
    pub environments: Vec<EntityRef>,
}

impl ContentViewVersion {
    /// Read a content view version by id
    pub async fn read(api: &Client, id: u64) -> ValidarResult<Self> {
        parse(
            api.get(&format!("content/api/v2/content_view_versions/{id}"))
                .await?,
        )
    }

    /// Promote this version into a lifecycle environment.
    ///
    /// Promoting the built-in default view's version, or promoting into
    /// a nonexistent environment, fails with an HTTP error — the
    /// expected outcome of the negative promotion tests.
    pub async fn promote(api: &Client, id: u64, environment_id: i64) -> ValidarResult<Task> {
        let body = json!({ "environment_ids": [environment_id] });
        parse(
            api.post(
                &format!("content/api/v2/content_view_versions/{id}/promote"),
                &body,
            )
            .await?,
        )
    }

    /// Delete a version. Fails while the version is still attached to
    /// any lifecycle environment.
    pub async fn delete(api: &Client, id: u64) -> ValidarResult<()> {
        let _ = api
            .delete(&format!("content/api/v2/content_view_versions/{id}"))
            .await?;
        Ok(())
    }
}

/// An activation key binding a content view/environment pair
#[derive(Debug, Clone, Deserialize)]
pub struct ActivationKey {
    /// Server-assigned identifier
    pub id: u64,
    /// Name
    pub name: String,
    /// Bound content view
    #[serde(default)]
    pub content_view_id: Option<u64>,
    /// Bound lifecycle environment
    #[serde(default)]
    pub environment_id: Option<u64>,
}

impl ActivationKey {
    /// Create an activation key, optionally bound to a content
    /// view/environment pair
    pub async fn create(
        api: &Client,
        org_id: u64,
        name: &str,
        content_view_id: Option<u64>,
        environment_id: Option<u64>,
    ) -> ValidarResult<Self> {
        let mut body = json!({ "organization_id": org_id, "name": name });
        if let Some(cv) = content_view_id {
            body["content_view_id"] = json!(cv);
        }
        if let Some(env) = environment_id {
            body["environment_id"] = json!(env);
        }
        parse(api.post("content/api/v2/activation_keys", &body).await?)
    }

    /// Read an activation key by id
    pub async fn read(api: &Client, id: u64) -> ValidarResult<Self> {
        parse(
            api.get(&format!("content/api/v2/activation_keys/{id}"))
                .await?,
        )
    }

    /// Delete an activation key
    pub async fn delete(api: &Client, id: u64) -> ValidarResult<()> {
        let _ = api
            .delete(&format!("content/api/v2/activation_keys/{id}"))
            .await?;
        Ok(())
    }
}
