//! Repository CRUD over the REST API, container repositories included.
//!
//! Container repository names mirror registry naming rules: 3–30
//! lowercase alphanumeric characters (plus `-`, `_`, `.`) per path
//! segment and at most one `/`. The server enforces them; the suite
//! generates samples on both sides of the rules.

use validar::api::entities::{Organization, Product, Repository, RepositoryCreate};
use validar::api::{tasks, Client};
use validar::ui::WaitOptions;
use validar::{DataFactory, Settings, StringKind};

const REGISTRY_URL: &str = "https://registry.example.com";
const SYNC_TIMEOUT_MS: u64 = 600_000;

fn live() -> (Client, DataFactory) {
    validar::init_tracing();
    let settings = Settings::from_env().expect("VALIDAR_SERVER_URL must point at a deployment");
    let client = Client::new(&settings).expect("client should build");
    (client, DataFactory::from_entropy())
}

fn task_wait() -> WaitOptions {
    WaitOptions::new()
        .with_timeout(SYNC_TIMEOUT_MS)
        .with_poll_interval(1_000)
}

/// Upstream names the registry naming rules accept
fn valid_upstream_names(data: &mut DataFactory) -> Vec<String> {
    vec![
        data.alphanumeric(3).to_lowercase(),
        data.alphanumeric(30).to_lowercase(),
        format!(
            "{}/{}",
            data.alphanumeric(4).to_lowercase(),
            data.alphanumeric(3).to_lowercase()
        ),
        format!(
            "{}/{}",
            data.alphanumeric(30).to_lowercase(),
            data.alphanumeric(30).to_lowercase()
        ),
        format!(
            "{}-{}_{}.{}",
            data.alphanumeric(3).to_lowercase(),
            data.alphanumeric(3).to_lowercase(),
            data.alphanumeric(3).to_lowercase(),
            data.alphanumeric(3).to_lowercase()
        ),
    ]
}

/// Upstream names the registry naming rules reject
fn invalid_upstream_names(data: &mut DataFactory) -> Vec<String> {
    vec![
        data.alphanumeric(2).to_lowercase(),
        data.alphanumeric(31).to_lowercase(),
        format!(
            "{}/{}",
            data.alphanumeric(31).to_lowercase(),
            data.alphanumeric(30).to_lowercase()
        ),
        format!(
            "{}+{}/{}",
            data.alphanumeric(4).to_lowercase(),
            data.alphanumeric(4).to_lowercase(),
            data.alphanumeric(4).to_lowercase()
        ),
    ]
}

async fn org_and_product(api: &Client, data: &mut DataFactory) -> (Organization, Product) {
    let org = Organization::create(api, &data.unique_name("org"))
        .await
        .unwrap();
    let product = Product::create(api, org.id, &data.unique_name("prod"))
        .await
        .unwrap();
    (org, product)
}

#[tokio::test]
#[ignore = "requires a live Forja server"]
async fn test_create_container_repo_for_every_name_kind() {
    let (api, mut data) = live();
    let (_org, product) = org_and_product(&api, &mut data).await;
    for kind in [StringKind::Alpha, StringKind::Alphanumeric, StringKind::Utf8] {
        let name = data.string(kind, 15);
        let repo = Repository::create(
            &api,
            product.id,
            &RepositoryCreate::container(&name, REGISTRY_URL, "busybox"),
        )
        .await
        .unwrap();
        assert_eq!(repo.name, name);
        assert_eq!(repo.content_type, "container");
        assert_eq!(repo.upstream_name.as_deref(), Some("busybox"));
    }
}

#[tokio::test]
#[ignore = "requires a live Forja server"]
async fn test_create_container_repo_valid_upstream_names() {
    let (api, mut data) = live();
    let (_org, product) = org_and_product(&api, &mut data).await;
    for upstream in valid_upstream_names(&mut data) {
        let repo = Repository::create(
            &api,
            product.id,
            &RepositoryCreate::container(data.unique_name("repo"), REGISTRY_URL, &upstream),
        )
        .await
        .unwrap();
        assert_eq!(repo.upstream_name.as_deref(), Some(upstream.as_str()));
    }
}

#[tokio::test]
#[ignore = "requires a live Forja server"]
async fn test_negative_create_container_repo_invalid_upstream_names() {
    let (api, mut data) = live();
    let (_org, product) = org_and_product(&api, &mut data).await;
    for upstream in invalid_upstream_names(&mut data) {
        let err = Repository::create(
            &api,
            product.id,
            &RepositoryCreate::container(data.unique_name("repo"), REGISTRY_URL, &upstream),
        )
        .await
        .unwrap_err();
        assert!(
            err.is_api_error(),
            "upstream {upstream:?} should be rejected, got {err}"
        );
    }
}

#[tokio::test]
#[ignore = "requires a live Forja server"]
async fn test_create_multiple_repos_in_one_product() {
    let (api, mut data) = live();
    let (_org, product) = org_and_product(&api, &mut data).await;
    let mut created = Vec::new();
    for _ in 0..3 {
        let repo = Repository::create(
            &api,
            product.id,
            &RepositoryCreate::container(data.unique_name("repo"), REGISTRY_URL, "busybox"),
        )
        .await
        .unwrap();
        created.push(repo.id);
        let product = Product::read(&api, product.id).await.unwrap();
        for id in &created {
            assert!(
                product.repositories.iter().any(|r| r.id == *id),
                "repository {id} should belong to the product"
            );
        }
    }
}

#[tokio::test]
#[ignore = "requires a live Forja server"]
async fn test_sync_container_repo_populates_counts() {
    let (api, mut data) = live();
    let (_org, product) = org_and_product(&api, &mut data).await;
    let repo = Repository::create(
        &api,
        product.id,
        &RepositoryCreate::container(data.unique_name("repo"), REGISTRY_URL, "busybox"),
    )
    .await
    .unwrap();
    let task = Repository::sync(&api, repo.id).await.unwrap();
    tasks::wait_for(&api, &task.id, task_wait()).await.unwrap();

    let repo = Repository::read(&api, repo.id).await.unwrap();
    assert!(
        repo.content_counts.get("container_image").copied().unwrap_or(0) >= 1,
        "sync should import at least one image"
    );
}

#[tokio::test]
#[ignore = "requires a live Forja server"]
async fn test_update_repo_name_and_upstream() {
    let (api, mut data) = live();
    let (_org, product) = org_and_product(&api, &mut data).await;
    let repo = Repository::create(
        &api,
        product.id,
        &RepositoryCreate::container(data.unique_name("repo"), REGISTRY_URL, "busybox"),
    )
    .await
    .unwrap();

    let new_name = data.unique_name("renamed");
    let repo = Repository::update(&api, repo.id, &serde_json::json!({ "name": new_name }))
        .await
        .unwrap();
    assert_eq!(repo.name, new_name);

    let repo = Repository::update(
        &api,
        repo.id,
        &serde_json::json!({ "upstream_name": "fedora/ssh" }),
    )
    .await
    .unwrap();
    assert_eq!(repo.upstream_name.as_deref(), Some("fedora/ssh"));
}

#[tokio::test]
#[ignore = "requires a live Forja server"]
async fn test_delete_repo_then_read_fails() {
    let (api, mut data) = live();
    let (_org, product) = org_and_product(&api, &mut data).await;
    let repo = Repository::create(
        &api,
        product.id,
        &RepositoryCreate::container(data.unique_name("repo"), REGISTRY_URL, "busybox"),
    )
    .await
    .unwrap();
    Repository::delete(&api, repo.id).await.unwrap();
    let err = Repository::read(&api, repo.id).await.unwrap_err();
    assert!(err.is_api_error(), "deleted repository should 404");
}
