//! Content view version workflows over the REST API.
//!
//! Publication and promotion against a live deployment: these suites
//! create their fixtures per test and assert both the happy paths and
//! the promotion/deletion rules the server must enforce.

use validar::api::entities::{
    ContentView, ContentViewVersion, LifecycleEnvironment, LifecycleEnvironmentCreate,
    Organization, Product, Repository, RepositoryCreate,
};
use validar::api::{tasks, Client};
use validar::ui::WaitOptions;
use validar::{DataFactory, Settings};

const SYNC_TIMEOUT_MS: u64 = 600_000;

fn live() -> (Settings, Client, DataFactory) {
    validar::init_tracing();
    let settings = Settings::from_env().expect("VALIDAR_SERVER_URL must point at a deployment");
    let client = Client::new(&settings).expect("client should build");
    (settings, client, DataFactory::from_entropy())
}

fn task_wait() -> WaitOptions {
    WaitOptions::new()
        .with_timeout(SYNC_TIMEOUT_MS)
        .with_poll_interval(1_000)
}

async fn publish_and_read(api: &Client, view: &ContentView) -> ContentView {
    let task = ContentView::publish(api, view.id).await.expect("publish");
    tasks::wait_for(api, &task.id, task_wait())
        .await
        .expect("publish task");
    ContentView::read(api, view.id).await.expect("re-read view")
}

#[tokio::test]
#[ignore = "requires a live Forja server"]
async fn test_negative_promote_default_version() {
    let (_settings, api, mut data) = live();
    let org = Organization::create(&api, &data.unique_name("org"))
        .await
        .unwrap();
    let lce = LifecycleEnvironment::create(
        &api,
        org.id,
        &LifecycleEnvironmentCreate {
            name: data.unique_name("lce"),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    // Version 1 is the built-in default view's version; promoting it is
    // rejected.
    let err = ContentViewVersion::promote(&api, 1, lce.id as i64)
        .await
        .unwrap_err();
    assert!(err.is_api_error(), "expected an HTTP error, got {err}");
}

#[tokio::test]
#[ignore = "requires a live Forja server"]
async fn test_negative_promote_into_invalid_environment() {
    let (_settings, api, _data) = live();
    let err = ContentViewVersion::promote(&api, 1, -1).await.unwrap_err();
    assert!(err.is_api_error(), "expected an HTTP error, got {err}");
}

#[tokio::test]
#[ignore = "requires a live Forja server"]
async fn test_delete_version() {
    let (_settings, api, mut data) = live();
    let org = Organization::create(&api, &data.unique_name("org"))
        .await
        .unwrap();
    let product = Product::create(&api, org.id, &data.unique_name("prod"))
        .await
        .unwrap();
    let repo = Repository::create(
        &api,
        product.id,
        &RepositoryCreate::yum(data.unique_name("repo"), data.url()),
    )
    .await
    .unwrap();
    let sync = Repository::sync(&api, repo.id).await.unwrap();
    tasks::wait_for(&api, &sync.id, task_wait()).await.unwrap();

    let view = ContentView::create(&api, org.id, &data.unique_name("cv"))
        .await
        .unwrap();
    let view = ContentView::set_repositories(&api, view.id, &[repo.id])
        .await
        .unwrap();
    let view = publish_and_read(&api, &view).await;
    assert_eq!(view.versions.len(), 1);

    let version = ContentViewVersion::read(&api, view.versions[0].id)
        .await
        .unwrap();
    assert_eq!(version.environments.len(), 1);

    // Disassociate from Library, then the version can go.
    let task = ContentView::delete_from_environment(&api, view.id, version.environments[0].id)
        .await
        .unwrap();
    tasks::wait_for(&api, &task.id, task_wait()).await.unwrap();
    ContentViewVersion::delete(&api, version.id).await.unwrap();

    let view = ContentView::read(&api, view.id).await.unwrap();
    assert!(view.versions.is_empty(), "version should be gone");
}

#[tokio::test]
#[ignore = "requires a live Forja server"]
async fn test_delete_version_promoted_beyond_library() {
    let (_settings, api, mut data) = live();
    let org = Organization::create(&api, &data.unique_name("org"))
        .await
        .unwrap();
    let view = ContentView::create(&api, org.id, &data.unique_name("cv"))
        .await
        .unwrap();
    let view = publish_and_read(&api, &view).await;
    let lce = LifecycleEnvironment::create(
        &api,
        org.id,
        &LifecycleEnvironmentCreate {
            name: data.unique_name("lce"),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let promote = ContentViewVersion::promote(&api, view.versions[0].id, lce.id as i64)
        .await
        .unwrap();
    tasks::wait_for(&api, &promote.id, task_wait()).await.unwrap();

    let version = ContentViewVersion::read(&api, view.versions[0].id)
        .await
        .unwrap();
    assert_eq!(version.environments.len(), 2);

    // Walk back out of every environment, newest first, then delete.
    for environment in version.environments.iter().rev() {
        let task = ContentView::delete_from_environment(&api, view.id, environment.id)
            .await
            .unwrap();
        tasks::wait_for(&api, &task.id, task_wait()).await.unwrap();
    }
    ContentViewVersion::delete(&api, version.id).await.unwrap();
    let view = ContentView::read(&api, view.id).await.unwrap();
    assert!(view.versions.is_empty());
}

#[tokio::test]
#[ignore = "requires a live Forja server"]
async fn test_negative_delete_version_still_in_environment() {
    let (_settings, api, mut data) = live();
    let org = Organization::create(&api, &data.unique_name("org"))
        .await
        .unwrap();
    let view = ContentView::create(&api, org.id, &data.unique_name("cv"))
        .await
        .unwrap();
    let view = publish_and_read(&api, &view).await;
    assert_eq!(view.versions.len(), 1);

    let err = ContentViewVersion::delete(&api, view.versions[0].id)
        .await
        .unwrap_err();
    assert!(err.is_api_error(), "expected an HTTP error, got {err}");

    // The version must still be attached.
    let view = ContentView::read(&api, view.id).await.unwrap();
    assert_eq!(view.versions.len(), 1);
}
