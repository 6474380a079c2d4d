//! UI smoke flow against a live deployment, with a real browser.
//!
//! Built only with the `browser` feature; the same page-object code
//! that the mock-DOM suites exercise drives Chromium over CDP here.

#![cfg(feature = "browser")]

use validar::ui::page::{Browser, BrowserOptions};
use validar::ui::pages::EnvironmentPage;
use validar::ui::{factory, Session};
use validar::{DataFactory, Settings};

#[tokio::test]
#[ignore = "requires a live Forja server and a local chromium"]
async fn test_environment_crud_through_the_browser() {
    let settings = Settings::from_env().expect("VALIDAR_SERVER_URL must point at a deployment");
    let mut data = DataFactory::from_entropy();
    let name = data.unique_name("env");

    let browser = Browser::launch(BrowserOptions::from_settings(&settings))
        .await
        .expect("browser should launch");
    let page = browser.new_page().await.expect("page should open");

    Session::run(&settings, page, |ui| {
        let name = name.clone();
        async move {
            factory::make_environment(&ui, &name, &[], true).await?;
            let env = EnvironmentPage::new(&ui);
            assert!(env.search(&name).await?.is_some(), "created environment");
            env.delete(&name, true).await?;
            assert!(env.search(&name).await?.is_none(), "deleted environment");
            Ok(())
        }
    })
    .await
    .unwrap();

    browser.close().await.unwrap();
}
