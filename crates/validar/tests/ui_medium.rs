//! Installation media UI flows, driven against the mock DOM.

#![cfg(not(feature = "browser"))]

use validar::ui::page::{Action, MockElement, Page};
use validar::ui::pages::MediumPage;
use validar::ui::{factory, Session, Ui};
use validar::{valid_data_list, DataFactory, Seed, Settings};

fn settings() -> Settings {
    Settings::new()
        .with_server_url("https://forja.test")
        .with_credentials("admin", "changeme")
        .with_wait_timeout(80)
        .with_poll_interval(5)
}

fn seeded_page() -> Page {
    let page = Page::new();
    let ui = Ui::new(page.clone(), settings());
    for name in [
        "login.username",
        "login.password",
        "login.submit",
        "account.menu",
        "account.logout",
        "menu.hosts",
        "menu.hosts.media",
        "medium.new",
        "medium.name",
        "medium.path",
        "medium.os_family",
        "common.submit",
        "common.search_input",
        "common.search_button",
    ] {
        let locator = ui.locator(name).unwrap();
        page.insert(locator.selector(), MockElement::visible());
    }
    page
}

fn script_create(page: &Page, ui: &Ui, name: &str) {
    let submit = ui.locator("common.submit").unwrap();
    let row = ui.locator("medium.row").unwrap().bind(name);
    page.on_click(
        submit.selector(),
        vec![Page::insert_effect(row.selector(), MockElement::with_text(name))],
    );
}

#[tokio::test]
async fn test_create_media_for_every_name_kind() {
    let page = seeded_page();
    let mut data = DataFactory::new(Seed::from_u64(7));
    let names = valid_data_list(&mut data);

    Session::run(&settings(), page, |ui| async move {
        for name in &names {
            script_create(ui.page(), &ui, name);
            let path = format!("http://mirror.example.com/{}", path_tag(name));
            factory::make_media(&ui, name, &path, "Red Hat").await?;
            let found = MediumPage::new(&ui).search(name).await?;
            assert!(found.is_some(), "medium {name:?} should be searchable");
        }
        Ok(())
    })
    .await
    .unwrap();
}

// Path segments must stay URL-safe whatever the name kind.
fn path_tag(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .take(8)
        .collect()
}

#[tokio::test]
async fn test_create_fills_path_and_selects_os_family() {
    let page = seeded_page();
    let ui_probe = Ui::new(page.clone(), settings());
    script_create(&page, &ui_probe, "rhel-media");

    Session::run(&settings(), page.clone(), |ui| async move {
        factory::make_media(
            &ui,
            "rhel-media",
            "http://mirror.example.com/rhel",
            "Red Hat",
        )
        .await
    })
    .await
    .unwrap();

    let path_query = ui_probe
        .locator("medium.path")
        .unwrap()
        .selector()
        .to_query();
    let os_query = ui_probe
        .locator("medium.os_family")
        .unwrap()
        .selector()
        .to_query();
    let actions = page.actions();
    assert!(actions.iter().any(|a| matches!(
        a,
        Action::Fill { query, text } if *query == path_query && text == "http://mirror.example.com/rhel"
    )));
    assert!(actions.iter().any(|a| matches!(
        a,
        Action::Select { query, option } if *query == os_query && option == "Red Hat"
    )));
}

#[tokio::test]
async fn test_name_error_indicator_is_detected() {
    let page = seeded_page();
    let ui_probe = Ui::new(page.clone(), settings());
    script_create(&page, &ui_probe, "");
    // The server-rendered form marks the name field group as errored.
    let error = ui_probe.locator("common.name_haserror").unwrap();
    page.insert(error.selector(), MockElement::visible());

    Session::run(&settings(), page, |ui| async move {
        factory::make_media(&ui, "", "http://mirror.example.com/x", "Red Hat").await?;
        assert!(ui.has_name_error().await?);
        Ok(())
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn test_no_error_indicator_on_clean_form() {
    let page = seeded_page();
    let ui_probe = Ui::new(page.clone(), settings());
    script_create(&page, &ui_probe, "clean");

    Session::run(&settings(), page, |ui| async move {
        factory::make_media(&ui, "clean", "http://mirror.example.com/c", "Red Hat").await?;
        assert!(!ui.has_name_error().await?);
        assert!(!ui.has_error().await?);
        Ok(())
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn test_update_medium_name_path_and_family() {
    let page = seeded_page();
    let ui_probe = Ui::new(page.clone(), settings());
    let old_row = ui_probe.locator("medium.row").unwrap().bind("old-media");
    page.insert(old_row.selector(), MockElement::with_text("old-media"));
    let submit = ui_probe.locator("common.submit").unwrap();
    let new_row = ui_probe.locator("medium.row").unwrap().bind("new-media");
    page.on_click(
        submit.selector(),
        vec![
            Page::remove_effect(old_row.selector()),
            Page::insert_effect(new_row.selector(), MockElement::with_text("new-media")),
        ],
    );

    Session::run(&settings(), page.clone(), |ui| async move {
        let medium = MediumPage::new(&ui);
        medium
            .update(
                "old-media",
                Some("new-media"),
                Some("http://mirror.example.com/debian"),
                Some("Debian"),
            )
            .await?;
        assert!(medium.search("new-media").await?.is_some());
        Ok(())
    })
    .await
    .unwrap();

    assert!(page.actions().iter().any(|a| matches!(
        a,
        Action::Select { option, .. } if option == "Debian"
    )));
}

#[tokio::test]
async fn test_delete_medium() {
    let page = seeded_page();
    let ui_probe = Ui::new(page.clone(), settings());
    let row = ui_probe.locator("medium.row").unwrap().bind("doomed");
    let dropdown = ui_probe.locator("medium.dropdown").unwrap().bind("doomed");
    let delete = ui_probe.locator("medium.delete").unwrap().bind("doomed");
    page.insert(row.selector(), MockElement::with_text("doomed"));
    page.insert(dropdown.selector(), MockElement::visible());
    page.insert(delete.selector(), MockElement::visible());
    page.on_click(delete.selector(), vec![Page::remove_effect(row.selector())]);

    Session::run(&settings(), page, |ui| async move {
        let medium = MediumPage::new(&ui);
        medium.delete("doomed", true).await?;
        assert!(medium.search("doomed").await?.is_none());
        Ok(())
    })
    .await
    .unwrap();
}
