//! Scoped login/logout.
//!
//! A session acquires an authenticated browser context for a block of
//! test operations and logs out afterwards on every exit path, so tests
//! never leak authenticated sessions into each other. The lifecycle is
//! plain login → active → logout; there is no state machine beyond
//! that.

use std::future::Future;

use tracing::{debug, warn};

use crate::result::{Error, ValidarResult};
use crate::ui::base::Ui;
use crate::ui::page::Page;
use crate::Settings;

/// Scoped login/logout wrapper
#[derive(Debug)]
pub struct Session;

impl Session {
    /// Run `block` inside an authenticated session.
    ///
    /// Logs in, hands the base page object to the block, and always
    /// logs out afterwards — whether the block returned or failed. A
    /// logout failure after a successful block is an error in its own
    /// right; after a failed block the block's error wins and the
    /// logout failure is only logged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Session`] if login or logout does not complete,
    /// or whatever the block itself failed with.
    pub async fn run<F, Fut, T>(settings: &Settings, page: Page, block: F) -> ValidarResult<T>
    where
        F: FnOnce(Ui) -> Fut,
        Fut: Future<Output = ValidarResult<T>>,
    {
        let ui = Ui::new(page, settings.clone());
        Self::login(&ui).await?;
        let outcome = block(ui.clone()).await;
        let logout = Self::logout(&ui).await;
        match outcome {
            Ok(value) => logout.map(|()| value),
            Err(err) => {
                if let Err(logout_err) = logout {
                    warn!(error = %logout_err, "logout failed while unwinding");
                }
                Err(err)
            }
        }
    }

    /// Navigate to the login form, authenticate, and wait for the
    /// logged-in marker.
    async fn login(ui: &Ui) -> ValidarResult<()> {
        let settings = ui.settings().clone();
        ui.page().goto(&settings.url_for("users/login")).await?;
        ui.field_update("login.username", &settings.username).await?;
        ui.field_update("login.password", &settings.password).await?;
        ui.click_name("login.submit").await?;
        let marker = ui.locator("account.menu")?;
        ui.wait_until_element(&marker)
            .await
            .map_err(|_| Error::Session {
                message: format!("login as {} did not complete", settings.username),
            })?;
        debug!(user = %settings.username, "logged in");
        Ok(())
    }

    /// Open the account menu, log out, and wait for the login form.
    async fn logout(ui: &Ui) -> ValidarResult<()> {
        ui.click_name("account.menu").await?;
        ui.click_name("account.logout").await?;
        let marker = ui.locator("login.username")?;
        ui.wait_until_element(&marker)
            .await
            .map_err(|_| Error::Session {
                message: "logout did not return to the login form".to_string(),
            })?;
        debug!("logged out");
        Ok(())
    }
}
