use std::{net::IpAddr, sync::Arc};

use axum::Router;
use axum_extra::extract::cookie::Key;
use cstt_core_contact_contracts::ContactFeatureService;
use cstt_core_inquiry_contracts::InquiryFeatureService;
use cstt_templates_contracts::TemplateService;
use sha2::{Digest, Sha512};
use tokio::net::TcpListener;

mod flash;
mod middlewares;
mod models;
mod routes;

/// HTTP server for the marketing site.
#[derive(Debug)]
pub struct WebServer<Templates, Contact, Inquiry> {
    pub config: WebServerConfig,
    pub templates: Templates,
    pub contact: Contact,
    pub inquiry: Inquiry,
}

#[derive(Debug, Clone)]
pub struct WebServerConfig {
    pub flash_key: FlashKey,
}

impl<Templates, Contact, Inquiry> WebServer<Templates, Contact, Inquiry>
where
    Templates: TemplateService,
    Contact: ContactFeatureService,
    Inquiry: InquiryFeatureService,
{
    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let templates = Arc::new(self.templates);
        let flash_key = self.config.flash_key;

        let router = Router::new()
            .merge(routes::pages::router(Arc::clone(&templates)))
            .merge(routes::contact::router(
                Arc::clone(&templates),
                self.contact.into(),
                flash_key.clone(),
            ))
            .merge(routes::services::router(
                Arc::clone(&templates),
                self.inquiry.into(),
                flash_key,
            ))
            .merge(routes::health::router())
            .merge(routes::assets::router());

        // Panics are caught innermost so the trace middleware still sees the
        // resulting 500; the request id is assigned outermost so the trace
        // span can include it.
        let router = middlewares::panic_handler::add(router, Arc::clone(&templates));
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}

/// Key used to sign the flash message cookie, derived from the session
/// secret.
#[derive(Clone)]
pub struct FlashKey(pub(crate) Key);

impl FlashKey {
    pub fn derive(secret: &str) -> Self {
        // The cookie key wants at least 64 bytes of material, which is
        // exactly the SHA-512 digest size.
        Self(Key::from(Sha512::digest(secret).as_slice()))
    }
}

impl std::fmt::Debug for FlashKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FlashKey").field(&"<redacted>").finish()
    }
}
