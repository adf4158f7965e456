use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
    routing, Form, Router,
};
use axum_extra::extract::{cookie::Key, SignedCookieJar};
use cstt_core_contact_contracts::ContactFeatureService;
use cstt_forms::FormState;
use cstt_models::{
    contact::{ContactSubmission, CONTACT_FORM},
    flash::FlashMessage,
};
use cstt_templates_contracts::{ContactTemplate, TemplateService};

use super::{internal_server_error, page};
use crate::{flash, models::contact::ContactPayload, FlashKey};

pub fn router(
    templates: Arc<impl TemplateService>,
    contact: Arc<impl ContactFeatureService>,
    flash_key: FlashKey,
) -> Router<()> {
    Router::new()
        .route("/contact", routing::get(get).post(post))
        .with_state(ContactState {
            templates,
            contact,
            flash_key,
        })
}

struct ContactState<Templates, Contact> {
    templates: Arc<Templates>,
    contact: Arc<Contact>,
    flash_key: FlashKey,
}

impl<Templates, Contact> Clone for ContactState<Templates, Contact> {
    fn clone(&self) -> Self {
        Self {
            templates: Arc::clone(&self.templates),
            contact: Arc::clone(&self.contact),
            flash_key: self.flash_key.clone(),
        }
    }
}

impl<Templates, Contact> FromRef<ContactState<Templates, Contact>> for Key {
    fn from_ref(state: &ContactState<Templates, Contact>) -> Self {
        state.flash_key.0.clone()
    }
}

async fn get(
    State(state): State<ContactState<impl TemplateService, impl ContactFeatureService>>,
    jar: SignedCookieJar,
) -> Response {
    let (jar, message) = flash::take(jar);
    (
        jar,
        page(
            &*state.templates,
            &ContactTemplate::new(message, FormState::empty(&CONTACT_FORM)),
        ),
    )
        .into_response()
}

async fn post(
    State(state): State<ContactState<impl TemplateService, impl ContactFeatureService>>,
    jar: SignedCookieJar,
    Form(payload): Form<ContactPayload>,
) -> Response {
    let data = payload.form_data();
    match ContactSubmission::parse(&data) {
        Ok(submission) => {
            let message = FlashMessage::from(state.contact.submit(submission));
            match flash::push(jar, &message) {
                Ok(jar) => (jar, Redirect::to("/contact")).into_response(),
                Err(err) => internal_server_error(&*state.templates, err),
            }
        }
        Err(errors) => page(
            &*state.templates,
            &ContactTemplate::new(None, FormState::with_errors(&CONTACT_FORM, &data, &errors)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::to_bytes,
        http::{header, HeaderMap, StatusCode},
    };
    use cstt_core_contact_contracts::MockContactFeatureService;
    use cstt_models::Acknowledgment;
    use cstt_templates_contracts::MockTemplateService;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn get_renders_the_empty_form() {
        // Arrange
        let templates = Arc::new(MockTemplateService::new().with_render(
            ContactTemplate::new(None, FormState::empty(&CONTACT_FORM)),
            "<contact>".into(),
        ));
        let state = state(templates, MockContactFeatureService::new());

        // Act
        let response = get(State(state), jar()).await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get(header::SET_COOKIE), None);
        assert_eq!(body(response).await, "<contact>");
    }

    #[tokio::test]
    async fn get_shows_and_clears_the_flash_message() {
        // Arrange
        let message = FlashMessage::success("Thanks!");
        let jar = jar_with(&message);
        let templates = Arc::new(MockTemplateService::new().with_render(
            ContactTemplate::new(Some(message), FormState::empty(&CONTACT_FORM)),
            "<contact>".into(),
        ));
        let state = state(templates, MockContactFeatureService::new());

        // Act
        let response = get(State(state), jar).await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(set_cookie.starts_with("flash="));
        assert!(set_cookie.contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn post_valid_submission_redirects_with_a_flash() {
        // Arrange
        let payload = ContactPayload {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            subject: "Load frame quote".into(),
            message: "Please send pricing for the HLF-500 load frame.".into(),
        };
        let submission = ContactSubmission {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            subject: "Load frame quote".into(),
            message: "Please send pricing for the HLF-500 load frame.".into(),
        };
        let contact = MockContactFeatureService::new().with_submit(
            submission,
            Acknowledgment::new(
                "Thank you for contacting us! We will respond to your message shortly.",
            ),
        );
        let state = state(Arc::new(MockTemplateService::new()), contact);

        // Act
        let response = post(State(state), jar(), Form(payload)).await;

        // Assert
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/contact");
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(set_cookie.starts_with("flash="));
        assert!(set_cookie.contains("HttpOnly"));
    }

    #[tokio::test]
    async fn post_invalid_submission_rerenders_with_errors() {
        // Arrange
        let payload = ContactPayload {
            name: "J".into(),
            email: "not-an-email".into(),
            subject: "Hi".into(),
            message: "short".into(),
        };
        let expected = {
            let data = payload.form_data();
            let errors = ContactSubmission::parse(&data).unwrap_err();
            ContactTemplate::new(None, FormState::with_errors(&CONTACT_FORM, &data, &errors))
        };
        let templates =
            Arc::new(MockTemplateService::new().with_render(expected, "<contact>".into()));
        let state = state(templates, MockContactFeatureService::new());

        // Act
        let response = post(State(state), jar(), Form(payload)).await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get(header::SET_COOKIE), None);
        assert_eq!(body(response).await, "<contact>");
    }

    fn state(
        templates: Arc<MockTemplateService>,
        contact: MockContactFeatureService,
    ) -> ContactState<MockTemplateService, MockContactFeatureService> {
        ContactState {
            templates,
            contact: contact.into(),
            flash_key: FlashKey::derive("test-secret"),
        }
    }

    fn jar() -> SignedCookieJar {
        SignedCookieJar::new(FlashKey::derive("test-secret").0)
    }

    // Round-trips the pushed cookie through a request header so it reaches
    // the handler as an original, the way a browser sends it back.
    fn jar_with(message: &FlashMessage) -> SignedCookieJar {
        let response = flash::push(jar(), message).unwrap().into_response();
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        let pair = set_cookie.split(';').next().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, pair.parse().unwrap());
        SignedCookieJar::from_headers(&headers, FlashKey::derive("test-secret").0)
    }

    async fn body(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }
}
