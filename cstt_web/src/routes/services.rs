use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
    routing, Form, Router,
};
use axum_extra::extract::{cookie::Key, SignedCookieJar};
use cstt_core_inquiry_contracts::InquiryFeatureService;
use cstt_forms::FormState;
use cstt_models::{
    flash::FlashMessage,
    inquiry::{ServiceInquirySubmission, SERVICE_INQUIRY_FORM},
};
use cstt_templates_contracts::{ServicesTemplate, TemplateService};

use super::{internal_server_error, page};
use crate::{flash, models::inquiry::InquiryPayload, FlashKey};

pub fn router(
    templates: Arc<impl TemplateService>,
    inquiry: Arc<impl InquiryFeatureService>,
    flash_key: FlashKey,
) -> Router<()> {
    Router::new()
        .route("/services", routing::get(get).post(post))
        .with_state(ServicesState {
            templates,
            inquiry,
            flash_key,
        })
}

struct ServicesState<Templates, Inquiry> {
    templates: Arc<Templates>,
    inquiry: Arc<Inquiry>,
    flash_key: FlashKey,
}

impl<Templates, Inquiry> Clone for ServicesState<Templates, Inquiry> {
    fn clone(&self) -> Self {
        Self {
            templates: Arc::clone(&self.templates),
            inquiry: Arc::clone(&self.inquiry),
            flash_key: self.flash_key.clone(),
        }
    }
}

impl<Templates, Inquiry> FromRef<ServicesState<Templates, Inquiry>> for Key {
    fn from_ref(state: &ServicesState<Templates, Inquiry>) -> Self {
        state.flash_key.0.clone()
    }
}

async fn get(
    State(state): State<ServicesState<impl TemplateService, impl InquiryFeatureService>>,
    jar: SignedCookieJar,
) -> Response {
    let (jar, message) = flash::take(jar);
    (
        jar,
        page(
            &*state.templates,
            &ServicesTemplate::new(message, FormState::empty(&SERVICE_INQUIRY_FORM)),
        ),
    )
        .into_response()
}

async fn post(
    State(state): State<ServicesState<impl TemplateService, impl InquiryFeatureService>>,
    jar: SignedCookieJar,
    Form(payload): Form<InquiryPayload>,
) -> Response {
    let data = payload.form_data();
    match ServiceInquirySubmission::parse(&data) {
        Ok(submission) => {
            let message = FlashMessage::from(state.inquiry.submit(submission));
            match flash::push(jar, &message) {
                Ok(jar) => (jar, Redirect::to("/services")).into_response(),
                Err(err) => internal_server_error(&*state.templates, err),
            }
        }
        Err(errors) => page(
            &*state.templates,
            &ServicesTemplate::new(
                None,
                FormState::with_errors(&SERVICE_INQUIRY_FORM, &data, &errors),
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::to_bytes,
        http::{header, StatusCode},
    };
    use cstt_core_inquiry_contracts::MockInquiryFeatureService;
    use cstt_models::{inquiry::ServiceType, Acknowledgment};
    use cstt_templates_contracts::MockTemplateService;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn get_renders_the_empty_form() {
        // Arrange
        let templates = Arc::new(MockTemplateService::new().with_render(
            ServicesTemplate::new(None, FormState::empty(&SERVICE_INQUIRY_FORM)),
            "<services>".into(),
        ));
        let state = state(templates, MockInquiryFeatureService::new());

        // Act
        let response = get(State(state), jar()).await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body(response).await, "<services>");
    }

    #[tokio::test]
    async fn post_valid_inquiry_redirects_with_a_flash() {
        // Arrange
        let payload = InquiryPayload {
            company: "Acme Civil Works".into(),
            name: "Dana Smith".into(),
            email: "dana@acme.example".into(),
            phone: "+1 555 010 9988".into(),
            service_type: "equipment_rental".into(),
            project_details: "Three month rental of a 500 kN load frame.".into(),
        };
        let submission = ServiceInquirySubmission {
            company: "Acme Civil Works".into(),
            name: "Dana Smith".into(),
            email: "dana@acme.example".into(),
            phone: Some("+1 555 010 9988".into()),
            service_type: ServiceType::EquipmentRental,
            project_details: "Three month rental of a 500 kN load frame.".into(),
        };
        let inquiry = MockInquiryFeatureService::new().with_submit(
            submission,
            Acknowledgment::new(
                "Thank you for your service inquiry! Our team will contact you within 24 hours.",
            ),
        );
        let state = state(Arc::new(MockTemplateService::new()), inquiry);

        // Act
        let response = post(State(state), jar(), Form(payload)).await;

        // Assert
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/services");
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(set_cookie.starts_with("flash="));
        assert!(set_cookie.contains("HttpOnly"));
    }

    #[tokio::test]
    async fn post_with_the_placeholder_service_type_rerenders_with_errors() {
        // Arrange
        let payload = InquiryPayload {
            company: "Acme Civil Works".into(),
            name: "Dana Smith".into(),
            email: "dana@acme.example".into(),
            phone: String::new(),
            service_type: String::new(),
            project_details: "Bridge deck inspection for the spring survey season.".into(),
        };
        let expected = {
            let data = payload.form_data();
            let errors = ServiceInquirySubmission::parse(&data).unwrap_err();
            ServicesTemplate::new(
                None,
                FormState::with_errors(&SERVICE_INQUIRY_FORM, &data, &errors),
            )
        };
        let templates =
            Arc::new(MockTemplateService::new().with_render(expected, "<services>".into()));
        let state = state(templates, MockInquiryFeatureService::new());

        // Act
        let response = post(State(state), jar(), Form(payload)).await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get(header::SET_COOKIE), None);
        assert_eq!(body(response).await, "<services>");
    }

    fn state(
        templates: Arc<MockTemplateService>,
        inquiry: MockInquiryFeatureService,
    ) -> ServicesState<MockTemplateService, MockInquiryFeatureService> {
        ServicesState {
            templates,
            inquiry: inquiry.into(),
            flash_key: FlashKey::derive("test-secret"),
        }
    }

    fn jar() -> SignedCookieJar {
        SignedCookieJar::new(FlashKey::derive("test-secret").0)
    }

    async fn body(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }
}
