use cstt_forms::{FormState, SelectChoice};
use cstt_models::{flash::FlashMessage, inquiry::ServiceType};
use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given page.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

pub const BASE_TEMPLATE: &str = include_str!("../templates/base.html");

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                // Registered under the file name so the engine applies HTML
                // auto-escaping to redisplayed input.
                const NAME: &'static str = $path;
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    HomeTemplate("index.html"),
    ProductsTemplate("products.html"),
    ServicesTemplate("services.html"),
    AboutTemplate("about.html"),
    ContactTemplate("contact.html"),
    ErrorTemplate("error.html"),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeTemplate {
    pub active_page: &'static str,
    pub flash: Option<FlashMessage>,
}

impl HomeTemplate {
    pub fn new() -> Self {
        Self {
            active_page: "home",
            flash: None,
        }
    }
}

impl Default for HomeTemplate {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductsTemplate {
    pub active_page: &'static str,
    pub flash: Option<FlashMessage>,
}

impl ProductsTemplate {
    pub fn new() -> Self {
        Self {
            active_page: "products",
            flash: None,
        }
    }
}

impl Default for ProductsTemplate {
    fn default() -> Self {
        Self::new()
    }
}

/// Services page with the inquiry form. `form` carries the submitted values
/// and errors to redisplay; `service_types` the select options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServicesTemplate {
    pub active_page: &'static str,
    pub flash: Option<FlashMessage>,
    pub form: FormState,
    pub service_types: &'static [SelectChoice],
}

impl ServicesTemplate {
    pub fn new(flash: Option<FlashMessage>, form: FormState) -> Self {
        Self {
            active_page: "services",
            flash,
            form,
            service_types: ServiceType::CHOICES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutTemplate {
    pub active_page: &'static str,
    pub flash: Option<FlashMessage>,
}

impl AboutTemplate {
    pub fn new() -> Self {
        Self {
            active_page: "about",
            flash: None,
        }
    }
}

impl Default for AboutTemplate {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactTemplate {
    pub active_page: &'static str,
    pub flash: Option<FlashMessage>,
    pub form: FormState,
}

impl ContactTemplate {
    pub fn new(flash: Option<FlashMessage>, form: FormState) -> Self {
        Self {
            active_page: "contact",
            flash,
            form,
        }
    }
}

/// Shared 404/500 page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorTemplate {
    pub active_page: &'static str,
    pub flash: Option<FlashMessage>,
    pub error_message: &'static str,
}

impl ErrorTemplate {
    pub fn new(error_message: &'static str) -> Self {
        Self {
            active_page: "",
            flash: None,
            error_message,
        }
    }
}
