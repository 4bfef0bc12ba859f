use super::constants::CONTACT_TITLE;
use serde::Serialize;
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// DOM id of the input element.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|f| f.id() == id)
    }
}

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
}

impl FieldError {
    pub fn field(self) -> Field {
        match self {
            FieldError::NameRequired => Field::Name,
            FieldError::EmailRequired | FieldError::EmailInvalid => Field::Email,
            FieldError::MessageRequired => Field::Message,
        }
    }
}

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("email relay is not configured: {0} was not set at build time")]
    MissingConfig(&'static str),
    #[error("failed to encode relay request: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("relay request failed: {0}")]
    Transport(String),
    #[error("relay responded with HTTP {status}")]
    Status { status: u16 },
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Needs a dot with at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Template parameters the relay fills into the outgoing email.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub message: String,
    pub title: String,
    pub time: String,
}

/// Build-time relay credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    /// Read `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID` and
    /// `EMAILJS_PUBLIC_KEY` as captured at compile time.
    pub fn from_build_env() -> Result<Self, RelayError> {
        Self::from_parts(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    pub fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Result<Self, RelayError> {
        let require = |value: Option<&str>, name: &'static str| {
            value
                .filter(|v| !v.trim().is_empty())
                .map(str::to_string)
                .ok_or(RelayError::MissingConfig(name))
        };
        Ok(Self {
            service_id: require(service_id, "EMAILJS_SERVICE_ID")?,
            template_id: require(template_id, "EMAILJS_TEMPLATE_ID")?,
            public_key: require(public_key, "EMAILJS_PUBLIC_KEY")?,
        })
    }
}

/// JSON body of the relay's send endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RelayRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl RelayRequest {
    pub fn new(config: &RelayConfig, params: TemplateParams) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: params,
        }
    }

    pub fn to_json(&self) -> Result<String, RelayError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TOAST_SENT: Toast = Toast {
    kind: ToastKind::Success,
    title: "Message sent!",
    description: "Thank you for your message. I'll get back to you soon.",
};

pub const TOAST_FAILED: Toast = Toast {
    kind: ToastKind::Failure,
    title: "Something went wrong",
    description: "Please try again later or reach me on LinkedIn.",
};

/// What a submit attempt resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Validation failed; errors are on the form.
    Invalid,
    /// A previous submission has not completed yet.
    InFlight,
    /// Hand these parameters to the relay.
    Send(TemplateParams),
}

pub type FieldErrors = SmallVec<[FieldError; 3]>;

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    errors: FieldErrors,
    in_flight: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Update a field; any error shown for it is cleared while typing.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
        self.errors.retain(|e| e.field() != field);
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        self.errors.iter().copied().find(|e| e.field() == field)
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Recompute field errors; true when the form is valid.
    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::NameRequired);
        }
        if self.email.trim().is_empty() {
            errors.push(FieldError::EmailRequired);
        } else if !is_valid_email(&self.email) {
            errors.push(FieldError::EmailInvalid);
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError::MessageRequired);
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Validate and, if clean, produce the relay parameters stamped with
    /// `time`. The form stays in flight until [`ContactForm::complete`].
    pub fn submit(&mut self, time: impl Into<String>) -> Submission {
        if self.in_flight {
            return Submission::InFlight;
        }
        if !self.validate() {
            return Submission::Invalid;
        }
        self.in_flight = true;
        Submission::Send(TemplateParams {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            title: CONTACT_TITLE.to_string(),
            time: time.into(),
        })
    }

    /// Apply the relay outcome. Success clears the fields.
    pub fn complete(&mut self, result: &Result<(), RelayError>) -> Toast {
        self.in_flight = false;
        match result {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.errors.clear();
                TOAST_SENT
            }
            Err(_) => TOAST_FAILED,
        }
    }
}
