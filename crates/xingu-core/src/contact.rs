#![forbid(unsafe_code)]

//! Contact form: validation and the WhatsApp quote request.
//!
//! Submitting the form never talks to a server. The fields are validated,
//! packed into a pre-formatted message, and handed to WhatsApp through a
//! `wa.me` link opened in a new tab.

use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Title of the success modal.
pub const SUCCESS_TITLE: &str = "Mensagem Enviada!";
/// Body of the success modal.
pub const SUCCESS_BODY: &str = "Redirecionando para o WhatsApp...";
/// Icon of the success modal.
pub const SUCCESS_ICON: &str = "✅";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub form_id: String,
    /// Destination number in international format, digits only.
    pub whatsapp_number: String,
    /// Shown in place of an empty company field.
    pub company_fallback: String,
    pub error_notice_ms: u64,
    pub success_notice_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: "contactForm".into(),
            whatsapp_number: "5594991488835".into(),
            company_fallback: "Não informado".into(),
            error_notice_ms: 5_000,
            success_notice_ms: 3_000,
        }
    }
}

impl ContactConfig {
    #[must_use]
    pub fn error_notice(&self) -> Duration {
        Duration::from_millis(self.error_notice_ms)
    }

    #[must_use]
    pub fn success_notice(&self) -> Duration {
        Duration::from_millis(self.success_notice_ms)
    }
}

/// Required form fields, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    /// Element id / form name of the field.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }
}

/// The first field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub field: ContactField,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.field {
            ContactField::Name => "Por favor, informe seu nome.",
            ContactField::Email => "Por favor, informe um e-mail válido.",
            ContactField::Phone => "Por favor, informe seu telefone.",
            ContactField::Message => "Por favor, escreva sua mensagem.",
        })
    }
}

impl std::error::Error for ValidationError {}

/// Raw field values as read from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

/// A validated quote request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

impl ContactForm {
    /// Trim every field and check the required ones in order.
    pub fn validate(&self, config: &ContactConfig) -> Result<ContactRequest, ValidationError> {
        let fail = |field| Err(ValidationError { field });
        let name = self.name.trim();
        let email = self.email.trim();
        let phone = self.phone.trim();
        let message = self.message.trim();
        let company = self.company.trim();

        if name.is_empty() {
            return fail(ContactField::Name);
        }
        if !is_valid_email(email) {
            return fail(ContactField::Email);
        }
        if phone.is_empty() {
            return fail(ContactField::Phone);
        }
        if message.is_empty() {
            return fail(ContactField::Message);
        }

        Ok(ContactRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            phone: phone.to_owned(),
            company: if company.is_empty() {
                config.company_fallback.clone()
            } else {
                company.to_owned()
            },
            message: message.to_owned(),
        })
    }
}

impl ContactRequest {
    /// Message text sent through WhatsApp.
    #[must_use]
    pub fn whatsapp_message(&self) -> String {
        format!(
            "🏗️ *SOLICITAÇÃO DE ORÇAMENTO - XINGU ARGAMASSAS*

👤 *Dados do Cliente:*
• Nome: {name}
• E-mail: {email}
• Telefone: {phone}
• Empresa: {company}

💬 *Mensagem:*
{message}

📞 *Contato Preferencial:* WhatsApp
⏰ *Horário:* Segunda a Sexta, 8h às 18h

Aguardo retorno!",
            name = self.name,
            email = self.email,
            phone = self.phone,
            company = self.company,
            message = self.message,
        )
    }

    /// `wa.me` link that opens a chat with the message prefilled.
    #[must_use]
    pub fn whatsapp_url(&self, config: &ContactConfig) -> String {
        whatsapp_url(&config.whatsapp_number, &self.whatsapp_message())
    }
}

#[must_use]
pub fn whatsapp_url(number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{number}?text={}",
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Ana".into(),
            email: "ana@obra.com.br".into(),
            phone: "(94) 99999-0000".into(),
            company: String::new(),
            message: "Preciso de 40 sacos.".into(),
        }
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@c.d"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn empty_company_uses_fallback() {
        let req = form().validate(&ContactConfig::default()).unwrap();
        assert_eq!(req.company, "Não informado");
    }

    #[test]
    fn first_failing_field_wins() {
        let cfg = ContactConfig::default();
        let bad = ContactForm {
            name: "  ".into(),
            email: "nope".into(),
            ..form()
        };
        assert_eq!(
            bad.validate(&cfg).unwrap_err().field,
            ContactField::Name
        );
    }

    #[test]
    fn url_is_percent_encoded() {
        let url = whatsapp_url("5594991488835", "Olá mundo & cia");
        assert_eq!(
            url,
            "https://wa.me/5594991488835?text=Ol%C3%A1%20mundo%20%26%20cia"
        );
    }
}
