//! Contact form to WhatsApp handoff.

use xingu_core::contact::{ContactConfig, ContactField, ContactForm, whatsapp_url};

fn filled() -> ContactForm {
    ContactForm {
        name: "  João Silva ".into(),
        email: "joao@construtora.com".into(),
        phone: "94 99148-8835".into(),
        company: "Construtora Xingu".into(),
        message: "Orçamento de argamassa AC-III".into(),
    }
}

#[test]
fn message_template_is_filled_in() {
    let req = filled().validate(&ContactConfig::default()).unwrap();
    let msg = req.whatsapp_message();

    assert!(msg.starts_with("🏗️ *SOLICITAÇÃO DE ORÇAMENTO - XINGU ARGAMASSAS*\n\n"));
    assert!(msg.contains("• Nome: João Silva\n"));
    assert!(msg.contains("• E-mail: joao@construtora.com\n"));
    assert!(msg.contains("• Telefone: 94 99148-8835\n"));
    assert!(msg.contains("• Empresa: Construtora Xingu\n"));
    assert!(msg.contains("💬 *Mensagem:*\nOrçamento de argamassa AC-III\n"));
    assert!(msg.ends_with("⏰ *Horário:* Segunda a Sexta, 8h às 18h\n\nAguardo retorno!"));
}

#[test]
fn url_targets_configured_number() {
    let cfg = ContactConfig {
        whatsapp_number: "5511987654321".into(),
        ..ContactConfig::default()
    };
    let req = filled().validate(&cfg).unwrap();
    let url = req.whatsapp_url(&cfg);
    assert!(url.starts_with("https://wa.me/5511987654321?text="));
    assert!(!url.contains(' '));
    assert!(!url.contains('\n'));
    assert_eq!(url, whatsapp_url("5511987654321", &req.whatsapp_message()));
}

#[test]
fn validation_order_and_messages() {
    let cfg = ContactConfig::default();
    let cases = [
        (ContactForm { name: String::new(), ..filled() }, ContactField::Name, "Por favor, informe seu nome."),
        (ContactForm { email: "joao@".into(), ..filled() }, ContactField::Email, "Por favor, informe um e-mail válido."),
        (ContactForm { email: "   ".into(), ..filled() }, ContactField::Email, "Por favor, informe um e-mail válido."),
        (ContactForm { phone: " ".into(), ..filled() }, ContactField::Phone, "Por favor, informe seu telefone."),
        (ContactForm { message: "\n".into(), ..filled() }, ContactField::Message, "Por favor, escreva sua mensagem."),
    ];
    for (form, field, text) in cases {
        let err = form.validate(&cfg).unwrap_err();
        assert_eq!(err.field, field);
        assert_eq!(err.to_string(), text);
    }
}

#[test]
fn field_ids_match_markup() {
    let ids: Vec<_> = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ]
    .into_iter()
    .map(ContactField::id)
    .collect();
    assert_eq!(ids, ["name", "email", "phone", "message"]);
}
