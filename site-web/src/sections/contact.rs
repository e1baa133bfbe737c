//! Contact section: office details and the contact form.
//!
//! The form validates with the same rules as the server. Invalid fields are
//! marked inline and block submission; a transport failure only shows a
//! notice and leaves the entered values in place.

use crate::components::{Entrance, Reveal};
use crate::services::contact::{submit_contact, SubmitError};
use crate::state::use_i18n;
use crate::utils::constants::{CONTACT_EMAIL, CONTACT_PHONE, MAX_MESSAGE_LEN};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use shared::{validate_contact, ContactField, ContactFormErrors, ContactRequest, Department};

const MAP_URL: &str = "https://maps.google.com/?q=BAPETCO+New+Cairo";

#[derive(Clone, Debug, PartialEq, Eq)]
enum SubmitStatus {
    Idle,
    Sending,
    Sent { reference: String },
    Failed,
}

/// Field errors to show after the server rejected a submission.
fn server_field_errors(error: &SubmitError) -> Option<ContactFormErrors> {
    match error {
        SubmitError::Rejected { body, .. } if !body.fields.is_empty() => {
            Some(ContactFormErrors(body.fields.clone()))
        }
        _ => None,
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let i18n = use_i18n();

    let form = RwSignal::new(ContactRequest::default());
    let errors = RwSignal::new(ContactFormErrors::default());
    let status = RwSignal::new(SubmitStatus::Idle);

    let edit = move |field: ContactField, value: String| {
        form.update(|form| match field {
            ContactField::Name => form.name = value,
            ContactField::Email => form.email = value,
            ContactField::Phone => form.phone = value,
            ContactField::Department => form.department = value,
            ContactField::Message => form.message = value,
        });
        errors.update(|errors| errors.0.retain(|error| error.field != field));
    };

    let error_for = move |field: ContactField| {
        move || {
            errors.with(|errors| {
                errors.for_field(field).map(|error| {
                    let message = i18n.t(&error.key);
                    view! { <span class="field-error" role="alert">{message}</span> }
                })
            })
        }
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if status.get_untracked() == SubmitStatus::Sending {
            return;
        }

        let request = form.get_untracked().normalized();
        if let Err(invalid) = validate_contact(&request, MAX_MESSAGE_LEN) {
            log::debug!("contact form blocked: {}", invalid);
            errors.set(invalid);
            return;
        }

        errors.set(ContactFormErrors::default());
        status.set(SubmitStatus::Sending);
        leptos::task::spawn_local(async move {
            match submit_contact(&request).await {
                Ok(response) => {
                    log::info!("contact message accepted: {}", response.reference);
                    form.set(ContactRequest::default());
                    status.set(SubmitStatus::Sent {
                        reference: response.reference,
                    });
                }
                Err(e) => {
                    log::warn!("contact submission failed: {}", e);
                    if let Some(invalid) = server_field_errors(&e) {
                        errors.set(invalid);
                    }
                    status.set(SubmitStatus::Failed);
                }
            }
        });
    };

    let department_options = Department::ALL
        .into_iter()
        .map(|department| {
            let key = department.label_key();
            view! {
                <option value=department.as_str()>{move || i18n.t(&key)}</option>
            }
        })
        .collect_view();

    let notice = move || match status.get() {
        SubmitStatus::Sent { reference } => Some(view! {
            <p class="form-notice success" role="status">
                {i18n.t("contact.form.sent")} " " <span dir="ltr">{reference}</span>
            </p>
        }.into_any()),
        SubmitStatus::Failed => Some(view! {
            <p class="form-notice error" role="status">{i18n.t("contact.form.failed")}</p>
        }.into_any()),
        SubmitStatus::Idle | SubmitStatus::Sending => None,
    };

    view! {
        <section id="contact" class="section contact">
            <Reveal entrance=Entrance::FadeInUp class="section-header">
                <span class="section-badge">{move || i18n.t("contact.badge")}</span>
                <h2 class="section-title">{move || i18n.t("contact.title")}</h2>
                <p class="section-intro">{move || i18n.t("contact.subtitle")}</p>
            </Reveal>

            <div class="contact-grid">
                <Reveal entrance=Entrance::FromStart class="contact-info">
                    <div class="info-item">
                        <h4>{move || i18n.t("contact.info.address.title")}</h4>
                        <p>{move || i18n.t("contact.info.address.line1")}</p>
                        <p>{move || i18n.t("contact.info.address.line2")}</p>
                    </div>
                    <div class="info-item">
                        <h4>{move || i18n.t("contact.info.phone.title")}</h4>
                        <p dir="ltr">{CONTACT_PHONE}</p>
                    </div>
                    <div class="info-item">
                        <h4>{move || i18n.t("contact.info.email.title")}</h4>
                        <p><a href=format!("mailto:{}", CONTACT_EMAIL)>{CONTACT_EMAIL}</a></p>
                    </div>
                    <div class="info-item">
                        <h4>{move || i18n.t("contact.info.hours.title")}</h4>
                        <p>{move || i18n.t("contact.info.hours.days")}</p>
                        <p>{move || i18n.t("contact.info.hours.time")}</p>
                    </div>
                    <div class="map-card">
                        <p>{move || i18n.t("contact.map.title")}</p>
                        <a class="btn-outline" href=MAP_URL target="_blank" rel="noopener noreferrer">
                            {move || i18n.t("contact.map.button")}
                        </a>
                    </div>
                </Reveal>

                <Reveal entrance=Entrance::FromEnd class="contact-form-card">
                    <h3>{move || i18n.t("contact.form.title")}</h3>
                    <form class="contact-form" novalidate=true on:submit=on_submit>
                        <label class="form-field">
                            <span>{move || i18n.t("contact.form.name")} " *"</span>
                            <input
                                type="text"
                                name="name"
                                autocomplete="name"
                                placeholder=move || i18n.t("contact.form.namePlaceholder")
                                prop:value=move || form.with(|form| form.name.clone())
                                on:input=move |ev| edit(ContactField::Name, event_target_value(&ev))
                            />
                            {error_for(ContactField::Name)}
                        </label>

                        <label class="form-field">
                            <span>{move || i18n.t("contact.form.email")} " *"</span>
                            <input
                                type="email"
                                name="email"
                                autocomplete="email"
                                dir="ltr"
                                placeholder=move || i18n.t("contact.form.emailPlaceholder")
                                prop:value=move || form.with(|form| form.email.clone())
                                on:input=move |ev| edit(ContactField::Email, event_target_value(&ev))
                            />
                            {error_for(ContactField::Email)}
                        </label>

                        <label class="form-field">
                            <span>{move || i18n.t("contact.form.phone")}</span>
                            <input
                                type="tel"
                                name="phone"
                                autocomplete="tel"
                                dir="ltr"
                                placeholder=move || i18n.t("contact.form.phonePlaceholder")
                                prop:value=move || form.with(|form| form.phone.clone())
                                on:input=move |ev| edit(ContactField::Phone, event_target_value(&ev))
                            />
                            {error_for(ContactField::Phone)}
                        </label>

                        <label class="form-field">
                            <span>{move || i18n.t("contact.form.department")}</span>
                            <select
                                name="department"
                                prop:value=move || form.with(|form| form.department.clone())
                                on:change=move |ev| edit(ContactField::Department, event_target_value(&ev))
                            >
                                <option value="">{move || i18n.t("contact.form.departments.select")}</option>
                                {department_options}
                            </select>
                            {error_for(ContactField::Department)}
                        </label>

                        <label class="form-field">
                            <span>{move || i18n.t("contact.form.message")} " *"</span>
                            <textarea
                                name="message"
                                rows="5"
                                maxlength=MAX_MESSAGE_LEN.to_string()
                                placeholder=move || i18n.t("contact.form.messagePlaceholder")
                                prop:value=move || form.with(|form| form.message.clone())
                                on:input=move |ev| edit(ContactField::Message, event_target_value(&ev))
                            ></textarea>
                            {error_for(ContactField::Message)}
                        </label>

                        <button
                            type="submit"
                            class="btn-primary"
                            disabled=move || status.get() == SubmitStatus::Sending
                        >
                            {move || {
                                if status.get() == SubmitStatus::Sending {
                                    i18n.t("contact.form.sending")
                                } else {
                                    i18n.t("contact.form.submit")
                                }
                            }}
                        </button>

                        {notice}
                    </form>
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ErrorResponse, FieldError, FieldErrorKind};

    #[test]
    fn test_rejection_with_fields_maps_to_inline_errors() {
        // Arrange
        let error = SubmitError::Rejected {
            status: 422,
            body: ErrorResponse {
                error: "Invalid contact form".to_string(),
                code: "Validation".to_string(),
                fields: vec![FieldError::new(ContactField::Email, FieldErrorKind::InvalidEmail)],
            },
        };

        // Act
        let errors = server_field_errors(&error).unwrap();

        // Assert
        assert_eq!(
            errors.for_field(ContactField::Email).map(|e| e.key.as_str()),
            Some("contact.errors.email")
        );
    }

    #[test]
    fn test_network_failure_keeps_fields_clean() {
        let error = SubmitError::Network("offline".to_string());
        assert!(server_field_errors(&error).is_none());
    }

    #[test]
    fn test_blank_form_blocks_required_fields() {
        let errors = validate_contact(&ContactRequest::default(), MAX_MESSAGE_LEN).unwrap_err();

        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            assert!(errors.for_field(field).is_some(), "{:?} should be required", field);
        }
        assert!(errors.for_field(ContactField::Phone).is_none());
    }
}
