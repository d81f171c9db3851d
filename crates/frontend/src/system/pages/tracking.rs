//! Read-only view of a registration record returned by the backend

use contracts::domain::common::{RegistrationKind, RegistrationRecord};
use leptos::prelude::*;

use crate::shared::date_utils::format_date;
use crate::shared::json_viewer::JsonViewer;

/// "date_of_birth" -> "Date of birth"
fn field_caption(key: &str) -> String {
    let words = key.replace('_', " ");
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_date_field(key: &str) -> bool {
    key == "dob" || key.contains("date") || key.ends_with("_at")
}

fn display_value(key: &str, value: &str) -> String {
    if is_date_field(key) {
        format_date(value)
    } else {
        value.to_string()
    }
}

#[component]
pub fn TrackingPage(kind: RegistrationKind, record: RegistrationRecord) -> impl IntoView {
    let rows = record.scalar_fields();
    let json = record.to_pretty_json();
    let file_name = match record.id() {
        Some(id) => format!("{}-registration-{}.json", kind.registration_type(), id),
        None => format!("{}-registration.json", kind.registration_type()),
    };

    view! {
        <div class="tracking">
            <h2 class="tracking__title">{kind.title()}</h2>
            {record.id().map(|id| view! {
                <p class="tracking__id">"Registration ID: "<strong>{id}</strong></p>
            })}
            <table class="tracking__table">
                <tbody>
                    {rows.into_iter().map(|(key, value)| {
                        let shown = display_value(&key, &value);
                        view! {
                            <tr>
                                <th>{field_caption(&key)}</th>
                                <td>{shown}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
            <JsonViewer json_content=json title="Registration record".to_string() file_name=file_name />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_caption() {
        assert_eq!(field_caption("date_of_birth"), "Date of birth");
        assert_eq!(field_caption("id"), "Id");
        assert_eq!(field_caption(""), "");
    }

    #[test]
    fn test_dates_are_reformatted() {
        assert_eq!(display_value("date_of_birth", "2000-06-15"), "15/06/2000");
        assert_eq!(display_value("created_at", "2025-01-10T08:00:00Z"), "10/01/2025");
        assert_eq!(display_value("full_name", "2000-06-15"), "2000-06-15");
    }
}
