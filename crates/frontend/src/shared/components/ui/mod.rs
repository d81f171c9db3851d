pub mod date_input;
pub mod file_input;
pub mod input;
pub mod select;
pub mod textarea;

pub use date_input::DateInput;
pub use file_input::FileInput;
pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;

use leptos::prelude::*;

/// Wrapper class of a field, flagged while it has an error
fn group_class(base: &'static str, error: Signal<Option<String>>) -> String {
    if error.with(|e| e.is_some()) {
        format!("{} form__group--invalid", base)
    } else {
        base.to_string()
    }
}
