//! Browser side of the Attachment Manager
//!
//! `<input type="file">` hands us `web_sys::File` objects, which cannot live
//! in a `Send` form. The registry keeps them keyed by an opaque handle and
//! the form only stores `FileReference`s.

use contracts::shared::attachment::{FileReference, PickResult};
use std::cell::RefCell;
use std::collections::HashMap;
use uuid::Uuid;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

/// Values keyed by a random handle
struct Registry<T> {
    entries: HashMap<String, T>,
}

impl<T: Clone> Registry<T> {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    fn insert(&mut self, value: T) -> String {
        let handle = Uuid::new_v4().to_string();
        self.entries.insert(handle.clone(), value);
        handle
    }

    fn get(&self, handle: &str) -> Option<T> {
        self.entries.get(handle).cloned()
    }

    fn remove_all<I, H>(&mut self, handles: I) -> usize
    where
        I: IntoIterator<Item = H>,
        H: AsRef<str>,
    {
        handles
            .into_iter()
            .filter(|handle| self.entries.remove(handle.as_ref()).is_some())
            .count()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

thread_local! {
    static FILES: RefCell<Registry<File>> = RefCell::new(Registry::new());
}

pub fn register(file: File) -> FileReference {
    let (type_, name, size) = (file.type_(), file.name(), file.size() as u64);
    let handle = FILES.with(|files| files.borrow_mut().insert(file));
    FileReference::new(handle, type_, name, size)
}

pub fn lookup(handle: &str) -> Option<File> {
    FILES.with(|files| files.borrow().get(handle))
}

pub fn release(handle: &str) {
    release_all([handle]);
}

/// Drop every listed handle; unknown handles are ignored
pub fn release_all<I, H>(handles: I)
where
    I: IntoIterator<Item = H>,
    H: AsRef<str>,
{
    let (released, left) = FILES.with(|files| {
        let mut files = files.borrow_mut();
        (files.remove_all(handles), files.len())
    });
    if released > 0 {
        log::debug!("released {} file(s), {} still held", released, left);
    }
}

/// Read the chosen file from a file input `change` event.
///
/// An empty selection (dialog closed) is a cancellation.
pub fn pick_from_event(ev: &web_sys::Event) -> PickResult {
    let Some(input) = ev
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
    else {
        return PickResult::Failed("event target is not a file input".to_string());
    };

    let file = input.files().and_then(|list| list.get(0));
    // lets the same file be chosen again after a rejection
    input.set_value("");

    match file {
        Some(file) => PickResult::Picked(register(file)),
        None => PickResult::Cancelled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_all_drops_only_listed_handles() {
        let mut registry = Registry::new();
        let kept = registry.insert("kept.pdf");
        let front = registry.insert("front.png");
        let back = registry.insert("back.png");

        let released = registry.remove_all(vec![front.clone(), back, "missing".to_string()]);

        assert_eq!(released, 2);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&kept), Some("kept.pdf"));
        assert_eq!(registry.get(&front), None);
    }

    #[test]
    fn test_release_all_twice_is_harmless() {
        let mut registry = Registry::new();
        let handle = registry.insert("doc.pdf");

        assert_eq!(registry.remove_all([handle.as_str()]), 1);
        assert_eq!(registry.remove_all([handle.as_str()]), 0);
        assert_eq!(registry.len(), 0);
    }
}
