//! Platform-neutral multipart body
//!
//! The form serialises itself into text fields and file parts; the HTTP
//! layer turns this into a real `multipart/form-data` request.

use super::attachment::FileReference;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartPayload {
    pub fields: Vec<(String, String)>,
    pub files: Vec<(String, FileReference)>,
}

impl MultipartPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn file(&mut self, name: impl Into<String>, file: FileReference) -> &mut Self {
        self.files.push((name.into(), file));
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn files_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a FileReference> + 'a {
        self.files
            .iter()
            .filter(move |(k, _)| k == name)
            .map(|(_, f)| f)
    }
}
