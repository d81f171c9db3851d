//! Attachment Manager
//!
//! Takes the result of an external file chooser, checks it against the
//! slot's constraints and only then stores it in the form. A rejected pick
//! leaves whatever the slot held before.

use super::validation::FormSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 2 MiB, the ceiling used by every registration form
pub const DEFAULT_MAX_ATTACHMENT_BYTES: u64 = 2 * 1024 * 1024;

/// A single user-selected file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    /// Opaque, platform-specific handle (a browser-side registry key)
    pub handle: String,
    pub mime_type: String,
    pub name: String,
    pub size: u64,
}

impl FileReference {
    pub fn new(
        handle: impl Into<String>,
        mime_type: impl Into<String>,
        name: impl Into<String>,
        size: u64,
    ) -> Self {
        Self {
            handle: handle.into(),
            mime_type: mime_type.into(),
            name: name.into(),
            size,
        }
    }

    pub fn kind(&self) -> Option<AttachmentKind> {
        AttachmentKind::detect(&self.mime_type, &self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    Pdf,
}

impl AttachmentKind {
    /// By MIME type, falling back to the file extension when the picker
    /// reports none
    pub fn detect(mime_type: &str, name: &str) -> Option<Self> {
        let mime = mime_type.trim().to_ascii_lowercase();
        if mime.starts_with("image/") {
            return Some(AttachmentKind::Image);
        }
        if mime == "application/pdf" {
            return Some(AttachmentKind::Pdf);
        }
        if !mime.is_empty() {
            return None;
        }

        let ext = name.rsplit_once('.')?.1.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "webp" | "heic" => Some(AttachmentKind::Image),
            "pdf" => Some(AttachmentKind::Pdf),
            _ => None,
        }
    }

    /// Value for an `<input accept=...>` attribute
    pub fn accept_attr(kinds: &[AttachmentKind]) -> String {
        kinds
            .iter()
            .map(|k| match k {
                AttachmentKind::Image => "image/*",
                AttachmentKind::Pdf => "application/pdf",
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

pub const IMAGES_OR_PDF: &[AttachmentKind] = &[AttachmentKind::Image, AttachmentKind::Pdf];

/// Static description of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSpec {
    pub kinds: &'static [AttachmentKind],
    /// Multi-file slots append; single-file slots replace
    pub multiple: bool,
}

impl SlotSpec {
    pub const fn single(kinds: &'static [AttachmentKind]) -> Self {
        Self {
            kinds,
            multiple: false,
        }
    }

    pub const fn multiple(kinds: &'static [AttachmentKind]) -> Self {
        Self {
            kinds,
            multiple: true,
        }
    }
}

/// Mutable access to a slot's storage inside a form
pub enum SlotMut<'a> {
    Single(&'a mut Option<FileReference>),
    Multi(&'a mut Vec<FileReference>),
}

/// A form that owns attachment slots
pub trait AttachmentSlots: FormSchema {
    fn slot_spec(field: Self::Field) -> Option<SlotSpec>;

    fn slot_mut(&mut self, field: Self::Field) -> Option<SlotMut<'_>>;
}

/// What the external chooser handed back
#[derive(Debug, Clone, PartialEq)]
pub enum PickResult {
    Picked(FileReference),
    /// The user closed the chooser; not an error
    Cancelled,
    /// I/O, permission or platform failure
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    #[error("File size must not exceed {}", format_size(*.limit))]
    TooLarge { size: u64, limit: u64 },

    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("Failed to pick file")]
    PickerFailed(String),

    #[error("{0} does not accept attachments")]
    UnknownSlot(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttachOutcome {
    Stored(FileReference),
    Cancelled,
    Rejected(AttachmentError),
}

/// Check a pick and store it in `field`.
///
/// Size and type are checked before anything is written, so a rejection
/// never touches the slot's previous value.
pub fn accept_pick<S: AttachmentSlots>(
    form: &mut S,
    field: S::Field,
    pick: PickResult,
    max_bytes: u64,
) -> AttachOutcome {
    use super::validation::FormField;

    let file = match pick {
        PickResult::Picked(file) => file,
        PickResult::Cancelled => return AttachOutcome::Cancelled,
        PickResult::Failed(reason) => {
            log::warn!("file picker failed for {}: {}", field.name(), reason);
            return AttachOutcome::Rejected(AttachmentError::PickerFailed(reason));
        }
    };

    let Some(slot) = S::slot_spec(field) else {
        return AttachOutcome::Rejected(AttachmentError::UnknownSlot(field.name()));
    };

    if file.size > max_bytes {
        log::info!(
            "rejected {} for {}: {} bytes over {} limit",
            file.name,
            field.name(),
            file.size,
            max_bytes
        );
        return AttachOutcome::Rejected(AttachmentError::TooLarge {
            size: file.size,
            limit: max_bytes,
        });
    }

    match file.kind() {
        Some(kind) if slot.kinds.contains(&kind) => {}
        _ => {
            return AttachOutcome::Rejected(AttachmentError::UnsupportedType(
                file.mime_type.clone(),
            ))
        }
    }

    match form.slot_mut(field) {
        Some(SlotMut::Single(slot)) => *slot = Some(file.clone()),
        Some(SlotMut::Multi(files)) => files.push(file.clone()),
        None => return AttachOutcome::Rejected(AttachmentError::UnknownSlot(field.name())),
    }
    AttachOutcome::Stored(file)
}

/// Remove one file from a slot.
///
/// Multi-file slots shift the remaining entries down; for single-file
/// slots only index 0 is meaningful.
pub fn remove_attachment<S: AttachmentSlots>(
    form: &mut S,
    field: S::Field,
    index: usize,
) -> Option<FileReference> {
    match form.slot_mut(field)? {
        SlotMut::Single(slot) if index == 0 => slot.take(),
        SlotMut::Single(_) => None,
        SlotMut::Multi(files) if index < files.len() => Some(files.remove(index)),
        SlotMut::Multi(_) => None,
    }
}

/// "512 B", "1.5 KB", "2.0 MB"
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::{FieldValue, FormField, StepDefinition};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Slot {
        Front,
        Photos,
        Note,
    }

    impl FormField for Slot {
        fn name(&self) -> &'static str {
            match self {
                Slot::Front => "front",
                Slot::Photos => "photos",
                Slot::Note => "note",
            }
        }

        fn label(&self) -> &'static str {
            self.name()
        }
    }

    #[derive(Default)]
    struct Docs {
        front: Option<FileReference>,
        photos: Vec<FileReference>,
        note: String,
    }

    impl FormSchema for Docs {
        type Field = Slot;

        fn steps() -> &'static [StepDefinition<Slot>] {
            &[]
        }

        fn value(&self, field: Slot) -> FieldValue<'_> {
            match field {
                Slot::Front => FieldValue::File(self.front.as_ref()),
                Slot::Photos => FieldValue::Files(&self.photos),
                Slot::Note => FieldValue::Text(&self.note),
            }
        }
    }

    impl AttachmentSlots for Docs {
        fn slot_spec(field: Slot) -> Option<SlotSpec> {
            match field {
                Slot::Front => Some(SlotSpec::single(IMAGES_OR_PDF)),
                Slot::Photos => Some(SlotSpec::multiple(&[AttachmentKind::Image])),
                Slot::Note => None,
            }
        }

        fn slot_mut(&mut self, field: Slot) -> Option<SlotMut<'_>> {
            match field {
                Slot::Front => Some(SlotMut::Single(&mut self.front)),
                Slot::Photos => Some(SlotMut::Multi(&mut self.photos)),
                Slot::Note => None,
            }
        }
    }

    fn image(name: &str, size: u64) -> FileReference {
        FileReference::new(name, "image/jpeg", name, size)
    }

    #[test]
    fn test_exact_ceiling_is_accepted() {
        let mut docs = Docs::default();
        let file = image("front.jpg", DEFAULT_MAX_ATTACHMENT_BYTES);
        let outcome = accept_pick(
            &mut docs,
            Slot::Front,
            PickResult::Picked(file.clone()),
            DEFAULT_MAX_ATTACHMENT_BYTES,
        );
        assert_eq!(outcome, AttachOutcome::Stored(file.clone()));
        assert_eq!(docs.front, Some(file));
    }

    #[test]
    fn test_one_byte_over_keeps_previous_value() {
        let mut docs = Docs::default();
        let previous = image("old.jpg", 10);
        docs.front = Some(previous.clone());

        let outcome = accept_pick(
            &mut docs,
            Slot::Front,
            PickResult::Picked(image("big.jpg", DEFAULT_MAX_ATTACHMENT_BYTES + 1)),
            DEFAULT_MAX_ATTACHMENT_BYTES,
        );
        assert!(matches!(
            outcome,
            AttachOutcome::Rejected(AttachmentError::TooLarge { .. })
        ));
        assert_eq!(docs.front, Some(previous));
    }

    #[test]
    fn test_too_large_message_names_limit() {
        let err = AttachmentError::TooLarge {
            size: 3 * 1024 * 1024,
            limit: DEFAULT_MAX_ATTACHMENT_BYTES,
        };
        assert_eq!(err.to_string(), "File size must not exceed 2.0 MB");
    }

    #[test]
    fn test_cancel_is_a_no_op() {
        let mut docs = Docs::default();
        let outcome = accept_pick(&mut docs, Slot::Front, PickResult::Cancelled, 100);
        assert_eq!(outcome, AttachOutcome::Cancelled);
        assert!(docs.front.is_none());
    }

    #[test]
    fn test_picker_failure_is_reported() {
        let mut docs = Docs::default();
        let outcome = accept_pick(
            &mut docs,
            Slot::Front,
            PickResult::Failed("permission denied".into()),
            100,
        );
        assert!(matches!(
            outcome,
            AttachOutcome::Rejected(AttachmentError::PickerFailed(_))
        ));
    }

    #[test]
    fn test_single_slot_replaces() {
        let mut docs = Docs::default();
        accept_pick(&mut docs, Slot::Front, PickResult::Picked(image("a.jpg", 1)), 100);
        accept_pick(&mut docs, Slot::Front, PickResult::Picked(image("b.jpg", 1)), 100);
        assert_eq!(docs.front.as_ref().map(|f| f.name.as_str()), Some("b.jpg"));
    }

    #[test]
    fn test_multi_slot_appends_and_removes_by_index() {
        let mut docs = Docs::default();
        for name in ["a.jpg", "b.jpg", "c.jpg"] {
            accept_pick(&mut docs, Slot::Photos, PickResult::Picked(image(name, 1)), 100);
        }
        docs.front = Some(image("front.jpg", 1));

        let removed = remove_attachment(&mut docs, Slot::Photos, 1);
        assert_eq!(removed.map(|f| f.name), Some("b.jpg".to_string()));
        let names: Vec<_> = docs.photos.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "c.jpg"]);
        assert!(docs.front.is_some());

        assert!(remove_attachment(&mut docs, Slot::Photos, 5).is_none());
    }

    #[test]
    fn test_wrong_type_rejected() {
        let mut docs = Docs::default();
        let pdf = FileReference::new("h", "application/pdf", "scan.pdf", 1);
        let outcome = accept_pick(&mut docs, Slot::Photos, PickResult::Picked(pdf), 100);
        assert!(matches!(
            outcome,
            AttachOutcome::Rejected(AttachmentError::UnsupportedType(_))
        ));
        assert!(docs.photos.is_empty());
    }

    #[test]
    fn test_non_slot_field() {
        let mut docs = Docs::default();
        let outcome = accept_pick(&mut docs, Slot::Note, PickResult::Picked(image("a.jpg", 1)), 100);
        assert_eq!(
            outcome,
            AttachOutcome::Rejected(AttachmentError::UnknownSlot("note"))
        );
    }

    #[test]
    fn test_kind_from_extension_when_mime_missing() {
        assert_eq!(AttachmentKind::detect("", "CNIC.JPG"), Some(AttachmentKind::Image));
        assert_eq!(AttachmentKind::detect("", "domicile.pdf"), Some(AttachmentKind::Pdf));
        assert_eq!(AttachmentKind::detect("", "notes.txt"), None);
        assert_eq!(AttachmentKind::detect("text/plain", "x.pdf"), None);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(2 * 1024 * 1024), "2.0 MB");
    }
}
