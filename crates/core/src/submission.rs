use crate::types::AttachedFile;

/// Name of the form field carrying the code snippet.
pub const CODE_FIELD: &str = "code";

/// A single decoded multipart form entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    /// A plain text field.
    Text { name: String, value: String },
    /// A field whose part declared a filename.
    File {
        name: String,
        file_name: String,
        content_type: Option<String>,
        bytes: Vec<u8>,
    },
}

impl FormField {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn file(
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: Option<&str>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self::File {
            name: name.into(),
            file_name: file_name.into(),
            content_type: content_type.map(str::to_string),
            bytes: bytes.into(),
        }
    }

    /// Form field name.
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }

    /// Field value as text. File bytes are decoded lossily.
    pub fn as_text(&self) -> String {
        match self {
            Self::Text { value, .. } => value.clone(),
            Self::File { bytes, .. } => String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

/// Ordered collection of form fields, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    fields: Vec<FormField>,
}

impl Submission {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Value of the first `code` field, if any.
    pub fn code(&self) -> Option<String> {
        self.fields
            .iter()
            .find(|field| field.name() == CODE_FIELD)
            .map(FormField::as_text)
    }

    /// Every non-`code` file field, in submission order.
    ///
    /// Duplicated names are kept. Text fields other than `code` are ignored.
    pub fn attached_files(&self) -> Vec<AttachedFile> {
        self.fields
            .iter()
            .filter(|field| field.name() != CODE_FIELD)
            .filter_map(to_attached_file)
            .collect()
    }
}

/// Convert a file field into an [`AttachedFile`]. Returns `None` for text fields.
pub fn to_attached_file(field: &FormField) -> Option<AttachedFile> {
    match field {
        FormField::Text { .. } => None,
        FormField::File {
            file_name,
            content_type,
            bytes,
            ..
        } => Some(AttachedFile {
            name: file_name.clone(),
            content: String::from_utf8_lossy(bytes).into_owned(),
            content_type: content_type.clone().unwrap_or_default(),
        }),
    }
}
