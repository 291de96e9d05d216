use crate::prelude::Error;
use axum::extract::Multipart;
use sandbox_proxy_core::submission::{FormField, Submission};

/// Drain a multipart body into an ordered [`Submission`].
///
/// Parts carrying a filename become file fields; everything else is text.
pub async fn read_submission(mut multipart: Multipart) -> Result<Submission, Error> {
    let mut fields = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::FormParse(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(|e| Error::FileRead {
                    field: name.clone(),
                    message: e.body_text(),
                })?;

                fields.push(FormField::File {
                    name,
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            None => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| Error::FormParse(format!("field '{name}': {}", e.body_text())))?;

                fields.push(FormField::Text { name, value });
            }
        }
    }

    Ok(Submission::new(fields))
}
