use crate::prelude::{eprintln, println, *};
use sandbox_proxy_core::submission::{FormField, Submission};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

#[derive(Debug, clap::Args)]
pub struct ExecOptions {
    /// File holding the code to run. Reads stdin when omitted or "-"
    pub code_path: Option<PathBuf>,

    /// Files to attach to the submission (repeatable)
    #[clap(long = "file")]
    pub files: Vec<PathBuf>,

    /// Pretty-print the backend reply
    #[clap(long)]
    pub pretty: bool,
}

pub async fn run(options: ExecOptions, global: crate::Global) -> Result<()> {
    let config = global.backend.resolve();
    let submission = build_submission(&options).await?;

    if global.verbose {
        eprintln!("Backend: {}", config.base_url);
        eprintln!("Model: {}", config.model);
        eprintln!("Attached files: {}", submission.attached_files().len());
    }

    let reply = crate::sandbox::proxy_submission(&config, &submission).await?;

    let output = if options.pretty {
        serde_json::to_string_pretty(&reply)?
    } else {
        serde_json::to_string(&reply)?
    };
    println!("{output}");

    Ok(())
}

async fn build_submission(options: &ExecOptions) -> Result<Submission> {
    let code = read_code(options.code_path.as_deref()).await?;
    let mut fields = vec![FormField::text("code", code)];

    for path in &options.files {
        let bytes = tokio::fs::read(path)
            .await
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let mime = mime_from_extension(&file_name);

        fields.push(FormField::file("file", file_name, Some(mime), bytes));
    }

    Ok(Submission::new(fields))
}

async fn read_code(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path)
            .await
            .wrap_err_with(|| format!("Failed to read code from {}", path.display())),
        _ => {
            let mut code = String::new();
            tokio::io::stdin()
                .read_to_string(&mut code)
                .await
                .wrap_err("Failed to read code from stdin")?;
            Ok(code)
        }
    }
}

/// Infer a media type from the file extension.
fn mime_from_extension(filename: &str) -> &'static str {
    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();

    match ext.as_str() {
        "txt" | "log" => "text/plain",
        "py" => "text/x-python",
        "csv" => "text/csv",
        "tsv" => "text/tab-separated-values",
        "json" => "application/json",
        "xml" => "application/xml",
        "html" | "htm" => "text/html",
        "md" => "text/markdown",
        "yaml" | "yml" => "application/yaml",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}
