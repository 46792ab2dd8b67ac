//! Application run: logger init and the lister with its catch-all error boundary.

use std::io::{self, Write};

use crate::cli::Args;
use crate::core::models::CatalogSource;
use crate::core::report;

/// Printed after a runtime error.
pub const REMEDIATION_HINT: &str = "\
Make sure the Generative Language API is enabled for your key:
  https://aistudio.google.com/app/apikey";

/// Initialize env_logger on stderr so records never mix with the reports on stdout.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .target(env_logger::Target::Stderr)
    .try_init();
}

/// Fetch the catalog once and write the three reports to `out`.
/// Any failure is reported on `out` instead of being returned; nothing is rendered
/// unless the fetch succeeded.
pub async fn run_lister<S, W>(source: &S, out: &mut W)
where
    S: CatalogSource,
    W: Write,
{
    let models = match source.list_models().await {
        Ok(models) => models,
        Err(e) => return report_error(out, &e),
    };
    if let Err(e) = report::write_all(out, &models) {
        return report_error(out, &e);
    }
    let _ = write!(out, "\n\n");
    let _ = out.flush();
}

/// Print `❌ Error: <message>` and the remediation hint.
pub fn report_error<W: Write>(out: &mut W, error: &dyn std::error::Error) {
    log::error!("Listing models failed: {}", error);
    let _ = writeln!(out, "❌ Error: {}", error);
    let _ = writeln!(out, "\n{}", REMEDIATION_HINT);
    let _ = write!(out, "\n\n");
    let _ = out.flush();
}

/// Run against stdout.
pub async fn run_to_stdout<S: CatalogSource>(source: &S) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_lister(source, &mut out).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{CatalogError, ModelDescriptor};
    use std::cell::Cell;

    struct StubCatalog {
        models: Vec<ModelDescriptor>,
        calls: Cell<usize>,
    }

    impl StubCatalog {
        fn new(models: Vec<ModelDescriptor>) -> Self {
            Self {
                models,
                calls: Cell::new(0),
            }
        }
    }

    impl CatalogSource for StubCatalog {
        async fn list_models(&self) -> Result<Vec<ModelDescriptor>, CatalogError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.models.clone())
        }
    }

    struct FailingCatalog;

    impl CatalogSource for FailingCatalog {
        async fn list_models(&self) -> Result<Vec<ModelDescriptor>, CatalogError> {
            Err(CatalogError::Api {
                status: 403,
                message: "Permission denied".to_string(),
            })
        }
    }

    fn model(name: &str, display: &str, methods: &[&str], input: Option<u64>) -> ModelDescriptor {
        ModelDescriptor {
            name: name.to_string(),
            display_name: display.to_string(),
            supported_generation_methods: methods.iter().map(|s| s.to_string()).collect(),
            input_token_limit: input,
            ..Default::default()
        }
    }

    fn three_models() -> Vec<ModelDescriptor> {
        vec![
            model("models/a", "A", &["generateContent"], Some(1000)),
            model("models/vision-pro", "Vision Pro", &["generateContent"], Some(2000)),
            model("models/embed", "Embed", &["embedContent"], None),
        ]
    }

    async fn render<S: CatalogSource>(source: &S) -> String {
        let mut buf = Vec::new();
        run_lister(source, &mut buf).await;
        String::from_utf8(buf).unwrap()
    }

    /// Split the output into the three report bodies.
    fn sections(text: &str) -> (String, String, String) {
        let gen_title = report::generation_title();
        let (catalog, rest) = text.split_once(&gen_title).unwrap();
        let (generation, multimodal) = rest.split_once(report::MULTIMODAL_TITLE).unwrap();
        (catalog.to_string(), generation.to_string(), multimodal.to_string())
    }

    #[tokio::test]
    async fn three_reports_select_the_expected_models() {
        let stub = StubCatalog::new(three_models());
        let text = render(&stub).await;
        let (catalog, generation, multimodal) = sections(&text);

        for name in ["models/a", "models/vision-pro", "models/embed"] {
            assert!(catalog.contains(&format!("Model: {}\n", name)), "{}", name);
        }

        assert!(generation.contains("✅ models/a\n   Max tokens: 1000\n"));
        assert!(generation.contains("✅ models/vision-pro\n   Max tokens: 2000\n"));
        assert!(!generation.contains("models/embed"));
        assert_eq!(generation.matches("✅").count(), 2);

        assert!(multimodal.contains("🖼️  models/vision-pro\n   Display: Vision Pro\n"));
        assert_eq!(multimodal.matches("🖼️").count(), 1);
    }

    #[tokio::test]
    async fn catalog_is_fetched_once() {
        let stub = StubCatalog::new(three_models());
        let _ = render(&stub).await;
        assert_eq!(stub.calls.get(), 1);
    }

    #[tokio::test]
    async fn fetch_failure_prints_error_and_no_reports() {
        let text = render(&FailingCatalog).await;
        assert!(text.starts_with("❌ Error: API error (403): Permission denied\n"));
        assert!(text.contains(REMEDIATION_HINT));
        assert!(!text.contains(report::CATALOG_TITLE));
        assert!(!text.contains(&report::generation_title()));
        assert!(!text.contains(report::MULTIMODAL_TITLE));
    }

    #[tokio::test]
    async fn repeated_runs_are_byte_identical() {
        let stub = StubCatalog::new(three_models());
        let first = render(&stub).await;
        let second = render(&stub).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn output_ends_with_blank_lines() {
        let stub = StubCatalog::new(three_models());
        let text = render(&stub).await;
        assert!(text.ends_with("Display: Vision Pro\n\n\n"));
    }
}
