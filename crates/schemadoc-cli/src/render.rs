//! Implementation of the `render` and `anchors` commands

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use schemadoc_core::{parse_sdl, HtmlRenderer, RenderConfig, Schema};

/// Options for the render command
pub(crate) struct RenderOptions {
    pub schema: PathBuf,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub fragment: bool,
    pub title: Option<String>,
    pub open: bool,
}

/// Read and parse an SDL file
pub(crate) fn load_schema(path: &Path) -> Result<Schema> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    parse_sdl(&source).with_context(|| format!("failed to load schema '{}'", path.display()))
}

/// Explicit configuration file, or `schemadoc.toml` next to the schema, or
/// defaults
pub(crate) fn load_config(explicit: Option<&Path>, schema: &Path) -> Result<RenderConfig> {
    if let Some(path) = explicit {
        return RenderConfig::load(path)
            .with_context(|| format!("failed to load configuration '{}'", path.display()));
    }

    let dir = schema
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let discovered = RenderConfig::discover(dir)
        .with_context(|| format!("failed to load configuration from '{}'", dir.display()))?;
    Ok(discovered.unwrap_or_default())
}

/// Where to write the document; `None` means stdout
pub(crate) fn output_path(schema: &Path, output: Option<PathBuf>) -> Option<PathBuf> {
    match output {
        Some(path) if path.as_os_str() == "-" => None,
        Some(path) => Some(path),
        None => Some(schema.with_extension("html")),
    }
}

pub(crate) fn render(options: RenderOptions) -> Result<()> {
    let schema = load_schema(&options.schema)?;
    let mut config = load_config(options.config.as_deref(), &options.schema)?;
    if options.fragment {
        config.standalone = false;
    }
    if let Some(title) = options.title {
        config.title = title;
    }

    let html = HtmlRenderer::new(&schema)
        .with_config(config)
        .render()
        .with_context(|| format!("failed to render '{}'", options.schema.display()))?;

    match output_path(&options.schema, options.output) {
        None => {
            io::stdout()
                .write_all(html.as_bytes())
                .context("failed to write to stdout")?;
            if options.open {
                warn!("--open has no effect when writing to stdout");
            }
        }
        Some(path) => {
            fs::write(&path, &html)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "wrote documentation");
            println!("Generated {}", path.display());

            if options.open {
                open_in_browser(&path)?;
            }
        }
    }

    Ok(())
}

pub(crate) fn print_anchors(schema_path: &Path, config: Option<&Path>) -> Result<()> {
    let schema = load_schema(schema_path)?;
    let config = load_config(config, schema_path)?;
    for anchor in HtmlRenderer::new(&schema).with_config(config).anchors() {
        println!("{anchor}");
    }
    Ok(())
}

fn open_in_browser(path: &Path) -> Result<()> {
    let url = format!("file://{}", path.canonicalize()?.display());

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(&url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(&url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", &url])
            .spawn()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SDL: &str = "type Query { id: ID! }\n";

    fn options(schema: PathBuf) -> RenderOptions {
        RenderOptions {
            schema,
            output: None,
            config: None,
            fragment: false,
            title: None,
            open: false,
        }
    }

    #[test]
    fn test_output_path() {
        let schema = Path::new("api/schema.graphql");
        assert_eq!(
            output_path(schema, None),
            Some(PathBuf::from("api/schema.html"))
        );
        assert_eq!(output_path(schema, Some(PathBuf::from("-"))), None);
        assert_eq!(
            output_path(schema, Some(PathBuf::from("out.html"))),
            Some(PathBuf::from("out.html"))
        );
    }

    #[test]
    fn test_render_writes_next_to_schema() {
        let dir = TempDir::new().unwrap();
        let schema = dir.path().join("schema.graphql");
        fs::write(&schema, SDL).unwrap();

        render(options(schema)).unwrap();

        let html = fs::read_to_string(dir.path().join("schema.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("id=\"graphql-type-Query\""));
    }

    #[test]
    fn test_render_fragment_with_title_and_discovered_config() {
        let dir = TempDir::new().unwrap();
        let schema = dir.path().join("schema.graphql");
        let output = dir.path().join("docs.html");
        fs::write(&schema, SDL).unwrap();
        fs::write(
            dir.path().join("schemadoc.toml"),
            "[navigation]\nquery_label = \"Query\"\n",
        )
        .unwrap();

        render(RenderOptions {
            output: Some(output.clone()),
            fragment: true,
            ..options(schema)
        })
        .unwrap();

        let html = fs::read_to_string(output).unwrap();
        assert!(html.starts_with("<div class=\"floating-container\">"));
        assert!(html.contains("title=\"Query root type\">Query</a>"));
    }

    #[test]
    fn test_explicit_config_is_used() {
        let dir = TempDir::new().unwrap();
        let schema = dir.path().join("schema.graphql");
        let config = dir.path().join("custom.toml");
        fs::write(&config, "title = \"Custom\"\n").unwrap();

        let loaded = load_config(Some(config.as_path()), &schema).unwrap();
        assert_eq!(loaded.title, "Custom");
    }

    #[test]
    fn test_invalid_schema_reports_path() {
        let dir = TempDir::new().unwrap();
        let schema = dir.path().join("broken.graphql");
        fs::write(&schema, "type Query {").unwrap();

        let err = load_schema(&schema).unwrap_err();
        assert!(err.to_string().contains("broken.graphql"));
    }

    #[test]
    fn test_missing_schema_file() {
        let dir = TempDir::new().unwrap();
        assert!(load_schema(&dir.path().join("absent.graphql")).is_err());
    }
}
