//! Render command - run one dashboard session and export the charts.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;

use super::input::{read_payload_file, read_stdin_payload, runtime};
use crate::cli::OutputFormat;
use crate::config::{get_output_dir, load_layout};
use crate::api::HttpDataSource;
use crate::models::ChartPayload;
use crate::orchestrator::{Dashboard, Session, SessionOutcome};
use crate::visualization::{export_html, export_pngs, export_svgs, open_file, HTML_FILE_NAME};


/// Options for one render run.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub api_url: String,
    pub input: Option<PathBuf>,
    pub stdin: bool,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub layout: Option<PathBuf>,
    pub open: bool,
}


/// Run the render command.
pub fn run(options: RenderOptions) -> Result<()> {
    let layout = load_layout(options.layout.as_deref())?;
    let mut dashboard = Dashboard::new(&layout);
    let source = HttpDataSource::new(options.api_url.as_str());

    // A payload given on the command line is the "data ready" signal.
    let signal: LocalBoxFuture<'static, Option<ChartPayload>> = match (&options.input, options.stdin) {
        (Some(path), _) => future::ready(Some(read_payload_file(path)?)).boxed_local(),
        (None, true) => read_stdin_payload().boxed_local(),
        (None, false) => future::ready(None).boxed_local(),
    };

    let outcome = runtime()?.block_on(Session::new(&mut dashboard).run(&source, signal));
    match outcome {
        SessionOutcome::Rendered(origin) => log::info!("Dashboard data supplied by {origin}"),
        SessionOutcome::LoadFailed => {
            bail!("Chart data could not be loaded; existing output was left untouched")
        }
        SessionOutcome::Ignored => return Ok(()),
    }

    let output_dir = options.output.unwrap_or_else(get_output_dir);
    let written = export(&dashboard, &output_dir, options.format)?;

    for path in &written {
        println!("+ {}", path.display());
    }
    println!("Wrote {} file(s) to {}", written.len(), output_dir.display());

    if options.open {
        let target = match options.format {
            OutputFormat::Html => output_dir.join(HTML_FILE_NAME),
            OutputFormat::Svg | OutputFormat::Png => output_dir.clone(),
        };
        open_file(&target)?;
    }

    Ok(())
}


fn export(dashboard: &Dashboard, output_dir: &Path, format: OutputFormat) -> Result<Vec<PathBuf>> {
    match format {
        OutputFormat::Svg => export_svgs(dashboard.mounts(), output_dir),
        OutputFormat::Png => export_pngs(dashboard.mounts(), output_dir),
        OutputFormat::Html => {
            let path = output_dir.join(HTML_FILE_NAME);
            export_html(dashboard.mounts(), dashboard.tooltip(), &path)?;
            Ok(vec![path])
        }
    }
}
