use std::{fs::File, io::{BufWriter, Write}};

use anyhow::{Context, Result};
use openmander_weights::{GwtHeader, WeightsProduct};
use serde::Serialize;

#[derive(Serialize)]
struct Export<'a> {
    header: Option<&'a GwtHeader>,
    /// Original id of each dense index.
    ids: Vec<&'a str>,
    #[serde(flatten)]
    product: &'a WeightsProduct,
}

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::ExportArgs) -> Result<()> {
    let mut reader = super::open_reader(cli, &args.input)?;
    let product = reader.read()
        .with_context(|| format!("Failed to read GWT file: {}", args.input.display()))?;

    let ids = reader.relabeling()
        .map(|r| r.ids().iter().map(|id| id.as_ref()).collect())
        .unwrap_or_default();
    let doc = Export { header: reader.header(), ids, product: &product };

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, &doc)
        .context("Failed to write JSON")?;
    writeln!(writer)?;
    writer.flush()?;

    tracing::info!(observations = product.len(), output = ?args.output, "[export] wrote weights");
    reader.close()?;
    Ok(())
}
