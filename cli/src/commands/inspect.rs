use anyhow::{Context, Result};
use openmander_weights::Weights;

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::InspectArgs) -> Result<()> {
    let mut reader = super::open_reader(cli, &args.input)?;
    let product = reader.read()
        .with_context(|| format!("Failed to read GWT file: {}", args.input.display()))?;
    let weights = Weights::from_product(&product)?;

    if let Some(header) = reader.header() {
        println!("file:          {}", args.input.display());
        println!("shapefile:     {}", header.shp);
        println!("id variable:   {}", header.id_var);
        println!("flag:          {}", header.flag);
        println!("declared n:    {}", header.n);
    }
    println!("observations:  {}", weights.node_count());
    println!("edges:         {}", weights.edge_count());
    println!("islands:       {}", weights.islands().len());
    println!("symmetric:     {}", weights.is_symmetric());

    if cli.verbose > 0 {
        let cards = weights.cardinalities();
        let max = cards.iter().copied().max().unwrap_or(0);
        let mean = if cards.is_empty() { 0.0 } else { weights.edge_count() as f64 / cards.len() as f64 };
        println!("mean degree:   {mean:.3}");
        println!("max degree:    {max}");
    }

    reader.close()?;
    Ok(())
}
