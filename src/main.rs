use anyhow::Context;
use color_regions::logger::{self, error, info};
use color_regions::region_finding::{
    Color, FinderConfig, OutputConfig, PipelineConfig, RegionPipeline, TiffCompression,
};

const DEFAULT_INPUT: &str = "input.tiff";
const DEFAULT_OUTPUT: &str = "output.tiff";
const DEFAULT_TARGET: &str = "50,200,50";

fn main() -> anyhow::Result<()> {
    logger::init();

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let target: Color = args
        .next()
        .as_deref()
        .unwrap_or(DEFAULT_TARGET)
        .parse()
        .context("target color must be #RRGGBB or r,g,b")?;

    info!("Starting color region finder...");

    let config = PipelineConfig::builder()
        .finder(FinderConfig::default())
        .output(
            OutputConfig::builder()
                .compression(TiffCompression::DeflateBalanced)
                .build(),
        )
        .build();
    let pipeline = RegionPipeline::new(config);

    info!("Target color: {}", target);
    info!(
        "Color threshold: {}, minimum region size: {}",
        pipeline.config().finder.color_threshold,
        pipeline.config().finder.min_region_size
    );

    match pipeline.process_file(&input, &output, target) {
        Ok(summary) => info!(
            "Found {} regions, largest has {} points; recolored image written to {}",
            summary.region_count, summary.largest_region_size, output
        ),
        Err(e) => {
            error!("Region finding failed: {}", e);
            return Err(e).with_context(|| format!("processing {input}"));
        }
    }

    Ok(())
}
