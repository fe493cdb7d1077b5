use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::region_finding::{
    codec::{ImageReader, ImageWriter, TiffImageReader, TiffImageWriter},
    common::error::{RegionError, Result},
    finder::RegionFinder,
    pipeline::types::{PipelineConfig, RegionSummary},
    pixels::Color,
};

pub struct RegionPipeline<R: ImageReader, W: ImageWriter> {
    reader: R,
    writer: W,
    config: PipelineConfig,
}

impl RegionPipeline<TiffImageReader, TiffImageWriter> {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            reader: TiffImageReader,
            writer: TiffImageWriter,
            config,
        }
    }
}

impl<R: ImageReader, W: ImageWriter> RegionPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: PipelineConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(RegionError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                tracing::warn!(width, height, max, "Image dimensions exceed maximum");
                return Err(RegionError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Decodes `input_data`, finds regions matching `target`, and writes the recolored image
    /// to `output`.
    #[instrument(skip(self, input_data, output, target), fields(input_size = input_data.len(), target = %target))]
    pub fn process(&self, input_data: &[u8], target: Color, output: &mut dyn Write) -> Result<RegionSummary> {
        info!("Starting region detection");

        let image = {
            let _span = tracing::info_span!("decode_image").entered();
            self.reader.read_image(input_data)?
        };
        let (width, height) = (image.width(), image.height());

        {
            let _span = tracing::info_span!("validate_dimensions", width, height).entered();
            self.validate_dimensions(width, height)?;
        }

        let mut finder = RegionFinder::with_image(image, self.config.finder.clone());

        let summary = {
            let _span = tracing::info_span!("find_regions").entered();
            finder.find_regions(target)?;
            RegionSummary::new(width, height, finder.regions()?, finder.largest_region()?)
        };

        let recolored = {
            let _span = tracing::info_span!("recolor_image").entered();
            finder.recolor_image()?;
            finder.take_recolored_image()?
        };

        {
            let _span = tracing::info_span!("encode_image").entered();
            self.writer.write_image(&recolored, output, &self.config.output)?;
        }

        info!(
            width,
            height,
            regions = summary.region_count,
            largest = summary.largest_region_size,
            "Region detection complete"
        );
        Ok(summary)
    }

    /// Runs [`RegionPipeline::process`] on a file. The output path is only written once the
    /// whole run has succeeded.
    #[instrument(skip(self, input_path, output_path, target))]
    pub fn process_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
        target: Color,
    ) -> Result<RegionSummary> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Processing file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                RegionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut encoded = Vec::new();
        let summary = self.process(&input_data, target, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file", bytes = encoded.len()).entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                RegionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(summary)
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PipelineConfig) {
        self.config = config;
    }
}
