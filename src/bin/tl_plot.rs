use std::path::Path;

use anyhow::{bail, Context, Result};

use tl_compare::color::dataset_palette;
use tl_compare::compare::compare_files;
use tl_compare::config::{Settings, SETTINGS_FILE};
use tl_compare::data::loader::discover;
use tl_compare::render::{self, ChartSpec};

fn main() -> Result<()> {
    env_logger::init();

    let settings = Settings::load(Path::new(SETTINGS_FILE)).context("loading settings")?;

    let files = discover(&settings.data_dir)
        .with_context(|| format!("scanning {}", settings.data_dir.display()))?;
    if files.is_empty() {
        bail!(
            "no *_NarrowBands.txt files in {}",
            settings.data_dir.display()
        );
    }

    let curves = compare_files(&files, settings.window)?;
    let colors = dataset_palette(curves.len());
    let traces = render::assemble_traces(&curves, &colors, settings.window);

    let output = settings.output_path();
    render::png::render(
        &output,
        &ChartSpec::comparison(settings.window),
        &traces,
        settings.image_size,
    )?;

    println!("Wrote {} curves to {}", curves.len(), output.display());
    Ok(())
}
