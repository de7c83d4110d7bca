use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};

use tl_compare::catalog::{PanelCatalog, PanelDescriptor};
use tl_compare::color::ColorMap;
use tl_compare::data::loader::{companion_path, FREQUENCY_COLUMN, TL_COLUMN};

const F_START_HZ: u32 = 50;
const F_END_HZ: u32 = 5200;

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Leading number of a thickness string such as `"57mm"`.
fn thickness_mm(panel: &PanelDescriptor) -> f64 {
    let digits: String = panel
        .thickness
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().unwrap_or(50.0)
}

/// Field-incidence mass law with a dip around the coincidence frequency.
fn generate_tl(frequencies: &[f64], thickness: f64, noise_db: f64, rng: &mut SimpleRng) -> Vec<f64> {
    let surface_mass = 5.0 + 0.04 * thickness;
    let coincidence = (25_000.0 / thickness).log10();
    frequencies
        .iter()
        .map(|&f| {
            let mass_law = 20.0 * (surface_mass * f).log10() - 47.0;
            let dip = gaussian(f.log10(), coincidence, 0.12, 8.0);
            (mass_law - dip + rng.gauss(0.0, noise_db)).max(0.0)
        })
        .collect()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn write_narrowbands(path: &Path, frequencies: &[f64], tl: &[f64]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record([FREQUENCY_COLUMN, TL_COLUMN])?;
    for (f, v) in frequencies.iter().zip(tl) {
        writer.write_record([format!("{f:.0}"), format!("{v:.2}")])?;
    }
    writer.flush()?;
    Ok(())
}

/// Flat swatch in the panel's chart colour, standing in for a photo.
fn write_placeholder_image(path: &Path, color: [u8; 3]) -> Result<()> {
    let img = RgbImage::from_fn(300, 200, |x, y| {
        // Thin dark border so the swatch reads as a card.
        if x < 4 || y < 4 || x >= 296 || y >= 196 {
            Rgb([40, 40, 40])
        } else {
            Rgb(color)
        }
    });
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let dir = Path::new(".");
    let catalog = PanelCatalog::load(dir).context("loading panel catalog")?;
    let colors = ColorMap::new(catalog.names());
    let mut rng = SimpleRng::new(42);

    let frequencies: Vec<f64> = (F_START_HZ..=F_END_HZ).map(f64::from).collect();

    let mut written = 0;
    for panel in catalog.iter() {
        let data_path = companion_path(dir, &panel.name);
        if data_path.exists() {
            log::info!("Keeping existing {}", data_path.display());
        } else {
            let tl = generate_tl(&frequencies, thickness_mm(panel), 1.5, &mut rng);
            write_narrowbands(&data_path, &frequencies, &tl)?;
            written += 1;
        }

        let image_path = dir.join(&panel.image);
        if !image_path.exists() {
            let c = colors.color_for(&panel.name);
            write_placeholder_image(&image_path, [c.r(), c.g(), c.b()])?;
        }
    }

    println!(
        "Wrote {written} NarrowBand files ({} frequencies each) for {} panels",
        frequencies.len(),
        catalog.len()
    );
    Ok(())
}
