use clap::Parser;
use mip_tiler::config::{DEFAULT_MIN_MIP_SIZE, DEFAULT_TILE_SIZE, MipmapConfig};
use mip_tiler::{output, preflight, pyramid};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "mip-tiler")]
#[command(about = "Generate mipmaps and tiles from a PNG image")]
#[command(long_about = "\
Generate mipmaps and tiles from a PNG image

Each level halves the previous one (Lanczos3) until a side would drop below
--min-mip-size. Levels wider or taller than --tile-size are also cut into
tiles. Output lands next to the source:

  rock.png
  rock_Mipmaps/
  ├── Mip_0/
  │   ├── mip_0.png
  │   ├── tile_0_0_0.png       # tile_<level>_<col>_<row>
  │   └── tile_0_1_0.png
  └── Mip_1/
      └── mip_1.png

Every file keeps the source's color mode and PNG metadata. Reruns overwrite.")]
#[command(version = version_string())]
struct Cli {
    /// Source PNG image path
    source: PathBuf,

    /// Minimum mip size
    #[arg(long, default_value_t = DEFAULT_MIN_MIP_SIZE)]
    min_mip_size: u32,

    /// Tile size
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
    tile_size: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = MipmapConfig {
        min_mip_size: cli.min_mip_size,
        tile_size: cli.tile_size,
    };

    // User mistakes: report and exit cleanly, before anything is written.
    if let Err(e) = preflight::check_source(&cli.source) {
        println!("{}", output::format_preflight_error(&e));
        return Ok(());
    }
    if let Err(e) = config.validate() {
        println!("{}", output::format_preflight_error(&e));
        return Ok(());
    }

    let summary = pyramid::generate_pyramid(&cli.source, &config, output::print_pyramid_event)?;
    output::print_summary(&summary);

    Ok(())
}
