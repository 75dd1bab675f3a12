use anyhow::Result;
use clap::Parser;
use gg_codec::library::LibraryHandle;
use gg_codec::{analyze, decode, encode};
use gg_core::config::{CodecConfig, DecodeMode, MatchStrategy};

pub mod cli;
pub mod convert;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let config = resolve_config(&cli)?;

    // Load and prepare the input: grayscale, optional resize, pad the
    // width up to a multiple of 9, optional inversion.
    let mut raster = convert::load_gray(&cli.input)?;
    log::info!(
        "loaded {} ({}x{})",
        cli.input.display(),
        raster.width,
        raster.height
    );
    if let Some(width) = cli.scale {
        raster = convert::resize_gray(&raster, width)?;
    }
    let mut raster = convert::pad_to_cell_width(raster);
    if cli.invert {
        raster.invert();
    }

    let handle = LibraryHandle::new(config.extended_charset);
    let library = handle.get()?;

    let text = encode::encode(&raster, &config, &library)?;
    match cli.out {
        Some(ref path) => std::fs::write(path, &text)?,
        None => println!("{text}"),
    }

    if let Some(ref path) = cli.reconstruct {
        let mode = if cli.flat {
            DecodeMode::Flat
        } else {
            config.decode_mode
        };
        let rebuilt = decode::decode(&text, mode, &library)?;
        convert::save_gray(&rebuilt, path)?;
    }

    if let Some(ref path) = cli.average {
        let averaged = analyze::average_blocks(&raster)?;
        convert::save_gray(&averaged, path)?;
    }

    if let Some(ref path) = cli.delta {
        // compare the prepared input against its own reconstruction;
        // cropping would change the grid shape, so encode uncropped here
        let full = if config.crop_output {
            let uncropped = CodecConfig {
                crop_output: false,
                ..config.clone()
            };
            encode::encode(&raster, &uncropped, &library)?
        } else {
            text.clone()
        };
        let rebuilt = decode::decode(&full, config.decode_mode, &library)?;
        let (diff, average_delta) = analyze::delta(&rebuilt, &raster)?;
        log::info!("average per-block delta: {average_delta}");
        convert::save_gray(&diff, path)?;
    }

    Ok(())
}

/// Resolve configuration: file first, CLI flags override.
fn resolve_config(cli: &cli::Cli) -> Result<CodecConfig> {
    let mut config = match cli.config {
        Some(ref path) => gg_core::config::load_config(path)?,
        None => CodecConfig::default(),
    };

    if let Some(v) = cli.black_threshold {
        config.black_threshold = v;
    }
    if let Some(v) = cli.white_threshold {
        config.white_threshold = v;
    }
    if let Some(ref strategy) = cli.strategy {
        config.strategy = match strategy.as_str() {
            "band" => MatchStrategy::BandSearch,
            "accumulate" => MatchStrategy::AccumulatingSearch,
            _ => {
                log::warn!("unknown strategy '{strategy}', keeping the default");
                config.strategy
            }
        };
    }
    if cli.no_crop {
        config.crop_output = false;
    }
    if cli.seven_bit {
        config.extended_charset = false;
    }
    if cli.flat {
        config.decode_mode = DecodeMode::Flat;
    }

    config.clamp_all();
    Ok(config)
}
