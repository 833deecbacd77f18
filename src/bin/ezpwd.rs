//! ezpwd binary - EZCOD location codes and RSKEY keys from the shell

use anyhow::{bail, Context, Result};
use clap::ArgMatches;

use ezpwdrs::ezcod::{Ezcod, EzcodConfig};
use ezpwdrs::rskey::{RsKey, RsKeyConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = ezpwdrs::build_cli().get_matches();

    match matches.subcommand() {
        Some(("ezcod", sub_matches)) => match sub_matches.subcommand() {
            Some(("encode", m)) => handle_ezcod_encode(m),
            Some(("decode", m)) => handle_ezcod_decode(m),
            _ => bail!("Use 'ezpwd ezcod --help' for usage information"),
        },
        Some(("rskey", sub_matches)) => match sub_matches.subcommand() {
            Some(("encode", m)) => handle_rskey_encode(m),
            Some(("decode", m)) => handle_rskey_decode(m),
            _ => bail!("Use 'ezpwd rskey --help' for usage information"),
        },
        _ => bail!("No command specified\n\nUse 'ezpwd --help' for usage information"),
    }
}

/// Join a positional that may have been split on whitespace by the shell
fn joined(matches: &ArgMatches, id: &str) -> Result<String> {
    let parts: Vec<&str> = matches
        .get_many::<String>(id)
        .with_context(|| format!("{id} is required"))?
        .map(String::as_str)
        .collect();
    Ok(parts.join(" "))
}

fn handle_ezcod_encode(matches: &ArgMatches) -> Result<()> {
    let latitude = *matches
        .get_one::<f64>("latitude")
        .context("latitude is required")?;
    let longitude = *matches
        .get_one::<f64>("longitude")
        .context("longitude is required")?;

    let config = EzcodConfig::from_args(matches)?;
    let ezcod = Ezcod::new(config)?;
    let code = ezcod
        .encode(latitude, longitude)
        .with_context(|| format!("Failed to encode {latitude}, {longitude}"))?;
    println!("{code}");
    Ok(())
}

fn handle_ezcod_decode(matches: &ArgMatches) -> Result<()> {
    let code = joined(matches, "code")?;
    let ezcod = Ezcod::new(EzcodConfig::from_args(matches)?)?;
    let location = ezcod
        .decode(&code)
        .with_context(|| format!("Failed to decode {code:?}"))?;

    println!("latitude:   {:.8}", location.latitude);
    println!("longitude:  {:.8}", location.longitude);
    println!("accuracy:   {:.2} m", location.accuracy);
    println!("precision:  {}", location.precision);
    println!("confidence: {}", location.confidence);
    Ok(())
}

fn handle_rskey_encode(matches: &ArgMatches) -> Result<()> {
    let data = matches
        .get_one::<String>("data")
        .context("data is required")?;
    let rskey = RsKey::new(RsKeyConfig::from_args(matches)?)?;
    let key = rskey
        .encode_text(data)
        .with_context(|| format!("Failed to encode {data:?}"))?;
    println!("{key}");
    Ok(())
}

fn handle_rskey_decode(matches: &ArgMatches) -> Result<()> {
    let key = joined(matches, "key")?;
    let rskey = RsKey::new(RsKeyConfig::from_args(matches)?)?;
    let decoded = rskey
        .decode(&key)
        .with_context(|| format!("Failed to decode {key:?}"))?;

    println!("hex:        {}", decoded.hex);
    if let Some(text) = &decoded.utf8 {
        println!("utf8:       {text}");
    }
    println!("confidence: {}", decoded.confidence);
    Ok(())
}
