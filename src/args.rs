use clap::builder::TypedValueParser;
use clap::{value_parser, Arg, Command};

fn parity_arg(default: &'static str, range: std::ops::RangeInclusive<u64>) -> Arg {
    Arg::new("parity")
        .short('p')
        .long("parity")
        .help("Parity symbols appended to the code")
        .value_name("N")
        .default_value(default)
        .value_parser(value_parser!(u64).range(range).map(|v| v as usize))
}

fn precision_arg() -> Arg {
    Arg::new("precision")
        .short('l')
        .long("precision")
        .help("Position symbols (1-12, 9 is about 3 m)")
        .value_name("SYMBOLS")
        .default_value("9")
        .value_parser(value_parser!(u64).range(1..=12).map(|v| v as usize))
}

fn separator_arg(name: &'static str, help: &'static str, values: [&'static str; 3]) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .value_name("STYLE")
        .value_parser(values)
}

fn size_arg() -> Arg {
    Arg::new("size")
        .short('s')
        .long("size")
        .help("Payload size in bytes")
        .value_name("BYTES")
        .required(true)
        .value_parser(value_parser!(u64).range(1..=18).map(|v| v as usize))
}

/// Command-line interface for the `ezpwd` binary
pub fn build_cli() -> Command {
    Command::new("ezpwd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reed-Solomon protected location codes and keys")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("ezcod")
                .visible_alias("e")
                .about("Latitude/longitude location codes")
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("encode")
                        .visible_alias("enc")
                        .about("Encode a latitude and longitude")
                        .arg(
                            Arg::new("latitude")
                                .help("Latitude in degrees (-90 to 90)")
                                .required(true)
                                .allow_negative_numbers(true)
                                .value_parser(value_parser!(f64))
                                .index(1),
                        )
                        .arg(
                            Arg::new("longitude")
                                .help("Longitude in degrees (-180 to 180)")
                                .required(true)
                                .allow_negative_numbers(true)
                                .value_parser(value_parser!(f64))
                                .index(2),
                        )
                        .arg(parity_arg("1", 1..=5))
                        .arg(precision_arg())
                        .arg(separator_arg(
                            "chunk-separator",
                            "Glyph between groups of three",
                            ["space", "dash", "none"],
                        ))
                        .arg(separator_arg(
                            "parity-separator",
                            "Glyph between position and parity",
                            ["dot", "bang", "none"],
                        )),
                )
                .subcommand(
                    Command::new("decode")
                        .visible_alias("dec")
                        .about("Decode a location code")
                        .arg(
                            Arg::new("code")
                                .help("Location code, e.g. \"R3U 08M PVT.D\"")
                                .required(true)
                                .num_args(1..)
                                .index(1),
                        )
                        .arg(parity_arg("1", 1..=5))
                        .arg(precision_arg()),
                ),
        )
        .subcommand(
            Command::new("rskey")
                .visible_alias("k")
                .about("Byte payloads as dashed keys")
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("encode")
                        .visible_alias("enc")
                        .about("Encode text or 0x-prefixed hex as a key")
                        .arg(
                            Arg::new("data")
                                .help("Payload: text, or hex with a 0x prefix")
                                .required(true)
                                .index(1),
                        )
                        .arg(size_arg())
                        .arg(parity_arg("3", 2..=5))
                        .arg(
                            Arg::new("stride")
                                .long("stride")
                                .help("Symbols between dashes (0 for none)")
                                .value_name("N")
                                .default_value("5")
                                .value_parser(value_parser!(usize)),
                        ),
                )
                .subcommand(
                    Command::new("decode")
                        .visible_alias("dec")
                        .about("Decode a key")
                        .arg(
                            Arg::new("key")
                                .help("Key, e.g. 000G4-0YYYU-XYQWE")
                                .required(true)
                                .num_args(1..)
                                .index(1),
                        )
                        .arg(size_arg())
                        .arg(parity_arg("3", 2..=5)),
                ),
        )
}
