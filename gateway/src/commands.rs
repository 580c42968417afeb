use crate::CLAP_STYLING;
use clap::{arg, command};
use gateway_core::config::{
    DEFAULT_CONTENT_DIR, DEFAULT_DIRECTORY_URL, DEFAULT_EXPLORER_URL, DEFAULT_IMAGE_HOST,
    DEFAULT_LISTEN,
};
use std::net::SocketAddr;
use url::Url;

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("urbit-gateway")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("urbit-gateway")
        .about("Serves one page per Urbit ID. Runs the server when no subcommand is given.")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(
            arg!(-l --"listen" <ADDR>)
                .required(false)
                .help("Address to bind the HTTP server to")
                .env("GATEWAY_LISTEN")
                .value_parser(clap::value_parser!(SocketAddr))
                .default_value(DEFAULT_LISTEN),
        )
        .arg(
            arg!(-c --"content-dir" <PATH>)
                .required(false)
                .help("Directory of per-identifier markdown files")
                .env("GATEWAY_CONTENT_DIR")
                .default_value(DEFAULT_CONTENT_DIR),
        )
        .arg(
            arg!(--"directory-url" <URL>)
                .required(false)
                .help("Base URL of the network directory service")
                .env("GATEWAY_DIRECTORY_URL")
                .value_parser(clap::value_parser!(Url))
                .default_value(DEFAULT_DIRECTORY_URL),
        )
        .arg(
            arg!(--"image-host" <URL>)
                .required(false)
                .help("Host serving social preview cards")
                .env("GATEWAY_IMAGE_HOST")
                .default_value(DEFAULT_IMAGE_HOST),
        )
        .arg(
            arg!(--"explorer-url" <URL>)
                .required(false)
                .help("Network explorer linked from each page")
                .env("GATEWAY_EXPLORER_URL")
                .default_value(DEFAULT_EXPLORER_URL),
        )
        .arg(
            arg!(--"timeout" <SECONDS>)
                .required(false)
                .help("Directory request timeout in seconds")
                .value_parser(clap::value_parser!(u64).range(1..))
                .default_value("10"),
        )
        .subcommand_required(false)
        .subcommand(
            command!("resolve")
                .about("Print the rank and structural ancestry of an identifier, offline")
                .arg(arg!(<ID>).required(true).help("An @p such as ~sampel-palnet")),
        )
}
