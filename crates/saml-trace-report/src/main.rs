//! SAML Trace Report CLI
//!
//! Prints a compact text report of a browser SAML tracer export.
//!
//! Usage:
//!   saml-trace-report <trace.json | -> [OPTIONS]

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use saml_trace_report::{load_trace, read_trace, write_report, FormatConfig, UrlStyle};
use tracing_subscriber::EnvFilter;

/// SAML Trace Report
#[derive(Parser, Debug)]
#[command(name = "saml-trace-report")]
#[command(
    author,
    version,
    about = "Summarize a browser SAML trace export as readable text"
)]
struct Args {
    /// SAML trace export (JSON), or `-` to read stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Print the request id in front of each request
    #[arg(short = 'i', long, env = "SAML_TRACE_REQUEST_ID")]
    request_id: bool,

    /// Skip GET requests for resources ending with .ico, .jpg, .png or .css
    #[arg(short = 's', long = "no-static", env = "SAML_TRACE_NO_STATIC")]
    filter_static: bool,

    /// Show the Set-Cookie header of each response
    #[arg(short = 'c', long, env = "SAML_TRACE_COOKIES")]
    cookies: bool,

    /// Print the response status on its own line
    #[arg(short = 'r', long, env = "SAML_TRACE_EXTRA_RESPONSE_LINE")]
    extra_response_line: bool,

    /// Length above which URLs and cookie values are shortened
    #[arg(
        short = 'u',
        long,
        default_value = "100",
        value_parser = clap::value_parser!(u16).range(10..1000),
        env = "SAML_TRACE_URL_MAX_LENGTH"
    )]
    url_max_length: u16,

    /// Cut URLs at the maximum length instead of shortening their query
    #[arg(long)]
    clip_urls: bool,

    /// Verbose logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn format_config(&self) -> FormatConfig {
        FormatConfig {
            show_request_id: self.request_id,
            filter_static: self.filter_static,
            max_length: usize::from(self.url_max_length),
            show_cookies: self.cookies,
            extra_response_line: self.extra_response_line,
            url_style: if self.clip_urls {
                UrlStyle::Clip
            } else {
                UrlStyle::Shorten
            },
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let trace = if args.input.as_os_str() == "-" {
        read_trace(io::stdin().lock()).context("Failed to load trace from stdin")?
    } else {
        load_trace(&args.input)
            .with_context(|| format!("Failed to load trace {}", args.input.display()))?
    };

    let config = args.format_config();
    write_report(&mut io::stdout().lock(), &trace, &config)?;
    Ok(())
}
