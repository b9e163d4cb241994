//! Subforge - brute-force subdomain discovery CLI
//!
//! Walks every label over the DNS alphabet for lengths 1..=max, prefixes each
//! to the given base domain, and prints the candidates that resolve.

use std::env;
use std::process;

use subforge::{
    domain::validate_base_domain, DnsResolver, Reporter, ScanConfig, Scanner, DEFAULT_MAX_LENGTH,
};

struct CliArgs {
    base_domain: String,
    verbose: bool,
    max_length: usize,
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let cli = match parse_args(&args) {
        Some(cli) => cli,
        None => {
            print_usage();
            process::exit(2);
        }
    };

    // Single process-wide resolver setup; nothing is attempted if it fails.
    let resolver = match DnsResolver::from_system() {
        Ok(resolver) => resolver,
        Err(e) => {
            eprintln!("cannot initialize network subsystem: {}", e);
            process::exit(1);
        }
    };

    let mut config = ScanConfig::new(cli.base_domain);
    config.max_length = cli.max_length;

    let scanner = Scanner::new(config, resolver);
    let mut reporter = Reporter::stdout(cli.verbose);

    if let Err(e) = scanner.run(&mut reporter).await {
        eprintln!("scan failed: {}", e);
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Option<CliArgs> {
    let mut verbose = false;
    let mut max_length = DEFAULT_MAX_LENGTH;
    let mut base_domain: Option<String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--verbose" => verbose = true,
            "--max-length" => {
                // Label totals are tracked in u64, which overflows past 12.
                max_length = iter
                    .next()?
                    .parse()
                    .ok()
                    .filter(|&n| (1..=12).contains(&n))?;
            }
            flag if flag.starts_with('-') => return None,
            positional => {
                if base_domain.is_some() {
                    return None;
                }
                base_domain = Some(positional.to_string());
            }
        }
    }

    let base_domain = validate_base_domain(&base_domain?).ok()?;
    Some(CliArgs {
        base_domain,
        verbose,
        max_length,
    })
}

fn print_usage() {
    println!("usage: subforge [--verbose] [--max-length <n>] <main-domain>");
}
