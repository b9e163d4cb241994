//! Result reporting - line-oriented output per candidate

use std::io::{self, Write};
use std::net::Ipv4Addr;

/// Writes one logical record per candidate according to the verbosity policy.
///
/// Default mode prints only hits (`<domain> --> <ip>`); misses are silent.
/// Verbose mode prefixes every record with a `gonna resolve` marker, so a
/// miss still leaves a trace of the attempt.
pub struct Reporter<W: Write> {
    out: W,
    verbose: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, verbose: bool) -> Self {
        Self { out, verbose }
    }

    /// Record the outcome of one candidate resolution.
    pub fn record(&mut self, domain: &str, addr: Option<Ipv4Addr>) -> io::Result<()> {
        match (addr, self.verbose) {
            (Some(ip), true) => writeln!(self.out, "gonna resolve {} --> {}", domain, ip),
            (Some(ip), false) => writeln!(self.out, "{} --> {}", domain, ip),
            (None, true) => writeln!(self.out, "gonna resolve {}", domain),
            (None, false) => Ok(()),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Reporter<io::Stdout> {
    /// Reporter writing to standard output.
    pub fn stdout(verbose: bool) -> Self {
        Self::new(io::stdout(), verbose)
    }
}
