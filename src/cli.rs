//! Command line arguments.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "subnet-calc")]
#[command(version, about = "IPv4 subnet calculator", long_about = None)]
pub struct Cli {
    /// Addresses to convert (w.x.y.z/n); interactive mode when omitted
    #[arg(value_name = "CIDR")]
    pub cidrs: Vec<String>,

    /// Print results as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Lowest accepted prefix length
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=32))]
    pub min_prefix: Option<u8>,

    /// Highest accepted prefix length
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=32))]
    pub max_prefix: Option<u8>,

    /// log4rs configuration file
    #[arg(long, value_name = "FILE")]
    pub log_config: Option<String>,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_shot() {
        let cli = Cli::parse_from(["subnet-calc", "--json", "10.0.0.5/30", "192.168.0.1/24"]);
        assert!(cli.json);
        assert_eq!(cli.cidrs, vec!["10.0.0.5/30", "192.168.0.1/24"]);
        assert_eq!(cli.min_prefix, None);
    }

    #[test]
    fn test_parse_bounds() {
        let cli = Cli::parse_from(["subnet-calc", "--min-prefix", "1", "--max-prefix", "30"]);
        assert!(cli.cidrs.is_empty());
        assert_eq!(cli.min_prefix, Some(1));
        assert_eq!(cli.max_prefix, Some(30));
        assert!(Cli::try_parse_from(["subnet-calc", "--max-prefix", "33"]).is_err());
    }
}
