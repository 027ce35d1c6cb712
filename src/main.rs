use access_audit::analysis::DEFAULT_FAILED_LOGIN_THRESHOLD;
use access_audit::commands;
use anyhow::Result;
use clap::{CommandFactory, Parser};

#[derive(Parser)]
#[command(name = "access-audit")]
#[command(about = "Analyze web server access logs for traffic and suspicious activity", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the log file to analyze
    #[arg(required_unless_present = "completions")]
    log_file: Option<String>,

    /// Number of top IP addresses to display
    #[arg(long = "top_ips", default_value_t = 5)]
    top_ips: usize,

    /// Number of top endpoints to display
    #[arg(long = "top_endpoints", default_value_t = 5)]
    top_endpoints: usize,

    /// Output CSV file name
    #[arg(long = "output_file", default_value = "log_analysis_results.csv")]
    output_file: String,

    /// Failed-login count above which a source address is flagged
    #[arg(long = "failed_login_threshold", default_value_t = DEFAULT_FAILED_LOGIN_THRESHOLD)]
    failed_login_threshold: usize,

    /// Generate a shell completion script and exit
    #[arg(long, value_enum, exclusive = true)]
    completions: Option<clap_complete::Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "access-audit", &mut std::io::stdout());
        return Ok(());
    }

    // required_unless_present guarantees the path is set past this point
    let log_file = cli
        .log_file
        .ok_or_else(|| anyhow::anyhow!("missing log file argument"))?;

    commands::analyze::run(
        &log_file,
        cli.top_ips,
        cli.top_endpoints,
        &cli.output_file,
        cli.failed_login_threshold,
    )
}
