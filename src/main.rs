use anyhow::Result;
use clap::{Parser, Subcommand};

use branchspace::commands::{derive, namespace, nodeport};
use branchspace::config::NamingConfig;
use branchspace::output;

#[derive(Parser)]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
#[command(propagate_version = true)]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "Emit the result as JSON on stdout and keep chatter on stderr"
    )]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Derive a DNS-safe namespace from a branch name", visible_alias = "ns")]
    Namespace {
        #[arg(
            help = "The branch name to derive the namespace from",
            allow_hyphen_values = true
        )]
        branch: String,

        #[arg(long, default_value = "", help = "Prefix joined onto the derived namespace")]
        prefix: String,

        #[arg(
            long,
            default_value = "-kube",
            allow_hyphen_values = true,
            help = "Suffix stripped from the branch name"
        )]
        suffix: String,
    },

    #[command(about = "Hash a namespace to a node port in [30000, 32768)", visible_alias = "port")]
    Nodeport {
        #[arg(help = "The namespace to hash into a port", allow_hyphen_values = true)]
        namespace: String,
    },

    #[command(about = "Derive both namespace and node port for a branch", visible_alias = "id")]
    Derive {
        #[arg(
            help = "The branch name to derive the deployment identity from",
            allow_hyphen_values = true
        )]
        branch: String,

        #[arg(long, default_value = "", help = "Prefix joined onto the derived namespace")]
        prefix: String,

        #[arg(
            long,
            default_value = "-kube",
            allow_hyphen_values = true,
            help = "Suffix stripped from the branch name"
        )]
        suffix: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    output::set_machine_output(cli.json);
    colored::control::set_override(should_use_color() && !cli.json);

    match cli.command {
        Commands::Namespace {
            branch,
            prefix,
            suffix,
        } => {
            namespace::execute(&branch, &NamingConfig::new(prefix, suffix))?;
        }
        Commands::Nodeport { namespace } => {
            nodeport::execute(&namespace)?;
        }
        Commands::Derive {
            branch,
            prefix,
            suffix,
        } => {
            derive::execute(&branch, &NamingConfig::new(prefix, suffix))?;
        }
    }

    Ok(())
}

fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok()
        || std::env::var("CLICOLOR").map(|v| v == "0").unwrap_or(false)
    {
        return false;
    }
    true
}
