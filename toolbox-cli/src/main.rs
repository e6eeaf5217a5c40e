use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use toolbox_http::{HttpRuntimeConfig, HttpRuntimeConfigBuilder, serve};
use toolbox_tools::{InMemoryToolRegistry, standard_registry};

mod catalog;
mod error;
mod run;

use catalog::OutputFormat;
use error::CliError;

#[derive(Parser, Debug)]
#[command(name = "toolbox", version)]
#[command(about = "Toolbox Online - run the utility catalog from the command line or over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List tools, grouped in catalog order
    List {
        /// Only tools in this category (display label, e.g. "Text Utilities")
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Search names, descriptions and keywords
    Search {
        query: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Show one tool's descriptor and page metadata
    Show { slug: String },
    /// Run a tool; input comes from the argument or stdin
    Run {
        slug: String,
        /// Plain text or a JSON options object
        input: Option<String>,
    },
    /// Start the HTTP server (configured from TOOLBOX_* variables)
    Serve {
        /// Listen address, overrides TOOLBOX_BIND_ADDR
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
}

fn load_config(bind: Option<SocketAddr>) -> Result<HttpRuntimeConfig, CliError> {
    let mut builder = HttpRuntimeConfigBuilder::from_env()?;
    if let Some(addr) = bind {
        builder = builder.bind_addr(addr);
    }
    Ok(builder.build()?)
}

/// The standard catalog wired to the same backends `serve` would use.
fn registry() -> Result<InMemoryToolRegistry, CliError> {
    Ok(standard_registry(load_config(None)?.tools_config())?)
}

fn execute(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::List { category, format } => {
            let registry = registry()?;
            let tools = catalog::list(&registry, category.as_deref())?;
            println!("{}", catalog::render(&tools, format)?);
        }
        Commands::Search { query, format } => {
            let registry = registry()?;
            println!("{}", catalog::render(&registry.search(&query), format)?);
        }
        Commands::Show { slug } => {
            println!("{}", catalog::show(&registry()?, &slug)?);
        }
        Commands::Run { slug, input } => {
            let input = match input {
                Some(input) => input,
                None => run::read_input(std::io::stdin().lock())?,
            };
            println!("{}", run::run(&registry()?, &slug, input)?);
        }
        Commands::Serve { bind } => {
            let config = load_config(bind)?;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(serve(config))?;
        }
    }
    Ok(())
}

fn main() {
    // Initialize JSON logging once.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let env_filter = match "info".parse() {
        Ok(directive) => env_filter.add_directive(directive),
        Err(_) => env_filter,
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .json()
        .try_init();

    let cli = Cli::parse();

    if let Err(e) = execute(cli.command) {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
