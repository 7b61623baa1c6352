//! Command-line interface for agent-rs scenario simulation
//!
//! # Usage
//!
//! ```bash
//! agent-cli simulate TSLA 15
//! agent-cli ask "What if Tesla's revenue grows 15% next year?"
//! agent-cli --format json simulate MSFT -100
//! agent-cli --baseline ./baseline.json repl
//! agent-cli call scenario_simulator '{"symbol": "AAPL", "growth_percent": 8}'
//! ```

use agent_core::{Agent, Context};
use agent_scenario::{ResponseFormat, ScenarioAgent, ScenarioConfig};
use agent_tools::ToolRegistry;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "agent-cli")]
#[command(about = "What-if revenue growth scenarios for agent-rs", long_about = None)]
struct Args {
    /// Output format: markdown, table or json
    #[arg(short, long, global = true)]
    format: Option<ResponseFormat>,

    /// JSON file with baseline financials (defaults to the built-in sample)
    #[arg(short, long, global = true)]
    baseline: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project a symbol forward by a growth percentage
    Simulate {
        /// Ticker symbol, e.g. TSLA
        symbol: String,
        /// Revenue growth in percent, negative for a decline
        #[arg(allow_negative_numbers = true)]
        growth: f64,
    },
    /// Answer a natural-language what-if question
    Ask {
        /// The question, e.g. "What if Tesla's revenue grows 15%?"
        ///
        /// Everything after `ask` is taken as the question, including words
        /// such as `-5%`, so global flags go before the subcommand.
        #[arg(
            required = true,
            num_args = 1..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        query: Vec<String>,
    },
    /// Interactive question loop
    Repl,
    /// List registered tools and their input schemas
    Tools,
    /// Invoke a registered tool with raw JSON parameters
    Call {
        /// Tool name
        tool: String,
        /// JSON parameters
        params: String,
    },
}

fn scenario_config(args: &Args) -> anyhow::Result<ScenarioConfig> {
    let mut config = ScenarioConfig::default().with_env()?;
    if let Some(path) = &args.baseline {
        config.baseline_path = Some(path.clone());
    }
    if let Some(format) = args.format {
        config.default_format = format;
    }
    config.validate()?;
    Ok(config)
}

fn print_help() {
    println!(
        "Ask a what-if question, e.g. \"What if Tesla's revenue grows 15% next year?\"\n\
         Commands:\n  \
           /tools  - list tools\n  \
           /help   - show this help\n  \
           /exit   - quit"
    );
}

async fn repl(agent: &ScenarioAgent, registry: &ToolRegistry) -> anyhow::Result<()> {
    print_help();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut context = Context::new().with_session_id("repl");

    loop {
        print!("scenario> ");
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            println!("\nGoodbye!");
            break;
        }

        match input.trim() {
            "" => {}
            "/exit" | "/quit" => {
                println!("Goodbye!");
                break;
            }
            "/help" => print_help(),
            "/tools" => print_tools(registry)?,
            query => {
                let response = agent.process(query.to_string(), &mut context).await?;
                println!("{response}\n");
            }
        }
    }

    Ok(())
}

fn print_tools(registry: &ToolRegistry) -> anyhow::Result<()> {
    for def in registry.definitions() {
        println!("{}\n  {}", def.name, def.description);
        println!("{}\n", serde_json::to_string_pretty(&def.input_schema)?);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_config = agent_utils::Config::from_env()?.with_app_name("agent-cli");
    agent_utils::init_tracing_with(&log_config);

    let args = Args::parse();
    let config = scenario_config(&args)?;

    info!(
        baseline = ?config.baseline_path,
        format = %config.default_format,
        "Starting agent-cli"
    );

    let agent = ScenarioAgent::from_config(&config)?;
    let registry = ToolRegistry::new();
    agent.register_tools(&registry);

    let formatter = config.default_format.formatter();

    match args.command {
        Command::Simulate { symbol, growth } => {
            match agent.simulator().simulate(&symbol, growth) {
                Ok(result) => println!("{}", formatter.format_result(&result)),
                Err(err) if err.is_outcome() => println!("{}", formatter.format_error(&err)),
                Err(err) => return Err(err.into()),
            }
        }
        Command::Ask { query } => {
            let query = query.join(" ");
            let context = Context::new().with_response_format(config.default_format.to_string());
            match agent.try_process(&query, &context) {
                Some(response) => println!("{response}"),
                None => println!(
                    "{}",
                    formatter.format_no_intent(&agent.simulator().symbols())
                ),
            }
        }
        Command::Repl => repl(&agent, &registry).await?,
        Command::Tools => print_tools(&registry)?,
        Command::Call { tool, params } => {
            let params: serde_json::Value = serde_json::from_str(&params)?;
            let output = registry.execute(&tool, params).await?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
