use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use alignscript::{Code, Config, Environment, Geometry, Rect, Runtime, compile_actions};
use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "alignscript", version)]
struct Cli {
    /// Log pipeline diagnostics to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the tokens of an expression as JSON.
    Tokens(SourceArgs),
    /// Print the syntax tree of an expression as JSON.
    Ast(SourceArgs),
    /// Print the compiled instructions of an expression as JSON.
    Code(SourceArgs),
    /// Compile and run an expression.
    Eval(EvalArgs),
    /// Compile every action of a configuration file.
    Check(ConfigArgs),
    /// Write the example configuration.
    Init(InitArgs),
    /// Compute where an action would place the window.
    Place(PlaceArgs),
}

#[derive(Parser, Debug)]
struct SourceArgs {
    /// Expression source, e.g. "screen.width * 0.5".
    source: String,
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Expression source.
    source: String,

    /// Variable binding `NAME=VALUE`; may be repeated.
    #[arg(long = "var", value_parser = parse_var)]
    vars: Vec<(String, f64)>,

    /// Screen bounds `x,y,width,height`, exposed as `screen.*`.
    #[arg(long)]
    screen: Option<Rect>,

    /// Window frame `x,y,width,height`, exposed as `window.*` (requires --screen).
    #[arg(long, requires = "screen")]
    window: Option<Rect>,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Configuration JSON (defaults to ~/.window_alignment.json).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct InitArgs {
    /// Output path (defaults to ~/.window_alignment.json).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overwrite an existing file.
    #[arg(long)]
    force: bool,
}

#[derive(Parser, Debug)]
struct PlaceArgs {
    /// Configuration JSON (defaults to ~/.window_alignment.json).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Action index (0-based).
    #[arg(long)]
    action: usize,

    /// Screen bounds `x,y,width,height`.
    #[arg(long)]
    screen: Rect,

    /// Window frame `x,y,width,height`.
    #[arg(long)]
    window: Option<Rect>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Tokens(args) => cmd_tokens(args),
        Command::Ast(args) => cmd_ast(args),
        Command::Code(args) => cmd_code(args),
        Command::Eval(args) => cmd_eval(args),
        Command::Check(args) => cmd_check(args),
        Command::Init(args) => cmd_init(args),
        Command::Place(args) => cmd_place(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn parse_var(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.trim().to_owned(), value))
}

fn config_path(arg: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(path) = arg {
        return Ok(path);
    }
    let home = std::env::var_os("HOME").context("HOME is not set; pass --config")?;
    Ok(Config::default_path(Path::new(&home)))
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_tokens(args: SourceArgs) -> anyhow::Result<()> {
    let tokens = alignscript::tokenize(&args.source)?;
    print_json(&tokens)
}

fn cmd_ast(args: SourceArgs) -> anyhow::Result<()> {
    let tokens = alignscript::tokenize(&args.source)?;
    let expr = alignscript::parse(&tokens)?;
    print_json(&expr)
}

fn cmd_code(args: SourceArgs) -> anyhow::Result<()> {
    let code = Code::compile(&args.source)?;
    print_json(&code)
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let code = Code::compile(&args.source)?;
    let vars: HashMap<String, f64> = args.vars.into_iter().collect();
    let geometry = args.screen.map(|screen| Geometry::new(screen, args.window));

    let runtime = Runtime::new(|name: &str| {
        vars.get(name)
            .copied()
            .or_else(|| geometry.and_then(|g| g.resolve(name)))
    });

    match runtime.run(&code)? {
        Some(value) => println!("{value}"),
        None => println!("none"),
    }
    Ok(())
}

fn cmd_check(args: ConfigArgs) -> anyhow::Result<()> {
    let path = config_path(args.config)?;
    let config = Config::load(&path)?;
    let actions = compile_actions(&config)?;

    for (index, action) in actions.iter().enumerate() {
        let mut parts = Vec::new();
        if let Some(m) = &action.move_code {
            parts.push(format!("move ({} + {} ops)", m.x.len(), m.y.len()));
        }
        if let Some(r) = &action.resize_code {
            parts.push(format!(
                "resize ({} + {} ops)",
                r.width.len(),
                r.height.len()
            ));
        }
        println!(
            "action {index}: key_code={} modifiers={:?} {}",
            action.hot_key.key_code,
            action.hot_key.modifiers,
            parts.join(", ")
        );
    }
    println!("ok: {} action(s) in {}", actions.len(), path.display());
    Ok(())
}

fn cmd_init(args: InitArgs) -> anyhow::Result<()> {
    let path = config_path(args.config)?;
    if path.exists() && !args.force {
        anyhow::bail!("'{}' already exists (use --force)", path.display());
    }
    Config::example().save(&path)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_place(args: PlaceArgs) -> anyhow::Result<()> {
    let path = config_path(args.config)?;
    let config = Config::load(&path)?;
    let actions = compile_actions(&config)?;
    let action = actions.get(args.action).with_context(|| {
        format!(
            "action {} out of range ({} configured)",
            args.action,
            actions.len()
        )
    })?;

    let geometry = Geometry::new(args.screen, args.window);
    let placement = action.placement(&geometry)?;
    print_json(&placement)
}
