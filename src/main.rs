use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use hollywood_graph::{Hollywood, IngestConfig};

#[derive(Parser, Debug)]
#[command(name = "hollywood", about = "Degrees of separation between actors")]
struct Cli {
    /// Movie list, one `movie/actor/actor/...` line per film.
    #[arg(long, default_value = "movies.txt")]
    data: PathBuf,

    /// Field separator used in the movie list.
    #[arg(long, default_value_t = '/')]
    delimiter: char,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    /// Log graph construction and queries to stderr.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Movies and distance statistics for one actor.
    Actor { name: String },
    /// Actor and movie path between two actors.
    Path { from: String, to: String },
    /// One representative actor per connected component.
    Components,
    /// Approximate number of actors connected to each name.
    Count { names: Vec<String> },
    /// Average actor-hop distance for each name.
    Number { names: Vec<String> },
    /// Repeat actor queries for a while and report throughput.
    Bench {
        name: String,
        #[arg(long, default_value_t = 10)]
        seconds: u64,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Ok(delimiter) = u8::try_from(cli.delimiter) else {
        bail!("delimiter must be a single-byte character, got {:?}", cli.delimiter);
    };
    let config = IngestConfig::default().with_delimiter(delimiter);
    let hw = Hollywood::load(&cli.data, &config)
        .with_context(|| format!("failed to load {}", cli.data.display()))?;

    match &cli.command {
        Command::Actor { name } => print_actor(&hw, name, cli.json),
        Command::Path { from, to } => print_path(&hw, from, to, cli.json),
        Command::Components => print_components(&hw, cli.json),
        Command::Count { names } => print_counts(&hw, names, cli.json),
        Command::Number { names } => print_numbers(&hw, names, cli.json),
        Command::Bench { name, seconds } => bench(&hw, name, *seconds),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_actor(hw: &Hollywood, name: &str, as_json: bool) -> Result<()> {
    let summary = hw.actor_details(name)?.summary();
    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    println!("Actor: {}", summary.name);
    println!("Movies ({}): {}", summary.movies.len(), summary.movies.join(", "));
    println!("Average distance: {}", summary.distance_average);
    println!(
        "Maximum distance: {} ({})",
        summary.distance_maximum, summary.actor_maximum
    );
    println!("Component size: {}", summary.component_size);
    Ok(())
}

fn print_path(hw: &Hollywood, from: &str, to: &str, as_json: bool) -> Result<()> {
    let actor = hw.actor_details(from)?;
    let length = actor.actor_path_length(to)?;
    let actors = actor.actor_path(to)?;
    let movies = actor.movie_path(to)?;

    if as_json {
        let length = length.is_finite().then_some(length); // JSON has no infinity
        let value = json!({ "from": from, "to": to, "length": length, "actors": actors, "movies": movies });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }
    match (actors, movies) {
        (Some(actors), Some(movies)) => {
            println!("Length: {length}");
            println!("Actors: {}", actors.join(" -> "));
            println!("Movies: {}", movies.join(" -> "));
        }
        _ => println!("No path between {from} and {to}"),
    }
    Ok(())
}

fn print_components(hw: &Hollywood, as_json: bool) -> Result<()> {
    let reps = hw.connected_components();
    if as_json {
        let value = json!({ "count": hw.connected_components_count(), "representatives": reps });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }
    println!("Connected components: {}", hw.connected_components_count());
    for rep in reps {
        println!("  {rep}");
    }
    Ok(())
}

fn print_counts(hw: &Hollywood, names: &[String], as_json: bool) -> Result<()> {
    let mut rows = Vec::with_capacity(names.len());
    for name in names {
        rows.push((name.as_str(), hw.connected_actors_count(name)?));
    }
    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for (name, count) in rows {
            println!("{name}: {count}");
        }
    }
    Ok(())
}

fn print_numbers(hw: &Hollywood, names: &[String], as_json: bool) -> Result<()> {
    let mut rows = Vec::with_capacity(names.len());
    for name in names {
        rows.push((name.as_str(), hw.hollywood_number(name)?));
    }
    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for (name, number) in rows {
            println!("{name}: {number}");
        }
    }
    Ok(())
}

fn bench(hw: &Hollywood, name: &str, seconds: u64) -> Result<()> {
    hw.actor_details(name)?; // fail fast on a bad name
    let budget = Duration::from_secs(seconds.max(1));
    let start = Instant::now();
    let mut count: u64 = 0;
    while start.elapsed() <= budget {
        hw.actor_details(name)?;
        count += 1;
    }
    let per_minute = count as f64 * 60.0 / start.elapsed().as_secs_f64();
    println!("{count} queries in {:.1}s ({per_minute:.0} per minute)", start.elapsed().as_secs_f64());
    Ok(())
}
