use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::Colorize;
use zoo_server::{ServerConfig, ZooServer};
use zoo_store::{Catalog, JsonFileStorage};
use zoo_types::{Animal, AnimalDraft, AnimalQuery};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let Cli { command, data, format } = cli;
    match command {
        Command::Serve(args) => cmd_serve(args, data),
        Command::List(args) => cmd_list(args, &data_path(data), &format),
        Command::Show(args) => cmd_show(args, &data_path(data), &format),
        Command::Add(args) => cmd_add(args, &data_path(data), &format),
    }
}

fn data_path(data: Option<PathBuf>) -> PathBuf {
    data.unwrap_or_else(|| ServerConfig::default().data_path)
}

fn open_catalog(path: &Path) -> anyhow::Result<Catalog> {
    Catalog::open(JsonFileStorage::new(path))
        .with_context(|| format!("failed to open catalog {}", path.display()))
}

/// Config file, then `PORT`, then command-line flags.
fn serve_config(
    args: &ServeArgs,
    data: Option<PathBuf>,
    port_var: Option<&str>,
) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_toml_file(path)?,
        None => ServerConfig::default(),
    };
    config = config.apply_port_var(port_var)?;
    if let Some(bind) = &args.bind {
        config.bind_addr = bind
            .parse()
            .with_context(|| format!("invalid --bind address: {bind}"))?;
    }
    if let Some(data) = data {
        config.data_path = data;
    }
    if let Some(public) = &args.public {
        config.public_dir = public.clone();
    }
    Ok(config)
}

fn cmd_serve(args: ServeArgs, data: Option<PathBuf>) -> anyhow::Result<()> {
    let port_var = std::env::var(zoo_server::config::PORT_ENV).ok();
    let config = serve_config(&args, data, port_var.as_deref())?;
    println!(
        "{} Serving {} on {}",
        "✓".green().bold(),
        config.data_path.display().to_string().bold(),
        format!("http://{}", config.bind_addr).cyan()
    );
    let server = ZooServer::open(config)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.serve())?;
    Ok(())
}

fn list_query(args: &ListArgs) -> AnimalQuery {
    let mut query = args
        .traits
        .iter()
        .fold(AnimalQuery::new(), |q, t| q.with_trait(t.as_str()));
    if let Some(diet) = &args.diet {
        query = query.with_diet(diet.as_str());
    }
    if let Some(species) = &args.species {
        query = query.with_species(species.as_str());
    }
    if let Some(name) = &args.name {
        query = query.with_name(name.as_str());
    }
    query
}

fn cmd_list(args: ListArgs, data: &Path, format: &OutputFormat) -> anyhow::Result<()> {
    let catalog = open_catalog(data)?;
    let animals = catalog.list(&list_query(&args));
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&animals)?),
        OutputFormat::Text => {
            if animals.is_empty() {
                println!("No animals match.");
            }
            for animal in &animals {
                print_animal(animal);
            }
        }
    }
    Ok(())
}

fn cmd_show(args: ShowArgs, data: &Path, format: &OutputFormat) -> anyhow::Result<()> {
    let catalog = open_catalog(data)?;
    let animal = catalog
        .get(&args.id)
        .with_context(|| format!("no animal with id {}", args.id))?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&animal)?),
        OutputFormat::Text => print_animal(&animal),
    }
    Ok(())
}

fn cmd_add(args: AddArgs, data: &Path, format: &OutputFormat) -> anyhow::Result<()> {
    let draft = AnimalDraft::new(args.name, args.species, args.diet, args.traits)?;
    let catalog = open_catalog(data)?;
    let animal = catalog.create(draft)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&animal)?),
        OutputFormat::Text => {
            println!("{} Added {}", "✓".green().bold(), animal.name.bold());
            print_animal(&animal);
        }
    }
    Ok(())
}

fn print_animal(animal: &Animal) {
    println!(
        "{}  {}  {} / {}",
        format!("#{}", animal.id).yellow(),
        animal.name.bold(),
        animal.species,
        animal.diet.cyan()
    );
    if !animal.personality_traits.is_empty() {
        println!("    traits: {}", animal.trait_labels().join(", ").dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn serve_args(argv: &[&str]) -> (ServeArgs, Option<PathBuf>) {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Command::Serve(args) => (args, cli.data),
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn serve_config_defaults() {
        let (args, data) = serve_args(&["zoo", "serve"]);
        let config = serve_config(&args, data, None).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn serve_flags_override_port_var() {
        let (args, data) = serve_args(&[
            "zoo", "serve", "--bind", "0.0.0.0:9000", "--data", "x.json",
        ]);
        let config = serve_config(&args, data, Some("8080")).unwrap();
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.data_path, PathBuf::from("x.json"));

        let (args, data) = serve_args(&["zoo", "serve"]);
        let config = serve_config(&args, data, Some("8080")).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
    }

    #[test]
    fn serve_config_file_is_base_layer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zoo.toml");
        std::fs::write(&path, "public_dir = \"www\"\nbind_addr = \"127.0.0.1:4000\"\n").unwrap();
        let path_arg = path.to_str().unwrap();

        let (args, data) = serve_args(&["zoo", "serve", "--config", path_arg]);
        let config = serve_config(&args, data, None).unwrap();
        assert_eq!(config.public_dir, PathBuf::from("www"));
        assert_eq!(config.bind_addr.port(), 4000);
    }

    #[test]
    fn bad_bind_is_error() {
        let (args, data) = serve_args(&["zoo", "serve", "--bind", "nowhere"]);
        assert!(serve_config(&args, data, None).is_err());
    }

    #[test]
    fn list_query_from_flags() {
        let cli =
            Cli::try_parse_from(["zoo", "list", "--trait", "Brave", "--species", "dog"]).unwrap();
        let Command::List(args) = cli.command else {
            panic!("wrong command");
        };
        let query = list_query(&args);
        assert_eq!(query.personality_traits, vec!["Brave"]);
        assert_eq!(query.species.as_deref(), Some("dog"));
        assert!(query.diet.is_none());
    }

    #[test]
    fn add_then_show_through_commands() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("animals.json");
        let data_arg = data.to_str().unwrap();

        let add = Cli::try_parse_from([
            "zoo", "--data", data_arg, "add", "--name", "Zoe", "--species", "cat", "--diet",
            "omnivore",
        ])
        .unwrap();
        run_command(add).unwrap();

        let catalog = open_catalog(&data).unwrap();
        assert_eq!(catalog.get("0").map(|a| a.name), Some("Zoe".to_string()));

        let show = Cli::try_parse_from(["zoo", "--data", data_arg, "show", "0"]).unwrap();
        run_command(show).unwrap();
        let missing = Cli::try_parse_from(["zoo", "--data", data_arg, "show", "9"]).unwrap();
        assert!(run_command(missing).is_err());
    }

    #[test]
    fn add_rejects_empty_name() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("animals.json");
        let data_arg = data.to_str().unwrap();
        let add = Cli::try_parse_from([
            "zoo", "--data", data_arg, "add", "--name", "", "--species", "cat", "--diet",
            "omnivore",
        ])
        .unwrap();
        assert!(run_command(add).is_err());
        assert!(!data.exists());
    }
}
