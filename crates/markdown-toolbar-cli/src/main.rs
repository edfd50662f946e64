use anyhow::{Context, Result, bail};
use markdown_toolbar_config::Config;
use markdown_toolbar_engine::{RopeHost, StyleResult, TextHost, Toolbar};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::{env, fs, process};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Style(String),
    Heading,
    ListStyles,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    action: Action,
    file: Option<PathBuf>,
    start: Option<usize>,
    end: Option<usize>,
    in_place: bool,
}

impl Args {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut args = args.into_iter();
        let action = match args.next().as_deref() {
            Some("heading") => Action::Heading,
            Some("styles") => Action::ListStyles,
            Some(name) if !name.starts_with('-') => Action::Style(name.to_string()),
            Some(flag) => bail!("expected a style name, found {flag}"),
            None => bail!("missing style name"),
        };

        let mut parsed = Args {
            action,
            file: None,
            start: None,
            end: None,
            in_place: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--start" => parsed.start = Some(offset_value(&arg, args.next())?),
                "--end" => parsed.end = Some(offset_value(&arg, args.next())?),
                "--in-place" => parsed.in_place = true,
                flag if flag.starts_with("--") => bail!("unknown option {flag}"),
                path if parsed.file.is_none() => parsed.file = Some(PathBuf::from(path)),
                extra => bail!("unexpected argument {extra}"),
            }
        }

        if parsed.in_place && parsed.file.is_none() {
            bail!("--in-place needs a FILE");
        }
        Ok(parsed)
    }

    /// Selection to start from; a caret at the end of the text by default
    fn selection(&self, text_len: usize) -> std::ops::Range<usize> {
        let start = self.start.or(self.end).unwrap_or(text_len);
        let end = self.end.unwrap_or(start);
        start..end
    }
}

fn offset_value(flag: &str, value: Option<String>) -> Result<usize> {
    let value = value.with_context(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .with_context(|| format!("{flag} expects a byte offset, got {value:?}"))
}

fn usage(program: &str) {
    eprintln!("Usage: {program} <style|heading|styles> [FILE] [--start N] [--end N] [--in-place]");
    eprintln!("Reads stdin when FILE is omitted. Offsets are UTF-8 byte offsets.");
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn run(args: &Args, config: &Config) -> Result<()> {
    let registry = config.registry()?;

    let style = match &args.action {
        Action::ListStyles => {
            let mut stdout = io::stdout().lock();
            for name in registry.names() {
                writeln!(stdout, "{name}")?;
            }
            return Ok(());
        }
        Action::Style(name) => Some(name.as_str()),
        Action::Heading => None,
    };

    let text = read_input(args.file.as_ref())?;
    let mut host = RopeHost::new(&text).with_max_len(config.max_len());
    host.set_selection(args.selection(text.len()));

    let mut toolbar = Toolbar::with_registry(host, registry);
    if let Some(mode) = config.forced_insert_mode() {
        toolbar = toolbar.with_insert_mode(mode);
    }

    let result: StyleResult = match style {
        Some(name) => toolbar.apply_style(name)?,
        None => toolbar.cycle_heading(),
    };
    log::debug!("Replaced selection with {:?}", result.text);

    let host = toolbar.into_host();
    let output = host.text();
    let selection = host.selection();

    match (&args.file, args.in_place) {
        (Some(path), true) => {
            fs::write(path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Updated {}", path.display());
        }
        _ => io::stdout().write_all(output.as_bytes())?,
    }
    eprintln!("selection: {}..{}", selection.start, selection.end);
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut argv = env::args();
    let program = argv.next().unwrap_or_else(|| "markdown-toolbar".to_string());

    let args = match Args::parse(argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            usage(&program);
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Config file location: {}", Config::config_path().display());
            process::exit(1);
        }
    };

    if let Err(e) = run(&args, &config) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
