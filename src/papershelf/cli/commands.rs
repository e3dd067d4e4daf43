use super::page::render_page;
use super::render::{render_facets, render_help, render_messages, render_view};
use super::setup::{Cli, Commands, FilterArgs};
use clap::Parser;
use directories::ProjectDirs;
use papershelf::api::{CatalogApi, CmdMessage, CmdResult};
use papershelf::browser::open_target;
use papershelf::config::{ShelfConfig, CONFIG_KEYS};
use papershelf::error::Result;
use papershelf::filter::FilterSelection;
use papershelf::index::parse_position;
use papershelf::model::Facet;
use papershelf::session::{Interaction, Outcome, Session};
use papershelf::store::fs::JsonFileSource;
use papershelf::view::{ImageResolver, ViewMode};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const PROJECT_CONFIG_DIR: &str = ".papershelf";
const PROMPT: &str = "papershelf> ";

struct AppContext {
    api: CatalogApi,
    mode: ViewMode,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Config does not need the catalog.
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&cwd, key.as_deref(), value.as_deref(), use_color(&cli));
    }

    let ctx = init_context(&cli, &cwd);

    match cli.command {
        Some(Commands::Browse { filters }) => handle_browse(&ctx, &filters),
        Some(Commands::Facets { facet }) => handle_facets(&ctx, facet),
        Some(Commands::Open {
            index,
            filters,
            print,
        }) => handle_open(&ctx, &index, &filters, print),
        Some(Commands::Export { out, filters }) => handle_export(&ctx, &out, &filters),
        Some(Commands::Shell) => handle_shell(&ctx),
        Some(Commands::Config { .. }) => Ok(()),
        None => handle_browse(&ctx, &FilterArgs::default()),
    }
}

/// Logs go to stderr: `RUST_LOG` wins, otherwise `warn`, or `debug` with `-v`.
fn init_logging(cli: &Cli) {
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(!cli.no_color && io::stderr().is_terminal())
        .with_writer(io::stderr)
        .try_init();
}

fn use_color(cli: &Cli) -> bool {
    !cli.no_color && console::colors_enabled()
}

fn config_dirs(cwd: &Path) -> Vec<PathBuf> {
    let mut dirs = vec![cwd.join(PROJECT_CONFIG_DIR)];
    if let Some(proj_dirs) = ProjectDirs::from("org", "papershelf", "papershelf") {
        dirs.push(proj_dirs.config_dir().to_path_buf());
    }
    dirs
}

fn init_context(cli: &Cli, cwd: &Path) -> AppContext {
    let config = ShelfConfig::discover(&config_dirs(cwd)).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        ShelfConfig::default()
    });

    let catalog_path = cli
        .catalog
        .clone()
        .unwrap_or_else(|| cwd.join(&config.catalog));
    let mode = cli.view.unwrap_or(config.view);
    debug!(catalog = %catalog_path.display(), %mode, "starting");

    let images = ImageResolver::new().with_default_image(config.default_image);
    let api = CatalogApi::load(&JsonFileSource::new(&catalog_path), images);

    AppContext {
        api,
        mode,
        use_color: use_color(cli),
    }
}

fn handle_browse(ctx: &AppContext, filters: &FilterArgs) -> Result<()> {
    let result = ctx.api.browse(&filters.selection(), ctx.mode);
    print_result(ctx, &result);
    Ok(())
}

fn handle_facets(ctx: &AppContext, facet: Option<Facet>) -> Result<()> {
    let result = ctx.api.facets(facet);
    print!("{}", render_facets(&result.facets, ctx.use_color));
    print_messages(ctx, &result.messages);
    Ok(())
}

fn handle_open(ctx: &AppContext, index: &str, filters: &FilterArgs, print: bool) -> Result<()> {
    let position = parse_position(index)?;
    let result = ctx.api.activate(&filters.selection(), ctx.mode, position)?;
    let Some(target) = &result.target else {
        return Ok(());
    };

    if print {
        println!("{}", target);
        return Ok(());
    }

    open_target(target)?;
    print_messages(ctx, &result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, out: &Path, filters: &FilterArgs) -> Result<()> {
    let selection = filters.selection();
    let result = ctx.api.browse(&selection, ctx.mode);
    let Some(view) = &result.view else {
        return Ok(());
    };

    let catalog = ctx.api.catalog();
    let html = render_page(view, catalog.options(), &selection, catalog.len())?;
    std::fs::write(out, html)?;

    let mut messages = result.messages.clone();
    messages.push(CmdMessage::success(format!(
        "Wrote {} papers to {}",
        view.len(),
        out.display()
    )));
    print_messages(ctx, &messages);
    Ok(())
}

fn handle_shell(ctx: &AppContext) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout();
    run_shell(
        ctx.api.session(ctx.mode),
        stdin.lock(),
        &mut stdout,
        ShellOptions {
            prompt: interactive,
            use_color: ctx.use_color,
            launch: true,
        },
    )
}

struct ShellOptions {
    prompt: bool,
    use_color: bool,
    /// Launch the browser on activation; otherwise only report the target.
    launch: bool,
}

/// Reads interactions line by line until `quit` or end of input.
///
/// Bad input is reported and the session carries on with its state unchanged.
fn run_shell<R: BufRead, W: Write>(
    mut session: Session<'_>,
    input: R,
    out: &mut W,
    options: ShellOptions,
) -> Result<()> {
    let total = session.catalog().len();
    write!(out, "{}", render_view(session.view(), options.use_color))?;
    write_status(out, &session, total, options.use_color)?;

    let mut lines = input.lines();
    loop {
        if options.prompt {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = line
            .parse::<Interaction>()
            .and_then(|interaction| session.apply(interaction));

        match outcome {
            Ok(Outcome::View(view)) => {
                write!(out, "{}", render_view(&view, options.use_color))?;
                write_status(out, &session, total, options.use_color)?;
            }
            Ok(Outcome::Facets(entries)) => {
                write!(out, "{}", render_facets(&entries, options.use_color))?;
            }
            Ok(Outcome::Activated { position, target }) => {
                let message = if !options.launch {
                    CmdMessage::info(format!("#{}: {}", position, target))
                } else {
                    match open_target(&target) {
                        Ok(()) => CmdMessage::success(format!("Opening #{}: {}", position, target)),
                        Err(e) => CmdMessage::error(e.to_string()),
                    }
                };
                write!(out, "{}", render_messages(&[message], options.use_color))?;
            }
            Ok(Outcome::Help) => write!(out, "{}", render_help(options.use_color))?,
            Ok(Outcome::Quit) => break,
            Err(e) => {
                let message = CmdMessage::error(e.to_string());
                write!(out, "{}", render_messages(&[message], options.use_color))?;
            }
        }
    }
    Ok(())
}

fn write_status<W: Write>(
    out: &mut W,
    session: &Session<'_>,
    total: usize,
    use_color: bool,
) -> io::Result<()> {
    let status = CmdMessage::info(status_line(session.selection(), session.matched(), total));
    write!(out, "{}", render_messages(&[status], use_color))
}

fn status_line(selection: &FilterSelection, matched: usize, total: usize) -> String {
    format!("Showing {} of {} papers (filters: {})", matched, total, selection)
}

fn handle_config(
    cwd: &Path,
    key: Option<&str>,
    value: Option<&str>,
    use_color: bool,
) -> Result<()> {
    let project_dir = cwd.join(PROJECT_CONFIG_DIR);

    match (key, value) {
        (None, _) => {
            let config = ShelfConfig::discover(&config_dirs(cwd))?;
            for key in CONFIG_KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
        (Some(key), None) => {
            let config = ShelfConfig::discover(&config_dirs(cwd))?;
            println!("{}", config.get(key)?);
        }
        (Some(key), Some(value)) => {
            let mut config = ShelfConfig::load(&project_dir)?;
            config.set(key, value)?;
            config.save(&project_dir)?;
            let message = CmdMessage::success(format!("{} = {}", key, config.get(key)?));
            print!("{}", render_messages(&[message], use_color));
        }
    }
    Ok(())
}

fn print_result(ctx: &AppContext, result: &CmdResult) {
    if let Some(view) = &result.view {
        print!("{}", render_view(view, ctx.use_color));
    }
    print_messages(ctx, &result.messages);
}

fn print_messages(ctx: &AppContext, messages: &[CmdMessage]) {
    print!("{}", render_messages(messages, ctx.use_color));
}
