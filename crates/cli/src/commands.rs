use crate::cli::{BrowseArgs, Cli, Command, PageArgs};
use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use folio_catalog::Catalog;
use folio_catalog::models::BookId;
use folio_config::Config;
use folio_render::{Action, Renderer, SearchForm, Theme, Update, View};
use std::collections::BTreeMap;
use std::io::Write;
use std::num::NonZeroUsize;
use tracing::instrument;

/// Runs the parsed command, writing anything destined for stdout to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).or_raise(|| ErrorKind::Config)?;
    let catalog = load_catalog(cli, &config)?;
    let page_size = cli.page_size.unwrap_or(config.page_size);
    match &cli.command {
        Command::Browse(args) => browse(&catalog, &config, page_size, args, out),
        Command::Show { id, page } => show(&catalog, &config, page_size, id, page, out),
        Command::Authors => list(catalog.authors(), out),
        Command::Genres => list(catalog.genres(), out),
    }
}

fn load_catalog(cli: &Cli, config: &Config) -> Result<Catalog> {
    let catalog = match cli.catalog.as_ref().or(config.catalog.as_ref()) {
        Some(path) => Catalog::from_path(path),
        None => Catalog::builtin(),
    };
    let catalog = catalog.or_raise(|| ErrorKind::Catalog)?;
    tracing::info!(books = catalog.len(), "Catalog loaded");
    Ok(catalog)
}

fn theme(config: &Config, page: &PageArgs) -> Theme {
    page.theme.unwrap_or_else(|| config.theme.resolve(page.dark))
}

#[instrument(skip_all, fields(title = %args.title, author = %args.author, genre = %args.genre, more = args.more))]
fn browse(
    catalog: &Catalog,
    config: &Config,
    page_size: NonZeroUsize,
    args: &BrowseArgs,
    out: &mut impl Write,
) -> Result<()> {
    let mut view = View::new(catalog, page_size, theme(config, &args.page));
    view.dispatch(Action::SubmitSearch(SearchForm {
        title: args.title.clone(),
        author: args.author.clone(),
        genre: args.genre.clone(),
    }));
    for _ in 0..args.more {
        if !view.session().has_more() {
            break;
        }
        view.dispatch(Action::ShowMore);
    }
    tracing::info!(
        matches = view.session().matches().len(),
        revealed = view.session().visible().items.len(),
        "Search applied"
    );
    emit(&view, &args.page, out)
}

#[instrument(skip_all, fields(%id))]
fn show(
    catalog: &Catalog,
    config: &Config,
    page_size: NonZeroUsize,
    id: &str,
    page: &PageArgs,
    out: &mut impl Write,
) -> Result<()> {
    let mut view = View::new(catalog, page_size, theme(config, page));
    let updates = view.dispatch(Action::Select(vec![Some(BookId::new(id))]));
    if !updates.iter().any(|update| matches!(update, Update::Detail(_))) {
        tracing::warn!(%id, "No book with this id; rendering without the detail overlay");
    }
    emit(&view, page, out)
}

fn emit(view: &View<'_>, page: &PageArgs, out: &mut impl Write) -> Result<()> {
    let renderer = Renderer::new().or_raise(|| ErrorKind::Render)?;
    let html = renderer.document(view).or_raise(|| ErrorKind::Render)?;
    match &page.output {
        Some(path) => {
            std::fs::write(path, html).or_raise(|| ErrorKind::Io)?;
            tracing::info!(path = %path.display(), "Page written");
        },
        None => out.write_all(html.as_bytes()).or_raise(|| ErrorKind::Io)?,
    }
    Ok(())
}

fn list<K: AsRef<str>>(names: &BTreeMap<K, String>, out: &mut impl Write) -> Result<()> {
    for (id, name) in names {
        writeln!(out, "{}\t{name}", id.as_ref()).or_raise(|| ErrorKind::Io)?;
    }
    Ok(())
}
