//! Interactive terminal session around the article list view.

use std::io::{self, BufRead, BufReader, Write};
use std::sync::Arc;

use camino::Utf8Path;
use scholar_desk::{
    ArticleError, ArticleGateway, ArticleId, ArticleListView, ArticleStatistics, DeleteOutcome,
    HttpArticleGateway, ListSurface, MirroredSurface, NoopTelemetrySink, ScholarDeskConfig,
    StderrJsonlTelemetrySink, TelemetrySink, UserPrompt,
};

use super::commands::{Command, USAGE};
use super::console::Console;
use super::html_file::HtmlFileSurface;
use super::output::{write_article_detail, write_search_results, write_statistics};

/// Builds the view from configuration and runs the session on stdin/stdout.
///
/// # Errors
///
/// Returns [`ArticleError`] when the configuration is unusable, the HTML
/// mirror cannot be opened, or the terminal cannot be read or written.
pub async fn run(config: &ScholarDeskConfig) -> Result<(), ArticleError> {
    let endpoint = config.endpoint()?;
    let gateway = HttpArticleGateway::with_timeout(endpoint, config.request_timeout()?)?;
    tracing::debug!(url = %gateway.endpoint().collection_url(), "article service configured");

    let console = Arc::new(Console::new(
        BufReader::new(io::stdin()),
        io::stdout(),
        config.assume_yes,
    ));
    let surface: Arc<dyn ListSurface> = match config.html_output() {
        Some(path) => {
            let mirror = HtmlFileSurface::create(Utf8Path::new(path))?;
            tracing::info!(path = %mirror.path(), "mirroring article table to HTML");
            Arc::new(MirroredSurface::new(Arc::clone(&console), mirror)) as Arc<dyn ListSurface>
        }
        None => Arc::clone(&console) as Arc<dyn ListSurface>,
    };
    let telemetry: Arc<dyn TelemetrySink> = if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    };

    let view =
        ArticleListView::new(gateway, surface, Arc::clone(&console)).with_telemetry(telemetry);
    run_with(&view, &*console).await
}

/// Runs the command loop until `quit` or end of input.
///
/// # Errors
///
/// Returns [`ArticleError::Io`] when the console cannot be read or written.
pub async fn run_with<G, S, P, R, W>(
    view: &ArticleListView<G, S, P>,
    console: &Console<R, W>,
) -> Result<(), ArticleError>
where
    G: ArticleGateway,
    S: ListSurface,
    P: UserPrompt,
    R: BufRead,
    W: Write,
{
    view.initialise().await;
    console.write_line(USAGE)?;

    while let Some(line) = console.read_line()? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                console.write_line(&error.to_string())?;
                console.write_line(USAGE)?;
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }
        execute(view, console, command).await?;
    }

    Ok(())
}

async fn execute<G, S, P, R, W>(
    view: &ArticleListView<G, S, P>,
    console: &Console<R, W>,
    command: Command,
) -> Result<(), ArticleError>
where
    G: ArticleGateway,
    S: ListSurface,
    P: UserPrompt,
    R: BufRead,
    W: Write,
{
    match command {
        Command::Refresh => {
            view.refresh().await;
            Ok(())
        }
        Command::Delete(id) => report_delete(console, &id, view.delete(&id).await),
        Command::Show(id) => match view.gateway().article(&id).await {
            Ok(article) => console.write_with(|output| write_article_detail(output, &article)),
            Err(error) => console.write_line(&error.to_string()),
        },
        Command::Stats => match view.gateway().list_articles().await {
            Ok(articles) => {
                let statistics = ArticleStatistics::from_articles(&articles);
                console.write_with(|output| write_statistics(output, &statistics))
            }
            Err(error) => console.write_line(&error.to_string()),
        },
        Command::Search(search) => match view.gateway().list_articles().await {
            Ok(articles) => {
                let matches = search.filter(&articles);
                tracing::debug!(
                    unfiltered = search.is_unfiltered(),
                    kept = matches.len(),
                    searched = articles.len(),
                    "article search finished"
                );
                console.write_with(|output| write_search_results(output, &matches, articles.len()))
            }
            Err(error) => console.write_line(&error.to_string()),
        },
        Command::Help | Command::Quit => console.write_line(USAGE),
    }
}

fn report_delete<R: BufRead, W: Write>(
    console: &Console<R, W>,
    id: &ArticleId,
    outcome: DeleteOutcome,
) -> Result<(), ArticleError> {
    match outcome {
        DeleteOutcome::NoSuchControl => {
            console.write_line(&format!("No delete control for article {id}"))
        }
        DeleteOutcome::InFlight => {
            console.write_line(&format!("Article {id} is already being deleted"))
        }
        DeleteOutcome::Declined | DeleteOutcome::Deleted { .. } | DeleteOutcome::Failed => Ok(()),
    }
}
