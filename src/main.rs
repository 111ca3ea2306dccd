use flicks::adapters::ReqwestHttpClient;
use flicks::app::{App, AppMessage};
use flicks::cli::{parse_args, run_cli_command, CliCommand};
use flicks::config::FlicksConfig;
use flicks::input::{CommandRegistry, InputContext};
use flicks::logging::init_tracing;
use flicks::terminal::{setup_panic_hook, TerminalSession};
use flicks::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Spinner frame interval; also bounds how long a redraw can lag.
const TICK: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let start_path = match parse_args(std::env::args()) {
        CliCommand::RunTui { start_path } => start_path,
        other => {
            run_cli_command(&other);
            return Ok(());
        }
    };

    color_eyre::install()?;
    init_tracing();

    // Configuration and route problems are reported before the terminal
    // switches to the alternate screen.
    let config = FlicksConfig::from_env()?;
    let client = Arc::new(ReqwestHttpClient::new());
    let mut app = App::new(config, client)?;

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut session = TerminalSession::new()?;

        if let Err(e) = app.navigate(&start_path) {
            tracing::warn!("Start path {} rejected: {}", start_path, e);
            app.status = Some(e.to_string());
        }

        let result = run_app(session.terminal(), &mut app).await;
        session.restore();
        result
    })?;

    tracing::info!("Exited cleanly");
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.take_redraw() {
            terminal.draw(|f| ui::render(f, app))?;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        let context = InputContext::from_app(app);
                        if let Some(command) = registry.dispatch(key, &context) {
                            app.execute_command(command);
                        }
                    }
                    Some(Ok(Event::Paste(text))) => {
                        app.handle_paste(&text);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Terminal event stream failed: {}", e);
                        return Err(e.into());
                    }
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
