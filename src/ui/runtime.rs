use crate::store::ListStore;
use crate::ui::app::App;
use crate::ui::events::{forward_states, AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the list screen until the user quits.
///
/// `runtime` drives the store subscription; the draw loop itself runs on
/// the calling thread.
pub fn run(store: ListStore, tick_rate: Duration, runtime: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(store.clone());
    let events = EventHandler::new(tick_rate);
    let forwarder = runtime.spawn(forward_states(store.subscribe(), events.sender()));
    tracing::info!(rows = app.state().len(), "list screen started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let batch = match events.next_batch(tick_rate) {
            Ok(batch) => batch,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        };
        // Apply the whole batch, then draw once.
        for event in batch {
            match event {
                AppEvent::Input(key) => handle_key(&mut app, key),
                AppEvent::StateChanged(state) => app.on_state(state),
                AppEvent::Tick | AppEvent::Resize => {}
            }
        }
    }

    forwarder.abort();
    tracing::info!(
        animations = store.animations_in_flight(),
        "list screen closed"
    );
    drop(guard);
    Ok(())
}
