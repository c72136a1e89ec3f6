//! Event loop plumbing: worker threads feeding the single UI thread.
//!
//! All state changes happen on the thread running [`run_event_loop`]. Fetches,
//! stdin and the live update subscription run elsewhere and only talk to the
//! loop through the `AppEvent` channel.
use std::io::{BufRead, Write};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};
use log::{debug, info};
use price_common::{PriceError, Result};

use crate::app::{AppEvent, Effect, FetchRequest, PriceApp};
use crate::input::UserInput;
use crate::source::PriceSource;
use crate::view;

/// Execute `request` on a worker thread and report back on `events`.
pub fn spawn_fetch(source: Arc<dyn PriceSource>, request: FetchRequest, events: Sender<AppEvent>) {
    thread::spawn(move || {
        let outcome = source.fetch_prices();
        if events.send(AppEvent::FetchCompleted(request, outcome)).is_err() {
            debug!("Fetch finished after the event loop stopped");
        }
    });
}

/// Forward every line of `reader` as `AppEvent::Input`; end of input quits.
pub fn spawn_input_reader<R>(reader: R, events: Sender<AppEvent>)
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        for line in reader.lines() {
            let Ok(line) = line else { break };
            if events.send(AppEvent::Input(UserInput::parse(&line))).is_err() {
                return;
            }
        }
        let _ = events.send(AppEvent::Shutdown);
    });
}

/// Write one screen: a separator followed by the rendered state.
pub fn write_screen<W: Write>(out: &mut W, app: &PriceApp) -> Result<()> {
    writeln!(out, "----------------------------------------")?;
    for line in view::render(app.state()) {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}

/// Process events until a quit is requested, re-rendering after each one.
pub fn run_event_loop<W: Write>(
    app: &mut PriceApp,
    events: &Receiver<AppEvent>,
    sender: &Sender<AppEvent>,
    source: Arc<dyn PriceSource>,
    out: &mut W,
) -> Result<()> {
    loop {
        let event = events
            .recv()
            .map_err(|e| PriceError::ChannelRecv(e.to_string()))?;
        match app.handle_event(event) {
            Effect::Quit => break,
            Effect::Fetch(request) => spawn_fetch(source.clone(), request, sender.clone()),
            Effect::Idle => {}
        }
        write_screen(out, app)?;
    }
    info!("Event loop stopping...");
    Ok(())
}
