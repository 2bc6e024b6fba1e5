//! Interactive command loop.
//!
//! Loads run on their own task so commands keep being accepted while a
//! request is outstanding. A `reload` supersedes any load still in flight;
//! its late result is dropped by the dashboard.

use anyhow::Result;
use fintable::{Dashboard, LoadOutcome};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

use crate::commands::{self, Command, HELP};
use crate::render;

pub(crate) async fn run(mut dashboard: Dashboard) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<LoadOutcome>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    spawn_load(&mut dashboard, &tx);
    redraw(&dashboard);

    loop {
        tokio::select! {
            Some(outcome) = rx.recv() => {
                if dashboard.finish_load(outcome) {
                    redraw(&dashboard);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("stdin closed");
                    break;
                };
                match commands::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Reload) => {
                        spawn_load(&mut dashboard, &tx);
                        redraw(&dashboard);
                    }
                    Ok(Command::Show) => redraw(&dashboard),
                    Ok(Command::Help) => println!("{HELP}"),
                    Ok(Command::Events(events)) => match dashboard.apply_all(events) {
                        Ok(()) => redraw(&dashboard),
                        Err(e) => println!("{e}"),
                    },
                    Err(e) => println!("{e} (type 'help' for commands)"),
                }
            }
        }
    }
    Ok(())
}

fn spawn_load(dashboard: &mut Dashboard, tx: &mpsc::UnboundedSender<LoadOutcome>) {
    let pending = dashboard.begin_load();
    debug!(generation = pending.ticket().generation(), "Load spawned");
    let tx = tx.clone();
    tokio::spawn(async move {
        // The receiver is gone once the loop has exited.
        let _ = tx.send(pending.run().await);
    });
}

fn redraw(dashboard: &Dashboard) {
    println!("{}\n", render::render(dashboard.state(), dashboard.symbol()));
}
