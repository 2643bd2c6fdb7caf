//! Full-screen playback simulation in the terminal.

use std::io::Write;
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::error::ResultExt;
use crate::layout::NoCapture;
use crate::model::mock;
use crate::playback::{Clock, Phase, SystemClock};
use crate::view::{StreamView, render};

/// Run the progress simulator until `cycles` loops complete or Ctrl-C
pub fn cmd_play(rt: &Runtime, config: &Config, index: usize, cycles: u32) -> anyhow::Result<()> {
    let clock = SystemClock::new();
    let mut view = StreamView::new(config, NoCapture)?;
    view.set_tracks(mock::songs(), clock.now());
    view.select(index.saturating_sub(1), clock.now())
        .with_context(format!("selecting track {}", index))?;
    view.open_full_screen(clock.now())
        .with_context("opening full screen")?;

    for line in render::full_screen(view.selected_track(), view.playback()) {
        println!("{}", line);
    }

    rt.block_on(async {
        let mut ticker = tokio::time::interval(config.playback.frame_interval());
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        let mut loops = 0;
        let mut last_shown = None;
        let mut was_looping = false;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    view.pump(clock.now());

                    let phase = view.player().phase();
                    if was_looping && matches!(phase, Phase::Running { .. }) {
                        loops += 1;
                        tracing::info!(loops, "track looped");
                        if cycles > 0 && loops >= cycles {
                            break;
                        }
                    }
                    was_looping = phase == Phase::Looping;

                    let shown = (view.playback().elapsed_secs, was_looping);
                    if last_shown != Some(shown) {
                        last_shown = Some(shown);
                        print!("\r{}", render::player_bar(view.selected_track(), view.playback()));
                        let _ = std::io::stdout().flush();
                    }

                    if phase == Phase::Complete {
                        break;
                    }
                }
                _ = &mut ctrl_c => {
                    tracing::debug!("interrupted");
                    break;
                }
            }
        }
    });
    println!();

    view.close_full_screen();
    println!(
        "Stopped at {} of {}",
        view.playback().elapsed_str(),
        view.playback().duration_str()
    );
    Ok(())
}
