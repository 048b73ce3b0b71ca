use indicatif::{ProgressBar, ProgressStyle};
use ribopot::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

/// Bridges the core progress events onto a single indicatif bar on stderr.
///
/// Stage events drive a spinner with the stage name; batch events switch to
/// a counted bar. The callback is shared with worker threads, so the bar
/// lives behind a mutex.
#[derive(Clone)]
pub struct CliProgressHandler {
    bar: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0)
            .with_style(Self::spinner_style())
            .with_message("Starting...");
        bar.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        bar.disable_steady_tick();
        bar.finish_and_clear();

        Self {
            bar: Arc::new(Mutex::new(bar)),
        }
    }

    pub fn callback(&self) -> ProgressCallback<'static> {
        let bar = self.bar.clone();

        Box::new(move |event: Progress| {
            let Ok(bar) = bar.lock() else {
                warn!("Progress bar mutex was poisoned; progress output stops here.");
                return;
            };

            match event {
                Progress::StageStart { name } => {
                    bar.reset();
                    bar.set_length(0);
                    bar.set_style(Self::spinner_style());
                    bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    bar.set_message(name.to_string());
                }
                Progress::StageFinish => {
                    bar.disable_steady_tick();
                    bar.finish_and_clear();
                }
                Progress::BatchStart { total } => {
                    bar.disable_steady_tick();
                    bar.reset();
                    bar.set_length(total);
                    bar.set_position(0);
                    bar.set_style(Self::bar_style());
                }
                Progress::BatchTick => {
                    bar.inc(1);
                }
                Progress::BatchFinish => {
                    if bar.position() < bar.length().unwrap_or(0) {
                        bar.set_position(bar.length().unwrap_or(0));
                    }
                    bar.finish();
                }
                Progress::Note(msg) => {
                    bar.println(format!("  {}", msg));
                }
            }
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .expect("Failed to create spinner style template")
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<20} [{bar:40.cyan/blue}] {pos}/{len}")
            .expect("Failed to create bar style template")
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_initializes_in_a_clean_state() {
        let handler = CliProgressHandler::new();
        let bar = handler.bar.lock().unwrap();
        assert_eq!(bar.length(), Some(0));
        assert!(bar.is_finished());
    }

    #[test]
    fn batch_events_drive_the_bar() {
        let handler = CliProgressHandler::new();
        let callback = handler.callback();

        callback(Progress::BatchStart { total: 3 });
        {
            let bar = handler.bar.lock().unwrap();
            assert_eq!(bar.length(), Some(3));
            assert_eq!(bar.position(), 0);
        }

        callback(Progress::BatchTick);
        {
            let bar = handler.bar.lock().unwrap();
            assert_eq!(bar.position(), 1);
        }

        callback(Progress::BatchFinish);
        {
            let bar = handler.bar.lock().unwrap();
            assert!(bar.is_finished());
            assert_eq!(bar.position(), 3);
        }
    }

    #[test]
    fn callback_survives_worker_threads() {
        let handler = CliProgressHandler::new();
        let callback = handler.callback();

        std::thread::spawn(move || {
            callback(Progress::StageStart { name: "thread" });
            callback(Progress::BatchTick);
            callback(Progress::StageFinish);
        })
        .join()
        .unwrap();

        let bar = handler.bar.lock().unwrap();
        assert!(bar.is_finished());
    }
}
