/// Progress events emitted by the workflows.
///
/// Stages are coarse named phases (parsing the reference set, deriving
/// profiles); batches are counted loops over structures within a stage.
#[derive(Debug, Clone)]
pub enum Progress {
    StageStart { name: &'static str },
    StageFinish,

    BatchStart { total: u64 },
    BatchTick,
    BatchFinish,

    Note(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards progress events to an optional callback.
///
/// The default reporter is silent, so library callers that do not care about
/// progress pay nothing. Workers emit ticks concurrently; the callback must
/// therefore be `Send + Sync`.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn silent_reporter_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::StageStart { name: "noop" });
        reporter.report(Progress::BatchTick);
    }

    #[test]
    fn callback_receives_events_in_order() {
        let seen: Mutex<Vec<String>> = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            seen.lock().unwrap().push(format!("{:?}", event));
        }));

        reporter.report(Progress::StageStart { name: "parse" });
        reporter.report(Progress::BatchStart { total: 2 });
        reporter.report(Progress::BatchTick);
        reporter.report(Progress::BatchFinish);
        reporter.report(Progress::StageFinish);

        let events = seen.lock().unwrap();
        assert_eq!(events.len(), 5);
        assert!(events[0].contains("parse"));
        assert!(events[1].contains("total: 2"));
    }
}
