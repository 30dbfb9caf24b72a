//! Periodic background save.
//!
//! [`spawn`] starts a task that calls the save function right away and then
//! once per interval, with no backoff. The returned [`AutosaveHandle`] is the
//! only way to talk to the task.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::instrument;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AutosaveMessage {
    SaveNow,
    Stop,
}

/// Owns a running autosave task.
///
/// Dropping the handle closes its channel; the task then saves one last time
/// and exits.
#[derive(Debug)]
pub struct AutosaveHandle {
    sender: mpsc::Sender<AutosaveMessage>,
    task: JoinHandle<()>,
}

pub fn spawn<F>(interval: Duration, save: F) -> AutosaveHandle
where
    F: Fn() + Send + Sync + 'static,
{
    let (sender, receiver) = mpsc::channel(8);
    let task = tokio::spawn(run(interval, receiver, save));
    AutosaveHandle { sender, task }
}

#[instrument(name = "autosave", skip(receiver, save))]
async fn run<F>(interval: Duration, mut receiver: mpsc::Receiver<AutosaveMessage>, save: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            message = receiver.recv() => match message {
                Some(AutosaveMessage::SaveNow) => {
                    tracing::debug!("Forced save");
                    save();
                }
                Some(AutosaveMessage::Stop) | None => {
                    tracing::debug!("Stopping autosave");
                    save();
                    break;
                }
            },
            _ = ticker.tick() => {
                tracing::trace!("Ticked");
                save();
            }
        }
    }
}

impl AutosaveHandle {
    /// Ask for a save outside the regular schedule. Dropped if the task is
    /// busy or gone.
    pub fn request_save(&self) {
        if self.sender.try_send(AutosaveMessage::SaveNow).is_err() {
            tracing::debug!("Autosave request dropped");
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Save once more and wait for the task to exit.
    pub async fn stop(self) {
        let _ = self.sender.send(AutosaveMessage::Stop).await;
        if let Err(e) = self.task.await {
            tracing::error!("Autosave task failed: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_save() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        (count, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn saves_immediately_then_every_interval() {
        let (count, save) = counting_save();
        let handle = spawn(Duration::from_millis(1000), save);

        tokio::time::sleep(Duration::from_millis(2500)).await;
        let ticks = count.load(Ordering::SeqCst);
        assert!(ticks >= 3, "expected at least 3 saves, got {ticks}");

        handle.stop().await;
        assert_eq!(count.load(Ordering::SeqCst), ticks + 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_ends_the_task() {
        let (count, save) = counting_save();
        let handle = spawn(DEFAULT_INTERVAL, save);
        handle.stop().await;

        let after_stop = count.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), after_stop);
    }

    #[tokio::test(start_paused = true)]
    async fn request_save_saves_between_ticks() {
        let (count, save) = counting_save();
        let handle = spawn(Duration::from_secs(60), save);
        tokio::time::sleep(Duration::from_millis(10)).await;
        let before = count.load(Ordering::SeqCst);

        handle.request_save();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), before + 1);

        handle.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_handle_saves_and_exits() {
        let (count, save) = counting_save();
        let handle = spawn(Duration::from_secs(60), save);
        tokio::time::sleep(Duration::from_millis(10)).await;
        let before = count.load(Ordering::SeqCst);

        drop(handle);
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), before + 1);
    }
}
