//! The presentation context: one cooperative executor for all dispatch.
//!
//! Views, presenters and the entry point of interactors are only ever
//! called from here. Work an interactor hands to an async collaborator
//! comes back through a [`ContextHandle`], which queues the resulting
//! dispatch instead of running it on the collaborator's task.

use tokio::sync::mpsc;

use crate::config::ContextConfig;
use crate::dispatch::{Bridge, Message};
use crate::shutdown::ShutdownHandle;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Clonable sender side of a [`PresentationContext`].
#[derive(Clone)]
pub struct ContextHandle {
    sender: mpsc::UnboundedSender<Job>,
}

impl ContextHandle {
    /// Queue `message` for dispatch through `target`.
    ///
    /// Liveness of the target is checked when the job runs. Returns false
    /// if the context has already stopped; the message is dropped.
    pub fn deliver<M: Message>(&self, target: Bridge<M>, message: M) -> bool {
        let name = message.name();
        let job: Job = Box::new(move || target.dispatch(message));
        if self.sender.send(job).is_err() {
            tracing::warn!(message = name, "Presentation context stopped, message dropped");
            return false;
        }
        true
    }

    /// Queue an arbitrary closure to run on the context.
    pub fn post<F>(&self, job: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        self.sender.send(Box::new(job)).is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Receiver side. Runs queued jobs one at a time, in the order they
/// were queued.
pub struct PresentationContext {
    receiver: mpsc::UnboundedReceiver<Job>,
    drain_budget: usize,
}

impl PresentationContext {
    pub fn new(config: &ContextConfig) -> (Self, ContextHandle) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let context = Self {
            receiver,
            drain_budget: config.drain_budget.max(1),
        };
        (context, ContextHandle { sender })
    }

    /// Run the jobs already queued, up to the drain budget, without waiting.
    ///
    /// Jobs queued by the jobs themselves are picked up within the same
    /// call while budget remains.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while ran < self.drain_budget {
            match self.receiver.try_recv() {
                Ok(job) => {
                    job();
                    ran += 1;
                }
                Err(_) => break,
            }
        }
        if ran > 0 {
            tracing::trace!(jobs = ran, "Drained presentation queue");
        }
        ran
    }

    /// Wait for the next job and run it.
    ///
    /// Returns false once every handle is gone and the queue is empty.
    pub async fn run_next(&mut self) -> bool {
        match self.receiver.recv().await {
            Some(job) => {
                job();
                true
            }
            None => false,
        }
    }

    /// Run jobs until shutdown is signaled or every handle is dropped.
    pub async fn run(mut self, shutdown: ShutdownHandle) {
        tracing::debug!("Presentation context started");
        loop {
            tokio::select! {
                biased;
                _ = shutdown.wait() => break,
                job = self.receiver.recv() => match job {
                    Some(job) => job(),
                    None => break,
                },
            }
        }
        tracing::debug!("Presentation context stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shutdown::ShutdownCoordinator;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Debug)]
    enum Note {
        Text(&'static str),
    }

    impl Message for Note {
        const VARIANTS: &'static [&'static str] = &["Text"];

        fn name(&self) -> &'static str {
            match self {
                Note::Text(_) => "Text",
            }
        }
    }

    fn note_sink() -> (Arc<Mutex<Vec<&'static str>>>, Bridge<Note>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let bridge = Bridge::from_fn(move |note: Note| match note {
            Note::Text(text) => sink.lock().push(text),
        });
        (seen, bridge)
    }

    #[test]
    fn deliver_is_deferred_until_run() {
        let (mut context, handle) = PresentationContext::new(&ContextConfig::default());
        let (seen, bridge) = note_sink();

        assert!(handle.deliver(bridge.clone(), Note::Text("a")));
        assert!(handle.deliver(bridge, Note::Text("b")));
        assert!(seen.lock().is_empty());

        assert_eq!(context.run_pending(), 2);
        assert_eq!(*seen.lock(), vec!["a", "b"]);
    }

    #[test]
    fn drain_budget_limits_one_pass() {
        let config = ContextConfig { drain_budget: 2 };
        let (mut context, handle) = PresentationContext::new(&config);
        let (seen, bridge) = note_sink();

        for text in ["a", "b", "c"] {
            handle.deliver(bridge.clone(), Note::Text(text));
        }

        assert_eq!(context.run_pending(), 2);
        assert_eq!(context.run_pending(), 1);
        assert_eq!(*seen.lock(), vec!["a", "b", "c"]);
    }

    #[test]
    fn deliver_after_context_dropped_returns_false() {
        let (context, handle) = PresentationContext::new(&ContextConfig::default());
        drop(context);
        let (seen, bridge) = note_sink();

        assert!(handle.is_closed());
        assert!(!handle.deliver(bridge, Note::Text("lost")));
        assert!(seen.lock().is_empty());
    }

    #[tokio::test]
    async fn run_next_preserves_cross_task_order() {
        let (mut context, handle) = PresentationContext::new(&ContextConfig::default());
        let (seen, bridge) = note_sink();

        let task = tokio::spawn({
            let handle = handle.clone();
            async move {
                handle.deliver(bridge.clone(), Note::Text("first"));
                tokio::time::sleep(Duration::from_millis(5)).await;
                handle.deliver(bridge, Note::Text("second"));
            }
        });

        assert!(context.run_next().await);
        assert!(context.run_next().await);
        task.await.expect("task");
        assert_eq!(*seen.lock(), vec!["first", "second"]);

        drop(handle);
        assert!(!context.run_next().await);
    }

    #[tokio::test]
    async fn run_stops_on_shutdown() {
        let (context, handle) = PresentationContext::new(&ContextConfig::default());
        let coordinator = ShutdownCoordinator::new();
        let runner = tokio::spawn(context.run(coordinator.handle()));

        let ran = Arc::new(Mutex::new(false));
        let flag = Arc::clone(&ran);
        handle.post(move || *flag.lock() = true);
        tokio::time::sleep(Duration::from_millis(10)).await;

        coordinator.signal();
        tokio::time::timeout(Duration::from_secs(1), runner)
            .await
            .expect("context stopped")
            .expect("context did not panic");
        assert!(*ran.lock());
    }
}
