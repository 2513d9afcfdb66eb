//! Background execution of agent runs
//!
//! The UI loop never blocks on the network. [`AgentRunner`] owns a tokio
//! runtime; each run is spawned as a task that sends its [`RunCompletion`]
//! back over an mpsc channel. The UI polls the channel once per frame and
//! hands completions to the workspace, which discards stale ones.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use crate::client::AgentClient;
use crate::state::workspace::{RunOutcome, RunTicket, WorkspaceState};

/// Finished run, delivered to the UI loop
#[derive(Debug)]
pub struct RunCompletion {
    pub ticket: RunTicket,
    pub outcome: RunOutcome,
}

/// Spawns agent runs and collects their results
pub struct AgentRunner {
    runtime: tokio::runtime::Runtime,
    client: AgentClient,
    tx: Sender<RunCompletion>,
    rx: Receiver<RunCompletion>,
}

impl AgentRunner {
    /// Create a runner with its own multi-threaded runtime
    pub fn new(client: AgentClient) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("agent-runner")
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::channel();

        Ok(Self {
            runtime,
            client,
            tx,
            rx,
        })
    }

    /// Issue the request for `ticket`
    ///
    /// `on_complete` runs on a runtime thread after the completion has been
    /// queued; the UI passes a repaint request here.
    pub fn spawn_run<F>(&self, ticket: RunTicket, on_complete: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let client = self.client.clone();
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let outcome = client.run_agent(ticket.agent).await;
            if let Err(e) = &outcome {
                tracing::debug!(seq = ticket.seq, agent = %ticket.agent, error = %e, "Agent run failed");
            }
            if tx.send(RunCompletion { ticket, outcome }).is_err() {
                tracing::debug!(seq = ticket.seq, "Runner dropped before run finished");
                return;
            }
            on_complete();
        });
    }

    /// Take every completion that has arrived, without blocking
    pub fn poll(&self) -> Vec<RunCompletion> {
        let mut completions = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(completion) => completions.push(completion),
                Err(TryRecvError::Empty) => break,
                // Unreachable while `self.tx` is alive
                Err(TryRecvError::Disconnected) => break,
            }
        }
        completions
    }

    /// Apply arrived completions to the workspace
    /// Returns how many of them were applied (stale ones are not counted)
    pub fn apply_completions(&self, workspace: &mut WorkspaceState) -> usize {
        self.poll()
            .into_iter()
            .map(|completion| workspace.complete_run(completion.ticket, completion.outcome))
            .filter(|applied| *applied)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Agent, MemorySettingsStore};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    const WAIT: Duration = Duration::from_secs(10);

    #[test]
    fn test_spawn_run_delivers_completion() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/agent/report")
            .with_status(200)
            .with_body(r#"{"result": "report ready"}"#)
            .create();

        let runner = AgentRunner::new(AgentClient::new(server.url())).unwrap();
        let repaints = Arc::new(AtomicUsize::new(0));
        let counter = repaints.clone();

        let ticket = RunTicket {
            seq: 1,
            agent: Agent::Report,
        };
        runner.spawn_run(ticket, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let deadline = Instant::now() + WAIT;
        let mut completions = runner.poll();
        while completions.is_empty() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
            completions = runner.poll();
        }
        assert_eq!(completions.len(), 1, "run should complete");
        let completion = completions.remove(0);
        mock.assert();
        assert_eq!(completion.ticket, ticket);
        assert_eq!(completion.outcome, Ok(Some("report ready".to_string())));

        // on_complete runs after the send
        let deadline = Instant::now() + WAIT;
        while repaints.load(Ordering::SeqCst) == 0 && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(repaints.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_poll_is_empty_without_runs() {
        let runner = AgentRunner::new(AgentClient::new("http://127.0.0.1:9")).unwrap();
        assert!(runner.poll().is_empty());
    }

    #[test]
    fn test_apply_completions_updates_workspace() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/api/agent/regulation")
            .with_status(200)
            .with_body("{}")
            .create();

        let runner = AgentRunner::new(AgentClient::new(server.url())).unwrap();
        let mut workspace = WorkspaceState::load(Box::new(MemorySettingsStore::default()));

        let ticket = workspace.begin_run();
        runner.spawn_run(ticket, || {});

        let deadline = Instant::now() + WAIT;
        while workspace.is_running() && Instant::now() < deadline {
            runner.apply_completions(&mut workspace);
            std::thread::sleep(Duration::from_millis(10));
        }

        assert!(!workspace.is_running());
        assert_eq!(workspace.last_output(), "No output returned.");
    }
}
