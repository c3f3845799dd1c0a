use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::core::{
    cmd::{Cmd, SurfaceCommand},
    cmd_executor::CmdExecutor,
    msg::Msg,
    raw_msg::RawMsg,
    state::{AppState, Phase},
    translator::translate_raw_to_domain,
    update::update,
};

/// Single owner of the session: queues raw and domain messages, runs the
/// update cycle to completion, and hands resulting commands to the executor.
/// Event handlers never touch state directly; everything funnels through
/// here, one message at a time.
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub phase: Phase,
    pub can_go_back: bool,
    pub has_executor: bool,
    pub has_surface_support: bool,
}

impl Runtime {
    /// Create a new Runtime without an executor (reducer-only, for tests)
    pub fn new(initial_state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
        }
    }

    /// Create a new Runtime with a command executor
    pub fn new_with_executor(initial_state: AppState) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = Some(CmdExecutor::new());
        runtime
    }

    /// Create a new Runtime wired to a Browser Surface command sink
    pub fn new_with_surface_executor(
        initial_state: AppState,
        surface_sender: mpsc::UnboundedSender<SurfaceCommand>,
    ) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = Some(CmdExecutor::new_with_surface(surface_sender));
        runtime
    }

    /// Add Browser Surface support to the existing executor
    pub fn add_surface_support(
        &mut self,
        surface_sender: mpsc::UnboundedSender<SurfaceCommand>,
    ) -> Result<(), String> {
        match &mut self.cmd_executor {
            Some(executor) => {
                executor.set_surface_sender(surface_sender);
                Ok(())
            }
            None => Err("No executor available. Use new_with_executor() first.".to_string()),
        }
    }

    /// Add host exit support to the existing executor
    pub fn add_exit_support(
        &mut self,
        exit_sender: mpsc::UnboundedSender<()>,
    ) -> Result<(), String> {
        match &mut self.cmd_executor {
            Some(executor) => {
                executor.set_exit_sender(exit_sender);
                Ok(())
            }
            None => Err("No executor available. Use new_with_executor() first.".to_string()),
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Synchronous policy hook for the engine's should-load callback.
    /// Must answer without going through the message loop.
    pub fn should_allow_navigation(&self, url: &str) -> bool {
        let allowed = self.state.origin_policy().allows(url);
        if !allowed {
            log::warn!("blocked top-level navigation to {url}");
        }
        allowed
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get sender for message transmission
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let (new_state, commands) = update(msg, self.state.clone());
        self.state = new_state;

        for cmd in &commands {
            self.cmd_queue.push_back(cmd.clone());
        }

        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // First translate queued raw messages into domain messages
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            for msg in translate_raw_to_domain(raw_msg, &self.state) {
                self.msg_queue.push_back(msg);
            }
        }

        // Raw messages from external sources
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            for msg in translate_raw_to_domain(raw_msg, &self.state) {
                self.msg_queue.push_back(msg);
            }
        }

        // Domain messages in the internal queue
        while let Some(msg) = self.msg_queue.pop_front() {
            let commands = self.process_message(msg);
            all_commands.extend(commands);
        }

        // Domain messages from external sources
        while let Ok(msg) = self.msg_rx.try_recv() {
            let commands = self.process_message(msg);
            all_commands.extend(commands);
        }

        all_commands
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        let commands = self.pending_commands();
        if commands.is_empty() {
            return Ok(vec![]);
        }

        let Some(executor) = &self.cmd_executor else {
            return Err(
                "No command executor available. Use new_with_executor() to configure.".to_string(),
            );
        };
        executor
            .execute_commands(&commands)
            .map_err(|e| format!("Command execution failed: {e}"))
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        let _commands = self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        let has_surface_support = self
            .cmd_executor
            .as_ref()
            .map(|executor| executor.get_stats().has_surface_sender)
            .unwrap_or(false);

        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            phase: self.state.session.phase,
            can_go_back: self.state.session.can_go_back,
            has_executor: self.cmd_executor.is_some(),
            has_surface_support,
        }
    }
}
