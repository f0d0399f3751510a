use super::ReplyApp;

impl ReplyApp {
    /// Applies every completion that has already arrived. Returns whether
    /// anything was dispatched.
    pub fn poll_action_messages(&mut self) -> bool {
        let mut any = false;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            any = true;
        }
        any
    }

    /// Waits for the next completion and applies it. Returns false if the
    /// channel has closed.
    pub async fn next_action(&mut self) -> bool {
        match self.action_rx.recv().await {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }
}
