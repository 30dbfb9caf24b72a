use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Work that touches the store, run by the event loop after key handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Action {
    ClearData,
    SaveNow,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
