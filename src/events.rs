use crossbeam_channel::{Receiver, Sender};

use crate::domain::{
    self,
    events::{Event, Notifier},
};

#[allow(clippy::module_name_repetitions)]
pub struct ChannelNotifier {
    sender: Sender<Event>,
}

impl Notifier for ChannelNotifier {
    fn notify(&self, event: Event) -> domain::Result<()> {
        self.sender
            .send(event)
            .map_err(|err| domain::Error::NotifyError(err.to_string()))
    }
}

/// Creates a notifier and the receiving end its events are delivered to.
#[must_use]
pub fn channel() -> (ChannelNotifier, Receiver<Event>) {
    let (sender, receiver) = crossbeam_channel::unbounded();
    (ChannelNotifier { sender }, receiver)
}
