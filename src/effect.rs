/// Effects requested by the update loop.
///
/// Effects represent the single side effect the widget ever asks for,
/// moving input focus back to its text entry. They are returned as data
/// from [`update`](crate::update) and executed by the host runtime or by
/// [`EffectRunner`], which feeds completion back into the update loop as
/// an event.
use crate::event::Event;
use tokio::sync::mpsc;

/// Side effect returned from one update cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No side effect is needed.
    None,

    /// Move input focus to the element with the given id.
    Focus(String),
}

/// Host hook that actually moves terminal focus.
#[async_trait::async_trait]
pub trait FocusTarget: Send + Sync {
    /// Attempt to focus the element with the given id. Returns whether
    /// the element was found and focused.
    async fn focus(&self, element_id: &str) -> bool;
}

/// Executes effects asynchronously and reports completion back to the
/// update loop through a message channel.
pub struct EffectRunner {
    event_sender: mpsc::UnboundedSender<Event>,
    target: Box<dyn FocusTarget>,
}

impl EffectRunner {
    pub fn new(event_sender: mpsc::UnboundedSender<Event>, target: Box<dyn FocusTarget>) -> Self {
        Self {
            event_sender,
            target,
        }
    }

    /// Execute an effect.
    ///
    /// Focus failures are swallowed: the widget treats the effect as
    /// acknowledged whether or not the target element could be focused,
    /// so `FocusGranted` is sent back either way.
    pub async fn run(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Focus(element_id) => {
                if !self.target.focus(&element_id).await {
                    tracing::warn!("failed to focus element '{}'", element_id);
                }

                if let Err(e) = self.event_sender.send(Event::FocusGranted) {
                    tracing::error!("failed to send focus acknowledgement: {}", e);
                }
            }
        }
    }
}
