//! Type-erased carrier for a concrete listener.
//!
//! A role stores its outbound reference as `Bridge<M>`, which names only
//! the message type. Which concrete listener sits behind it is fixed once,
//! at wiring time, and is no longer visible afterwards.

use std::fmt;
use std::sync::{Arc, Weak};

use super::listener::{FnListener, Listener};
use super::message::Message;

/// Forwards `dispatch` to one wrapped listener, unchanged.
///
/// The link to the listener is one of:
/// - owning: the bridge keeps the listener alive (downstream edges)
/// - observing: a weak back reference, checked before every dispatch
/// - absent: no listener; dispatch is a no-op
pub struct Bridge<M: Message> {
    link: Link<M>,
}

enum Link<M: Message> {
    Owning(Arc<dyn Listener<M>>),
    Observing(Weak<dyn Listener<M>>),
    Absent,
}

impl<M: Message> Bridge<M> {
    /// Bridge that owns the listener.
    pub fn owning<L>(listener: Arc<L>) -> Self
    where
        L: Listener<M> + 'static,
    {
        Self {
            link: Link::Owning(listener),
        }
    }

    /// Bridge holding a non-owning reference to the listener.
    pub fn observing<L>(listener: &Arc<L>) -> Self
    where
        L: Listener<M> + 'static,
    {
        let weak: Weak<dyn Listener<M>> = Arc::downgrade(listener) as Weak<L>;
        Self {
            link: Link::Observing(weak),
        }
    }

    /// Owning bridge around a closure.
    pub fn from_fn<F>(handler: F) -> Self
    where
        F: Fn(M) + Send + Sync + 'static,
    {
        Self::owning(Arc::new(FnListener::new(handler)))
    }

    /// Bridge with no listener behind it.
    pub fn absent() -> Self {
        Self { link: Link::Absent }
    }

    /// Owning bridge, or an absent one when there is no listener.
    pub fn from_option<L>(listener: Option<Arc<L>>) -> Self
    where
        L: Listener<M> + 'static,
    {
        match listener {
            Some(listener) => Self::owning(listener),
            None => Self::absent(),
        }
    }

    pub fn dispatch(&self, message: M) {
        match &self.link {
            Link::Owning(listener) => listener.dispatch(message),
            Link::Observing(weak) => match weak.upgrade() {
                Some(listener) => listener.dispatch(message),
                None => {
                    tracing::trace!(message = message.name(), "Listener gone, message dropped");
                }
            },
            Link::Absent => {
                tracing::trace!(message = message.name(), "No listener, message dropped");
            }
        }
    }

    /// True if a dispatch right now would reach a listener.
    pub fn is_live(&self) -> bool {
        match &self.link {
            Link::Owning(_) => true,
            Link::Observing(weak) => weak.strong_count() > 0,
            Link::Absent => false,
        }
    }

    pub fn is_owning(&self) -> bool {
        matches!(self.link, Link::Owning(_))
    }
}

impl<M: Message> Clone for Bridge<M> {
    fn clone(&self) -> Self {
        let link = match &self.link {
            Link::Owning(listener) => Link::Owning(Arc::clone(listener)),
            Link::Observing(weak) => Link::Observing(Weak::clone(weak)),
            Link::Absent => Link::Absent,
        };
        Self { link }
    }
}

impl<M: Message> fmt::Debug for Bridge<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let link = match &self.link {
            Link::Owning(_) => "owning",
            Link::Observing(_) => "observing",
            Link::Absent => "absent",
        };
        f.debug_struct("Bridge")
            .field("link", &link)
            .field("live", &self.is_live())
            .finish()
    }
}
