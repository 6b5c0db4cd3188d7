//! Timed UI flags ("Copied!", "Saved").

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use prompt_generator::core::transient::TransientFlag;

/// A [`TransientFlag`] in a signal, cleared by a timer.
///
/// Re-marking cancels the pending timer; the timer is also cancelled when
/// the owning component is disposed.
pub struct Flash<T: Send + Sync + 'static> {
    flag: RwSignal<TransientFlag<T>>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
    duration_ms: u32,
}

impl<T: Send + Sync + 'static> Clone for Flash<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Flash<T> {}

/// Create a flash scoped to the current component.
pub fn use_flash<T>(duration_ms: u32) -> Flash<T>
where
    T: PartialEq + Send + Sync + 'static,
{
    let timer = StoredValue::new_local(None::<Timeout>);
    on_cleanup(move || {
        timer.try_update_value(|slot| {
            if let Some(t) = slot.take() {
                t.cancel();
            }
        });
    });
    Flash {
        flag: RwSignal::new(TransientFlag::new()),
        timer,
        duration_ms,
    }
}

impl<T: PartialEq + Send + Sync + 'static> Flash<T> {
    pub fn mark(&self, value: T) {
        let Some(generation) = self.flag.try_update(|f| f.mark(value)) else {
            return;
        };
        let flag = self.flag;
        let timeout = Timeout::new(self.duration_ms, move || {
            flag.try_update(|f| f.expire(generation));
        });
        self.timer.update_value(|slot| {
            if let Some(previous) = slot.replace(timeout) {
                previous.cancel();
            }
        });
    }

    /// Reactive: whether `value` is the currently flashed one.
    pub fn is(&self, value: &T) -> bool {
        self.flag.with(|f| f.is(value))
    }

    pub fn is_active(&self) -> bool {
        self.flag.with(|f| f.current().is_some())
    }
}
