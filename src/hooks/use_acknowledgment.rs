//! use_acknowledgment hook - "Thank you" overlay with a cancellable hide
//!
//! Each call shows the overlay and schedules the hide as a Dioxus task.
//! A newer call cancels the previous hide, and unmounting cancels whatever
//! is still pending, so the hide never runs against a torn-down widget.

use dioxus::core::Task;
use dioxus::prelude::*;
use std::future::Future;
use std::time::Duration;

use crate::stores::profile_widget::{acknowledge, WidgetState};

/// Returns the callback to run when the user acknowledges the profile.
///
/// `sleep` is the timer used for the delay (`gloo_timers::future::sleep` in
/// the browser).
pub fn use_acknowledgment<S, F>(
    state: Signal<WidgetState>,
    delay: Duration,
    sleep: S,
) -> Callback<()>
where
    S: FnOnce(Duration) -> F + Copy + 'static,
    F: Future<Output = ()> + 'static,
{
    let mut hide_task = use_signal(|| None::<Task>);

    use_drop(move || {
        if let Ok(pending) = hide_task.try_read() {
            if let Some(task) = pending.as_ref() {
                task.cancel();
            }
        }
    });

    use_callback(move |_: ()| {
        if let Some(task) = hide_task.write().take() {
            task.cancel();
        }
        let task = spawn(async move {
            acknowledge(state, delay, sleep).await;
        });
        hide_task.set(Some(task));
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::core::VirtualDom;
    use std::cell::Cell;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    thread_local! {
        static SLEEPS_STARTED: Cell<usize> = const { Cell::new(0) };
        static SLEEPS_DROPPED: Cell<usize> = const { Cell::new(0) };
    }

    /// Timer that never fires and records when it is dropped
    struct NeverFires;

    impl Future for NeverFires {
        type Output = ();

        fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
            Poll::Pending
        }
    }

    impl Drop for NeverFires {
        fn drop(&mut self) {
            SLEEPS_DROPPED.with(|n| n.set(n.get() + 1));
        }
    }

    fn never_fires(_delay: Duration) -> NeverFires {
        SLEEPS_STARTED.with(|n| n.set(n.get() + 1));
        NeverFires
    }

    fn started() -> usize {
        SLEEPS_STARTED.with(Cell::get)
    }

    fn dropped() -> usize {
        SLEEPS_DROPPED.with(Cell::get)
    }

    fn reset_counts() {
        SLEEPS_STARTED.with(|n| n.set(0));
        SLEEPS_DROPPED.with(|n| n.set(0));
    }

    #[component]
    fn AcknowledgeOnMount(clicks: usize) -> Element {
        let state = use_signal(WidgetState::default);
        let on_acknowledge = use_acknowledgment(state, Duration::from_secs(2), never_fires);

        use_hook(move || {
            for _ in 0..clicks {
                on_acknowledge.call(());
            }
        });

        rsx! {
            if state.read().is_overlay_visible() {
                "Thank you"
            }
        }
    }

    async fn pump(dom: &mut VirtualDom) {
        for _ in 0..4 {
            let _ = tokio::time::timeout(Duration::from_millis(20), dom.wait_for_work()).await;
            dom.render_immediate_to_vec();
        }
    }

    #[tokio::test]
    async fn test_unmount_cancels_pending_hide() {
        reset_counts();
        let mut dom = VirtualDom::new_with_props(
            AcknowledgeOnMount,
            AcknowledgeOnMountProps { clicks: 1 },
        );
        dom.rebuild_in_place();
        pump(&mut dom).await;

        assert_eq!(started(), 1);
        assert_eq!(dropped(), 0);

        drop(dom);
        assert_eq!(dropped(), 1);
    }

    #[tokio::test]
    async fn test_new_acknowledgment_replaces_pending_hide() {
        reset_counts();
        let mut dom = VirtualDom::new_with_props(
            AcknowledgeOnMount,
            AcknowledgeOnMountProps { clicks: 3 },
        );
        dom.rebuild_in_place();
        pump(&mut dom).await;

        // only the last hide is still scheduled
        assert_eq!(started() - dropped(), 1);

        drop(dom);
        assert_eq!(started(), dropped());
    }
}
