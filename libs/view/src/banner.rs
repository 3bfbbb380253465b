use std::{sync::Arc, time::Duration};

use tokio::{sync::watch, task::JoinHandle, time::sleep};

pub const BANNER_TTL: Duration = Duration::from_secs(4);

/// The "post added" notice. Each `show` restarts the countdown; the pending
/// hide is aborted when the banner is dropped.
#[derive(Debug)]
pub struct Banner {
    visible: Arc<watch::Sender<bool>>,
    hide: Option<JoinHandle<()>>,
    ttl: Duration,
}

impl Default for Banner {
    fn default() -> Self {
        Self::new(BANNER_TTL)
    }
}

impl Banner {
    pub fn new(ttl: Duration) -> Self {
        let (visible, _) = watch::channel(false);

        Self {
            visible: Arc::new(visible),
            hide: None,
            ttl,
        }
    }

    pub fn is_visible(&self) -> bool {
        *self.visible.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.visible.subscribe()
    }

    pub fn show(&mut self) {
        self.cancel();
        self.visible.send_replace(true);

        let visible = self.visible.clone();
        let ttl = self.ttl;
        self.hide = Some(tokio::spawn(async move {
            sleep(ttl).await;
            visible.send_replace(false);
        }));
    }

    fn cancel(&mut self) {
        if let Some(hide) = self.hide.take() {
            hide.abort();
        }
    }
}

impl Drop for Banner {
    fn drop(&mut self) {
        self.cancel();
    }
}
