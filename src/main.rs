use overlay_notifications::headless::TracePainter;
use overlay_notifications::{
    HeadlessHost, NotificationArgs, Notifications, NotificationsConfig, Rect, Size, WindowHost,
    WindowId, calc_perc,
};
use overlay_notifications_util::{AD_HOC, PAGE_INFO};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const TICK_MS: u64 = 50;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    #[cfg(feature = "systemd")]
    if let Ok(journald) = tracing_journald::layer() {
        tracing_subscriber::registry()
            .with(filter)
            .with(journald.with_syslog_identifier(overlay_notifications_config::ID.to_string()))
            .init();
        return;
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

fn load_config() -> anyhow::Result<NotificationsConfig> {
    match std::env::args().nth(1) {
        Some(path) => Ok(NotificationsConfig::load_from_path(&PathBuf::from(path))?),
        None => Ok(NotificationsConfig::default()),
    }
}

/// Let virtual time pass in ticks, like an event loop pumping timers.
async fn pump(notifications: &mut Notifications<HeadlessHost>, ms: u64) {
    let mut elapsed = 0;
    while elapsed < ms {
        tokio::time::sleep(Duration::from_millis(TICK_MS)).await;
        notifications.advance(TICK_MS);
        elapsed += TICK_MS;
    }
}

fn dump(notifications: &Notifications<HeadlessHost>, canvas: WindowId) -> anyhow::Result<()> {
    let rects: Vec<Rect> = notifications
        .list_for_parent(canvas)
        .map(|n| notifications.host().window_rect(n.window()))
        .collect();
    info!(stack = %serde_json::to_string(&rects)?, "on screen");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    color_backtrace::install();
    init_logging();

    let config = load_config()?;
    let mut host = HeadlessHost::new();
    let canvas = host.add_canvas(Size::new(800, 600));
    let mut notifications = Notifications::new(host, config);

    notifications.show_notification(NotificationArgs::new(canvas, "Page 1/10").group(*PAGE_INFO));
    notifications.show_notification(NotificationArgs::new(canvas, "Page 2/10").group(*PAGE_INFO));
    notifications.show_temporary_notification(canvas, "Saving…", 1000);
    notifications.show_notification(
        NotificationArgs::new(canvas, "Copied to clipboard")
            .group(*AD_HOC)
            .timeout_ms(500),
    );

    let search = notifications.show_notification(
        NotificationArgs::new(canvas, "Searching…").on_removed(|n, id| {
            info!(?id, "search notification dismissed");
            n.remove_notification(id);
        }),
    );
    dump(&notifications, canvas)?;

    if let Some(search) = search {
        for page in 1..=10 {
            if !notifications.is_notification_valid(search) {
                break;
            }
            let msg = format!("Searching page {page} of 10");
            notifications.update_notification_progress(search, &msg, calc_perc(page, 10));
            pump(&mut notifications, 100).await;
        }

        let mut painter = TracePainter::default();
        if let Some(n) = notifications.get(search) {
            notifications.paint(n.window(), &mut painter);
        }
        for line in &painter.lines {
            info!("{}", line);
        }
        notifications.remove_notification(search);
    }

    notifications.show_warning_notification(canvas, "Document is read-only", -1);
    dump(&notifications, canvas)?;

    let timeout = u64::from(notifications.config().default_timeout_ms);
    pump(&mut notifications, timeout + TICK_MS).await;
    dump(&notifications, canvas)?;
    info!(remaining = notifications.len(), "done");
    Ok(())
}
