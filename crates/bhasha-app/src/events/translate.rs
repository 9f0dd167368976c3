use std::sync::Arc;

use bhasha_core::session::Session;
use bhasha_core::types::AppEvent;
use bhasha_translate::{TranslateTransport, TranslationEngine};
use kanal::AsyncSender;

/// Kicks off a translation attempt if the session accepts one. The
/// engine runs on its own task; the outcome re-enters the event loop as
/// `TranslationFinished` so the session is only ever touched there.
pub fn start_translation<T>(
    session: &mut Session,
    engine: &Arc<TranslationEngine<T>>,
    loopback_tx: &AsyncSender<AppEvent>,
) where
    T: TranslateTransport + 'static,
{
    let Some(request) = session.begin_translate() else {
        return;
    };

    tracing::debug!(
        source = %request.source_code,
        target = %request.target_code,
        chars = request.text.chars().count(),
        "starting translation attempt"
    );

    let engine = engine.clone();
    let tx = loopback_tx.clone();
    tokio::spawn(async move {
        let result = engine.translate(&request).await;
        if let Err(e) = tx.send(AppEvent::TranslationFinished(result)).await {
            tracing::error!("failed to deliver translation outcome: {e}");
        }
    });
}
