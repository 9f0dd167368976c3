use std::sync::Arc;

use bhasha_config::session::SessionConfig;
use bhasha_core::language::{find_language, supported_languages};
use bhasha_core::session::Session;
use bhasha_core::types::AppEvent;
use bhasha_translate::{TranslateTransport, TranslationEngine};
use kanal::{AsyncReceiver, AsyncSender};

use crate::state::AppState;

pub mod translate;

use translate::start_translation;

/// Session's main loop and the single writer of session state. Every
/// mutation publishes a fresh snapshot to the collaborator.
///
/// Translation attempts run on their own task and come back through
/// `loopback_tx` as `TranslationFinished`, so their completion is
/// serialized with every other mutation. A `Shutdown` received while an
/// attempt is in flight is deferred until the attempt lands.
pub async fn event_loop<T>(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    loopback_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    engine: Arc<TranslationEngine<T>>,
) -> anyhow::Result<()>
where
    T: TranslateTransport + 'static,
{
    let mut session = {
        let config = state.config.read().await;
        session_from_config(&config.session)
    };

    tracing::info!("session loop started, waiting for events");
    app_to_ui_tx
        .send(AppEvent::StateChanged(session.snapshot()))
        .await?;

    let mut shutdown_requested = false;
    loop {
        let event = ui_to_app_rx.recv().await?;
        match event {
            AppEvent::SetInputText(text) => session.set_input_text(text),
            AppEvent::SetSourceLanguage(language) => session.set_source_language(language),
            AppEvent::SetTargetLanguage(language) => session.set_target_language(language),
            AppEvent::SetErrorMessage(message) => session.set_error_message(message),
            AppEvent::SwapLanguages => {
                if session.swap_languages() {
                    start_translation(&mut session, &engine, &loopback_tx);
                }
            }
            AppEvent::Translate => start_translation(&mut session, &engine, &loopback_tx),
            AppEvent::TranslationFinished(result) => session.finish_translate(result),
            AppEvent::Shutdown => shutdown_requested = true,
            AppEvent::StateChanged(_) => {
                // collaborator-bound, nothing to do here
            }
        }

        let snapshot = session.snapshot();
        let is_loading = snapshot.is_loading;
        app_to_ui_tx.send(AppEvent::StateChanged(snapshot)).await?;

        if shutdown_requested && !is_loading {
            break;
        }
    }

    tracing::info!("session loop stopped");
    Ok(())
}

fn session_from_config(config: &SessionConfig) -> Session {
    let languages = supported_languages();
    let source = find_language(&config.source_lang)
        .unwrap_or(&languages[0])
        .clone();
    let target = find_language(&config.target_lang)
        .unwrap_or(&languages[1])
        .clone();
    Session::new(source, target)
}
