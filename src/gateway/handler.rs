// src/gateway/handler.rs
//
// Message Handler - per-message pipeline
//
// Control flow: incoming text → ReferenceExtractor → (per reference)
// CardResolver → ResponseFormatter → transport. References within one
// message are resolved and answered strictly in the order they appear; a
// failure on one reference never aborts the remaining ones.

use std::sync::Arc;

use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::domain::ResolutionOutcome;
use crate::format::ResponseFormatter;
use crate::gateway::{ChatTransport, IncomingMessage};
use crate::services::{CardResolver, ReferenceExtractor};

pub struct MessageHandler {
    extractor: ReferenceExtractor,
    resolver: CardResolver,
    formatter: ResponseFormatter,
    transport: Arc<dyn ChatTransport>,
    bot_user_id: String,
    not_found_reaction: String,
}

impl MessageHandler {
    pub fn new(
        config: &Config,
        catalog: Arc<dyn CatalogClient>,
        transport: Arc<dyn ChatTransport>,
    ) -> Self {
        Self {
            extractor: ReferenceExtractor::default(),
            resolver: CardResolver::new(catalog),
            formatter: ResponseFormatter::new(config.response_mode, &config.card_link_base),
            transport,
            bot_user_id: config.bot_user_id.clone(),
            not_found_reaction: config.not_found_reaction.clone(),
        }
    }

    /// Process one inbound message end to end.
    ///
    /// Self-authored messages and messages without a reference pattern are
    /// ignored silently. Each failed reference produces one reaction glyph
    /// and a log line; no descriptive error text goes to the channel.
    pub async fn handle(&self, message: &IncomingMessage) {
        if !self.bot_user_id.is_empty() && message.author_id == self.bot_user_id {
            return;
        }

        for raw in self.extractor.extract(&message.content) {
            match self.resolver.resolve(&raw).await {
                ResolutionOutcome::Found { card, reference } => {
                    let body = self.formatter.format(&reference, &card);
                    if let Err(err) = self
                        .transport
                        .send_message(&message.channel_id, &body)
                        .await
                    {
                        log::error!(
                            "failed to deliver response for {:?}: {}",
                            reference.raw(),
                            err
                        );
                    }
                }
                ResolutionOutcome::NotFound { reference, reason } => {
                    log::info!(
                        "no card found for {:?} (name {:?}): {}",
                        reference.raw(),
                        reference.name(),
                        reason
                    );
                    self.react_not_found(message).await;
                }
                ResolutionOutcome::TransportError { reference, reason } => {
                    log::warn!(
                        "catalog lookup failed for {:?} (name {:?}): {}",
                        reference.raw(),
                        reference.name(),
                        reason
                    );
                    self.react_not_found(message).await;
                }
            }
        }
    }

    /// The only user-visible feedback for a failed reference. The UI does
    /// not distinguish NotFound from TransportError today; the logs do.
    async fn react_not_found(&self, message: &IncomingMessage) {
        if let Err(err) = self
            .transport
            .react(
                &message.channel_id,
                &message.message_id,
                &self.not_found_reaction,
            )
            .await
        {
            log::error!("failed to attach not-found reaction: {}", err);
        }
    }
}
