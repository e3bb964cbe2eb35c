//! Message loop executing commands against a notice source

use std::collections::VecDeque;

use crate::commands::Cmd;
use crate::messages::{ClientMsg, Msg};
use crate::model::ShellModel;
use crate::update::update;

use super::notices::{collect_server_notices, NoticeSource};

/// A shell model plus the collaborators its commands need
pub struct Shell<S: NoticeSource> {
    model: ShellModel,
    source: S,
}

impl<S: NoticeSource> Shell<S> {
    pub fn new(model: ShellModel, source: S) -> Self {
        Self { model, source }
    }

    pub fn model(&self) -> &ShellModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut ShellModel {
        &mut self.model
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_model(self) -> ShellModel {
        self.model
    }

    /// Apply a message and run every command it leads to
    ///
    /// Messages produced by commands are applied in order before returning.
    pub async fn send(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let Some(cmd) = update(&mut self.model, msg) else {
                continue;
            };

            match cmd {
                Cmd::RefreshServerNotices { room_filter } => {
                    if let Some(reply) = self.refresh_server_notices(room_filter.as_deref()).await {
                        inbox.push_back(reply);
                    }
                }
            }
        }
    }

    async fn refresh_server_notices(&self, room_filter: Option<&str>) -> Option<Msg> {
        match collect_server_notices(&self.source, room_filter).await {
            Ok(Some(events)) => Some(Msg::Client(ClientMsg::ServerNoticesLoaded(events))),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Failed to refresh server notices: {:#}", e);
                None
            }
        }
    }
}
