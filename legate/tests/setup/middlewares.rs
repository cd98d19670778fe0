/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */
use std::sync::{Arc, Mutex};

use legate::prelude::*;

use crate::setup::messages::*;

/// Appends enter/exit markers around every hook, tagged with a label, so
/// tests can assert the exact traversal order of the pipeline.
pub struct RecordingMiddleware {
    label: &'static str,
    log: Arc<Mutex<Vec<String>>>,
}

impl RecordingMiddleware {
    pub fn new(label: &'static str, log: Arc<Mutex<Vec<String>>>) -> Self {
        Self { label, log }
    }

    fn record(&self, marker: &str) {
        self.log
            .lock()
            .unwrap()
            .push(format!("{}:{}", self.label, marker));
    }
}

#[async_trait::async_trait]
impl Middleware for RecordingMiddleware {
    async fn handle_command(
        &self,
        command: &dyn Message,
        next: CommandNext<'_>,
        cancel: &CancellationToken,
    ) -> Result<(), DispatchError> {
        self.record("command:enter");
        let outcome = next.invoke(command, cancel).await;
        self.record("command:exit");
        outcome
    }

    async fn handle_query(
        &self,
        query: &dyn Message,
        next: QueryNext<'_>,
        cancel: &CancellationToken,
    ) -> Result<QueryValue, DispatchError> {
        self.record("query:enter");
        let outcome = next.invoke(query, cancel).await;
        self.record("query:exit");
        outcome
    }

    async fn handle_notification(
        &self,
        notification: &dyn Message,
        next: NotificationNext<'_>,
        cancel: &CancellationToken,
    ) -> Result<(), DispatchError> {
        self.record("notification:enter");
        let outcome = next.invoke(notification, cancel).await;
        self.record("notification:exit");
        outcome
    }
}

/// Forwards a replacement instance for rename commands, uppercasing the name
/// while keeping the original message identity.
pub struct RenamingMiddleware;

#[async_trait::async_trait]
impl Middleware for RenamingMiddleware {
    async fn handle_command(
        &self,
        command: &dyn Message,
        next: CommandNext<'_>,
        cancel: &CancellationToken,
    ) -> Result<(), DispatchError> {
        if let Some(rename) = command.as_any().downcast_ref::<RenameWidget>() {
            let replacement = RenameWidget {
                message_id: rename.message_id,
                widget_id: rename.widget_id,
                name: rename.name.to_uppercase(),
            };
            return next.invoke(&replacement, cancel).await;
        }
        next.invoke(command, cancel).await
    }
}

/// Answers widget counts from a cache, never invoking the rest of the
/// pipeline for that query.
pub struct CachingMiddleware {
    cached: usize,
}

impl CachingMiddleware {
    pub fn new(cached: usize) -> Self {
        Self { cached }
    }
}

#[async_trait::async_trait]
impl Middleware for CachingMiddleware {
    async fn handle_query(
        &self,
        query: &dyn Message,
        next: QueryNext<'_>,
        cancel: &CancellationToken,
    ) -> Result<QueryValue, DispatchError> {
        if query.as_any().is::<CountWidgets>() {
            return Ok(Box::new(self.cached));
        }
        next.invoke(query, cancel).await
    }
}

/// Invokes the remainder of the pipeline a second time when the first
/// attempt fails.
pub struct RetryMiddleware;

#[async_trait::async_trait]
impl Middleware for RetryMiddleware {
    async fn handle_command(
        &self,
        command: &dyn Message,
        next: CommandNext<'_>,
        cancel: &CancellationToken,
    ) -> Result<(), DispatchError> {
        match next.invoke(command, cancel).await {
            Ok(()) => Ok(()),
            Err(_first_failure) => next.invoke(command, cancel).await,
        }
    }
}

/// Stamps widget results on their way back out of the pipeline.
pub struct ResultStampingMiddleware;

#[async_trait::async_trait]
impl Middleware for ResultStampingMiddleware {
    async fn handle_query(
        &self,
        query: &dyn Message,
        next: QueryNext<'_>,
        cancel: &CancellationToken,
    ) -> Result<QueryValue, DispatchError> {
        let value = next.invoke(query, cancel).await?;
        match value.downcast::<Widget>() {
            Ok(widget) => {
                let mut widget = *widget;
                widget.name.push('!');
                Ok(Box::new(widget))
            }
            Err(value) => Ok(value),
        }
    }
}
