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
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::anyhow;
use legate::prelude::*;

use crate::setup::messages::*;

/// Records every widget id it creates into a shared list.
pub struct CreateWidgetHandler {
    created: Arc<Mutex<Vec<u64>>>,
}

impl CreateWidgetHandler {
    pub fn new(created: Arc<Mutex<Vec<u64>>>) -> Self {
        Self { created }
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreateWidget> for CreateWidgetHandler {
    async fn handle_command(
        &self,
        command: &CreateWidget,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        self.created.lock().unwrap().push(command.widget_id);
        Ok(())
    }
}

/// Pushes a single marker into the shared pipeline log, so ordering tests can
/// see exactly when the terminal handler ran.
pub struct MarkingCommandHandler {
    log: Arc<Mutex<Vec<String>>>,
}

impl MarkingCommandHandler {
    pub fn new(log: Arc<Mutex<Vec<String>>>) -> Self {
        Self { log }
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreateWidget> for MarkingCommandHandler {
    async fn handle_command(
        &self,
        _command: &CreateWidget,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        self.log.lock().unwrap().push("handler".to_string());
        Ok(())
    }
}

/// Records the name each rename arrived with.
pub struct RenameWidgetHandler {
    seen_names: Arc<Mutex<Vec<String>>>,
}

impl RenameWidgetHandler {
    pub fn new(seen_names: Arc<Mutex<Vec<String>>>) -> Self {
        Self { seen_names }
    }
}

#[async_trait::async_trait]
impl CommandHandler<RenameWidget> for RenameWidgetHandler {
    async fn handle_command(
        &self,
        command: &RenameWidget,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        self.seen_names.lock().unwrap().push(command.name.clone());
        Ok(())
    }
}

/// Always fails.
pub struct FailingCommandHandler;

#[async_trait::async_trait]
impl CommandHandler<CreateWidget> for FailingCommandHandler {
    async fn handle_command(
        &self,
        _command: &CreateWidget,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        Err(anyhow!("widget storage rejected the command"))
    }
}

/// Fails on the first attempt, succeeds afterwards.
pub struct FlakyCommandHandler {
    attempts: Arc<AtomicUsize>,
}

impl FlakyCommandHandler {
    pub fn new(attempts: Arc<AtomicUsize>) -> Self {
        Self { attempts }
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreateWidget> for FlakyCommandHandler {
    async fn handle_command(
        &self,
        _command: &CreateWidget,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        if self.attempts.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(anyhow!("transient widget storage failure"))
        } else {
            Ok(())
        }
    }
}

/// Aborts when the caller's cancellation signal is already set.
pub struct CancelAwareCommandHandler;

#[async_trait::async_trait]
impl CommandHandler<CreateWidget> for CancelAwareCommandHandler {
    async fn handle_command(
        &self,
        _command: &CreateWidget,
        cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        if cancel.is_cancelled() {
            return Err(anyhow!("widget creation cancelled"));
        }
        Ok(())
    }
}

/// Answers widget lookups with a deterministic read model.
pub struct GetWidgetHandler;

#[async_trait::async_trait]
impl QueryHandler<GetWidget> for GetWidgetHandler {
    async fn handle_query(
        &self,
        query: &GetWidget,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<Widget> {
        Ok(Widget {
            widget_id: query.widget_id,
            name: format!("widget-{}", query.widget_id),
        })
    }
}

/// Counts widgets, recording how often it actually ran.
pub struct CountWidgetsHandler {
    invocations: Arc<AtomicUsize>,
}

impl CountWidgetsHandler {
    pub fn new(invocations: Arc<AtomicUsize>) -> Self {
        Self { invocations }
    }
}

#[async_trait::async_trait]
impl QueryHandler<CountWidgets> for CountWidgetsHandler {
    async fn handle_query(
        &self,
        _query: &CountWidgets,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<usize> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        Ok(7)
    }
}

/// Counts how many notifications reached it, after a short yield so sibling
/// handlers overlap.
pub struct CountingNotificationHandler {
    invocations: Arc<AtomicUsize>,
}

impl CountingNotificationHandler {
    pub fn new(invocations: Arc<AtomicUsize>) -> Self {
        Self { invocations }
    }
}

#[async_trait::async_trait]
impl NotificationHandler<WidgetCreated> for CountingNotificationHandler {
    async fn handle_notification(
        &self,
        _notification: &WidgetCreated,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        tokio::time::sleep(Duration::from_millis(5)).await;
        self.invocations.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Always fails, tagged so aggregates can be inspected.
pub struct FailingNotificationHandler {
    label: &'static str,
}

impl FailingNotificationHandler {
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }
}

#[async_trait::async_trait]
impl NotificationHandler<WidgetCreated> for FailingNotificationHandler {
    async fn handle_notification(
        &self,
        _notification: &WidgetCreated,
        _cancel: &CancellationToken,
    ) -> anyhow::Result<()> {
        Err(anyhow!("{} observer failed", self.label))
    }
}
