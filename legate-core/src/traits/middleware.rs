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
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::common::{CommandNext, NotificationNext, QueryNext, QueryValue};
use crate::message::DispatchError;
use crate::traits::Message;

/// A middleware is used to modify the execution pipeline for commands,
/// notifications, and queries. It may use or change whatever goes through
/// the mediator pipeline, including query results.
///
/// Each hook receives the remainder of the pipeline as a `next` continuation.
/// The continuations are `Copy`, so a middleware may invoke `next` zero times
/// (short-circuit), exactly once (the common case), or several times (retry).
/// A middleware that never invokes `next` for a command or query must produce
/// the completion or result itself.
///
/// A middleware must not assume any particular position in the chain; position
/// is determined solely by registration order in the service locator. Every
/// hook defaults to passing the message through unchanged, so implementations
/// override only the kinds they care about.
#[async_trait]
pub trait Middleware: Send + Sync {
    /// Handles a command on its way to the single registered handler.
    ///
    /// A command makes changes to the system but does not produce a result. It
    /// can broadcast notifications which may result in further changes.
    async fn handle_command(
        &self,
        command: &dyn Message,
        next: CommandNext<'_>,
        cancel: &CancellationToken,
    ) -> Result<(), DispatchError> {
        next.invoke(command, cancel).await
    }

    /// Handles a query on its way to the single registered handler. The
    /// type-erased result passes back through this hook on the way out and
    /// may be inspected or replaced.
    ///
    /// A query does not change but reads the system state to produce a result.
    /// It can broadcast notifications which may result in indirect changes.
    async fn handle_query(
        &self,
        query: &dyn Message,
        next: QueryNext<'_>,
        cancel: &CancellationToken,
    ) -> Result<QueryValue, DispatchError> {
        next.invoke(query, cancel).await
    }

    /// Handles a notification on its way to the fan-out join over every
    /// registered handler.
    async fn handle_notification(
        &self,
        notification: &dyn Message,
        next: NotificationNext<'_>,
        cancel: &CancellationToken,
    ) -> Result<(), DispatchError> {
        next.invoke(notification, cancel).await
    }
}
