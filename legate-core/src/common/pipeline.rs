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

//! The per-call pipeline composition: a continuation type per message kind.
//!
//! A continuation borrows the dispatcher's middleware slice together with the
//! handler(s) resolved for the call, and peels one middleware per invocation.
//! The slice is stored innermost first, so peeling from the back runs the
//! first-registered middleware outermost. Continuations are `Copy`; a
//! middleware may invoke its `next` any number of times.

use std::sync::Arc;

use futures::future::{join_all, BoxFuture};
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::common::QueryValue;
use crate::message::{AggregateError, DispatchError};
use crate::traits::{
    AnyCommandHandler, AnyNotificationHandler, AnyQueryHandler, Message, Middleware,
};

/// The remainder of a command pipeline: the not-yet-entered middlewares
/// wrapped around the single resolved handler.
#[derive(Clone, Copy)]
pub struct CommandNext<'a> {
    pub(crate) middlewares: &'a [Arc<dyn Middleware>],
    pub(crate) handler: &'a Arc<dyn AnyCommandHandler>,
}

impl<'a> CommandNext<'a> {
    /// Invokes the rest of the pipeline with `command`, completing once the
    /// terminal handler call has unwound back through every remaining
    /// middleware.
    pub fn invoke<'b>(
        self,
        command: &'b dyn Message,
        cancel: &'b CancellationToken,
    ) -> BoxFuture<'b, Result<(), DispatchError>>
    where
        'a: 'b,
    {
        match self.middlewares.split_last() {
            Some((outermost, remainder)) => outermost.handle_command(
                command,
                CommandNext {
                    middlewares: remainder,
                    handler: self.handler,
                },
                cancel,
            ),
            None => {
                let handler = Arc::clone(self.handler);
                Box::pin(async move { handler.handle_any_command(command, cancel).await })
            }
        }
    }
}

/// The remainder of a query pipeline: the not-yet-entered middlewares wrapped
/// around the single resolved handler. The result travels back out through
/// each middleware as a type-erased [`QueryValue`].
#[derive(Clone, Copy)]
pub struct QueryNext<'a> {
    pub(crate) middlewares: &'a [Arc<dyn Middleware>],
    pub(crate) handler: &'a Arc<dyn AnyQueryHandler>,
}

impl<'a> QueryNext<'a> {
    /// Invokes the rest of the pipeline with `query`, yielding the type-erased
    /// result produced by the innermost handler after every remaining
    /// middleware has passed it back out.
    pub fn invoke<'b>(
        self,
        query: &'b dyn Message,
        cancel: &'b CancellationToken,
    ) -> BoxFuture<'b, Result<QueryValue, DispatchError>>
    where
        'a: 'b,
    {
        match self.middlewares.split_last() {
            Some((outermost, remainder)) => outermost.handle_query(
                query,
                QueryNext {
                    middlewares: remainder,
                    handler: self.handler,
                },
                cancel,
            ),
            None => {
                let handler = Arc::clone(self.handler);
                Box::pin(async move { handler.handle_any_query(query, cancel).await })
            }
        }
    }
}

/// The remainder of a notification pipeline: the not-yet-entered middlewares
/// wrapped around the fan-out join over every resolved handler.
#[derive(Clone, Copy)]
pub struct NotificationNext<'a> {
    pub(crate) middlewares: &'a [Arc<dyn Middleware>],
    pub(crate) handlers: &'a [Arc<dyn AnyNotificationHandler>],
}

impl<'a> NotificationNext<'a> {
    /// Invokes the rest of the pipeline with `notification`.
    ///
    /// The terminal step starts every handler without waiting for the others
    /// and completes only once all of them have completed. An empty handler
    /// set completes immediately and successfully. When one or more handlers
    /// fail, the remainder are still awaited and every failure is surfaced in
    /// the aggregate.
    pub fn invoke<'b>(
        self,
        notification: &'b dyn Message,
        cancel: &'b CancellationToken,
    ) -> BoxFuture<'b, Result<(), DispatchError>>
    where
        'a: 'b,
    {
        match self.middlewares.split_last() {
            Some((outermost, remainder)) => outermost.handle_notification(
                notification,
                NotificationNext {
                    middlewares: remainder,
                    handlers: self.handlers,
                },
                cancel,
            ),
            None => {
                let handlers: Vec<_> = self.handlers.iter().map(Arc::clone).collect();
                Box::pin(async move {
                    trace!(
                        handler_count = handlers.len(),
                        message_id = %notification.message_id(),
                        "joining notification fan-out"
                    );
                    let outcomes = join_all(
                        handlers
                            .iter()
                            .map(|handler| handler.handle_any_notification(notification, cancel)),
                    )
                    .await;

                    let failures: Vec<DispatchError> =
                        outcomes.into_iter().filter_map(Result::err).collect();

                    if failures.is_empty() {
                        Ok(())
                    } else {
                        Err(DispatchError::Broadcast(AggregateError::new(failures)))
                    }
                })
            }
        }
    }
}
