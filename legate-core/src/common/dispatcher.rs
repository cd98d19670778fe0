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
use std::any::{type_name, TypeId};
use std::fmt;
use std::sync::Arc;

use static_assertions::assert_impl_all;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::common::{CommandNext, NotificationNext, QueryNext};
use crate::message::DispatchError;
use crate::traits::{Command, Message, Middleware, Notification, Query, ServiceLocator};

/// A mediator acts as a single point of entry for command, notification, and
/// query execution while providing extensibility through a middleware based
/// pipeline.
///
/// The middleware ordering is snapshotted from the service locator once, at
/// construction, and applied identically to every command, query, and
/// notification dispatched through this instance. The dispatcher keeps no
/// per-call state, so concurrent calls to [`run`](Dispatcher::run),
/// [`query`](Dispatcher::query), and [`broadcast`](Dispatcher::broadcast) on a
/// shared instance are safe.
#[derive(Clone)]
pub struct Dispatcher {
    locator: Arc<dyn ServiceLocator>,
    /// The middlewares, stored innermost first. The pipeline peels from the
    /// back of this list, so the first-registered middleware runs outermost.
    middlewares: Vec<Arc<dyn Middleware>>,
}

assert_impl_all!(Dispatcher: Send, Sync);

impl Dispatcher {
    /// Starts building a dispatcher.
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::default()
    }

    /// Executes a command asynchronously by invoking the matching handler
    /// through the middleware pipeline.
    ///
    /// The command is borrowed for the duration of the call and is never
    /// copied by the pipeline. The cancellation token is threaded unchanged
    /// through every middleware and into the handler; any link may observe it
    /// and abort before calling its continuation.
    ///
    /// Fails with [`DispatchError::HandlerNotFound`] when no handler is
    /// registered for the command's type, and otherwise surfaces whatever the
    /// handler or a middleware raised.
    pub async fn run<C>(&self, command: &C, cancel: &CancellationToken) -> Result<(), DispatchError>
    where
        C: Command,
    {
        let handler = self
            .locator
            .command_handler(TypeId::of::<C>())
            .ok_or_else(|| DispatchError::HandlerNotFound {
                message_type: type_name::<C>(),
            })?;

        trace!(
            message_type = type_name::<C>(),
            message_id = %command.message_id(),
            "dispatching command"
        );

        let next = CommandNext {
            middlewares: &self.middlewares,
            handler: &handler,
        };
        next.invoke(command, cancel).await
    }

    /// Executes a query asynchronously by invoking the matching handler
    /// through the middleware pipeline, returning the result the innermost
    /// handler produced after it has passed back out through every middleware.
    ///
    /// Resolution is keyed by the exact `(query type, result type)` pair and
    /// fails with [`DispatchError::HandlerNotFound`] when no such handler is
    /// registered.
    pub async fn query<Q>(
        &self,
        query: &Q,
        cancel: &CancellationToken,
    ) -> Result<Q::Result, DispatchError>
    where
        Q: Query,
    {
        let handler = self
            .locator
            .query_handler(TypeId::of::<Q>(), TypeId::of::<Q::Result>())
            .ok_or_else(|| DispatchError::HandlerNotFound {
                message_type: type_name::<Q>(),
            })?;

        trace!(
            message_type = type_name::<Q>(),
            message_id = %query.message_id(),
            "dispatching query"
        );

        let next = QueryNext {
            middlewares: &self.middlewares,
            handler: &handler,
        };
        let value = next.invoke(query, cancel).await?;

        value
            .downcast::<Q::Result>()
            .map(|result| *result)
            .map_err(|_| DispatchError::TypeMismatch {
                expected: type_name::<Q::Result>(),
            })
    }

    /// Broadcasts a notification asynchronously by invoking every matching
    /// handler through the middleware pipeline.
    ///
    /// The terminal step starts all resolved handlers concurrently and joins
    /// them; an empty handler set is a successful, immediate completion, not
    /// an error. When handlers fail, every failure is surfaced together in
    /// [`DispatchError::Broadcast`].
    pub async fn broadcast<N>(
        &self,
        notification: &N,
        cancel: &CancellationToken,
    ) -> Result<(), DispatchError>
    where
        N: Notification,
    {
        let handlers = self.locator.notification_handlers(TypeId::of::<N>());

        trace!(
            message_type = type_name::<N>(),
            message_id = %notification.message_id(),
            handler_count = handlers.len(),
            "broadcasting notification"
        );

        let next = NotificationNext {
            middlewares: &self.middlewares,
            handlers: &handlers,
        };
        next.invoke(notification, cancel).await
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("middlewares", &self.middlewares.len())
            .finish_non_exhaustive()
    }
}

/// Builds a [`Dispatcher`] from a service locator handle.
#[derive(Default)]
pub struct DispatcherBuilder {
    locator: Option<Arc<dyn ServiceLocator>>,
}

impl DispatcherBuilder {
    /// Sets the service locator the dispatcher resolves handlers and
    /// middlewares against.
    pub fn locator(mut self, locator: Arc<dyn ServiceLocator>) -> Self {
        self.locator = Some(locator);
        self
    }

    /// Finishes construction, snapshotting the locator's middleware list.
    ///
    /// Fails with [`DispatchError::Configuration`] when no locator was
    /// supplied.
    pub fn build(self) -> Result<Dispatcher, DispatchError> {
        let locator = self.locator.ok_or_else(|| {
            DispatchError::Configuration("a dispatcher requires a service locator".to_string())
        })?;

        // Stored in reverse so the per-call composition peels middlewares
        // from the back, running the first-registered one outermost.
        let mut middlewares = locator.middlewares();
        middlewares.reverse();

        trace!(middleware_count = middlewares.len(), "dispatcher built");

        Ok(Dispatcher {
            locator,
            middlewares,
        })
    }
}

impl fmt::Debug for DispatcherBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatcherBuilder")
            .field("locator", &self.locator.is_some())
            .finish()
    }
}
